//! The shared library for AI-Fasal, the agricultural assistant web frontend.
//!
//! This library holds everything about the home dashboard that does not need a
//! browser: the session model, the static page content, the pure render model
//! with its navigation intents, the redirect guard, the FAQ accordion state,
//! route paths, error handling, logging and macros.

pub mod accordion;
pub mod content;
pub mod errors;
pub mod home;
pub mod log;
pub mod macros;
pub mod redirect;
pub mod routes;
pub mod session;

pub use serde;
pub use serde_json;
pub use tracing;
pub use tracing::{debug, error, info, trace, warn};
