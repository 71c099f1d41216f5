//! Context providers for shared application state.

pub mod session;
pub mod theme;

pub use session::*;
pub use theme::*;
