//! Reusable UI components for the AI-Fasal frontend.
//!
//! Contains the navbar, icons, loading screen and the building blocks of the
//! home dashboard: quick-action tiles, the FAQ accordion and contact cards.

pub mod contact_card;
pub mod faq_accordion;
pub mod icon;
pub mod loading;
pub mod navbar;
pub mod quick_action_card;
pub mod section;

pub use contact_card::*;
pub use faq_accordion::*;
pub use icon::*;
pub use loading::*;
pub use navbar::*;
pub use quick_action_card::*;
pub use section::*;
