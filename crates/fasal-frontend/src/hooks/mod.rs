//! Custom hooks shared by the pages.

pub mod use_auth_redirect;
pub mod use_navigate;

pub use use_auth_redirect::*;
pub use use_navigate::*;
