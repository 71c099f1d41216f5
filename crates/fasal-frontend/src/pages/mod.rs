//! Page components for different routes in the application.

pub mod entry;
pub mod feature;
pub mod home;

pub use entry::*;
pub use feature::*;
pub use home::*;
