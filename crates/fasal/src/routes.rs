//! Client-side route paths shared by the render model and the router.

/// Where unauthenticated visitors are sent.
pub const ENTRY: &str = "/";
pub const HOME: &str = "/home";
pub const CROP_YIELD: &str = "/home/crop_yield";
pub const CROP_RECOMMENDATION: &str = "/home/croprecommendation";
pub const SOIL_DATA: &str = "/home/soildata";

/// A request to move the browser to another client-side route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavIntent {
    path: &'static str,
}

impl NavIntent {
    pub const fn to(path: &'static str) -> Self {
        Self { path }
    }

    pub const fn entry() -> Self {
        Self::to(ENTRY)
    }

    pub const fn home() -> Self {
        Self::to(HOME)
    }

    pub fn path(&self) -> &'static str {
        self.path
    }
}

impl std::fmt::Display for NavIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path)
    }
}
