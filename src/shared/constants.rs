// Navbar hide-on-scroll tuning
// Offsets are percentages of the navbar's own height (translateY)

/// Navbar fully visible
pub const NAVBAR_VISIBLE_OFFSET: f64 = 0.0;

/// Navbar fully hidden above the viewport
pub const NAVBAR_HIDDEN_OFFSET: f64 = -100.0;

/// Scrolling down only starts hiding the navbar below this offset (px)
pub const NAVBAR_HIDE_THRESHOLD: f64 = 100.0;

pub const NAVBAR_TRANSITION: &str = "transform 0.3s ease-out";

/// Deployment base path the static assets are served under
pub const DEFAULT_BASE_PATH: &str = "/react-portfolio";
