pub mod navbar;
pub mod footer;

pub use navbar::Navbar;
pub use footer::Footer;
