//! Shared UI crate for Tagscope. Wire models, chart transforms, and views live here.

pub mod charts;
pub mod core;
pub mod views;

mod navbar;
pub mod components {
    pub use super::navbar::Navbar;
}
