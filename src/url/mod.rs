//! URL handling for Pagelens
//!
//! This module prepares caller input into a fetchable page URL and resolves
//! references found on the page against it.

mod prepare;
mod resolve;

// Re-export main functions
pub use prepare::{ensure_scheme, prepare_url};
pub use resolve::{resolve_href, same_host};
