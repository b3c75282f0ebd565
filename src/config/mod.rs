//! Per-invocation configuration for Pagelens
//!
//! There is no configuration file: a scrape is fully described by its
//! [`ScrapeOptions`], which carry the target URL, the identity profile for
//! the outbound request, and the ordered tag selection for the text
//! extractor.

mod types;
mod validation;

// Re-export types
pub use types::{default_tags, IdentityProfile, ScrapeOptions, TargetTag};

// Re-export validation functions
pub use validation::normalize_tags;
