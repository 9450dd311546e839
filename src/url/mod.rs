//! URL handling module for Fathom
//!
//! This module provides the URL normalization used to derive deduplication
//! keys for the visited registry.

mod normalize;

pub use normalize::normalize_url;
