//! Descriptor parsing and metadata rendering for Sprout
//!
//! This crate handles parsing and validation of sprout.toml descriptors,
//! loading long descriptions from README files, and rendering the resolved
//! metadata record for an external packaging backend.

pub mod manifest;
pub mod readme;
pub mod render;

// Re-export main types
pub use manifest::{Manifest, PackageSection, MANIFEST_FILE_NAME, TEMPLATE};
pub use readme::load_long_description;
pub use render::{parse_metadata, resolve_metadata, serialize_metadata};

use sprout_core::error::SproutError;

/// Result type for descriptor operations
pub type ConfigResult<T> = Result<T, SproutError>;
