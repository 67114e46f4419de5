//! Core data types for Sprout package metadata.
//!
//! This module provides the fundamental types used throughout Sprout:
//! - Version and specifier types for dependency constraints
//! - Requirement and entry-point string forms
//! - The PackageMetadata record handed to the packaging backend

pub mod entry_point;
pub mod metadata;
pub mod requirement;
pub mod specifier;
pub mod version;

// Re-export all public types
pub use entry_point::{EntryPoint, EntryPointError};
pub use metadata::{is_valid_package_name, PackageMetadata};
pub use requirement::{Requirement, RequirementError};
pub use specifier::{Op, Specifier, SpecifierSet};
pub use version::{Version, VersionError};
