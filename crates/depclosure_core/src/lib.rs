//! Core resolution and extraction for depclosure.
//!
//! This crate provides the pieces the closure builder drives, including:
//! - Classifying specifiers (absolute, relative, bare)
//! - Resolving specifiers to files the way node's `require` does
//! - Reading the `main` field of package descriptors
//! - Extracting dependencies from stylesheet, typed-script and script files

mod constants;
mod dialect;
mod extractor;
mod package;
mod resolver;
mod types;

// Re-export public API
pub use constants::{
    INDEX_FILES, JSON_EXTENSION, MODULES_DIR, NATIVE_ADDON_EXTENSION, PACKAGE_DESCRIPTOR,
    SCRIPT_EXTENSIONS, STYLESHEET_EXTENSIONS, TYPED_SCRIPT_EXTENSIONS,
};
pub use dialect::Dialect;
pub use extractor::{dependencies_in, extract_dependencies};
pub use package::PackageDescriptor;
pub use resolver::{Resolver, resolve_path};
pub use types::{SpecKind, Specifier};
