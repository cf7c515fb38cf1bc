//! File names and extensions used during resolution.
//!
//! Extensions are full suffixes including the leading dot, because they are
//! appended to a specifier as written (`foo` + `.d.ts`), never swapped in.

/// Suffix probed after the caller's candidate extensions
pub const JSON_EXTENSION: &str = ".json";

/// Suffix probed last when loading a specifier as a file
pub const NATIVE_ADDON_EXTENSION: &str = ".node";

/// Index files tried inside a directory, in priority order
pub const INDEX_FILES: &[&str] = &["index.js", "index.json", "index.node"];

/// Descriptor whose `main` field names a directory's entry point
pub const PACKAGE_DESCRIPTOR: &str = "package.json";

/// Module-install directory searched for bare specifiers
pub const MODULES_DIR: &str = "node_modules";

/// Stylesheet imports without an extension get this one appended
pub const STYLESHEET_EXTENSIONS: &[&str] = &[".less"];

pub const TYPED_SCRIPT_EXTENSIONS: &[&str] = &[".ts", ".d.ts"];

pub const SCRIPT_EXTENSIONS: &[&str] = &[".js"];
