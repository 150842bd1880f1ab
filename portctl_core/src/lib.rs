//! `portctl_core` reads the `CONTROL` files that describe ports and built
//! packages. A control file is a sequence of paragraphs separated by blank
//! lines, and each paragraph is a set of `Field-Name: value` lines.
//!
//! ## Format
//!
//! ```text
//! Source: zlib
//! Version: 1.2.11
//! Description: A compression library
//!   with a value continued over two lines
//!
//! Source: curl
//! Version: 7.55.1
//! ```
//!
//! - Field names match `[A-Za-z0-9-]+` and are followed directly by `:`.
//!   Spaces and tabs after the colon are not part of the value.
//! - A line that starts with a space or tab and is not blank continues the
//!   previous value. Lines are joined with `\n` and the continuation keeps its
//!   leading whitespace.
//! - A blank line ends the paragraph. `\n`, `\r\n` and `\r` are all accepted
//!   and never stored.
//! - A field name may appear only once per paragraph.
//!
//! ## Modules
//!
//! - [`config`] — `portctl.toml` discovery and the resolved install paths.
//! - [`repository`] — Loading ports and cached packages from disk.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use portctl_core::FileSystem;
//! use portctl_core::extract_port_names_and_versions;
//! use portctl_core::load_all_ports;
//! use portctl_core::parse_single_paragraph;
//!
//! let paragraph = parse_single_paragraph("Source: zlib\nVersion: 1.2.11\n").unwrap();
//! assert_eq!(paragraph.field("Version"), Some("1.2.11"));
//!
//! let ports = load_all_ports(&FileSystem::default(), Path::new("ports"), &[]).unwrap();
//! for (name, version) in extract_port_names_and_versions(&ports) {
//! 	println!("{name} {version}");
//! }
//! ```

pub use config::*;
pub use document::Document;
pub use error::*;
pub use loader::*;
pub use manifest::*;
pub use paragraph::Paragraph;
pub use repository::*;

pub mod config;
mod cursor;
mod document;
#[allow(unused_assignments)]
mod error;
mod field;
mod loader;
mod manifest;
mod paragraph;
pub mod repository;

#[cfg(test)]
mod __fixtures;
