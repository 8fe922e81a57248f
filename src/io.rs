//! This module has the I/O functionality for writing mesh documents to disk.

mod stl;

pub use stl::{ascii_stl_string, write_ascii_stl, write_ascii_stl_file, write_facet};

#[cfg(feature = "stl")]
pub use stl::{write_binary_stl, write_binary_stl_file};
