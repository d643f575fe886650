//! Directory listing snapshot tool.
//!
//! Enumerates the direct entries of a target directory and writes a
//! pretty-printed rendering of their names to `output/pformat.txt` inside
//! that directory. The architecture separates:
//!
//! - **[`render`]**: Pure formatting over a sequence of names. No I/O,
//!   fully testable in isolation.
//! - **[`listing`] / [`dump`]**: Side-effecting operations (directory
//!   enumeration, output file creation).
//!
//! The binary entry point resolves the process working directory and runs
//! [`dump::dump_listing`] against it; the library operates on an explicit
//! root path so behavior is deterministic under test.

pub mod dump;
pub mod listing;
pub mod logging;
pub mod render;
