//! Infrastructure layer for filesystem and environment interactions.
//!
//! Zellij plugins run in a WASI sandbox where the host filesystem is mounted
//! under `/host`; everything that touches real paths goes through here.

pub mod paths;

pub use paths::{data_dir, expand_tilde, trace_file};
