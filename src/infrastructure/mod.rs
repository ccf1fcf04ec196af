//! Platform paths inside the Zellij sandbox.

pub mod paths;

pub use paths::{data_dir, trace_file};
