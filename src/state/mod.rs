//! State management module
//!
//! This module contains the core data structures for the application:
//! - Job: One traced execution and its metadata
//! - LogEntry: One row of the hierarchical execution log
//! - Demo traces used before a file is opened

mod demo;
mod job;

pub use demo::demo_jobs;
pub use job::*;
