#![allow(clippy::multiple_crate_versions)]

pub mod source;

pub use source::{BlogRecordDto, BlogSource};
