// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod json;
pub mod persistence;

pub use json::{BlogInput, JsonBlogSource};
