pub mod counts;

pub use counts::{LikeCount, PostCount};
