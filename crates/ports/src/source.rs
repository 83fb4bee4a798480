// crates/ports/src/source.rs
use blog_stats_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// DTO representing one post in a blog export document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogRecordDto {
    pub title: String,
    pub author: String,
    pub url: String,
    /// Older exports omit the field; a missing count means no likes yet.
    #[serde(default)]
    pub likes: u64,
}

/// Port for whatever supplies the ordered record sequence.
///
/// Implementations must preserve the document order of the export;
/// downstream tie-breaking observes it.
pub trait BlogSource: Send + Sync {
    fn fetch(&self) -> Result<Vec<BlogRecordDto>>;
}
