use blog_stats_shared_kernel::LikeCount;
use serde::{Deserialize, Serialize};

/// A single published post as it appears in a blog export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogRecord {
    pub title: String,
    pub author: String,
    pub url: String,
    /// Absent in older exports; decodes to zero.
    #[serde(default)]
    pub likes: LikeCount,
}

impl BlogRecord {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        url: impl Into<String>,
        likes: u64,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            url: url.into(),
            likes: LikeCount::new(likes),
        }
    }
}
