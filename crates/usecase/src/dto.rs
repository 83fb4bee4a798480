use blog_stats_domain::analytics::{
    AuthorLikes, AuthorPosts, FavoriteBlog, favorite_blog, most_blogs, most_likes, total_likes,
};
use blog_stats_domain::model::BlogRecord;
use blog_stats_shared_kernel::LikeCount;
use serde::{Deserialize, Serialize};

/// Aggregate report over one blog export.
///
/// The `Option` fields are `None` for an empty export; that is the
/// "no data" sentinel, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogReport {
    pub blogs: usize,
    pub total_likes: LikeCount,
    pub favorite_blog: Option<FavoriteBlog>,
    pub most_blogs: Option<AuthorPosts>,
    pub most_likes: Option<AuthorLikes>,
}

impl BlogReport {
    pub fn from_records(records: &[BlogRecord]) -> Self {
        Self {
            blogs: records.len(),
            total_likes: total_likes(records),
            favorite_blog: favorite_blog(records),
            most_blogs: most_blogs(records),
            most_likes: most_likes(records),
        }
    }
}
