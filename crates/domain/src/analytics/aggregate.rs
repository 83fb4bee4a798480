use blog_stats_shared_kernel::{LikeCount, PostCount};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::BlogRecord;

/// The most-liked record, projected to the fields callers report on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteBlog {
    pub title: String,
    pub author: String,
    pub likes: LikeCount,
}

/// The author with the highest post count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorPosts {
    pub author: String,
    pub blogs: PostCount,
}

/// The author with the highest cumulative like total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorLikes {
    pub author: String,
    pub likes: LikeCount,
}

/// Sum of `likes` across all records. An empty slice sums to zero.
pub fn total_likes(blogs: &[BlogRecord]) -> LikeCount {
    blogs.iter().fold(LikeCount::zero(), |sum, blog| sum + blog.likes)
}

/// Record with the maximum like count, or `None` for an empty slice.
///
/// Only a strictly higher like count moves the favorite, so on a tie
/// the earliest record in input order wins.
pub fn favorite_blog(blogs: &[BlogRecord]) -> Option<FavoriteBlog> {
    let mut favorite = blogs.first()?;
    for blog in &blogs[1..] {
        if blog.likes > favorite.likes {
            favorite = blog;
        }
    }
    Some(FavoriteBlog {
        title: favorite.title.clone(),
        author: favorite.author.clone(),
        likes: favorite.likes,
    })
}

/// Author with the most posts, or `None` for an empty slice.
///
/// Leader selection is non-strict: an author matching the current
/// leader's count takes the lead, so the last tied author in
/// first-encounter order wins.
pub fn most_blogs(blogs: &[BlogRecord]) -> Option<AuthorPosts> {
    let mut leader: Option<AuthorPosts> = None;
    for (author, tally) in author_tallies(blogs) {
        let takes_lead = match &leader {
            None => true,
            Some(current) => tally.posts >= current.blogs,
        };
        if takes_lead {
            leader = Some(AuthorPosts { author, blogs: tally.posts });
        }
    }
    leader
}

/// Author with the highest like total, or `None` for an empty slice.
///
/// Same non-strict leader selection as [`most_blogs`].
pub fn most_likes(blogs: &[BlogRecord]) -> Option<AuthorLikes> {
    let mut leader: Option<AuthorLikes> = None;
    for (author, tally) in author_tallies(blogs) {
        let takes_lead = match &leader {
            None => true,
            Some(current) => tally.likes >= current.likes,
        };
        if takes_lead {
            leader = Some(AuthorLikes { author, likes: tally.likes });
        }
    }
    leader
}

/// Per-author running totals.
#[derive(Debug, Default, Clone, Copy)]
struct AuthorTally {
    posts: PostCount,
    likes: LikeCount,
}

/// One pass over the records, keyed by author. The map iterates in
/// first-encounter order; the selection passes above depend on that.
fn author_tallies(blogs: &[BlogRecord]) -> IndexMap<String, AuthorTally> {
    let mut tallies: IndexMap<String, AuthorTally> = IndexMap::new();
    for blog in blogs {
        let tally = tallies.entry(blog.author.clone()).or_default();
        tally.posts += PostCount::new(1);
        tally.likes += blog.likes;
    }
    tallies
}
