pub mod aggregate;

pub use aggregate::{
    AuthorLikes, AuthorPosts, FavoriteBlog, favorite_blog, most_blogs, most_likes, total_likes,
};
