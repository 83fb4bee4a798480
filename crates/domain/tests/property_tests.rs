use std::collections::HashMap;

use blog_stats_domain::BlogRecord;
use blog_stats_domain::analytics::{favorite_blog, most_blogs, most_likes, total_likes};
use blog_stats_shared_kernel::LikeCount;
use proptest::collection::vec;
use proptest::prelude::*;

// Short author alphabet so generated lists actually collide on authors.
fn arb_blog() -> impl Strategy<Value = BlogRecord> {
    ("[a-z]{1,12}", "[a-e]{1,3}", 0u64..1_000).prop_map(|(title, author, likes)| {
        let url = format!("https://blog.example/{title}");
        BlogRecord::new(title, author, url, likes)
    })
}

proptest! {
    #[test]
    fn total_equals_arithmetic_sum(blogs in vec(arb_blog(), 0..40)) {
        let expected: u64 = blogs.iter().map(|b| b.likes.value()).sum();
        prop_assert_eq!(total_likes(&blogs), LikeCount::new(expected));
    }

    #[test]
    fn total_is_invariant_under_reordering(
        (blogs, shuffled) in vec(arb_blog(), 0..40)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        prop_assert_eq!(total_likes(&blogs), total_likes(&shuffled));
    }

    #[test]
    fn favorite_is_the_earliest_maximal_record(blogs in vec(arb_blog(), 1..40)) {
        let favorite = favorite_blog(&blogs).expect("non-empty input");
        let max = blogs.iter().map(|b| b.likes).max().expect("non-empty input");
        prop_assert_eq!(favorite.likes, max);

        let earliest = blogs.iter().find(|b| b.likes == max).expect("max exists");
        prop_assert_eq!(&favorite.title, &earliest.title);
        prop_assert_eq!(&favorite.author, &earliest.author);
    }

    #[test]
    fn most_blogs_value_is_the_per_author_maximum(blogs in vec(arb_blog(), 1..40)) {
        let mut counts: HashMap<&str, u64> = HashMap::new();
        for blog in &blogs {
            *counts.entry(blog.author.as_str()).or_insert(0) += 1;
        }
        let max = counts.values().copied().max().expect("non-empty input");

        let top = most_blogs(&blogs).expect("non-empty input");
        prop_assert_eq!(top.blogs.value(), max);
        prop_assert_eq!(counts[top.author.as_str()], max);
    }

    #[test]
    fn most_likes_value_is_the_per_author_maximum(blogs in vec(arb_blog(), 1..40)) {
        let mut sums: HashMap<&str, u64> = HashMap::new();
        for blog in &blogs {
            *sums.entry(blog.author.as_str()).or_insert(0) += blog.likes.value();
        }
        let max = sums.values().copied().max().expect("non-empty input");

        let top = most_likes(&blogs).expect("non-empty input");
        prop_assert_eq!(top.likes.value(), max);
        prop_assert_eq!(sums[top.author.as_str()], max);
    }
}

#[test]
fn empty_input_yields_the_documented_sentinels() {
    assert_eq!(total_likes(&[]), LikeCount::zero());
    assert_eq!(favorite_blog(&[]), None);
    assert_eq!(most_blogs(&[]), None);
    assert_eq!(most_likes(&[]), None);
}
