//! Home feed filtering over the seeded mock posts.

use rstest::{fixture, rstest};
use social_backend::domain::{
    Category, CategoryFilter, FeedQuery, Post, SearchScope, category_counts,
};
use social_backend::example_data::home_feed_posts;
use social_backend::test_support::MutableClock;

#[fixture]
fn posts() -> Vec<Post> {
    home_feed_posts(&MutableClock::default()).expect("seed posts")
}

fn titles(posts: &[Post]) -> Vec<&str> {
    posts.iter().map(Post::title).collect()
}

#[rstest]
fn tabs_count_seeded_posts(posts: Vec<Post>) {
    assert_eq!(
        category_counts(&posts).tabs(),
        vec![
            ("All Posts", 6),
            ("Article", 2),
            ("Event", 1),
            ("Education", 2),
            ("Job", 1),
        ]
    );
}

#[rstest]
fn all_posts_tab_keeps_seed_order(posts: Vec<Post>) {
    let category: CategoryFilter = "All Posts".parse().expect("tab label");
    let visible = FeedQuery::new(SearchScope::HomeFeed)
        .with_category(category)
        .apply(&posts);
    assert_eq!(visible, posts);
}

#[rstest]
fn job_tab_shows_only_openings(posts: Vec<Post>) {
    let visible = FeedQuery::new(SearchScope::HomeFeed)
        .with_category(Category::Job)
        .apply(&posts);
    assert_eq!(titles(&visible), vec!["Software Developer Opening - Full Stack"]);
}

#[rstest]
#[case("sarah west", vec!["Tax Benefits for Investment under National Pension Scheme launched by Government"])]
#[case("ACADEMY", vec!["AI & Machine Learning Workshop"])]
fn author_search_finds_home_feed_posts(
    posts: Vec<Post>,
    #[case] term: &str,
    #[case] expected: Vec<&str>,
) {
    let visible = FeedQuery::new(SearchScope::HomeFeed)
        .with_search(term)
        .apply(&posts);
    assert_eq!(titles(&visible), expected);
}

#[rstest]
fn education_search_combines_with_tab(posts: Vec<Post>) {
    let visible = FeedQuery::new(SearchScope::HomeFeed)
        .with_category(Category::Education)
        .with_search("ux")
        .apply(&posts);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].author(), "Sarah West");
}
