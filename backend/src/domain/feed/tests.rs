//! Tests for category and text filtering.

use chrono::{TimeZone, Utc};
use rstest::{fixture, rstest};

use super::*;
use crate::domain::{PostDraft, PostId};

fn post(id: &str, category: Category, title: &str, content: &str, author: &str) -> Post {
    Post::new(PostDraft {
        id: PostId::new(id).expect("valid id"),
        category,
        title: title.to_owned(),
        content: content.to_owned(),
        author: author.to_owned(),
        created_at: Utc
            .with_ymd_and_hms(2026, 3, 1, 9, 0, 0)
            .single()
            .expect("valid timestamp"),
        views: 0,
        image: None,
        likes: 0,
        comments: 0,
    })
    .expect("valid post")
}

#[fixture]
fn posts() -> Vec<Post> {
    vec![
        post("1", Category::Article, "Regular fonts", "UX musings", "Sarthak Kamra"),
        post("2", Category::Education, "Pension tax", "Benefits explained", "Sarah West"),
        post("3", Category::Event, "Social Mixer", "Finance networking", "Ronal Jones"),
        post("4", Category::Job, "Developer opening", "Full stack role", "Komal Sharma"),
        post("5", Category::Article, "Web trends", "Modern development", "John Developer"),
    ]
}

fn ids(posts: &[Post]) -> Vec<&str> {
    posts.iter().map(|p| p.id().as_str()).collect()
}

#[rstest]
#[case(SearchScope::Dashboard)]
#[case(SearchScope::HomeFeed)]
fn unfiltered_query_is_identity(posts: Vec<Post>, #[case] scope: SearchScope) {
    assert_eq!(FeedQuery::new(scope).apply(&posts), posts);
}

#[rstest]
fn category_filter_keeps_only_matching_posts() {
    let posts = vec![
        post("foo", Category::Article, "Foo", "", "A"),
        post("bar", Category::Job, "Bar", "", "B"),
    ];
    let query = FeedQuery::new(SearchScope::Dashboard).with_category(Category::Job);
    assert_eq!(ids(&query.apply(&posts)), vec!["bar"]);
}

#[rstest]
#[case("FONTS", vec!["1"])]
#[case("develop", vec!["4", "5"])]
#[case("zzz", vec![])]
fn search_is_case_insensitive_substring(
    posts: Vec<Post>,
    #[case] term: &str,
    #[case] expected: Vec<&str>,
) {
    let query = FeedQuery::new(SearchScope::Dashboard).with_search(term);
    assert_eq!(ids(&query.apply(&posts)), expected);
}

#[rstest]
fn author_matches_only_in_home_feed_scope(posts: Vec<Post>) {
    let dashboard = FeedQuery::new(SearchScope::Dashboard).with_search("sarah");
    let home = FeedQuery::new(SearchScope::HomeFeed).with_search("sarah");

    assert!(dashboard.apply(&posts).is_empty());
    assert_eq!(ids(&home.apply(&posts)), vec!["2"]);
}

#[rstest]
fn category_and_search_are_conjunctive(posts: Vec<Post>) {
    let query = FeedQuery::new(SearchScope::HomeFeed)
        .with_category(Category::Article)
        .with_search("develop");
    assert_eq!(ids(&query.apply(&posts)), vec!["5"]);
}

#[rstest]
fn whitespace_term_still_filters(posts: Vec<Post>) {
    let query = FeedQuery::new(SearchScope::Dashboard).with_search(" ");
    assert_eq!(ids(&query.apply(&posts)), vec!["1", "2", "3", "4", "5"]);

    let query = FeedQuery::new(SearchScope::Dashboard).with_search("  ");
    assert!(query.apply(&posts).is_empty());
}

#[rstest]
#[case(SearchScope::Dashboard, "e")]
#[case(SearchScope::HomeFeed, "o")]
fn filtering_is_idempotent(posts: Vec<Post>, #[case] scope: SearchScope, #[case] term: &str) {
    let query = FeedQuery::new(scope)
        .with_category(CategoryFilter::All)
        .with_search(term);
    let once = query.apply(&posts);
    assert_eq!(query.apply(&once), once);
}

#[rstest]
fn output_preserves_input_order(posts: Vec<Post>) {
    let reversed: Vec<Post> = posts.iter().rev().cloned().collect();
    let query = FeedQuery::new(SearchScope::Dashboard).with_category(Category::Article);
    assert_eq!(ids(&query.apply(&reversed)), vec!["5", "1"]);
}

#[rstest]
#[case("all", CategoryFilter::All)]
#[case("All Posts", CategoryFilter::All)]
#[case("Event", CategoryFilter::Only(Category::Event))]
fn category_filter_parses_tab_labels(#[case] raw: &str, #[case] expected: CategoryFilter) {
    assert_eq!(raw.parse::<CategoryFilter>(), Ok(expected));
}

#[rstest]
#[case("All")]
#[case("event")]
fn category_filter_rejects_unknown_labels(#[case] raw: &str) {
    assert!(raw.parse::<CategoryFilter>().is_err());
}

#[rstest]
fn counts_cover_every_tab(posts: Vec<Post>) {
    let counts = category_counts(&posts);
    assert_eq!(counts.total(), 5);
    assert_eq!(counts.get(Category::Article), 2);
    assert_eq!(
        counts.tabs(),
        vec![
            ("All Posts", 5),
            ("Article", 2),
            ("Event", 1),
            ("Education", 1),
            ("Job", 1),
        ]
    );
}

#[rstest]
fn counts_of_empty_feed_are_zero() {
    let counts = category_counts(&[]);
    assert_eq!(counts.total(), 0);
    assert_eq!(counts.get(Category::Job), 0);
}
