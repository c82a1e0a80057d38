//! Seed data: the built-in admin identity and the home feed's mock posts.

use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;

use crate::domain::{Category, Email, Error, Identity, IdentityId, Post, PostDraft, PostId, Role};

pub const ADMIN_ID: &str = "1";
pub const ADMIN_EMAIL: &str = "admin@atg.world";
pub const ADMIN_AVATAR: &str = "/placeholder.svg?height=40&width=40";

/// Identity every fresh directory starts with.
pub fn admin_identity() -> Result<Identity, Error> {
    let id = IdentityId::new(ADMIN_ID)
        .map_err(|err| Error::internal(format!("invalid seed identity id: {err}")))?;
    let email = Email::new(ADMIN_EMAIL)
        .map_err(|err| Error::internal(format!("invalid seed identity email: {err}")))?;
    Ok(Identity::new(id, email, "Admin", "User", Role::Admin).with_avatar(ADMIN_AVATAR))
}

/// Parse a display label such as `"1.4k views"` or `"800 views"`.
///
/// Returns `None` when the label does not follow that shape.
///
/// # Examples
/// ```
/// use social_backend::example_data::parse_view_label;
///
/// assert_eq!(parse_view_label("2.1k views"), Some(2_100));
/// assert_eq!(parse_view_label("800 views"), Some(800));
/// assert_eq!(parse_view_label("lots"), None);
/// ```
pub fn parse_view_label(label: &str) -> Option<u64> {
    let count = label.trim().strip_suffix("views")?.trim_end();
    let (number, scale) = match count.strip_suffix(|c: char| c.eq_ignore_ascii_case(&'k')) {
        Some(number) => (number, 1_000),
        None => (count, 1),
    };
    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
    if whole.is_empty() || fraction.len() > 3 || (scale == 1 && !fraction.is_empty()) {
        return None;
    }
    let whole: u64 = whole.parse().ok()?;
    let scaled_fraction = if fraction.is_empty() {
        0
    } else {
        let digits = u32::try_from(fraction.len()).ok()?;
        fraction.parse::<u64>().ok()? * scale / 10_u64.pow(digits)
    };
    whole.checked_mul(scale)?.checked_add(scaled_fraction)
}

struct MockPost {
    id: &'static str,
    category: Category,
    title: &'static str,
    excerpt: &'static str,
    author: &'static str,
    views: &'static str,
    image: &'static str,
    age: TimeDelta,
    likes: u64,
    comments: u64,
}

fn mock_posts() -> [MockPost; 6] {
    [
        MockPost {
            id: "1",
            category: Category::Article,
            title: "What if famous brands had regular fonts? Meet RegulaBrands!",
            excerpt: "I've worked in UX for the better part of a decade. From now on, I plan to rei...",
            author: "Sarthak Kamra",
            views: "1.4k views",
            image: "https://www.iiad.edu.in/wp-content/uploads/2022/07/image2-21.webp",
            age: TimeDelta::days(2),
            likes: 24,
            comments: 8,
        },
        MockPost {
            id: "2",
            category: Category::Education,
            title: "Tax Benefits for Investment under National Pension Scheme launched by Government",
            excerpt: "I've worked in UX for the better part of a decade. From now on, I plan to rei...",
            author: "Sarah West",
            views: "1.4k views",
            image: "https://housing.com/news/wp-content/uploads/2024/01/How-to-claim-tax-benefit-on-pre-construction-stage-in-home-loan-f.jpg",
            age: TimeDelta::days(3),
            likes: 12,
            comments: 3,
        },
        MockPost {
            id: "3",
            category: Category::Event,
            title: "Finance & Investment Elite Social Mixer @Lujiazui",
            excerpt: "Join us for an exclusive networking event with finance professionals and investors...",
            author: "Ronal Jones",
            views: "800 views",
            image: "https://deltaadvisors.com.au/wp-content/uploads/2024/06/Money-13.webp",
            age: TimeDelta::weeks(1),
            likes: 18,
            comments: 5,
        },
        MockPost {
            id: "4",
            category: Category::Job,
            title: "Software Developer Opening - Full Stack",
            excerpt: "We are looking for a talented full-stack developer to join our growing team...",
            author: "Komal Sharma",
            views: "2.1k views",
            image: "https://res.cloudinary.com/highereducation/images/f_auto,q_auto/v1694627620/CyberDegrees.org/typical-day-of-security-software-developer/typical-day-of-security-software-developer.jpg?_i=AA",
            age: TimeDelta::days(5),
            likes: 31,
            comments: 12,
        },
        MockPost {
            id: "5",
            category: Category::Article,
            title: "Understanding Modern Web Development Trends",
            excerpt: "A comprehensive guide to the latest trends in web development and what to expect...",
            author: "John Developer",
            views: "3.2k views",
            image: "https://anglara.com/_next/image/?url=https%3A%2F%2Fanglara-strapi-bucket.s3.us-east-1.amazonaws.com%2FTitle_Top_Web_Development_Trends_scaled_dab8824422_1f75243f05.webp&w=1920&q=75",
            age: TimeDelta::days(1),
            likes: 45,
            comments: 15,
        },
        MockPost {
            id: "6",
            category: Category::Education,
            title: "AI & Machine Learning Workshop",
            excerpt: "Learn the fundamentals of AI and ML in this comprehensive workshop series...",
            author: "AI Academy",
            views: "1.8k views",
            image: "https://thefusioneer.com/wp-content/uploads/2023/11/5-AI-Advancements-to-Expect-in-the-Next-10-Years-scaled.jpeg",
            age: TimeDelta::days(4),
            likes: 28,
            comments: 7,
        },
    ]
}

fn into_post(mock: MockPost, now: DateTime<Utc>) -> Result<Post, Error> {
    let id = PostId::new(mock.id)
        .map_err(|err| Error::internal(format!("invalid seed post id: {err}")))?;
    let views = parse_view_label(mock.views)
        .ok_or_else(|| Error::internal(format!("invalid seed view label: {}", mock.views)))?;
    Post::new(PostDraft {
        id,
        category: mock.category,
        title: mock.title.to_owned(),
        content: mock.excerpt.to_owned(),
        author: mock.author.to_owned(),
        created_at: now - mock.age,
        views,
        image: Some(mock.image.to_owned()),
        likes: mock.likes,
        comments: mock.comments,
    })
    .map_err(|err| Error::internal(format!("invalid seed post: {err}")))
}

/// The home feed's fixed posts, dated relative to `clock`.
pub fn home_feed_posts(clock: &dyn Clock) -> Result<Vec<Post>, Error> {
    let now = clock.utc();
    mock_posts()
        .into_iter()
        .map(|mock| into_post(mock, now))
        .collect()
}

#[cfg(test)]
mod tests {
    //! Regression coverage for seed data.
    use rstest::rstest;

    use super::*;
    use crate::test_support::{MutableClock, fixture_timestamp};

    #[rstest]
    #[case("1.4k views", Some(1_400))]
    #[case("2.1k views", Some(2_100))]
    #[case("3.2k views", Some(3_200))]
    #[case("800 views", Some(800))]
    #[case("12k views", Some(12_000))]
    #[case("1.25k views", Some(1_250))]
    #[case("views", None)]
    #[case("1.4k", None)]
    #[case("1.5 views", None)]
    #[case("abc views", None)]
    fn view_labels_parse(#[case] label: &str, #[case] expected: Option<u64>) {
        assert_eq!(parse_view_label(label), expected);
    }

    #[rstest]
    fn admin_seed_matches_directory_contract() {
        let admin = admin_identity().expect("seed admin");
        assert_eq!(admin.id().as_ref(), "1");
        assert_eq!(admin.email().as_ref(), "admin@atg.world");
        assert_eq!(admin.full_name(), "Admin User");
        assert_eq!(admin.role(), Role::Admin);
        assert_eq!(admin.avatar(), Some(ADMIN_AVATAR));
    }

    #[rstest]
    fn home_feed_has_six_dated_posts() {
        let clock = MutableClock::default();
        let posts = home_feed_posts(&clock).expect("seed posts");

        assert_eq!(posts.len(), 6);
        assert_eq!(posts[0].views(), 1_400);
        assert_eq!(posts[2].views(), 800);
        assert_eq!(
            posts[2].created_at(),
            fixture_timestamp() - TimeDelta::weeks(1)
        );
        assert_eq!(posts[4].likes(), 45);
        assert_eq!(posts[3].category(), Category::Job);
    }
}
