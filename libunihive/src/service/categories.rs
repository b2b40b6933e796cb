//! Category filters and competition leaderboards
//!
//! Everything here reads a post sequence and returns borrowed subsets in
//! input order (or ranked, for leaderboards). Nothing mutates the store.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::types::{CompetitionCategory, Post, PostType, Story};

/// A category chip: "All" or one specific category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    All,
    Only(CompetitionCategory),
}

impl CategoryFilter {
    pub fn matches(&self, category: Option<CompetitionCategory>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => category == Some(*wanted),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ValidationError;

    /// "all" (any case) or a category label, compared case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<CompetitionCategory>()
            .map(CategoryFilter::Only)
            .map_err(|_| ValidationError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "All"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

pub fn filter_by_type<'a, I>(posts: I, post_type: PostType) -> Vec<&'a Post>
where
    I: IntoIterator<Item = &'a Post>,
{
    posts
        .into_iter()
        .filter(|post| post.post_type == post_type)
        .collect()
}

pub fn filter_by_category<'a, I>(posts: I, post_type: PostType, filter: CategoryFilter) -> Vec<&'a Post>
where
    I: IntoIterator<Item = &'a Post>,
{
    posts
        .into_iter()
        .filter(|post| post.post_type == post_type && filter.matches(post.category))
        .collect()
}

/// Categories seen on competition posts, first appearance first, after "All"
pub fn distinct_categories<'a, I>(posts: I) -> Vec<CategoryFilter>
where
    I: IntoIterator<Item = &'a Post>,
{
    let mut chips = vec![CategoryFilter::All];
    for post in posts {
        if post.post_type != PostType::Competition {
            continue;
        }
        if let Some(category) = post.category {
            let chip = CategoryFilter::Only(category);
            if !chips.contains(&chip) {
                chips.push(chip);
            }
        }
    }
    chips
}

/// Top `n` competition posts in a category by likes.
///
/// The sort is stable, so posts with equal likes keep their input order.
pub fn top_ranked<'a, I>(posts: I, category: CompetitionCategory, n: usize) -> Vec<&'a Post>
where
    I: IntoIterator<Item = &'a Post>,
{
    let mut ranked = filter_by_category(posts, PostType::Competition, CategoryFilter::Only(category));
    ranked.sort_by(|a, b| b.likes.cmp(&a.likes));
    ranked.truncate(n);
    ranked
}

/// Stories whose originating post has the given type, in input order
pub fn stories_of_type<'a, I>(stories: I, post_type: PostType) -> Vec<&'a Story>
where
    I: IntoIterator<Item = &'a Story>,
{
    stories
        .into_iter()
        .filter(|story| story.post_type == post_type)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_LEADERBOARD_SIZE;
    use chrono::{DateTime, Utc};

    fn post(id: &str, post_type: PostType, category: Option<CompetitionCategory>, likes: u32) -> Post {
        Post {
            id: id.to_string(),
            post_type,
            category,
            file: None,
            caption: id.to_string(),
            likes,
            comments: 0,
            timestamp: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    fn ids(posts: &[&Post]) -> Vec<String> {
        posts.iter().map(|p| p.id.clone()).collect()
    }

    fn sample() -> Vec<Post> {
        use CompetitionCategory::*;
        vec![
            post("c1", PostType::Competition, Some(Photography), 2),
            post("b1", PostType::Business, None, 9),
            post("c2", PostType::Competition, Some(Animation), 7),
            post("p1", PostType::Personal, None, 1),
            post("c3", PostType::Competition, Some(Photography), 5),
            post("b2", PostType::Business, None, 0),
        ]
    }

    #[test]
    fn test_filter_by_type_is_stable() {
        let posts = sample();
        assert_eq!(ids(&filter_by_type(&posts, PostType::Business)), vec!["b1", "b2"]);
        assert_eq!(ids(&filter_by_type(&posts, PostType::Personal)), vec!["p1"]);
    }

    #[test]
    fn test_filter_by_category_all_is_passthrough() {
        let posts = sample();
        let all = filter_by_category(&posts, PostType::Competition, CategoryFilter::All);
        assert_eq!(ids(&all), vec!["c1", "c2", "c3"]);
    }

    #[test]
    fn test_filter_by_category_specific() {
        let posts = sample();
        let filter: CategoryFilter = "PHOTOGRAPHY".parse().unwrap();
        let photos = filter_by_category(&posts, PostType::Competition, filter);
        assert_eq!(ids(&photos), vec!["c1", "c3"]);
    }

    #[test]
    fn test_filter_by_category_on_business_only_matches_all() {
        let posts = sample();
        let filter = CategoryFilter::Only(CompetitionCategory::Photography);
        assert!(filter_by_category(&posts, PostType::Business, filter).is_empty());
        assert_eq!(
            filter_by_category(&posts, PostType::Business, CategoryFilter::All).len(),
            2
        );
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!("All".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "short film".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(CompetitionCategory::ShortFilm))
        );
        assert_eq!(
            "Cooking".parse::<CategoryFilter>(),
            Err(ValidationError::UnknownCategory("Cooking".to_string()))
        );
    }

    #[test]
    fn test_distinct_categories_first_appearance() {
        let posts = sample();
        let chips = distinct_categories(&posts);
        assert_eq!(
            chips,
            vec![
                CategoryFilter::All,
                CategoryFilter::Only(CompetitionCategory::Photography),
                CategoryFilter::Only(CompetitionCategory::Animation),
            ]
        );
        assert_eq!(chips[0].to_string(), "All");
    }

    #[test]
    fn test_distinct_categories_empty() {
        let none: Vec<Post> = Vec::new();
        assert_eq!(distinct_categories(&none), vec![CategoryFilter::All]);
    }

    #[test]
    fn test_top_ranked_sorts_by_likes() {
        let posts = sample();
        let ranked = top_ranked(&posts, CompetitionCategory::Photography, DEFAULT_LEADERBOARD_SIZE);
        assert_eq!(ids(&ranked), vec!["c3", "c1"]);
    }

    #[test]
    fn test_top_ranked_ties_keep_input_order() {
        use CompetitionCategory::Photography;
        let posts = vec![
            post("newest", PostType::Competition, Some(Photography), 3),
            post("middle", PostType::Competition, Some(Photography), 5),
            post("older", PostType::Competition, Some(Photography), 3),
            post("oldest", PostType::Competition, Some(Photography), 3),
        ];

        let ranked = top_ranked(&posts, Photography, 10);
        assert_eq!(ids(&ranked), vec!["middle", "newest", "older", "oldest"]);
    }

    #[test]
    fn test_top_ranked_caps_at_n() {
        use CompetitionCategory::Photography;
        let posts: Vec<Post> = (0..15)
            .map(|i| post(&format!("c{}", i), PostType::Competition, Some(Photography), i))
            .collect();

        let ranked = top_ranked(&posts, Photography, 10);
        assert_eq!(ranked.len(), 10);
        assert_eq!(ranked[0].likes, 14);
        assert!(ranked.windows(2).all(|w| w[0].likes >= w[1].likes));
    }

    #[test]
    fn test_stories_of_type() {
        let posts = sample();
        let stories: Vec<Story> = posts
            .iter()
            .filter(|p| p.post_type.is_promoted())
            .map(Story::for_post)
            .collect();

        let business: Vec<&str> = stories_of_type(&stories, PostType::Business)
            .iter()
            .map(|s| s.post_id.as_str())
            .collect();
        assert_eq!(business, vec!["b1", "b2"]);
    }
}
