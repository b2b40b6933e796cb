//! Feed composition and the viewer's interaction overlay
//!
//! The store holds the counters of record for submitted posts; seed posts
//! carry their own, bumped by `apply_to_seed`. `InteractionState` only
//! remembers what this viewer did during the session (which posts they
//! liked, what they commented) and decides the direction of the next like
//! toggle.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::sources::{Clock, IdGenerator};
use crate::error::ValidationError;
use crate::store::{Action, StoreState};
use crate::types::{Comment, Post, PostType};

/// Fallback posts shown after store content so a first run is never empty.
pub fn seed_posts() -> Vec<Post> {
    let seed = |id: &str, caption: &str, comments: u32| Post {
        id: id.to_string(),
        post_type: PostType::Personal,
        category: None,
        file: None,
        caption: caption.to_string(),
        likes: 0,
        comments,
        timestamp: DateTime::<Utc>::UNIX_EPOCH,
    };

    vec![
        seed("seed-1", "Exploring new horizons!", 5),
        seed("seed-2", "Campus life at its best ✨", 2),
    ]
}

/// Apply a counter action to the seed post it names.
///
/// Returns `false` when no seed has that id, leaving the seeds untouched.
pub fn apply_to_seed(seeds: &mut [Post], action: &Action) -> bool {
    let Some(post) = action
        .post_id()
        .and_then(|id| seeds.iter_mut().find(|post| post.id == id))
    else {
        return false;
    };

    match action {
        Action::Like(_) => post.likes = post.likes.saturating_add(1),
        Action::Unlike(_) => post.likes = post.likes.saturating_sub(1),
        Action::AddComment(_) => post.comments = post.comments.saturating_add(1),
        Action::AddPost(_) | Action::AddStory(_) => return false,
    }
    true
}

/// Store posts (newest first) followed by the seed posts, neither re-sorted.
pub fn compose_feed<'a>(state: &'a StoreState, seeds: &'a [Post]) -> Vec<&'a Post> {
    state.posts.iter().chain(seeds.iter()).collect()
}

/// Per-session overlay of the viewer's likes and comments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    liked: HashSet<String>,
    comments: HashMap<String, Vec<Comment>>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_liked(&self, post_id: &str) -> bool {
        self.liked.contains(post_id)
    }

    /// Comments the viewer submitted on a post, oldest first
    pub fn comments_for(&self, post_id: &str) -> &[Comment] {
        self.comments
            .get(post_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Which way a like toggle went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeDelta {
    Liked,
    Unliked,
}

impl LikeDelta {
    /// +1 or -1
    pub fn value(&self) -> i32 {
        match self {
            LikeDelta::Liked => 1,
            LikeDelta::Unliked => -1,
        }
    }

    /// The single store action that applies this delta
    pub fn into_action(self, post_id: String) -> Action {
        match self {
            LikeDelta::Liked => Action::Like(post_id),
            LikeDelta::Unliked => Action::Unlike(post_id),
        }
    }
}

/// Flip the viewer's like on a post.
///
/// Membership in the liked set decides the direction; the caller applies
/// the returned delta to the store exactly once.
pub fn toggle_like(state: &InteractionState, post_id: &str) -> (InteractionState, LikeDelta) {
    let mut next = state.clone();
    let delta = if next.liked.remove(post_id) {
        LikeDelta::Unliked
    } else {
        next.liked.insert(post_id.to_string());
        LikeDelta::Liked
    };
    (next, delta)
}

/// Append a comment to the viewer's thread for a post.
///
/// Text is trimmed; blank text is rejected. On success the caller also
/// dispatches `Action::AddComment`.
pub fn submit_comment(
    state: &InteractionState,
    post_id: &str,
    text: &str,
    author: &str,
    ids: &dyn IdGenerator,
    clock: &dyn Clock,
) -> Result<InteractionState, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyComment);
    }

    let mut next = state.clone();
    next.comments
        .entry(post_id.to_string())
        .or_default()
        .push(Comment {
            id: ids.next_id(),
            text: text.to_string(),
            author: author.to_string(),
            timestamp: clock.now(),
        });
    Ok(next)
}

/// A post paired with the viewer's overlay, ready to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedItem<'a> {
    pub post: &'a Post,
    pub liked: bool,
    pub comments: &'a [Comment],
}

pub fn render_feed<'a, I>(posts: I, interaction: &'a InteractionState) -> Vec<FeedItem<'a>>
where
    I: IntoIterator<Item = &'a Post>,
{
    posts
        .into_iter()
        .map(|post| FeedItem {
            post,
            liked: interaction.is_liked(&post.id),
            comments: interaction.comments_for(&post.id),
        })
        .collect()
}

/// Posts the viewer has liked, in input order
pub fn liked_posts<'a, I>(posts: I, interaction: &InteractionState) -> Vec<&'a Post>
where
    I: IntoIterator<Item = &'a Post>,
{
    posts
        .into_iter()
        .filter(|post| interaction.is_liked(&post.id))
        .collect()
}
