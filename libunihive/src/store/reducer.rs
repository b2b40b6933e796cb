//! Pure reducer function for state transitions
//!
//! `(StoreState, Action) -> StoreState`
//!
//! The reducer has NO side effects - it only computes new state values.
//! Lookups that miss leave the state untouched rather than failing.

use super::actions::Action;
use super::state::StoreState;
use crate::types::Post;

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
///
/// # Guarantees
///
/// - Posts and stories are only ever prepended, never removed
/// - `likes` never drops below zero
/// - Unknown post ids are no-ops
pub fn reduce(state: StoreState, action: Action) -> StoreState {
    match action {
        Action::AddPost(post) => {
            let mut posts = state.posts;
            posts.insert(0, post);
            StoreState { posts, ..state }
        }

        Action::AddStory(story) => {
            let mut stories = state.stories;
            stories.insert(0, story);
            StoreState { stories, ..state }
        }

        Action::Like(id) => update_post(state, &id, |post| {
            post.likes = post.likes.saturating_add(1);
        }),

        Action::Unlike(id) => update_post(state, &id, |post| {
            post.likes = post.likes.saturating_sub(1);
        }),

        Action::AddComment(id) => update_post(state, &id, |post| {
            post.comments = post.comments.saturating_add(1);
        }),
    }
}

fn update_post(mut state: StoreState, id: &str, apply: impl FnOnce(&mut Post)) -> StoreState {
    if let Some(post) = state.posts.iter_mut().find(|post| post.id == id) {
        apply(post);
    }
    state
}
