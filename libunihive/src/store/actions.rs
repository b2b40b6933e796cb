//! Actions for the reducer pattern
//!
//! Every change to the content store is described by one of these values.
//! The reducer (see `reducer.rs`) matches on them exhaustively.

use crate::types::{Post, Story};

/// State transitions understood by the content store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Prepend a validated post
    AddPost(Post),

    /// Prepend a story; the caller decides which posts get one
    AddStory(Story),

    /// Increment a post's like counter
    Like(String),

    /// Decrement a post's like counter, never below zero
    Unlike(String),

    /// Increment a post's comment counter
    AddComment(String),
}

impl Action {
    /// Short stable name used in log output
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddPost(_) => "ADD_POST",
            Action::AddStory(_) => "ADD_STORY",
            Action::Like(_) => "LIKE",
            Action::Unlike(_) => "UNLIKE",
            Action::AddComment(_) => "ADD_COMMENT",
        }
    }

    /// The existing post this action targets, if it targets one
    pub fn post_id(&self) -> Option<&str> {
        match self {
            Action::Like(id) | Action::Unlike(id) | Action::AddComment(id) => Some(id),
            Action::AddPost(_) | Action::AddStory(_) => None,
        }
    }
}
