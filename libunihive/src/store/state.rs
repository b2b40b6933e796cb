//! Store state
//!
//! All transitions happen through the reducer (see `reducer.rs`).

use crate::types::{Post, Story};

/// Canonical collections, both ordered newest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreState {
    pub posts: Vec<Post>,
    pub stories: Vec<Story>,
}

impl StoreState {
    /// Look up a post by id
    pub fn find_post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }
}
