//! UniHive - content store and feed engine for a campus social app
//!
//! This library holds the single source of truth for posts and stories,
//! validates new submissions, and derives the feed, category and
//! leaderboard views that screens render.

pub mod config;
pub mod error;
pub mod logging;
pub mod service;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, UnihiveError, ValidationError};
pub use store::{Action, ContentStore, StoreState};
pub use types::{CompetitionCategory, MediaKind, MediaRef, Post, PostType, Story};
