//! Service layer for UniHive
//!
//! Pure building blocks, consumed by any front end:
//!
//! - `validation`: gate drafts before they become posts
//! - `feed`: compose the home feed and manage the viewer's like/comment overlay
//! - `categories`: business/competition filters and leaderboards
//! - `sources`: injected id generator and clock
//!
//! `HiveService` wires them to one `ContentStore` and applies the
//! caller-side policies: promoted posts get a story, and every overlay change
//! is mirrored by exactly one counter action, applied to the store or, for a
//! seed post, to the service's own copy of the seeds.

pub mod categories;
pub mod feed;
pub mod sources;
pub mod validation;

use tracing::info;

use self::categories::top_ranked;
use self::feed::{
    apply_to_seed, compose_feed, seed_posts, submit_comment, toggle_like, InteractionState,
    LikeDelta,
};
use self::sources::{Clock, IdGenerator, SystemClock, UuidGenerator};
use self::validation::{Draft, SubmissionValidator};
use crate::store::{Action, ContentStore, StoreState};
use crate::types::{CompetitionCategory, Post, Story};
use crate::{Config, Result};

/// Main service facade that owns the content store
///
/// # Example
///
/// ```
/// use libunihive::service::HiveService;
/// use libunihive::service::validation::Draft;
/// use libunihive::{Config, PostType};
///
/// let mut service = HiveService::new(Config::default());
/// let post = service
///     .submit(&Draft {
///         upload_type: Some(PostType::Business),
///         caption: "pop-up bakery in the quad".to_string(),
///         ..Draft::default()
///     })
///     .unwrap();
///
/// assert_eq!(service.state().stories[0].post_id, post.id);
/// ```
pub struct HiveService {
    store: ContentStore,
    validator: SubmissionValidator,
    seeds: Vec<Post>,
    viewer: String,
    leaderboard_size: usize,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
}

impl HiveService {
    /// Create a service using UUID ids and the system clock
    pub fn new(config: Config) -> Self {
        Self::with_sources(config, Box::new(UuidGenerator), Box::new(SystemClock))
    }

    /// Create a service with explicit id and time sources
    pub fn with_sources(config: Config, ids: Box<dyn IdGenerator>, clock: Box<dyn Clock>) -> Self {
        let seeds = if config.feed.include_seed {
            seed_posts()
        } else {
            Vec::new()
        };

        Self {
            store: ContentStore::new(),
            validator: SubmissionValidator::new(&config.validation),
            seeds,
            viewer: config.viewer.name,
            leaderboard_size: config.leaderboard.size,
            ids,
            clock,
        }
    }

    /// Current store state
    pub fn state(&self) -> &StoreState {
        self.store.get_state()
    }

    pub fn seeds(&self) -> &[Post] {
        &self.seeds
    }

    /// Validate a draft and publish it
    ///
    /// Business and competition posts also get a story, dispatched right
    /// after the post.
    ///
    /// # Errors
    ///
    /// Returns `UnihiveError::Validation` if the draft is rejected; the store
    /// is left untouched.
    pub fn submit(&mut self, draft: &Draft) -> Result<Post> {
        let post = self
            .validator
            .validate(draft, self.ids.as_ref(), self.clock.as_ref())?;

        self.store.dispatch(Action::AddPost(post.clone()));
        if post.post_type.is_promoted() {
            self.store.dispatch(Action::AddStory(Story::for_post(&post)));
        }

        info!(
            post_id = %post.id,
            post_type = %post.post_type,
            "published post"
        );
        Ok(post)
    }

    /// Toggle the viewer's like and apply the matching store action
    pub fn toggle_like(
        &mut self,
        interaction: &InteractionState,
        post_id: &str,
    ) -> (InteractionState, LikeDelta) {
        let (next, delta) = toggle_like(interaction, post_id);
        self.apply_counter(delta.into_action(post_id.to_string()));
        (next, delta)
    }

    /// Record a comment from the viewer and bump the post's counter
    ///
    /// # Errors
    ///
    /// Returns `UnihiveError::Validation` for blank text; nothing is
    /// dispatched in that case.
    pub fn comment(
        &mut self,
        interaction: &InteractionState,
        post_id: &str,
        text: &str,
    ) -> Result<InteractionState> {
        let next = submit_comment(
            interaction,
            post_id,
            text,
            &self.viewer,
            self.ids.as_ref(),
            self.clock.as_ref(),
        )?;
        self.apply_counter(Action::AddComment(post_id.to_string()));
        Ok(next)
    }

    /// Route a counter action to the store, or to the seed it names
    fn apply_counter(&mut self, action: Action) {
        let is_seed = action.post_id().is_some_and(|id| {
            self.store.get_state().find_post(id).is_none()
                && self.seeds.iter().any(|seed| seed.id == id)
        });

        if is_seed {
            apply_to_seed(&mut self.seeds, &action);
        } else {
            self.store.dispatch(action);
        }
    }

    /// Home feed: store posts, then seeds
    pub fn feed(&self) -> Vec<&Post> {
        compose_feed(self.store.get_state(), &self.seeds)
    }

    /// Configured-size leaderboard for one competition category
    pub fn leaderboard(&self, category: CompetitionCategory) -> Vec<&Post> {
        top_ranked(&self.store.get_state().posts, category, self.leaderboard_size)
    }
}
