//! Content store
//!
//! The single source of truth for posts and stories:
//! - Actions: What can happen
//! - State: What is true right now
//! - Reducer: Pure function (State, Action) -> State
//!
//! `ContentStore` owns one state value and applies actions to it in the
//! order they are dispatched. Readers only ever see `&StoreState`.

pub mod actions;
pub mod reducer;
pub mod state;

pub use actions::Action;
pub use reducer::reduce;
pub use state::StoreState;

use tracing::debug;

/// In-process store holding the canonical post and story collections
///
/// Construct one at application start and pass it by reference to every
/// reader and writer; there is no global instance.
#[derive(Debug, Default)]
pub struct ContentStore {
    state: StoreState,
}

impl ContentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action and return the resulting state
    ///
    /// Actions that name an unknown post are ignored; views may briefly hold
    /// identifiers that no longer resolve while they re-render.
    pub fn dispatch(&mut self, action: Action) -> &StoreState {
        match action.post_id() {
            Some(post_id) if self.state.find_post(post_id).is_none() => {
                debug!(
                    action = action.name(),
                    post_id, "ignoring action for unknown post"
                );
            }
            post_id => {
                debug!(action = action.name(), post_id, "dispatching action");
            }
        }

        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
        &self.state
    }

    /// Read-only view of the current state
    pub fn get_state(&self) -> &StoreState {
        &self.state
    }
}
