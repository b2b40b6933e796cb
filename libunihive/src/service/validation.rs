//! Submission validation service
//!
//! Gates a draft before it is allowed to become a post. Checks, in order:
//! - An upload type was chosen
//! - The caption is not empty or whitespace-only
//! - The caption stays within the word limit
//! - Competition entries name one of the fixed categories
//!
//! Validation knows nothing about the content store. Dispatching the
//! resulting post (and its story) is the caller's job.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::sources::{Clock, IdGenerator};
use crate::config::ValidationConfig;
use crate::error::ValidationError;
use crate::types::{CompetitionCategory, MediaRef, Post, PostType};

/// An in-progress submission as the upload form builds it
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Draft {
    #[serde(rename = "type", default)]
    pub upload_type: Option<PostType>,
    #[serde(default)]
    pub caption: String,
    /// Category label as picked in the form; only read for competition entries
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub file: Option<MediaRef>,
}

/// Count whitespace-delimited words; blank text has zero words.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Validate a draft with the default word limit
pub fn validate(
    draft: &Draft,
    ids: &dyn IdGenerator,
    clock: &dyn Clock,
) -> Result<Post, ValidationError> {
    SubmissionValidator::default().validate(draft, ids, clock)
}

/// Validates drafts against the caption and category rules
///
/// # Example
///
/// ```
/// use libunihive::config::ValidationConfig;
/// use libunihive::service::sources::{SystemClock, UuidGenerator};
/// use libunihive::service::validation::{Draft, SubmissionValidator};
/// use libunihive::PostType;
///
/// let validator = SubmissionValidator::new(&ValidationConfig::default());
/// let draft = Draft {
///     upload_type: Some(PostType::Personal),
///     caption: "first day on campus".to_string(),
///     ..Draft::default()
/// };
///
/// let post = validator.validate(&draft, &UuidGenerator, &SystemClock).unwrap();
/// assert_eq!(post.likes, 0);
/// ```
#[derive(Debug, Clone)]
pub struct SubmissionValidator {
    max_caption_words: usize,
}

impl Default for SubmissionValidator {
    fn default() -> Self {
        Self::new(&ValidationConfig::default())
    }
}

impl SubmissionValidator {
    pub fn new(config: &ValidationConfig) -> Self {
        Self {
            max_caption_words: config.max_caption_words,
        }
    }

    /// Check a draft and, if it passes, build the post it describes
    ///
    /// The post gets a fresh id and timestamp, zeroed counters, a trimmed
    /// caption, and a category only when it is a competition entry.
    pub fn validate(
        &self,
        draft: &Draft,
        ids: &dyn IdGenerator,
        clock: &dyn Clock,
    ) -> Result<Post, ValidationError> {
        let result = self.check(draft).map(|(post_type, category)| Post {
            id: ids.next_id(),
            post_type,
            category,
            file: draft.file.clone(),
            caption: draft.caption.trim().to_string(),
            likes: 0,
            comments: 0,
            timestamp: clock.now(),
        });

        if let Err(err) = &result {
            debug!(error = %err, "draft rejected");
        }
        result
    }

    fn check(
        &self,
        draft: &Draft,
    ) -> Result<(PostType, Option<CompetitionCategory>), ValidationError> {
        let post_type = draft.upload_type.ok_or(ValidationError::MissingUploadType)?;

        let words = count_words(&draft.caption);
        if words == 0 {
            return Err(ValidationError::MissingCaption);
        }
        if words > self.max_caption_words {
            return Err(ValidationError::CaptionTooLong {
                words,
                limit: self.max_caption_words,
            });
        }

        let category = match post_type {
            PostType::Competition => Some(
                draft
                    .category
                    .as_deref()
                    .and_then(|label| label.parse::<CompetitionCategory>().ok())
                    .ok_or(ValidationError::MissingCompetitionCategory)?,
            ),
            PostType::Personal | PostType::Business => None,
        };

        Ok((post_type, category))
    }
}
