//! Core types for UniHive

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What kind of content a post is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    Personal,
    Business,
    Competition,
}

impl PostType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Business => "business",
            Self::Competition => "competition",
        }
    }

    /// Business and competition posts are promoted to the story carousel.
    pub fn is_promoted(&self) -> bool {
        matches!(self, Self::Business | Self::Competition)
    }
}

impl FromStr for PostType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "personal" => Ok(Self::Personal),
            "business" => Ok(Self::Business),
            "competition" => Ok(Self::Competition),
            _ => Err(format!(
                "Invalid post type: '{}'. Valid options: personal, business, competition",
                s
            )),
        }
    }
}

impl fmt::Display for PostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The fixed set of competition categories a submission may enter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CompetitionCategory {
    Photography,
    #[serde(rename = "Video Editing")]
    VideoEditing,
    #[serde(rename = "Creative Art")]
    CreativeArt,
    #[serde(rename = "Digital Design")]
    DigitalDesign,
    Animation,
    #[serde(rename = "Short Film")]
    ShortFilm,
    #[serde(rename = "Music Production")]
    MusicProduction,
    #[serde(rename = "Content Creation")]
    ContentCreation,
}

impl CompetitionCategory {
    /// Every category, in the order the upload form offers them.
    pub const ALL: [CompetitionCategory; 8] = [
        Self::Photography,
        Self::VideoEditing,
        Self::CreativeArt,
        Self::DigitalDesign,
        Self::Animation,
        Self::ShortFilm,
        Self::MusicProduction,
        Self::ContentCreation,
    ];

    /// Display label, e.g. "Video Editing"
    pub fn label(&self) -> &'static str {
        match self {
            Self::Photography => "Photography",
            Self::VideoEditing => "Video Editing",
            Self::CreativeArt => "Creative Art",
            Self::DigitalDesign => "Digital Design",
            Self::Animation => "Animation",
            Self::ShortFilm => "Short Film",
            Self::MusicProduction => "Music Production",
            Self::ContentCreation => "Content Creation",
        }
    }
}

impl FromStr for CompetitionCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown competition category: '{}'", s))
    }
}

impl fmt::Display for CompetitionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Media kind as reported by the device media picker
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// Opaque handle to picked media.
///
/// The core stores and forwards the URI; it never opens or decodes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediaRef {
    pub uri: String,
    pub kind: MediaKind,
}

/// A unit of user-generated content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    #[serde(rename = "type")]
    pub post_type: PostType,
    /// Set if and only if `post_type` is `Competition`
    pub category: Option<CompetitionCategory>,
    pub file: Option<MediaRef>,
    pub caption: String,
    pub likes: u32,
    pub comments: u32,
    pub timestamp: DateTime<Utc>,
}

/// Carousel entry pointing at a promoted post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Story {
    pub post_id: String,
    pub post_type: PostType,
    pub timestamp: DateTime<Utc>,
}

impl Story {
    pub fn for_post(post: &Post) -> Self {
        Self {
            post_id: post.id.clone(),
            post_type: post.post_type,
            timestamp: post.timestamp,
        }
    }
}

/// A comment the viewer submitted during this session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub author: String,
    pub timestamp: DateTime<Utc>,
}
