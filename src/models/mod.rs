use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod session;
pub mod tracking;

pub use session::Session;
pub use tracking::{InteractionEvent, InteractionKind, SearchEvent};

/// Separator between genres in a movie's genre string
pub const GENRE_SEPARATOR: char = '|';

/// Backend identifier for a movie, stable across requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub i64);

impl Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Backend identifier for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Snapshot of a movie as returned by the backend
///
/// Recommendation results additionally carry a match score (0-100) and a
/// short reason. Snapshots are never edited; a newer fetch replaces them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub rating: Option<f64>,
    /// Pipe-delimited genres, e.g. `"Action|Sci-Fi"`
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub match_score: Option<u8>,
    #[serde(default)]
    pub match_reason: Option<String>,
}

impl Movie {
    /// First segment of the genre string, used for tagging
    pub fn primary_genre(&self) -> Option<&str> {
        self.genres().next()
    }

    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.genre
            .split(GENRE_SEPARATOR)
            .map(str::trim)
            .filter(|g| !g.is_empty())
    }
}
