use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::{MovieId, UserId};

/// Kind of reportable action against a movie
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Like,
    Watch,
}

impl Display for InteractionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InteractionKind::Like => write!(f, "like"),
            InteractionKind::Watch => write!(f, "watch"),
        }
    }
}

/// Body of `POST /api/track/search`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchEvent {
    pub user_id: UserId,
    pub query: String,
}

/// Body of `POST /api/interact`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InteractionEvent {
    pub user_id: UserId,
    pub movie_id: MovieId,
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    /// Seconds watched; zero for likes
    #[serde(default)]
    pub watch_time: u32,
}
