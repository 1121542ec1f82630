/// Backend service abstraction
///
/// The dashboard only ever talks to the recommendation backend through this
/// trait, so sections, drill-downs and trackers can be exercised against a
/// mock or a fake server. Recommendation and trending computation stay on the
/// backend; the client displays what it receives.
use crate::{
    error::AppResult,
    models::{InteractionEvent, Movie, SearchEvent, UserId},
};

pub mod http;

pub use http::HttpBackend;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Personalized recommendations, with match score and reason
    async fn recommendations(&self, user_id: UserId) -> AppResult<Vec<Movie>>;

    /// Ordered genre names the user has shown interest in
    async fn interests(&self, user_id: UserId) -> AppResult<Vec<String>>;

    /// Globally trending titles, most popular first
    async fn trending(&self) -> AppResult<Vec<Movie>>;

    /// The user's watch history, most recent first
    async fn history(&self, user_id: UserId) -> AppResult<Vec<Movie>>;

    /// All movies whose genre string contains `genre`
    async fn movies_by_genre(&self, genre: &str) -> AppResult<Vec<Movie>>;

    async fn track_search(&self, event: &SearchEvent) -> AppResult<()>;

    async fn track_interaction(&self, event: &InteractionEvent) -> AppResult<()>;

    /// Backend name for logging and debugging
    fn name(&self) -> &'static str;
}
