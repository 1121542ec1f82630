use std::sync::Arc;

use crate::{
    models::{Movie, MovieId},
    services::{backend::Backend, section_loader::SectionOutcome},
    state::AppState,
    ui::{ClickTarget, GenrePanel, Region, Renderer},
};

pub const GENRE_EMPTY_MESSAGE: &str = "No movies found for this genre.";
pub const GENRE_FAILED_MESSAGE: &str = "Failed to load genre.";

/// Drives the base view (dashboard / genre drill-down) and the modal overlay
#[derive(Clone)]
pub struct ViewController {
    backend: Arc<dyn Backend>,
    state: AppState,
    renderer: Renderer,
}

impl ViewController {
    pub fn new(backend: Arc<dyn Backend>, state: AppState, renderer: Renderer) -> Self {
        Self {
            backend,
            state,
            renderer,
        }
    }

    /// Switches to the drill-down for `genre` and fills it from the backend
    ///
    /// Returns `None` when the transition is refused because a drill-down is
    /// already showing.
    pub async fn open_genre(&self, genre: &str) -> Option<SectionOutcome> {
        {
            let mut state = self.state.write().await;
            if !state.view.drill_into(genre) {
                tracing::debug!(genre = %genre, view = %state.view, "Ignoring nested drill-down");
                return None;
            }
            state.screen.genre = Some(GenrePanel::loading(genre));
        }

        tracing::info!(genre = %genre, "Genre drill-down opened");

        let result = self.backend.movies_by_genre(genre).await;

        let mut state = self.state.write().await;
        let state = &mut *state;
        let mut panel = GenrePanel::loading(genre);
        let outcome = match result {
            Ok(movies) => {
                let count = movies.len();
                panel.list = self
                    .renderer
                    .list_or(&mut state.cache, movies, GENRE_EMPTY_MESSAGE);
                SectionOutcome::Loaded(count)
            }
            Err(e) => {
                tracing::warn!(genre = %genre, error = %e, "Genre load failed");
                panel.list = Region::Failed(GENRE_FAILED_MESSAGE.to_string());
                SectionOutcome::Failed(e.failure_kind())
            }
        };
        state.screen.genre = Some(panel);

        Some(outcome)
    }

    /// Returns to the dashboard, leaving its last rendered content in place
    pub async fn close_genre(&self) -> bool {
        let mut state = self.state.write().await;
        let closed = state.view.close_drilldown();
        if closed {
            state.screen.genre = None;
            tracing::info!("Genre drill-down closed");
        }
        closed
    }

    /// Opens the overlay for a movie resolved from the entity cache
    pub async fn inspect(&self, movie_id: MovieId) -> bool {
        let mut state = self.state.write().await;
        let state = &mut *state;

        match state.cache.get(movie_id) {
            Some(movie) => {
                state.modal.open(movie, self.renderer.play_watch_time);
                tracing::debug!(movie_id = %movie_id, "Modal opened");
                true
            }
            None => {
                tracing::warn!(movie_id = %movie_id, "Inspected movie is not cached");
                false
            }
        }
    }

    /// Opens the overlay for a record handed over directly
    pub async fn open_modal(&self, movie: &Movie) {
        let mut state = self.state.write().await;
        state.cache.put(movie.clone());
        state.modal.open(movie, self.renderer.play_watch_time);
    }

    pub async fn close_modal(&self) {
        self.state.write().await.modal.close();
    }

    pub async fn dismiss_modal(&self, target: ClickTarget) -> bool {
        self.state.write().await.modal.dismiss(target)
    }
}
