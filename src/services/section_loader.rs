use rand::Rng;
use std::fmt::Display;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    error::{AppError, FailureKind},
    models::{Movie, UserId},
    services::backend::Backend,
    state::AppState,
    ui::{Region, Renderer, Section},
};

/// Only the first few trending titles are eligible for the hero
pub const HERO_POOL_SIZE: usize = 5;

/// How one section ended up after a load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionOutcome {
    /// Rendered this many items (zero shows the empty placeholder)
    Loaded(usize),
    Failed(FailureKind),
}

impl Display for SectionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionOutcome::Loaded(count) => write!(f, "loaded({})", count),
            SectionOutcome::Failed(kind) => write!(f, "failed({})", kind),
        }
    }
}

/// Per-section outcomes of one `load_dashboard` run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub load_id: Uuid,
    pub recommendations: SectionOutcome,
    pub interests: SectionOutcome,
    pub trending: SectionOutcome,
    pub history: SectionOutcome,
}

impl LoadReport {
    pub fn outcome(&self, section: Section) -> SectionOutcome {
        match section {
            Section::Recommendations => self.recommendations,
            Section::Interests => self.interests,
            Section::Trending => self.trending,
            Section::History => self.history,
        }
    }

    pub fn failed_sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| matches!(self.outcome(*s), SectionOutcome::Failed(_)))
            .collect()
    }
}

/// Picks the hero uniformly from the first `HERO_POOL_SIZE` trending titles
pub fn pick_hero<'a, R: Rng>(movies: &'a [Movie], rng: &mut R) -> Option<&'a Movie> {
    if movies.is_empty() {
        return None;
    }
    let pool = movies.len().min(HERO_POOL_SIZE);
    movies.get(rng.gen_range(0..pool))
}

/// Loads the four dashboard sections concurrently
///
/// Each section is its own unit: it awaits only its own request and renders
/// only its own region, so a slow or failing endpoint never holds back or
/// breaks the others. Overlapping loads are allowed and the last completion
/// to render wins.
#[derive(Clone)]
pub struct SectionLoader {
    backend: Arc<dyn Backend>,
    state: AppState,
    renderer: Renderer,
}

impl SectionLoader {
    pub fn new(backend: Arc<dyn Backend>, state: AppState, renderer: Renderer) -> Self {
        Self {
            backend,
            state,
            renderer,
        }
    }

    pub async fn load_dashboard(&self, user_id: UserId) -> LoadReport {
        let load_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "load_dashboard",
            load_id = %load_id,
            user_id = %user_id,
            backend = self.backend.name()
        );

        async move {
            self.state.write().await.screen.show_loading();

            let (recommendations, interests, trending, history) = tokio::join!(
                self.load_recommendations(user_id),
                self.load_interests(user_id),
                self.load_trending(),
                self.load_history(user_id),
            );

            let report = LoadReport {
                load_id,
                recommendations,
                interests,
                trending,
                history,
            };

            tracing::info!(
                recommendations = %report.recommendations,
                interests = %report.interests,
                trending = %report.trending,
                history = %report.history,
                "Dashboard load finished"
            );

            report
        }
        .instrument(span)
        .await
    }

    async fn load_recommendations(&self, user_id: UserId) -> SectionOutcome {
        let result = self.backend.recommendations(user_id).await;

        let mut state = self.state.write().await;
        let state = &mut *state;
        match result {
            Ok(movies) => {
                let count = movies.len();
                state.screen.recommendations = self.renderer.list(&mut state.cache, movies);
                SectionOutcome::Loaded(count)
            }
            Err(e) => {
                let kind = section_failed(Section::Recommendations, &e);
                state.screen.recommendations = failed_region(Section::Recommendations, kind);
                SectionOutcome::Failed(kind)
            }
        }
    }

    async fn load_interests(&self, user_id: UserId) -> SectionOutcome {
        let result = self.backend.interests(user_id).await;

        let mut state = self.state.write().await;
        match result {
            Ok(interests) => {
                let count = interests.len();
                state.screen.interests = self.renderer.interests(interests);
                SectionOutcome::Loaded(count)
            }
            Err(e) => {
                let kind = section_failed(Section::Interests, &e);
                state.screen.interests = failed_region(Section::Interests, kind);
                SectionOutcome::Failed(kind)
            }
        }
    }

    async fn load_trending(&self) -> SectionOutcome {
        let result = self.backend.trending().await;

        let mut state = self.state.write().await;
        let state = &mut *state;
        match result {
            Ok(movies) => {
                let count = movies.len();
                let hero =
                    pick_hero(&movies, &mut rand::thread_rng()).map(|m| self.renderer.hero(m));
                state.screen.trending = self.renderer.list(&mut state.cache, movies);
                if let Some(hero) = hero {
                    tracing::debug!(movie_id = %hero.movie_id, "Hero updated");
                    state.screen.hero = Some(hero);
                }
                SectionOutcome::Loaded(count)
            }
            Err(e) => {
                let kind = section_failed(Section::Trending, &e);
                state.screen.trending = failed_region(Section::Trending, kind);
                SectionOutcome::Failed(kind)
            }
        }
    }

    async fn load_history(&self, user_id: UserId) -> SectionOutcome {
        let result = self.backend.history(user_id).await;

        let mut state = self.state.write().await;
        let state = &mut *state;
        match result {
            Ok(movies) => {
                let count = movies.len();
                state.screen.history = self.renderer.list(&mut state.cache, movies);
                SectionOutcome::Loaded(count)
            }
            Err(e) => {
                let kind = section_failed(Section::History, &e);
                state.screen.history = failed_region(Section::History, kind);
                SectionOutcome::Failed(kind)
            }
        }
    }
}

fn section_failed(section: Section, error: &AppError) -> FailureKind {
    let kind = error.failure_kind();
    tracing::warn!(section = %section, kind = %kind, error = %error, "Section failed to load");
    kind
}

fn failed_region<T>(section: Section, kind: FailureKind) -> Region<T> {
    Region::Failed(section.failure_message(kind).to_string())
}
