use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{InteractionEvent, InteractionKind, MovieId, SearchEvent, UserId},
    services::{
        backend::Backend,
        section_loader::{LoadReport, SectionLoader},
    },
    state::AppState,
};

/// Single-shot dashboard reload scheduled after an interaction report
///
/// Every successful report gets its own reload; nothing is debounced.
pub struct ScheduledReload {
    id: Uuid,
    fires_at: Instant,
    handle: JoinHandle<LoadReport>,
}

impl ScheduledReload {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn fires_at(&self) -> Instant {
        self.fires_at
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the reload to fire and complete
    pub async fn join(self) -> AppResult<LoadReport> {
        self.handle
            .await
            .map_err(|e| AppError::Internal(format!("Reload task failed: {}", e)))
    }
}

impl std::fmt::Debug for ScheduledReload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScheduledReload")
            .field("id", &self.id)
            .field("fires_at", &self.fires_at)
            .field("finished", &self.is_finished())
            .finish()
    }
}

/// Reports search queries and movie interactions to the backend
#[derive(Clone)]
pub struct InteractionTracker {
    backend: Arc<dyn Backend>,
    state: AppState,
    loader: SectionLoader,
    reload_delay: Duration,
}

impl InteractionTracker {
    pub fn new(
        backend: Arc<dyn Backend>,
        state: AppState,
        loader: SectionLoader,
        reload_delay: Duration,
    ) -> Self {
        Self {
            backend,
            state,
            loader,
            reload_delay,
        }
    }

    /// Reports a search query; returns whether a report was sent
    ///
    /// Blank queries are dropped without contacting the backend. Once sent,
    /// the user is acknowledged whatever the backend answered.
    pub async fn track_search(&self, user_id: UserId, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return false;
        }

        let event = SearchEvent {
            user_id,
            query: query.to_string(),
        };

        match self.backend.track_search(&event).await {
            Ok(()) => tracing::info!(user_id = %user_id, query = %query, "Search tracked"),
            Err(e) => tracing::warn!(user_id = %user_id, error = %e, "Search tracking failed"),
        }

        self.state
            .write()
            .await
            .toasts
            .success(format!("Search tracked: \"{}\"", query));

        true
    }

    /// Reports a like or watch and, on success, schedules a dashboard reload
    ///
    /// Failures are logged and schedule nothing.
    pub async fn track_interaction(
        &self,
        user_id: UserId,
        movie_id: MovieId,
        kind: InteractionKind,
        watch_time: u32,
    ) -> Option<ScheduledReload> {
        let event = InteractionEvent {
            user_id,
            movie_id,
            kind,
            watch_time,
        };

        if let Err(e) = self.backend.track_interaction(&event).await {
            tracing::warn!(
                user_id = %user_id,
                movie_id = %movie_id,
                kind = %kind,
                error = %e,
                "Interaction tracking failed"
            );
            return None;
        }

        tracing::info!(
            user_id = %user_id,
            movie_id = %movie_id,
            kind = %kind,
            watch_time = watch_time,
            "Interaction tracked"
        );

        Some(self.schedule_reload(user_id))
    }

    fn schedule_reload(&self, user_id: UserId) -> ScheduledReload {
        let id = Uuid::new_v4();
        let fires_at = Instant::now() + self.reload_delay;
        let loader = self.loader.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(fires_at).await;
            tracing::debug!(reload_id = %id, "Scheduled reload firing");
            loader.load_dashboard(user_id).await
        });

        tracing::debug!(reload_id = %id, delay_ms = self.reload_delay.as_millis() as u64, "Reload scheduled");

        ScheduledReload {
            id,
            fires_at,
            handle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::backend::MockBackend;
    use crate::ui::Renderer;
    use reqwest::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const DELAY: Duration = Duration::from_millis(500);

    /// Mock whose dashboard endpoints count how many loads ran
    fn counting_backend(loads: Arc<AtomicUsize>) -> MockBackend {
        let mut backend = MockBackend::new();
        backend.expect_name().return_const("mock");
        backend.expect_recommendations().returning(|_| Ok(vec![]));
        backend.expect_interests().returning(|_| Ok(vec![]));
        backend.expect_history().returning(|_| Ok(vec![]));
        backend.expect_trending().returning(move || {
            loads.fetch_add(1, Ordering::SeqCst);
            Ok(vec![])
        });
        backend
    }

    fn tracker(backend: MockBackend) -> (InteractionTracker, AppState) {
        let backend: Arc<dyn Backend> = Arc::new(backend);
        let state = AppState::new();
        let loader = SectionLoader::new(backend.clone(), state.clone(), Renderer::new(600, 300));
        let tracker = InteractionTracker::new(backend, state.clone(), loader, DELAY);
        (tracker, state)
    }

    #[tokio::test]
    async fn test_empty_search_sends_nothing() {
        let mut backend = MockBackend::new();
        backend.expect_track_search().never();

        let (tracker, state) = tracker(backend);

        assert!(!tracker.track_search(UserId(1), "").await);
        assert!(!tracker.track_search(UserId(1), "   ").await);
        assert!(state.read().await.toasts.is_empty());
    }

    #[tokio::test]
    async fn test_search_posts_query_and_acknowledges() {
        let mut backend = MockBackend::new();
        backend
            .expect_track_search()
            .withf(|event| event.user_id == UserId(1) && event.query == "space opera")
            .times(1)
            .returning(|_| Ok(()));

        let (tracker, state) = tracker(backend);

        assert!(tracker.track_search(UserId(1), " space opera ").await);
        assert_eq!(
            state.read().await.toasts.messages(),
            vec!["Search tracked: \"space opera\""]
        );
    }

    #[tokio::test]
    async fn test_search_failure_still_acknowledges() {
        let mut backend = MockBackend::new();
        backend.expect_track_search().times(1).returning(|_| {
            Err(AppError::BackendStatus {
                status: StatusCode::BAD_REQUEST,
                body: "Missing data".to_string(),
            })
        });

        let (tracker, state) = tracker(backend);

        assert!(tracker.track_search(UserId(1), "noir").await);
        assert_eq!(state.read().await.toasts.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reload_fires_after_delay() {
        let loads = Arc::new(AtomicUsize::new(0));
        let mut backend = counting_backend(loads.clone());
        backend
            .expect_track_interaction()
            .withf(|event| {
                event.movie_id == MovieId(5)
                    && event.kind == InteractionKind::Like
                    && event.watch_time == 0
            })
            .times(1)
            .returning(|_| Ok(()));

        let (tracker, _state) = tracker(backend);
        let scheduled_at = Instant::now();
        let reload = tracker
            .track_interaction(UserId(1), MovieId(5), InteractionKind::Like, 0)
            .await
            .unwrap();
        assert_eq!(reload.fires_at(), scheduled_at + DELAY);

        tokio::time::advance(DELAY - Duration::from_millis(1)).await;
        assert_eq!(loads.load(Ordering::SeqCst), 0);
        assert!(!reload.is_finished());

        tokio::time::advance(Duration::from_millis(1)).await;
        let report = reload.join().await.unwrap();

        assert!(report.failed_sections().is_empty());
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_interaction_schedules_its_own_reload() {
        let loads = Arc::new(AtomicUsize::new(0));
        let mut backend = counting_backend(loads.clone());
        backend
            .expect_track_interaction()
            .times(3)
            .returning(|_| Ok(()));

        let (tracker, _state) = tracker(backend);

        let mut reloads = Vec::new();
        for movie in 1..=3 {
            let reload = tracker
                .track_interaction(UserId(1), MovieId(movie), InteractionKind::Watch, 600)
                .await
                .unwrap();
            reloads.push(reload);
            tokio::time::advance(Duration::from_millis(100)).await;
        }
        assert_eq!(loads.load(Ordering::SeqCst), 0);
        assert_ne!(reloads[0].id(), reloads[1].id());
        assert!(reloads[0].fires_at() < reloads[2].fires_at());

        tokio::time::advance(DELAY).await;
        for reload in reloads {
            reload.join().await.unwrap();
        }

        assert_eq!(loads.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_interaction_schedules_nothing() {
        let loads = Arc::new(AtomicUsize::new(0));
        let mut backend = counting_backend(loads.clone());
        backend.expect_track_interaction().times(1).returning(|_| {
            Err(AppError::BackendStatus {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: String::new(),
            })
        });

        let (tracker, _state) = tracker(backend);
        let reload = tracker
            .track_interaction(UserId(1), MovieId(2), InteractionKind::Watch, 300)
            .await;

        assert!(reload.is_none());
        tokio::time::advance(DELAY * 2).await;
        assert_eq!(loads.load(Ordering::SeqCst), 0);
    }
}
