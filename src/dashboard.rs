use std::sync::Arc;

use crate::{
    config::Settings,
    error::AppResult,
    models::{InteractionKind, Session},
    services::{
        backend::Backend, identity, InteractionTracker, LoadReport, ScheduledReload,
        SectionLoader, ViewController,
    },
    state::AppState,
    store::SessionStore,
    ui::{Action, ClickTarget, Renderer},
};

/// Composition root for one signed-in session
///
/// Owns the shared state and wires the loader, view controller and tracker
/// to the same backend. Affordances rendered anywhere on the screen are fed
/// back through [`Dashboard::activate`].
#[derive(Clone)]
pub struct Dashboard {
    session: Session,
    state: AppState,
    loader: SectionLoader,
    views: ViewController,
    tracker: InteractionTracker,
}

impl Dashboard {
    pub fn new(backend: Arc<dyn Backend>, session: Session, settings: Settings) -> Self {
        let state = AppState::new();
        let renderer = Renderer::new(settings.play_watch_time, settings.hero_watch_time);

        let loader = SectionLoader::new(backend.clone(), state.clone(), renderer);
        let views = ViewController::new(backend.clone(), state.clone(), renderer);
        let tracker =
            InteractionTracker::new(backend, state.clone(), loader.clone(), settings.reload_delay);

        Self {
            session,
            state,
            loader,
            views,
            tracker,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Greets the user and runs the first dashboard load
    pub async fn start(&self) -> LoadReport {
        self.state.write().await.screen.welcome = self.session.greeting();
        self.reload().await
    }

    pub async fn reload(&self) -> LoadReport {
        self.loader.load_dashboard(self.session.id).await
    }

    /// Runs an affordance taken from the screen
    ///
    /// Returns the scheduled reload when the action reported an interaction.
    pub async fn activate(&self, action: &Action) -> Option<ScheduledReload> {
        match action {
            Action::Play {
                movie_id,
                title,
                watch_time,
            } => {
                self.state
                    .write()
                    .await
                    .toasts
                    .info(format!("Playing {}...", title));
                self.tracker
                    .track_interaction(
                        self.session.id,
                        *movie_id,
                        InteractionKind::Watch,
                        *watch_time,
                    )
                    .await
            }
            Action::Like { movie_id, title } => {
                self.state
                    .write()
                    .await
                    .toasts
                    .success(format!("Liked {}", title));
                self.tracker
                    .track_interaction(self.session.id, *movie_id, InteractionKind::Like, 0)
                    .await
            }
            Action::Inspect { movie_id } => {
                self.views.inspect(*movie_id).await;
                None
            }
            Action::OpenGenre { genre } => {
                self.views.open_genre(genre).await;
                None
            }
        }
    }

    /// Presses the hero's play button, if a hero is showing
    pub async fn play_hero(&self) -> Option<ScheduledReload> {
        let action = self.state.read().await.screen.hero.as_ref()?.play.clone();
        self.activate(&action).await
    }

    /// Presses the modal's play button, if the modal is open
    pub async fn play_modal(&self) -> Option<ScheduledReload> {
        let action = self.state.read().await.modal.view()?.play.clone();
        self.activate(&action).await
    }

    pub async fn search(&self, query: &str) -> bool {
        self.tracker.track_search(self.session.id, query).await
    }

    pub async fn close_genre(&self) -> bool {
        self.views.close_genre().await
    }

    pub async fn close_modal(&self) {
        self.views.close_modal().await
    }

    pub async fn dismiss_modal(&self, target: ClickTarget) -> bool {
        self.views.dismiss_modal(target).await
    }

    /// Ends the session and returns the login location
    pub fn logout(self, store: &dyn SessionStore, login_url: &str) -> AppResult<String> {
        tracing::info!(user_id = %self.session.id, "Logging out");
        identity::logout(store, login_url)
    }
}
