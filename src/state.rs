use std::fmt::{self, Display};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::store::EntityCache;
use crate::ui::{ModalController, Screen, Toasts, ViewState};

/// Shared dashboard state
///
/// Created once per session and handed to every service. Each render step
/// takes the write lock, applies its whole update and releases it before the
/// next await, so a concurrently arriving response never sees a half-updated
/// region.
#[derive(Clone, Default)]
pub struct AppState {
    pub inner: Arc<RwLock<AppStateInner>>,
}

/// Inner state that can be modified
#[derive(Debug, Default)]
pub struct AppStateInner {
    pub cache: EntityCache,
    pub view: ViewState,
    pub modal: ModalController,
    pub screen: Screen,
    pub toasts: Toasts,
}

impl AppState {
    /// Creates a fresh session state showing the dashboard
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read(&self) -> tokio::sync::RwLockReadGuard<'_, AppStateInner> {
        self.inner.read().await
    }

    pub async fn write(&self) -> tokio::sync::RwLockWriteGuard<'_, AppStateInner> {
        self.inner.write().await
    }
}

impl AppStateInner {
    /// Whether the dashboard region is visible
    pub fn dashboard_visible(&self) -> bool {
        self.view.is_dashboard()
    }

    /// Whether the genre drill-down region is visible
    pub fn drilldown_visible(&self) -> bool {
        !self.view.is_dashboard()
    }
}

impl Display for AppStateInner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.screen)?;
        writeln!(f, "-- view: {} --", self.view)?;
        if let Some(modal) = self.modal.view() {
            writeln!(
                f,
                "-- modal: {} ({}, {}) [{}] --",
                modal.title, modal.year, modal.rating, modal.genre_tag
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_state_shows_dashboard() {
        let state = AppState::new();
        let inner = state.read().await;

        assert!(inner.dashboard_visible());
        assert!(!inner.drilldown_visible());
        assert!(!inner.modal.is_open());
        assert!(inner.cache.is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let state = AppState::new();
        let other = state.clone();

        other.write().await.view.drill_into("Drama");

        assert!(state.read().await.drilldown_visible());
    }
}
