use crate::{
    error::{AppError, AppResult},
    models::Session,
    store::SessionStore,
};

/// Result of the startup identity check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Authenticated(Session),
    /// No usable identity; the caller must navigate away and stop
    Redirect { location: String },
}

/// Checks that a session identity is stored before anything else runs
///
/// A record that cannot be read or parsed is treated exactly like a missing
/// one, so a stale or corrupted entry never starts the dashboard.
pub fn authenticate(store: &dyn SessionStore, login_url: &str) -> GuardOutcome {
    let redirect = || GuardOutcome::Redirect {
        location: login_url.to_string(),
    };

    let raw = match store.read() {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::info!("No stored session, redirecting to login");
            return redirect();
        }
        Err(e) => {
            tracing::warn!(error = %e, "Session store unreadable, redirecting to login");
            return redirect();
        }
    };

    match serde_json::from_str::<Session>(&raw) {
        Ok(session) => {
            tracing::info!(user_id = %session.id, username = %session.username, "Session restored");
            GuardOutcome::Authenticated(session)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Stored session is malformed, redirecting to login");
            redirect()
        }
    }
}

/// Persists the identity handed back by the external login flow
pub fn sign_in(store: &dyn SessionStore, session: &Session) -> AppResult<()> {
    let raw = serde_json::to_string(session)
        .map_err(|e| AppError::Session(format!("Session serialization error: {}", e)))?;
    store.write(&raw)
}

/// Clears the stored identity and returns where to navigate next
pub fn logout(store: &dyn SessionStore, login_url: &str) -> AppResult<String> {
    store.remove()?;
    tracing::info!("Session cleared");
    Ok(login_url.to_string())
}
