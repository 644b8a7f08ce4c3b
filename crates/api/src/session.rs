//! Cookie-backed session storage for each visitor's lists and flash message.
//!
//! Session records live in a [`MemoryStore`]; nothing survives a restart and
//! nothing is shared between visitors.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};
use checklist_core::board::TodoBoard;
use checklist_core::flash::Flash;
use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Name of the session cookie.
pub const SESSION_COOKIE_NAME: &str = "checklist.sid";

/// Session key holding the visitor's [`TodoBoard`].
const BOARD_KEY: &str = "all_lists";
/// Session key holding the pending [`Flash`], if any.
const FLASH_KEY: &str = "flash";

/// Session cookie configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Minutes of inactivity after which a session and its lists are dropped.
    pub inactivity_minutes: i64,
    /// Whether the cookie carries the `Secure` attribute.
    pub secure_cookie: bool,
}

impl SessionConfig {
    /// Load session settings from environment variables with defaults.
    ///
    /// | Env Var                      | Default |
    /// |------------------------------|---------|
    /// | `SESSION_INACTIVITY_MINUTES` | `1440`  |
    /// | `SESSION_SECURE_COOKIE`      | `false` |
    pub fn from_env() -> Self {
        let inactivity_minutes: i64 = std::env::var("SESSION_INACTIVITY_MINUTES")
            .unwrap_or_else(|_| "1440".into())
            .parse()
            .expect("SESSION_INACTIVITY_MINUTES must be a valid i64");

        let secure_cookie: bool = std::env::var("SESSION_SECURE_COOKIE")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("SESSION_SECURE_COOKIE must be `true` or `false`");

        Self {
            inactivity_minutes,
            secure_cookie,
        }
    }
}

/// Build the session middleware backed by a fresh in-memory store.
pub fn build_session_layer(config: &SessionConfig) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_secure(config.secure_cookie)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(
            config.inactivity_minutes,
        )))
}

/// The current visitor's session, typed for this application.
///
/// Use this as an extractor parameter in any handler that reads or changes
/// lists:
///
/// ```ignore
/// async fn my_handler(session: UserSession) -> AppResult<Response> {
///     let board = session.board().await?;
///     tracing::info!(lists = board.lists().len(), "handling request");
///     session.redirect_with(Flash::success("Done"), "/all-lists").await
/// }
/// ```
#[derive(Clone)]
pub struct UserSession {
    session: Session,
}

impl FromRequestParts<AppState> for UserSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::InternalError(msg.to_string()))?;

        Ok(UserSession { session })
    }
}

impl UserSession {
    /// Load the visitor's lists. A new session starts with no lists.
    pub async fn board(&self) -> AppResult<TodoBoard> {
        Ok(self
            .session
            .get::<TodoBoard>(BOARD_KEY)
            .await?
            .unwrap_or_default())
    }

    /// Replace the visitor's lists.
    pub async fn save_board(&self, board: &TodoBoard) -> AppResult<()> {
        self.session.insert(BOARD_KEY, board).await?;
        Ok(())
    }

    /// Queue a message for the next rendered page, replacing any pending one.
    pub async fn set_flash(&self, flash: Flash) -> AppResult<()> {
        self.session.insert(FLASH_KEY, flash).await?;
        Ok(())
    }

    /// Remove and return the pending message so it is shown only once.
    pub async fn take_flash(&self) -> AppResult<Option<Flash>> {
        Ok(self.session.remove::<Flash>(FLASH_KEY).await?)
    }

    /// Queue `flash` and redirect (303) to `to`.
    pub async fn redirect_with(&self, flash: Flash, to: &str) -> AppResult<Response> {
        self.set_flash(flash).await?;
        Ok(Redirect::to(to).into_response())
    }
}
