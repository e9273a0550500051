//! Session state helpers and extractors.
//!
//! Provides typed access to the role-tagged session state and an extractor
//! for requiring a shopkeeper login in route handlers.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use orderdesk_core::ShopId;

use crate::models::{SessionState, session_keys};

/// Read the role-tagged state from the session.
///
/// A session with no stored state is anonymous.
///
/// # Errors
///
/// Returns an error if the session cannot be read.
pub async fn session_state(
    session: &Session,
) -> Result<SessionState, tower_sessions::session::Error> {
    Ok(session
        .get::<SessionState>(session_keys::STATE)
        .await?
        .unwrap_or_default())
}

/// Replace the role-tagged state in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_session_state(
    session: &Session,
    state: &SessionState,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::STATE, state).await
}

/// Reset the session to anonymous (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_session_state(
    session: &Session,
) -> Result<(), tower_sessions::session::Error> {
    session.remove::<SessionState>(session_keys::STATE).await?;
    Ok(())
}

/// Extractor that requires an authenticated shopkeeper session.
///
/// If no shopkeeper is logged in, returns a redirect to the login page.
///
/// # Example
///
/// ```rust,ignore
/// async fn dashboard(
///     RequireShopkeeper(shop_id): RequireShopkeeper,
/// ) -> impl IntoResponse {
///     format!("Orders for shop {shop_id}")
/// }
/// ```
pub struct RequireShopkeeper(pub ShopId);

/// Error returned when a shopkeeper login is required but absent.
pub enum ShopkeeperRejection {
    /// Redirect to the shopkeeper login page.
    RedirectToLogin,
    /// Session layer missing from the request.
    Unavailable,
}

impl IntoResponse for ShopkeeperRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/shopkeeper").into_response(),
            Self::Unavailable => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireShopkeeper
where
    S: Send + Sync,
{
    type Rejection = ShopkeeperRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(ShopkeeperRejection::Unavailable)?;

        match session
            .get::<SessionState>(session_keys::STATE)
            .await
            .ok()
            .flatten()
            .unwrap_or_default()
        {
            SessionState::ShopkeeperAuthenticated { shop_id } => Ok(Self(shop_id)),
            _ => Err(ShopkeeperRejection::RedirectToLogin),
        }
    }
}
