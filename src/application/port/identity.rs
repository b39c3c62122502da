// SPDX-License-Identifier: MPL-2.0
//! Identity provider port definition.
//!
//! This module defines the [`IdentityProvider`] trait for sign-in, sign-out,
//! auth-state watching, and access claim retrieval, plus the small
//! [`TokenSource`] trait the content store adapter uses to attach bearer
//! tokens to its requests.
//!
//! # Auth watching
//!
//! [`IdentityProvider::on_auth_change`] registers a listener and invokes it
//! once immediately with the current state, so a new subscriber never waits
//! for the next transition to learn where it stands. The returned
//! [`AuthWatch`] unregisters the listener when dropped.

use crate::domain::auth::{ClaimSet, Identity};
use futures_util::future::BoxFuture;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// Errors
// =============================================================================

/// Errors that can occur during sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The request never completed.
    Network(String),

    /// The provider rejected the email/password pair.
    InvalidCredentials,

    /// The provider refused the request for another reason (disabled
    /// account, too many attempts, malformed response).
    Rejected(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Network(msg) => write!(f, "Network error: {msg}"),
            AuthError::InvalidCredentials => write!(f, "Invalid email or password"),
            AuthError::Rejected(msg) => write!(f, "Sign-in rejected: {msg}"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Errors that can occur while fetching access claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimsError {
    /// The request never completed.
    Network(String),

    /// No user is signed in.
    NotSignedIn,

    /// The token arrived but its claims could not be decoded.
    Decode(String),
}

impl fmt::Display for ClaimsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimsError::Network(msg) => write!(f, "Network error: {msg}"),
            ClaimsError::NotSignedIn => write!(f, "Not signed in"),
            ClaimsError::Decode(msg) => write!(f, "Bad token: {msg}"),
        }
    }
}

impl std::error::Error for ClaimsError {}

// =============================================================================
// Auth Watching
// =============================================================================

/// Callback invoked on every auth-state transition.
pub type AuthListener = Arc<dyn Fn(Option<Identity>) + Send + Sync>;

/// Keeps an auth listener registered; dropping it unregisters the listener.
///
/// Providers build one with [`AuthWatch::new`], handing over whatever
/// cleanup their registry needs.
pub struct AuthWatch {
    unsubscribe: Option<Box<dyn FnOnce() + Send>>,
}

impl AuthWatch {
    /// Wraps the provider-specific unregistration step.
    #[must_use]
    pub fn new(unsubscribe: impl FnOnce() + Send + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }
}

impl Drop for AuthWatch {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl fmt::Debug for AuthWatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthWatch")
            .field("registered", &self.unsubscribe.is_some())
            .finish()
    }
}

// =============================================================================
// IdentityProvider Trait
// =============================================================================

/// Port for the identity service.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; listeners may be invoked from
/// whatever thread completes the triggering call.
pub trait IdentityProvider: Send + Sync {
    /// The currently signed-in user, if any.
    fn current_identity(&self) -> Option<Identity>;

    /// Registers a listener for auth-state transitions.
    ///
    /// The listener is invoked once immediately with the current state.
    /// Dropping the returned [`AuthWatch`] unregisters it.
    fn on_auth_change(&self, listener: AuthListener) -> AuthWatch;

    /// Signs in with an email/password pair.
    ///
    /// On success the identity becomes current and registered listeners fire.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the provider rejects the credentials or
    /// the request fails.
    fn sign_in(
        &self,
        email: String,
        password: String,
    ) -> BoxFuture<'_, Result<Identity, AuthError>>;

    /// Discards the current session. Registered listeners fire with `None`.
    ///
    /// Clearing local state never fails and needs no round-trip.
    fn sign_out(&self);

    /// Fetches the access claims of the current user.
    ///
    /// With `force_refresh` the provider must bypass any cached token and
    /// obtain a fresh one, so recently revoked permissions are seen.
    ///
    /// # Errors
    ///
    /// Returns a [`ClaimsError`] if nobody is signed in, the refresh fails,
    /// or the token cannot be decoded.
    fn fetch_claims(&self, force_refresh: bool) -> BoxFuture<'_, Result<ClaimSet, ClaimsError>>;
}

// =============================================================================
// TokenSource Trait
// =============================================================================

/// Port for obtaining the bearer token attached to store requests.
///
/// Kept separate from [`IdentityProvider`] so the content store adapter
/// depends only on the one capability it needs.
pub trait TokenSource: Send + Sync {
    /// The current bearer token, or `None` when signed out.
    fn bearer_token(&self) -> BoxFuture<'_, Option<String>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn auth_error_display() {
        let err = AuthError::Network("timeout".to_string());
        assert!(format!("{err}").contains("timeout"));

        let err = AuthError::InvalidCredentials;
        assert_eq!(format!("{err}"), "Invalid email or password");

        let err = AuthError::Rejected("USER_DISABLED".to_string());
        assert!(format!("{err}").contains("USER_DISABLED"));
    }

    #[test]
    fn claims_error_display() {
        let err = ClaimsError::NotSignedIn;
        assert_eq!(format!("{err}"), "Not signed in");

        let err = ClaimsError::Decode("bad payload".to_string());
        assert!(format!("{err}").contains("bad payload"));
    }

    #[test]
    fn dropping_a_watch_runs_the_unsubscribe_hook() {
        static UNSUBSCRIBED: AtomicBool = AtomicBool::new(false);

        let watch = AuthWatch::new(|| UNSUBSCRIBED.store(true, Ordering::SeqCst));
        assert!(!UNSUBSCRIBED.load(Ordering::SeqCst));

        drop(watch);
        assert!(UNSUBSCRIBED.load(Ordering::SeqCst));
    }
}
