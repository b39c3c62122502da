// SPDX-License-Identifier: MPL-2.0
//! Identity provider adapter implementing [`IdentityProvider`] and
//! [`TokenSource`].
//!
//! Sign-in is `POST {base}/sessions` with an email/password pair; the
//! provider answers with the user's identity plus an ID/refresh token pair.
//! `POST {base}/sessions/refresh` trades the refresh token for fresh tokens.
//! An optional account API key is appended as a `key` query parameter.
//!
//! # Design Notes
//!
//! - The session lives in memory only. Closing the app signs the user out,
//!   which is the behavior the admin screens want.
//! - Access claims are read from the ID token's payload segment. The client
//!   does not verify the signature; the backend does that on every write,
//!   the claims here only drive what the UI offers.
//! - Listener callbacks registered via `on_auth_change` fire synchronously
//!   with the current state at registration, then on every transition.
//!
//! [`IdentityProvider`]: crate::application::port::IdentityProvider
//! [`TokenSource`]: crate::application::port::TokenSource

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use futures_util::future::BoxFuture;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::application::port::{
    AuthError, AuthListener, AuthWatch, ClaimsError, IdentityProvider, TokenSource,
};
use crate::domain::auth::{ClaimSet, ClaimValue, Identity};
use crate::error::Result;

// =============================================================================
// Adapter
// =============================================================================

/// HTTP adapter for the identity provider.
///
/// Cheap to clone; all clones share one session and listener registry.
#[derive(Clone)]
pub struct IdentityClient {
    inner: Arc<Inner>,
}

struct Inner {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    session: Mutex<Option<Session>>,
    listeners: Mutex<HashMap<u64, AuthListener>>,
    next_listener: AtomicU64,
}

#[derive(Clone)]
struct Session {
    identity: Identity,
    id_token: String,
    refresh_token: String,
}

impl IdentityClient {
    /// Creates an identity client for the given provider base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self {
            inner: Arc::new(Inner {
                http,
                base_url,
                api_key,
                session: Mutex::new(None),
                listeners: Mutex::new(HashMap::new()),
                next_listener: AtomicU64::new(0),
            }),
        })
    }
}

impl Inner {
    fn endpoint(&self, path: &str) -> String {
        match &self.api_key {
            Some(key) => format!("{}/{path}?key={key}", self.base_url),
            None => format!("{}/{path}", self.base_url),
        }
    }

    fn session_snapshot(&self) -> Option<Session> {
        self.session.lock().ok().and_then(|slot| slot.clone())
    }

    /// Stores (or clears) the session and tells every listener.
    fn replace_session(&self, session: Option<Session>) {
        let identity = session.as_ref().map(|s| s.identity.clone());
        if let Ok(mut slot) = self.session.lock() {
            *slot = session;
        }
        self.notify(identity);
    }

    /// Swaps in refreshed tokens without notifying; the identity is unchanged.
    ///
    /// A sign-out may have landed while the refresh was in flight, so this
    /// only touches a session still belonging to the same user.
    fn adopt_tokens(&self, uid: &str, tokens: TokenPair) {
        if let Ok(mut slot) = self.session.lock() {
            if let Some(session) = slot.as_mut() {
                if session.identity.uid == uid {
                    session.id_token = tokens.id_token;
                    session.refresh_token = tokens.refresh_token;
                }
            }
        }
    }

    fn notify(&self, identity: Option<Identity>) {
        // Collect first so a listener that drops its own watch cannot
        // deadlock on the registry lock.
        let listeners: Vec<AuthListener> = match self.listeners.lock() {
            Ok(map) => map.values().map(Arc::clone).collect(),
            Err(_) => return,
        };
        for listener in listeners {
            listener(identity.clone());
        }
    }

    async fn refresh_tokens(&self, refresh_token: &str) -> std::result::Result<TokenPair, ClaimsError> {
        let response = self
            .http
            .post(self.endpoint("sessions/refresh"))
            .json(&RefreshBody { refresh_token })
            .send()
            .await
            .map_err(|e| ClaimsError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ClaimsError::Network(format!("HTTP {}", response.status())));
        }
        response
            .json()
            .await
            .map_err(|e| ClaimsError::Decode(e.to_string()))
    }
}

// =============================================================================
// IdentityProvider implementation
// =============================================================================

impl IdentityProvider for IdentityClient {
    fn current_identity(&self) -> Option<Identity> {
        self.inner
            .session_snapshot()
            .map(|session| session.identity)
    }

    fn on_auth_change(&self, listener: AuthListener) -> AuthWatch {
        let id = self.inner.next_listener.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut listeners) = self.inner.listeners.lock() {
            listeners.insert(id, Arc::clone(&listener));
        }

        // Fire with the state as of registration so subscribers never wait
        // for the first transition.
        listener(self.current_identity());

        let inner: Weak<Inner> = Arc::downgrade(&self.inner);
        AuthWatch::new(move || {
            if let Some(inner) = inner.upgrade() {
                if let Ok(mut listeners) = inner.listeners.lock() {
                    listeners.remove(&id);
                }
            }
        })
    }

    fn sign_in(
        &self,
        email: String,
        password: String,
    ) -> BoxFuture<'_, std::result::Result<Identity, AuthError>> {
        let inner = Arc::clone(&self.inner);
        Box::pin(async move {
            let response = inner
                .http
                .post(inner.endpoint("sessions"))
                .json(&SignInBody {
                    email: &email,
                    password: &password,
                })
                .send()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;

            let status = response.status();
            if status == StatusCode::BAD_REQUEST || status == StatusCode::UNAUTHORIZED {
                return Err(AuthError::InvalidCredentials);
            }
            if !status.is_success() {
                return Err(AuthError::Rejected(format!("HTTP {status}")));
            }

            let dto: SessionDto = response
                .json()
                .await
                .map_err(|e| AuthError::Rejected(e.to_string()))?;

            let session = Session::from(dto);
            let identity = session.identity.clone();
            inner.replace_session(Some(session));
            Ok(identity)
        })
    }

    fn sign_out(&self) {
        self.inner.replace_session(None);
    }

    fn fetch_claims(
        &self,
        force_refresh: bool,
    ) -> BoxFuture<'_, std::result::Result<ClaimSet, ClaimsError>> {
        let inner = Arc::clone(&self.inner);
        Box::pin(async move {
            let Some(session) = inner.session_snapshot() else {
                return Err(ClaimsError::NotSignedIn);
            };

            let token = if force_refresh {
                let tokens = inner.refresh_tokens(&session.refresh_token).await?;
                inner.adopt_tokens(&session.identity.uid, tokens.clone());
                tokens.id_token
            } else {
                session.id_token
            };

            decode_claims(&token)
        })
    }
}

impl TokenSource for IdentityClient {
    fn bearer_token(&self) -> BoxFuture<'_, Option<String>> {
        let inner = Arc::clone(&self.inner);
        Box::pin(async move { inner.session_snapshot().map(|session| session.id_token) })
    }
}

// =============================================================================
// Token decoding
// =============================================================================

/// Reads the claims out of a JWT's payload segment.
fn decode_claims(token: &str) -> std::result::Result<ClaimSet, ClaimsError> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| ClaimsError::Decode("not a JWT".to_string()))?;

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| ClaimsError::Decode(e.to_string()))?;
    let value: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|e| ClaimsError::Decode(e.to_string()))?;
    let Some(object) = value.as_object() else {
        return Err(ClaimsError::Decode("payload is not an object".to_string()));
    };

    Ok(object
        .iter()
        .filter_map(|(name, value)| claim_value(value).map(|value| (name.clone(), value)))
        .collect())
}

/// Maps a JSON claim to its domain value; structured claims are skipped.
fn claim_value(value: &serde_json::Value) -> Option<ClaimValue> {
    match value {
        serde_json::Value::Bool(flag) => Some(ClaimValue::Bool(*flag)),
        serde_json::Value::String(text) => Some(ClaimValue::Text(text.clone())),
        serde_json::Value::Number(number) => number.as_f64().map(ClaimValue::Number),
        _ => None,
    }
}

// =============================================================================
// Wire records
// =============================================================================

#[derive(Serialize)]
struct SignInBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshBody<'a> {
    refresh_token: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionDto {
    uid: String,
    email: String,
    #[serde(default)]
    display_name: Option<String>,
    id_token: String,
    refresh_token: String,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenPair {
    id_token: String,
    refresh_token: String,
}

impl From<SessionDto> for Session {
    fn from(dto: SessionDto) -> Self {
        Self {
            identity: Identity {
                uid: dto.uid,
                email: dto.email,
                display_name: dto.display_name,
            },
            id_token: dto.id_token,
            refresh_token: dto.refresh_token,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
