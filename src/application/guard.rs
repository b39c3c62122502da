// SPDX-License-Identifier: MPL-2.0
//! Admin area access decisions.
//!
//! [`AccessGate`] is the state machine behind the admin screens. It consumes
//! auth-state transitions and claim lookups, and answers one question: may
//! the current user see the gated content right now?
//!
//! The gate itself performs no I/O and owns no timers. Every step returns a
//! [`GateDirective`] telling the shell what to do next (fetch fresh claims,
//! sign the user out, redirect to sign-in). This keeps the rules testable
//! without a provider in the loop.
//!
//! # Rules
//!
//! - No identity: access denied, redirect to sign-in (once per mount)
//! - Identity present, no claim configured: access granted
//! - Identity present, claim configured: verify against freshly fetched
//!   claims; a missing or falsy claim, or any failure to verify, denies
//!   access and force-signs the user out. Verification never grants on
//!   error.
//! - Claim results from a superseded auth state are discarded

use crate::domain::auth::{ClaimSet, Identity};
use crate::application::port::identity::ClaimsError;

// =============================================================================
// Status and Directives
// =============================================================================

/// What the gated screen should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateStatus {
    /// Verification in progress; render a neutral placeholder.
    Checking,
    /// Render the gated content.
    Authorized,
    /// Render nothing; the shell is redirecting.
    Unauthorized,
}

/// Side effect the shell must run after a gate step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDirective {
    /// Nothing to do.
    None,

    /// Fetch fresh claims and report back via [`AccessGate::on_claims`]
    /// with the same `epoch`.
    FetchClaims { epoch: u64, force_refresh: bool },

    /// Access denied. `sign_out` ends the session (set when a signed-in
    /// user failed verification); `redirect` sends the user to sign-in
    /// and is `true` at most once per gate.
    Deny { sign_out: bool, redirect: bool },
}

// =============================================================================
// AccessGate
// =============================================================================

/// Access state machine for one visit to the admin area.
///
/// Create a fresh gate when the gated screen mounts and drop it on leave;
/// the at-most-one-redirect rule is scoped to the gate's lifetime.
#[derive(Debug)]
pub struct AccessGate {
    required_claim: Option<String>,
    status: GateStatus,
    redirected: bool,
    epoch: u64,
}

impl AccessGate {
    /// Creates a gate requiring the named claim, or none.
    ///
    /// The gate starts in [`GateStatus::Checking`] until the first
    /// auth-state report arrives.
    #[must_use]
    pub fn new(required_claim: Option<String>) -> Self {
        Self {
            required_claim,
            status: GateStatus::Checking,
            redirected: false,
            epoch: 0,
        }
    }

    /// What the gated screen should render right now.
    #[must_use]
    pub fn status(&self) -> GateStatus {
        self.status
    }

    /// Feeds an auth-state transition into the gate.
    ///
    /// Every transition supersedes any claim verification still in flight:
    /// the epoch advances and late results are discarded by
    /// [`on_claims`](Self::on_claims).
    pub fn on_auth_change(&mut self, identity: Option<&Identity>) -> GateDirective {
        self.epoch += 1;

        match identity {
            None => {
                self.status = GateStatus::Unauthorized;
                GateDirective::Deny {
                    sign_out: false,
                    redirect: self.take_redirect(),
                }
            }
            Some(_) => match self.required_claim {
                None => {
                    self.status = GateStatus::Authorized;
                    GateDirective::None
                }
                Some(_) => {
                    // Re-verification of an already admitted user keeps the
                    // content up; only a first-time check shows the placeholder.
                    if self.status != GateStatus::Authorized {
                        self.status = GateStatus::Checking;
                    }
                    GateDirective::FetchClaims {
                        epoch: self.epoch,
                        force_refresh: true,
                    }
                }
            },
        }
    }

    /// Feeds the outcome of a claim fetch into the gate.
    ///
    /// `epoch` must be the value from the triggering
    /// [`GateDirective::FetchClaims`]; results for a superseded epoch are
    /// dropped without effect.
    pub fn on_claims(
        &mut self,
        epoch: u64,
        result: Result<ClaimSet, ClaimsError>,
    ) -> GateDirective {
        if epoch != self.epoch {
            return GateDirective::None;
        }
        let Some(claim) = &self.required_claim else {
            return GateDirective::None;
        };

        match result {
            Ok(claims) if claims.is_truthy(claim) => {
                self.status = GateStatus::Authorized;
                GateDirective::None
            }
            // Missing claim, falsy claim, or any verification failure:
            // deny and end the session rather than trust a stale grant.
            Ok(_) | Err(_) => {
                self.status = GateStatus::Unauthorized;
                GateDirective::Deny {
                    sign_out: true,
                    redirect: self.take_redirect(),
                }
            }
        }
    }

    fn take_redirect(&mut self) -> bool {
        if self.redirected {
            return false;
        }
        self.redirected = true;
        true
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::ClaimValue;

    fn resident() -> Identity {
        Identity {
            uid: "uid-1".into(),
            email: "resident@example.org".into(),
            display_name: None,
        }
    }

    fn claims_with(name: &str, value: ClaimValue) -> ClaimSet {
        let mut claims = ClaimSet::new();
        claims.insert(name, value);
        claims
    }

    // -------------------------------------------------------------------------
    // No identity
    // -------------------------------------------------------------------------

    #[test]
    fn gate_starts_checking() {
        let gate = AccessGate::new(Some("admin".into()));
        assert_eq!(gate.status(), GateStatus::Checking);
    }

    #[test]
    fn signed_out_user_is_denied_and_redirected_once() {
        let mut gate = AccessGate::new(Some("admin".into()));

        let directive = gate.on_auth_change(None);
        assert_eq!(gate.status(), GateStatus::Unauthorized);
        assert_eq!(
            directive,
            GateDirective::Deny {
                sign_out: false,
                redirect: true
            }
        );

        // A second report without identity must not redirect again.
        let directive = gate.on_auth_change(None);
        assert_eq!(
            directive,
            GateDirective::Deny {
                sign_out: false,
                redirect: false
            }
        );
    }

    // -------------------------------------------------------------------------
    // Identity without a configured claim
    // -------------------------------------------------------------------------

    #[test]
    fn identity_with_no_required_claim_is_authorized_immediately() {
        let mut gate = AccessGate::new(None);

        let identity = resident();
        let directive = gate.on_auth_change(Some(&identity));

        assert_eq!(gate.status(), GateStatus::Authorized);
        assert_eq!(directive, GateDirective::None);
    }

    // -------------------------------------------------------------------------
    // Claim verification
    // -------------------------------------------------------------------------

    #[test]
    fn identity_with_required_claim_triggers_forced_fetch() {
        let mut gate = AccessGate::new(Some("admin".into()));

        let identity = resident();
        let directive = gate.on_auth_change(Some(&identity));

        assert_eq!(gate.status(), GateStatus::Checking);
        assert_eq!(
            directive,
            GateDirective::FetchClaims {
                epoch: 1,
                force_refresh: true
            }
        );
    }

    #[test]
    fn truthy_claim_authorizes() {
        let mut gate = AccessGate::new(Some("admin".into()));
        let identity = resident();
        let GateDirective::FetchClaims { epoch, .. } = gate.on_auth_change(Some(&identity)) else {
            panic!("expected a claim fetch");
        };

        let directive = gate.on_claims(epoch, Ok(claims_with("admin", ClaimValue::Bool(true))));
        assert_eq!(gate.status(), GateStatus::Authorized);
        assert_eq!(directive, GateDirective::None);
    }

    #[test]
    fn missing_claim_denies_signs_out_and_redirects_once() {
        let mut gate = AccessGate::new(Some("admin".into()));
        let identity = resident();
        let GateDirective::FetchClaims { epoch, .. } = gate.on_auth_change(Some(&identity)) else {
            panic!("expected a claim fetch");
        };

        let directive = gate.on_claims(epoch, Ok(ClaimSet::new()));
        assert_eq!(gate.status(), GateStatus::Unauthorized);
        assert_eq!(
            directive,
            GateDirective::Deny {
                sign_out: true,
                redirect: true
            }
        );

        // The forced sign-out comes back through the auth listener; the gate
        // must not ask for a second redirect.
        let directive = gate.on_auth_change(None);
        assert_eq!(
            directive,
            GateDirective::Deny {
                sign_out: false,
                redirect: false
            }
        );
    }

    #[test]
    fn falsy_claim_denies() {
        let mut gate = AccessGate::new(Some("admin".into()));
        let identity = resident();
        let GateDirective::FetchClaims { epoch, .. } = gate.on_auth_change(Some(&identity)) else {
            panic!("expected a claim fetch");
        };

        let directive = gate.on_claims(epoch, Ok(claims_with("admin", ClaimValue::Bool(false))));
        assert_eq!(gate.status(), GateStatus::Unauthorized);
        assert!(matches!(
            directive,
            GateDirective::Deny { sign_out: true, .. }
        ));
    }

    #[test]
    fn verification_failure_fails_closed() {
        let mut gate = AccessGate::new(Some("admin".into()));
        let identity = resident();
        let GateDirective::FetchClaims { epoch, .. } = gate.on_auth_change(Some(&identity)) else {
            panic!("expected a claim fetch");
        };

        let directive = gate.on_claims(epoch, Err(ClaimsError::Network("timeout".into())));
        assert_eq!(gate.status(), GateStatus::Unauthorized);
        assert!(matches!(
            directive,
            GateDirective::Deny { sign_out: true, .. }
        ));
    }

    // -------------------------------------------------------------------------
    // Epochs and re-verification
    // -------------------------------------------------------------------------

    #[test]
    fn stale_claim_results_are_discarded() {
        let mut gate = AccessGate::new(Some("admin".into()));
        let identity = resident();

        let GateDirective::FetchClaims { epoch: first, .. } =
            gate.on_auth_change(Some(&identity))
        else {
            panic!("expected a claim fetch");
        };

        // The user signs out before the claim fetch lands.
        gate.on_auth_change(None);

        let directive = gate.on_claims(first, Ok(claims_with("admin", ClaimValue::Bool(true))));
        assert_eq!(directive, GateDirective::None);
        assert_eq!(
            gate.status(),
            GateStatus::Unauthorized,
            "stale grant must not resurrect access"
        );
    }

    #[test]
    fn reverification_keeps_content_visible_while_pending() {
        let mut gate = AccessGate::new(Some("admin".into()));
        let identity = resident();

        let GateDirective::FetchClaims { epoch, .. } = gate.on_auth_change(Some(&identity)) else {
            panic!("expected a claim fetch");
        };
        gate.on_claims(epoch, Ok(claims_with("admin", ClaimValue::Bool(true))));
        assert_eq!(gate.status(), GateStatus::Authorized);

        // Token refresh re-reports the same user; no placeholder flash.
        let directive = gate.on_auth_change(Some(&identity));
        assert_eq!(gate.status(), GateStatus::Authorized);
        assert!(matches!(directive, GateDirective::FetchClaims { .. }));
    }

    #[test]
    fn sign_out_while_authorized_redirects() {
        let mut gate = AccessGate::new(Some("admin".into()));
        let identity = resident();

        let GateDirective::FetchClaims { epoch, .. } = gate.on_auth_change(Some(&identity)) else {
            panic!("expected a claim fetch");
        };
        gate.on_claims(epoch, Ok(claims_with("admin", ClaimValue::Bool(true))));

        let directive = gate.on_auth_change(None);
        assert_eq!(gate.status(), GateStatus::Unauthorized);
        assert_eq!(
            directive,
            GateDirective::Deny {
                sign_out: false,
                redirect: true
            }
        );
    }

    #[test]
    fn epochs_advance_with_every_auth_report() {
        let mut gate = AccessGate::new(Some("admin".into()));
        let identity = resident();

        let GateDirective::FetchClaims { epoch: first, .. } =
            gate.on_auth_change(Some(&identity))
        else {
            panic!("expected a claim fetch");
        };
        let GateDirective::FetchClaims { epoch: second, .. } =
            gate.on_auth_change(Some(&identity))
        else {
            panic!("expected a claim fetch");
        };
        assert!(second > first);

        // Only the latest epoch may decide.
        assert_eq!(
            gate.on_claims(first, Ok(claims_with("admin", ClaimValue::Bool(true)))),
            GateDirective::None
        );
        assert_eq!(
            gate.on_claims(second, Ok(claims_with("admin", ClaimValue::Bool(true)))),
            GateDirective::None
        );
        assert_eq!(gate.status(), GateStatus::Authorized);
    }
}
