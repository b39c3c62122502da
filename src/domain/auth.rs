// SPDX-License-Identifier: MPL-2.0
//! Identity and access claim types for the domain layer.
//!
//! A signed-in resident is an [`Identity`]. Fine-grained permissions travel
//! as a [`ClaimSet`], a flat map of named claims decoded from the identity
//! provider's token. The admin area only cares whether a single claim is
//! truthy, so the truthiness rules live here where they can be tested
//! without any provider in the loop.

use std::collections::HashMap;

// =============================================================================
// Identity
// =============================================================================

/// A signed-in user of the portal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Identity {
    /// Stable user identifier from the identity provider.
    pub uid: String,
    /// Sign-in email address.
    pub email: String,
    /// Optional display name.
    pub display_name: Option<String>,
}

// =============================================================================
// Claims
// =============================================================================

/// A single claim value from the identity token.
#[derive(Debug, Clone, PartialEq)]
pub enum ClaimValue {
    Bool(bool),
    Text(String),
    Number(f64),
}

impl ClaimValue {
    /// Truthiness rules for access checks: `true`, a non-empty string, or a
    /// non-zero number grant access; everything else denies it.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            ClaimValue::Bool(value) => *value,
            ClaimValue::Text(value) => !value.is_empty(),
            ClaimValue::Number(value) => *value != 0.0,
        }
    }
}

/// A flat set of named claims attached to an identity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClaimSet {
    values: HashMap<String, ClaimValue>,
}

impl ClaimSet {
    /// Creates an empty claim set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a claim.
    pub fn insert(&mut self, name: impl Into<String>, value: ClaimValue) {
        self.values.insert(name.into(), value);
    }

    /// Looks up a claim by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ClaimValue> {
        self.values.get(name)
    }

    /// Returns `true` if the named claim exists and is truthy.
    ///
    /// A missing claim is never truthy; access checks fail closed.
    #[must_use]
    pub fn is_truthy(&self, name: &str) -> bool {
        self.values
            .get(name)
            .is_some_and(ClaimValue::is_truthy)
    }

    /// Returns `true` if no claims are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, ClaimValue)> for ClaimSet {
    fn from_iter<T: IntoIterator<Item = (String, ClaimValue)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_claims_follow_their_value() {
        assert!(ClaimValue::Bool(true).is_truthy());
        assert!(!ClaimValue::Bool(false).is_truthy());
    }

    #[test]
    fn text_claims_are_truthy_when_non_empty() {
        assert!(ClaimValue::Text("admin".into()).is_truthy());
        assert!(!ClaimValue::Text(String::new()).is_truthy());
    }

    #[test]
    fn number_claims_are_truthy_when_non_zero() {
        assert!(ClaimValue::Number(1.0).is_truthy());
        assert!(ClaimValue::Number(-3.5).is_truthy());
        assert!(!ClaimValue::Number(0.0).is_truthy());
    }

    #[test]
    fn missing_claim_is_never_truthy() {
        let claims = ClaimSet::new();
        assert!(!claims.is_truthy("admin"));
    }

    #[test]
    fn present_falsy_claim_denies() {
        let mut claims = ClaimSet::new();
        claims.insert("admin", ClaimValue::Bool(false));
        assert!(!claims.is_truthy("admin"));
    }

    #[test]
    fn present_truthy_claim_grants() {
        let mut claims = ClaimSet::new();
        claims.insert("admin", ClaimValue::Bool(true));
        assert!(claims.is_truthy("admin"));
        assert_eq!(claims.get("admin"), Some(&ClaimValue::Bool(true)));
    }

    #[test]
    fn claim_set_collects_from_pairs() {
        let claims: ClaimSet = vec![
            ("admin".to_string(), ClaimValue::Bool(true)),
            ("tower".to_string(), ClaimValue::Text("B".into())),
        ]
        .into_iter()
        .collect();

        assert!(claims.is_truthy("admin"));
        assert!(claims.is_truthy("tower"));
        assert!(!claims.is_empty());
    }
}
