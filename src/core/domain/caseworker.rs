//! Caseworker lookup table.
//!
//! One identifier decides both the spreadsheet label and the key used to
//! scope the case query, so both come out of the same table entry.

use crate::core::constants;

/// Key under `caseworker.kspIdentity` that scopes a case query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKey {
    /// Scope by RACF id
    RacfId,
    /// Scope by user or team key
    UserKey,
}

impl ScopeKey {
    /// JSON field name
    pub fn as_str(self) -> &'static str {
        match self {
            ScopeKey::RacfId => "racfId",
            ScopeKey::UserKey => "userKey",
        }
    }
}

impl std::fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label and scope selector for a caseworker bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    /// Value written to the `Indsendelser` column
    pub label: &'static str,
    /// Query scope key
    pub scope: ScopeKey,
}

const CHANGED_SUBMISSIONS: Profile = Profile {
    label: "Ændrede indsendelser",
    scope: ScopeKey::RacfId,
};

const NEW_SUBMISSIONS: Profile = Profile {
    label: "Nye indsendelser",
    scope: ScopeKey::UserKey,
};

/// Identifiers with a dedicated profile. Matching is exact.
const PROFILES: &[(&str, Profile)] = &[(
    constants::CHANGED_SUBMISSIONS_CASEWORKER,
    CHANGED_SUBMISSIONS,
)];

/// Profile for a caseworker; anything not in the table is a new-submissions bucket.
pub fn profile(caseworker: &str) -> Profile {
    PROFILES
        .iter()
        .find(|(id, _)| *id == caseworker)
        .map(|(_, p)| *p)
        .unwrap_or(NEW_SUBMISSIONS)
}
