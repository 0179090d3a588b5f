//! Member model and trait implementations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::role::AccessLevel;
use crate::traits::List;

/// A direct member of a group or project.
///
/// Member endpoints only return explicit memberships; access inherited from
/// parent groups is not included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Numeric user ID, stable across resources.
    pub id: u64,

    /// Display name.
    pub name: String,

    /// Login handle, without the leading `@`.
    pub username: String,

    /// Access level on the resource the member was listed under.
    pub access_level: AccessLevel,

    /// Account state (e.g. "active", "blocked").
    #[serde(default)]
    pub state: Option<String>,

    /// Date the membership expires, if one is set.
    #[serde(default)]
    pub expires_at: Option<NaiveDate>,
}

impl Member {
    /// `"<name> (@<username>)"`, the heading used in reports.
    pub fn display_name(&self) -> String {
        format!("{} (@{})", self.name, self.username)
    }

    /// Role label for this membership.
    pub fn role_name(&self) -> &'static str {
        self.access_level.role_name()
    }
}

/// Resource a member list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberScope {
    Group(u64),
    Project(u64),
}

impl List for Member {
    type Scope = MemberScope;

    fn list_path(scope: &MemberScope) -> String {
        match scope {
            MemberScope::Group(id) => format!("groups/{id}/members"),
            MemberScope::Project(id) => format!("projects/{id}/members"),
        }
    }
}
