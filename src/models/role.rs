//! Access levels and the role-name table.

use serde::{Deserialize, Serialize};

/// Label used for access levels missing from the role table.
pub const UNKNOWN_ROLE: &str = "Unknown role";

/// A GitLab access level, as returned in member listings.
///
/// See <https://docs.gitlab.com/ee/api/members.html#roles>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessLevel(pub i64);

impl AccessLevel {
    /// Role name for this level, or `None` if the level is not in the table.
    pub fn known_role(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("No access"),
            5 => Some("Minimal access"),
            10 => Some("Guest"),
            20 => Some("Reporter"),
            30 => Some("Developer"),
            40 => Some("Maintainer"),
            50 => Some("Owner"),
            _ => None,
        }
    }

    /// Role name for this level, falling back to [`UNKNOWN_ROLE`].
    pub fn role_name(self) -> &'static str {
        self.known_role().unwrap_or(UNKNOWN_ROLE)
    }
}
