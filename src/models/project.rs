//! Project model.

use serde::{Deserialize, Serialize};

/// A GitLab project.
///
/// Recognised by its namespaced path (e.g. `org/team/proj`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,

    /// Path including every parent namespace, used as the display path.
    pub path_with_namespace: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub web_url: Option<String>,
}
