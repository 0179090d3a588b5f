//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use crate::{AccessLevel, Group, Member, Project};

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    // =========================================================================
    // Resource Fixtures
    // =========================================================================

    /// Create a group. The name is the last path segment.
    pub fn group(id: u64, full_path: &str, parent_id: Option<u64>) -> Group {
        let name = full_path.rsplit('/').next().unwrap_or(full_path);
        Group {
            id,
            full_path: full_path.to_string(),
            name: name.to_string(),
            parent_id,
            web_url: Some(format!("https://gitlab.example.com/groups/{full_path}")),
        }
    }

    /// Create a project. The name is the last path segment.
    pub fn project(id: u64, path_with_namespace: &str) -> Project {
        let name = path_with_namespace
            .rsplit('/')
            .next()
            .unwrap_or(path_with_namespace);
        Project {
            id,
            path_with_namespace: path_with_namespace.to_string(),
            name: name.to_string(),
            web_url: Some(format!("https://gitlab.example.com/{path_with_namespace}")),
        }
    }

    // =========================================================================
    // Member Fixtures
    // =========================================================================

    /// Create an active member with the given access level.
    pub fn member(id: u64, name: &str, username: &str, access_level: i64) -> Member {
        Member {
            id,
            name: name.to_string(),
            username: username.to_string(),
            access_level: AccessLevel(access_level),
            state: Some("active".to_string()),
            expires_at: None,
        }
    }

    /// Create `count` guests with IDs starting at `first_id`.
    pub fn guests(first_id: u64, count: u64) -> Vec<Member> {
        (first_id..first_id + count)
            .map(|id| Self::member(id, &format!("User {id}"), &format!("user{id}"), 10))
            .collect()
    }

    // =========================================================================
    // Scenarios
    // =========================================================================

    /// A small organization:
    ///
    /// - group 1 `org` with member Jane (Developer)
    /// - group 2 `org/team` below it
    /// - project 10 `org/team/proj` in group 2 with member Jane (Developer)
    pub fn default_scenario() -> DefaultScenario {
        let jane = Self::member(7, "Jane Doe", "jdoe", 30);

        DefaultScenario {
            groups: vec![
                Self::group(1, "org", None),
                Self::group(2, "org/team", Some(1)),
            ],
            projects: vec![(2, Self::project(10, "org/team/proj"))],
            group_members: vec![(1, jane.clone())],
            project_members: vec![(10, jane)],
        }
    }
}

/// Data for the default mock server state.
pub struct DefaultScenario {
    pub groups: Vec<Group>,
    /// `(owning group ID, project)`
    pub projects: Vec<(u64, Project)>,
    /// `(group ID, member)`
    pub group_members: Vec<(u64, Member)>,
    /// `(project ID, member)`
    pub project_members: Vec<(u64, Member)>,
}
