//! Mock server state management.
//!
//! Provides the in-memory group hierarchy served by the mock GitLab API.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{Group, Member, Project};

/// Shared state for the mock server.
///
/// Wrapped in `Arc<RwLock<_>>` for concurrent access from handlers.
#[derive(Debug, Default)]
pub struct MockState {
    /// Groups indexed by ID. Ordered so listings are deterministic.
    pub groups: BTreeMap<u64, Group>,

    /// Projects indexed by ID, with the ID of the group that owns them.
    pub projects: BTreeMap<u64, (u64, Project)>,

    /// Direct members of each group.
    pub group_members: HashMap<u64, Vec<Member>>,

    /// Direct members of each project.
    pub project_members: HashMap<u64, Vec<Member>>,

    /// Forced error statuses keyed by request path (e.g. `groups/2/members`).
    pub failures: HashMap<String, u16>,

    /// Every request path and page served, in arrival order.
    pub request_log: Vec<String>,

    /// Optional authentication token. If set, requests must send it in
    /// `PRIVATE-TOKEN`.
    pub required_token: Option<String>,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a group to the state.
    pub fn with_group(mut self, group: Group) -> Self {
        self.groups.insert(group.id, group);
        self
    }

    /// Add a project owned by `group_id`.
    pub fn with_project(mut self, group_id: u64, project: Project) -> Self {
        self.projects.insert(project.id, (group_id, project));
        self
    }

    /// Add a direct member to a group.
    pub fn with_group_member(mut self, group_id: u64, member: Member) -> Self {
        self.group_members.entry(group_id).or_default().push(member);
        self
    }

    /// Add a direct member to a project.
    pub fn with_project_member(mut self, project_id: u64, member: Member) -> Self {
        self.project_members.entry(project_id).or_default().push(member);
        self
    }

    /// Answer requests for `path` with `status`.
    pub fn with_failure(mut self, path: &str, status: u16) -> Self {
        self.failures.insert(path.to_string(), status);
        self
    }

    /// Set the required authentication token.
    pub fn with_required_token(mut self, token: &str) -> Self {
        self.required_token = Some(token.to_string());
        self
    }

    /// Get a group by ID.
    pub fn get_group(&self, id: u64) -> Option<&Group> {
        self.groups.get(&id)
    }

    /// Every group below `id`, at any depth, in ascending ID order.
    pub fn descendant_groups(&self, id: u64) -> Vec<&Group> {
        self.groups
            .values()
            .filter(|g| g.id != id && self.is_descendant(g, id))
            .collect()
    }

    fn is_descendant(&self, group: &Group, ancestor: u64) -> bool {
        let mut parent = group.parent_id;
        // Bounded by the number of groups so a parent cycle cannot hang
        for _ in 0..self.groups.len() {
            match parent {
                Some(p) if p == ancestor => return true,
                Some(p) => parent = self.groups.get(&p).and_then(|g| g.parent_id),
                None => return false,
            }
        }
        false
    }

    /// Projects owned directly by a group.
    pub fn group_projects(&self, group_id: u64) -> Vec<&Project> {
        self.projects
            .values()
            .filter(|(owner, _)| *owner == group_id)
            .map(|(_, p)| p)
            .collect()
    }

    /// Whether a project exists.
    pub fn has_project(&self, id: u64) -> bool {
        self.projects.contains_key(&id)
    }

    /// Direct members of a group.
    pub fn members_of_group(&self, group_id: u64) -> &[Member] {
        self.group_members.get(&group_id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Direct members of a project.
    pub fn members_of_project(&self, project_id: u64) -> &[Member] {
        self.project_members
            .get(&project_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of logged requests whose path equals `path`.
    pub fn requests_for(&self, path: &str) -> usize {
        self.request_log
            .iter()
            .filter(|entry| entry.split('?').next() == Some(path))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_server::Fixtures;

    fn hierarchy() -> MockState {
        MockState::new()
            .with_group(Fixtures::group(1, "org", None))
            .with_group(Fixtures::group(2, "org/team", Some(1)))
            .with_group(Fixtures::group(3, "org/team/backend", Some(2)))
            .with_group(Fixtures::group(4, "other", None))
    }

    #[test]
    fn test_descendants_are_transitive() {
        let state = hierarchy();
        let ids: Vec<u64> = state.descendant_groups(1).iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![2, 3]);

        let ids: Vec<u64> = state.descendant_groups(2).iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![3]);

        assert!(state.descendant_groups(4).is_empty());
    }

    #[test]
    fn test_group_projects() {
        let state = hierarchy()
            .with_project(2, Fixtures::project(10, "org/team/proj"))
            .with_project(3, Fixtures::project(11, "org/team/backend/api"));

        let projects = state.group_projects(2);
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].path_with_namespace, "org/team/proj");
        assert!(state.group_projects(1).is_empty());
    }

    #[test]
    fn test_members() {
        let state = hierarchy().with_group_member(1, Fixtures::member(7, "Jane Doe", "jdoe", 30));
        assert_eq!(state.members_of_group(1).len(), 1);
        assert!(state.members_of_group(2).is_empty());
        assert!(state.members_of_project(10).is_empty());
    }
}
