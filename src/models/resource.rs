//! Shape-based decoding of list items into groups and projects.

use serde::{Deserialize, Serialize};

use crate::models::group::{Group, GroupId};
use crate::models::member::MemberScope;
use crate::models::project::Project;
use crate::traits::List;

/// An item returned by a group or project listing.
///
/// Decoded by shape: anything with a `full_path` is a group, anything with
/// a `path_with_namespace` is a project. Other shapes are kept as raw JSON
/// and ignored by the audit.
///
/// Shape here means the whole item decodes as [`Group`] or [`Project`], not
/// merely that the path attribute is present. An item whose `id` or path has
/// the wrong JSON type (e.g. a numeric `full_path`) falls through to
/// [`Resource::Other`] and is skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Resource {
    Group(Group),
    Project(Project),
    Other(serde_json::Value),
}

impl Resource {
    /// Display path: `full_path` or `path_with_namespace`.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Group(g) => Some(&g.full_path),
            Self::Project(p) => Some(&p.path_with_namespace),
            Self::Other(_) => None,
        }
    }

    /// Where this resource's members are listed.
    pub fn member_scope(&self) -> Option<MemberScope> {
        match self {
            Self::Group(g) => Some(MemberScope::Group(g.id)),
            Self::Project(p) => Some(MemberScope::Project(p.id)),
            Self::Other(_) => None,
        }
    }

    /// Group ID, if this is a group.
    pub fn group_id(&self) -> Option<u64> {
        match self {
            Self::Group(g) => Some(g.id),
            _ => None,
        }
    }

    /// Short kind label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Group(_) => "group",
            Self::Project(_) => "project",
            Self::Other(_) => "unrecognized",
        }
    }
}

impl From<Group> for Resource {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}

/// Collections of resources that hang off a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceScope {
    /// Every subgroup at any depth below the group.
    DescendantGroups(GroupId),
    /// Projects directly inside the group.
    GroupProjects(u64),
}

impl List for Resource {
    type Scope = ResourceScope;

    fn list_path(scope: &ResourceScope) -> String {
        match scope {
            ResourceScope::DescendantGroups(id) => format!("groups/{id}/descendant_groups"),
            ResourceScope::GroupProjects(id) => format!("groups/{id}/projects"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_group_shape() {
        let resource: Resource =
            serde_json::from_value(json!({"id": 2, "name": "team", "full_path": "org/team"}))
                .unwrap();
        assert!(matches!(resource, Resource::Group(_)));
        assert_eq!(resource.path(), Some("org/team"));
        assert_eq!(resource.member_scope(), Some(MemberScope::Group(2)));
        assert_eq!(resource.group_id(), Some(2));
    }

    #[test]
    fn test_project_shape() {
        let resource: Resource = serde_json::from_value(json!({
            "id": 10,
            "name": "proj",
            "path_with_namespace": "org/team/proj",
            "namespace": {"id": 2, "full_path": "org/team"}
        }))
        .unwrap();
        assert!(matches!(resource, Resource::Project(_)));
        assert_eq!(resource.path(), Some("org/team/proj"));
        assert_eq!(resource.member_scope(), Some(MemberScope::Project(10)));
        assert_eq!(resource.group_id(), None);
    }

    #[test]
    fn test_unrecognized_shape() {
        let resource: Resource =
            serde_json::from_value(json!({"id": 5, "name": "snippet"})).unwrap();
        assert!(matches!(resource, Resource::Other(_)));
        assert_eq!(resource.path(), None);
        assert_eq!(resource.member_scope(), None);
    }

    #[test]
    fn test_mistyped_path_is_unrecognized() {
        let resource: Resource =
            serde_json::from_value(json!({"id": 3, "full_path": 42})).unwrap();
        assert!(matches!(resource, Resource::Other(_)));

        let resource: Resource = serde_json::from_value(
            json!({"id": "ten", "path_with_namespace": "org/team/proj"}),
        )
        .unwrap();
        assert!(matches!(resource, Resource::Other(_)));
        assert_eq!(resource.member_scope(), None);
    }

    #[test]
    fn test_list_paths() {
        let id = GroupId::new(1).unwrap();
        assert_eq!(
            Resource::list_path(&ResourceScope::DescendantGroups(id)),
            "groups/1/descendant_groups"
        );
        assert_eq!(
            Resource::list_path(&ResourceScope::GroupProjects(4)),
            "groups/4/projects"
        );
    }
}
