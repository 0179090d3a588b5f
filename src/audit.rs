//! Group hierarchy traversal and member aggregation.
//!
//! Walks a top-level group, its projects, and all of its descendant groups
//! and their projects, merging every member listing into one record per
//! user.

use indexmap::IndexMap;
use serde::Serialize;

use crate::client::GitLabClient;
use crate::error::Result;
use crate::models::{Group, GroupId, Member, Resource, ResourceScope};
use crate::report::Report;
use crate::traits::{Get, List};

/// Aggregated affiliations of one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MemberRecord {
    /// `"<name> (@<username>)"` from the first listing the user appeared in.
    pub name: String,
    /// `"<full_path> (<role>)"` entries in encounter order.
    pub groups: Vec<String>,
    /// `"<path_with_namespace> (<role>)"` entries in encounter order.
    pub projects: Vec<String>,
}

impl MemberRecord {
    fn new(name: String) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }
}

/// Insertion-ordered mapping from user ID to [`MemberRecord`].
///
/// Records are created on first sight and only ever appended to.
#[derive(Debug, Clone, Default)]
pub struct MemberAudit {
    members: IndexMap<u64, MemberRecord>,
}

impl MemberAudit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a member listing of `resource` into the audit.
    ///
    /// Unrecognized resources are skipped. Repeated entries are not
    /// de-duplicated.
    pub fn record(&mut self, resource: &Resource, members: &[Member]) {
        let (is_group, path) = match resource {
            Resource::Group(g) => (true, g.full_path.as_str()),
            Resource::Project(p) => (false, p.path_with_namespace.as_str()),
            Resource::Other(_) => {
                tracing::debug!("skipping members of unrecognized resource");
                return;
            }
        };

        for member in members {
            let record = self
                .members
                .entry(member.id)
                .or_insert_with(|| MemberRecord::new(member.display_name()));

            let entry = format!("{path} ({})", member.role_name());
            if is_group {
                record.groups.push(entry);
            } else {
                record.projects.push(entry);
            }
        }
    }

    /// Record for a user, if they were seen.
    pub fn get(&self, member_id: u64) -> Option<&MemberRecord> {
        self.members.get(&member_id)
    }

    /// Number of distinct users seen.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Freeze the audit into a report.
    pub fn into_report(self) -> Report {
        Report::new(self.members)
    }
}

/// Audit every membership under a top-level group.
///
/// Requests are issued one at a time. The first failing request aborts the
/// audit and nothing collected so far is returned.
///
/// # Errors
///
/// Returns the first transport, status, or decode error encountered.
#[tracing::instrument(skip(client))]
pub async fn audit_group(client: &GitLabClient, id: GroupId) -> Result<Report> {
    let mut audit = MemberAudit::new();

    let top = Resource::from(Group::get(client, id).await?);
    tracing::info!(path = top.path().unwrap_or_default(), "auditing group");
    visit_group(client, &top, &mut audit).await?;

    let descendants = Resource::list_all(client, &ResourceScope::DescendantGroups(id)).await?;
    tracing::info!(count = descendants.len(), "found descendant groups");
    for group in &descendants {
        visit_group(client, group, &mut audit).await?;
    }

    tracing::info!(members = audit.len(), "audit complete");
    Ok(audit.into_report())
}

/// Aggregate a group's projects' members, then the group's own members.
async fn visit_group(
    client: &GitLabClient,
    group: &Resource,
    audit: &mut MemberAudit,
) -> Result<()> {
    let Some(group_id) = group.group_id() else {
        tracing::debug!(kind = group.kind(), "skipping non-group in group listing");
        return Ok(());
    };

    let projects = Resource::list_all(client, &ResourceScope::GroupProjects(group_id)).await?;
    for project in &projects {
        collect_members(client, project, audit).await?;
    }

    collect_members(client, group, audit).await
}

async fn collect_members(
    client: &GitLabClient,
    resource: &Resource,
    audit: &mut MemberAudit,
) -> Result<()> {
    let Some(scope) = resource.member_scope() else {
        tracing::debug!(kind = resource.kind(), "skipping resource without members");
        return Ok(());
    };

    let members = Member::list_all(client, &scope).await?;
    tracing::debug!(
        path = resource.path().unwrap_or_default(),
        count = members.len(),
        "fetched members"
    );
    audit.record(resource, &members);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccessLevel, Project};

    fn group(id: u64, path: &str) -> Resource {
        Resource::Group(Group {
            id,
            full_path: path.to_string(),
            name: String::new(),
            parent_id: None,
            web_url: None,
        })
    }

    fn project(id: u64, path: &str) -> Resource {
        Resource::Project(Project {
            id,
            path_with_namespace: path.to_string(),
            name: String::new(),
            web_url: None,
        })
    }

    fn member(id: u64, name: &str, username: &str, level: i64) -> Member {
        Member {
            id,
            name: name.to_string(),
            username: username.to_string(),
            access_level: AccessLevel(level),
            state: None,
            expires_at: None,
        }
    }

    #[test]
    fn test_member_in_group_and_project() {
        let mut audit = MemberAudit::new();
        let jane = member(7, "Jane Doe", "jdoe", 30);

        audit.record(&group(1, "org"), std::slice::from_ref(&jane));
        audit.record(&project(10, "org/team/proj"), &[jane]);

        assert_eq!(audit.len(), 1);
        let record = audit.get(7).unwrap();
        assert_eq!(record.name, "Jane Doe (@jdoe)");
        assert_eq!(record.groups, vec!["org (Developer)"]);
        assert_eq!(record.projects, vec!["org/team/proj (Developer)"]);
    }

    #[test]
    fn test_name_set_from_first_occurrence() {
        let mut audit = MemberAudit::new();
        audit.record(&group(1, "org"), &[member(7, "Jane Doe", "jdoe", 50)]);
        audit.record(&group(2, "org/team"), &[member(7, "Jane Smith", "jsmith", 10)]);

        let record = audit.get(7).unwrap();
        assert_eq!(record.name, "Jane Doe (@jdoe)");
        assert_eq!(record.groups, vec!["org (Owner)", "org/team (Guest)"]);
    }

    #[test]
    fn test_unknown_role_and_duplicates_kept() {
        let mut audit = MemberAudit::new();
        let odd = member(3, "Bot", "bot", 42);
        audit.record(&project(5, "org/app"), &[odd.clone(), odd]);

        let record = audit.get(3).unwrap();
        assert_eq!(
            record.projects,
            vec!["org/app (Unknown role)", "org/app (Unknown role)"]
        );
        assert!(record.groups.is_empty());
    }

    #[test]
    fn test_unrecognized_resource_is_skipped() {
        let mut audit = MemberAudit::new();
        let other = Resource::Other(serde_json::json!({"id": 1}));
        audit.record(&other, &[member(1, "A", "a", 30)]);
        assert!(audit.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut audit = MemberAudit::new();
        audit.record(
            &group(1, "org"),
            &[member(9, "Zed", "zed", 30), member(2, "Amy", "amy", 40)],
        );
        audit.record(&project(3, "org/p"), &[member(5, "Bob", "bob", 20)]);

        let report = audit.into_report();
        let ids: Vec<u64> = report.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![9, 2, 5]);
    }

    #[test]
    fn test_member_without_resource_is_absent() {
        let mut audit = MemberAudit::new();
        audit.record(&group(1, "org"), &[]);
        assert!(audit.is_empty());
        assert!(audit.get(7).is_none());
    }
}
