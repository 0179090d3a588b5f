//! Plain-text rendering of audit results.
//!
//! Provides the [`PrettyPrint`] trait used for both CLI output and web
//! responses.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::audit::MemberRecord;

/// Trait for human-readable text output.
pub trait PrettyPrint {
    /// Returns a formatted string for display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for MemberRecord {
    fn pretty_print(&self) -> String {
        format!(
            "{}\nGroups: [{}]\nProjects: [{}]",
            self.name,
            self.groups.join(", "),
            self.projects.join(", ")
        )
    }
}

/// The finished per-member report, in first-encounter order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    members: IndexMap<u64, MemberRecord>,
}

impl Report {
    pub fn new(members: IndexMap<u64, MemberRecord>) -> Self {
        Self { members }
    }

    /// Number of distinct members.
    pub fn total(&self) -> usize {
        self.members.len()
    }

    /// Record for a member ID.
    pub fn get(&self, member_id: u64) -> Option<&MemberRecord> {
        self.members.get(&member_id)
    }

    /// Iterate `(member ID, record)` pairs in report order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, u64, MemberRecord> {
        self.members.iter()
    }
}

impl PrettyPrint for Report {
    fn pretty_print(&self) -> String {
        let mut out = String::new();
        for record in self.members.values() {
            out.push_str(&record.pretty_print());
            out.push_str("\n\n");
        }
        out.push_str(&format!("Total members: {}", self.total()));
        out
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty_print())
    }
}
