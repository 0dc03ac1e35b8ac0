//! An owned description for structures that are only known at runtime.

use serde::{Deserialize, Serialize};

use super::{Describe, Member, MemberKind};
use crate::error::{Error, Result};

/// A named member of a [`Group`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMember {
    pub name: String,
    pub kind: MemberKind,
}

/// A named group and its members.
/// A group without members (`None`) is declared but cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    #[serde(default)]
    pub members: Option<Vec<GroupMember>>,
}

impl Group {
    /// Create an empty group
    pub fn new(name: impl Into<String>) -> Self {
        Group { name: name.into(), members: Some(Vec::new()) }
    }

    /// Create a group whose members are unknown
    pub fn declared(name: impl Into<String>) -> Self {
        Group { name: name.into(), members: None }
    }

    fn push(mut self, name: impl Into<String>, kind: MemberKind) -> Self {
        self.members
            .get_or_insert_with(Vec::new)
            .push(GroupMember { name: name.into(), kind });
        self
    }

    /// Add a member that is itself a structure
    pub fn nested(self, name: impl Into<String>) -> Self {
        self.push(name, MemberKind::Nested)
    }

    /// Add a member that holds a plain value
    pub fn leaf(self, name: impl Into<String>) -> Self {
        self.push(name, MemberKind::Leaf)
    }
}

/// A structure described by value: either a list of groups or a flat list of field names.
/// Group names must be unique; a name shared by two groups cannot be resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    #[serde(default)]
    groups: Vec<Group>,
    #[serde(default)]
    fields: Vec<String>,
}

impl Description {
    /// A description without groups
    pub fn flat<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Description {
            fields: fields.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// An empty grouped description, to be filled with [`Description::group`]
    pub fn grouped() -> Self {
        Description::default()
    }

    /// Append a group
    pub fn group(mut self, group: Group) -> Self {
        self.groups.push(group);
        self
    }

    /// Declare a group name without providing its members
    pub fn declare(self, name: impl Into<String>) -> Self {
        self.group(Group::declared(name))
    }
}

impl Describe for Description {
    fn group_names(&self) -> Vec<&str> {
        self.groups.iter().map(|group| group.name.as_str()).collect()
    }

    fn members_of(&self, group: &str) -> Result<Vec<Member<'_>>> {
        let invalid = || Error::InvalidDescription { group: group.to_string() };
        let mut matching = self.groups.iter().filter(|g| g.name == group);
        let found = matching.next().ok_or_else(invalid)?;
        if matching.next().is_some() {
            return Err(invalid());
        }
        let members = found
            .members
            .as_ref()
            .ok_or_else(invalid)?
            .iter()
            .map(|member| Member { name: member.name.as_str(), kind: member.kind })
            .collect();
        Ok(members)
    }

    fn top_level_field_names(&self) -> Vec<&str> {
        self.fields.iter().map(String::as_str).collect()
    }
}
