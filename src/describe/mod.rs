//! This module defines how a diagram structure describes its own fields to the counter.
//!
//! A structure is either *grouped*, in which case it exposes named groups
//! (e.g. a `pool` or a `message` grouping) whose members carry a kind tag,
//! or *flat*, in which case it only exposes its top-level field names.
//! Domain types implement [`Describe`] directly or through the [`describe!`](crate::describe!) macro;
//! [`Description`] covers structures that are only known at runtime.

mod description;

pub use description::{Description, Group, GroupMember};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Whether a member is itself a structure or a plain value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    Nested,
    Leaf,
}

/// A named member of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member<'a> {
    pub name: &'a str,
    pub kind: MemberKind,
}

impl<'a> Member<'a> {
    pub fn nested(name: &'a str) -> Self {
        Member { name, kind: MemberKind::Nested }
    }

    pub fn leaf(name: &'a str) -> Self {
        Member { name, kind: MemberKind::Leaf }
    }

    pub fn is_nested(&self) -> bool {
        self.kind == MemberKind::Nested
    }
}

/// A structure that can enumerate its own fields.
pub trait Describe {
    /// Names of the groups of this structure, in declaration order
    fn group_names(&self) -> Vec<&str>;

    /// Members of the named group, in declaration order.
    /// Fails with [`Error::InvalidDescription`](crate::Error::InvalidDescription) if the group cannot be resolved.
    fn members_of(&self, group: &str) -> Result<Vec<Member<'_>>>;

    /// Top-level field names, consulted only when there are no groups
    fn top_level_field_names(&self) -> Vec<&str>;

    fn has_groups(&self) -> bool {
        !self.group_names().is_empty()
    }
}

impl<T: Describe + ?Sized> Describe for &T {
    fn group_names(&self) -> Vec<&str> {
        (**self).group_names()
    }
    fn members_of(&self, group: &str) -> Result<Vec<Member<'_>>> {
        (**self).members_of(group)
    }
    fn top_level_field_names(&self) -> Vec<&str> {
        (**self).top_level_field_names()
    }
    fn has_groups(&self) -> bool {
        (**self).has_groups()
    }
}

impl<T: Describe + ?Sized> Describe for Box<T> {
    fn group_names(&self) -> Vec<&str> {
        (**self).group_names()
    }
    fn members_of(&self, group: &str) -> Result<Vec<Member<'_>>> {
        (**self).members_of(group)
    }
    fn top_level_field_names(&self) -> Vec<&str> {
        (**self).top_level_field_names()
    }
    fn has_groups(&self) -> bool {
        (**self).has_groups()
    }
}

/// Implements [`Describe`] for a type from a listing of its fields.
///
/// A flat listing names the top-level fields:
///
/// ```
/// use bpmn_counter::describe;
///
/// struct Order;
/// describe!(Order { Process, FromStartEvent, EndEvent });
/// ```
///
/// A grouped listing names each group and tags every member as `nested` or `leaf`:
///
/// ```
/// use bpmn_counter::describe;
///
/// struct Collaboration;
/// describe!(Collaboration {
///     pool { ProcessID: nested, Name: leaf },
///     message { Message: nested },
/// });
/// ```
#[macro_export]
macro_rules! describe {
    (@kind nested) => { $crate::describe::MemberKind::Nested };
    (@kind leaf) => { $crate::describe::MemberKind::Leaf };

    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::describe::Describe for $ty {
            fn group_names(&self) -> ::std::vec::Vec<&str> {
                ::std::vec::Vec::new()
            }
            fn members_of(&self, group: &str) -> $crate::Result<::std::vec::Vec<$crate::describe::Member<'_>>> {
                Err($crate::Error::InvalidDescription { group: group.to_string() })
            }
            fn top_level_field_names(&self) -> ::std::vec::Vec<&str> {
                ::std::vec![$(stringify!($field)),*]
            }
        }
    };

    ($ty:ty { $($group:ident { $($member:ident : $kind:ident),* $(,)? }),* $(,)? }) => {
        impl $crate::describe::Describe for $ty {
            fn group_names(&self) -> ::std::vec::Vec<&str> {
                ::std::vec![$(stringify!($group)),*]
            }
            fn members_of(&self, group: &str) -> $crate::Result<::std::vec::Vec<$crate::describe::Member<'_>>> {
                $(
                    if group == stringify!($group) {
                        return Ok(::std::vec![$(
                            $crate::describe::Member {
                                name: stringify!($member),
                                kind: $crate::describe!(@kind $kind),
                            }
                        ),*]);
                    }
                )*
                Err($crate::Error::InvalidDescription { group: group.to_string() })
            }
            fn top_level_field_names(&self) -> ::std::vec::Vec<&str> {
                ::std::vec::Vec::new()
            }
        }
    };
}
