pub mod error;
pub mod bpmn;
pub mod describe;
pub mod tally;

pub use error::*;
pub use crate::bpmn::{Category, ElementKind};
pub use crate::describe::{Describe, Description, Group, GroupMember, Member, MemberKind};
pub use crate::tally::{after, tally, ElementTally, Inspector, Rule, Vocabulary};
