//! This module defines the BPMN element kinds recognized by the counter.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Each element kind is named after the BPMN element it counts.
/// The macro generates the enum, the keyword of each variant and the
/// list of all kinds in classification order.
macro_rules! def_element_kinds {
    ($($name:ident),* $(,)?) => {
        /// Supported BPMN element types
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum ElementKind {
            $($name),*
        }

        impl ElementKind {
            /// Every kind, in the order names are classified (first match wins)
            pub const PRECEDENCE: &'static [ElementKind] = &[$(ElementKind::$name),*];

            /// The substring a field name must contain to be counted as this kind
            pub fn keyword(self) -> &'static str {
                match self {
                    $(ElementKind::$name => stringify!($name)),*
                }
            }
        }
    };
}

// Task has to stay ahead of UserTask: "UserTask" contains "Task", so user
// tasks are counted as generic tasks.
def_element_kinds!(
    StartEvent,
    BoundaryEvent,
    IntermediateCatchEvent,
    IntermediateThrowEvent,
    EndEvent,
    ComplexGateway,
    EventBasedGateway,
    ExclusiveGateway,
    InclusiveGateway,
    ParallelGateway,
    BusinessRuleTask,
    ManualTask,
    ReceiveTask,
    ScriptTask,
    SendTask,
    ServiceTask,
    Task,
    UserTask,
);

/// Broad category of an element kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Event,
    Gateway,
    Task,
}

impl ElementKind {
    pub fn category(self) -> Category {
        use ElementKind::*;
        match self {
            StartEvent | BoundaryEvent | IntermediateCatchEvent | IntermediateThrowEvent | EndEvent => Category::Event,
            ComplexGateway | EventBasedGateway | ExclusiveGateway | InclusiveGateway | ParallelGateway => Category::Gateway,
            BusinessRuleTask | ManualTask | ReceiveTask | ScriptTask | SendTask | ServiceTask | Task | UserTask => Category::Task,
        }
    }
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.keyword())
    }
}
