//! This module defines the tally of BPMN elements and the inspector that fills it.
//!
//! A tally is produced by walking a [`Describe`](crate::Describe) structure once:
//!
//! ```
//! use bpmn_counter::{tally, Description, ElementKind};
//!
//! let description = Description::flat(["Process", "FromStartEvent", "EndEvent"]);
//! let tally = tally(&description).unwrap();
//! assert_eq!(tally.process, 1);
//! assert_eq!(tally.flow, 1);
//! assert_eq!(tally.count(ElementKind::EndEvent), 1);
//! assert_eq!(tally.shape, 1);
//! ```

mod inspect;
mod vocabulary;

pub use inspect::{tally, Inspector};
pub use vocabulary::{after, Rule, Vocabulary};

use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::bpmn::{Category, ElementKind};

/// Word lists keyed by an arbitrary integer
pub type Words = HashMap<i64, Vec<String>, ahash::RandomState>;

/// How many of each BPMN element a diagram structure contains.
///
/// `shape` always equals the sum of the element counters plus `participant`:
/// every classified element and every participant is one shape.
/// `edge` is the sum of `message` and `flow`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ElementTally {
    pub process: usize,
    pub participant: usize,
    pub message: usize,
    pub start_event: usize,
    pub boundary_event: usize,
    pub intermediate_catch_event: usize,
    pub intermediate_throw_event: usize,
    pub end_event: usize,
    pub complex_gateway: usize,
    pub event_based_gateway: usize,
    pub exclusive_gateway: usize,
    pub inclusive_gateway: usize,
    pub parallel_gateway: usize,
    pub business_rule_task: usize,
    pub manual_task: usize,
    pub receive_task: usize,
    pub script_task: usize,
    pub send_task: usize,
    pub service_task: usize,
    pub task: usize,
    pub user_task: usize,
    pub flow: usize,
    pub shape: usize,
    pub edge: usize,
    #[serde(default)]
    pub words: Words,
}

impl ElementTally {
    /// The counter for an element kind
    pub fn count(&self, kind: ElementKind) -> usize {
        use ElementKind::*;
        match kind {
            StartEvent => self.start_event,
            BoundaryEvent => self.boundary_event,
            IntermediateCatchEvent => self.intermediate_catch_event,
            IntermediateThrowEvent => self.intermediate_throw_event,
            EndEvent => self.end_event,
            ComplexGateway => self.complex_gateway,
            EventBasedGateway => self.event_based_gateway,
            ExclusiveGateway => self.exclusive_gateway,
            InclusiveGateway => self.inclusive_gateway,
            ParallelGateway => self.parallel_gateway,
            BusinessRuleTask => self.business_rule_task,
            ManualTask => self.manual_task,
            ReceiveTask => self.receive_task,
            ScriptTask => self.script_task,
            SendTask => self.send_task,
            ServiceTask => self.service_task,
            Task => self.task,
            UserTask => self.user_task,
        }
    }

    fn slot_mut(&mut self, kind: ElementKind) -> &mut usize {
        use ElementKind::*;
        match kind {
            StartEvent => &mut self.start_event,
            BoundaryEvent => &mut self.boundary_event,
            IntermediateCatchEvent => &mut self.intermediate_catch_event,
            IntermediateThrowEvent => &mut self.intermediate_throw_event,
            EndEvent => &mut self.end_event,
            ComplexGateway => &mut self.complex_gateway,
            EventBasedGateway => &mut self.event_based_gateway,
            ExclusiveGateway => &mut self.exclusive_gateway,
            InclusiveGateway => &mut self.inclusive_gateway,
            ParallelGateway => &mut self.parallel_gateway,
            BusinessRuleTask => &mut self.business_rule_task,
            ManualTask => &mut self.manual_task,
            ReceiveTask => &mut self.receive_task,
            ScriptTask => &mut self.script_task,
            SendTask => &mut self.send_task,
            ServiceTask => &mut self.service_task,
            Task => &mut self.task,
            UserTask => &mut self.user_task,
        }
    }

    /// An element is one shape of its kind
    pub(crate) fn record_element(&mut self, kind: ElementKind) {
        *self.slot_mut(kind) += 1;
        self.shape += 1;
    }

    /// A participant is a shape, but not an element
    pub(crate) fn record_participant(&mut self) {
        self.participant += 1;
        self.shape += 1;
    }

    pub(crate) fn record_message(&mut self) {
        self.message += 1;
        self.edge += 1;
    }

    pub(crate) fn record_flow(&mut self) {
        self.flow += 1;
        self.edge += 1;
    }

    pub(crate) fn record_process(&mut self) {
        self.process += 1;
    }

    /// Non-zero element counters, in classification order
    pub fn elements(&self) -> impl Iterator<Item = (ElementKind, usize)> + '_ {
        ElementKind::PRECEDENCE
            .iter()
            .map(move |&kind| (kind, self.count(kind)))
            .filter(|(_, count)| *count > 0)
    }

    /// Sum of all element counters (participants excluded)
    pub fn element_total(&self) -> usize {
        ElementKind::PRECEDENCE.iter().map(|&kind| self.count(kind)).sum()
    }

    /// Total number of words over every word list
    pub fn word_count(&self) -> usize {
        self.words.values().map(Vec::len).sum()
    }

    /// Add the counters of another tally to this one.
    /// Word lists under the same key are concatenated.
    pub fn merge(&mut self, other: &ElementTally) {
        self.process += other.process;
        self.participant += other.participant;
        self.message += other.message;
        for &kind in ElementKind::PRECEDENCE {
            *self.slot_mut(kind) += other.count(kind);
        }
        self.flow += other.flow;
        self.shape += other.shape;
        self.edge += other.edge;
        for (key, words) in &other.words {
            self.words.entry(*key).or_default().extend(words.iter().cloned());
        }
    }
}

/// A tally is displayed as a report, one counter per line, grouped by category:
///
/// ```text
/// Processes: 1
/// Participants: 2
/// Messages: 1
/// Events: StartEvent (1), EndEvent (1)
/// Gateways: -
/// Tasks: Task (3)
/// Flows: 4
/// Shapes: 7
/// Edges: 5
/// ```
impl Display for ElementTally {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let format_category = |category: Category| {
            let list = self
                .elements()
                .filter(|(kind, _)| kind.category() == category)
                .map(|(kind, count)| format!("{} ({})", kind, count))
                .collect::<Vec<_>>();
            if list.is_empty() {
                "-".to_string()
            } else {
                list.join(", ")
            }
        };
        writeln!(f, "Processes: {}", self.process)?;
        writeln!(f, "Participants: {}", self.participant)?;
        writeln!(f, "Messages: {}", self.message)?;
        writeln!(f, "Events: {}", format_category(Category::Event))?;
        writeln!(f, "Gateways: {}", format_category(Category::Gateway))?;
        writeln!(f, "Tasks: {}", format_category(Category::Task))?;
        writeln!(f, "Flows: {}", self.flow)?;
        writeln!(f, "Shapes: {}", self.shape)?;
        writeln!(f, "Edges: {}", self.edge)
    }
}
