//! This module walks a described structure and counts its elements.

use tracing::{debug, debug_span, trace};

use super::vocabulary::{after, Vocabulary};
use super::ElementTally;
use crate::describe::Describe;
use crate::error::Result;

/// Counts BPMN elements in described structures using one vocabulary.
/// An inspector holds no state between passes, so one inspector can serve any number of them.
#[derive(Debug, Clone, Default)]
pub struct Inspector {
    vocabulary: Vocabulary,
}

impl Inspector {
    /// Create an inspector for the given vocabulary
    pub fn new(vocabulary: Vocabulary) -> Result<Self> {
        vocabulary.validate()?;
        Ok(Inspector { vocabulary })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Count the elements of one structure into a fresh tally
    pub fn tally<D: Describe + ?Sized>(&self, description: &D) -> Result<ElementTally> {
        let _span = debug_span!("tally").entered();
        let mut tally = ElementTally::default();

        if description.has_groups() {
            for group in description.group_names() {
                let members = description.members_of(group)?;
                trace!(group, members = members.len(), "visiting group");
                // Leaf members hold plain values and are never counted
                for member in members.iter().filter(|member| member.is_nested()) {
                    self.count_pool(&mut tally, group, member.name);
                    self.count_message(&mut tally, group, member.name);
                    self.count_element(&mut tally, member.name);
                }
            }
        } else {
            for field in description.top_level_field_names() {
                self.count_process(&mut tally, field);
                self.count_element(&mut tally, field);
            }
        }

        debug!(
            processes = tally.process,
            shapes = tally.shape,
            edges = tally.edge,
            flows = tally.flow,
            words = tally.word_count(),
            "tally complete"
        );
        Ok(tally)
    }

    /// Count the elements of one structure on top of an existing tally.
    /// The tally is left untouched if the structure cannot be walked.
    pub fn tally_into<D: Describe + ?Sized>(&self, tally: &mut ElementTally, description: &D) -> Result<()> {
        let counted = self.tally(description)?;
        tally.merge(&counted);
        Ok(())
    }

    fn count_pool(&self, tally: &mut ElementTally, group: &str, name: &str) {
        if !self.vocabulary.is_pool(group) {
            return;
        }
        if name.contains(self.vocabulary.process_keyword.as_str()) {
            tally.record_process();
        }
        if name.contains(self.vocabulary.participant_keyword.as_str()) {
            trace!(name, "participant");
            tally.record_participant();
        }
    }

    fn count_message(&self, tally: &mut ElementTally, group: &str, name: &str) {
        if self.vocabulary.is_message(group) && name.contains(self.vocabulary.message_keyword.as_str()) {
            trace!(name, "message");
            tally.record_message();
        }
    }

    fn count_process(&self, tally: &mut ElementTally, name: &str) {
        if name.contains(self.vocabulary.process_keyword.as_str()) {
            tally.record_process();
        }
    }

    /// A flow field is never an element; anything else is counted by the first matching rule
    fn count_element(&self, tally: &mut ElementTally, name: &str) {
        if self.vocabulary.is_flow(name) {
            trace!(name, source = after(name, &self.vocabulary.flow_marker), "flow");
            tally.record_flow();
            return;
        }
        match self.vocabulary.classify(name) {
            Some(kind) => {
                trace!(name, %kind, "element");
                tally.record_element(kind);
            }
            None => trace!(name, "unrecognized"),
        }
    }
}

/// Count the elements of one structure with the default vocabulary
pub fn tally<D: Describe + ?Sized>(description: &D) -> Result<ElementTally> {
    Inspector::default().tally(description)
}
