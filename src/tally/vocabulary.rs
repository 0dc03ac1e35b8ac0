//! The classification table: which substrings identify which counters.

use std::collections::HashSet;
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::bpmn::ElementKind;
use crate::error::{Error, Result};

/// A field name containing `keyword` is counted as `kind`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub keyword: String,
    pub kind: ElementKind,
}

impl From<ElementKind> for Rule {
    fn from(kind: ElementKind) -> Self {
        Rule { keyword: kind.keyword().to_string(), kind }
    }
}

/// Markers and keywords that drive classification.
///
/// Rules are tried in order and the first rule whose keyword is contained
/// in a field name wins. Group names are compared against the lower-cased
/// name of the enclosing group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// Marks a field as the source side of a flow
    pub flow_marker: String,
    pub process_keyword: String,
    pub participant_keyword: String,
    pub message_keyword: String,
    pub pool_group: String,
    pub message_group: String,
    pub rules: Vec<Rule>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Vocabulary {
            flow_marker: "From".to_string(),
            process_keyword: "Process".to_string(),
            participant_keyword: "ID".to_string(),
            message_keyword: "Message".to_string(),
            pool_group: "pool".to_string(),
            message_group: "message".to_string(),
            rules: ElementKind::PRECEDENCE.iter().copied().map(Rule::from).collect(),
        }
    }
}

impl Vocabulary {
    /// Read a vocabulary from JSON. Missing entries take their default value.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let vocabulary: Vocabulary = serde_json::from_reader(reader)?;
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    /// Check that every marker and keyword can match something
    /// and that no two rules compete for the same keyword
    pub fn validate(&self) -> Result<()> {
        let markers = [
            ("flow_marker", &self.flow_marker),
            ("process_keyword", &self.process_keyword),
            ("participant_keyword", &self.participant_keyword),
            ("message_keyword", &self.message_keyword),
            ("pool_group", &self.pool_group),
            ("message_group", &self.message_group),
        ];
        for (name, value) in markers {
            if value.is_empty() {
                return Err(Error::InvalidVocabulary(format!("`{}` is empty", name)));
            }
        }
        for (name, value) in [("pool_group", &self.pool_group), ("message_group", &self.message_group)] {
            if *value != value.to_lowercase() {
                return Err(Error::InvalidVocabulary(format!("`{}` must be lower-case, got `{}`", name, value)));
            }
        }
        let mut seen = HashSet::with_capacity(self.rules.len());
        for rule in &self.rules {
            if rule.keyword.is_empty() {
                return Err(Error::InvalidVocabulary(format!("rule for {} has an empty keyword", rule.kind)));
            }
            if !seen.insert(rule.keyword.as_str()) {
                return Err(Error::InvalidVocabulary(format!("keyword `{}` appears twice", rule.keyword)));
            }
        }
        Ok(())
    }

    /// The first rule whose keyword is contained in `name`
    pub fn classify(&self, name: &str) -> Option<ElementKind> {
        self.rules
            .iter()
            .find(|rule| name.contains(rule.keyword.as_str()))
            .map(|rule| rule.kind)
    }

    /// Whether `name` describes the source side of a flow
    pub fn is_flow(&self, name: &str) -> bool {
        name.contains(self.flow_marker.as_str())
    }

    pub(crate) fn is_pool(&self, group: &str) -> bool {
        group.to_lowercase() == self.pool_group
    }

    pub(crate) fn is_message(&self, group: &str) -> bool {
        group.to_lowercase() == self.message_group
    }
}

/// The part of `value` that follows the first occurrence of `marker`,
/// so `FromAFromB` yields `AFromB`.
/// Empty if `marker` does not occur or nothing follows it.
pub fn after<'a>(value: &'a str, marker: &str) -> &'a str {
    value.split_once(marker).map_or("", |(_, rest)| rest)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn after_strips_the_marker() {
        assert_eq!(after("FromStartEvent", "From"), "StartEvent");
        assert_eq!(after("TaskFromGateway", "From"), "Gateway");
        assert_eq!(after("StartEvent", "From"), "");
        assert_eq!(after("SequenceFrom", "From"), "");
        assert_eq!(after("FromAFromB", "From"), "AFromB");
    }

    #[test]
    fn default_rules_follow_element_precedence() {
        let vocabulary = Vocabulary::default();
        let kinds: Vec<_> = vocabulary.rules.iter().map(|rule| rule.kind).collect();
        assert_eq!(kinds, ElementKind::PRECEDENCE);
        assert!(vocabulary.validate().is_ok());
    }

    #[test]
    fn first_matching_rule_wins() {
        let vocabulary = Vocabulary::default();
        assert_eq!(vocabulary.classify("StartEventToEndEvent"), Some(ElementKind::StartEvent));
        assert_eq!(vocabulary.classify("ApproveUserTask"), Some(ElementKind::Task));
        assert_eq!(vocabulary.classify("SendTask"), Some(ElementKind::SendTask));
        assert_eq!(vocabulary.classify("Lane"), None);
    }

    #[test]
    fn reordered_rules_reach_user_task() {
        let mut vocabulary = Vocabulary::default();
        let user_task = vocabulary.rules.pop().expect("UserTask is the last rule");
        let task = vocabulary.rules.iter().position(|rule| rule.kind == ElementKind::Task).expect("Task rule");
        vocabulary.rules.insert(task, user_task);
        assert_eq!(vocabulary.classify("ApproveUserTask"), Some(ElementKind::UserTask));
        assert_eq!(vocabulary.classify("Task"), Some(ElementKind::Task));
    }

    #[test]
    fn group_names_compare_lower_cased() {
        let vocabulary = Vocabulary::default();
        assert!(vocabulary.is_pool("Pool"));
        assert!(vocabulary.is_pool("POOL"));
        assert!(!vocabulary.is_pool("Pools"));
        assert!(vocabulary.is_message("Message"));
    }

    #[test]
    fn partial_json_keeps_defaults() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let json = r#"{ "flow_marker": "Via", "rules": [{ "keyword": "Approval", "kind": "UserTask" }] }"#;
        let vocabulary = Vocabulary::from_reader(json.as_bytes())?;
        assert_eq!(vocabulary.flow_marker, "Via");
        assert_eq!(vocabulary.pool_group, "pool");
        assert_eq!(vocabulary.classify("ManagerApproval"), Some(ElementKind::UserTask));
        assert_eq!(vocabulary.classify("StartEvent"), None);
        Ok(())
    }

    #[test]
    fn invalid_vocabularies_are_rejected() {
        let empty_marker = r#"{ "flow_marker": "" }"#;
        assert!(matches!(
            Vocabulary::from_reader(empty_marker.as_bytes()),
            Err(Error::InvalidVocabulary(_))
        ));
        let duplicate = r#"{ "rules": [
            { "keyword": "Task", "kind": "Task" },
            { "keyword": "Task", "kind": "UserTask" }
        ] }"#;
        assert!(matches!(
            Vocabulary::from_reader(duplicate.as_bytes()),
            Err(Error::InvalidVocabulary(_))
        ));
        let upper_group = r#"{ "pool_group": "Pool" }"#;
        assert!(matches!(
            Vocabulary::from_reader(upper_group.as_bytes()),
            Err(Error::InvalidVocabulary(_))
        ));
        assert!(matches!(Vocabulary::from_reader("{".as_bytes()), Err(Error::Config(_))));
    }
}
