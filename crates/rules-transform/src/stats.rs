//! Usage statistics over converted request-workflow rules.

use rules_model::{ActionKind, RequestTypeFilter, RequestWorkflowRule, TriggerEvent};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowStatistics {
    pub inpatient: usize,
    pub outpatient: usize,
    /// Rules without a request-type filter.
    pub any: usize,
    /// Trigger-event usage, most used first.
    pub triggers: Vec<(TriggerEvent, usize)>,
    /// Action-kind usage, most used first.
    pub actions: Vec<(ActionKind, usize)>,
}

impl WorkflowStatistics {
    pub fn from_rules(rules: &[RequestWorkflowRule]) -> Self {
        let mut stats = Self::default();
        for rule in rules {
            match rule.request_type_filter {
                Some(RequestTypeFilter::Inpatient) => stats.inpatient += 1,
                Some(RequestTypeFilter::Outpatient) => stats.outpatient += 1,
                None => stats.any += 1,
            }
            for event in &rule.trigger_events {
                bump(&mut stats.triggers, *event);
            }
            if let Some(actions) = &rule.actions {
                for kind in actions.kinds() {
                    bump(&mut stats.actions, kind);
                }
            }
        }
        // Stable sort keeps first-seen order among equal counts.
        stats.triggers.sort_by(|a, b| b.1.cmp(&a.1));
        stats.actions.sort_by(|a, b| b.1.cmp(&a.1));
        stats
    }

    /// Request-type distribution as `(label, count)` rows.
    pub fn request_types(&self) -> [(&'static str, usize); 3] {
        [
            (RequestTypeFilter::Inpatient.as_str(), self.inpatient),
            (RequestTypeFilter::Outpatient.as_str(), self.outpatient),
            ("ANY", self.any),
        ]
    }
}

fn bump<K: PartialEq>(counts: &mut Vec<(K, usize)>, key: K) {
    match counts.iter_mut().find(|(existing, _)| *existing == key) {
        Some(entry) => entry.1 += 1,
        None => counts.push((key, 1)),
    }
}
