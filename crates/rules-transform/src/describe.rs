//! Synthesised rule descriptions.

use rules_model::{Actions, Criterion};

const MAX_CRITERIA: usize = 3;
const MAX_VALUES: usize = 2;

/// Renders `"<criteria> → <actions>"`.
///
/// At most three criteria are listed, each with at most two values; actions
/// render as `Route to <code>` and `Create <type> task`.
pub fn describe_rule(criteria: &[Criterion], actions: &Actions) -> String {
    let criteria_summary = criteria
        .iter()
        .take(MAX_CRITERIA)
        .map(describe_criterion)
        .collect::<Vec<_>>()
        .join("; ");

    let mut action_parts = Vec::new();
    if let Some(routing) = &actions.department_routing {
        action_parts.push(format!("Route to {}", routing.department_code));
    }
    if let Some(task) = &actions.create_task {
        action_parts.push(format!("Create {} task", task.task_type));
    }

    format!("{criteria_summary} → {}", action_parts.join(" & "))
}

fn describe_criterion(criterion: &Criterion) -> String {
    let verb = if criterion.operator.is_negated() {
        "is not"
    } else {
        "is"
    };
    let mut values = criterion
        .values
        .iter()
        .take(MAX_VALUES)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if criterion.values.len() > MAX_VALUES {
        values.push_str("...");
    }
    format!("{} {verb} {values}", criterion.field.title())
}
