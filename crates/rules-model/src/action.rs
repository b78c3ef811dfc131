//! Rule actions.
//!
//! A rule carries at most one directive per action kind. The kinds are
//! independent of each other, so they are modelled as optional fields on a
//! single map-shaped struct rather than a list.

use serde::{Deserialize, Serialize};

/// Route the request to a department queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRouting {
    pub department_code: String,
}

/// Create a work task on the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub task_type: String,
    pub task_reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_until_due: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_close: Option<bool>,
}

/// One letter to generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateLetter {
    pub letter_name: String,
}

/// Transfer request ownership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferOwnership {
    pub transfer_to: String,
}

/// Enrol the member into a program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProgram {
    pub program_name: String,
}

/// Action kinds, in the order they are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActionKind {
    DepartmentRouting,
    CreateTask,
    GenerateLetters,
    TransferOwnership,
    CreateProgram,
}

impl ActionKind {
    /// Returns the JSON key used for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::DepartmentRouting => "departmentRouting",
            ActionKind::CreateTask => "createTask",
            ActionKind::GenerateLetters => "generateLetters",
            ActionKind::TransferOwnership => "transferOwnership",
            ActionKind::CreateProgram => "createProgram",
        }
    }
}

/// Map of action kind to action parameters. Absent kinds are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_routing: Option<DepartmentRouting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_task: Option<CreateTask>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generate_letters: Option<Vec<GenerateLetter>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_ownership: Option<TransferOwnership>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_program: Option<CreateProgram>,
}

impl Actions {
    pub fn is_empty(&self) -> bool {
        self.kinds().is_empty()
    }

    /// Kinds present on this rule.
    pub fn kinds(&self) -> Vec<ActionKind> {
        let mut kinds = Vec::new();
        if self.department_routing.is_some() {
            kinds.push(ActionKind::DepartmentRouting);
        }
        if self.create_task.is_some() {
            kinds.push(ActionKind::CreateTask);
        }
        if self.generate_letters.is_some() {
            kinds.push(ActionKind::GenerateLetters);
        }
        if self.transfer_ownership.is_some() {
            kinds.push(ActionKind::TransferOwnership);
        }
        if self.create_program.is_some() {
            kinds.push(ActionKind::CreateProgram);
        }
        kinds
    }

    /// `None` when no action kind is set.
    pub fn non_empty(self) -> Option<Self> {
        if self.is_empty() { None } else { Some(self) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_actions_serialize_as_empty_object() {
        let json = serde_json::to_string(&Actions::default()).unwrap();
        assert_eq!(json, "{}");
        assert!(Actions::default().non_empty().is_none());
    }

    #[test]
    fn kinds_follow_declaration_order() {
        let actions = Actions {
            create_program: Some(CreateProgram {
                program_name: "Care Management".to_string(),
            }),
            department_routing: Some(DepartmentRouting {
                department_code: "CARDIO".to_string(),
            }),
            ..Actions::default()
        };
        assert_eq!(
            actions.kinds(),
            vec![ActionKind::DepartmentRouting, ActionKind::CreateProgram]
        );
    }
}
