//! Action decoders.

use rules_ingest::SheetRow;
use rules_map::{SummaryTables, TripletTables};
use rules_model::{
    Actions, CellValue, CreateProgram, CreateTask, DepartmentRouting, GenerateLetter,
    TransferOwnership,
};

use crate::normalize::ValueNormalizer;
use crate::numeric::{cell_int, leading_digits};
use crate::report::RowIssue;

/// Decodes the keyword-driven action block starting at `start`.
///
/// The cell at `start` selects the action: the routing keyword reads the
/// next cell as a department code; the task keyword scans the remaining
/// cells for labelled task details, assigning unlabelled cells to task type
/// and then task reason.
pub fn decode_keyword_actions(
    cells: &[CellValue],
    start: usize,
    tables: &TripletTables,
) -> Actions {
    let normalizer = ValueNormalizer::new(&tables.sentinels);
    let text_at = |idx: usize| cells.get(idx).and_then(|cell| normalizer.present(cell));

    let mut actions = Actions::default();
    let Some(keyword) = text_at(start) else {
        return actions;
    };

    if keyword == tables.routing_keyword {
        if let Some(department_code) = text_at(start + 1) {
            actions.department_routing = Some(DepartmentRouting { department_code });
        }
    } else if keyword == tables.task_keyword {
        actions.create_task = scan_task_block(cells, start + 1, tables, &normalizer);
    }
    actions
}

fn scan_task_block(
    cells: &[CellValue],
    from: usize,
    tables: &TripletTables,
    normalizer: &ValueNormalizer<'_>,
) -> Option<CreateTask> {
    let mut task_type: Option<String> = None;
    let mut task_reason: Option<String> = None;
    let mut days: Option<u32> = None;

    let mut idx = from;
    while idx < cells.len() {
        let Some(text) = normalizer.present(&cells[idx]) else {
            idx += 1;
            continue;
        };
        let is_label = text == tables.task_type_label
            || text == tables.task_reason_label
            || text == tables.task_due_label;
        // A label in the last cell has nothing to pair with.
        if is_label && idx + 1 >= cells.len() {
            idx += 1;
            continue;
        }
        let next = cells.get(idx + 1).and_then(|cell| normalizer.present(cell));
        if text == tables.task_type_label {
            task_type = next;
            idx += 2;
        } else if text == tables.task_reason_label {
            task_reason = next;
            idx += 2;
        } else if text == tables.task_due_label {
            days = next.as_deref().and_then(leading_digits);
            idx += 2;
        } else {
            if task_type.is_none() {
                task_type = Some(text);
            } else if task_reason.is_none() {
                task_reason = Some(text);
            }
            idx += 1;
        }
    }

    let task_type = task_type?;
    Some(CreateTask {
        task_type,
        task_reason: task_reason.unwrap_or_else(|| tables.default_task_reason.clone()),
        days_until_due: Some(
            days.filter(|days| *days > 0)
                .unwrap_or(tables.default_days_until_due),
        ),
        task_owner: None,
        auto_close: None,
    })
}

/// Column names read by [`decode_column_actions`].
pub mod columns {
    pub const TRIGGERED_LETTER: &str = "Triggered Letter";
    pub const TASK_TYPE: &str = "Task Type";
    pub const TASK_REASON: &str = "Task Reason";
    pub const DAYS: &str = "Days";
    pub const TASK_OWNER: &str = "Task Owner";
    pub const AUTO_CLOSE: &str = "Auto-Close";
    pub const TRANSFER: &str = "Transfer";
    pub const CREATED_PROGRAM: &str = "Created Program";
}

/// Decodes actions from named columns. Each kind is detected independently.
///
/// An unparsable `Days` cell is recorded as an issue and the day count is
/// left out.
pub fn decode_column_actions(
    row: SheetRow<'_>,
    tables: &SummaryTables,
    issues: &mut Vec<RowIssue>,
) -> Actions {
    let normalizer = ValueNormalizer::new(&tables.sentinels);
    let text = |column: &str| normalizer.present(row.get(column));

    let mut actions = Actions::default();

    if let Some(letter_name) = text(columns::TRIGGERED_LETTER) {
        actions.generate_letters = Some(vec![GenerateLetter { letter_name }]);
    }

    let task_type = text(columns::TASK_TYPE);
    let task_reason = text(columns::TASK_REASON);
    let task_owner = text(columns::TASK_OWNER);
    if task_type.is_some() || task_reason.is_some() {
        let days_until_due = match text(columns::DAYS) {
            Some(raw) => match cell_int(row.get(columns::DAYS)) {
                Some(days) if days > 0 => u32::try_from(days).ok(),
                Some(_) => None,
                None => {
                    issues.push(RowIssue::NumericCoercion {
                        row: row.number(),
                        field: columns::DAYS.to_string(),
                        value: raw,
                    });
                    None
                }
            },
            None => None,
        };
        let auto_close = text(columns::AUTO_CLOSE)
            .is_some_and(|value| tables.is_affirmative(&value))
            .then_some(true);
        actions.create_task = Some(CreateTask {
            task_type: task_type.unwrap_or_default(),
            task_reason: task_reason.unwrap_or_default(),
            days_until_due,
            task_owner: task_owner.clone(),
            auto_close,
        });
    }

    if text(columns::TRANSFER).is_some_and(|value| tables.is_affirmative(&value)) {
        actions.transfer_ownership = Some(TransferOwnership {
            transfer_to: task_owner.unwrap_or_else(|| tables.unassigned_owner.clone()),
        });
    }

    if let Some(program_name) = text(columns::CREATED_PROGRAM) {
        actions.create_program = Some(CreateProgram { program_name });
    }

    actions
}
