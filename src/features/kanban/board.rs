use chrono::{Datelike, Months, NaiveDate};

use crate::core::models::{Task, TaskId};

/// Number of monthly columns, starting with the current month.
pub const MONTH_COLUMNS: u32 = 12;

pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last calendar day of `date`'s month.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthColumn {
    /// `yyyy-MM`
    pub id: String,
    /// e.g. `October 2026`
    pub title: String,
    /// First day of the month.
    pub anchor: NaiveDate,
    pub tasks: Vec<Task>,
}

impl MonthColumn {
    fn for_month(date: NaiveDate) -> Self {
        let anchor = first_of_month(date);
        Self {
            id: month_key(anchor),
            title: anchor.format("%B %Y").to_string(),
            anchor,
            tasks: Vec::new(),
        }
    }

    /// Due date given to tasks dropped into this column.
    pub fn due_date(&self) -> NaiveDate {
        end_of_month(self.anchor)
    }
}

/// The current month and the eleven after it.
pub fn generate_columns(today: NaiveDate) -> Vec<MonthColumn> {
    let start = first_of_month(today);
    (0..MONTH_COLUMNS)
        .filter_map(|offset| start.checked_add_months(Months::new(offset)))
        .map(MonthColumn::for_month)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragLocation {
    pub column_id: String,
    pub index: usize,
}

impl DragLocation {
    pub fn new(column_id: impl Into<String>, index: usize) -> Self {
        Self {
            column_id: column_id.into(),
            index,
        }
    }
}

/// Terminal event of a drag gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct DragResult {
    pub task_id: TaskId,
    pub source: DragLocation,
    /// `None` when the card was released outside every column.
    pub destination: Option<DragLocation>,
}

/// A due-date write the caller must send to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct DueDateChange {
    pub ticket: u64,
    pub task_id: TaskId,
    pub due_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    /// Outside any column, back at the origin, or unknown task/column.
    Ignored,
    /// A due-date update is still in flight.
    Blocked,
    /// Same column, new position. Local only.
    Reordered,
    Rescheduled(DueDateChange),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateResolution {
    /// The backend accepted the change.
    Confirmed,
    /// The backend refused; the card went back where it came from.
    RolledBack,
    /// The backend refused, but the board was rebuilt from fresh tasks in the
    /// meantime, so there was nothing to revert.
    Superseded,
    /// The ticket is not the pending one.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
struct PendingMove {
    ticket: u64,
    generation: u64,
    task_id: TaskId,
    source: DragLocation,
    destination_column: String,
    previous_due: Option<NaiveDate>,
}

/// Twelve monthly buckets and the drag-and-drop rules between them.
#[derive(Debug, Clone, PartialEq)]
pub struct KanbanBoard {
    columns: Vec<MonthColumn>,
    pending: Option<PendingMove>,
    next_ticket: u64,
    generation: u64,
}

impl KanbanBoard {
    /// Columns are fixed at construction and never follow a later "today".
    pub fn new(today: NaiveDate) -> Self {
        Self {
            columns: generate_columns(today),
            pending: None,
            next_ticket: 1,
            generation: 0,
        }
    }

    pub fn columns(&self) -> &[MonthColumn] {
        &self.columns
    }

    pub fn column(&self, column_id: &str) -> Option<&MonthColumn> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    pub fn is_updating(&self) -> bool {
        self.pending.is_some()
    }

    /// Index of the column a due date belongs to. No due date, or one outside
    /// the twelve months, lands in the first column.
    pub fn column_index_for(&self, due: Option<NaiveDate>) -> usize {
        due.map(month_key)
            .and_then(|key| self.columns.iter().position(|c| c.id == key))
            .unwrap_or(0)
    }

    /// Rebuilds every column from `tasks`, keeping their relative order.
    pub fn distribute(&mut self, tasks: &[Task]) {
        for column in &mut self.columns {
            column.tasks.clear();
        }
        for task in tasks {
            let index = self.column_index_for(task.duedate);
            if let Some(column) = self.columns.get_mut(index) {
                column.tasks.push(task.clone());
            }
        }
        self.generation += 1;
    }

    pub fn apply_drop(&mut self, drag: &DragResult) -> DropOutcome {
        let Some(destination) = &drag.destination else {
            return DropOutcome::Ignored;
        };
        if *destination == drag.source {
            return DropOutcome::Ignored;
        }
        if self.pending.is_some() {
            return DropOutcome::Blocked;
        }

        let Some(source_index) = self.position(&drag.source.column_id) else {
            return DropOutcome::Ignored;
        };
        let Some(destination_index) = self.position(&destination.column_id) else {
            return DropOutcome::Ignored;
        };
        let Some(task_position) = locate(&self.columns[source_index].tasks, &drag.task_id, drag.source.index)
        else {
            return DropOutcome::Ignored;
        };

        let mut task = self.columns[source_index].tasks.remove(task_position);

        if source_index == destination_index {
            let tasks = &mut self.columns[source_index].tasks;
            tasks.insert(destination.index.min(tasks.len()), task);
            return DropOutcome::Reordered;
        }

        let due_date = self.columns[destination_index].due_date();
        let previous_due = task.duedate.replace(due_date);
        let tasks = &mut self.columns[destination_index].tasks;
        tasks.insert(destination.index.min(tasks.len()), task);

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.pending = Some(PendingMove {
            ticket,
            generation: self.generation,
            task_id: drag.task_id.clone(),
            source: DragLocation::new(drag.source.column_id.clone(), task_position),
            destination_column: destination.column_id.clone(),
            previous_due,
        });

        DropOutcome::Rescheduled(DueDateChange {
            ticket,
            task_id: drag.task_id.clone(),
            due_date,
        })
    }

    /// Settles the in-flight update identified by `ticket`.
    pub fn resolve_update(&mut self, ticket: u64, succeeded: bool) -> UpdateResolution {
        let Some(pending) = self.pending.take_if(|p| p.ticket == ticket) else {
            return UpdateResolution::Stale;
        };
        if succeeded {
            return UpdateResolution::Confirmed;
        }
        if pending.generation != self.generation {
            return UpdateResolution::Superseded;
        }
        self.roll_back(pending);
        UpdateResolution::RolledBack
    }

    fn roll_back(&mut self, pending: PendingMove) {
        let Some(destination_index) = self.position(&pending.destination_column) else {
            return;
        };
        let Some(position) = self.columns[destination_index]
            .tasks
            .iter()
            .position(|t| t.id == pending.task_id)
        else {
            return;
        };
        let mut task = self.columns[destination_index].tasks.remove(position);
        task.duedate = pending.previous_due;

        let source_index = self.position(&pending.source.column_id).unwrap_or(0);
        let tasks = &mut self.columns[source_index].tasks;
        tasks.insert(pending.source.index.min(tasks.len()), task);
    }

    fn position(&self, column_id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == column_id)
    }
}

/// Finds the dragged task, trusting the reported index when it matches.
fn locate(tasks: &[Task], task_id: &TaskId, hint: usize) -> Option<usize> {
    match tasks.get(hint) {
        Some(task) if task.id == *task_id => Some(hint),
        _ => tasks.iter().position(|t| t.id == *task_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2026, 10, 18)
    }

    fn task(id: i64, due: Option<NaiveDate>) -> Task {
        Task::new(id, format!("task {}", id)).with_due_date(due)
    }

    fn ids(column: &MonthColumn) -> Vec<TaskId> {
        column.tasks.iter().map(|t| t.id.clone()).collect()
    }

    fn board_with(tasks: &[Task]) -> KanbanBoard {
        let mut board = KanbanBoard::new(today());
        board.distribute(tasks);
        board
    }

    #[test]
    fn generates_twelve_months_from_today() {
        let columns = generate_columns(today());
        assert_eq!(columns.len(), 12);
        assert_eq!(columns[0].id, "2026-10");
        assert_eq!(columns[0].title, "October 2026");
        assert_eq!(columns[2].id, "2026-12");
        assert_eq!(columns[3].id, "2027-01");
        assert_eq!(columns[11].id, "2027-09");
        assert_eq!(columns[11].title, "September 2027");
    }

    #[test]
    fn month_end_of_day_31_start_does_not_skip_months() {
        let columns = generate_columns(date(2027, 1, 31));
        assert_eq!(columns[1].id, "2027-02");
        assert_eq!(columns[1].due_date(), date(2027, 2, 28));
    }

    #[test]
    fn end_of_month_handles_leap_years_and_december() {
        assert_eq!(end_of_month(date(2028, 2, 10)), date(2028, 2, 29));
        assert_eq!(end_of_month(date(2026, 12, 1)), date(2026, 12, 31));
        assert_eq!(end_of_month(date(2026, 4, 30)), date(2026, 4, 30));
    }

    #[test]
    fn buckets_by_month_and_preserves_order() {
        let board = board_with(&[
            task(1, Some(date(2026, 11, 3))),
            task(2, Some(date(2027, 2, 14))),
            task(3, Some(date(2026, 11, 28))),
        ]);
        assert_eq!(ids(board.column("2026-11").unwrap()), vec![TaskId::from(1), TaskId::from(3)]);
        assert_eq!(ids(board.column("2027-02").unwrap()), vec![TaskId::from(2)]);
    }

    #[test]
    fn undated_and_out_of_window_tasks_fall_back_to_first_column() {
        let thirteen_months_out = today().checked_add_months(Months::new(13)).unwrap();
        let board = board_with(&[
            task(1, None),
            task(2, Some(thirteen_months_out)),
            task(3, Some(date(2025, 1, 1))),
        ]);
        let first = &board.columns()[0];
        assert_eq!(first.id, month_key(today()));
        assert_eq!(ids(first), vec![TaskId::from(1), TaskId::from(2), TaskId::from(3)]);
    }

    #[test]
    fn redistribution_replaces_previous_contents() {
        let mut board = board_with(&[task(1, None)]);
        board.distribute(&[]);
        assert!(board.columns().iter().all(|c| c.tasks.is_empty()));
    }

    #[test]
    fn drop_outside_or_in_place_is_a_no_op() {
        let mut board = board_with(&[task(1, None), task(2, None)]);
        let before = board.clone();

        let outside = DragResult {
            task_id: TaskId::from(1),
            source: DragLocation::new("2026-10", 0),
            destination: None,
        };
        assert_eq!(board.apply_drop(&outside), DropOutcome::Ignored);

        let in_place = DragResult {
            destination: Some(DragLocation::new("2026-10", 0)),
            ..outside
        };
        assert_eq!(board.apply_drop(&in_place), DropOutcome::Ignored);
        assert_eq!(board, before);
    }

    #[test]
    fn same_column_drop_reorders_locally() {
        let mut board = board_with(&[task(1, None), task(2, None), task(3, None)]);
        let outcome = board.apply_drop(&DragResult {
            task_id: TaskId::from(1),
            source: DragLocation::new("2026-10", 0),
            destination: Some(DragLocation::new("2026-10", 2)),
        });
        assert_eq!(outcome, DropOutcome::Reordered);
        assert_eq!(
            ids(&board.columns()[0]),
            vec![TaskId::from(2), TaskId::from(3), TaskId::from(1)]
        );
        assert!(!board.is_updating());
    }

    #[test]
    fn cross_column_drop_reschedules_to_end_of_destination_month() {
        let mut board = board_with(&[task(1, Some(date(2026, 10, 2))), task(2, Some(date(2027, 2, 1)))]);
        let outcome = board.apply_drop(&DragResult {
            task_id: TaskId::from(1),
            source: DragLocation::new("2026-10", 0),
            destination: Some(DragLocation::new("2027-02", 0)),
        });

        let DropOutcome::Rescheduled(change) = outcome else {
            panic!("expected a reschedule, got {:?}", outcome);
        };
        assert_eq!(change.task_id, TaskId::from(1));
        assert_eq!(change.due_date, date(2027, 2, 28));
        assert!(board.is_updating());

        let february = board.column("2027-02").unwrap();
        assert_eq!(ids(february), vec![TaskId::from(1), TaskId::from(2)]);
        assert_eq!(february.tasks[0].duedate, Some(date(2027, 2, 28)));
        assert!(board.columns()[0].tasks.is_empty());
    }

    #[test]
    fn drops_are_blocked_while_updating() {
        let mut board = board_with(&[task(1, None), task(2, None)]);
        let first = board.apply_drop(&DragResult {
            task_id: TaskId::from(1),
            source: DragLocation::new("2026-10", 0),
            destination: Some(DragLocation::new("2026-12", 0)),
        });
        assert!(matches!(first, DropOutcome::Rescheduled(_)));

        let second = board.apply_drop(&DragResult {
            task_id: TaskId::from(2),
            source: DragLocation::new("2026-10", 0),
            destination: Some(DragLocation::new("2026-11", 0)),
        });
        assert_eq!(second, DropOutcome::Blocked);
    }

    #[test]
    fn confirmed_update_keeps_the_move() {
        let mut board = board_with(&[task(1, None)]);
        let DropOutcome::Rescheduled(change) = board.apply_drop(&DragResult {
            task_id: TaskId::from(1),
            source: DragLocation::new("2026-10", 0),
            destination: Some(DragLocation::new("2026-11", 0)),
        }) else {
            panic!("expected a reschedule");
        };

        assert_eq!(board.resolve_update(change.ticket, true), UpdateResolution::Confirmed);
        assert!(!board.is_updating());
        assert_eq!(ids(board.column("2026-11").unwrap()), vec![TaskId::from(1)]);
    }

    #[test]
    fn failed_update_rolls_the_card_back() {
        let mut board = board_with(&[task(1, None), task(2, None), task(3, None)]);
        let before = board.clone();
        let DropOutcome::Rescheduled(change) = board.apply_drop(&DragResult {
            task_id: TaskId::from(2),
            source: DragLocation::new("2026-10", 1),
            destination: Some(DragLocation::new("2027-03", 0)),
        }) else {
            panic!("expected a reschedule");
        };

        assert_eq!(board.resolve_update(change.ticket, false), UpdateResolution::RolledBack);
        assert!(!board.is_updating());
        assert_eq!(board.columns(), before.columns());
    }

    #[test]
    fn failure_after_redistribution_does_not_revert() {
        let mut board = board_with(&[task(1, None)]);
        let DropOutcome::Rescheduled(change) = board.apply_drop(&DragResult {
            task_id: TaskId::from(1),
            source: DragLocation::new("2026-10", 0),
            destination: Some(DragLocation::new("2026-11", 0)),
        }) else {
            panic!("expected a reschedule");
        };

        board.distribute(&[task(1, Some(date(2026, 11, 30)))]);
        assert_eq!(board.resolve_update(change.ticket, false), UpdateResolution::Superseded);
        assert_eq!(ids(board.column("2026-11").unwrap()), vec![TaskId::from(1)]);
    }

    #[test]
    fn unknown_tickets_are_stale() {
        let mut board = board_with(&[task(1, None)]);
        assert_eq!(board.resolve_update(99, false), UpdateResolution::Stale);
    }

    #[test]
    fn locates_task_by_id_when_index_is_off() {
        let mut board = board_with(&[task(1, None), task(2, None)]);
        let outcome = board.apply_drop(&DragResult {
            task_id: TaskId::from(2),
            source: DragLocation::new("2026-10", 0),
            destination: Some(DragLocation::new("2026-11", 0)),
        });
        assert!(matches!(outcome, DropOutcome::Rescheduled(_)));
        assert_eq!(ids(&board.columns()[0]), vec![TaskId::from(1)]);
    }
}
