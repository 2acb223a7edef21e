use chrono::{Datelike, Days, Months, NaiveDate};

use crate::core::models::Task;
use crate::features::kanban::first_of_month;

const ACTIVE_WORK_STATUSES: [&str; 3] = ["Assigned", "In Progress", "Ready for Review"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuickFilter {
    #[default]
    All,
    DueToday,
    PastDue,
    DueNext30Days,
    TotalOpen,
    AssignedAndPastDue,
    HighPriority,
    ThisWeek,
    ThisMonth,
    ThisQuarter,
}

impl QuickFilter {
    pub fn all() -> Vec<QuickFilter> {
        vec![
            QuickFilter::All,
            QuickFilter::DueToday,
            QuickFilter::PastDue,
            QuickFilter::DueNext30Days,
            QuickFilter::TotalOpen,
            QuickFilter::AssignedAndPastDue,
            QuickFilter::HighPriority,
            QuickFilter::ThisWeek,
            QuickFilter::ThisMonth,
            QuickFilter::ThisQuarter,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuickFilter::All => "All",
            QuickFilter::DueToday => "Due Today",
            QuickFilter::PastDue => "Past Due",
            QuickFilter::DueNext30Days => "Next 30 Days",
            QuickFilter::TotalOpen => "Open",
            QuickFilter::AssignedAndPastDue => "Assigned & Past Due",
            QuickFilter::HighPriority => "High Priority",
            QuickFilter::ThisWeek => "This Week",
            QuickFilter::ThisMonth => "This Month",
            QuickFilter::ThisQuarter => "This Quarter",
        }
    }

    pub fn matches(&self, task: &Task, today: NaiveDate) -> bool {
        let due = task.duedate;
        match self {
            QuickFilter::All => true,
            QuickFilter::TotalOpen => task.is_open(),
            QuickFilter::HighPriority => {
                task.is_open() && task.priority.as_deref().is_some_and(|p| p.eq_ignore_ascii_case("high"))
            }
            QuickFilter::DueToday => due == Some(today),
            QuickFilter::PastDue => task.is_open() && due.is_some_and(|d| d <= today),
            QuickFilter::DueNext30Days => {
                let horizon = today + Days::new(30);
                task.is_open() && due.is_some_and(|d| d > today && d <= horizon)
            }
            QuickFilter::AssignedAndPastDue => {
                let status = task.status.as_deref().unwrap_or_default();
                ACTIVE_WORK_STATUSES.contains(&status) && due.is_some_and(|d| d < today)
            }
            QuickFilter::ThisWeek => {
                let start = today - Days::new(u64::from(today.weekday().num_days_from_sunday()));
                due.is_some_and(|d| d >= start && d < start + Days::new(7))
            }
            QuickFilter::ThisMonth => due.is_some_and(|d| first_of_month(d) == first_of_month(today)),
            QuickFilter::ThisQuarter => {
                let start = quarter_start(today);
                let end = start.checked_add_months(Months::new(3)).unwrap_or(start);
                due.is_some_and(|d| d >= start && d < end)
            }
        }
    }
}

fn quarter_start(date: NaiveDate) -> NaiveDate {
    let month = date.month0() - date.month0() % 3 + 1;
    NaiveDate::from_ymd_opt(date.year(), month, 1).unwrap_or(date)
}

/// Case-insensitive substring match over the text fields a user sees.
pub fn matches_search(task: &Task, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    [
        Some(task.title.as_str()),
        task.description.as_deref(),
        task.assignee_name.as_deref(),
        task.meeting_owner_name.as_deref(),
        task.status.as_deref(),
        task.priority.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(&query))
}

pub fn apply_filters(tasks: &[Task], query: &str, filter: QuickFilter, today: NaiveDate) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| matches_search(task, query) && filter.matches(task, today))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskMetrics {
    pub due_today_and_past_due: usize,
    pub due_next_30_days: usize,
    pub assigned_and_past_due: usize,
    pub total_open: usize,
    pub high_priority: usize,
}

impl TaskMetrics {
    pub fn compute(tasks: &[Task], today: NaiveDate) -> Self {
        let count = |filter: QuickFilter| tasks.iter().filter(|t| filter.matches(t, today)).count();
        Self {
            due_today_and_past_due: count(QuickFilter::PastDue),
            due_next_30_days: count(QuickFilter::DueNext30Days),
            assigned_and_past_due: count(QuickFilter::AssignedAndPastDue),
            total_open: count(QuickFilter::TotalOpen),
            high_priority: count(QuickFilter::HighPriority),
        }
    }

    /// Label, value and the filter a click on the tile selects.
    pub fn tiles(&self) -> [(&'static str, usize, QuickFilter); 5] {
        [
            ("Due Today & Past Due", self.due_today_and_past_due, QuickFilter::PastDue),
            ("Due Next 30 Days", self.due_next_30_days, QuickFilter::DueNext30Days),
            ("Assigned & Past Due", self.assigned_and_past_due, QuickFilter::AssignedAndPastDue),
            ("Open Tasks", self.total_open, QuickFilter::TotalOpen),
            ("High Priority", self.high_priority, QuickFilter::HighPriority),
        ]
    }
}
