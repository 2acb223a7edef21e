use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::features::data_table::{SortDirection, SortState};

/// Statuses the backend uses for tasks that no longer count as open.
pub const CLOSED_STATUSES: [&str; 2] = ["Completed", "Rated"];

/// Task identifier as the backend sends it. Numeric ids stay numeric when
/// they are echoed back in update requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Numeric(id) => write!(f, "{}", id),
            TaskId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for TaskId {
    fn from(id: i64) -> Self {
        TaskId::Numeric(id)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        TaskId::Text(id.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: TaskId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default, with = "due_date_format")]
    pub duedate: Option<NaiveDate>,
    #[serde(default)]
    pub assignee_name: Option<String>,
    #[serde(default)]
    pub meeting_owner_name: Option<String>,
}

impl Task {
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            status: None,
            priority: None,
            duedate: None,
            assignee_name: None,
            meeting_owner_name: None,
        }
    }

    pub fn with_due_date(mut self, duedate: Option<NaiveDate>) -> Self {
        self.duedate = duedate;
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn status_label(&self) -> &str {
        non_empty(&self.status).unwrap_or("Pending")
    }

    pub fn priority_label(&self) -> &str {
        non_empty(&self.priority).unwrap_or("Medium")
    }

    pub fn assignee_label(&self) -> &str {
        non_empty(&self.assignee_name).unwrap_or("Unassigned")
    }

    pub fn owner_label(&self) -> &str {
        non_empty(&self.meeting_owner_name).unwrap_or("Unassigned")
    }

    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn due_label(&self) -> String {
        self.duedate
            .map(|date| date.format("%m/%d/%Y").to_string())
            .unwrap_or_else(|| "No due date".to_string())
    }

    /// CSS modifier for a badge, e.g. `"In Progress"` -> `"in-progress"`.
    pub fn badge_class(label: &str) -> String {
        label.trim().to_lowercase().replace(' ', "-")
    }

    pub fn is_open(&self) -> bool {
        let status = self.status.as_deref().unwrap_or_default();
        !CLOSED_STATUSES.contains(&status)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Parses a due date sent either as `yyyy-MM-dd` or as an ISO date-time.
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

mod due_date_format {
    use super::*;

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_some(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => {
                let parsed = parse_due_date(&raw);
                if parsed.is_none() {
                    report_unparsed(&raw);
                }
                Ok(parsed)
            }
        }
    }

    // An unreadable date leaves the task undated instead of failing the list.
    #[cfg(target_arch = "wasm32")]
    fn report_unparsed(raw: &str) {
        web_sys::console::warn_1(&format!("Ignoring unreadable due date: {}", raw).into());
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn report_unparsed(_raw: &str) {}
}

/// Body and query of the filtered task listing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskFilter {
    pub status_filter: String,
    pub text_filter: String,
    pub sorting: SortState,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFilterBody<'a> {
    pub status_filter: &'a str,
    pub text_filter: &'a str,
}

impl TaskFilter {
    pub fn sorted_by(sorting: SortState) -> Self {
        Self {
            sorting,
            ..Self::default()
        }
    }

    /// Route `?status=` value; `all` (any case) or blank means no status filter.
    pub fn with_status_query(mut self, status: Option<&str>) -> Self {
        self.status_filter = status
            .map(str::trim)
            .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("all"))
            .unwrap_or_default()
            .to_string();
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text_filter = text.trim().to_string();
        self
    }

    /// `sort_by` / `sort_order` query pairs; falls back to newest due date first.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let (column, direction) = match self.sorting.active() {
            Some(sort) => (sort.column_id.clone(), sort.direction),
            None => ("duedate".to_string(), SortDirection::Desc),
        };
        vec![
            ("sort_by", column),
            ("sort_order", direction.as_str().to_string()),
        ]
    }

    pub fn body(&self) -> TaskFilterBody<'_> {
        TaskFilterBody {
            status_filter: &self.status_filter,
            text_filter: &self.text_filter,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TaskListResponse {
    #[serde(default)]
    pub tasks: Vec<Task>,
}

#[derive(Debug, Serialize)]
pub struct DueDateUpdateRequest<'a> {
    pub id: &'a TaskId,
    pub duedate: String,
}

impl<'a> DueDateUpdateRequest<'a> {
    pub fn new(id: &'a TaskId, duedate: NaiveDate) -> Self {
        Self {
            id,
            duedate: duedate.format("%Y-%m-%d").to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DueDateUpdateResponse {
    #[serde(default)]
    pub success: bool,
}

/// Error payload some endpoints return alongside a failing status.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ErrorBody {
    pub error: Option<String>,
}
