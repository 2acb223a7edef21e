/// Element id of the injected shimmer stylesheet.
pub const SKELETON_STYLE_ID: &str = "skeleton-stream-styles";

pub const SKELETON_STYLES: &str = r#"
.skeleton-stream {
    background: linear-gradient(90deg, #f0f0f0 25%, #e0e0e0 50%, #f0f0f0 75%);
    background-size: 200% 100%;
    animation: stream 1.5s infinite;
}

@keyframes stream {
    0% { background-position: 200% 0; }
    100% { background-position: -200% 0; }
}
"#;

/// Width classes for well-known column ids.
pub fn column_width_class(column_id: &str) -> &'static str {
    match column_id {
        "title" => "w-1/4 min-w-[200px]",
        "organizer" | "assignee" | "assignee_name" | "meeting_owner_name" => "w-1/6 min-w-[150px]",
        "dateTime" | "duedate" => "w-1/5 min-w-[180px]",
        "duration" | "platform" | "status" | "priority" => "w-1/8 min-w-[100px]",
        "participantCount" => "w-1/8 min-w-[120px]",
        "summary" => "w-1/3 min-w-[200px]",
        "remove" => "w-[30px] min-w-[30px]",
        _ => "w-auto min-w-[100px]",
    }
}

/// Placeholder bar width for a loading cell. Deterministic in
/// `(column_id, row_index)`.
pub fn skeleton_width_class(column_id: &str, row_index: usize) -> &'static str {
    let pattern: [&'static str; 3] = match column_id {
        "title" => ["w-4/5", "w-3/4", "w-5/6"],
        "organizer" | "assignee" | "assignee_name" | "meeting_owner_name" => ["w-2/3", "w-3/4", "w-1/2"],
        "dateTime" | "duedate" => ["w-5/6", "w-4/5", "w-3/4"],
        "duration" | "platform" | "status" | "priority" => ["w-1/2", "w-2/3", "w-3/4"],
        "participantCount" => ["w-1/3", "w-1/2", "w-2/3"],
        "summary" => ["w-5/6", "w-3/4", "w-4/5"],
        _ => ["w-2/3", "w-3/4", "w-1/2"],
    };
    pattern[row_index % pattern.len()]
}

/// Staggered shimmer start for the n-th column.
pub fn animation_delay(column_index: usize) -> String {
    format!("animation-delay: {:.1}s", column_index as f32 * 0.1)
}
