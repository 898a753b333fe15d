/// Output formatting: sectioned terminal tables and the focus view.
use chrono::{DateTime, Utc};

use taskduel_core::Timestamp;

use crate::store::Task;

/// Print one list section as a formatted terminal table. Empty sections
/// print nothing.
pub fn print_section(title: &str, tasks: &[&Task], now: Timestamp) {
    if tasks.is_empty() {
        return;
    }

    // Find the widest task text for padding
    let text_width = tasks.iter().map(|t| t.text.len()).max().unwrap_or(4).max(4);

    println!();
    println!("{title}");
    println!(" # | ID  | {:<text_width$} | Strength |", "Task");
    println!("---|-----|-{}-|----------|", "-".repeat(text_width));

    for (i, task) in tasks.iter().enumerate() {
        println!(
            "{:>2} | {:>3} | {:<text_width$} | {:>8} | {}",
            i + 1,
            task.id,
            task.text,
            task.strength as i64,
            note(task, now),
        );
    }
}

/// Print the single most important task.
pub fn print_focus(task: &Task) {
    println!("Top task: {} (#{}, strength {})", task.text, task.id, task.strength as i64);
}

/// Per-row detail: when a snooze ends, or when a task was removed.
fn note(task: &Task, now: Timestamp) -> String {
    if let Some(removed_at) = task.removed_at {
        return format!("removed {}", format_day(removed_at));
    }
    match task.deferred_until {
        Some(until) if until > now => format!("until {}", format_day(until)),
        _ => String::new(),
    }
}

/// Render an epoch-millisecond timestamp as a short day string.
pub fn format_day(timestamp: Timestamp) -> String {
    match DateTime::<Utc>::from_timestamp_millis(timestamp) {
        Some(date) => date.format("%a %Y-%m-%d").to_string(),
        None => format!("@{timestamp}"),
    }
}
