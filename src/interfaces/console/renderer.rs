use std::fmt::Write;

use crate::application::services::deferred_delete::{ListViewSnapshot, FULL_PROGRESS};
use crate::domain::entities::employee::Employee;

const HEADERS: [&str; 4] = ["Employee Id", "First Name", "Last Name", "Email"];
const BAR_WIDTH: usize = 20;

fn columns(employee: &Employee) -> [String; 4] {
    [
        employee.id().to_string(),
        employee.first_name().to_string(),
        employee.last_name().to_string(),
        employee.email().to_string(),
    ]
}

/// Employee table with columns sized to their widest cell
pub fn render_table(employees: &[Employee]) -> String {
    let rows: Vec<[String; 4]> = employees.iter().map(columns).collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header = HEADERS.map(String::from);
    push_row(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));

    if rows.is_empty() {
        out.push_str("(no employees)\n");
    }
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    let _ = writeln!(out, "{}", padded.join(" | ").trim_end());
}

/// Undo notification with a bar that shrinks as the commit approaches
pub fn render_notification(progress: f64) -> String {
    let clamped = progress.clamp(0.0, FULL_PROGRESS);
    let filled = ((clamped / FULL_PROGRESS) * BAR_WIDTH as f64).round() as usize;
    format!(
        "Employee deleted. [undo] [{}{}] {:>3.0}%",
        "#".repeat(filled),
        " ".repeat(BAR_WIDTH - filled),
        clamped
    )
}

/// Full list view: table plus notification while a deletion can be undone
pub fn render(snapshot: &ListViewSnapshot) -> String {
    let mut out = render_table(&snapshot.employees);
    if snapshot.show_undo {
        out.push_str(&render_notification(snapshot.progress));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lists_rows_under_headers() {
        let table = render_table(&[
            Employee::new(1, "Ada", "Lovelace", "ada@example.com"),
            Employee::new(2, "Alan", "Turing", "alan@example.com"),
        ]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Employee Id | First Name | Last Name | Email"));
        assert!(lines[2].starts_with("1           | Ada        | Lovelace  | ada@example.com"));
        assert!(lines[3].contains("alan@example.com"));
    }

    #[test]
    fn test_empty_table() {
        assert!(render_table(&[]).ends_with("(no employees)\n"));
    }

    #[test]
    fn test_notification_bar_tracks_progress() {
        assert_eq!(
            render_notification(100.0),
            format!("Employee deleted. [undo] [{}] 100%", "#".repeat(20))
        );
        assert_eq!(
            render_notification(50.0),
            format!("Employee deleted. [undo] [{}{}]  50%", "#".repeat(10), " ".repeat(10))
        );
        assert_eq!(
            render_notification(-3.0),
            format!("Employee deleted. [undo] [{}]   0%", " ".repeat(20))
        );
    }

    #[test]
    fn test_notification_only_while_pending() {
        let idle = ListViewSnapshot::default();
        assert!(!render(&idle).contains("[undo]"));

        let pending = ListViewSnapshot {
            pending: Some(Employee::new(4, "Grace", "Hopper", "grace@example.com")),
            show_undo: true,
            progress: 75.0,
            ..ListViewSnapshot::default()
        };
        assert!(render(&pending).contains("Employee deleted. [undo]"));
    }
}
