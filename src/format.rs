//! Terminal rendering for the menu panel, task tables and status lines.
//!
//! Everything here returns `String`s; the session decides where they go.
//! Column widths are computed on plain text before styling so ANSI codes
//! never skew the borders.

use crate::types::{Priority, TaskRow};
use colored::Colorize;

const MENU_TITLE: &str = "Task Manager";
const TABLE_TITLE: &str = "Tasks by Priority";

const MENU_ITEMS: [(&str, &str); 5] = [
    ("1.", "Add task"),
    ("2.", "List tasks"),
    ("3.", "Complete task"),
    ("4.", "Update priority"),
    ("5.", "Exit"),
];

/// Turn off ANSI styling for everything rendered afterwards. Otherwise
/// `colored` decides from the terminal and `NO_COLOR`/`CLICOLOR`.
pub fn disable_color() {
    colored::control::set_override(false);
}

fn width(s: &str) -> usize {
    s.chars().count()
}

fn pad(s: &str, to: usize) -> String {
    format!("{}{}", s, " ".repeat(to.saturating_sub(width(s))))
}

fn center(s: &str, to: usize) -> String {
    let total = to.saturating_sub(width(s));
    let left = total / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(total - left))
}

/// Render the bordered selection panel.
pub fn render_menu() -> String {
    let inner = MENU_ITEMS
        .iter()
        .map(|(num, label)| width(num) + 1 + width(label))
        .max()
        .unwrap_or(0)
        .max(width(MENU_TITLE) + 2)
        + 2;

    let title = format!(" {} ", MENU_TITLE);
    let rule = inner - width(&title);
    let left = rule / 2;

    let mut out = String::new();
    out.push_str(&format!(
        "{}{}{}\n",
        format!("╭{}", "─".repeat(left)).cyan(),
        title.cyan().bold(),
        format!("{}╮", "─".repeat(rule - left)).cyan(),
    ));
    for (num, label) in MENU_ITEMS {
        let text = format!("{} {}", num, label);
        let fill = " ".repeat(inner - 2 - width(&text));
        out.push_str(&format!(
            "{} {} {}{} {}\n",
            "│".cyan(),
            num.cyan(),
            label,
            fill,
            "│".cyan()
        ));
    }
    out.push_str(&format!("{}\n", format!("╰{}╯", "─".repeat(inner)).cyan()));
    out
}

#[derive(Clone, Copy)]
enum CellStyle {
    Dim,
    Cyan,
    Green,
}

fn style(text: &str, style: CellStyle) -> String {
    match style {
        CellStyle::Dim => text.dimmed().to_string(),
        CellStyle::Cyan => text.cyan().to_string(),
        CellStyle::Green => text.green().to_string(),
    }
}

struct Column {
    header: &'static str,
    cells: Vec<String>,
    style: CellStyle,
}

impl Column {
    fn width(&self) -> usize {
        self.cells
            .iter()
            .map(|c| width(c))
            .chain(std::iter::once(width(self.header)))
            .max()
            .unwrap_or(0)
    }
}

fn border(widths: &[usize], left: &str, mid: &str, right: &str) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}", left, segments.join(mid), right)
}

/// Render rows as a rounded table titled "Tasks by Priority".
///
/// The `#` column appears only when the rows carry display indices.
pub fn render_task_table(rows: &[TaskRow]) -> String {
    let show_indices = rows.iter().any(|r| r.display_index.is_some());

    let mut columns = Vec::with_capacity(3);
    if show_indices {
        columns.push(Column {
            header: "#",
            cells: rows
                .iter()
                .map(|r| r.display_index.map(|i| i.to_string()).unwrap_or_default())
                .collect(),
            style: CellStyle::Dim,
        });
    }
    columns.push(Column {
        header: "Priority",
        cells: rows.iter().map(|r| r.priority.to_string()).collect(),
        style: CellStyle::Cyan,
    });
    columns.push(Column {
        header: "Description",
        cells: rows.iter().map(|r| r.description.clone()).collect(),
        style: CellStyle::Green,
    });

    let widths: Vec<usize> = columns.iter().map(Column::width).collect();
    let total = widths.iter().map(|w| w + 3).sum::<usize>() + 1;

    let mut out = String::new();
    out.push_str(&format!("{}\n", center(TABLE_TITLE, total).cyan().bold()));
    out.push_str(&border(&widths, "╭", "┬", "╮"));
    out.push('\n');

    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(col, w)| pad(col.header, *w).magenta().bold().to_string())
        .collect();
    out.push_str(&format!("│ {} │\n", header.join(" │ ")));
    out.push_str(&border(&widths, "├", "┼", "┤"));
    out.push('\n');

    for row in 0..rows.len() {
        let cells: Vec<String> = columns
            .iter()
            .zip(&widths)
            .map(|(col, w)| style(&pad(&col.cells[row], *w), col.style))
            .collect();
        out.push_str(&format!("│ {} │\n", cells.join(" │ ")));
    }

    out.push_str(&border(&widths, "╰", "┴", "╯"));
    out.push('\n');
    out
}

/// One-line count of active and completed tasks shown under the table.
pub fn summary_line(active: usize, completed: usize) -> String {
    format!("{} active, {} completed", active, completed)
        .dimmed()
        .to_string()
}

pub fn no_tasks_message() -> String {
    "No tasks found.".yellow().to_string()
}

pub fn added_message(description: &str, priority: Priority) -> String {
    format!(
        "✨ Added task: {} (Priority: {})",
        description.green().bold(),
        priority.to_string().blue().bold()
    )
}

pub fn completed_message(description: &str) -> String {
    format!("✅ Completed task: {}", description.green().bold())
}

pub fn updated_message(description: &str, priority: Priority) -> String {
    format!(
        "📝 Updated priority for task: {} to {}",
        description.green().bold(),
        priority.to_string().blue().bold()
    )
}

pub fn invalid_task_number() -> String {
    "Invalid task number!".red().bold().to_string()
}

pub fn farewell() -> String {
    "Goodbye! 👋".green().bold().to_string()
}

pub fn terminated_by_user() -> String {
    "Program terminated by user".red().bold().to_string()
}
