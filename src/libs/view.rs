use super::color::{colorize, Color};
use super::formatter::{format_created_at, format_due_date};
use super::table::Table;
use super::todo::Todo;

const CARD_RULE: &str = "──────────────────────────────────────";

pub struct View {}

impl View {
    /// Builds the list table for `todos`. Empty input renders as an empty string.
    pub fn todos(todos: &[Todo]) -> String {
        let mut table = Table::new(["ID", "✓", "Title", "Priority", "Category", "Due"]);

        for todo in todos {
            let status = if todo.done { colorize(Color::Green, "✓") } else { " ".to_string() };
            table.add_row([
                todo.id.to_string(),
                status,
                todo.title.clone(),
                colorize(todo.priority.color(), todo.priority.as_str()),
                todo.category.clone(),
                format_due_date(todo.due_date),
            ]);
        }

        table.render()
    }

    /// Builds the detail card shown by `show`.
    ///
    /// Category and due date lines are omitted when unset.
    pub fn todo_details(todo: &Todo) -> String {
        let status = if todo.done {
            colorize(Color::Green, "Done")
        } else {
            colorize(Color::Yellow, "Pending")
        };

        let mut lines = vec![
            CARD_RULE.to_string(),
            format!("  ID:        {}", todo.id),
            format!("  Title:     {}", todo.title),
            format!("  Status:    {}", status),
            format!("  Priority:  {}", colorize(todo.priority.color(), todo.priority.as_str())),
        ];
        if !todo.category.is_empty() {
            lines.push(format!("  Category:  {}", todo.category));
        }
        lines.push(format!("  Created:   {}", format_created_at(&todo.created_at)));
        if todo.due_date.is_some() {
            lines.push(format!("  Due:       {}", format_due_date(todo.due_date)));
        }
        lines.push(CARD_RULE.to_string());

        lines.join("\n")
    }
}
