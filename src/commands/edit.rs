use super::given;
use crate::db::todos::Todos;
use crate::libs::error::TodoError;
use crate::libs::messages::Message;
use crate::libs::todo::{parse_due_date, Priority, TodoUpdate};
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args, Default)]
pub struct EditArgs {
    /// ID of the todo
    #[arg(required = true)]
    pub id: i64,
    /// New title
    #[arg(short, long)]
    pub title: Option<String>,
    /// New priority: low, medium or high
    #[arg(short, long)]
    pub priority: Option<String>,
    /// New category
    #[arg(short, long, conflicts_with = "clear_category")]
    pub category: Option<String>,
    /// New due date (YYYY-MM-DD)
    #[arg(short, long, conflicts_with = "clear_due")]
    pub due: Option<String>,
    /// Move the todo back to uncategorized
    #[arg(long)]
    pub clear_category: bool,
    /// Remove the due date
    #[arg(long)]
    pub clear_due: bool,
}

impl EditArgs {
    /// Validates every given field and collects them into an update.
    ///
    /// Blank values count as not given. An edit that changes nothing is rejected.
    pub fn to_update(&self) -> Result<TodoUpdate, TodoError> {
        let priority = given(self.priority.clone()).map(|p| p.parse::<Priority>()).transpose()?;

        let category = if self.clear_category {
            Some(String::new())
        } else {
            given(self.category.clone()).map(|c| c.trim().to_string())
        };

        let due_date = if self.clear_due {
            Some(None)
        } else {
            given(self.due.clone()).as_deref().map(parse_due_date).transpose()?.map(Some)
        };

        let update = TodoUpdate {
            title: given(self.title.clone()).map(|t| t.trim().to_string()),
            priority,
            category,
            due_date,
        };

        if update.is_empty() {
            return Err(TodoError::Validation(Message::NothingToUpdate));
        }
        Ok(update)
    }
}

pub fn cmd(todos: &mut Todos, args: EditArgs) -> Result<()> {
    let update = args.to_update()?;

    if !todos.exists(args.id)? {
        return Err(TodoError::NotFound(args.id).into());
    }
    todos.update(args.id, &update)?;

    msg_success!(Message::TodoUpdated(args.id));
    Ok(())
}
