use super::given;
use crate::db::todos::Todos;
use crate::libs::error::TodoError;
use crate::libs::messages::Message;
use crate::libs::todo::{parse_due_date, Priority};
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Title of the todo
    #[arg(required = true)]
    pub title: String,
    /// Priority: low, medium or high
    #[arg(short, long, default_value = "medium")]
    pub priority: String,
    /// Category label
    #[arg(short, long, default_value = "")]
    pub category: String,
    /// Due date (YYYY-MM-DD)
    #[arg(short, long)]
    pub due: Option<String>,
}

pub fn cmd(todos: &mut Todos, args: AddArgs) -> Result<()> {
    let title = args.title.trim();
    if title.is_empty() {
        return Err(TodoError::Validation(Message::EmptyTitle).into());
    }
    let priority: Priority = args.priority.parse()?;
    let due_date = given(args.due).as_deref().map(parse_due_date).transpose()?;

    let id = todos.insert(title, priority, args.category.trim(), due_date)?;

    msg_success!(Message::TodoAdded(id, title.to_string()));
    Ok(())
}
