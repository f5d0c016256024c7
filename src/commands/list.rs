use super::given;
use crate::db::todos::Todos;
use crate::libs::messages::Message;
use crate::libs::todo::{Priority, StatusFilter, TodoFilter};
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Include completed todos
    #[arg(short, long)]
    pub all: bool,
    /// Only completed todos
    #[arg(long)]
    pub done: bool,
    /// Only todos with this priority
    #[arg(short, long)]
    pub priority: Option<String>,
    /// Only todos in this category
    #[arg(short, long)]
    pub category: Option<String>,
}

impl ListArgs {
    pub fn filter(&self) -> Result<TodoFilter> {
        let priority = given(self.priority.clone()).map(|p| p.parse::<Priority>()).transpose()?;

        Ok(TodoFilter {
            show_all: self.all,
            show_done: self.done,
            priority,
            category: given(self.category.clone()),
        })
    }
}

pub fn cmd(todos: &Todos, args: ListArgs) -> Result<()> {
    let filter = args.filter()?;
    let items = todos.fetch(&filter)?;

    let header = match filter.status() {
        StatusFilter::Completed => Message::CompletedTodosHeader,
        StatusFilter::Any => Message::AllTodosHeader,
        StatusFilter::Pending => Message::PendingTodosHeader,
    };
    msg_print!(format!("\n{}", header));

    if items.is_empty() {
        msg_info!(Message::NoTodosFound);
    } else {
        msg_print!(View::todos(&items).trim_end());
    }

    Ok(())
}
