use crate::db::todos::Todos;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// ID of the todo
    #[arg(required = true)]
    pub id: i64,
}

pub fn cmd(todos: &Todos, args: ShowArgs) -> Result<()> {
    let todo = todos.get_by_id(args.id)?;

    msg_print!(View::todo_details(&todo), true);
    Ok(())
}
