use crate::db::todos::Todos;
use crate::libs::messages::{self, Message};
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct UndoneArgs {
    /// ID of the todo
    #[arg(required = true)]
    pub id: i64,
}

pub fn cmd(todos: &mut Todos, args: UndoneArgs) -> Result<()> {
    todos.set_status(args.id, false)?;

    msg_print!(messages::reverted(Message::TodoMarkedUndone(args.id)));
    Ok(())
}
