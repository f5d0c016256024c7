use crate::db::todos::Todos;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// ID of the todo
    #[arg(required = true)]
    pub id: i64,
}

pub fn cmd(todos: &mut Todos, args: DoneArgs) -> Result<()> {
    todos.set_status(args.id, true)?;

    msg_success!(Message::TodoMarkedDone(args.id));
    Ok(())
}
