use crate::db::todos::Todos;
use crate::libs::messages::{self, Message};
use crate::libs::prompt::Confirmation;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the todo
    #[arg(required = true)]
    pub id: i64,
    /// Delete without asking for confirmation
    #[arg(short, long)]
    pub force: bool,
}

pub fn cmd(todos: &mut Todos, confirm: &dyn Confirmation, args: DeleteArgs) -> Result<()> {
    // Looked up first so a missing id is reported and the prompt can show the title
    let todo = todos.get_by_id(args.id)?;

    if !args.force && !confirm.confirm(&Message::ConfirmDeleteTodo(todo.id, todo.title).to_string())? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    todos.delete(args.id)?;

    msg_print!(messages::removed(Message::TodoDeleted(args.id)));
    Ok(())
}
