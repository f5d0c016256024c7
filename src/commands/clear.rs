use crate::db::todos::Todos;
use crate::libs::messages::Message;
use crate::libs::prompt::Confirmation;
use crate::libs::todo::ClearScope;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Delete every todo, not only completed ones
    #[arg(short, long)]
    pub all: bool,
    /// Delete without asking for confirmation
    #[arg(short, long)]
    pub force: bool,
}

pub fn cmd(todos: &mut Todos, confirm: &dyn Confirmation, args: ClearArgs) -> Result<()> {
    let scope = if args.all { ClearScope::All } else { ClearScope::Completed };

    let count = todos.count(scope)?;
    if count == 0 {
        match scope {
            ClearScope::All => msg_info!(Message::NoTodosToClear),
            ClearScope::Completed => msg_info!(Message::NoCompletedTodosToClear),
        }
        return Ok(());
    }

    let prompt = match scope {
        ClearScope::All => Message::ConfirmClearAll(count),
        ClearScope::Completed => Message::ConfirmClearCompleted(count),
    };
    if !args.force && !confirm.confirm(&prompt.to_string())? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let removed = todos.clear(scope)?;

    match scope {
        ClearScope::All => msg_success!(Message::AllTodosCleared(removed)),
        ClearScope::Completed => msg_success!(Message::CompletedTodosCleared(removed)),
    }
    Ok(())
}
