pub mod add;
pub mod clear;
pub mod delete;
pub mod done;
pub mod edit;
pub mod init;
pub mod list;
pub mod show;
pub mod undone;

use crate::db::{db::Db, todos::Todos};
use crate::libs::prompt::{Confirmation, InteractiveConfirmation};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Add a new todo")]
    Add(add::AddArgs),
    #[command(about = "List todos (pending only by default)")]
    List(list::ListArgs),
    #[command(about = "Mark a todo as done")]
    Done(done::DoneArgs),
    #[command(about = "Mark a todo as not done")]
    Undone(undone::UndoneArgs),
    #[command(about = "Delete a todo")]
    Delete(delete::DeleteArgs),
    #[command(about = "Show the details of a todo")]
    Show(show::ShowArgs),
    #[command(about = "Edit the fields of a todo")]
    Edit(edit::EditArgs),
    #[command(about = "Delete completed (or all) todos")]
    Clear(clear::ClearArgs),
    #[command(about = "Configure where todos are stored")]
    Init(init::InitArgs),
}

#[derive(Debug, Parser)]
#[command(name = "todo", author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Parses the process arguments and runs the selected command.
    ///
    /// The database is opened once for the command and closed when it returns.
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            command => {
                let mut todos = Todos::new(Db::new()?);
                execute(command, &mut todos, &InteractiveConfirmation)
            }
        }
    }
}

/// Runs `command` against an already opened store.
pub fn execute(command: Commands, todos: &mut Todos, confirm: &dyn Confirmation) -> Result<()> {
    match command {
        Commands::Add(args) => add::cmd(todos, args),
        Commands::List(args) => list::cmd(todos, args),
        Commands::Done(args) => done::cmd(todos, args),
        Commands::Undone(args) => undone::cmd(todos, args),
        Commands::Delete(args) => delete::cmd(todos, confirm, args),
        Commands::Show(args) => show::cmd(todos, args),
        Commands::Edit(args) => edit::cmd(todos, args),
        Commands::Clear(args) => clear::cmd(todos, confirm, args),
        Commands::Init(args) => init::cmd(args),
    }
}

/// Treats an absent or blank argument as "not given".
fn given(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
