use crate::libs::config::{Config, DatabaseConfig};
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Path of the database file; prompted for when omitted
    #[arg(long)]
    pub db_path: Option<PathBuf>,
}

pub fn cmd(args: InitArgs) -> Result<()> {
    let mut config = Config::read()?;

    let path = match args.db_path {
        Some(path) => path,
        None => {
            let current = config.database_path(&DataStorage::new())?;
            let input: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDatabasePath.to_string())
                .default(current.display().to_string())
                .interact_text()?;
            PathBuf::from(input)
        }
    };

    config.database = Some(DatabaseConfig { path: path.clone() });
    let saved_to = config.save()?;

    msg_success!(Message::ConfigSaved(saved_to.display().to_string()));
    msg_info!(Message::ConfigDatabasePath(path.display().to_string()));
    Ok(())
}
