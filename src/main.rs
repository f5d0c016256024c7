use dotenv::dotenv;
use todo_cli::commands::Cli;
use todo_cli::libs::logging;
use todo_cli::msg_error;

fn main() {
    let _ = dotenv();
    logging::init();

    if let Err(e) = Cli::menu() {
        msg_error!(e);
        std::process::exit(1);
    }
}
