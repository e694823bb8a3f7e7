use std::process::ExitCode;

use clap::Parser;

mod cli;
mod clipboard;
mod error;
mod exits;
mod logging;
mod terminal;
mod tui;

use cli::{CliFlags, prompts, quiet};

fn main() -> ExitCode {
    exits::install_handlers();
    exits::disable_core_dumps();

    let flags = CliFlags::parse();
    let interactive = flags.wants_widget(quiet::is_interactive());

    quiet::set(flags.quiet);
    logging::init(interactive, flags.quiet);

    let result = if interactive {
        tui::run(flags.length, flags.options())
    } else {
        cli::run(&flags)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "exiting with error");
            prompts::error(&e.to_string());
            ExitCode::from(e.exit_code())
        }
    }
}
