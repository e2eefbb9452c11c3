use clap::Parser;
use passvault::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    passvault::logging::init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::List => passvault::cli::commands::list::execute(&cli),
        Commands::Add {
            ref site,
            ref username,
            ref secret,
        } => passvault::cli::commands::add::execute(&cli, site, username, secret.as_deref()),
        Commands::Delete { number, force } => {
            passvault::cli::commands::delete::execute(&cli, number, force)
        }
        Commands::DeleteAll { force } => passvault::cli::commands::delete_all::execute(&cli, force),
        Commands::Copy { number } => passvault::cli::commands::copy::execute(&cli, number),
        Commands::Info => passvault::cli::commands::info::execute(&cli),
        Commands::Shell => passvault::cli::commands::shell::execute(&cli),
        Commands::Completions { shell } => passvault::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        passvault::cli::output::error(&e.to_string());
        // A rejected or cancelled unlock is not a failure of the tool.
        let code = if e.is_clean_exit() { 0 } else { 1 };
        std::process::exit(code);
    }
}
