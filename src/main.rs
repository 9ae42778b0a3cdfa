use clap::Parser;
use tomo::cli::commands::Cli;
use tomo::cli::handlers;
use tomo::io::config_io::load_config;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            let result = handlers::load_data(&cli)
                .and_then(|data| {
                    let config = load_config(cli.config.as_deref())?;
                    Ok((data, config))
                })
                .and_then(|(data, config)| tomo::tui::run(data, config));
            if let Err(e) = result {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
