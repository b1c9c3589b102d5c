use clap::Parser;

use shortfront::cli::Cli;
use shortfront::config::{get_config, init_config_from};
use shortfront::runtime::modes::{self, Mode};
use shortfront::system::logging::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_config_from(&cli.config);
    let config = get_config();

    match modes::detect_mode(cli.command.as_ref()) {
        #[cfg(feature = "server")]
        Mode::Server => {
            let _guard = init_logging(&config, true)?;
            modes::run_server(&config).await
        }

        // CLI output goes to stdout, logs only to a configured file
        #[cfg(feature = "cli")]
        Mode::Cli => {
            let _guard = init_logging(&config, false)?;
            if let Some(command) = cli.command
                && let Err(e) = modes::run_cli(command, &config).await
            {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
            Ok(())
        }

        #[cfg(feature = "tui")]
        Mode::Tui => {
            let _guard = init_logging(&config, false)?;
            modes::run_tui(&config).await
        }

        Mode::Unknown => {
            eprintln!("No execution mode is available in this build");
            std::process::exit(1);
        }
    }
}
