use std::io;

use clap::{Parser, Subcommand};

use career_matcher::frontend::{console, service};
use career_matcher::models::ServerConfig;
use career_matcher::models::config::DEFAULT_CONFIG_PATH;
use career_matcher::processing::embedding::FastEmbedProvider;
use career_matcher::processing::recommender::Recommender;
use career_matcher::repository::{JsonRecordRepository, RecordReader};

/// Recommend job titles for an academic major.
#[derive(Debug, Parser)]
#[command(name = "career-matcher")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Settings file, without extension
    #[arg(short, long, env = "APP_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
enum Commands {
    /// Interactive prompt on stdin/stdout (default)
    Console,
    /// Answer JSON requests on a ZMQ REP socket
    Serve,
}

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();

    let config = match ServerConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    log::info!("Loading data and model...");
    let records = match JsonRecordRepository::new(&config.data_path).list_records() {
        Ok(records) => records,
        Err(e) => {
            log::error!("Failed to load records from {}: {e}", config.data_path);
            std::process::exit(1);
        }
    };

    let provider =
        match FastEmbedProvider::try_new(&config.model_name, config.show_download_progress) {
            Ok(provider) => provider,
            Err(e) => {
                log::error!("Failed to initialize embedder: {e}");
                std::process::exit(1);
            }
        };

    let recommender = match Recommender::bootstrap(&records, provider, config.match_settings()) {
        Ok(recommender) => recommender,
        Err(e) => {
            log::error!("Failed to embed job catalog: {e}");
            std::process::exit(1);
        }
    };

    let stats = recommender.catalog().stats();
    let settings = recommender.settings();
    log::info!(
        "Catalog ready: records={}, majors={}, jobs={}, threshold={}, top_n={}",
        stats.records,
        stats.majors,
        stats.jobs,
        settings.threshold,
        settings.top_n
    );

    match cli.command.unwrap_or(Commands::Console) {
        Commands::Serve => {
            if let Err(e) = service::serve(&recommender, &config.zmq_address) {
                log::error!("ZMQ service stopped: {e}");
                std::process::exit(1);
            }
        }
        Commands::Console => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            if let Err(e) = console::run(&recommender, stdin.lock(), &mut stdout) {
                log::error!("Console I/O failed: {e}");
                std::process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Commands};

    #[test]
    fn no_subcommand_defaults_to_console() {
        let cli = Cli::try_parse_from(["career-matcher"]).expect("args should parse");

        assert_eq!(cli.command, None);
    }

    #[test]
    fn serve_subcommand_and_config_flag_parse() {
        let cli = Cli::try_parse_from(["career-matcher", "--config", "settings", "serve"])
            .expect("args should parse");

        assert_eq!(cli.command, Some(Commands::Serve));
        assert_eq!(cli.config, "settings");
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["career-matcher", "server"]).is_err());
        assert!(Cli::try_parse_from(["career-matcher", "--verbose"]).is_err());
    }
}
