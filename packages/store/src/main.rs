use anyhow::Context;
use clap::{Parser, Subcommand};
use store::config::AppConfig;
use store::database::init_db;
use store::migration;
use tracing::info;

/// Replay the w3hacks schema migration log.
#[derive(Parser, Debug)]
#[command(name = "w3hacks-migrate", version)]
struct Cli {
    /// Overrides `database.url` from the config file.
    #[arg(long, env = "DATABASE_URL", global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply every pending migration (default).
    Run,
    /// List migrations with the time each was applied.
    Status {
        /// Print JSON instead of one line per migration.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("Failed to load config")?;
    if let Some(url) = cli.database_url {
        config.database.url = url;
    }

    let db = init_db(&config.database)
        .await
        .context("Failed to connect to database")?;

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            let applied = migration::run(&db)
                .await
                .context("Failed to apply migrations")?;
            for name in &applied {
                info!(migration = %name, "Applied");
            }

            let status = migration::status(&db)
                .await
                .context("Failed to read migration status")?;
            let pending = status.iter().filter(|s| s.applied_at.is_none()).count();
            info!(total = status.len(), pending, "Migration status");
        }
        Command::Status { json } => {
            let status = migration::status(&db)
                .await
                .context("Failed to read migration status")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                for entry in &status {
                    match entry.applied_at {
                        Some(at) => println!("[x] {} ({at})", entry.name),
                        None => println!("[ ] {}", entry.name),
                    }
                }
            }
        }
    }

    Ok(())
}
