use anyhow::Result;
use clap::{Arg, Command};
use tracing::{error, info};

use menagerie::config::Config;
use menagerie::db::Database;
use menagerie::seed::{seed_database, SeedOptions, SeedSummary};

/// Reset and repopulate the task manager database with fake data.
/// Destructive with respect to existing rows in users and tasks.
#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let matches = Command::new("seed-tasks")
        .about("Truncate and repopulate the task manager tables with fake data")
        .arg(
            Arg::new("users")
                .help("Number of users to insert")
                .long("users")
                .value_name("N")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("tasks")
                .help("Number of tasks to insert")
                .long("tasks")
                .value_name("N")
                .value_parser(clap::value_parser!(usize)),
        )
        .get_matches();

    let mut opts = SeedOptions::default();
    if let Some(users) = matches.get_one::<usize>("users") {
        opts.users = *users;
    }
    if let Some(tasks) = matches.get_one::<usize>("tasks") {
        opts.tasks = *tasks;
    }

    let config = Config::from_env()?;

    let db = match Database::new(&config.postgres.url()).await {
        Ok(db) => db,
        Err(e) => {
            error!("error while connecting to the database: {}", e);
            std::process::exit(1);
        }
    };
    println!("Connected to the database.");

    let result = migrate_and_seed(&db, opts).await;

    // Release the pool whatever happened above.
    db.close().await;
    info!("database connection closed");

    match result {
        Ok(summary) => {
            println!(
                "Database seeded with {} users and {} tasks.",
                summary.users, summary.tasks
            );
            Ok(())
        }
        Err(e) => {
            error!("error while seeding the database: {}", e);
            std::process::exit(1);
        }
    }
}

/// Schema setup and seeding share one error path so the caller can
/// close the pool once, whatever went wrong.
async fn migrate_and_seed(db: &Database, opts: SeedOptions) -> Result<SeedSummary> {
    db.migrate().await?;
    Ok(seed_database(db, opts).await?)
}
