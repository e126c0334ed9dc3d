use anyhow::Result;
use clap::{Arg, Command};
use std::io::{self, BufRead, Write};
use tracing::error;

use menagerie::config::Config;
use menagerie::store::{is_affirmative, CatStore};

/// One-shot walkthrough of every CRUD operation against the cats
/// collection. Operation failures are logged with the causing error and
/// the demo keeps going with a safe default, matching the behavior of
/// the original script.
#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let matches = Command::new("cats")
        .about("Demonstrate CRUD operations against the cats collection")
        .arg(
            Arg::new("uri")
                .help("MongoDB connection string (overrides MONGODB_URI)")
                .long("uri")
                .value_name("URI"),
        )
        .arg(
            Arg::new("yes")
                .help("Skip the confirmation prompt before deleting all cats")
                .long("yes")
                .short('y')
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let mut config = Config::from_env()?;
    if let Some(uri) = matches.get_one::<String>("uri") {
        config.mongo.uri = uri.clone();
    }
    let assume_yes = matches.get_flag("yes");

    let store = match CatStore::connect(&config.mongo).await {
        Ok(store) => {
            println!("Successfully connected to MongoDB.");
            store
        }
        Err(e) => {
            error!("{}", e);
            println!("Please ensure MongoDB is running and your MONGODB_URI is correct.");
            println!("Skipping CRUD operations due to MongoDB connection failure.");
            return Ok(());
        }
    };

    println!("\n--- Demonstrating CRUD Operations ---");

    println!("\n--- Creating Cats ---");
    create_cat(&store, "Musya", 5, &["sleeps a lot", "loves fish", "tricolor"]).await;
    create_cat(&store, "Busya", 4, &["affectionate", "loves to eat", "tricolor"]).await;
    create_cat(&store, "Abrykoska", 3, &["brave", "likes to be petted", "red with white"]).await;
    create_cat(&store, "Sara", 2, &["plays with toys", "very active", "smart"]).await;

    print_all_cats(&store).await;

    let name = prompt("\nEnter the name of the cat to find: ")?;
    match store.find_by_name(&name).await {
        Ok(Some(cat)) => {
            println!("\n--- Cat Found: {} ---", name);
            println!("{}", cat);
            println!("----------------------------");
        }
        Ok(None) => println!("Cat '{}' not found.", name),
        Err(e) => error!("failed to look up cat '{}': {}", name, e),
    }

    let name = prompt("\nEnter the name of the cat to update age: ")?;
    let age_input = prompt(&format!("Enter the new age for {}: ", name))?;
    match age_input.parse::<i32>() {
        Ok(new_age) => match store.update_age(&name, new_age).await {
            Ok(true) => println!("Cat '{}' age updated to {}.", name, new_age),
            Ok(false) => println!("Cat '{}' not found for age update.", name),
            Err(e) => error!("failed to update age for cat '{}': {}", name, e),
        },
        Err(_) => println!("Invalid age entered. Please enter a number."),
    }

    let name = prompt("\nEnter the name of the cat to add a feature: ")?;
    let feature = prompt(&format!("Enter the new feature for {}: ", name))?;
    match store.add_feature(&name, &feature).await {
        Ok(true) => println!("Feature '{}' added to cat '{}'.", feature, name),
        Ok(false) => println!("Cat '{}' not found for feature update.", name),
        Err(e) => error!("failed to add feature to cat '{}': {}", name, e),
    }

    print_all_cats(&store).await;

    let name = prompt("\nEnter the name of the cat to delete: ")?;
    match store.delete_by_name(&name).await {
        Ok(true) => println!("Cat '{}' deleted successfully.", name),
        Ok(false) => println!("Cat '{}' not found for deletion.", name),
        Err(e) => error!("failed to delete cat '{}': {}", name, e),
    }

    print_all_cats(&store).await;

    delete_all_cats(&store, assume_yes).await?;

    print_all_cats(&store).await;

    Ok(())
}

async fn create_cat(store: &CatStore, name: &str, age: i32, features: &[&str]) {
    let features = features.iter().map(|f| f.to_string()).collect();
    match store.create(name, age, features).await {
        Ok(id) => println!("Cat '{}' added with ID: {}", name, id.to_hex()),
        Err(e) => error!("failed to create cat '{}': {}", name, e),
    }
}

async fn print_all_cats(store: &CatStore) {
    println!("\n--- All Cats in Collection ---");
    match store.all().await {
        Ok(cats) if cats.is_empty() => println!("No cats found in the collection."),
        Ok(cats) => {
            for cat in cats {
                println!("{}", cat);
            }
        }
        Err(e) => error!("failed to read all cats: {}", e),
    }
    println!("----------------------------");
}

/// Confirmation happens here, before the operation runs, so the store
/// itself stays prompt-free. Declining reports zero deletions.
async fn delete_all_cats(store: &CatStore, assume_yes: bool) -> Result<()> {
    let confirmed = assume_yes
        || is_affirmative(&prompt(
            "Are you sure you want to delete ALL cats? (yes/no): ",
        )?);

    if !confirmed {
        println!("Deletion cancelled.");
    }

    match store.delete_all_confirmed(confirmed).await {
        Ok(count) => println!("Deleted {} cats from the collection.", count),
        Err(e) => error!("failed to delete all cats: {}", e),
    }

    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
