//! FileKV CLI
//!
//! Interactive menu for managing user records in a FileKV store.

use std::io::{self, BufRead, Write};
use std::process;

use clap::Parser;
use filekv::{Config, Logger, RecordStore, SyncStrategy, TracingLogger};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, EnvFilter};

/// FileKV CLI
#[derive(Parser, Debug)]
#[command(name = "filekv-cli")]
#[command(about = "Interactive CLI for the FileKV record store")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./db")]
    data_dir: String,

    /// Collection the menu operates on
    #[arg(short, long, default_value = "users")]
    collection: String,

    /// fsync every record write
    #[arg(long)]
    sync: bool,
}

/// Record schema managed by the menu
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct User {
    name: String,
    age: u32,
    company: String,
    address: String,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    let sync_strategy = if args.sync {
        SyncStrategy::EveryWrite
    } else {
        SyncStrategy::Never
    };
    let config = Config::builder()
        .data_dir(&args.data_dir)
        .sync_strategy(sync_strategy)
        .build();

    let store = match RecordStore::open(config) {
        Ok(store) => store,
        Err(e) => {
            TracingLogger.fatal(format_args!("Error initializing database: {}", e));
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!();
        println!("Choose an operation:");
        println!("1. Add a new user");
        println!("2. Read a user by name");
        println!("3. Read all users");
        println!("4. Delete a user by name");
        println!("5. Exit");

        let Some(choice) = prompt(&mut input, "Enter your choice: ") else {
            break;
        };

        match choice.as_str() {
            "1" => add_user(&store, &args.collection, &mut input),
            "2" => read_user(&store, &args.collection, &mut input),
            "3" => read_all_users(&store, &args.collection),
            "4" => delete_user(&store, &args.collection, &mut input),
            "5" => {
                println!("Exiting program.");
                return;
            }
            _ => println!("Invalid choice, please try again."),
        }
    }
}

/// Print a prompt and read one trimmed line; `None` on EOF or read error
fn prompt(input: &mut impl BufRead, label: &str) -> Option<String> {
    print!("{}", label);
    let _ = io::stdout().flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn add_user(store: &RecordStore, collection: &str, input: &mut impl BufRead) {
    let (Some(name), Some(age), Some(company), Some(address)) = (
        prompt(input, "Name: "),
        prompt(input, "Age: "),
        prompt(input, "Company: "),
        prompt(input, "Address: "),
    ) else {
        return;
    };

    let age = match age.parse::<u32>() {
        Ok(age) => age,
        Err(e) => {
            println!("Error writing user: invalid age '{}': {}", age, e);
            return;
        }
    };

    let user = User {
        name: name.clone(),
        age,
        company,
        address,
    };
    match store.write(collection, &name, &user) {
        Ok(()) => println!("User {} added successfully.", name),
        Err(e) => println!("Error writing user: {}", e),
    }
}

fn read_user(store: &RecordStore, collection: &str, input: &mut impl BufRead) {
    let Some(name) = prompt(input, "Enter user name to read: ") else {
        return;
    };

    match store.read::<User>(collection, &name) {
        Ok(user) => println!("Retrieved user {}: {:?}", name, user),
        Err(e) => println!("Error reading user {}: {}", name, e),
    }
}

fn read_all_users(store: &RecordStore, collection: &str) {
    match store.read_all_entries::<User>(collection) {
        Ok(users) => {
            println!("All users retrieved:");
            for (key, user) in users {
                println!("{}: {:?}", key, user);
            }
        }
        Err(e) => println!("Error reading all users: {}", e),
    }
}

fn delete_user(store: &RecordStore, collection: &str, input: &mut impl BufRead) {
    let Some(name) = prompt(input, "Enter user name to delete: ") else {
        return;
    };

    match store.delete(collection, &name) {
        Ok(()) => println!("User {} deleted successfully.", name),
        Err(e) if e.is_not_found() => println!("Error deleting user {}: no such user", name),
        Err(e) => println!("Error deleting user {}: {}", name, e),
    }
}
