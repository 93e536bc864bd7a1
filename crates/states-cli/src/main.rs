//! `states` — command-line client for the states API.
//!
//! # Usage
//!
//! ```
//! states list --contig false
//! states get ks
//! states field ks population
//! states funfact add ks "Home of the world's largest ball of twine"
//! states funfact edit ks 1 "..."
//! states funfact rm ks 1
//! ```

mod client;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client::{ApiClient, Field};
use serde::Serialize;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "states", about = "Query and edit the US states API")]
struct Args {
  /// Base URL of the states server.
  #[arg(long, env = "STATES_URL", default_value = "http://localhost:3500")]
  url: String,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// List every state, optionally only the lower 48 (`true`) or AK/HI (`false`).
  List {
    #[arg(long)]
    contig: Option<bool>,
  },
  /// Show one state with its fun facts.
  Get { code: String },
  /// Show a single attribute of a state.
  Field {
    code:  String,
    #[arg(value_enum)]
    field: Field,
  },
  /// Fun fact operations.
  #[command(subcommand)]
  Funfact(FunfactCommand),
}

#[derive(Subcommand, Debug)]
enum FunfactCommand {
  /// Print one fun fact at random.
  Random { code: String },
  /// Append one or more fun facts.
  Add {
    code:     String,
    #[arg(required = true)]
    funfacts: Vec<String>,
  },
  /// Replace the fun fact at a 1-based index.
  Edit {
    code:    String,
    index:   usize,
    funfact: String,
  },
  /// Remove the fun fact at a 1-based index.
  Rm { code: String, index: usize },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();
  let client = ApiClient::new(args.url)?;

  match args.command {
    Command::List { contig } => print_json(&client.list_states(contig).await?),
    Command::Get { code } => print_json(&client.get_state(&code).await?),
    Command::Field { code, field } => print_json(&client.get_field(&code, field).await?),
    Command::Funfact(cmd) => match cmd {
      FunfactCommand::Random { code } => {
        println!("{}", client.random_funfact(&code).await?);
        Ok(())
      }
      FunfactCommand::Add { code, funfacts } => {
        print_json(&client.add_funfacts(&code, &funfacts).await?)
      }
      FunfactCommand::Edit { code, index, funfact } => {
        print_json(&client.patch_funfact(&code, index, &funfact).await?)
      }
      FunfactCommand::Rm { code, index } => {
        print_json(&client.delete_funfact(&code, index).await?)
      }
    },
  }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
  let out = serde_json::to_string_pretty(value).context("serialising output")?;
  println!("{out}");
  Ok(())
}
