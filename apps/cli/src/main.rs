#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod handlers;
pub mod models;
pub mod services;

use crate::handlers::{composed, primitive};
use crate::models::args::{AppCommands, Cli};

use anyhow::Result;
use clap::Parser;
use sgrate_logger::Logger;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    Logger::builder().name(env!("CARGO_PKG_NAME")).init()?;

    match cli.command {
        AppCommands::Primitive { private_key, rpc, primitive_file, schema, schemas } => {
            primitive::migrate_primitive(&private_key, &rpc, &primitive_file, &schema, &schemas)
                .await?;
        },
        AppCommands::Composed { private_key, rpc, taxonomy_file, schema, schemas } => {
            composed::migrate_composed(&private_key, &rpc, &taxonomy_file, &schema, &schemas)
                .await?;
        },
    }

    Ok(())
}
