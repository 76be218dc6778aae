//! # CLI Argument Definitions
//!
//! This module defines the command-line interface (CLI) structure using the `clap` crate.
//! It specifies the available subcommands, arguments, and flags for the application.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "streamgrate")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Drop-and-redeploy migration tool for deployed data streams")]
pub struct Cli {
    /// The main subcommand to execute.
    #[command(subcommand)]
    pub command: AppCommands,
}

/// Enumeration of available application subcommands.
#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Migrate primitive streams from a source CSV file
    Primitive {
        /// Hex-encoded signing key of the stream owner
        #[arg(short = 'k', long, env = "STREAMGRATE_PRIVATE_KEY", hide_env_values = true)]
        private_key: String,

        /// RPC endpoint of the stream network node
        #[arg(short = 'r', long, env = "STREAMGRATE_RPC")]
        rpc: String,

        /// CSV file listing the primitive stream sources
        #[arg(short = 'f', long)]
        primitive_file: PathBuf,

        /// JSON schema template applied to every redeployed stream
        #[arg(short = 'c', long)]
        schema: PathBuf,

        /// Comma-separated subset of stream ids to migrate (default: all)
        #[arg(short = 's', long, value_delimiter = ',')]
        schemas: Vec<String>,
    },
    /// Migrate composed streams from a taxonomy CSV file
    Composed {
        /// Hex-encoded signing key of the stream owner
        #[arg(short = 'k', long, env = "STREAMGRATE_PRIVATE_KEY", hide_env_values = true)]
        private_key: String,

        /// RPC endpoint of the stream network node
        #[arg(short = 'r', long, env = "STREAMGRATE_RPC")]
        rpc: String,

        /// CSV file holding the parent/child taxonomy rows
        #[arg(short = 'f', long)]
        taxonomy_file: PathBuf,

        /// JSON schema template applied to every redeployed stream
        #[arg(short = 'c', long)]
        schema: PathBuf,

        /// Comma-separated subset of stream ids to migrate (default: all)
        #[arg(short = 's', long, value_delimiter = ',')]
        schemas: Vec<String>,
    },
}
