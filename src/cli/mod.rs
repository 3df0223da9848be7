// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the fieldmatch command-line interface.
//!
//! Two subcommands, both reading a plain text file with one document per
//! line: `query` answers a single query, `repl` answers one query per stdin
//! line against an index built once.

pub mod display;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "fieldmatch",
    about = "Fuzzy search over the lines of a text file",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Index a file and run one query against it
    Query {
        /// Text file, one document per non-empty line
        file: String,

        /// Query words
        #[arg(required = true)]
        query: Vec<String>,

        #[command(flatten)]
        options: MatchOptions,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Index a file, then read queries from stdin, one per line
    Repl {
        /// Text file, one document per non-empty line
        file: String,

        #[command(flatten)]
        options: MatchOptions,
    },
}

/// Knobs shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct MatchOptions {
    /// Maximum number of results to print
    #[arg(short, long, default_value = "10")]
    pub limit: usize,

    /// Field name the lines are indexed under
    #[arg(short, long, default_value = "text")]
    pub field: String,

    /// Extra letter error table to load
    #[arg(short, long, value_enum)]
    pub errors: Option<ErrorPreset>,

    /// Let query words match the start or middle of longer words cheaply
    #[arg(long)]
    pub substring: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPreset {
    /// Neighbouring keyboard keys
    Keyboard,
    /// Phone keypad digits for letters
    Numberpad,
    /// Latin accented letters
    Accents,
    /// Latin accents plus keyboard neighbours
    Standard,
}
