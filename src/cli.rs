// src/cli.rs
use clap::{Parser, Subcommand};
use std::io::BufRead;
use tracing::debug;

use crate::config::{FillOptions, ListOptions, DEFAULT_MAX_CELLS};
use crate::error::Result;
use crate::utils::paths::{expand_home, parent_of};
use crate::utils::Output;
use crate::{filesystem, ordering, token};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sort paths naturally (reads one path per line from stdin when none are given)
    Sort {
        paths: Vec<String>,
    },

    /// List a directory in natural order
    List {
        directory: String,
        /// Glob pattern; the default lists everything except .txt files
        #[clap(short, long)]
        pattern: Option<String>,
        /// Keep directories in the listing
        #[clap(long)]
        include_dirs: bool,
    },

    /// List files that differ from REFERENCE only in their numbers
    Siblings {
        reference: String,
        /// Directory to search, defaults to the reference's directory
        directory: Option<String>,
    },

    /// List a directory, marking missing numbers in each numbered sequence
    Fill {
        directory: String,
        #[clap(short, long)]
        pattern: Option<String>,
        /// First index of every numbered axis (0 or 1)
        #[clap(short, long, default_value_t = 0)]
        start: u64,
        /// Refuse grids with more cells than this
        #[clap(long, default_value_t = DEFAULT_MAX_CELLS)]
        max_cells: usize,
    },

    /// Check whether two paths differ only in their numbers
    Increments {
        a: String,
        b: String,
    },

    /// Show how a path is split into tokens
    Tokens {
        path: String,
    },
}

/// Natural file name sorting
#[derive(Parser, Debug)]
#[command(name = "filename-sort", version, about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
    /// Print results as JSON
    #[clap(long, global = true)]
    pub json: bool,
    /// Disable coloured output
    #[clap(long, global = true)]
    pub no_color: bool,
    /// Log debug output to stderr
    #[clap(short, long, global = true)]
    pub verbose: bool,
}

fn list_options(pattern: &Option<String>) -> ListOptions {
    match pattern {
        Some(p) => ListOptions::with_pattern(p.as_str()),
        None => ListOptions::default(),
    }
}

pub fn execute(cmd: &Commands, stdin: impl BufRead) -> Result<Output> {
    debug!(?cmd, "executing");
    match cmd {
        Commands::Sort { paths } => {
            let paths = if paths.is_empty() {
                stdin
                    .lines()
                    .filter(|l| !matches!(l, Ok(line) if line.is_empty()))
                    .collect::<std::io::Result<Vec<String>>>()?
            } else {
                paths.clone()
            };
            Ok(Output::Paths(ordering::sort(paths)))
        }
        Commands::List { directory, pattern, include_dirs } => {
            let mut options = list_options(pattern);
            if *include_dirs {
                options = options.include_dirs();
            }
            Ok(Output::Paths(filesystem::list_sorted(expand_home(directory), &options)?))
        }
        Commands::Siblings { reference, directory } => {
            let directory = match directory {
                Some(d) => expand_home(d),
                None => parent_of(reference),
            };
            Ok(Output::Paths(filesystem::filter_to_numeric_siblings(reference, directory)?))
        }
        Commands::Fill { directory, pattern, start, max_cells } => {
            let fill = FillOptions { start_val: *start, max_cells: *max_cells };
            let filled = filesystem::list_sorted_filling_missing(expand_home(directory), &list_options(pattern), &fill)?;
            Ok(Output::Filled(filled))
        }
        Commands::Increments { a, b } => Ok(Output::Flag(ordering::are_numeric_increments(a, b))),
        Commands::Tokens { path } => Ok(Output::Tokens(token::tokenize(path))),
    }
}
