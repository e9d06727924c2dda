//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jsembed")]
#[command(about = "Embed per-page JavaScript files in static site builds", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create jsembed.toml and the content js directory
    Init {
        /// Project directory (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Format a js metadata value into script tags
    Tags {
        /// Metadata value, e.g. "app.js(head), chart.js(body)"
        metadata: String,

        /// Template with slots {0} (site url), {1} (file name), {2} (position)
        #[arg(short, long)]
        template: Option<String>,

        /// Fill in the site url instead of printing the %s placeholder
        #[arg(short, long)]
        site_url: Option<String>,
    },

    /// Copy files from a source directory into a destination directory
    Copy {
        /// Source directory
        src: PathBuf,

        /// Destination directory (created if missing)
        dest: PathBuf,

        /// Files relative to SRC (default: every .js file below SRC)
        files: Vec<PathBuf>,
    },

    /// Resolve js metadata of all content and copy scripts to the output
    Build {
        /// Project directory containing jsembed.toml
        #[arg(short, long, default_value = ".")]
        root: PathBuf,
    },
}
