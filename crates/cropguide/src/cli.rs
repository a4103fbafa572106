// Author: Dustin Pilgrim
// License: MIT

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use cropguide_core::{ActiveEdge, GridMode, GuideVariant, Style};

#[derive(Debug, Parser)]
#[command(name = "cropguide", version, about = "Crop overlay preview and diagnostics")]
pub struct Args {
    /// Log to stderr (in addition to the log file)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Override log file path (default: $XDG_STATE_HOME/cropguide/cropguide.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Override config path (default: $XDG_CONFIG_HOME/cropguide/cropguide.rune)
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

/// Crop box placement shared by the overlay subcommands.
#[derive(Debug, clap::Args)]
pub struct BoxArgs {
    /// Crop box width
    #[arg(long)]
    pub width: f64,

    /// Crop box height
    #[arg(long)]
    pub height: f64,

    /// Override the configured style
    #[arg(long)]
    pub style: Option<Style>,

    /// Skip handles and hot zones (border only)
    #[arg(long)]
    pub locked: bool,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Paint the overlay into a PNG
    Render {
        #[command(flatten)]
        bx: BoxArgs,

        /// Engaged handle (shows grid and, for edges, the hint line)
        #[arg(long, default_value = "none")]
        edge: ActiveEdge,

        /// Grid density to show while idle (forces the grid visible)
        #[arg(long)]
        grid: Option<GridMode>,

        /// Guide shape variant
        #[arg(long)]
        guide: Option<GuideVariant>,

        /// Hide the decorative guide
        #[arg(long)]
        no_guide: bool,

        /// Empty space around the box, so outside handles stay visible
        #[arg(long, default_value_t = 32.0)]
        margin: f64,

        /// Backdrop colour (#RRGGBB or #AARRGGBB)
        #[arg(long, default_value = "#202020")]
        background: String,

        /// Output PNG path
        #[arg(long, short = 'o')]
        output: PathBuf,
    },

    /// Report which hot zone (if any) a point falls in
    Hit {
        #[command(flatten)]
        bx: BoxArgs,

        /// Point x in overlay-local coordinates
        #[arg(long, allow_hyphen_values = true)]
        x: f64,

        /// Point y in overlay-local coordinates
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },

    /// Flatten a photo's background using a precomputed subject mask
    Matte {
        /// Input photo
        #[arg(long)]
        image: PathBuf,

        /// Greyscale subject mask (white = keep)
        #[arg(long)]
        mask: PathBuf,

        /// Background fill (#RRGGBB or #AARRGGBB)
        #[arg(long, default_value = "#FFFFFF")]
        fill: String,

        /// Output image path
        #[arg(long, short = 'o')]
        output: PathBuf,
    },
}
