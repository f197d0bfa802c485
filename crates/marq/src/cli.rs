// Author: Dustin Pilgrim
// License: MIT

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use marq_core::{ModelFamily, Orientation, SizeTier};

#[derive(Debug, Parser)]
#[command(name = "marq", version, about = "Marq — crop rectangles, quickly.")]
pub struct Args {
    /// Log to stderr (in addition to the log file)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Override log file path (default: $XDG_STATE_HOME/marq/marq.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Crop an image, with the same clamping the visual editor applies
    Crop {
        /// Input image
        image: PathBuf,

        #[arg(short = 'x', long, default_value_t = 0)]
        x: i32,

        #[arg(short = 'y', long, default_value_t = 0)]
        y: i32,

        #[arg(short = 'w', long, default_value_t = 512)]
        width: i32,

        #[arg(short = 'H', long, default_value_t = 512)]
        height: i32,

        /// Where to write the cropped image
        #[arg(short = 'o', long)]
        output: PathBuf,

        /// Skip the constrain-to-image pass (the crop still cannot reach
        /// outside the decoded pixels)
        #[arg(long)]
        no_constrain: bool,
    },

    /// Render one frame of the crop editor to a PNG
    Preview {
        /// Background image; omitted means fallback-canvas mode
        #[arg(short = 'i', long)]
        image: Option<PathBuf>,

        #[arg(short = 'x', long, default_value_t = 0)]
        x: i32,

        #[arg(short = 'y', long, default_value_t = 0)]
        y: i32,

        #[arg(short = 'w', long, default_value_t = 512)]
        width: i32,

        #[arg(short = 'H', long, default_value_t = 512)]
        height: i32,

        /// Snap the rectangle to the full bounds before rendering
        #[arg(long)]
        fit: bool,

        /// Where to write the frame
        #[arg(short = 'o', long)]
        output: PathBuf,
    },

    /// Look up known-good generation sizes for a model family
    Sizes {
        /// Model family (sd15/sdxl/flux/qwen/wan5b/wan14b)
        family: ModelFamily,

        /// Aspect key, e.g. 16:9; omit to list the whole table
        #[arg(short = 'a', long)]
        aspect: Option<String>,

        /// base (1.0x / 480p) or large (1.5x / 720p)
        #[arg(short = 't', long, value_enum, default_value = "base")]
        tier: SizeTier,

        #[arg(long, value_enum, default_value = "horizontal")]
        orientation: Orientation,
    },
}
