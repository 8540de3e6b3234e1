use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Style file (defaults to <config dir>/statsview/style.toml)
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// Comma separated values; 2000 fills the ring
    #[clap(short, long, default_value = "500,500,500,500")]
    pub data: String,

    /// Milliseconds to wait before pushing the data
    #[clap(long, default_value = "3000")]
    pub delay: u64,

    /// Seed for generated fallback colors
    #[clap(long)]
    pub seed: Option<u64>,

    /// Print the finished frame's draw calls instead of opening a window
    #[clap(long)]
    pub dump: bool,

    /// Widget size in pixels for --dump
    #[clap(long, default_value = "400")]
    pub size: f32,
}

pub fn get_args() -> Args {
    Args::parse()
}
