use anyhow::Result;
use clap::Parser;
use std::path::Path;

mod icon_gen;

#[derive(Debug, Parser)]
#[clap(
    name = "placeholder-icons",
    version,
    about = "Write placeholder icon16.png, icon48.png and icon128.png into the current directory"
)]
struct Args {}

fn main() -> Result<()> {
    env_logger::init();
    let _args = Args::parse();

    let stdout = std::io::stdout();
    icon_gen::generate_icons(Path::new("."), stdout.lock())
}
