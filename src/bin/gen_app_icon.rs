//! gen-app-icon
//!
//! Draws the BrightSide sun icon at launcher resolution: the opaque app
//! icon and the transparent adaptive-icon foreground. Takes no arguments;
//! output paths are fixed relative to the app checkout.

use clap::Parser;

use brightside_tools::brand::Palette;
use brightside_tools::icon::{generate, IconConfig};
use brightside_tools::project;

#[derive(Parser)]
#[command(name = "gen-app-icon")]
#[command(about = "Generate the BrightSide launcher icons")]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    let icon_dir = project::icon_dir();
    let palette = Palette::default();

    let variants = [
        ("app_icon.png", IconConfig::app_icon()),
        ("app_icon_foreground.png", IconConfig::adaptive_foreground()),
    ];

    for (file, config) in &variants {
        println!("Generating {}...", file);
        if let Err(e) = generate(config, &palette, &icon_dir.join(file)) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        println!("✓ Generated {} ({}x{})", file, config.size, config.size);
    }

    println!("Icon generation complete.");
    println!("Output directory: {}", icon_dir.display());
}
