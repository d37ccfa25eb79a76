//! gen-legal-html
//!
//! Converts the legal markdown documents into styled static HTML pages for
//! hosting. Takes no arguments; source and destination paths are fixed
//! relative to the app checkout.

use clap::Parser;

use brightside_tools::brand::Palette;
use brightside_tools::docs::convert_document;
use brightside_tools::project;

#[derive(Parser)]
#[command(name = "gen-legal-html")]
#[command(about = "Convert the BrightSide legal documents to static HTML")]
struct Cli {}

/// Fixed document pairs: markdown source, HTML destination, page title
const DOCUMENTS: &[(&str, &str, &str)] = &[
    ("privacy_policy.md", "privacy.html", "Privacy Policy"),
    ("terms_of_service.md", "terms.html", "Terms of Service"),
];

fn main() {
    let _cli = Cli::parse();

    let source_dir = project::legal_source_dir();
    let out_dir = project::legal_web_dir();
    let palette = Palette::default();

    println!("Converting legal documents to HTML...");

    for (source, dest, title) in DOCUMENTS {
        println!("Converting {} -> {}...", source, dest);
        let result = convert_document(
            &source_dir.join(source),
            &out_dir.join(dest),
            title,
            &palette,
        );
        if let Err(e) = result {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        println!("✓ Generated {}", dest);
    }

    println!("HTML generation complete.");
    println!("Output directory: {}", out_dir.display());
}
