use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

mod assets;
mod site;

#[derive(Parser)]
#[command(name = "pageup")]
#[command(about = "Generate a static HTML site from Markdown content")]
struct Cli {
    /// Directory containing Markdown source pages
    #[arg(short, long, default_value = "content")]
    content: PathBuf,

    /// HTML page template with {{ Title }} and {{ Content }} placeholders
    #[arg(short, long, default_value = "template.html")]
    template: PathBuf,

    /// Output directory for the generated site
    #[arg(short, long, default_value = "public")]
    output: PathBuf,

    /// Directory of static assets copied into the output as-is
    #[arg(short, long, default_value = "static")]
    static_dir: PathBuf,

    /// Base path prepended to root-relative links, e.g. /my-site/
    #[arg(short, long, default_value = "/")]
    basepath: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.static_dir.is_dir() {
        if let Err(e) = assets::copy_static(&cli.static_dir, &cli.output) {
            eprintln!("Error copying {}: {}", cli.static_dir.display(), e);
            return ExitCode::FAILURE;
        }
    }

    if let Err(e) = site::generate_pages(&cli.content, &cli.template, &cli.output, &cli.basepath) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    println!("Site written to {}", cli.output.display());
    ExitCode::SUCCESS
}
