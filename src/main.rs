use clap::{Parser, Subcommand};

mod commands;

use iconfix::output;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "iconfix")]
#[command(version = VERSION)]
#[command(about = "Maintenance passes that replace outdated SVG icon path data")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace the first-revision collaboration icon in the files known to carry it
    Cleanup,
    /// Replace both collaboration icon revisions in every src/**/*.js file
    Replace,
    /// Replace both collaboration icon revisions in the pages that render them
    Collab,
    /// Add flex-shrink-0 to icon tags and replace outdated collaboration icons
    Align,
    /// List built-in maintenance passes
    List,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Cleanup => output::finish(commands::plan::run("cleanup")),
        Commands::Replace => output::finish(commands::plan::run("replace")),
        Commands::Collab => output::finish(commands::plan::run("collab")),
        Commands::Align => output::finish(commands::plan::run("align")),
        Commands::List => output::finish(commands::list::run()),
    }
}
