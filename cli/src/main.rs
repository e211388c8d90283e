mod cli;
mod error;
mod release;
mod show;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use release::ReleaseArgs;
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Release {
            tag,
            git_ref,
            title,
            changelog,
            repo,
            token,
            api_url,
            verbose,
        } => release::execute(ReleaseArgs {
            tag,
            git_ref,
            title,
            changelog_path: changelog,
            repo,
            token,
            api_url,
            verbose,
        }),
        Commands::Show { tag, changelog } => show::execute(tag, changelog),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
