use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dk", about = concat!("[>] desk v", env!("CARGO_PKG_VERSION"), " - your portfolio in the terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Discover desk.toml from a different directory
    #[arg(short = 'C', long = "dir", global = true)]
    pub dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List items in a category, or in all categories
    List(ListArgs),
    /// Show one item's details
    Show(ShowArgs),
    /// List the home-screen folders
    Folders,
}

#[derive(Args)]
pub struct ListArgs {
    /// Category name: projects, research, or blog
    pub category: Option<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Item id (e.g. veil-echo)
    pub id: String,
}
