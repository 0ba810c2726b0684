use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "shopdir", bin_name = "shopdir", version)]
#[command(about = "Browse a shop directory by category, subcategory and search", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Where to load shops from: a JSON file path or an http(s) URL
    #[arg(long, global = true, value_name = "PATH|URL", help_heading = "Options")]
    pub source: Option<String>,

    /// Fail instead of using the bundled shop list when loading fails
    #[arg(long, global = true, help_heading = "Options")]
    pub no_fallback: bool,

    /// Disable coloured output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List shops, optionally narrowed by facets or search
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Category to show (or "all")
        #[arg(short, long)]
        category: Option<String>,

        /// Subcategory to show within the category (or "all")
        #[arg(short, long)]
        subcategory: Option<String>,

        /// Free-text search; overrides the category and subcategory
        #[arg(short = 'q', long)]
        search: Option<String>,

        /// Print HTML markup instead of terminal output
        #[arg(long)]
        html: bool,
    },

    /// Search shops by name, description, category, subcategory or address
    #[command(alias = "s", display_order = 2)]
    Search {
        /// Search words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },

    /// List categories with their shop counts
    #[command(display_order = 3)]
    Categories,

    /// List subcategories with their shop counts
    #[command(display_order = 4)]
    Subcategories {
        /// Only subcategories within this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show a single shop
    #[command(alias = "v", display_order = 5)]
    View {
        /// Id of the shop
        id: String,
    },

    /// Interactive session: read filter events from stdin, one per line
    #[command(display_order = 6)]
    Browse,

    /// Get or set configuration
    #[command(display_order = 10)]
    Config {
        /// Configuration key (source, fallback, clear-search-on-category)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
