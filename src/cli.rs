use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the config file
    #[clap(long, default_value = "sitefind.yaml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the site index and print it
    Index {
        /// Print only the build report
        #[clap(short, long, default_value = "false")]
        report: bool,
    },

    /// Build the index and search it
    Search {
        /// Search text
        query: String,

        /// Page the search is issued from; decides locate vs navigate
        #[clap(short, long, default_value = "index.html")]
        page: String,

        /// Print the count
        #[clap(short = 'c', long, default_value = "false")]
        count: bool,
    },

    /// Find the first occurrence of a text in a page's content region
    Locate {
        /// Search text
        query: Option<String>,

        /// Relative page path to fetch
        #[clap(short, long)]
        page: Option<String>,

        /// Local html file to read instead of fetching
        #[clap(short, long)]
        file: Option<String>,

        /// Take the search text from an href's highlight parameter
        #[clap(long)]
        from_href: Option<String>,
    },
}
