use clap::{Parser, Subcommand};

/// CLI for the snippet store: five sub-commands, positional arguments only.
#[derive(Parser, Debug)]
#[command(name = "snip", version, about = "Store and retrieve snippets of text")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Store a snippet (overwrites the message if the name already exists)
    Put {
        /// Name of the snippet
        name: String,
        /// Snippet text
        snippet: String,
    },
    /// Retrieve the snippet stored under a name
    Get {
        /// Name of the snippet
        name: String,
    },
    /// List all (keyword, message) pairs in the table
    Catalogue,
    /// List the (keyword, message) pairs whose message contains the search text
    Search {
        /// Text to look for in the message column
        search_text: String,
    },
    /// Delete the snippet stored under a name
    Delete {
        /// Name of the snippet
        name: String,
    },
}
