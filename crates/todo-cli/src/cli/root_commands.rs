use clap::Subcommand;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Add a to-do item.
    Add {
        /// Free-form description.
        description: String,
    },
    /// Mark a to-do item completed, or incomplete with --incomplete.
    #[command(after_help = "Example: todo update 64c11bd1da6b431c66c28a88")]
    Update {
        id: String,
        /// Mark the item incomplete instead.
        #[arg(short, long)]
        incomplete: bool,
    },
    /// Delete a to-do item.
    #[command(after_help = "Example: todo delete 64c11bd1da6b431c66c28a88")]
    Delete { id: String },
    /// List completed to-do items, or incomplete ones with --incomplete.
    List {
        /// List incomplete items instead.
        #[arg(short, long)]
        incomplete: bool,
    },
    /// Show a single to-do item.
    Show { id: String },
}
