use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "protospec", version, about = "Protocol-Buffer specification tooling")]
pub struct Cli {
    /// Emit JSON output on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Render a specification document as canonical proto text.
    Generate {
        /// Document path or URL.
        input: String,

        /// Output format: proto|json|yaml
        #[arg(short, long, default_value = "proto")]
        format: String,

        /// Output file (stdout if omitted).
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Run the validation rule set over one or more documents.
    Validate {
        /// Document paths or URLs.
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Comma-separated list of rules to run.
        #[arg(long)]
        rules: Option<String>,
    },

    /// Line-diff the canonical proto text of two documents.
    Compare {
        /// Left (older) document path or URL.
        left: String,

        /// Right (newer) document path or URL.
        right: String,

        /// Output format: diff|json|html
        #[arg(short, long, default_value = "diff")]
        format: String,

        /// Output file (stdout if omitted).
        #[arg(short, long)]
        output: Option<String>,

        /// Disable colored output.
        #[arg(long)]
        no_color: bool,
    },

    /// Detect breaking changes between two document versions.
    Compatibility {
        /// Base document path or URL.
        #[arg(long)]
        base: String,

        /// Target document path or URL.
        #[arg(long)]
        target: String,
    },
}
