use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// List the models available to the configured API key
    Models {
        /// Print the raw records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Send a conversation to the chat-completions endpoint
    Prompt {
        /// Turns in order, each `role:content` or plain content for a user turn
        #[arg(required = true)]
        turns: Vec<String>,

        #[arg(long)]
        json: bool,
    },

    /// Ask about an image, by URL or by uploading a local file first
    Image {
        #[arg(short, long)]
        text: String,

        /// Publicly reachable image URL
        #[arg(short, long, conflicts_with = "file", required_unless_present = "file")]
        url: Option<String>,

        /// Local image to upload to the image host before prompting
        #[arg(short, long)]
        file: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Upload a local image to the image host and print its URL
    Upload { path: String },

    /// Serve the REST API
    Serve {
        #[arg(long, default_value = "8080")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,
    },
}
