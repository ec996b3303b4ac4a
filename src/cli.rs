//! Command-line interface for askllm

use clap::{Parser, Subcommand};

/// Forward prompts to a hosted chat-completion API over HTTP
#[derive(Parser)]
#[command(name = "askllm")]
#[command(version)]
#[command(about = "Forward prompts to a hosted chat-completion API over HTTP")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a template configuration file
    Config {
        /// Output file path (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// Generate template configuration content
pub fn generate_config_template() -> &'static str {
    r#"# askllm configuration
#
# Every value below is the built-in default; an empty file behaves the same.

[server]
# IP address to bind to (0.0.0.0 for all interfaces, 127.0.0.1 for localhost only).
# Must be a literal address; hostnames like "localhost" are rejected.
host = "0.0.0.0"

# Port to listen on
port = 3000

[llm]
# Model identifier sent with every request
model = "gpt-4.1-mini"

# OpenAI-compatible API root; requests go to {base_url}/chat/completions
base_url = "https://api.openai.com/v1"

# Environment variable the API key is read from at startup.
# If it is unset the server still starts; requests fail with an
# authentication error from the provider.
api_key_env = "OPENAI_API_KEY"

[observability]
# Log level: "trace", "debug", "info", "warn", "error" (RUST_LOG overrides)
log_level = "info"
"#
}
