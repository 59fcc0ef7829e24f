use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Show the environment variable help and exit.
    #[arg(long)]
    pub env: bool,
    /// Configuration file to load.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Write the default configuration to the config path and exit.
    #[arg(long)]
    pub create_config: bool,
    /// Write a self-signed key and certificate for the configured server name and exit.
    #[arg(long)]
    pub create_selfsigned: bool
}
