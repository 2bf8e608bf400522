use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "sentiview-web")]
#[command(author, version, about = "Sentiview sentiment analysis front end")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    pub config: String,

    /// Bearer token for the hosted inference API
    #[arg(short, long, env = "HF_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Listen address
    #[arg(short = 'l', long, default_value = "0.0.0.0")]
    pub listen: String,

    /// Listen port
    #[arg(short = 'P', long, default_value = "3000")]
    pub port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
