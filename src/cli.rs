use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "yt-transcripts",
    about = "YouTube transcript aggregation service",
    long_about = "An HTTP service that resolves batches of YouTube links into aggregated transcripts, merging small timestamped caption chunks into minimum-duration segments.",
    after_help = "EXAMPLES:\n    # Start the transcript server\n    yt-transcripts serve\n\n    # Serve with coarser segments and a language fallback chain\n    yt-transcripts serve --min-duration 120 --lang en --lang de\n\n    # Fetch aggregated transcripts from a running server\n    yt-transcripts fetch https://www.youtube.com/watch?v=dQw4w9WgXcQ\n\n    # Use a different server in client mode\n    yt-transcripts fetch https://youtu.be/dQw4w9WgXcQ --server-url http://my-server:8080"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(name = "serve")]
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(long, default_value = "8080")]
        port: u16,

        /// Minimum duration in seconds an aggregated segment must exceed
        #[arg(long, default_value = "90", value_parser = validate_min_duration)]
        min_duration: f64,

        /// Preferred caption languages, in order (repeatable)
        #[arg(long = "lang", default_value = "en")]
        languages: Vec<String>,

        /// HTTP(S) proxy for requests toward the transcript source
        #[arg(long)]
        proxy: Option<String>,
    },
    #[command(name = "fetch")]
    Fetch {
        /// YouTube links to resolve
        #[arg(required = true)]
        ytlinks: Vec<String>,

        #[arg(long, default_value = "http://localhost:8080")]
        server_url: String,
    },
}

pub fn validate_min_duration(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(v) if v > 0.0 => Ok(v),
        Ok(_) => Err("Minimum duration must be greater than zero".to_string()),
        Err(_) => Err("Invalid minimum duration value".to_string()),
    }
}
