use clap::{Parser, Subcommand};

use edge_relay::client::RelayClient;

#[derive(Parser)]
#[command(name = "relay-cli")]
#[command(about = "Fetch feeds through an edge relay", long_about = None)]
struct Cli {
    /// Relay base URL.
    #[arg(short, long, default_value = "http://localhost:8080")]
    relay: String,

    /// Relay path on the server.
    #[arg(short, long, default_value = "/read/")]
    path: String,

    /// Query parameter carrying the feed URL.
    #[arg(short = 'q', long, default_value = "target")]
    param: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the relay URL for a feed
    Url { feed: String },
    /// Fetch a feed through the relay and print the response
    Fetch {
        feed: String,
        /// Print headers only
        #[arg(long)]
        head: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = RelayClient::new(&cli.relay)
        .with_relay_path(&cli.path)
        .with_target_param(&cli.param);

    match cli.command {
        Commands::Url { feed } => {
            println!("{}", client.url_for(&feed)?);
        }
        Commands::Fetch { feed, head } => {
            let res = client.fetch(&feed).await?;
            println!("{:?} {}", res.version(), res.status());
            for (name, value) in res.headers() {
                println!("{}: {}", name, value.to_str().unwrap_or("<binary>"));
            }
            if !head {
                println!();
                println!("{}", res.text().await?);
            }
        }
    }

    Ok(())
}
