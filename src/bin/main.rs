use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sustainable_recs::RunOptions;

#[derive(Parser, Debug)]
#[command(name = "recs-client")]
#[command(about = "Fetch sustainable material recommendations", long_about = None)]
struct Args {
    #[arg(short, long)]
    config: Option<String>,

    /// Backend base URL, overrides the config file
    #[arg(long)]
    base_url: Option<String>,

    #[arg(long, default_value = "")]
    material_type: String,

    #[arg(long, default_value = "")]
    recyclable: String,

    #[arg(long, default_value = "")]
    compostable: String,

    /// Print the results list as HTML
    #[arg(long)]
    html: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sustainable_recs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let opts = RunOptions {
        config_path: args.config,
        base_url: args.base_url,
        material_type: args.material_type,
        recyclable: args.recyclable,
        compostable: args.compostable,
        html: args.html,
    };

    match sustainable_recs::run(&opts).await {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
