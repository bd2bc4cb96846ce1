use clap::Parser;
use dotenvy::dotenv;
use nusmods_observability::init_logging;
use nusmods_sync::NusModsClient;
use nusmods_sync::cli::{self, Cli};

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_logging();

    let args = Cli::parse();

    if let Err(e) = run(args).await {
        eprintln!("❌ Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(args: Cli) -> anyhow::Result<()> {
    // The command line wins over the environment for the academic year
    let academic_year = args.academic_year;
    let client = NusModsClient::from_lookup(|name: &str| match name {
        "NUSMODS_ACADEMIC_YEAR" => Some(academic_year.clone()),
        _ => std::env::var(name).ok(),
    })
    .await?;

    cli::run(&client, args.command).await
}
