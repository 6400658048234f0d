use clap::Parser;
use syazai::cli::{
    handle_categories, handle_check, handle_list, handle_resolve, handle_search, handle_show, Cli,
    Commands,
};
use syazai::SyazaiConfig;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("syazai=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result = SyazaiConfig::discover(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Categories { json } => handle_categories(&config, json),
        Commands::List { category, json } => handle_list(&config, category, json),
        Commands::Show { slug, json } => handle_show(&config, slug, json),
        Commands::Resolve {
            slug,
            recipient,
            method,
            excuse,
            subject,
            json,
        } => handle_resolve(&config, slug, recipient, method, excuse, subject, json),
        Commands::Search { query, json } => handle_search(&config, query, json),
        Commands::Check { json } => handle_check(&config, json),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
