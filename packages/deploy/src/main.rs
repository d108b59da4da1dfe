//! crowdfund-deploy - run the FundMe deploy scripts.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use crowdfund_deploy::{
    default_scripts, run_tagged, ApiKey, DeployConfig, DeployContext, DeployError,
    SandboxRegistry,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "crowdfund-deploy")]
#[command(about = "Deploy the FundMe contracts")]
#[command(version)]
struct Cli {
    /// Network configuration (defaults to the embedded networks.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Network to deploy to (defaults to `default_network`)
    #[arg(short, long)]
    network: Option<String>,

    /// Run the scripts carrying any of these tags
    #[arg(short, long, value_delimiter = ',', default_value = "all")]
    tags: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => DeployConfig::load(path)?,
        None => DeployConfig::embedded()?,
    };
    let network_name = cli
        .network
        .unwrap_or_else(|| config.default_network.clone());
    let network = config
        .network(&network_name)
        .with_context(|| format!("cannot deploy to {network_name}"))?;

    if !network.is_development() {
        return Err(DeployError::UnsupportedNetwork(network.name).into());
    }

    let mut sandbox = SandboxRegistry::new(&config.sandbox);
    let deployer = sandbox.strkey(sandbox.deployer());
    info!(network = %network.name, %deployer, "starting deployment");

    let tags: Vec<&str> = cli.tags.iter().map(String::as_str).collect();
    let records = {
        let mut ctx = DeployContext::new(network, &config, &mut sandbox, deployer)
            .with_api_key(ApiKey::from_env());
        run_tagged(&default_scripts(), &tags, &mut ctx)?
    };

    if records.is_empty() {
        println!("No script matched tags {}", tags.join(","));
    }
    for record in &records {
        println!("{record}");
        for log in &record.logs {
            println!("    {log}");
        }
    }

    Ok(())
}
