use clap::Parser;
use cmdgen_lib::{
    Registrar,
    registrar::DEFAULT_API_BASE,
    secrets::DEFAULT_SECRETS_PATH,
};
use color_eyre::eyre::{Result, WrapErr};
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::util::SubscriberInitExt;

/// Registers a slash command with discord and saves what discord sent back.
///
/// The secrets file defaults to `../src/ReplicatorBot/secrets.json`, set
/// `CMDGEN_SECRETS` to use another one.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Json file holding the command definition, sent as is
    pub command_file: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    // A .env file is optional here, plain env vars work just as well
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .compact()
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .finish()
        .init();

    let Args { command_file } = Args::parse();

    let secrets_path =
        std::env::var("CMDGEN_SECRETS").unwrap_or_else(|_| DEFAULT_SECRETS_PATH.to_owned());
    let api_base = std::env::var("CMDGEN_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_owned());

    tracing::debug!("Using secrets at {} and api {}", secrets_path, api_base);

    let registrar = Registrar::new(api_base);

    let record = cmdgen_lib::run(
        &registrar,
        &secrets_path,
        &command_file,
        &mut std::io::stdout().lock(),
    )
    .await
    .wrap_err_with(|| format!("Failed to register {}", command_file.display()))?;

    println!("{}", record.display());

    Ok(())
}
