use std::path::PathBuf;

use anyhow::{Context, Result};
use breakfastbot::{config::Settings, logging, RequestEnvelope, Skill};
use clap::Parser;
use tokio::io::AsyncReadExt;

/// Handle one skill request envelope and print the response envelope.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[arg(
        short = 'i',
        long,
        help = "File holding the request envelope. Reads stdin when omitted."
    )]
    input: Option<PathBuf>,

    #[arg(short = 'p', long, help = "Pretty-print the response.")]
    pretty: bool,

    #[command(flatten)]
    settings: Settings,
}

async fn read_envelope(input: Option<&PathBuf>) -> Result<RequestEnvelope> {
    match input {
        Some(path) => RequestEnvelope::load(path)
            .await
            .with_context(|| format!("loading {}", path.display())),
        None => {
            let mut body = String::new();
            tokio::io::stdin().read_to_string(&mut body).await?;
            RequestEnvelope::from_json(&body).context("parsing request envelope from stdin")
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();
    let skill = Skill::from_settings(&args.settings)?;
    let envelope = read_envelope(args.input.as_ref()).await?;
    let response = skill.dispatch(&envelope).await?;
    let output = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", output);
    Ok(())
}
