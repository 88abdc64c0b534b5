use anyhow::{Context, Result};
use bb_maps::photo::{LARGE_WIDTH, SMALL_WIDTH};
use breakfastbot::{
    config::Settings,
    format::{self, PhotoUrls},
    logging,
};
use clap::Parser;
use serde_json::json;

/// Find an open diner near a free-form address.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[arg(short = 'a', long, help = "Address to search near.")]
    address: String,

    #[command(flatten)]
    settings: Settings,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();
    let http = args.settings.http_client()?;
    let client = args.settings.maps_client(http)?;

    let location = client.geocode(&args.address).await?;
    let place = client.find_open_diner(location).await?;
    let photo = place.primary_photo().context("the chosen diner has no photo")?;
    let photos = PhotoUrls {
        small: client.photo_url(SMALL_WIDTH, photo)?,
        large: client.photo_url(LARGE_WIDTH, photo)?,
    };
    let presentation = format::present(&place, &photos);

    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "location": location,
            "place": place,
            "speech": presentation.speech,
            "card": presentation.card,
        }))?
    );
    Ok(())
}
