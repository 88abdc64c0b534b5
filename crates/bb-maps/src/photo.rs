use reqwest::Url;

use crate::{constants::DEFAULT_PHOTO_URL, error::GetError, ApiKey};

/// Width of the small card image.
pub const SMALL_WIDTH: u32 = 400;
/// Width of the large card image and the display image.
pub const LARGE_WIDTH: u32 = 800;

/// Build a photo URL for `reference` at `width`. The URL embeds the API key
/// and is handed to the device as-is.
pub fn url(
    width: u32,
    reference: &str,
    key: &ApiKey,
    endpoint: Option<&str>,
) -> Result<String, GetError> {
    let url = Url::parse_with_params(
        endpoint.unwrap_or(DEFAULT_PHOTO_URL),
        &[
            ("maxwidth", width.to_string().as_str()),
            ("photoreference", reference),
            ("key", key.get()),
        ],
    )?;
    Ok(url.into())
}
