//! Pure functions turning a place into speech, a display template and a card.

use bb_maps::Place;

use crate::response::{
    BackButton, CardImage, Image, StandardCard, Template, TemplateKind, TextContent,
};

/// Photo URLs for a place at the two widths a response carries.
#[derive(Clone, Debug, PartialEq)]
pub struct PhotoUrls {
    pub small: String,
    pub large: String,
}

/// Everything the diner response needs, derived from one place.
#[derive(Clone, Debug, PartialEq)]
pub struct DinerPresentation {
    pub speech: String,
    pub template: Template,
    pub card: StandardCard,
}

/// Escape the five XML special characters so `text` can sit inside SSML.
/// Single pass, so an existing `&amp;` becomes `&amp;amp;` rather than being skipped.
pub fn escape_ssml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn search_line(location_code: &str) -> String {
    format!("Search {location_code} in Google Maps, to get directions.")
}

/// Rich text shown on display surfaces. The location code is escaped since the
/// text is markup.
pub fn display_description(location_code: &str, rating: Option<f64>, price: Option<u8>) -> String {
    let mut description = format!("{} <br/>", search_line(&escape_ssml(location_code)));
    if let Some(rating) = rating {
        description.push_str(&format!("Rating: {rating}/5 <br/>"));
    }
    if let Some(price) = price {
        description.push_str(&format!("Price: {price}/5"));
    }
    description
}

/// Plain text for the standard card, one fact per line.
pub fn standard_description(location_code: &str, rating: Option<f64>, price: Option<u8>) -> String {
    let mut lines = vec![search_line(location_code)];
    if let Some(rating) = rating {
        lines.push(format!("Rating: {rating}/5"));
    }
    if let Some(price) = price {
        lines.push(format!("Price: {price}/5"));
    }
    lines.join("\n")
}

pub fn diner_speech(name: &str) -> String {
    format!(
        "How does {} sound? If you want another recommendation just say, 'show me somewhere different'. Enjoy breakfast!",
        escape_ssml(name)
    )
}

pub fn present(place: &Place, photos: &PhotoUrls) -> DinerPresentation {
    DinerPresentation {
        speech: diner_speech(&place.name),
        template: Template {
            kind: TemplateKind::BodyTemplate2,
            back_button: BackButton::Visible,
            title: place.name.clone(),
            image: Some(Image::from_url(photos.large.clone())),
            text_content: TextContent::rich(display_description(
                &place.location_code,
                place.rating,
                place.price_level,
            )),
        },
        card: StandardCard {
            title: place.name.clone(),
            text: standard_description(&place.location_code, place.rating, place.price_level),
            image: Some(CardImage {
                small_image_url: photos.small.clone(),
                large_image_url: photos.large.clone(),
            }),
        },
    }
}
