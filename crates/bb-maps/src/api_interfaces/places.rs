use serde::Deserialize;

/// Raw response from the nearby search API.
#[derive(Deserialize)]
pub struct Response {
    pub status: Option<String>,
    pub error_message: Option<String>,
    pub results: Vec<PlaceResult>,
}

/// Raw place record. Everything but the name is optional upstream.
#[derive(Deserialize)]
pub struct PlaceResult {
    pub name: String,
    pub rating: Option<f64>,
    pub price_level: Option<u8>,
    pub plus_code: Option<PlusCode>,
    pub vicinity: Option<String>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

#[derive(Deserialize)]
pub struct PlusCode {
    pub global_code: String,
}

#[derive(Deserialize)]
pub struct Photo {
    pub photo_reference: String,
}
