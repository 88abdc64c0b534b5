use serde::Deserialize;

/// Raw response from the geocoding API.
#[derive(Deserialize)]
pub struct Response {
    pub status: Option<String>,
    pub error_message: Option<String>,
    pub results: Vec<Candidate>,
}

/// Raw geocoding candidate.
#[derive(Deserialize)]
pub struct Candidate {
    pub geometry: Geometry,
}

#[derive(Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}
