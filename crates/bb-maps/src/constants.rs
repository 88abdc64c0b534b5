/// The default endpoint for the Google geocoding service
pub const DEFAULT_GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// The default endpoint for the Google places nearby search service
pub const DEFAULT_NEARBY_SEARCH_URL: &str =
    "https://maps.googleapis.com/maps/api/place/nearbysearch/json";

/// The default endpoint for Google place photos. Photos are linked, never fetched.
pub const DEFAULT_PHOTO_URL: &str = "https://maps.googleapis.com/maps/api/place/photo";

/// The environment variable the API key is read from when none is configured
pub const API_KEY_ENV: &str = "API_KEY";

/// Upper bound on the number of nearby results considered for a recommendation
pub const MAX_CANDIDATES: usize = 20;

/// Statuses the Google APIs return alongside a usable body
pub const OK_STATUSES: [&str; 2] = ["OK", "ZERO_RESULTS"];
