//! Fixed speech used across handlers.

pub const NOTIFY_MISSING_PERMISSIONS: &str =
    "Please enable Location permissions in the Amazon Alexa app.";
pub const NO_ADDRESS: &str = "It looks like you don't have an address set. You can set your address from the companion app.";
pub const ERROR: &str = "Uh Oh. Looks like something went wrong.";
pub const LOCATION_FAILURE: &str =
    "There was an error with the Device Address API. Please try again.";
pub const UNHANDLED: &str = "This skill doesn't support that. Please ask something else.";
pub const NO_DINER: &str =
    "I couldn't find an open diner near you right now. Please try again later.";

pub const WELCOME: &str =
    "Welcome to Find Me Breakfast, Let's find you breakfast! Just ask, 'what's open?'";
pub const WELCOME_TITLE: &str = "Find Me Breakfast";
pub const WELCOME_TEXT: &str = "Welcome to Find Me Breakfast.";
pub const WELCOME_HINT: &str = "whats open?";
pub const HELP: &str = "You can say hello to me!";
pub const GOODBYE: &str = "Enjoy Breakfast!";

/// Scope needed to read the device's full address.
pub const ADDRESS_PERMISSION: &str = "read::alexa:device:all:address";
