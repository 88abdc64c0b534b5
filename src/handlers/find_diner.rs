use std::time::Duration;

use anyhow::{anyhow, Context};
use bb_maps::{
    error::GetError,
    photo::{LARGE_WIDTH, SMALL_WIDTH},
    Place,
};
use tokio::time::timeout;
use tracing::{error, info, warn};

use crate::{
    address::{AddressError, AddressRequest, AddressService},
    envelope::RequestEnvelope,
    format::{self, PhotoUrls},
    lookup::DinerFinder,
    messages,
    response::{ResponseBuilder, ResponseEnvelope},
};

use super::{missing_permissions, HandlerError};

/// Where the lookup pipeline ended up.
#[derive(Debug)]
enum Outcome {
    NoAddress,
    NoDiner,
    Diner { place: Place, photos: PhotoUrls },
}

/// Finds an open diner near the device's address.
pub struct FindDiner<'a> {
    pub address: &'a dyn AddressService,
    pub finder: &'a dyn DinerFinder,
    pub lookup_timeout: Duration,
}

impl FindDiner<'_> {
    /// Only address service errors escape; every other failure becomes an apology.
    pub async fn handle(
        &self,
        envelope: &RequestEnvelope,
    ) -> Result<ResponseEnvelope, HandlerError> {
        if envelope.consent_token().is_none() {
            info!("no consent token, asking for address permission");
            return Ok(missing_permissions());
        }

        let outcome = timeout(self.lookup_timeout, self.lookup(envelope))
            .await
            .unwrap_or_else(|_| {
                Err(anyhow!("lookup timed out after {:?}", self.lookup_timeout).into())
            });

        match outcome {
            Ok(Outcome::NoAddress) => {
                info!("device has no usable address");
                Ok(ResponseBuilder::new().speak(messages::NO_ADDRESS).build())
            }
            Ok(Outcome::NoDiner) => Ok(ResponseBuilder::new()
                .speak(messages::NO_DINER)
                .reprompt(messages::NO_DINER)
                .build()),
            Ok(Outcome::Diner { place, photos }) => {
                info!(name = %place.name, "recommending diner");
                Ok(diner_response(envelope, &place, &photos))
            }
            Err(HandlerError::Service(service_error)) => Err(service_error.into()),
            Err(HandlerError::Other(cause)) => {
                error!(error = ?cause, "find diner failed");
                Ok(ResponseBuilder::new().speak(messages::ERROR).build())
            }
        }
    }

    async fn lookup(&self, envelope: &RequestEnvelope) -> Result<Outcome, HandlerError> {
        let request = AddressRequest::from_envelope(envelope).map_err(address_failure)?;
        let address = self
            .address
            .full_address(&request)
            .await
            .map_err(address_failure)?;
        if !address.is_usable() {
            return Ok(Outcome::NoAddress);
        }

        let location = match self.finder.locate(&address.location_string()).await {
            Err(GetError::NoCandidates) => {
                warn!("device address did not geocode");
                return Ok(Outcome::NoDiner);
            }
            result => result.context("geocoding the device address")?,
        };

        let place = match self.finder.nearby_diner(location).await {
            Err(GetError::NoCandidates) => {
                warn!(%location, "no open diners nearby");
                return Ok(Outcome::NoDiner);
            }
            result => result.context("searching for nearby diners")?,
        };

        let Some(photo) = place.primary_photo() else {
            warn!(name = %place.name, "chosen diner has no photo");
            return Ok(Outcome::NoDiner);
        };
        let photos = PhotoUrls {
            small: self
                .finder
                .photo_url(SMALL_WIDTH, photo)
                .context("building the small photo url")?,
            large: self
                .finder
                .photo_url(LARGE_WIDTH, photo)
                .context("building the large photo url")?,
        };
        Ok(Outcome::Diner { place, photos })
    }
}

fn address_failure(error: AddressError) -> HandlerError {
    match error {
        AddressError::Service(service_error) => HandlerError::Service(service_error),
        other => HandlerError::Other(other.into()),
    }
}

fn diner_response(
    envelope: &RequestEnvelope,
    place: &Place,
    photos: &PhotoUrls,
) -> ResponseEnvelope {
    let presentation = format::present(place, photos);
    let mut builder = ResponseBuilder::new();
    if envelope.supports_display() {
        builder = builder.add_render_template_directive(presentation.template);
    }
    builder
        .with_standard_card(presentation.card)
        .speak(&presentation.speech)
        .reprompt(&presentation.speech)
        .build()
}
