//! Routes a request envelope to exactly one handler.

use std::time::Duration;

use tracing::{debug, info};

use crate::{
    address::{AddressService, DeviceAddressClient, ServiceError},
    config::Settings,
    envelope::{Request, RequestEnvelope},
    handlers::{self, find_diner::FindDiner, service_error, HandlerError},
    lookup::DinerFinder,
    response::ResponseEnvelope,
};

pub const FIND_DINER_INTENT: &str = "FindDinerIntent";
pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";

/// Request handlers, checked in [`Handler::PRIORITY`] order. The first whose
/// predicate matches handles the request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handler {
    Launch,
    FindDiner,
    Help,
    CancelAndStop,
    SessionEnded,
    Unhandled,
}

impl Handler {
    pub const PRIORITY: [Handler; 6] = [
        Handler::Launch,
        Handler::FindDiner,
        Handler::Help,
        Handler::CancelAndStop,
        Handler::SessionEnded,
        Handler::Unhandled,
    ];

    pub fn can_handle(self, request: &Request) -> bool {
        let intent_is = |names: &[&str]| match request {
            Request::Intent { intent } => names.iter().any(|name| intent.name == *name),
            _ => false,
        };
        match self {
            Handler::Launch => matches!(request, Request::Launch),
            Handler::FindDiner => intent_is(&[FIND_DINER_INTENT]),
            Handler::Help => intent_is(&[HELP_INTENT]),
            Handler::CancelAndStop => intent_is(&[CANCEL_INTENT, STOP_INTENT]),
            Handler::SessionEnded => matches!(request, Request::SessionEnded { .. }),
            Handler::Unhandled => true,
        }
    }

    pub fn select(request: &Request) -> Self {
        Self::PRIORITY
            .into_iter()
            .find(|handler| handler.can_handle(request))
            .unwrap_or(Handler::Unhandled)
    }
}

/// Error handlers, consulted when a request handler fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorHandler {
    AddressService,
}

impl ErrorHandler {
    pub const PRIORITY: [ErrorHandler; 1] = [ErrorHandler::AddressService];

    pub fn can_handle(self, error: &HandlerError) -> bool {
        self.claim(error).is_some()
    }

    /// The part of `error` this handler knows how to answer.
    fn claim(self, error: &HandlerError) -> Option<&ServiceError> {
        match (self, error) {
            (ErrorHandler::AddressService, HandlerError::Service(service_error)) => {
                Some(service_error)
            }
            (ErrorHandler::AddressService, HandlerError::Other(_)) => None,
        }
    }

    fn handle(self, error: &ServiceError) -> ResponseEnvelope {
        match self {
            ErrorHandler::AddressService => service_error::handle(error),
        }
    }

    /// Route `error` to the first matching error handler, or hand it back.
    pub fn recover(error: HandlerError) -> Result<ResponseEnvelope, HandlerError> {
        let recovered = Self::PRIORITY
            .into_iter()
            .find_map(|handler| handler.claim(&error).map(|claimed| handler.handle(claimed)));
        match recovered {
            Some(response) => Ok(response),
            None => Err(error),
        }
    }
}

/// The skill: built once per process and shared by every invocation.
pub struct Skill {
    address: Box<dyn AddressService>,
    finder: Box<dyn DinerFinder>,
    lookup_timeout: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum SkillInitError {
    #[error("unable to build the HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error(transparent)]
    MapsClient(#[from] bb_maps::client::ClientInitError),
}

impl Skill {
    pub fn new(
        address: Box<dyn AddressService>,
        finder: Box<dyn DinerFinder>,
        lookup_timeout: Duration,
    ) -> Self {
        Self {
            address,
            finder,
            lookup_timeout,
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, SkillInitError> {
        let http = settings.http_client()?;
        let maps = settings.maps_client(http.clone())?;
        Ok(Self::new(
            Box::new(DeviceAddressClient::new(http)),
            Box::new(maps),
            settings.lookup_timeout(),
        ))
    }

    pub async fn dispatch(
        &self,
        envelope: &RequestEnvelope,
    ) -> Result<ResponseEnvelope, HandlerError> {
        let handler = Handler::select(&envelope.request);
        info!(?handler, intent = envelope.intent_name(), "dispatching request");
        let result = match handler {
            Handler::Launch => Ok(handlers::launch(envelope)),
            Handler::FindDiner => {
                FindDiner {
                    address: self.address.as_ref(),
                    finder: self.finder.as_ref(),
                    lookup_timeout: self.lookup_timeout,
                }
                .handle(envelope)
                .await
            }
            Handler::Help => Ok(handlers::help()),
            Handler::CancelAndStop => Ok(handlers::cancel_and_stop()),
            Handler::SessionEnded => Ok(handlers::session_ended()),
            Handler::Unhandled => Ok(handlers::unhandled()),
        };
        result.or_else(|error| {
            debug!(%error, "routing handler failure to error handlers");
            ErrorHandler::recover(error)
        })
    }
}
