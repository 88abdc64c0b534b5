//! Request handlers. Each returns a finished response; only the find-diner
//! handler can fail, and only with errors the dispatcher knows how to route.

pub mod find_diner;
pub mod service_error;

use thiserror::Error;

use crate::{
    address::ServiceError,
    envelope::RequestEnvelope,
    messages,
    response::{
        BackButton, ResponseBuilder, ResponseEnvelope, Template, TemplateKind, TextContent,
    },
};

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub fn launch(envelope: &RequestEnvelope) -> ResponseEnvelope {
    let mut builder = ResponseBuilder::new();
    if envelope.supports_display() {
        builder = builder
            .add_render_template_directive(Template {
                kind: TemplateKind::BodyTemplate6,
                back_button: BackButton::Visible,
                title: messages::WELCOME_TITLE.to_string(),
                image: None,
                text_content: TextContent::rich(messages::WELCOME_TEXT),
            })
            .add_hint_directive(messages::WELCOME_HINT);
    }
    builder
        .speak(messages::WELCOME)
        .reprompt(messages::WELCOME)
        .build()
}

pub fn help() -> ResponseEnvelope {
    ResponseBuilder::new()
        .speak(messages::HELP)
        .reprompt(messages::HELP)
        .build()
}

pub fn cancel_and_stop() -> ResponseEnvelope {
    ResponseBuilder::new().speak(messages::GOODBYE).build()
}

pub fn session_ended() -> ResponseEnvelope {
    ResponseBuilder::new().build()
}

pub fn unhandled() -> ResponseEnvelope {
    ResponseBuilder::new()
        .speak(messages::UNHANDLED)
        .reprompt(messages::UNHANDLED)
        .build()
}

/// Ask the user to grant address access, with a consent card in the app.
pub fn missing_permissions() -> ResponseEnvelope {
    ResponseBuilder::new()
        .speak(messages::NOTIFY_MISSING_PERMISSIONS)
        .with_ask_for_permissions_consent_card(&[messages::ADDRESS_PERMISSION])
        .build()
}
