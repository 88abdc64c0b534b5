//! Outbound response envelope and a chaining builder for it.

use serde::{Deserialize, Serialize};

const RESPONSE_VERSION: &str = "1.0";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub version: String,
    pub response: Response,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
}

impl OutputSpeech {
    fn ssml(text: &str) -> Self {
        Self::Ssml {
            ssml: format!("<speak>{text}</speak>"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Card {
    Standard(StandardCard),
    AskForPermissionsConsent { permissions: Vec<String> },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandardCard {
    pub title: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<CardImage>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardImage {
    pub small_image_url: String,
    pub large_image_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Directive {
    #[serde(rename = "Display.RenderTemplate")]
    RenderTemplate { template: Template },
    Hint { hint: TextField },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateKind {
    BodyTemplate2,
    BodyTemplate6,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BackButton {
    Visible,
    Hidden,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(rename = "type")]
    pub kind: TemplateKind,
    pub back_button: BackButton,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    pub text_content: TextContent,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub sources: Vec<ImageSource>,
}

impl Image {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            sources: vec![ImageSource { url: url.into() }],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageSource {
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    pub primary_text: TextField,
}

impl TextContent {
    pub fn rich(text: impl Into<String>) -> Self {
        Self {
            primary_text: TextField::RichText { text: text.into() },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TextField {
    RichText { text: String },
    PlainText { text: String },
}

#[derive(Debug, Default)]
pub struct ResponseBuilder {
    response: Response,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn speak(mut self, text: &str) -> Self {
        self.response.output_speech = Some(OutputSpeech::ssml(text));
        self
    }

    /// Setting a reprompt keeps the session open.
    pub fn reprompt(mut self, text: &str) -> Self {
        self.response.reprompt = Some(Reprompt {
            output_speech: OutputSpeech::ssml(text),
        });
        self.response.should_end_session = Some(false);
        self
    }

    pub fn with_ask_for_permissions_consent_card(mut self, permissions: &[&str]) -> Self {
        self.response.card = Some(Card::AskForPermissionsConsent {
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        });
        self
    }

    pub fn with_standard_card(mut self, card: StandardCard) -> Self {
        self.response.card = Some(Card::Standard(card));
        self
    }

    pub fn add_render_template_directive(mut self, template: Template) -> Self {
        self.response
            .directives
            .push(Directive::RenderTemplate { template });
        self
    }

    pub fn add_hint_directive(mut self, text: &str) -> Self {
        self.response.directives.push(Directive::Hint {
            hint: TextField::PlainText {
                text: text.to_string(),
            },
        });
        self
    }

    pub fn build(self) -> ResponseEnvelope {
        ResponseEnvelope {
            version: RESPONSE_VERSION.to_string(),
            response: self.response,
        }
    }
}

impl ResponseEnvelope {
    /// The spoken SSML, if any.
    pub fn speech(&self) -> Option<&str> {
        match &self.response.output_speech {
            Some(OutputSpeech::Ssml { ssml }) => Some(ssml.as_str()),
            None => None,
        }
    }

    pub fn reprompt_speech(&self) -> Option<&str> {
        match &self.response.reprompt {
            Some(Reprompt {
                output_speech: OutputSpeech::Ssml { ssml },
            }) => Some(ssml.as_str()),
            None => None,
        }
    }
}
