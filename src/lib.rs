pub mod address;
pub mod config;
pub mod dispatch;
pub mod envelope;
pub mod format;
pub mod handlers;
pub mod logging;
pub mod lookup;
pub mod messages;
pub mod response;

#[cfg(test)]
mod testing;

pub use dispatch::Skill;
pub use envelope::RequestEnvelope;
pub use response::ResponseEnvelope;
