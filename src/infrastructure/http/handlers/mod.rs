//! HTTP Handlers

mod message;
mod ping;

pub use message::*;
pub use ping::*;
