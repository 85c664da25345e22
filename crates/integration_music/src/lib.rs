//! Music integration - AI soundtrack generation via the Loudly API
//!
//! The upstream API is unstable about which payload shape it accepts, so
//! the client walks a small matrix of payload variants per endpoint and
//! settles on the first one that yields a track.

mod client;

pub use client::{LoudlyClient, MusicConfig, MusicError};
