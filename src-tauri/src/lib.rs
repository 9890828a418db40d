//! Nopeify library
//!
//! Tone-styled decline generation: the tone catalog, the preset store, and
//! the response generator. The desktop shell and its commands are behind the
//! `desktop` feature.

pub mod app;
#[cfg(feature = "desktop")]
pub mod commands;
pub mod config;
pub mod database;
pub mod error;
pub mod services;
pub mod session;
pub mod tones;
