//! Terminal dashboard client for a market-data backend.
//!
//! Polls a REST backend for quotes, technical indicators, news sentiment,
//! and AI trading signals, and renders them in a tabbed Ratatui interface.
//! The backend URL, watchlist, and refresh cadence come from environment
//! variables (see [`config`]).

pub mod api;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod poll;
pub mod tui;
pub mod util;

pub use error::{DeckError, Result};
