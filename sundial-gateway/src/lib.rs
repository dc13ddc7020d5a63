//! HTTP API gateway for Sundial.
//!
//! Exposes the public date/calendar/add endpoints and the API-key protected
//! auth check, random number and JSON addition endpoints.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod auth;
pub mod error;
pub mod routes;
pub mod settings;
pub mod state;
