//! Core library for the `zipweather` CLI.
//!
//! This crate defines:
//! - Configuration read from the environment
//! - Clients for the geocoding and weather services
//! - The zip code validation loop and location resolution
//! - Shared domain models and the error type
//!
//! It is used by `zipweather-cli`, but the service seams are traits so the
//! whole flow can be driven with scripted input and fake services.

pub mod app;
pub mod config;
pub mod error;
pub mod geocode;
pub mod model;
pub mod prompt;
pub mod provider;
pub mod resolver;
pub mod validator;

pub use app::{format_summary, run};
pub use config::Config;
pub use error::ZipWeatherError;
pub use geocode::{GeocodingService, HttpReply, ZippopotamClient};
pub use model::{GeoResult, GeocodePlace, GeocodeResponse, PostalQuery, UnitSystem, WeatherResult};
pub use prompt::{LineInput, PROMPT, PostalInput, WarningSink};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use resolver::resolve_location;
pub use validator::{ConfirmedPostalCode, PostalCodeValidator, ValidatorState};
