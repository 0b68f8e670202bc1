//! Interactive zip code validation.
//!
//! The validator keeps asking for a zip code until the geocoding service
//! accepts one. Blank input, unknown codes and geocoding outages are
//! reported as warnings and the user is asked again; there is no attempt
//! limit and no delay between attempts.

use tracing::debug;

use crate::{
    error::{Result, ZipWeatherError},
    geocode::{GeocodingService, HttpReply},
    model::{GeocodeResponse, PostalQuery},
    prompt::{PostalInput, WarningSink},
};

pub const EMPTY_INPUT_WARNING: &str = "Enter a zip code!";
pub const INVALID_CODE_WARNING: &str = "Invalid zip code!";
pub const SERVER_ERROR_WARNING: &str = "Server error!";
pub const UNEXPECTED_REPLY_WARNING: &str = "Unexpected response from zip code service!";
pub const UNREACHABLE_WARNING: &str = "Could not reach zip code service!";

#[derive(Debug, Clone, PartialEq)]
pub enum ValidatorState {
    /// Waiting for the user to type a zip code.
    Prompting,
    /// A non-blank code is being checked with the geocoding service.
    Validating(PostalQuery),
    /// The service accepted the code.
    Confirmed(ConfirmedPostalCode),
}

/// A zip code the geocoding service accepted, with the body it returned.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmedPostalCode {
    pub query: PostalQuery,
    pub response: GeocodeResponse,
}

pub struct PostalCodeValidator<'a> {
    input: &'a mut dyn PostalInput,
    warnings: &'a mut dyn WarningSink,
    geocoder: &'a dyn GeocodingService,
}

impl<'a> PostalCodeValidator<'a> {
    pub fn new(
        input: &'a mut dyn PostalInput,
        warnings: &'a mut dyn WarningSink,
        geocoder: &'a dyn GeocodingService,
    ) -> Self {
        Self {
            input,
            warnings,
            geocoder,
        }
    }

    /// Run until a zip code is confirmed and return it with the geocoding
    /// body.
    ///
    /// Only ends early when input runs out or a success reply cannot be
    /// decoded.
    pub async fn acquire_valid_postal_code(&mut self) -> Result<ConfirmedPostalCode> {
        let mut state = ValidatorState::Prompting;
        loop {
            state = match self.step(state).await? {
                ValidatorState::Confirmed(confirmed) => return Ok(confirmed),
                next => next,
            };
        }
    }

    /// Advance the state machine by one transition.
    pub async fn step(&mut self, state: ValidatorState) -> Result<ValidatorState> {
        match state {
            ValidatorState::Prompting => self.prompt(),
            ValidatorState::Validating(query) => self.validate(query).await,
            confirmed @ ValidatorState::Confirmed(_) => Ok(confirmed),
        }
    }

    fn prompt(&mut self) -> Result<ValidatorState> {
        let line = self
            .input
            .read_postal_code()?
            .ok_or(ZipWeatherError::InputClosed)?;

        match PostalQuery::parse(&line) {
            Some(query) => {
                debug!(postal_code = %query, "validating zip code");
                Ok(ValidatorState::Validating(query))
            }
            None => Ok(self.retry(EMPTY_INPUT_WARNING)),
        }
    }

    async fn validate(&mut self, query: PostalQuery) -> Result<ValidatorState> {
        let reply = match self.geocoder.lookup(&query).await {
            Ok(reply) => reply,
            Err(err) => {
                debug!(postal_code = %query, error = ?err, "zip code lookup failed");
                return Ok(self.retry(UNREACHABLE_WARNING));
            }
        };

        classify(&query, reply).map(|outcome| match outcome {
            Outcome::Confirmed(response) => {
                debug!(postal_code = %query, "zip code confirmed");
                ValidatorState::Confirmed(ConfirmedPostalCode { query, response })
            }
            Outcome::Retry(message) => self.retry(message),
        })
    }

    fn retry(&mut self, message: &'static str) -> ValidatorState {
        debug!("{message}");
        self.warnings.warn(message);
        ValidatorState::Prompting
    }
}

enum Outcome {
    Confirmed(GeocodeResponse),
    Retry(&'static str),
}

fn classify(query: &PostalQuery, reply: HttpReply) -> Result<Outcome> {
    match reply.status {
        404 => Ok(Outcome::Retry(INVALID_CODE_WARNING)),
        status if status >= 500 => Ok(Outcome::Retry(SERVER_ERROR_WARNING)),
        _ if reply.is_success() => serde_json::from_str(&reply.body)
            .map(Outcome::Confirmed)
            .map_err(ZipWeatherError::GeocodeDecode),
        status => match serde_json::from_str(&reply.body) {
            Ok(response) => {
                debug!(postal_code = %query, status, "accepting body of non-success reply");
                Ok(Outcome::Confirmed(response))
            }
            Err(_) => {
                debug!(postal_code = %query, status, "unexpected zip code service reply");
                Ok(Outcome::Retry(UNEXPECTED_REPLY_WARNING))
            }
        },
    }
}
