//! JSON request/response adapter around the riddle generator.
//!
//! A request carries optional overrides of [`RiddleOptions`]:
//!
//! ```json
//! {"options": {"size": 4, "categories": 3, "seed": "<64 hex digits>"}}
//! ```
//!
//! A successful response lists the facts and questions; a failure is reported
//! as `{"error": "<message>"}`.

use rand::Rng as _;
use riddle_generator::{
    ConfigError, GeneratedRiddle, RiddleError, RiddleGenerator, RiddleOptions, RiddleSeed,
    SeedParseError,
};
use serde::{Deserialize, Serialize};

/// Number of seeds tried before a recoverable failure is reported.
pub const DEFAULT_MAX_TRIES: usize = 10;

/// Errors raised while turning a request into a riddle.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AdapterError {
    /// The payload is not a valid request.
    #[display("malformed request: {_0}")]
    Malformed(serde_json::Error),
    /// The seed is not 64 hex digits.
    #[display("{_0}")]
    Seed(SeedParseError),
    /// The options describe no buildable board.
    #[display("invalid options: {_0}")]
    Options(ConfigError),
    /// Generation failed on every try.
    #[display("{_0}")]
    Generation(RiddleError),
}

/// A generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RiddleRequest {
    /// Overrides of the default options.
    #[serde(default)]
    pub options: RequestOptions,
}

/// Optional overrides of [`RiddleOptions`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequestOptions {
    /// Number of people.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    /// Number of categories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<usize>,
    /// Number of items per clue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_size: Option<usize>,
    /// Number of questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secrets: Option<usize>,
    /// Seed as 64 hex digits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
}

impl RequestOptions {
    /// Applies the overrides on top of `base`.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Seed`] if the seed cannot be parsed.
    pub fn apply(&self, base: RiddleOptions) -> Result<RiddleOptions, AdapterError> {
        let seed = self.seed.as_deref().map(str::parse::<RiddleSeed>).transpose()?;
        Ok(RiddleOptions {
            size: self.size.unwrap_or(base.size),
            categories: self.categories.unwrap_or(base.categories),
            group_size: self.group_size.unwrap_or(base.group_size),
            secrets: self.secrets.unwrap_or(base.secrets),
            seed: seed.or(base.seed),
            ..base
        })
    }
}

/// A successful response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiddleResponse {
    /// Clue sentences, in clue order.
    pub facts: Vec<String>,
    /// One question per missing item.
    pub questions: Vec<String>,
}

impl From<&GeneratedRiddle> for RiddleResponse {
    fn from(riddle: &GeneratedRiddle) -> Self {
        Self {
            facts: riddle.facts(),
            questions: riddle.questions(),
        }
    }
}

/// A failure response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable failure message.
    pub error: String,
}

impl From<&AdapterError> for ErrorResponse {
    fn from(err: &AdapterError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

/// Generates a riddle, drawing a fresh seed after each recoverable failure.
///
/// The first try uses the configured seed if there is one. At least one try
/// is made even if `max_tries` is zero.
///
/// # Errors
///
/// Returns the last error once `max_tries` tries failed, or the first
/// unrecoverable error.
pub fn generate_with_retries(
    generator: &RiddleGenerator,
    max_tries: usize,
) -> Result<GeneratedRiddle, RiddleError> {
    let max_tries = max_tries.max(1);
    let mut seed = generator
        .options()
        .seed
        .unwrap_or_else(|| rand::rng().random());
    let mut tries = 1;
    loop {
        match generator.generate_with_seed(seed) {
            Ok(riddle) => return Ok(riddle),
            Err(err) if err.is_recoverable() && tries < max_tries => {
                log::warn!("try {tries}/{max_tries} failed with seed {seed}: {err}");
                seed = rand::rng().random::<RiddleSeed>();
                tries += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

/// Parses a JSON request and generates the riddle it describes.
///
/// # Errors
///
/// Returns [`AdapterError::Malformed`] for an invalid payload, and the
/// matching variant for a bad seed, invalid options or failed generation.
///
/// # Examples
///
/// ```
/// let response = riddle_cli::dto::handle_request(r#"{"options": {"size": 3}}"#)?;
/// assert!(!response.facts.is_empty());
/// assert_eq!(response.questions.len(), 2);
/// # Ok::<(), riddle_cli::dto::AdapterError>(())
/// ```
pub fn handle_request(payload: &str) -> Result<RiddleResponse, AdapterError> {
    handle_request_with_tries(payload, DEFAULT_MAX_TRIES)
}

/// Like [`handle_request`], trying at most `max_tries` seeds.
///
/// # Errors
///
/// See [`handle_request`].
pub fn handle_request_with_tries(
    payload: &str,
    max_tries: usize,
) -> Result<RiddleResponse, AdapterError> {
    let request: RiddleRequest = serde_json::from_str(payload)?;
    let options = request.options.apply(RiddleOptions::default())?;
    let generator = RiddleGenerator::new(options)?;
    let riddle = generate_with_retries(&generator, max_tries)?;
    Ok(RiddleResponse::from(&riddle))
}

/// Serializes the outcome of [`handle_request`], `{"error": ...}` on failure.
///
/// # Errors
///
/// Returns the [`serde_json::Error`] if the response cannot be serialized.
pub fn response_json(
    result: &Result<RiddleResponse, AdapterError>,
) -> Result<String, serde_json::Error> {
    match result {
        Ok(response) => serde_json::to_string(response),
        Err(err) => serde_json::to_string(&ErrorResponse::from(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";

    #[test]
    fn test_parse_empty_request() {
        let request: RiddleRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, RiddleRequest::default());
        let options = request.options.apply(RiddleOptions::default()).unwrap();
        assert_eq!(options, RiddleOptions::default());
    }

    #[test]
    fn test_apply_overrides_field_by_field() {
        let payload = format!(r#"{{"options":{{"size":3,"secrets":1,"seed":"{SEED}"}}}}"#);
        let request: RiddleRequest = serde_json::from_str(&payload).unwrap();
        let options = request.options.apply(RiddleOptions::default()).unwrap();
        assert_eq!(options.size, 3);
        assert_eq!(options.categories, 5);
        assert_eq!(options.group_size, 2);
        assert_eq!(options.secrets, 1);
        assert_eq!(options.seed, Some(SEED.parse().unwrap()));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        assert!(serde_json::from_str::<RiddleRequest>(r#"{"opts":{}}"#).is_err());
        assert!(serde_json::from_str::<RiddleRequest>(r#"{"options":{"people":3}}"#).is_err());
        assert!(matches!(
            handle_request(r#"{"options":{"colour":"red"}}"#),
            Err(AdapterError::Malformed(_))
        ));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            handle_request(r#"{"options":{"size":-1}}"#),
            Err(AdapterError::Malformed(_))
        ));
        assert!(matches!(
            handle_request(r#"{"options":{"seed":"abc"}}"#),
            Err(AdapterError::Seed(_))
        ));
        assert!(matches!(
            handle_request(r#"{"options":{"size":9}}"#),
            Err(AdapterError::Options(ConfigError::InvalidSize { size: 9, .. }))
        ));
        assert!(matches!(
            handle_request(r#"{"options":{"categories":2,"group_size":3}}"#),
            Err(AdapterError::Options(ConfigError::InvalidGroupSize { .. }))
        ));
        assert!(matches!(
            handle_request(r#"{"options":{"group_size":3}}"#),
            Err(AdapterError::Options(ConfigError::UnsupportedGroupSize { .. }))
        ));
    }

    #[test]
    fn test_response_shape() {
        let result = handle_request(r#"{"options":{"size":4,"categories":4}}"#);
        let json = response_json(&result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object["facts"].as_array().is_some_and(|facts| !facts.is_empty()));
        assert_eq!(object["questions"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_error_response_shape() {
        let json = response_json(&handle_request("not json")).unwrap();
        let response: ErrorResponse = serde_json::from_str(&json).unwrap();
        assert!(response.error.starts_with("malformed request: "));
    }

    #[test]
    fn test_retries_recover_from_bad_seeds() {
        let generator = RiddleGenerator::new(RiddleOptions::default()).unwrap();
        let riddle = generate_with_retries(&generator, 100).unwrap();
        assert_eq!(riddle.missing.len(), 2);
    }

    #[test]
    fn test_configured_seed_is_tried_first() {
        let seed = (0..100)
            .map(RiddleSeed::from)
            .find(|&seed| {
                RiddleGenerator::new(RiddleOptions::default())
                    .unwrap()
                    .generate_with_seed(seed)
                    .is_ok()
            })
            .unwrap();
        let generator = RiddleGenerator::new(RiddleOptions {
            seed: Some(seed),
            ..RiddleOptions::default()
        })
        .unwrap();
        let riddle = generate_with_retries(&generator, 1).unwrap();
        assert_eq!(riddle.seed, seed);
    }

    #[test]
    fn test_max_tries_bounds_request_retries() {
        let generator = RiddleGenerator::new(RiddleOptions::default()).unwrap();
        let failing = (0..200)
            .map(RiddleSeed::from)
            .find(|&seed| generator.generate_with_seed(seed).is_err())
            .unwrap();
        let payload = format!(r#"{{"options":{{"seed":"{failing}"}}}}"#);
        assert!(matches!(
            handle_request_with_tries(&payload, 1),
            Err(AdapterError::Generation(_))
        ));
    }
}
