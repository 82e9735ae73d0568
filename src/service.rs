use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use log::{info, warn};
use serde::Serialize;

use crate::{
    engine::{
        evaluator::{EvalOptions, Evaluator},
        normalizer::normalize,
        parser::core::parse_expression,
        validator::is_valid,
    },
    error::{DecodeError, Error},
};

/// Body returned for the root path.
pub const GREETING: &str = "HELOO";

/// Page returned for any path that has no handler.
pub const NOT_FOUND_PAGE: &str =
    "<h1>PAGE NOT FOUND</h1> <a href=/calculus>Did you mean to go here?</a>";

/// Path of the calculation endpoint.
pub const CALCULUS_PATH: &str = "/calculus";

/// HTTP status of a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// `200 OK`
    Ok,
    /// `400 Bad Request`
    BadRequest,
    /// `404 Not Found`
    NotFound,
}

impl Status {
    /// The numeric status code.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::BadRequest => 400,
            Self::NotFound => 404,
        }
    }

    /// Returns `true` for `2xx` statuses.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Ok)
    }
}

/// JSON payload of the calculation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    /// The expression was solved.
    Solved {
        /// The value of the expression.
        result: f64,
        /// Always `false`.
        error:  bool,
    },
    /// The request could not be served.
    Failed {
        /// What went wrong, echoing the query.
        message: String,
        /// Always `true`.
        error:   bool,
    },
}

impl Outcome {
    fn solved(result: f64) -> Self {
        Self::Solved { result,
                       error: false }
    }

    fn failed(message: impl Into<String>) -> Self {
        Self::Failed { message: message.into(),
                       error:   true, }
    }
}

/// Body of a response.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// A JSON object.
    Json(Outcome),
    /// A JSON string.
    Text(&'static str),
    /// An HTML page.
    Html(&'static str),
}

/// A response ready to be written by a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// Status of the response.
    pub status: Status,
    /// Payload of the response.
    pub body:   Body,
}

impl Response {
    const fn json(status: Status, outcome: Outcome) -> Self {
        Self { status,
               body: Body::Json(outcome) }
    }

    /// The `Content-Type` a transport should send with the body.
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self.body {
            Body::Json(_) | Body::Text(_) => "application/json",
            Body::Html(_) => "text/html; charset=utf-8",
        }
    }

    /// Renders the body as it goes on the wire.
    ///
    /// # Errors
    /// Returns the serializer's error if the body cannot be encoded.
    ///
    /// # Example
    /// ```
    /// use calculus::service::route;
    ///
    /// let response = route("/", None, Default::default());
    /// assert_eq!(response.render().unwrap(), "\"HELOO\"");
    /// ```
    pub fn render(&self) -> Result<String, serde_json::Error> {
        match &self.body {
            Body::Json(outcome) => serde_json::to_string(outcome),
            Body::Text(text) => serde_json::to_string(text),
            Body::Html(page) => Ok((*page).to_string()),
        }
    }
}

/// Decodes a standard, padded base64 query into UTF-8 text.
///
/// # Errors
/// - `InvalidBase64` if the query is not base64.
/// - `InvalidUtf8` if the decoded bytes are not UTF-8.
///
/// # Example
/// ```
/// use calculus::service::decode_query;
///
/// assert_eq!(decode_query("MSArIDI=").unwrap(), "1 + 2");
/// assert!(decode_query("not base64!").is_err());
/// ```
pub fn decode_query(query: &str) -> Result<String, DecodeError> {
    let bytes = BASE64.decode(query)
                      .map_err(|e| DecodeError::InvalidBase64 { query:  query.to_string(),
                                                                reason: e.to_string(), })?;

    String::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8 { query: query.to_string() })
}

/// Serves the calculation endpoint for one encoded query.
///
/// The query is decoded, normalized and validated. Anything that fails on the
/// way is a `400` whose message echoes the query; a solved expression is a
/// `200` carrying the result. A result that is not finite cannot be written
/// as JSON and is reported as a failure too.
///
/// # Example
/// ```
/// use calculus::service::{Status, calculate};
///
/// // "2 * (12 + 12) + 10"
/// let response = calculate("MiAqICgxMiArIDEyKSArIDEw", Default::default());
/// assert_eq!(response.status, Status::Ok);
/// assert_eq!(response.render().unwrap(), r#"{"result":58.0,"error":false}"#);
/// ```
#[must_use]
pub fn calculate(query: &str, options: EvalOptions) -> Response {
    let decoded = match decode_query(query) {
        Ok(decoded) => decoded,
        Err(e) => {
            warn!("{e}");
            return Response::json(Status::BadRequest, Outcome::failed(e.to_string()));
        },
    };

    let expression = normalize(&decoded);
    if !is_valid(&expression) {
        warn!("rejected query {query:?} ({expression:?})");
        return Response::json(Status::BadRequest,
                              Outcome::failed(format!("Invalid input string {query} - decoded to {expression}")));
    }

    match solve_normalized(&expression, options) {
        Ok(result) if result.is_finite() => {
            info!("{expression} = {result}");
            Response::json(Status::Ok, Outcome::solved(result))
        },
        Ok(result) => {
            warn!("{expression} has no finite value ({result})");
            Response::json(Status::BadRequest,
                           Outcome::failed(format!("Unable to evaluate {expression}: result {result} is not a finite number")))
        },
        Err(e) => {
            warn!("{expression} failed to evaluate: {e}");
            Response::json(Status::BadRequest,
                           Outcome::failed(format!("Unable to evaluate {expression}: {e}")))
        },
    }
}

fn solve_normalized(expression: &str, options: EvalOptions) -> Result<f64, Error> {
    let tree = parse_expression(expression)?;
    Ok(Evaluator::new(options).eval(&tree)?)
}

/// Dispatches a request by path.
///
/// - `/` answers with [`GREETING`];
/// - `/calculus` requires a `query` and is served by [`calculate`];
/// - every other path is a `404` with [`NOT_FOUND_PAGE`].
///
/// # Example
/// ```
/// use calculus::service::{Status, route};
///
/// assert_eq!(route("/", None, Default::default()).status, Status::Ok);
/// assert_eq!(route("/calculus", None, Default::default()).status, Status::BadRequest);
/// assert_eq!(route("/docs", None, Default::default()).status, Status::NotFound);
/// ```
#[must_use]
pub fn route(path: &str, query: Option<&str>, options: EvalOptions) -> Response {
    match (path, query) {
        ("/" | "", _) => Response { status: Status::Ok,
                                    body:   Body::Text(GREETING), },
        (CALCULUS_PATH, Some(query)) => calculate(query, options),
        (CALCULUS_PATH, None) => {
            Response::json(Status::BadRequest,
                           Outcome::failed("Missing required query parameter 'query'"))
        },
        _ => {
            warn!("no route for {path}");
            Response { status: Status::NotFound,
                       body:   Body::Html(NOT_FOUND_PAGE), }
        },
    }
}

#[cfg(test)]
mod tests {
    use base64::{Engine, engine::general_purpose::STANDARD as BASE64};

    use super::{Body, Outcome, Status, calculate, decode_query, route};
    use crate::{engine::evaluator::EvalOptions, error::DecodeError};

    fn encode(expr: &str) -> String {
        BASE64.encode(expr)
    }

    #[test]
    fn invalid_utf8_is_a_decode_error() {
        let query = BASE64.encode([0xff, 0xfe]);
        assert_eq!(decode_query(&query), Err(DecodeError::InvalidUtf8 { query }));
    }

    #[test]
    fn unpadded_queries_are_rejected() {
        assert!(matches!(decode_query("MSsy"), Ok(ref s) if s == "1+2"));
        assert!(matches!(decode_query("MSsyMw"), Err(DecodeError::InvalidBase64 { .. })));
    }

    #[test]
    fn division_by_zero_is_not_a_json_number() {
        let response = calculate(&encode("1/0"), EvalOptions::default());
        assert_eq!(response.status, Status::BadRequest);
    }

    #[test]
    fn strict_division_is_reported_with_its_reason() {
        let response = calculate(&encode("1/(2-2)"), EvalOptions::strict());
        match response.body {
            Body::Json(Outcome::Failed { message, error }) => {
                assert!(error);
                assert!(message.contains("Division by zero"), "{message}");
            },
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn trailing_operator_passes_the_gate_but_fails_evaluation() {
        let response = calculate(&encode("1+"), EvalOptions::default());
        assert_eq!(response.status, Status::BadRequest);
        let body = response.render().unwrap();
        assert!(body.contains("Unable to evaluate 1+"), "{body}");
    }

    #[test]
    fn root_greets() {
        let response = route("/", Some("ignored"), EvalOptions::default());
        assert_eq!(response.body, Body::Text("HELOO"));
        assert_eq!(response.content_type(), "application/json");
    }

    #[test]
    fn unknown_paths_get_the_html_page() {
        let response = route("/nope", None, EvalOptions::default());
        assert_eq!(response.status.code(), 404);
        assert_eq!(response.content_type(), "text/html; charset=utf-8");
        assert!(response.render().unwrap().contains("PAGE NOT FOUND"));
    }
}
