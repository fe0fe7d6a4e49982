use derive_more::Display;
use log::debug;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::backend::engine::{resolve_request, Resolution};
use crate::backend::mathphysics::Point2D;
use crate::backend::validation::RequestError;


pub const MSG_SUCCESS: &str       = "Data correctly proccessed";
pub const MSG_REQUEST_ERROR: &str = "Missing or incorrect fields in the body";
pub const MSG_NOT_FOUND: &str     =
    "No point found that fits the requirements requested";
pub const MSG_SYNTAX_ERROR: &str  = "Syntax Error. Body badly formatted";

// Largest magnitude at which every integer is exactly representable.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;


#[repr(u16)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display)]
pub enum StatusCode {
    #[display("200")]
    Success    = 200,
    #[display("400")]
    BadRequest = 400,
    #[display("404")]
    NotFound   = 404,
}

impl StatusCode {
    #[must_use]
    pub fn as_u16(self) -> u16 {
        self as u16
    }
}


// Integral values are written without a fractional part.
#[allow(clippy::ref_option, clippy::cast_possible_truncation)]
fn serialize_axis<S>(
    value: &Option<f64>,
    serializer: S
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) if v.fract() == 0.0 && v.abs() <= MAX_EXACT_INTEGER =>
            serializer.serialize_i64(*v as i64),
        Some(v) => serializer.serialize_f64(*v),
        None    => serializer.serialize_none(),
    }
}


#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ResponseData {
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_axis"
    )]
    x: Option<f64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_axis"
    )]
    y: Option<f64>,
}

impl From<Option<Point2D>> for ResponseData {
    fn from(target: Option<Point2D>) -> Self {
        Self {
            x: target.map(|target| target.x),
            y: target.map(|target| target.y),
        }
    }
}


#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarResponse {
    #[serde(skip)]
    status: StatusCode,
    status_ok: bool,
    message: &'static str,
    data: ResponseData,
}

impl RadarResponse {
    #[must_use]
    pub fn new(
        status: StatusCode,
        message: &'static str,
        target: Option<Point2D>
    ) -> Self {
        Self {
            status,
            status_ok: status == StatusCode::Success,
            message,
            data: ResponseData::from(target),
        }
    }

    #[must_use]
    pub fn found(target: Point2D) -> Self {
        Self::new(StatusCode::Success, MSG_SUCCESS, Some(target))
    }

    #[must_use]
    pub fn not_found() -> Self {
        Self::new(StatusCode::NotFound, MSG_NOT_FOUND, None)
    }

    #[must_use]
    pub fn request_error() -> Self {
        Self::new(StatusCode::BadRequest, MSG_REQUEST_ERROR, None)
    }

    #[must_use]
    pub fn syntax_error() -> Self {
        Self::new(StatusCode::BadRequest, MSG_SYNTAX_ERROR, None)
    }

    #[must_use]
    pub fn from_outcome(outcome: Result<Resolution, RequestError>) -> Self {
        match outcome {
            Ok(Resolution::Found(target)) => Self::found(target),
            Ok(Resolution::NotFound)      => Self::not_found(),
            Err(error)                    => {
                debug!("Rejected request: {error}");

                Self::request_error()
            },
        }
    }

    /// Runs the whole request path, from raw body text to response.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(body)   => Self::from_outcome(resolve_request(&body)),
            Err(error) => {
                debug!("Body is not valid JSON: {error}");

                Self::syntax_error()
            },
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn message(&self) -> &str {
        self.message
    }

    #[must_use]
    pub fn target(&self) -> Option<Point2D> {
        self.data.x.zip(self.data.y).map(|(x, y)| Point2D::new(x, y))
    }

    /// # Errors
    ///
    /// Will return `Err` if serialization fails.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(&self)
        } else {
            serde_json::to_string(&self)
        }
    }
}
