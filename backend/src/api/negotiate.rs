//! Content negotiation between the HAL and JSON:API representations.
//!
//! The service speaks two hypermedia formats; the `Accept` header decides
//! which one a response uses. `application/json`, `*/*`, and a missing
//! header all fall back to HAL, the service default. A header in which no
//! supported range is acceptable yields a `not_acceptable` domain error,
//! which the envelope maps to 406.

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;
use serde_json::json;

use crate::api::error::ApiError;
use crate::domain::DomainError;
use hypermedia::{HAL_JSON, JSONAPI};

/// The hypermedia format chosen for a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    /// `application/hal+json`.
    Hal,
    /// `application/vnd.api+json`.
    JsonApi,
}

impl Representation {
    /// The media type echoed in the response `Content-Type`.
    pub const fn media_type(self) -> &'static str {
        match self {
            Self::Hal => HAL_JSON,
            Self::JsonApi => JSONAPI,
        }
    }
}

/// Choose a representation for the request's `Accept` header.
///
/// Each representation's quality is set by the most specific range matching
/// it (RFC 9110 §12.5.1), so `*/*, application/hal+json;q=0` excludes HAL
/// rather than readmitting it through the wildcard. Malformed ranges are
/// skipped rather than failing the whole header.
///
/// # Errors
/// Returns a `not_acceptable` [`DomainError`] when every supported
/// representation is excluded.
pub fn negotiate(accept: Option<&str>) -> Result<Representation, DomainError> {
    let Some(accept_header) = accept.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(Representation::Hal);
    };

    let mut best: Option<(Representation, u16, u8)> = None;
    for representation in [Representation::Hal, Representation::JsonApi] {
        let Some((quality, specificity)) = effective_quality(accept_header, representation) else {
            continue;
        };
        if quality == 0 {
            continue;
        }
        let better = match best {
            None => true,
            Some((_, best_quality, best_specificity)) => {
                quality > best_quality || (quality == best_quality && specificity > best_specificity)
            }
        };
        if better {
            best = Some((representation, quality, specificity));
        }
    }

    best.map(|(representation, _, _)| representation).ok_or_else(|| {
        DomainError::not_acceptable("no supported representation satisfies the Accept header")
            .with_details(json!({ "supported": [HAL_JSON, JSONAPI] }))
    })
}

/// The quality and specificity of the most specific range matching a
/// representation, or `None` when no range in the header matches it.
fn effective_quality(header: &str, representation: Representation) -> Option<(u16, u8)> {
    let mut best: Option<(u16, u8)> = None;
    for range in header.split(',') {
        let Ok(parsed) = range.trim().parse::<mime::Mime>() else {
            continue;
        };
        let Some(quality) = parsed
            .get_param("q")
            .map_or(Some(1000), |value| q_millis(value.as_str()))
        else {
            continue;
        };
        let Some(specificity) = match_specificity(&parsed, representation) else {
            continue;
        };
        if best.is_none_or(|(_, best_specificity)| specificity > best_specificity) {
            best = Some((quality, specificity));
        }
    }
    best
}

/// Negotiate directly from an incoming request.
///
/// # Errors
/// Returns an [`ApiError`] for a non-UTF-8 header (400) or when negotiation
/// fails (406).
pub fn from_request(request: &HttpRequest) -> Result<Representation, ApiError> {
    let accept = match request.headers().get(header::ACCEPT) {
        Some(value) => Some(value.to_str().map_err(|_| {
            ApiError::from(DomainError::invalid_request(
                "Accept header must be valid UTF-8",
            ))
        })?),
        None => None,
    };
    negotiate(accept).map_err(ApiError::from)
}

/// Serialise a negotiated document and stamp its media type.
///
/// Serialisation is done eagerly so the negotiated media type, not
/// `application/json`, reaches the `Content-Type` header.
///
/// # Errors
/// Returns an internal [`ApiError`] when the document fails to serialise.
pub fn respond<T: Serialize>(
    representation: Representation,
    body: &T,
) -> Result<HttpResponse, ApiError> {
    let payload = serde_json::to_string(body).map_err(|err| {
        ApiError::from(DomainError::internal(format!(
            "response serialisation failed: {err}"
        )))
    })?;
    Ok(HttpResponse::Ok()
        .content_type(representation.media_type())
        .body(payload))
}

/// How specifically a media range matches a representation, or `None` when
/// it does not match at all.
///
/// Specificity ranks exact types above `application/json`, which in turn
/// ranks above wildcards, mirroring RFC 9110 precedence. Wildcards match
/// both representations; `application/json` selects the HAL default only.
fn match_specificity(range: &mime::Mime, representation: Representation) -> Option<u8> {
    if range.type_() == mime::APPLICATION {
        let exact = match representation {
            Representation::Hal => range.subtype() == "hal" && range.suffix() == Some(mime::JSON),
            Representation::JsonApi => {
                range.subtype() == "vnd.api" && range.suffix() == Some(mime::JSON)
            }
        };
        if exact {
            return Some(3);
        }
        if range.subtype() == mime::JSON && range.suffix().is_none() {
            return matches!(representation, Representation::Hal).then_some(2);
        }
        if range.subtype() == mime::STAR {
            return Some(1);
        }
        return None;
    }
    (range.type_() == mime::STAR).then_some(0)
}

/// Parse an RFC 9110 quality value into thousandths, avoiding floats.
///
/// Accepts `0`, `1`, and up to three decimal places; anything above `1` is
/// invalid.
fn q_millis(raw: &str) -> Option<u16> {
    let (int_part, frac_part) = raw.split_once('.').map_or((raw, ""), |parts| parts);
    if frac_part.len() > 3 || !frac_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match int_part {
        "0" => {
            let mut millis: u16 = 0;
            for (digit, scale) in frac_part.bytes().zip([100u16, 10, 1]) {
                millis += u16::from(digit - b'0') * scale;
            }
            Some(millis)
        }
        "1" => frac_part.bytes().all(|b| b == b'0').then_some(1000),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
