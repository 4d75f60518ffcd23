//! `X-Day` response decoration
//!
//! Every response from the API carries an `X-Day` header with the full
//! English name of the current server-local weekday. This is a deliberate,
//! documented side channel of the original API contract, so it is modeled as
//! an explicit decoration step applied uniformly after the handlers, not
//! buried inside a serializer. The value is recomputed per response and
//! intentionally tied to wall-clock time, never cached.

use axum::extract::Request;
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use chrono::{DateTime, Local, TimeZone};

/// The decoration header name
pub const X_DAY: HeaderName = HeaderName::from_static("x-day");

/// Full English weekday name ("Monday" .. "Sunday") for the given instant.
fn day_name<Tz: TimeZone>(now: DateTime<Tz>) -> String {
    // %A always renders the English name regardless of locale
    now.date_naive().format("%A").to_string()
}

/// Weekday name for the server-local current date.
pub fn current_day_name() -> String {
    day_name(Local::now())
}

/// Axum middleware inserting the `X-Day` header into every response.
pub async fn attach_day_header(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&current_day_name()) {
        response.headers_mut().insert(X_DAY, value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn at(date: &str) -> DateTime<Utc> {
        format!("{}T12:00:00Z", date).parse().unwrap()
    }

    #[test]
    fn test_day_name_full_english_form() {
        assert_eq!(day_name(at("2024-01-01")), "Monday");
        assert_eq!(day_name(at("2024-01-02")), "Tuesday");
        assert_eq!(day_name(at("2024-01-06")), "Saturday");
        assert_eq!(day_name(at("2024-01-07")), "Sunday");
    }

    #[test]
    fn test_current_day_name_is_a_weekday() {
        let names = [
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ];
        assert!(names.contains(&current_day_name().as_str()));
    }

    #[test]
    fn test_header_value_is_valid() {
        assert!(HeaderValue::from_str(&current_day_name()).is_ok());
    }
}
