//! Typed response envelope.
//!
//! The API wraps every payload as `{"data": ..., "pagination": ...}`. A
//! [`Response`] holds the decoded payload together with the status and headers
//! of the HTTP response it came from.

use chrono::{DateTime, Utc};
use reqwest::{header::HeaderMap, StatusCode};
use serde::{Deserialize, Serialize};

const HEADER_RATE_LIMIT: &str = "X-RateLimit-Limit";
const HEADER_RATE_LIMIT_REMAINING: &str = "X-RateLimit-Remaining";
const HEADER_RATE_LIMIT_RESET: &str = "X-RateLimit-Reset";

/// Pagination block returned by list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: u32,
    pub per_page: u32,
    pub total_entries: u64,
    pub total_pages: u32,
}

#[derive(Deserialize)]
pub(crate) struct Envelope<T> {
    pub(crate) data: T,
    #[serde(default)]
    pub(crate) pagination: Option<Pagination>,
}

/// A decoded API response.
#[derive(Debug, Clone)]
pub struct Response<T> {
    pub data: T,
    pub pagination: Option<Pagination>,
    status: StatusCode,
    headers: HeaderMap,
}

impl<T> Response<T> {
    pub(crate) fn new(
        data: T,
        pagination: Option<Pagination>,
        status: StatusCode,
        headers: HeaderMap,
    ) -> Self {
        Self {
            data,
            pagination,
            status,
            headers,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Raw response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Maximum number of requests allowed in the current window.
    pub fn rate_limit(&self) -> Option<u32> {
        self.header_number(HEADER_RATE_LIMIT)
    }

    /// Requests left in the current window.
    pub fn rate_limit_remaining(&self) -> Option<u32> {
        self.header_number(HEADER_RATE_LIMIT_REMAINING)
    }

    /// When the current window resets.
    pub fn rate_limit_reset(&self) -> Option<DateTime<Utc>> {
        let seconds: i64 = self.header_number(HEADER_RATE_LIMIT_RESET)?;
        DateTime::from_timestamp(seconds, 0)
    }

    fn header_number<N: std::str::FromStr>(&self, name: &str) -> Option<N> {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok())
    }
}
