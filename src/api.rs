//! Client for the remote sun computation service.
//!
//! The service exposes two read-only POST-JSON endpoints under a common base
//! path: time-zone-for-location and sunrise/sunset-for-location-and-date.
//! This module defines the wire types, the [`SunApi`] trait seam the
//! orchestrator is programmed against (so tests can substitute a double),
//! and the blocking HTTP implementation used in production.
//!
//! The client is deliberately minimal: no retries, no deduplication, no
//! cancellation. Ordering discipline across in-flight requests is the
//! orchestrator's job.

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{EVENT_TIMES_ENDPOINT, REQUEST_TIMEOUT_SECS, TIMEZONE_ENDPOINT};
use crate::coordinates::Coordinate;

/// Sunrise and sunset for one location and date.
///
/// `None` means the event does not occur there on that date (polar day or
/// night). It is a first-class result, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct EventTimePair {
    pub sunrise: Option<DateTime<Utc>>,
    pub sunset: Option<DateTime<Utc>>,
}

/// Body of the event-times request.
#[derive(Debug, Serialize)]
struct EventTimesRequest {
    location: Coordinate,
    datetime: String,
}

impl EventTimesRequest {
    /// The selected calendar date travels as its midnight-UTC instant.
    fn new(location: Coordinate, date: NaiveDate) -> Self {
        let datetime = date.and_time(NaiveTime::MIN).and_utc().to_rfc3339();
        Self { location, datetime }
    }
}

/// Zone-identifier payload. The backend may answer with a bare JSON string
/// or wrap it in an object; both decode to the identifier.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TimeZonePayload {
    Bare(String),
    Wrapped { timezone: String },
}

impl TimeZonePayload {
    fn into_identifier(self) -> String {
        match self {
            Self::Bare(identifier) | Self::Wrapped {
                timezone: identifier,
            } => identifier,
        }
    }
}

/// The two remote computations the application depends on.
#[cfg_attr(test, mockall::automock)]
pub trait SunApi: Send + Sync {
    /// IANA zone identifier for the location.
    fn fetch_timezone(&self, coordinate: Coordinate) -> Result<String>;

    /// Sunrise/sunset pair for the location on the given date.
    fn fetch_event_times(&self, coordinate: Coordinate, date: NaiveDate)
    -> Result<EventTimePair>;
}

/// Blocking HTTP implementation of [`SunApi`].
pub struct HttpSunApi {
    base_url: String,
    agent: ureq::Agent,
}

impl HttpSunApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build();
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            agent,
        }
    }

    /// Endpoint URLs keep the backend's trailing slash.
    fn endpoint_url(&self, segments: &[&str]) -> String {
        format!("{}/{}/", self.base_url, segments.join("/"))
    }
}

impl SunApi for HttpSunApi {
    fn fetch_timezone(&self, coordinate: Coordinate) -> Result<String> {
        let url = self.endpoint_url(TIMEZONE_ENDPOINT);
        let payload: TimeZonePayload = self
            .agent
            .post(&url)
            .send_json(coordinate)
            .with_context(|| format!("time-zone request to {url} failed"))?
            .into_json()
            .context("could not decode time-zone response")?;
        Ok(payload.into_identifier())
    }

    fn fetch_event_times(
        &self,
        coordinate: Coordinate,
        date: NaiveDate,
    ) -> Result<EventTimePair> {
        let url = self.endpoint_url(EVENT_TIMES_ENDPOINT);
        let pair: EventTimePair = self
            .agent
            .post(&url)
            .send_json(EventTimesRequest::new(coordinate, date))
            .with_context(|| format!("event-times request to {url} failed"))?
            .into_json()
            .context("could not decode event-times response")?;
        Ok(pair)
    }
}
