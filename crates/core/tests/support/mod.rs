//! Shared test helpers for `meetline-core` integration tests.
//!
//! These helpers provide reusable fixtures and a lightweight in-memory
//! provider so report tests can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod provider;

use chrono::{DateTime, TimeZone, Utc};
use meetline_domain::{AccessToken, Participant, ParticipantIdentity, Session};

pub fn token() -> AccessToken {
    AccessToken::new("integration-token").unwrap()
}

pub fn at(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, hour, min, 0).unwrap()
}

pub fn session(start: (u32, u32), end: (u32, u32)) -> Session {
    Session::new(at(start.0, start.1), at(end.0, end.1)).unwrap()
}

pub fn signed_in(name: &str, display_name: &str) -> Participant {
    Participant::new(
        name,
        ParticipantIdentity::SignedIn { display_name: Some(display_name.into()), user_key: None },
    )
}

pub fn unidentified(name: &str) -> Participant {
    Participant::new(name, ParticipantIdentity::Unidentified)
}
