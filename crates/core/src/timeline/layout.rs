//! Session bar geometry against a time domain

use chrono::{DateTime, Duration, Utc};
use meetline_domain::{Session, SessionBar, TimeDomain};

/// Place `session` on `domain` as percentages of the domain span.
///
/// The width is floored at `min_bar_width_percent` so instantaneous sessions
/// stay visible. A zero-length domain places every bar at the left edge.
pub fn layout_session(
    session: &Session,
    domain: &TimeDomain,
    min_bar_width_percent: f64,
) -> SessionBar {
    let total_span = nanos(domain.span());
    if total_span <= 0.0 {
        return SessionBar { left_fraction: 0.0, width_fraction: min_bar_width_percent };
    }

    let left_fraction = nanos(session.start_time - domain.start) / total_span * 100.0;
    let width_fraction =
        (nanos(session.duration()) / total_span * 100.0).max(min_bar_width_percent);

    SessionBar { left_fraction, width_fraction }
}

/// Position of an instant along the domain, in percent.
pub(crate) fn position_percent(at: DateTime<Utc>, domain: &TimeDomain) -> f64 {
    let total_span = nanos(domain.span());
    if total_span <= 0.0 {
        return 0.0;
    }
    nanos(at - domain.start) / total_span * 100.0
}

fn nanos(delta: Duration) -> f64 {
    delta
        .num_nanoseconds()
        .map_or_else(|| delta.num_milliseconds() as f64 * 1_000_000.0, |n| n as f64)
}
