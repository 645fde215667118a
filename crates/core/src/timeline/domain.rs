//! Shared time domain for a report
//!
//! The domain is the envelope of every session, widened on both sides by
//! `padding_ratio` of its duration, with `tick_count` evenly spaced ticks
//! from start to end inclusive.

use chrono::{DateTime, Duration, Utc};
use meetline_domain::constants::{MAX_TICK_COUNT, MIN_TICK_COUNT};
use meetline_domain::{ReportEntry, TimeDomain, TimelineConfig};

use super::error::TimelineError;

/// Compute the padded domain and axis ticks for all sessions in `entries`.
///
/// Returns [`TimelineError::EmptyDataset`] when no entry has a session.
/// When every session collapses to a single instant the padding falls back
/// to `zero_duration_pad_secs` on each side.
pub fn compute_domain(
    entries: &[ReportEntry],
    config: &TimelineConfig,
) -> Result<TimeDomain, TimelineError> {
    check_config(config)?;

    let mut sessions = entries.iter().flat_map(|entry| entry.sessions.iter());
    let first = sessions.next().ok_or(TimelineError::EmptyDataset)?;
    let (raw_min, raw_max) = sessions.fold((first.start_time, first.end_time), |(lo, hi), s| {
        (lo.min(s.start_time), hi.max(s.end_time))
    });

    let pad = padding(raw_max - raw_min, config)?;
    let start = raw_min.checked_sub_signed(pad).ok_or(TimelineError::DomainOutOfRange)?;
    let end = raw_max.checked_add_signed(pad).ok_or(TimelineError::DomainOutOfRange)?;
    let ticks = evenly_spaced(start, end, config.tick_count)?;

    Ok(TimeDomain { start, end, ticks })
}

pub(crate) fn check_config(config: &TimelineConfig) -> Result<(), TimelineError> {
    if !(MIN_TICK_COUNT..=MAX_TICK_COUNT).contains(&config.tick_count) {
        return Err(TimelineError::InvalidTickCount(config.tick_count));
    }
    if !config.padding_ratio.is_finite() || config.padding_ratio < 0.0 {
        return Err(TimelineError::InvalidPaddingRatio(config.padding_ratio));
    }
    Ok(())
}

/// Padding applied on each side of the raw envelope.
///
/// Computed in nanoseconds and rounded up, so a positive ratio over any
/// positive duration yields a strictly wider domain.
fn padding(duration: Duration, config: &TimelineConfig) -> Result<Duration, TimelineError> {
    if duration.is_zero() {
        return i64::try_from(config.zero_duration_pad_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .ok_or(TimelineError::DomainOutOfRange);
    }

    let nanos = duration.num_nanoseconds().ok_or(TimelineError::DomainOutOfRange)?;
    let pad_ns = (nanos as f64 * config.padding_ratio).ceil();
    if pad_ns >= i64::MAX as f64 {
        return Err(TimelineError::DomainOutOfRange);
    }
    Ok(Duration::nanoseconds(pad_ns as i64))
}

/// `count` ticks with `tick[i] = start + span * i / (count - 1)`, exact to
/// the nanosecond.
fn evenly_spaced(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    count: usize,
) -> Result<Vec<DateTime<Utc>>, TimelineError> {
    let span_ns =
        i128::from((end - start).num_nanoseconds().ok_or(TimelineError::DomainOutOfRange)?);
    let intervals = (count - 1) as i128;

    (0..count)
        .map(|i| {
            let offset_ns = i64::try_from(span_ns * i as i128 / intervals)
                .map_err(|_| TimelineError::DomainOutOfRange)?;
            start
                .checked_add_signed(Duration::nanoseconds(offset_ns))
                .ok_or(TimelineError::DomainOutOfRange)
        })
        .collect()
}
