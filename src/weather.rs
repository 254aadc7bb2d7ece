//! Simulated weather for the footer display.
//!
//! No real weather source is consulted: once a geolocation position is
//! acquired, a report is drawn from a season bucket keyed off the current
//! calendar month after a fixed fake-fetch delay. The provider is modeled
//! as an explicit state machine with guarded transitions so the legal
//! lifecycle (and nothing else) is expressible.

use std::ops::Range;

use chrono::{Datelike, Local};
use thiserror::Error;

/// Simulated fetch latency between position acquisition and the report.
pub const WEATHER_DELAY_MS: f64 = 1500.0;

/// Reverse geocoding is out of scope; every report carries this name.
pub const PLACEHOLDER_LOCATION: &str = "Your City";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Bucket for a 1-based calendar month.
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => Season::Winter,
        }
    }

    pub fn current() -> Self {
        Self::from_month(Local::now().month())
    }

    pub fn temperature_range(self) -> Range<i32> {
        match self {
            Season::Spring => 15..25,
            Season::Summer => 25..35,
            Season::Autumn => 10..20,
            Season::Winter => 0..10,
        }
    }

    pub fn condition(self) -> &'static str {
        match self {
            Season::Spring => "Partly Cloudy",
            Season::Summer => "Sunny",
            Season::Autumn => "Cloudy",
            Season::Winter => "Light Snow",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Season::Spring => "02d",
            Season::Summer => "01d",
            Season::Autumn => "03d",
            Season::Winter => "13d",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReport {
    pub temperature: i32,
    pub condition: &'static str,
    pub icon: &'static str,
    pub location: &'static str,
}

/// Draws a report from the season's temperature range.
pub fn simulate_report(season: Season, rng: &mut fastrand::Rng) -> WeatherReport {
    WeatherReport {
        temperature: rng.i32(season.temperature_range()),
        condition: season.condition(),
        icon: season.icon(),
        location: PLACEHOLDER_LOCATION,
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherError {
    #[error("Unable to get location")]
    PositionDenied,
    #[error("Geolocation not supported")]
    Unsupported,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("weather provider cannot `{event}` while {state}")]
pub struct TransitionError {
    state: &'static str,
    event: &'static str,
}

/// Provider lifecycle. Errored and Populated are terminal; there is no
/// retry path.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WeatherState {
    #[default]
    Idle,
    AwaitingPosition,
    AwaitingReport,
    Populated(WeatherReport),
    Errored(WeatherError),
}

impl WeatherState {
    fn name(&self) -> &'static str {
        match self {
            WeatherState::Idle => "Idle",
            WeatherState::AwaitingPosition => "AwaitingPosition",
            WeatherState::AwaitingReport => "AwaitingReport",
            WeatherState::Populated(_) => "Populated",
            WeatherState::Errored(_) => "Errored",
        }
    }

    fn rejected(&self, event: &'static str) -> TransitionError {
        TransitionError {
            state: self.name(),
            event,
        }
    }

    /// Idle → AwaitingPosition, issued when the geolocation request goes out.
    pub fn request_position(&mut self) -> Result<(), TransitionError> {
        match self {
            WeatherState::Idle => {
                *self = WeatherState::AwaitingPosition;
                Ok(())
            }
            other => Err(other.rejected("request_position")),
        }
    }

    /// AwaitingPosition → AwaitingReport, issued on the geolocation callback.
    pub fn position_acquired(&mut self) -> Result<(), TransitionError> {
        match self {
            WeatherState::AwaitingPosition => {
                *self = WeatherState::AwaitingReport;
                Ok(())
            }
            other => Err(other.rejected("position_acquired")),
        }
    }

    /// Denial or missing capability; legal before a position arrives.
    pub fn position_failed(&mut self, error: WeatherError) -> Result<(), TransitionError> {
        match self {
            WeatherState::Idle | WeatherState::AwaitingPosition => {
                *self = WeatherState::Errored(error);
                Ok(())
            }
            other => Err(other.rejected("position_failed")),
        }
    }

    /// AwaitingReport → Populated, issued when the simulated fetch fires.
    pub fn report_ready(&mut self, report: WeatherReport) -> Result<(), TransitionError> {
        match self {
            WeatherState::AwaitingReport => {
                *self = WeatherState::Populated(report);
                Ok(())
            }
            other => Err(other.rejected("report_ready")),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(
            self,
            WeatherState::Idle | WeatherState::AwaitingPosition | WeatherState::AwaitingReport
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> WeatherReport {
        simulate_report(Season::Summer, &mut fastrand::Rng::with_seed(7))
    }

    #[test]
    fn test_season_buckets() {
        assert_eq!(Season::from_month(3), Season::Spring);
        assert_eq!(Season::from_month(5), Season::Spring);
        assert_eq!(Season::from_month(6), Season::Summer);
        assert_eq!(Season::from_month(8), Season::Summer);
        assert_eq!(Season::from_month(9), Season::Autumn);
        assert_eq!(Season::from_month(11), Season::Autumn);
        assert_eq!(Season::from_month(12), Season::Winter);
        assert_eq!(Season::from_month(1), Season::Winter);
        assert_eq!(Season::from_month(2), Season::Winter);
    }

    #[test]
    fn test_simulated_temperature_stays_in_season_range() {
        let mut rng = fastrand::Rng::with_seed(42);
        for season in [Season::Spring, Season::Summer, Season::Autumn, Season::Winter] {
            for _ in 0..100 {
                let report = simulate_report(season, &mut rng);
                assert!(
                    season.temperature_range().contains(&report.temperature),
                    "{:?} produced {}",
                    season,
                    report.temperature
                );
                assert_eq!(report.condition, season.condition());
                assert_eq!(report.icon, season.icon());
                assert_eq!(report.location, PLACEHOLDER_LOCATION);
            }
        }
    }

    #[test]
    fn test_happy_path_passes_through_both_awaiting_states() {
        let mut state = WeatherState::default();
        assert!(state.is_loading());

        state.request_position().unwrap();
        assert_eq!(state, WeatherState::AwaitingPosition);

        state.position_acquired().unwrap();
        assert_eq!(state, WeatherState::AwaitingReport);

        state.report_ready(report()).unwrap();
        assert!(matches!(state, WeatherState::Populated(_)));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_populated_is_unreachable_without_position() {
        // straight from Idle
        let mut state = WeatherState::default();
        assert!(state.report_ready(report()).is_err());
        assert_eq!(state, WeatherState::Idle);

        // from AwaitingPosition, skipping the acquired step
        let mut state = WeatherState::default();
        state.request_position().unwrap();
        assert!(state.report_ready(report()).is_err());
        assert_eq!(state, WeatherState::AwaitingPosition);
    }

    #[test]
    fn test_denial_errors_without_visiting_populated() {
        let mut state = WeatherState::default();
        state.request_position().unwrap();
        state.position_failed(WeatherError::PositionDenied).unwrap();
        assert_eq!(state, WeatherState::Errored(WeatherError::PositionDenied));

        // terminal: a late position or report changes nothing
        assert!(state.position_acquired().is_err());
        assert!(state.report_ready(report()).is_err());
        assert_eq!(state, WeatherState::Errored(WeatherError::PositionDenied));
    }

    #[test]
    fn test_missing_capability_errors_directly_from_idle() {
        let mut state = WeatherState::default();
        state.position_failed(WeatherError::Unsupported).unwrap();
        assert_eq!(state, WeatherState::Errored(WeatherError::Unsupported));
    }

    #[test]
    fn test_populated_is_terminal() {
        let mut state = WeatherState::default();
        state.request_position().unwrap();
        state.position_acquired().unwrap();
        state.report_ready(report()).unwrap();

        assert!(state.position_failed(WeatherError::PositionDenied).is_err());
        assert!(state.request_position().is_err());
        assert!(matches!(state, WeatherState::Populated(_)));
    }

    #[test]
    fn test_duplicate_events_are_rejected() {
        let mut state = WeatherState::default();
        state.request_position().unwrap();
        assert!(state.request_position().is_err());

        state.position_acquired().unwrap();
        // a second geolocation callback does not restart the fetch
        assert!(state.position_acquired().is_err());
        assert_eq!(state, WeatherState::AwaitingReport);
    }

    #[test]
    fn test_transition_error_names_state_and_event() {
        let mut state = WeatherState::default();
        let err = state.position_acquired().unwrap_err();
        assert_eq!(
            err.to_string(),
            "weather provider cannot `position_acquired` while Idle"
        );
    }
}
