//! Trial period resolution.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// Unit the processor uses for trial durations. Only days are supported.
pub const TRIAL_DURATION_UNIT: &str = "day";

/// Trial configuration as accumulated by the subscription builder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialSettings {
    /// Requested trial length in days.
    pub days: Option<u32>,

    /// Forces a zero-length trial, overriding `days`.
    pub skip: bool,
}

/// The three trial fields sent to the processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialTerms {
    pub trial_period: bool,
    pub trial_duration: u32,
    pub trial_duration_unit: &'static str,
}

impl TrialSettings {
    /// Resolves the payload trial fields.
    ///
    /// `skip` always wins; otherwise a configured day count enables the trial.
    pub fn terms(&self) -> TrialTerms {
        let (trial_period, trial_duration) = match (self.skip, self.days) {
            (true, _) => (false, 0),
            (false, Some(days)) => (true, days),
            (false, None) => (false, 0),
        };

        TrialTerms {
            trial_period,
            trial_duration,
            trial_duration_unit: TRIAL_DURATION_UNIT,
        }
    }

    /// When the local record's trial ends, relative to `now`.
    pub fn ends_at(&self, now: Timestamp) -> Option<Timestamp> {
        if self.skip {
            return None;
        }
        self.days.map(|days| now.add_days(i64::from(days)))
    }
}
