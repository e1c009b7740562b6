//! Dose schedules and steady-state regimens
//!
//! A schedule is the "WHAT to evaluate" object: an ordered sequence of dose
//! events, each naming its delivery model, plus the time-encoding
//! convention. Validation and time-base conversion happen here, before any
//! closed form runs — the solvers only ever see valid, absolute-time events.

use crate::models::ModelId;

// =================================================================================================
// Dose Events
// =================================================================================================

/// One scheduled administration
///
/// # Validity
///
/// An event is valid when `amount > 0` and `time` is finite. Invalid events
/// are filtered out before evaluation — they contribute nothing and are
/// never passed to a solver.
///
/// # Visibility Flags
///
/// `curve_visible` and `uncertainty_visible` mark whether the event
/// participates in the rendered mean curve and in the uncertainty cloud
/// respectively. They do not affect scalar superposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoseEvent {
    /// Administration time \[days\] — absolute, or gap since the previous
    /// event under interval encoding
    pub time: f64,

    /// Administered amount \[mg\]
    pub amount: f64,

    /// Delivery model of this administration
    pub model: ModelId,

    /// Whether the event contributes to the mean curve
    pub curve_visible: bool,

    /// Whether the event contributes to the uncertainty cloud
    pub uncertainty_visible: bool,
}

impl DoseEvent {
    /// Create an event visible in both the curve and the cloud
    pub fn new(time: f64, amount: f64, model: ModelId) -> Self {
        Self {
            time,
            amount,
            model,
            curve_visible: true,
            uncertainty_visible: true,
        }
    }

    /// Set the visibility flags
    pub fn with_visibility(mut self, curve: bool, uncertainty: bool) -> Self {
        self.curve_visible = curve;
        self.uncertainty_visible = uncertainty;
        self
    }

    /// Whether the event may enter evaluation
    pub fn is_valid(&self) -> bool {
        self.amount > 0.0 && self.time.is_finite()
    }
}

// =================================================================================================
// Time Encoding
// =================================================================================================

/// How event times are measured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeEncoding {
    /// Every time is measured from the same origin
    Absolute,

    /// Every time is the gap since the previous event; the first event's
    /// value doubles as its absolute offset
    Interval,
}

// =================================================================================================
// Schedule
// =================================================================================================

/// Ordered sequence of dose events
///
/// The engine does not retain schedules between calls: a schedule is built
/// by the caller, handed to an evaluation, and dropped.
///
/// # Interval Conversion
///
/// Interval-encoded times convert to absolute by running cumulative sum.
/// The first event keeps its own literal time coordinate — the converted
/// origin is the first event's offset, not zero:
///
/// ```rust
/// use pk_rs::models::ModelId;
/// use pk_rs::schedule::{DoseEvent, Schedule};
///
/// let id = ModelId::EstradiolValerateIm;
/// let schedule = Schedule::interval_encoded(vec![
///     DoseEvent::new(2.0, 4.0, id),
///     DoseEvent::new(3.0, 4.0, id),
///     DoseEvent::new(5.0, 4.0, id),
/// ]);
///
/// let times: Vec<f64> = schedule.absolute().events().iter().map(|e| e.time).collect();
/// assert_eq!(times, vec![2.0, 5.0, 10.0]);
/// ```
#[derive(Debug, Clone)]
pub struct Schedule {
    events: Vec<DoseEvent>,
    encoding: TimeEncoding,
}

impl Schedule {
    /// Create a schedule with absolute event times
    pub fn new(events: Vec<DoseEvent>) -> Self {
        Self {
            events,
            encoding: TimeEncoding::Absolute,
        }
    }

    /// Create a schedule with interval-encoded event times
    pub fn interval_encoded(events: Vec<DoseEvent>) -> Self {
        Self {
            events,
            encoding: TimeEncoding::Interval,
        }
    }

    /// The events, in schedule order
    pub fn events(&self) -> &[DoseEvent] {
        &self.events
    }

    /// Time-encoding convention of this schedule
    pub fn encoding(&self) -> TimeEncoding {
        self.encoding
    }

    /// Number of events (valid or not)
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the schedule holds no events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Convert to absolute time encoding
    ///
    /// Absolute schedules pass through unchanged; interval schedules get a
    /// running cumulative sum over the time column (other fields untouched).
    pub fn absolute(&self) -> Schedule {
        match self.encoding {
            TimeEncoding::Absolute => self.clone(),
            TimeEncoding::Interval => {
                let mut running = 0.0;
                let events = self
                    .events
                    .iter()
                    .map(|event| {
                        running += event.time;
                        DoseEvent {
                            time: running,
                            ..*event
                        }
                    })
                    .collect();
                Schedule {
                    events,
                    encoding: TimeEncoding::Absolute,
                }
            }
        }
    }

    /// Iterate over the valid events only
    pub fn valid_events(&self) -> impl Iterator<Item = &DoseEvent> {
        self.events.iter().filter(|event| event.is_valid())
    }

    /// Schedule restricted to curve-visible events
    pub fn curve_visible(&self) -> Schedule {
        Schedule {
            events: self
                .events
                .iter()
                .filter(|event| event.curve_visible)
                .copied()
                .collect(),
            encoding: self.encoding,
        }
    }

    /// Schedule restricted to uncertainty-visible events
    pub fn uncertainty_visible(&self) -> Schedule {
        Schedule {
            events: self
                .events
                .iter()
                .filter(|event| event.uncertainty_visible)
                .copied()
                .collect(),
            encoding: self.encoding,
        }
    }
}

// =================================================================================================
// Steady-State Regimen
// =================================================================================================

/// A single repeating dose: `dose` of `model` every `interval` days
///
/// Trough, average and waveform values all derive analytically from the
/// periodic closed forms — no cycle-by-cycle simulation is involved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteadyStateRegime {
    /// Repeated dose amount \[mg\]
    pub dose: f64,

    /// Repetition interval T \[days\]
    pub interval: f64,

    /// Delivery model
    pub model: ModelId,
}

impl SteadyStateRegime {
    /// Create a regimen
    pub fn new(dose: f64, interval: f64, model: ModelId) -> Self {
        Self {
            dose,
            interval,
            model,
        }
    }

    /// Validate that the regimen can be evaluated
    pub fn validate(&self) -> Result<(), String> {
        if !self.dose.is_finite() || self.dose <= 0.0 {
            return Err(format!("Regimen dose must be positive, got {}", self.dose));
        }
        if !self.interval.is_finite() || self.interval <= 0.0 {
            return Err(format!(
                "Regimen interval must be positive, got {}",
                self.interval
            ));
        }
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
