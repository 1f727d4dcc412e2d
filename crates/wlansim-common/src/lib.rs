//! # wlansim-common
//!
//! Common types for the wlansim PHY timing framework.
//!
//! This crate provides:
//! - Time representation ([`SimTime`])
//! - Frequency band classification ([`FrequencyBand`])
//! - Packet drop reasons ([`DropReason`])

use serde::{Deserialize, Serialize};

// ============================================================================
// Time Types
// ============================================================================

/// A duration (or instant relative to simulation start) in nanoseconds.
///
/// Nanosecond resolution is required because short-guard-interval OFDM
/// symbols last 3.6 us and cannot be represented in whole microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct SimTime(u64);

impl SimTime {
    /// Zero time.
    pub const ZERO: SimTime = SimTime(0);

    /// Create from nanoseconds.
    pub const fn from_nanos(ns: u64) -> Self {
        SimTime(ns)
    }

    /// Create from microseconds.
    pub const fn from_micros(us: u64) -> Self {
        SimTime(us * 1_000)
    }

    /// Create from milliseconds.
    pub const fn from_millis(ms: u64) -> Self {
        SimTime(ms * 1_000_000)
    }

    /// Create from seconds (float).
    pub fn from_secs(s: f64) -> Self {
        SimTime((s * 1_000_000_000.0) as u64)
    }

    /// Get as nanoseconds.
    pub fn as_nanos(&self) -> u64 {
        self.0
    }

    /// Get as whole microseconds (truncating).
    pub fn as_micros(&self) -> u64 {
        self.0 / 1_000
    }

    /// Get as microseconds (float).
    pub fn as_micros_f64(&self) -> f64 {
        self.0 as f64 / 1_000.0
    }

    /// Get as whole milliseconds (truncating).
    pub fn as_millis(&self) -> u64 {
        self.0 / 1_000_000
    }

    /// Get as seconds (float).
    pub fn as_secs_f64(&self) -> f64 {
        self.0 as f64 / 1_000_000_000.0
    }

    /// Add a duration, failing on overflow.
    pub fn checked_add(&self, duration: SimTime) -> Option<SimTime> {
        self.0.checked_add(duration.0).map(SimTime)
    }

    /// Subtract a duration, failing on underflow.
    pub fn checked_sub(&self, duration: SimTime) -> Option<SimTime> {
        self.0.checked_sub(duration.0).map(SimTime)
    }

    /// Saturating subtraction.
    pub fn saturating_sub(&self, duration: SimTime) -> SimTime {
        SimTime(self.0.saturating_sub(duration.0))
    }
}

impl std::ops::Add for SimTime {
    type Output = SimTime;

    fn add(self, rhs: Self) -> Self::Output {
        SimTime(self.0 + rhs.0)
    }
}

impl std::ops::Sub for SimTime {
    type Output = SimTime;

    fn sub(self, rhs: Self) -> Self::Output {
        SimTime(self.0.saturating_sub(rhs.0))
    }
}

impl std::ops::Mul<u64> for SimTime {
    type Output = SimTime;

    fn mul(self, rhs: u64) -> Self::Output {
        SimTime(self.0 * rhs)
    }
}

impl std::fmt::Display for SimTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ns", self.0)
    }
}

// ============================================================================
// Frequency Band
// ============================================================================

/// Operating band of a transmission.
///
/// The band decides whether the 6 us OFDM signal extension applies to the
/// payload duration (2.4 GHz only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyBand {
    /// Sub-1GHz band (802.11ah).
    SubGhz,
    /// The 2.4 GHz ISM band.
    TwoPointFourGhz,
    /// The 5 GHz band.
    FiveGhz,
}

impl FrequencyBand {
    /// Classify a channel center frequency given in MHz.
    pub fn from_center_frequency_mhz(freq_mhz: f64) -> Self {
        if freq_mhz < 1_000.0 {
            FrequencyBand::SubGhz
        } else if (2_400.0..=2_500.0).contains(&freq_mhz) {
            FrequencyBand::TwoPointFourGhz
        } else {
            FrequencyBand::FiveGhz
        }
    }
}

// ============================================================================
// Drop Reasons
// ============================================================================

/// Reason a packet was dropped, carried by the drop trace notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// No specific reason recorded.
    Unknown,
    /// The transmit queue was full.
    QueueOverflow,
    /// The PHY was not in a receivable state.
    NotInRxState,
    /// The PHY was asleep.
    Sleeping,
    /// Signal below the reception threshold.
    WeakSignal,
    /// Destroyed by a colliding transmission.
    Collision,
}

impl DropReason {
    /// Static label for metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            DropReason::Unknown => "unknown",
            DropReason::QueueOverflow => "queue_overflow",
            DropReason::NotInRxState => "not_in_rx_state",
            DropReason::Sleeping => "sleeping",
            DropReason::WeakSignal => "weak_signal",
            DropReason::Collision => "collision",
        }
    }
}
