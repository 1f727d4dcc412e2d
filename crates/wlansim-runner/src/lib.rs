//! # wlansim-runner
//!
//! Scenario loading and timing computation for the wlansim CLI.
//!
//! A scenario is a YAML list of candidate transmissions. Each is resolved
//! against the standard mode catalog, pushed through the three-band
//! priority queue in its declared priority, and timed with an
//! [`AirtimeCalculator`]; the result is a list of serializable
//! [`TimingReport`] rows.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;
use wlansim_common::{FrequencyBand, SimTime};
use wlansim_phy::{AirtimeCalculator, FragmentRole, ModeCatalog, PhyError, Preamble, TxVector};
use wlansim_queue::{PfifoFastQueue, PriorityBand};

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur while loading or running a scenario.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// PHY timing error.
    #[error("PHY error: {0}")]
    Phy(#[from] PhyError),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The scenario is structurally invalid.
    #[error("invalid scenario: {0}")]
    InvalidScenario(String),
}

// ============================================================================
// Scenario Schema
// ============================================================================

/// A YAML scenario: a list of candidate transmissions to time.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// The transmissions to compute timings for.
    pub transmissions: Vec<TransmissionSpec>,
}

/// One candidate transmission.
///
/// Either `size_bytes` (a standalone frame) or `aggregate` (the per-fragment
/// byte sizes of an A-MPDU burst) must be given.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransmissionSpec {
    /// Display label; defaults to the mode name.
    #[serde(default)]
    pub label: Option<String>,
    /// Catalog name of the modulation mode.
    pub mode: String,
    /// Preamble of the (leading) frame.
    pub preamble: Preamble,
    /// Operating band.
    pub band: FrequencyBand,
    /// Payload size of a standalone frame.
    #[serde(default)]
    pub size_bytes: Option<u32>,
    /// Fragment sizes of an aggregate burst (at least two).
    #[serde(default)]
    pub aggregate: Option<Vec<u32>>,
    /// Number of spatial streams.
    #[serde(default = "default_nss")]
    pub nss: u8,
    /// Whether the short guard interval is used.
    #[serde(default)]
    pub short_guard_interval: bool,
    /// Queue priority; higher priorities are timed (and would be sent) first.
    #[serde(default = "default_priority")]
    pub priority: PriorityBand,
}

fn default_nss() -> u8 {
    1
}

fn default_priority() -> PriorityBand {
    PriorityBand::Normal
}

impl TransmissionSpec {
    fn display_label(&self) -> String {
        self.label.clone().unwrap_or_else(|| self.mode.clone())
    }
}

// ============================================================================
// Timing Reports
// ============================================================================

/// Timing of one fragment inside an aggregate.
#[derive(Debug, Clone, Serialize)]
pub struct FragmentTiming {
    /// Position of the fragment within the burst.
    pub role: FragmentRole,
    /// Fragment payload size.
    pub size_bytes: u32,
    /// Payload duration in microseconds.
    pub payload_us: f64,
}

/// Computed timing of one candidate transmission.
#[derive(Debug, Clone, Serialize)]
pub struct TimingReport {
    /// Display label.
    pub label: String,
    /// Mode name.
    pub mode: String,
    /// Total payload bytes.
    pub size_bytes: u32,
    /// Preamble plus header/training/signaling duration in microseconds.
    pub preamble_and_header_us: f64,
    /// Payload duration in microseconds.
    pub payload_us: f64,
    /// Total medium occupation in microseconds.
    pub total_us: f64,
    /// Per-fragment breakdown, present for aggregates.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fragments: Vec<FragmentTiming>,
}

// ============================================================================
// Scenario Execution
// ============================================================================

/// Load a scenario from a YAML file.
pub fn load_scenario(path: &Path) -> Result<Scenario, RunnerError> {
    let contents = std::fs::read_to_string(path)?;
    parse_scenario(&contents)
}

/// Parse a scenario from a YAML string.
pub fn parse_scenario(yaml: &str) -> Result<Scenario, RunnerError> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Compute the timing of every transmission in the scenario.
///
/// Transmissions are drained through the three-band priority queue, so the
/// report order is the order a strict-priority MAC would serve them in.
pub fn run_scenario(scenario: &Scenario) -> Result<Vec<TimingReport>, RunnerError> {
    let catalog = ModeCatalog::with_standard_modes();

    let mut queue = PfifoFastQueue::with_limit(scenario.transmissions.len().max(1));
    for spec in &scenario.transmissions {
        queue
            .enqueue(spec, spec.priority)
            .map_err(|_| RunnerError::InvalidScenario("priority queue overflow".into()))?;
    }

    let mut reports = Vec::new();
    while let Some(spec) = queue.dequeue() {
        reports.push(time_transmission(&catalog, spec)?);
    }
    Ok(reports)
}

/// Time a single transmission spec.
fn time_transmission(
    catalog: &ModeCatalog,
    spec: &TransmissionSpec,
) -> Result<TimingReport, RunnerError> {
    let label = spec.display_label();
    let mode = catalog.lookup(&spec.mode)?.clone();
    let mut txvector = TxVector::new(mode);
    txvector.nss = spec.nss;
    txvector.short_guard_interval = spec.short_guard_interval;

    let mut calculator = AirtimeCalculator::new();
    let preamble_and_header =
        wlansim_phy::preamble_and_header_duration(&txvector, spec.preamble);

    match (&spec.aggregate, spec.size_bytes) {
        (Some(sizes), None) => {
            if sizes.len() < 2 {
                return Err(RunnerError::InvalidScenario(format!(
                    "transmission '{label}' declares an aggregate of fewer than two fragments"
                )));
            }
            let mut fragments = Vec::with_capacity(sizes.len());
            let mut payload = SimTime::ZERO;
            for (index, &size) in sizes.iter().enumerate() {
                let (role, preamble) = if index == 0 {
                    (FragmentRole::First, spec.preamble)
                } else if index == sizes.len() - 1 {
                    (FragmentRole::Last, Preamble::None)
                } else {
                    (FragmentRole::Middle, Preamble::None)
                };
                let duration = calculator.payload_duration(
                    size, &txvector, preamble, spec.band, role, true,
                )?;
                debug!(label = %label, ?role, size, us = duration.as_micros_f64(), "fragment timed");
                fragments.push(FragmentTiming {
                    role,
                    size_bytes: size,
                    payload_us: duration.as_micros_f64(),
                });
                payload = payload + duration;
            }
            Ok(TimingReport {
                label,
                mode: spec.mode.clone(),
                size_bytes: sizes.iter().sum(),
                preamble_and_header_us: preamble_and_header.as_micros_f64(),
                payload_us: payload.as_micros_f64(),
                total_us: (preamble_and_header + payload).as_micros_f64(),
                fragments,
            })
        }
        (None, Some(size)) => {
            let payload = calculator.payload_duration(
                size,
                &txvector,
                spec.preamble,
                spec.band,
                FragmentRole::Standalone,
                false,
            )?;
            Ok(TimingReport {
                label,
                mode: spec.mode.clone(),
                size_bytes: size,
                preamble_and_header_us: preamble_and_header.as_micros_f64(),
                payload_us: payload.as_micros_f64(),
                total_us: (preamble_and_header + payload).as_micros_f64(),
                fragments: Vec::new(),
            })
        }
        _ => Err(RunnerError::InvalidScenario(format!(
            "transmission '{label}' needs exactly one of size_bytes or aggregate"
        ))),
    }
}
