//! # wlansim-phy
//!
//! 802.11/802.11ah PHY transmission timing model for discrete-event
//! simulation.
//!
//! This crate provides:
//! - The modulation mode catalog ([`ModeCatalog`], [`STANDARD_MODES`])
//! - Per-transmission configuration ([`TxVector`])
//! - PLCP preamble/header/training/signaling durations ([`plcp`])
//! - Payload and total durations with A-MPDU accounting
//!   ([`AirtimeCalculator`])
//! - The PHY state machine and listener contract ([`PhyStateMachine`],
//!   [`PhyListener`])
//! - Trace-sink fan-out ([`TraceRegistry`])
//!
//! The model is a pure timing oracle: it performs no I/O, never suspends,
//! and owns no clock. Callers feed it transmission descriptions and schedule
//! the returned durations themselves.

pub mod airtime;
pub mod modes;
pub mod plcp;
pub mod state;
pub mod trace;
pub mod txvector;

use thiserror::Error;

pub use airtime::{AirtimeCalculator, AmpduAccumulator, FragmentRole};
pub use modes::{CodeRate, ModeCatalog, ModeDescriptor, ModulationClass, STANDARD_MODES};
pub use plcp::{preamble_and_header_duration, Preamble};
pub use state::{ListenerId, PhyListener, PhyState, PhyStateMachine};
pub use trace::{SinkId, SniffMeta, TraceRegistry, TraceSink};
pub use txvector::TxVector;

// Re-export common types used throughout the API.
pub use wlansim_common::{DropReason, FrequencyBand, SimTime};

// ============================================================================
// Error Types
// ============================================================================

/// PHY timing model errors.
///
/// All of these are fatal at the call site: they signal configuration or
/// accounting mistakes in the caller, never transient conditions, and are
/// not retried inside the model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhyError {
    /// No mode of this name is registered.
    #[error("unknown mode: {0}")]
    UnknownMode(String),

    /// A mode of this name is already registered.
    #[error("duplicate mode: {0}")]
    DuplicateMode(String),

    /// The modulation class has no timing formulas.
    #[error("unsupported modulation class: {0:?}")]
    UnsupportedModulationClass(ModulationClass),

    /// The fragment role and preamble contradict each other: leading
    /// fragments need a real preamble, continuation fragments none.
    #[error("invalid combination of fragment role {role:?} and preamble {preamble:?}")]
    InvalidFragmentCombination {
        /// The offending fragment role.
        role: FragmentRole,
        /// The offending preamble.
        preamble: Preamble,
    },

    /// A Last fragment found more symbols accumulated than the whole
    /// aggregate requires; the accumulator was not fed matching
    /// First/Middle calls.
    #[error(
        "aggregate accounting underflow: {accumulated} symbols accumulated, \
         whole aggregate needs {required}"
    )]
    AggregationConsistency {
        /// Symbol count of the whole aggregate.
        required: u64,
        /// Symbols accumulated across prior fragments.
        accumulated: u64,
    },
}
