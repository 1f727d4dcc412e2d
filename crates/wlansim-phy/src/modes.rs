//! Modulation mode descriptors and the process-wide mode catalog.
//!
//! Every rate the standard defines is described by an immutable
//! [`ModeDescriptor`]. The full set lives in the const [`STANDARD_MODES`]
//! table and is loaded into a [`ModeCatalog`] in one explicit population
//! step before the simulation starts; nothing is registered afterwards.

use crate::PhyError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;

// ============================================================================
// Modulation Classes and Code Rates
// ============================================================================

/// Modulation class, one per clause of the standard.
///
/// The timing formulas cover `Dsss`, `ErpOfdm`, `Ofdm`, `Ht` and `S1g`.
/// The remaining legacy classes can be described in the catalog but are
/// rejected by the payload duration engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModulationClass {
    /// Clause 15/16 direct-sequence spread spectrum.
    Dsss,
    /// Clause 19 extended-rate OFDM (2.4 GHz).
    ErpOfdm,
    /// Clause 18 OFDM (5/10/20 MHz).
    Ofdm,
    /// Clause 20 high throughput.
    Ht,
    /// Clause 24 sub-1GHz (802.11ah).
    S1g,
    /// Infrared, no timing support.
    Ir,
    /// Frequency-hopping spread spectrum, no timing support.
    Fhss,
    /// ERP packet binary convolutional coding, no timing support.
    ErpPbcc,
    /// DSSS-OFDM hybrid, no timing support.
    DsssOfdm,
}

/// Forward error correction code rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeRate {
    /// No convolutional coding (DSSS).
    Undefined,
    /// Rate 1/2.
    OneHalf,
    /// Rate 2/3.
    TwoThirds,
    /// Rate 3/4.
    ThreeQuarters,
    /// Rate 5/6.
    FiveSixths,
}

// ============================================================================
// Mode Descriptor
// ============================================================================

/// An immutable description of one modulation-and-coding configuration.
///
/// The name is the identity: the catalog enforces uniqueness and lookups go
/// by name. Descriptors are never mutated after registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeDescriptor {
    /// Unique name, e.g. `"OfdmRate54Mbps"`.
    pub name: Cow<'static, str>,
    /// Modulation class governing which clause's formulas apply.
    pub class: ModulationClass,
    /// Signal spread over this bandwidth, in Hz.
    pub bandwidth_hz: u32,
    /// Nominal PHY data rate in bit/s.
    pub data_rate_bps: u64,
    /// Convolutional code rate.
    pub code_rate: CodeRate,
    /// Constellation size (number of points, e.g. 64 for 64-QAM).
    pub constellation_size: u16,
    /// Whether every standard-compliant station must support this mode.
    pub is_mandatory: bool,
}

impl ModeDescriptor {
    /// The mode name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Data rate in Mbit/s.
    pub fn data_rate_mbps(&self) -> f64 {
        self.data_rate_bps as f64 / 1e6
    }
}

impl std::fmt::Display for ModeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Shorthand used by the [`STANDARD_MODES`] table.
const fn mode(
    name: &'static str,
    class: ModulationClass,
    is_mandatory: bool,
    bandwidth_hz: u32,
    data_rate_bps: u64,
    code_rate: CodeRate,
    constellation_size: u16,
) -> ModeDescriptor {
    ModeDescriptor {
        name: Cow::Borrowed(name),
        class,
        bandwidth_hz,
        data_rate_bps,
        code_rate,
        constellation_size,
        is_mandatory,
    }
}

// ============================================================================
// Standard Mode Table
// ============================================================================

/// Every mode the standard defines, one table entry per rate.
pub const STANDARD_MODES: &[ModeDescriptor] = &[
    // Clause 15/16 rates (DSSS)
    mode("DsssRate1Mbps", ModulationClass::Dsss, true, 22_000_000, 1_000_000, CodeRate::Undefined, 2),
    mode("DsssRate2Mbps", ModulationClass::Dsss, true, 22_000_000, 2_000_000, CodeRate::Undefined, 4),
    mode("DsssRate5_5Mbps", ModulationClass::Dsss, true, 22_000_000, 5_500_000, CodeRate::Undefined, 4),
    mode("DsssRate11Mbps", ModulationClass::Dsss, true, 22_000_000, 11_000_000, CodeRate::Undefined, 4),
    // Clause 19 rates (ERP-OFDM)
    mode("ErpOfdmRate6Mbps", ModulationClass::ErpOfdm, true, 20_000_000, 6_000_000, CodeRate::OneHalf, 2),
    mode("ErpOfdmRate9Mbps", ModulationClass::ErpOfdm, false, 20_000_000, 9_000_000, CodeRate::ThreeQuarters, 2),
    mode("ErpOfdmRate12Mbps", ModulationClass::ErpOfdm, true, 20_000_000, 12_000_000, CodeRate::OneHalf, 4),
    mode("ErpOfdmRate18Mbps", ModulationClass::ErpOfdm, false, 20_000_000, 18_000_000, CodeRate::ThreeQuarters, 4),
    mode("ErpOfdmRate24Mbps", ModulationClass::ErpOfdm, true, 20_000_000, 24_000_000, CodeRate::OneHalf, 16),
    mode("ErpOfdmRate36Mbps", ModulationClass::ErpOfdm, false, 20_000_000, 36_000_000, CodeRate::ThreeQuarters, 16),
    mode("ErpOfdmRate48Mbps", ModulationClass::ErpOfdm, false, 20_000_000, 48_000_000, CodeRate::TwoThirds, 64),
    mode("ErpOfdmRate54Mbps", ModulationClass::ErpOfdm, false, 20_000_000, 54_000_000, CodeRate::ThreeQuarters, 64),
    // Clause 18 rates (OFDM)
    mode("OfdmRate6Mbps", ModulationClass::Ofdm, true, 20_000_000, 6_000_000, CodeRate::OneHalf, 2),
    mode("OfdmRate9Mbps", ModulationClass::Ofdm, false, 20_000_000, 9_000_000, CodeRate::ThreeQuarters, 2),
    mode("OfdmRate12Mbps", ModulationClass::Ofdm, true, 20_000_000, 12_000_000, CodeRate::OneHalf, 4),
    mode("OfdmRate18Mbps", ModulationClass::Ofdm, false, 20_000_000, 18_000_000, CodeRate::ThreeQuarters, 4),
    mode("OfdmRate24Mbps", ModulationClass::Ofdm, true, 20_000_000, 24_000_000, CodeRate::OneHalf, 16),
    mode("OfdmRate36Mbps", ModulationClass::Ofdm, false, 20_000_000, 36_000_000, CodeRate::ThreeQuarters, 16),
    mode("OfdmRate48Mbps", ModulationClass::Ofdm, false, 20_000_000, 48_000_000, CodeRate::TwoThirds, 64),
    mode("OfdmRate54Mbps", ModulationClass::Ofdm, false, 20_000_000, 54_000_000, CodeRate::ThreeQuarters, 64),
    mode("OfdmRate3MbpsBW10MHz", ModulationClass::Ofdm, true, 10_000_000, 3_000_000, CodeRate::OneHalf, 2),
    mode("OfdmRate4_5MbpsBW10MHz", ModulationClass::Ofdm, false, 10_000_000, 4_500_000, CodeRate::ThreeQuarters, 2),
    mode("OfdmRate6MbpsBW10MHz", ModulationClass::Ofdm, true, 10_000_000, 6_000_000, CodeRate::OneHalf, 4),
    mode("OfdmRate9MbpsBW10MHz", ModulationClass::Ofdm, false, 10_000_000, 9_000_000, CodeRate::ThreeQuarters, 4),
    mode("OfdmRate12MbpsBW10MHz", ModulationClass::Ofdm, true, 10_000_000, 12_000_000, CodeRate::OneHalf, 16),
    mode("OfdmRate18MbpsBW10MHz", ModulationClass::Ofdm, false, 10_000_000, 18_000_000, CodeRate::ThreeQuarters, 16),
    mode("OfdmRate24MbpsBW10MHz", ModulationClass::Ofdm, false, 10_000_000, 24_000_000, CodeRate::TwoThirds, 64),
    mode("OfdmRate27MbpsBW10MHz", ModulationClass::Ofdm, false, 10_000_000, 27_000_000, CodeRate::ThreeQuarters, 64),
    mode("OfdmRate1_5MbpsBW5MHz", ModulationClass::Ofdm, true, 5_000_000, 1_500_000, CodeRate::OneHalf, 2),
    mode("OfdmRate2_25MbpsBW5MHz", ModulationClass::Ofdm, false, 5_000_000, 2_250_000, CodeRate::ThreeQuarters, 2),
    mode("OfdmRate3MbpsBW5MHz", ModulationClass::Ofdm, true, 5_000_000, 3_000_000, CodeRate::OneHalf, 4),
    mode("OfdmRate4_5MbpsBW5MHz", ModulationClass::Ofdm, false, 5_000_000, 4_500_000, CodeRate::ThreeQuarters, 4),
    mode("OfdmRate6MbpsBW5MHz", ModulationClass::Ofdm, true, 5_000_000, 6_000_000, CodeRate::OneHalf, 16),
    mode("OfdmRate9MbpsBW5MHz", ModulationClass::Ofdm, false, 5_000_000, 9_000_000, CodeRate::ThreeQuarters, 16),
    mode("OfdmRate12MbpsBW5MHz", ModulationClass::Ofdm, false, 5_000_000, 12_000_000, CodeRate::TwoThirds, 64),
    mode("OfdmRate13_5MbpsBW5MHz", ModulationClass::Ofdm, false, 5_000_000, 13_500_000, CodeRate::ThreeQuarters, 64),
    // Clause 20 rates (HT)
    mode("OfdmRate6_5MbpsBW20MHz", ModulationClass::Ht, true, 20_000_000, 6_500_000, CodeRate::OneHalf, 2),
    mode("OfdmRate7_2MbpsBW20MHz", ModulationClass::Ht, false, 20_000_000, 7_200_000, CodeRate::OneHalf, 2),
    mode("OfdmRate13MbpsBW20MHz", ModulationClass::Ht, true, 20_000_000, 13_000_000, CodeRate::OneHalf, 4),
    mode("OfdmRate14_4MbpsBW20MHz", ModulationClass::Ht, false, 20_000_000, 14_400_000, CodeRate::OneHalf, 4),
    mode("OfdmRate19_5MbpsBW20MHz", ModulationClass::Ht, true, 20_000_000, 19_500_000, CodeRate::ThreeQuarters, 4),
    mode("OfdmRate21_7MbpsBW20MHz", ModulationClass::Ht, false, 20_000_000, 21_700_000, CodeRate::ThreeQuarters, 4),
    mode("OfdmRate26MbpsBW20MHz", ModulationClass::Ht, true, 20_000_000, 26_000_000, CodeRate::OneHalf, 16),
    mode("OfdmRate28_9MbpsBW20MHz", ModulationClass::Ht, false, 20_000_000, 28_900_000, CodeRate::OneHalf, 16),
    mode("OfdmRate39MbpsBW20MHz", ModulationClass::Ht, true, 20_000_000, 39_000_000, CodeRate::ThreeQuarters, 16),
    mode("OfdmRate43_3MbpsBW20MHz", ModulationClass::Ht, false, 20_000_000, 43_300_000, CodeRate::ThreeQuarters, 16),
    mode("OfdmRate52MbpsBW20MHz", ModulationClass::Ht, true, 20_000_000, 52_000_000, CodeRate::TwoThirds, 64),
    mode("OfdmRate57_8MbpsBW20MHz", ModulationClass::Ht, false, 20_000_000, 57_800_000, CodeRate::TwoThirds, 64),
    mode("OfdmRate58_5MbpsBW20MHz", ModulationClass::Ht, true, 20_000_000, 58_500_000, CodeRate::ThreeQuarters, 64),
    mode("OfdmRate65MbpsBW20MHzShGi", ModulationClass::Ht, false, 20_000_000, 65_000_000, CodeRate::ThreeQuarters, 64),
    mode("OfdmRate65MbpsBW20MHz", ModulationClass::Ht, true, 20_000_000, 65_000_000, CodeRate::FiveSixths, 64),
    mode("OfdmRate72_2MbpsBW20MHz", ModulationClass::Ht, false, 20_000_000, 72_200_000, CodeRate::FiveSixths, 64),
    mode("OfdmRate13_5MbpsBW40MHz", ModulationClass::Ht, false, 40_000_000, 13_500_000, CodeRate::OneHalf, 2),
    mode("OfdmRate15MbpsBW40MHz", ModulationClass::Ht, false, 40_000_000, 15_000_000, CodeRate::OneHalf, 2),
    mode("OfdmRate27MbpsBW40MHz", ModulationClass::Ht, false, 40_000_000, 27_000_000, CodeRate::OneHalf, 4),
    mode("OfdmRate30MbpsBW40MHz", ModulationClass::Ht, false, 40_000_000, 30_000_000, CodeRate::OneHalf, 4),
    mode("OfdmRate40_5MbpsBW40MHz", ModulationClass::Ht, false, 40_000_000, 40_500_000, CodeRate::ThreeQuarters, 4),
    mode("OfdmRate45MbpsBW40MHz", ModulationClass::Ht, false, 40_000_000, 45_000_000, CodeRate::ThreeQuarters, 4),
    mode("OfdmRate54MbpsBW40MHz", ModulationClass::Ht, false, 40_000_000, 54_000_000, CodeRate::OneHalf, 16),
    mode("OfdmRate60MbpsBW40MHz", ModulationClass::Ht, false, 40_000_000, 60_000_000, CodeRate::OneHalf, 16),
    mode("OfdmRate81MbpsBW40MHz", ModulationClass::Ht, false, 40_000_000, 81_000_000, CodeRate::ThreeQuarters, 16),
    mode("OfdmRate90MbpsBW40MHz", ModulationClass::Ht, false, 40_000_000, 90_000_000, CodeRate::ThreeQuarters, 16),
    mode("OfdmRate108MbpsBW40MHz", ModulationClass::Ht, false, 40_000_000, 108_000_000, CodeRate::TwoThirds, 64),
    mode("OfdmRate120MbpsBW40MHz", ModulationClass::Ht, false, 40_000_000, 120_000_000, CodeRate::TwoThirds, 64),
    mode("OfdmRate121_5MbpsBW40MHz", ModulationClass::Ht, false, 40_000_000, 121_500_000, CodeRate::ThreeQuarters, 64),
    mode("OfdmRate135MbpsBW40MHzShGi", ModulationClass::Ht, false, 40_000_000, 135_000_000, CodeRate::ThreeQuarters, 64),
    mode("OfdmRate135MbpsBW40MHz", ModulationClass::Ht, false, 40_000_000, 135_000_000, CodeRate::FiveSixths, 64),
    mode("OfdmRate150MbpsBW40MHz", ModulationClass::Ht, false, 40_000_000, 150_000_000, CodeRate::FiveSixths, 64),
    // Clause 24 MCS set (S1G)
    mode("OfdmRate300KbpsBW1MHz", ModulationClass::S1g, true, 1_000_000, 300_000, CodeRate::OneHalf, 2),
    mode("OfdmRate333_3KbpsBW1MHz", ModulationClass::S1g, true, 1_000_000, 333_300, CodeRate::OneHalf, 2),
    mode("OfdmRate600KbpsBW1MHz", ModulationClass::S1g, true, 1_000_000, 600_000, CodeRate::OneHalf, 4),
    mode("OfdmRate666_7KbpsBW1MHz", ModulationClass::S1g, true, 1_000_000, 666_700, CodeRate::OneHalf, 4),
    mode("OfdmRate900KbpsBW1MHz", ModulationClass::S1g, true, 1_000_000, 900_000, CodeRate::ThreeQuarters, 4),
    mode("OfdmRate1MbpsBW1MHz", ModulationClass::S1g, true, 1_000_000, 1_000_000, CodeRate::ThreeQuarters, 4),
    mode("OfdmRate1_2MbpsBW1MHz", ModulationClass::S1g, true, 1_000_000, 1_200_000, CodeRate::OneHalf, 16),
    mode("OfdmRate1_333_3MbpsBW1MHz", ModulationClass::S1g, true, 1_000_000, 1_333_300, CodeRate::OneHalf, 16),
    mode("OfdmRate1_8MbpsBW1MHz", ModulationClass::S1g, true, 1_000_000, 1_800_000, CodeRate::ThreeQuarters, 16),
    mode("OfdmRate2MbpsBW1MHz", ModulationClass::S1g, true, 1_000_000, 2_000_000, CodeRate::ThreeQuarters, 16),
    mode("OfdmRate2_4MbpsBW1MHz", ModulationClass::S1g, true, 1_000_000, 2_400_000, CodeRate::TwoThirds, 16),
    mode("OfdmRate2_666_7MbpsBW1MHz", ModulationClass::S1g, true, 1_000_000, 2_666_700, CodeRate::TwoThirds, 16),
    mode("OfdmRate2_7MbpsBW1MHz", ModulationClass::S1g, true, 1_000_000, 2_700_000, CodeRate::ThreeQuarters, 16),
    mode("OfdmRate3MbpsBW1MHzShGi", ModulationClass::S1g, true, 1_000_000, 3_000_000, CodeRate::ThreeQuarters, 16),
    mode("OfdmRate3MbpsBW1MHz", ModulationClass::S1g, true, 1_000_000, 3_000_000, CodeRate::FiveSixths, 16),
    mode("OfdmRate3_333_3MbpsBW1MHz", ModulationClass::S1g, true, 1_000_000, 3_333_300, CodeRate::FiveSixths, 16),
    mode("OfdmRate3_6MbpsBW1MHz", ModulationClass::S1g, false, 1_000_000, 3_600_000, CodeRate::ThreeQuarters, 256),
    mode("OfdmRate4MbpsBW1MHzShGi", ModulationClass::S1g, false, 1_000_000, 4_000_000, CodeRate::ThreeQuarters, 256),
    mode("OfdmRate4MbpsBW1MHz", ModulationClass::S1g, false, 1_000_000, 4_000_000, CodeRate::FiveSixths, 256),
    mode("OfdmRate4_444_4MbpsBW1MHz", ModulationClass::S1g, false, 1_000_000, 4_444_400, CodeRate::FiveSixths, 256),
    mode("OfdmRate150KbpsBW1MHz", ModulationClass::S1g, true, 1_000_000, 150_000, CodeRate::OneHalf, 2),
    mode("OfdmRate166_7KbpsBW1MHz", ModulationClass::S1g, true, 1_000_000, 166_700, CodeRate::OneHalf, 2),
    mode("OfdmRate650KbpsBW2MHz", ModulationClass::S1g, true, 2_000_000, 650_000, CodeRate::OneHalf, 2),
    mode("OfdmRate722_2KbpsBW2MHz", ModulationClass::S1g, true, 2_000_000, 722_200, CodeRate::OneHalf, 2),
    mode("OfdmRate1_3MbpsBW2MHz", ModulationClass::S1g, true, 2_000_000, 1_300_000, CodeRate::OneHalf, 4),
    mode("OfdmRate1_444_4MbpsBW2MHz", ModulationClass::S1g, true, 2_000_000, 1_444_400, CodeRate::OneHalf, 4),
    mode("OfdmRate1_95MbpsBW2MHz", ModulationClass::S1g, true, 2_000_000, 1_950_000, CodeRate::ThreeQuarters, 4),
    mode("OfdmRate2_166_7MbpsBW2MHz", ModulationClass::S1g, true, 2_000_000, 2_166_700, CodeRate::ThreeQuarters, 4),
    mode("OfdmRate2_6MbpsBW2MHz", ModulationClass::S1g, true, 2_000_000, 2_600_000, CodeRate::OneHalf, 16),
    mode("OfdmRate2_8889MbpsBW2MHz", ModulationClass::S1g, true, 2_000_000, 2_888_900, CodeRate::OneHalf, 16),
    mode("OfdmRate3_9MbpsBW2MHz", ModulationClass::S1g, true, 2_000_000, 3_900_000, CodeRate::ThreeQuarters, 16),
    mode("OfdmRate4_333_3MbpsBW2MHz", ModulationClass::S1g, true, 2_000_000, 4_333_300, CodeRate::ThreeQuarters, 16),
    mode("OfdmRate5_2MbpsBW2MHz", ModulationClass::S1g, true, 2_000_000, 5_200_000, CodeRate::TwoThirds, 64),
    mode("OfdmRate5_777_8MbpsBW2MHz", ModulationClass::S1g, true, 2_000_000, 5_777_800, CodeRate::TwoThirds, 64),
    mode("OfdmRate5_85MbpsBW2MHz", ModulationClass::S1g, true, 2_000_000, 5_850_000, CodeRate::ThreeQuarters, 64),
    mode("OfdmRate6_5MbpsBW2MHzShGi", ModulationClass::S1g, true, 2_000_000, 6_500_000, CodeRate::ThreeQuarters, 64),
    mode("OfdmRate6_5MbpsBW2MHz", ModulationClass::S1g, true, 2_000_000, 6_500_000, CodeRate::FiveSixths, 64),
    mode("OfdmRate7_222_2MbpsBW2MHz", ModulationClass::S1g, true, 2_000_000, 7_222_200, CodeRate::FiveSixths, 64),
    mode("OfdmRate7_8MbpsBW2MHz", ModulationClass::S1g, false, 2_000_000, 7_800_000, CodeRate::ThreeQuarters, 256),
    mode("OfdmRate8_666_7MbpsBW2MHz", ModulationClass::S1g, false, 2_000_000, 8_666_700, CodeRate::ThreeQuarters, 256),
    mode("OfdmRate1_35MbpsBW4MHz", ModulationClass::S1g, false, 4_000_000, 1_350_000, CodeRate::OneHalf, 2),
    mode("OfdmRate1_5MbpsBW4MHz", ModulationClass::S1g, false, 4_000_000, 1_500_000, CodeRate::OneHalf, 2),
    mode("OfdmRate2_7MbpsBW4MHz", ModulationClass::S1g, false, 4_000_000, 2_700_000, CodeRate::OneHalf, 4),
    mode("OfdmRate3MbpsBW4MHz", ModulationClass::S1g, false, 4_000_000, 3_000_000, CodeRate::OneHalf, 4),
    mode("OfdmRate4_05MbpsBW4MHz", ModulationClass::S1g, false, 4_000_000, 4_050_000, CodeRate::ThreeQuarters, 4),
    mode("OfdmRate4_5MbpsBW4MHz", ModulationClass::S1g, false, 4_000_000, 4_500_000, CodeRate::ThreeQuarters, 4),
    mode("OfdmRate5_4MbpsBW4MHz", ModulationClass::S1g, false, 4_000_000, 5_400_000, CodeRate::OneHalf, 16),
    mode("OfdmRate6MbpsBW4MHz", ModulationClass::S1g, false, 4_000_000, 6_000_000, CodeRate::OneHalf, 16),
    mode("OfdmRate8_1MbpsBW4MHz", ModulationClass::S1g, false, 4_000_000, 8_100_000, CodeRate::ThreeQuarters, 16),
    mode("OfdmRate9MbpsBW4MHz", ModulationClass::S1g, false, 4_000_000, 9_000_000, CodeRate::ThreeQuarters, 16),
    mode("OfdmRate10_8MbpsBW4MHz", ModulationClass::S1g, false, 4_000_000, 10_800_000, CodeRate::TwoThirds, 64),
    mode("OfdmRate12MbpsBW4MHz", ModulationClass::S1g, false, 4_000_000, 12_000_000, CodeRate::TwoThirds, 64),
    mode("OfdmRate12_15MbpsBW4MHz", ModulationClass::S1g, false, 4_000_000, 12_150_000, CodeRate::ThreeQuarters, 64),
    mode("OfdmRate13_5MbpsBW4MHzShGi", ModulationClass::S1g, false, 4_000_000, 13_500_000, CodeRate::ThreeQuarters, 64),
    mode("OfdmRate13_5MbpsBW4MHz", ModulationClass::S1g, false, 4_000_000, 13_500_000, CodeRate::FiveSixths, 64),
    mode("OfdmRate15MbpsBW4MHz", ModulationClass::S1g, false, 4_000_000, 15_000_000, CodeRate::FiveSixths, 64),
    mode("OfdmRate16_2MbpsBW4MHz", ModulationClass::S1g, false, 4_000_000, 16_200_000, CodeRate::ThreeQuarters, 256),
    mode("OfdmRate18MbpsBW4MHzShGi", ModulationClass::S1g, false, 4_000_000, 18_000_000, CodeRate::ThreeQuarters, 256),
    mode("OfdmRate18MbpsBW4MHz", ModulationClass::S1g, false, 4_000_000, 18_000_000, CodeRate::FiveSixths, 256),
    mode("OfdmRate20MbpsBW4MHz", ModulationClass::S1g, false, 4_000_000, 20_000_000, CodeRate::FiveSixths, 256),
    mode("OfdmRate2_925MbpsBW8MHz", ModulationClass::S1g, false, 8_000_000, 2_925_000, CodeRate::OneHalf, 2),
    mode("OfdmRate3_25MbpsBW8MHz", ModulationClass::S1g, false, 8_000_000, 3_250_000, CodeRate::OneHalf, 2),
    mode("OfdmRate5_85MbpsBW8MHz", ModulationClass::S1g, false, 8_000_000, 5_850_000, CodeRate::OneHalf, 4),
    mode("OfdmRate6_5MbpsBW8MHz", ModulationClass::S1g, false, 8_000_000, 6_500_000, CodeRate::OneHalf, 4),
    mode("OfdmRate8_775MbpsBW8MHz", ModulationClass::S1g, false, 8_000_000, 8_775_000, CodeRate::ThreeQuarters, 4),
    mode("OfdmRate9_75MbpsBW8MHz", ModulationClass::S1g, false, 8_000_000, 9_750_000, CodeRate::ThreeQuarters, 4),
    mode("OfdmRate11_7MbpsBW8MHz", ModulationClass::S1g, false, 8_000_000, 11_700_000, CodeRate::OneHalf, 16),
    mode("OfdmRate13MbpsBW8MHz", ModulationClass::S1g, false, 8_000_000, 13_000_000, CodeRate::OneHalf, 16),
    mode("OfdmRate17_55MbpsBW8MHz", ModulationClass::S1g, false, 8_000_000, 17_550_000, CodeRate::ThreeQuarters, 16),
    mode("OfdmRate19_5MbpsBW8MHz", ModulationClass::S1g, false, 8_000_000, 19_500_000, CodeRate::ThreeQuarters, 16),
    mode("OfdmRate23_4MbpsBW8MHz", ModulationClass::S1g, false, 8_000_000, 23_400_000, CodeRate::TwoThirds, 64),
    mode("OfdmRate26MbpsBW8MHz", ModulationClass::S1g, false, 8_000_000, 26_000_000, CodeRate::TwoThirds, 64),
    mode("OfdmRate26_325MbpsBW8MHz", ModulationClass::S1g, false, 8_000_000, 26_325_000, CodeRate::ThreeQuarters, 64),
    mode("OfdmRate29_25MbpsBW8MHzShGi", ModulationClass::S1g, false, 8_000_000, 29_250_000, CodeRate::ThreeQuarters, 64),
    mode("OfdmRate29_25MbpsBW8MHz", ModulationClass::S1g, false, 8_000_000, 29_250_000, CodeRate::FiveSixths, 64),
    mode("OfdmRate32_5MbpsBW8MHz", ModulationClass::S1g, false, 8_000_000, 32_500_000, CodeRate::FiveSixths, 64),
    mode("OfdmRate35_1MbpsBW8MHz", ModulationClass::S1g, false, 8_000_000, 35_100_000, CodeRate::ThreeQuarters, 256),
    mode("OfdmRate39MbpsBW8MHzShGi", ModulationClass::S1g, false, 8_000_000, 39_000_000, CodeRate::ThreeQuarters, 256),
    mode("OfdmRate39MbpsBW8MHz", ModulationClass::S1g, false, 8_000_000, 39_000_000, CodeRate::FiveSixths, 256),
    mode("OfdmRate43_333_3MbpsBW8MHz", ModulationClass::S1g, false, 8_000_000, 43_333_300, CodeRate::FiveSixths, 256),
    mode("OfdmRate5_85MbpsBW16MHz", ModulationClass::S1g, false, 16_000_000, 5_850_000, CodeRate::OneHalf, 2),
    mode("OfdmRate6_5MbpsBW16MHz", ModulationClass::S1g, false, 16_000_000, 6_500_000, CodeRate::OneHalf, 2),
    mode("OfdmRate11_7MbpsBW16MHz", ModulationClass::S1g, false, 16_000_000, 11_700_000, CodeRate::OneHalf, 4),
    mode("OfdmRate13MbpsBW16MHz", ModulationClass::S1g, false, 16_000_000, 13_000_000, CodeRate::OneHalf, 4),
    mode("OfdmRate17_55MbpsBW16MHz", ModulationClass::S1g, false, 16_000_000, 17_550_000, CodeRate::ThreeQuarters, 4),
    mode("OfdmRate19_5MbpsBW16MHz", ModulationClass::S1g, false, 16_000_000, 19_500_000, CodeRate::ThreeQuarters, 4),
    mode("OfdmRate23_4MbpsBW16MHz", ModulationClass::S1g, false, 16_000_000, 23_400_000, CodeRate::OneHalf, 16),
    mode("OfdmRate26MbpsBW16MHz", ModulationClass::S1g, false, 16_000_000, 26_000_000, CodeRate::OneHalf, 16),
    mode("OfdmRate35_1MbpsBW16MHz", ModulationClass::S1g, false, 16_000_000, 35_100_000, CodeRate::ThreeQuarters, 16),
    mode("OfdmRate39MbpsBW16MHz", ModulationClass::S1g, false, 16_000_000, 39_000_000, CodeRate::ThreeQuarters, 16),
    mode("OfdmRate46_8MbpsBW16MHz", ModulationClass::S1g, false, 16_000_000, 46_800_000, CodeRate::TwoThirds, 64),
    mode("OfdmRate52MbpsBW16MHz", ModulationClass::S1g, false, 16_000_000, 52_000_000, CodeRate::TwoThirds, 64),
    mode("OfdmRate52_65MbpsBW16MHz", ModulationClass::S1g, false, 16_000_000, 52_650_000, CodeRate::ThreeQuarters, 64),
    mode("OfdmRate58_5MbpsBW16MHzShGi", ModulationClass::S1g, false, 16_000_000, 58_500_000, CodeRate::ThreeQuarters, 64),
    mode("OfdmRate58_5MbpsBW16MHz", ModulationClass::S1g, false, 16_000_000, 58_500_000, CodeRate::FiveSixths, 64),
    mode("OfdmRate65MbpsBW16MHz", ModulationClass::S1g, false, 16_000_000, 65_000_000, CodeRate::FiveSixths, 64),
    mode("OfdmRate70_2MbpsBW16MHz", ModulationClass::S1g, false, 16_000_000, 70_200_000, CodeRate::ThreeQuarters, 256),
    mode("OfdmRate78MbpsBW16MHzShGi", ModulationClass::S1g, false, 16_000_000, 78_000_000, CodeRate::ThreeQuarters, 256),
    mode("OfdmRate78MbpsBW16MHz", ModulationClass::S1g, false, 16_000_000, 78_000_000, CodeRate::FiveSixths, 256),
    mode("OfdmRate86_666_7MbpsBW16MHz", ModulationClass::S1g, false, 16_000_000, 86_666_700, CodeRate::FiveSixths, 256),
];

// ============================================================================
// Mode Catalog
// ============================================================================

/// Append-only registry of modulation modes, keyed by name.
///
/// Populated once before the simulation starts (usually via
/// [`ModeCatalog::with_standard_modes`]); immutable afterwards, so shared
/// read access needs no synchronization.
#[derive(Debug, Clone, Default)]
pub struct ModeCatalog {
    modes: HashMap<String, ModeDescriptor>,
}

impl ModeCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        ModeCatalog {
            modes: HashMap::new(),
        }
    }

    /// Create a catalog populated with [`STANDARD_MODES`].
    pub fn with_standard_modes() -> Self {
        let mut catalog = ModeCatalog::new();
        for descriptor in STANDARD_MODES {
            catalog
                .register(descriptor.clone())
                .expect("the standard mode table contains no duplicate names");
        }
        catalog
    }

    /// Register a new mode.
    ///
    /// Fails with [`PhyError::DuplicateMode`] if a mode of the same name is
    /// already registered.
    pub fn register(&mut self, descriptor: ModeDescriptor) -> Result<(), PhyError> {
        if self.modes.contains_key(descriptor.name()) {
            return Err(PhyError::DuplicateMode(descriptor.name().to_string()));
        }
        self.modes.insert(descriptor.name().to_string(), descriptor);
        Ok(())
    }

    /// Look up a mode by name.
    ///
    /// Fails with [`PhyError::UnknownMode`] if absent.
    pub fn lookup(&self, name: &str) -> Result<&ModeDescriptor, PhyError> {
        self.modes
            .get(name)
            .ok_or_else(|| PhyError::UnknownMode(name.to_string()))
    }

    /// Whether a mode of this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.modes.contains_key(name)
    }

    /// Iterate over all registered modes, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &ModeDescriptor> {
        self.modes.values()
    }

    /// Number of registered modes.
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}
