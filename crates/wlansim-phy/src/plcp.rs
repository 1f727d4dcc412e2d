//! PLCP preamble, header, training and signaling field durations.
//!
//! These are pure lookups keyed by modulation class and preamble variant.
//! They are total: a field that does not apply to a class/preamble pairing
//! contributes zero rather than failing. The only fallible operations here
//! are the header-mode catalog maps.

use crate::modes::{ModeCatalog, ModeDescriptor, ModulationClass};
use crate::txvector::TxVector;
use crate::PhyError;
use serde::{Deserialize, Serialize};
use wlansim_common::SimTime;

/// The preamble variant prepended to a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preamble {
    /// No preamble: a continuation fragment inside an aggregate.
    None,
    /// DSSS long preamble.
    Long,
    /// DSSS short preamble.
    Short,
    /// HT mixed format.
    HtMixed,
    /// HT greenfield format.
    HtGreenfield,
    /// S1G short format.
    S1gShort,
    /// S1G long format.
    S1gLong,
    /// S1G 1 MHz format.
    #[serde(rename = "s1g_1m")]
    S1g1M,
}

/// Number of long training fields for a stream count: one per stream, but
/// three streams already need the full four fields.
fn num_training_fields(streams: u8) -> u64 {
    if streams < 3 {
        streams as u64
    } else {
        4
    }
}

/// Duration of the PLCP preamble.
pub fn preamble_duration(mode: &ModeDescriptor, preamble: Preamble) -> SimTime {
    if preamble == Preamble::None {
        return SimTime::ZERO;
    }
    match mode.class {
        ModulationClass::Ofdm => match mode.bandwidth_hz {
            10_000_000 => SimTime::from_micros(32),
            5_000_000 => SimTime::from_micros(64),
            _ => SimTime::from_micros(16),
        },
        // Training symbols before L-SIG or HT-SIG
        ModulationClass::Ht => SimTime::from_micros(16),
        ModulationClass::S1g => match preamble {
            Preamble::S1g1M => SimTime::from_micros(40 * 8),
            _ => SimTime::from_micros(40 * 4),
        },
        ModulationClass::ErpOfdm => SimTime::from_micros(16),
        ModulationClass::Dsss => {
            if preamble == Preamble::Short {
                SimTime::from_micros(72)
            } else {
                SimTime::from_micros(144)
            }
        }
        _ => SimTime::ZERO,
    }
}

/// Duration of the PLCP header (the SIGNAL field; the SERVICE field is sent
/// at the payload rate and counted with the payload).
pub fn header_duration(mode: &ModeDescriptor, preamble: Preamble) -> SimTime {
    if preamble == Preamble::None {
        return SimTime::ZERO;
    }
    match mode.class {
        ModulationClass::Ofdm => match mode.bandwidth_hz {
            10_000_000 => SimTime::from_micros(8),
            5_000_000 => SimTime::from_micros(16),
            _ => SimTime::from_micros(4),
        },
        // L-SIG; greenfield frames carry none
        ModulationClass::Ht => match preamble {
            Preamble::HtGreenfield => SimTime::ZERO,
            _ => SimTime::from_micros(4),
        },
        ModulationClass::S1g => match preamble {
            Preamble::S1gLong => SimTime::ZERO,
            Preamble::S1g1M => SimTime::from_micros(40 * 6),
            _ => SimTime::from_micros(40 * 2),
        },
        ModulationClass::ErpOfdm => SimTime::from_micros(4),
        ModulationClass::Dsss => {
            if preamble == Preamble::Short {
                SimTime::from_micros(24)
            } else {
                SimTime::from_micros(48)
            }
        }
        _ => SimTime::ZERO,
    }
}

/// Duration of the HT-SIG field.
pub fn ht_sig_duration(preamble: Preamble) -> SimTime {
    match preamble {
        Preamble::HtMixed | Preamble::HtGreenfield => SimTime::from_micros(8),
        _ => SimTime::ZERO,
    }
}

/// Duration of the HT long training fields.
///
/// The field counts assume STBC is disabled; with STBC the standard maps
/// Nss to Nltf differently, a case this model does not take.
pub fn ht_training_duration(preamble: Preamble, txvector: &TxVector) -> SimTime {
    let ndltf = num_training_fields(txvector.nss);
    let neltf = num_training_fields(txvector.ness);
    match preamble {
        Preamble::HtMixed => SimTime::from_micros(4 + 4 * ndltf + 4 * neltf),
        Preamble::HtGreenfield => SimTime::from_micros(4 * ndltf + 4 * neltf),
        _ => SimTime::ZERO,
    }
}

/// Duration of the S1G long-format training fields (LTF1 plus one field per
/// stream). STBC disabled assumed, as for HT.
pub fn s1g_training_duration(preamble: Preamble, txvector: &TxVector) -> SimTime {
    let nltf = num_training_fields(txvector.nss);
    match preamble {
        Preamble::S1gLong => SimTime::from_micros(40 + 40 * nltf),
        _ => SimTime::ZERO,
    }
}

/// Duration of the S1G short/1M-format additional training fields: one per
/// stream beyond the first.
pub fn s1g_generic_training_duration(preamble: Preamble, txvector: &TxVector) -> SimTime {
    let nltf = num_training_fields(txvector.nss);
    match preamble {
        Preamble::S1gShort | Preamble::S1g1M => SimTime::from_micros(40 * nltf.saturating_sub(1)),
        _ => SimTime::ZERO,
    }
}

/// Duration of the S1G SIG-A field.
pub fn sig_a_duration(preamble: Preamble) -> SimTime {
    match preamble {
        Preamble::S1gLong => SimTime::from_micros(40 * 2),
        _ => SimTime::ZERO,
    }
}

/// Duration of the S1G SIG-B field.
pub fn sig_b_duration(preamble: Preamble) -> SimTime {
    match preamble {
        Preamble::S1gLong => SimTime::from_micros(40),
        _ => SimTime::ZERO,
    }
}

/// Total duration of everything sent before the payload: preamble, header
/// and the training/signaling fields that apply to the mode's class.
pub fn preamble_and_header_duration(txvector: &TxVector, preamble: Preamble) -> SimTime {
    let mode = &txvector.mode;
    if mode.class != ModulationClass::S1g {
        preamble_duration(mode, preamble)
            + header_duration(mode, preamble)
            + ht_sig_duration(preamble)
            + ht_training_duration(preamble, txvector)
    } else {
        preamble_duration(mode, preamble)
            + header_duration(mode, preamble)
            + s1g_generic_training_duration(preamble, txvector)
            + sig_a_duration(preamble)
            + s1g_training_duration(preamble, txvector)
            + sig_b_duration(preamble)
    }
}

/// The catalog mode the PLCP header is sent at.
///
/// Fails with [`PhyError::UnsupportedModulationClass`] for classes the
/// timing model does not cover, or [`PhyError::UnknownMode`] if the catalog
/// was not populated with the standard modes.
pub fn header_mode<'a>(
    catalog: &'a ModeCatalog,
    mode: &ModeDescriptor,
    preamble: Preamble,
) -> Result<&'a ModeDescriptor, PhyError> {
    let name = match mode.class {
        ModulationClass::Ofdm | ModulationClass::Ht => match mode.bandwidth_hz {
            5_000_000 => "OfdmRate1_5MbpsBW5MHz",
            10_000_000 => "OfdmRate3MbpsBW10MHz",
            // The last 16 bits of the header use the payload mode; this is
            // only the first part.
            _ => "OfdmRate6Mbps",
        },
        ModulationClass::S1g => match mode.bandwidth_hz {
            2_000_000 => "OfdmRate650KbpsBW2MHz",
            4_000_000 => "OfdmRate1_35MbpsBW4MHz",
            8_000_000 => "OfdmRate2_925MbpsBW8MHz",
            16_000_000 => "OfdmRate5_85MbpsBW16MHz",
            _ => "OfdmRate300KbpsBW1MHz",
        },
        ModulationClass::ErpOfdm => "ErpOfdmRate6Mbps",
        ModulationClass::Dsss => {
            if preamble == Preamble::Long {
                "DsssRate1Mbps"
            } else {
                "DsssRate2Mbps"
            }
        }
        class => return Err(PhyError::UnsupportedModulationClass(class)),
    };
    catalog.lookup(name)
}

/// The catalog mode the HT-SIG field is sent at.
pub fn ht_header_mode<'a>(
    catalog: &'a ModeCatalog,
    mode: &ModeDescriptor,
) -> Result<&'a ModeDescriptor, PhyError> {
    let name = match mode.bandwidth_hz {
        40_000_000 => "OfdmRate13_5MbpsBW40MHz",
        _ => "OfdmRate6_5MbpsBW20MHz",
    };
    catalog.lookup(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::ModeCatalog;

    fn txvector(name: &str) -> TxVector {
        let catalog = ModeCatalog::with_standard_modes();
        TxVector::new(catalog.lookup(name).unwrap().clone())
    }

    #[test]
    fn test_ofdm_preamble_and_header_scale_with_bandwidth() {
        let m20 = txvector("OfdmRate6Mbps").mode;
        let m10 = txvector("OfdmRate3MbpsBW10MHz").mode;
        let m5 = txvector("OfdmRate1_5MbpsBW5MHz").mode;

        assert_eq!(preamble_duration(&m20, Preamble::Long), SimTime::from_micros(16));
        assert_eq!(preamble_duration(&m10, Preamble::Long), SimTime::from_micros(32));
        assert_eq!(preamble_duration(&m5, Preamble::Long), SimTime::from_micros(64));

        assert_eq!(header_duration(&m20, Preamble::Long), SimTime::from_micros(4));
        assert_eq!(header_duration(&m10, Preamble::Long), SimTime::from_micros(8));
        assert_eq!(header_duration(&m5, Preamble::Long), SimTime::from_micros(16));
    }

    #[test]
    fn test_dsss_preamble_and_header() {
        let mode = txvector("DsssRate1Mbps").mode;
        assert_eq!(preamble_duration(&mode, Preamble::Long), SimTime::from_micros(144));
        assert_eq!(preamble_duration(&mode, Preamble::Short), SimTime::from_micros(72));
        assert_eq!(header_duration(&mode, Preamble::Long), SimTime::from_micros(48));
        assert_eq!(header_duration(&mode, Preamble::Short), SimTime::from_micros(24));
    }

    #[test]
    fn test_no_preamble_contributes_nothing() {
        let tx = txvector("OfdmRate54Mbps");
        assert_eq!(preamble_and_header_duration(&tx, Preamble::None), SimTime::ZERO);
    }

    #[test]
    fn test_ht_mixed_format_fields() {
        let mut tx = txvector("OfdmRate65MbpsBW20MHz");
        tx.nss = 2;

        assert_eq!(preamble_duration(&tx.mode, Preamble::HtMixed), SimTime::from_micros(16));
        assert_eq!(header_duration(&tx.mode, Preamble::HtMixed), SimTime::from_micros(4));
        assert_eq!(ht_sig_duration(Preamble::HtMixed), SimTime::from_micros(8));
        // HT-STF (4) plus two data LTFs
        assert_eq!(
            ht_training_duration(Preamble::HtMixed, &tx),
            SimTime::from_micros(12)
        );
        assert_eq!(
            preamble_and_header_duration(&tx, Preamble::HtMixed),
            SimTime::from_micros(40)
        );
    }

    #[test]
    fn test_ht_greenfield_has_no_lsig() {
        let tx = txvector("OfdmRate65MbpsBW20MHz");
        assert_eq!(header_duration(&tx.mode, Preamble::HtGreenfield), SimTime::ZERO);
        assert_eq!(
            ht_training_duration(Preamble::HtGreenfield, &tx),
            SimTime::from_micros(4)
        );
    }

    #[test]
    fn test_training_field_count_jumps_to_four() {
        let mut tx = txvector("OfdmRate65MbpsBW20MHz");
        tx.nss = 3;
        // three streams already need all four fields
        assert_eq!(
            ht_training_duration(Preamble::HtGreenfield, &tx),
            SimTime::from_micros(16)
        );
    }

    #[test]
    fn test_s1g_long_composition() {
        let tx = txvector("OfdmRate300KbpsBW1MHz");
        assert_eq!(preamble_duration(&tx.mode, Preamble::S1gLong), SimTime::from_micros(160));
        assert_eq!(header_duration(&tx.mode, Preamble::S1gLong), SimTime::ZERO);
        assert_eq!(sig_a_duration(Preamble::S1gLong), SimTime::from_micros(80));
        assert_eq!(sig_b_duration(Preamble::S1gLong), SimTime::from_micros(40));
        assert_eq!(
            s1g_training_duration(Preamble::S1gLong, &tx),
            SimTime::from_micros(80)
        );
        assert_eq!(
            preamble_and_header_duration(&tx, Preamble::S1gLong),
            SimTime::from_micros(360)
        );
    }

    #[test]
    fn test_s1g_1m_composition() {
        let tx = txvector("OfdmRate300KbpsBW1MHz");
        assert_eq!(preamble_duration(&tx.mode, Preamble::S1g1M), SimTime::from_micros(320));
        assert_eq!(header_duration(&tx.mode, Preamble::S1g1M), SimTime::from_micros(240));
        // one spatial stream: no additional training fields
        assert_eq!(
            s1g_generic_training_duration(Preamble::S1g1M, &tx),
            SimTime::ZERO
        );
        assert_eq!(
            preamble_and_header_duration(&tx, Preamble::S1g1M),
            SimTime::from_micros(560)
        );
    }

    #[test]
    fn test_s1g_fields_zero_under_other_preambles() {
        let tx = txvector("OfdmRate54Mbps");
        assert_eq!(sig_a_duration(Preamble::Long), SimTime::ZERO);
        assert_eq!(sig_b_duration(Preamble::HtMixed), SimTime::ZERO);
        assert_eq!(s1g_training_duration(Preamble::Long, &tx), SimTime::ZERO);
        assert_eq!(s1g_generic_training_duration(Preamble::Long, &tx), SimTime::ZERO);
    }

    #[test]
    fn test_header_modes() {
        let catalog = ModeCatalog::with_standard_modes();
        let ofdm = catalog.lookup("OfdmRate54Mbps").unwrap().clone();
        assert_eq!(
            header_mode(&catalog, &ofdm, Preamble::Long).unwrap().name(),
            "OfdmRate6Mbps"
        );

        let dsss = catalog.lookup("DsssRate11Mbps").unwrap().clone();
        assert_eq!(
            header_mode(&catalog, &dsss, Preamble::Long).unwrap().name(),
            "DsssRate1Mbps"
        );
        assert_eq!(
            header_mode(&catalog, &dsss, Preamble::Short).unwrap().name(),
            "DsssRate2Mbps"
        );

        let s1g = catalog.lookup("OfdmRate13MbpsBW8MHz").unwrap().clone();
        assert_eq!(
            header_mode(&catalog, &s1g, Preamble::S1gShort).unwrap().name(),
            "OfdmRate2_925MbpsBW8MHz"
        );

        let ht40 = catalog.lookup("OfdmRate135MbpsBW40MHz").unwrap().clone();
        assert_eq!(
            ht_header_mode(&catalog, &ht40).unwrap().name(),
            "OfdmRate13_5MbpsBW40MHz"
        );
    }

    #[test]
    fn test_header_mode_unsupported_class() {
        let catalog = ModeCatalog::with_standard_modes();
        let mode = ModeDescriptor {
            name: "FhssRate1Mbps".into(),
            class: crate::modes::ModulationClass::Fhss,
            bandwidth_hz: 1_000_000,
            data_rate_bps: 1_000_000,
            code_rate: crate::modes::CodeRate::Undefined,
            constellation_size: 2,
            is_mandatory: false,
        };
        assert!(matches!(
            header_mode(&catalog, &mode, Preamble::Long),
            Err(PhyError::UnsupportedModulationClass(_))
        ));
    }
}
