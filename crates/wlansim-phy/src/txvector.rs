//! Per-transmission configuration.

use crate::modes::ModeDescriptor;
use serde::{Deserialize, Serialize};

/// The transmit parameters for a single transmission attempt.
///
/// Created fresh by the caller for every attempt; the timing engine only
/// ever reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TxVector {
    /// The payload modulation mode.
    pub mode: ModeDescriptor,
    /// Number of spatial streams, at least 1.
    pub nss: u8,
    /// Number of extension spatial streams.
    pub ness: u8,
    /// Whether space-time block coding is used.
    pub stbc: bool,
    /// Channel width override in Hz. The duration formulas always read the
    /// mode's own bandwidth; this is carried for the benefit of receivers.
    pub channel_width_hz: Option<u32>,
    /// Whether the short guard interval is used.
    pub short_guard_interval: bool,
    /// Power level index, resolved to dBm by the device configuration.
    pub tx_power_level: u8,
}

impl TxVector {
    /// Create a transmit vector for a single spatial stream with all
    /// optional features disabled.
    pub fn new(mode: ModeDescriptor) -> Self {
        TxVector {
            mode,
            nss: 1,
            ness: 0,
            stbc: false,
            channel_width_hz: None,
            short_guard_interval: false,
            tx_power_level: 0,
        }
    }

    /// The bandwidth the transmission occupies: the override if one is set,
    /// the mode's own bandwidth otherwise.
    pub fn effective_bandwidth_hz(&self) -> u32 {
        self.channel_width_hz.unwrap_or(self.mode.bandwidth_hz)
    }

    /// Nominal data rate per spatial stream, in bit/s.
    pub fn data_rate_per_stream_bps(&self) -> u64 {
        self.mode.data_rate_bps / self.nss.max(1) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::ModeCatalog;

    #[test]
    fn test_defaults() {
        let catalog = ModeCatalog::with_standard_modes();
        let txvector = TxVector::new(catalog.lookup("OfdmRate54Mbps").unwrap().clone());
        assert_eq!(txvector.nss, 1);
        assert_eq!(txvector.ness, 0);
        assert!(!txvector.stbc);
        assert!(!txvector.short_guard_interval);
        assert_eq!(txvector.effective_bandwidth_hz(), 20_000_000);
    }

    #[test]
    fn test_rate_per_stream() {
        let catalog = ModeCatalog::with_standard_modes();
        let mut txvector = TxVector::new(catalog.lookup("OfdmRate30MbpsBW40MHz").unwrap().clone());
        txvector.nss = 2;
        assert_eq!(txvector.data_rate_per_stream_bps(), 15_000_000);
    }

    #[test]
    fn test_width_override() {
        let catalog = ModeCatalog::with_standard_modes();
        let mut txvector = TxVector::new(catalog.lookup("OfdmRate6Mbps").unwrap().clone());
        txvector.channel_width_hz = Some(10_000_000);
        assert_eq!(txvector.effective_bandwidth_hz(), 10_000_000);
    }
}
