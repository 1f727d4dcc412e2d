//! Fire-and-forget trace notifications.
//!
//! Observability consumers register a [`TraceSink`] and receive packet
//! lifecycle and monitor-mode sniff events. Sinks are invoked synchronously
//! in registration order; notifications carry no return value and can
//! neither block nor fail the caller.

use crate::txvector::TxVector;
use serde::{Deserialize, Serialize};
use wlansim_common::DropReason;

/// Transmission metadata attached to monitor-mode sniff events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SniffMeta {
    /// Channel center frequency in MHz.
    pub center_frequency_mhz: u16,
    /// Channel number.
    pub channel_number: u16,
    /// Nominal data rate in bit/s.
    pub data_rate_bps: u64,
    /// Whether a short preamble was used.
    pub short_preamble: bool,
    /// The transmit configuration of the sniffed frame.
    pub txvector: TxVector,
}

/// Receives PHY trace notifications.
///
/// Every method has a no-op default so sinks implement only what they
/// observe.
pub trait TraceSink {
    /// A packet began transmitting over the medium.
    fn tx_begin(&mut self, _size_bytes: u32) {}

    /// A packet was completely transmitted.
    fn tx_end(&mut self, _size_bytes: u32) {}

    /// A packet was dropped during transmission.
    fn tx_drop(&mut self, _size_bytes: u32, _reason: DropReason) {}

    /// A packet began being received from the medium.
    fn rx_begin(&mut self, _size_bytes: u32) {}

    /// A packet was completely received.
    fn rx_end(&mut self, _size_bytes: u32) {}

    /// A packet was dropped during reception.
    fn rx_drop(&mut self, _size_bytes: u32, _reason: DropReason) {}

    /// Monitor-mode sniff of a received frame, with measured powers in dBm.
    fn monitor_sniff_rx(
        &mut self,
        _size_bytes: u32,
        _meta: &SniffMeta,
        _signal_dbm: f64,
        _noise_dbm: f64,
    ) {
    }

    /// Monitor-mode sniff of a transmitted frame.
    fn monitor_sniff_tx(&mut self, _size_bytes: u32, _meta: &SniffMeta) {}
}

/// Handle identifying a registered trace sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SinkId(u64);

/// Ordered fan-out of trace notifications to registered sinks.
#[derive(Default)]
pub struct TraceRegistry {
    sinks: Vec<(SinkId, Box<dyn TraceSink>)>,
    next_sink_id: u64,
}

impl TraceRegistry {
    /// Create a registry with no sinks.
    pub fn new() -> Self {
        TraceRegistry::default()
    }

    /// Add a sink. Returns the handle to remove it with.
    pub fn register_sink(&mut self, sink: Box<dyn TraceSink>) -> SinkId {
        let id = SinkId(self.next_sink_id);
        self.next_sink_id += 1;
        self.sinks.push((id, sink));
        id
    }

    /// Remove a previously registered sink. Returns whether the handle was
    /// registered.
    pub fn unregister_sink(&mut self, id: SinkId) -> bool {
        let before = self.sinks.len();
        self.sinks.retain(|(registered, _)| *registered != id);
        self.sinks.len() != before
    }

    /// Notify all sinks a packet began transmitting.
    pub fn notify_tx_begin(&mut self, size_bytes: u32) {
        for (_, sink) in &mut self.sinks {
            sink.tx_begin(size_bytes);
        }
    }

    /// Notify all sinks a packet finished transmitting.
    pub fn notify_tx_end(&mut self, size_bytes: u32) {
        for (_, sink) in &mut self.sinks {
            sink.tx_end(size_bytes);
        }
    }

    /// Notify all sinks a packet was dropped on the transmit path.
    pub fn notify_tx_drop(&mut self, size_bytes: u32, reason: DropReason) {
        for (_, sink) in &mut self.sinks {
            sink.tx_drop(size_bytes, reason);
        }
    }

    /// Notify all sinks a packet began being received.
    pub fn notify_rx_begin(&mut self, size_bytes: u32) {
        for (_, sink) in &mut self.sinks {
            sink.rx_begin(size_bytes);
        }
    }

    /// Notify all sinks a packet was completely received.
    pub fn notify_rx_end(&mut self, size_bytes: u32) {
        for (_, sink) in &mut self.sinks {
            sink.rx_end(size_bytes);
        }
    }

    /// Notify all sinks a packet was dropped on the receive path.
    pub fn notify_rx_drop(&mut self, size_bytes: u32, reason: DropReason) {
        for (_, sink) in &mut self.sinks {
            sink.rx_drop(size_bytes, reason);
        }
    }

    /// Sniff a received frame.
    pub fn notify_monitor_sniff_rx(
        &mut self,
        size_bytes: u32,
        meta: &SniffMeta,
        signal_dbm: f64,
        noise_dbm: f64,
    ) {
        for (_, sink) in &mut self.sinks {
            sink.monitor_sniff_rx(size_bytes, meta, signal_dbm, noise_dbm);
        }
    }

    /// Sniff a transmitted frame.
    pub fn notify_monitor_sniff_tx(&mut self, size_bytes: u32, meta: &SniffMeta) {
        for (_, sink) in &mut self.sinks {
            sink.monitor_sniff_tx(size_bytes, meta);
        }
    }
}
