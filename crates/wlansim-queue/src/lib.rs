//! # wlansim-queue
//!
//! Three-band strict-priority drop-tail queue.
//!
//! Packets are enqueued into one of three FIFO bands according to their
//! priority classification; dequeue always drains a higher-priority band
//! completely before touching a lower one. Each band is a drop-tail queue
//! with a shared capacity: an enqueue into a full band rejects the packet.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;

/// Metric name for accepted packets.
const METRIC_ENQUEUED: &str = "queue_enqueued_packets";
/// Metric name for rejected packets.
const METRIC_DROPPED: &str = "queue_dropped_packets";

/// Default per-band capacity, in packets.
pub const DEFAULT_BAND_LIMIT: usize = 1000;

// ============================================================================
// Priority Bands
// ============================================================================

/// The three-level priority classification.
///
/// Traffic the classifier cannot place defaults to [`PriorityBand::Normal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityBand {
    /// Interactive traffic, dequeued first.
    High,
    /// Normal service.
    Normal,
    /// Bulk traffic, dequeued last.
    Low,
}

impl PriorityBand {
    /// Band index, 0 being the highest priority.
    fn index(self) -> usize {
        match self {
            PriorityBand::High => 0,
            PriorityBand::Normal => 1,
            PriorityBand::Low => 2,
        }
    }

    /// Static label for metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            PriorityBand::High => "high",
            PriorityBand::Normal => "normal",
            PriorityBand::Low => "low",
        }
    }
}

/// Classifies packets into a priority band.
///
/// Returning `None` means no match; such packets go to
/// [`PriorityBand::Normal`].
pub trait PacketClassifier<T> {
    /// Classify one packet.
    fn classify(&self, packet: &T) -> Option<PriorityBand>;
}

// ============================================================================
// Queue
// ============================================================================

/// A three-band strict-priority drop-tail queue.
pub struct PfifoFastQueue<T> {
    bands: [VecDeque<T>; 3],
    limit: usize,
}

impl<T> PfifoFastQueue<T> {
    /// Create a queue with the default per-band capacity.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_BAND_LIMIT)
    }

    /// Create a queue holding at most `limit` packets per band.
    pub fn with_limit(limit: usize) -> Self {
        PfifoFastQueue {
            bands: [VecDeque::new(), VecDeque::new(), VecDeque::new()],
            limit,
        }
    }

    /// Enqueue a packet into its band. Returns the packet back if the band
    /// is full.
    pub fn enqueue(&mut self, packet: T, band: PriorityBand) -> Result<(), T> {
        let queue = &mut self.bands[band.index()];
        if queue.len() >= self.limit {
            debug!(band = band.as_label(), "queue band full, dropping packet");
            metrics::counter!(METRIC_DROPPED, "band" => band.as_label()).increment(1);
            return Err(packet);
        }
        queue.push_back(packet);
        metrics::counter!(METRIC_ENQUEUED, "band" => band.as_label()).increment(1);
        Ok(())
    }

    /// Dequeue the oldest packet of the highest-priority non-empty band.
    pub fn dequeue(&mut self) -> Option<T> {
        self.bands.iter_mut().find_map(|band| band.pop_front())
    }

    /// The packet [`dequeue`](Self::dequeue) would return next.
    pub fn peek(&self) -> Option<&T> {
        self.bands.iter().find_map(|band| band.front())
    }

    /// Number of packets queued in one band.
    pub fn band_len(&self, band: PriorityBand) -> usize {
        self.bands[band.index()].len()
    }

    /// Total number of queued packets.
    pub fn len(&self) -> usize {
        self.bands.iter().map(|band| band.len()).sum()
    }

    /// Whether no packets are queued.
    pub fn is_empty(&self) -> bool {
        self.bands.iter().all(|band| band.is_empty())
    }

    /// The per-band capacity.
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl<T> Default for PfifoFastQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_priority_dequeue() {
        let mut queue = PfifoFastQueue::new();
        queue.enqueue("bulk", PriorityBand::Low).unwrap();
        queue.enqueue("mail", PriorityBand::Normal).unwrap();
        queue.enqueue("voice", PriorityBand::High).unwrap();
        queue.enqueue("voice2", PriorityBand::High).unwrap();

        assert_eq!(queue.peek(), Some(&"voice"));
        assert_eq!(queue.dequeue(), Some("voice"));
        assert_eq!(queue.dequeue(), Some("voice2"));
        assert_eq!(queue.dequeue(), Some("mail"));
        assert_eq!(queue.dequeue(), Some("bulk"));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_fifo_within_band() {
        let mut queue = PfifoFastQueue::new();
        for n in 0..5 {
            queue.enqueue(n, PriorityBand::Normal).unwrap();
        }
        for n in 0..5 {
            assert_eq!(queue.dequeue(), Some(n));
        }
    }

    #[test]
    fn test_full_band_drops_tail() {
        let mut queue = PfifoFastQueue::with_limit(2);
        queue.enqueue(1, PriorityBand::Normal).unwrap();
        queue.enqueue(2, PriorityBand::Normal).unwrap();
        assert_eq!(queue.enqueue(3, PriorityBand::Normal), Err(3));
        // other bands still have room
        queue.enqueue(4, PriorityBand::High).unwrap();
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.band_len(PriorityBand::Normal), 2);
    }

    #[test]
    fn test_unmatched_traffic_defaults_to_normal() {
        struct NoMatch;
        impl PacketClassifier<u32> for NoMatch {
            fn classify(&self, _packet: &u32) -> Option<PriorityBand> {
                None
            }
        }
        let classifier = NoMatch;
        let band = classifier.classify(&7).unwrap_or(PriorityBand::Normal);
        assert_eq!(band, PriorityBand::Normal);
    }
}
