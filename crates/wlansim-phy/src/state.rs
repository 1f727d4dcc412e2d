//! PHY medium-occupancy state and the listener notification contract.
//!
//! The state machine is level-triggered: occupancy notifications record when
//! the occupation will end and the state is derived from the queried instant.
//! There is no "Tx end" notification; listeners infer idleness from elapsed
//! time. Transitions are driven by an external scheduler calling the
//! `notify_*` methods; the machine itself never advances time.

use tracing::warn;
use wlansim_common::SimTime;

/// Metric name for TX start notifications.
const METRIC_TX_NOTIFICATIONS: &str = "phy_tx_start_notifications";
/// Metric name for RX start notifications.
const METRIC_RX_NOTIFICATIONS: &str = "phy_rx_start_notifications";
/// Metric name for failed receptions.
const METRIC_RX_ERRORS: &str = "phy_rx_end_error_notifications";

// ============================================================================
// PHY State
// ============================================================================

/// The state of the PHY layer. Exactly one holds at any simulated instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhyState {
    /// The PHY layer is idle.
    Idle,
    /// The medium was sensed busy through the CCA mechanism.
    CcaBusy,
    /// The PHY layer is sending a packet.
    Tx,
    /// The PHY layer is receiving a packet.
    Rx,
    /// The PHY layer is switching to another channel.
    Switching,
    /// The PHY layer is sleeping.
    Sleep,
}

// ============================================================================
// Listener Contract
// ============================================================================

/// Receives PHY-level event notifications.
///
/// All notifications are delivered synchronously, in registration order.
/// A `notify_rx_start` is always followed by exactly one of
/// `notify_rx_end_ok` or `notify_rx_end_error`. Tx and channel switching
/// carry no end notification: the medium reverts to idle when the announced
/// duration elapses.
pub trait PhyListener {
    /// The PHY started receiving; reception takes `duration`.
    fn notify_rx_start(&mut self, duration: SimTime);

    /// The last reception completed successfully.
    fn notify_rx_end_ok(&mut self);

    /// The last reception failed.
    fn notify_rx_end_error(&mut self);

    /// The PHY started transmitting at `tx_power_dbm`; the medium is busy
    /// for `duration`.
    fn notify_tx_start(&mut self, duration: SimTime, tx_power_dbm: f64);

    /// The medium may be busy for `duration` (energy detected without a
    /// decodable frame). Purely advisory; may overlap other notifications.
    fn notify_maybe_cca_busy_start(&mut self, duration: SimTime);

    /// The PHY started switching channels; the switch takes `duration`.
    fn notify_switching_start(&mut self, duration: SimTime);

    /// The PHY went to sleep.
    fn notify_sleep(&mut self);

    /// The PHY woke up.
    fn notify_wakeup(&mut self);
}

/// Handle identifying a registered listener, used to unregister it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

// ============================================================================
// PHY State Machine
// ============================================================================

/// Tracks one PHY instance's medium-occupancy state and fans notifications
/// out to registered listeners.
///
/// Clock-agnostic: every call takes the current instant explicitly, and the
/// caller is responsible for supplying non-decreasing instants.
#[derive(Default)]
pub struct PhyStateMachine {
    listeners: Vec<(ListenerId, Box<dyn PhyListener>)>,
    next_listener_id: u64,

    sleeping: bool,
    rx_in_progress: bool,
    end_tx: SimTime,
    end_rx: SimTime,
    end_switching: SimTime,
    end_cca_busy: SimTime,
    last_rx_start: SimTime,
    last_state_change: SimTime,
}

impl PhyStateMachine {
    /// Create a machine in the idle state with no listeners.
    pub fn new() -> Self {
        PhyStateMachine::default()
    }

    /// Add a listener to be notified of PHY-level events. Returns the handle
    /// to unregister it with.
    pub fn register_listener(&mut self, listener: Box<dyn PhyListener>) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Remove a previously registered listener. Returns whether the handle
    /// was registered.
    pub fn unregister_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(registered, _)| *registered != id);
        self.listeners.len() != before
    }

    /// The state holding at `now`.
    pub fn state(&self, now: SimTime) -> PhyState {
        if self.sleeping {
            PhyState::Sleep
        } else if self.end_tx > now {
            PhyState::Tx
        } else if self.end_rx > now {
            PhyState::Rx
        } else if self.end_switching > now {
            PhyState::Switching
        } else if self.end_cca_busy > now {
            PhyState::CcaBusy
        } else {
            PhyState::Idle
        }
    }

    /// Whether the PHY is idle at `now`.
    pub fn is_idle(&self, now: SimTime) -> bool {
        self.state(now) == PhyState::Idle
    }

    /// Whether the PHY is anything but idle at `now`.
    pub fn is_busy(&self, now: SimTime) -> bool {
        !self.is_idle(now)
    }

    /// Whether the PHY is transmitting at `now`.
    pub fn is_tx(&self, now: SimTime) -> bool {
        self.state(now) == PhyState::Tx
    }

    /// Whether the PHY is receiving at `now`.
    pub fn is_rx(&self, now: SimTime) -> bool {
        self.state(now) == PhyState::Rx
    }

    /// Whether the PHY is switching channels at `now`.
    pub fn is_switching(&self, now: SimTime) -> bool {
        self.state(now) == PhyState::Switching
    }

    /// Whether the CCA window is open at `now`.
    pub fn is_cca_busy(&self, now: SimTime) -> bool {
        self.state(now) == PhyState::CcaBusy
    }

    /// Whether the PHY is sleeping at `now`.
    pub fn is_sleeping(&self, now: SimTime) -> bool {
        self.state(now) == PhyState::Sleep
    }

    /// How long the current state has been held at `now`.
    pub fn state_duration(&self, now: SimTime) -> SimTime {
        now.saturating_sub(self.last_state_change)
    }

    /// The earliest delay after `now` at which the PHY can be idle again.
    /// The PHY may become idle later, never earlier. While sleeping this is
    /// zero: sleep has no scheduled end and only an explicit wakeup ends it.
    pub fn delay_until_idle(&self, now: SimTime) -> SimTime {
        let busy_until = self
            .end_tx
            .max(self.end_rx)
            .max(self.end_switching)
            .max(self.end_cca_busy);
        busy_until.saturating_sub(now)
    }

    /// Start instant of the most recent reception.
    pub fn last_rx_start(&self) -> SimTime {
        self.last_rx_start
    }

    /// Announce a transmission occupying the medium for `duration`.
    pub fn notify_tx_start(&mut self, now: SimTime, duration: SimTime, tx_power_dbm: f64) {
        self.end_tx = now + duration;
        self.last_state_change = now;
        metrics::counter!(METRIC_TX_NOTIFICATIONS).increment(1);
        for (_, listener) in &mut self.listeners {
            listener.notify_tx_start(duration, tx_power_dbm);
        }
    }

    /// Announce the start of a reception taking `duration`.
    pub fn notify_rx_start(&mut self, now: SimTime, duration: SimTime) {
        if self.rx_in_progress {
            warn!("rx start while a reception is already in progress");
        }
        self.rx_in_progress = true;
        self.last_rx_start = now;
        self.end_rx = now + duration;
        self.last_state_change = now;
        metrics::counter!(METRIC_RX_NOTIFICATIONS).increment(1);
        for (_, listener) in &mut self.listeners {
            listener.notify_rx_start(duration);
        }
    }

    /// Close the in-progress reception successfully.
    pub fn notify_rx_end_ok(&mut self, now: SimTime) {
        if !self.rx_in_progress {
            warn!("rx end without a reception in progress");
        }
        self.rx_in_progress = false;
        self.end_rx = now;
        self.last_state_change = now;
        for (_, listener) in &mut self.listeners {
            listener.notify_rx_end_ok();
        }
    }

    /// Close the in-progress reception as failed.
    pub fn notify_rx_end_error(&mut self, now: SimTime) {
        if !self.rx_in_progress {
            warn!("rx end without a reception in progress");
        }
        self.rx_in_progress = false;
        self.end_rx = now;
        self.last_state_change = now;
        metrics::counter!(METRIC_RX_ERRORS).increment(1);
        for (_, listener) in &mut self.listeners {
            listener.notify_rx_end_error();
        }
    }

    /// Open (or extend) the advisory CCA busy window. Does not change the
    /// authoritative state and never shortens an already longer window.
    pub fn notify_maybe_cca_busy_start(&mut self, now: SimTime, duration: SimTime) {
        self.end_cca_busy = self.end_cca_busy.max(now + duration);
        for (_, listener) in &mut self.listeners {
            listener.notify_maybe_cca_busy_start(duration);
        }
    }

    /// Announce a channel switch taking `duration`. A switch invalidates any
    /// open CCA window; the old channel's energy reading is meaningless.
    pub fn notify_switching_start(&mut self, now: SimTime, duration: SimTime) {
        self.end_switching = now + duration;
        self.end_cca_busy = now;
        self.last_state_change = now;
        for (_, listener) in &mut self.listeners {
            listener.notify_switching_start(duration);
        }
    }

    /// Put the PHY to sleep.
    pub fn notify_sleep(&mut self, now: SimTime) {
        self.sleeping = true;
        self.last_state_change = now;
        for (_, listener) in &mut self.listeners {
            listener.notify_sleep();
        }
    }

    /// Wake the PHY up.
    pub fn notify_wakeup(&mut self, now: SimTime) {
        self.sleeping = false;
        self.last_state_change = now;
        for (_, listener) in &mut self.listeners {
            listener.notify_wakeup();
        }
    }
}
