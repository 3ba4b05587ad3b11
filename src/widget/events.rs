//! Notification bus for events that leave a widget's boundary
//!
//! The interactive pricing card announces user intent by emitting a
//! [`PaymentIntent`] onto the bus it received at mount time. Ancestors
//! (the application, tests) observe events by draining the bus; nothing
//! stays confined to the widget's own scope.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use serde::Serialize;

/// Fixed type tag carried by every payment notification
pub const PAYMENT_EVENT_TYPE: &str = "payment";

/// Payload announcing that the user activated a pricing card.
///
/// No processing happens here; the listener is expected to start the
/// actual checkout and drive the card's loading state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentIntent {
    /// Externally supplied plan identifier (`price-id` attribute)
    #[serde(rename = "priceId")]
    pub price_id: Option<String>,
    /// Always [`PAYMENT_EVENT_TYPE`]
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl PaymentIntent {
    pub fn new(price_id: Option<String>) -> Self {
        Self {
            price_id,
            kind: PAYMENT_EVENT_TYPE,
        }
    }
}

/// Single-threaded event queue shared between widgets and their ancestors.
///
/// Cloning yields another handle to the same queue, so the handle a widget
/// captured at mount time feeds the same listener the application drains.
#[derive(Debug, Clone, Default)]
pub struct NotificationBus {
    queue: Rc<RefCell<VecDeque<PaymentIntent>>>,
}

impl NotificationBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit one event onto the bus
    pub fn emit(&self, intent: PaymentIntent) {
        self.queue.borrow_mut().push_back(intent);
    }

    /// Take all pending events, oldest first
    pub fn drain(&self) -> Vec<PaymentIntent> {
        self.queue.borrow_mut().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }
}
