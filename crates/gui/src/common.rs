// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Those things used across the Reserva GUI crate
//!

use reserva_core::{Date, PickerRole};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

/// A change to one endpoint of the selection pair, emitted upward by a
/// picker.  `date` is `None` when the endpoint was cleared.
///
/// Pickers only ever notify; the selection itself is owned and mutated by
/// the reservation box that drains these messages.
#[derive(Debug, Clone, Copy)]
pub struct SelectionChange {
    pub role: PickerRole,
    pub date: Option<Date>,
}

/// Holds both the `tx` and `rx` ends of an unbounded channel.
#[derive(Debug)]
pub struct UnboundedChannel<T> {
    pub tx: UnboundedSender<T>,
    pub rx: UnboundedReceiver<T>,
}

impl<T> From<(UnboundedSender<T>, UnboundedReceiver<T>)> for UnboundedChannel<T> {
    fn from(value: (UnboundedSender<T>, UnboundedReceiver<T>)) -> Self {
        UnboundedChannel {
            tx: value.0,
            rx: value.1,
        }
    }
}
