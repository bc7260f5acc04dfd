//! Order status state machine.
//!
//! The happy path walks pending → confirmed → preparing → ready →
//! delivered. `cancelled` is terminal and reachable only from pending
//! or confirmed; `delivered` is terminal too. Admins may otherwise
//! move an order to any status, including backwards; owners may only
//! cancel.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Placed, awaiting confirmation.
    Pending,
    /// Accepted by the kitchen.
    Confirmed,
    /// Being prepared; cancellation is no longer possible.
    Preparing,
    /// Ready for pickup or delivery.
    Ready,
    /// Handed over. Terminal.
    Delivered,
    /// Cancelled. Terminal.
    Cancelled,
}

/// Who is requesting a status transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    /// Staff with full transition authority.
    Admin,
    /// The user who placed the order.
    Owner,
}

/// A rejected status transition.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    /// The order is cancelled; nothing may change any more.
    #[error("cannot modify a cancelled order")]
    Frozen,

    /// The order is delivered; nothing may change any more.
    #[error("cannot modify a delivered order")]
    Delivered,

    /// Cancellation requested after preparation started.
    #[error("cannot cancel after order is being prepared or completed")]
    CancelTooLate,

    /// The owner requested something other than cancellation.
    #[error("only cancellation is permitted")]
    OwnerMayOnlyCancel,
}

/// Error returned when parsing an unknown status value.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid status: {0}")]
pub struct StatusParseError(pub String);

impl OrderStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// The canonical wire/storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Whether a transition out of this status is still possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Whether the owner may still cancel an order in this status.
    #[must_use]
    pub const fn can_cancel(self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Confirmed)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = StatusParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(OrderStatus::Pending),
            "confirmed" => Ok(OrderStatus::Confirmed),
            "preparing" => Ok(OrderStatus::Preparing),
            "ready" => Ok(OrderStatus::Ready),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(StatusParseError(other.to_string())),
        }
    }
}

/// Check whether `actor` may move an order from `from` to `to`.
///
/// Guards apply in a fixed order: terminal states freeze the order,
/// then late cancellation is rejected, then owner authority is
/// restricted to cancellation. Unknown status values never reach this
/// function; they fail at parse time.
///
/// # Errors
///
/// Returns the first violated guard as a [`TransitionError`].
pub fn check_transition(
    actor: Actor,
    from: OrderStatus,
    to: OrderStatus,
) -> Result<(), TransitionError> {
    if from == OrderStatus::Cancelled {
        return Err(TransitionError::Frozen);
    }

    if from == OrderStatus::Delivered {
        return Err(TransitionError::Delivered);
    }

    if to == OrderStatus::Cancelled && !from.can_cancel() {
        return Err(TransitionError::CancelTooLate);
    }

    if actor == Actor::Owner && to != OrderStatus::Cancelled {
        return Err(TransitionError::OwnerMayOnlyCancel);
    }

    Ok(())
}
