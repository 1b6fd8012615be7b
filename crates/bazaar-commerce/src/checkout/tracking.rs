//! Order tracking timeline.
//!
//! Every order moves through the same six milestones. A timeline marks a
//! prefix of them as completed and exactly one as current.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::checkout::{Order, OrderStatus};
use crate::error::CommerceError;

/// Milestone titles and descriptions, in order.
pub const MILESTONES: [(&str, &str); 6] = [
    ("Order Placed", "We have received your order."),
    ("Payment Confirmed", "Your payment has been verified."),
    ("Crafting", "The artisan is handcrafting your piece."),
    ("Shipped", "Your order is on its way."),
    ("Out for Delivery", "Your order will arrive today."),
    ("Delivered", "Your order has been delivered."),
];

/// One milestone on the tracking page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackingEvent {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    pub completed: bool,
    pub current: bool,
}

/// The milestone timeline of one order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Timeline {
    events: Vec<TrackingEvent>,
}

impl Timeline {
    /// Build the timeline for a status. Milestones up to the reached one are
    /// completed and the reached one is current; timestamps are taken from
    /// `times` in order where present.
    pub fn for_status(status: OrderStatus, times: &[DateTime<Utc>]) -> Self {
        let reached = status
            .milestone_index()
            .unwrap_or_else(|| times.len().saturating_sub(1))
            .min(MILESTONES.len() - 1);

        let events = MILESTONES
            .iter()
            .enumerate()
            .map(|(i, (title, description))| TrackingEvent {
                title: title.to_string(),
                description: description.to_string(),
                timestamp: if i <= reached { times.get(i).copied() } else { None },
                completed: i <= reached,
                current: i == reached,
            })
            .collect();
        Self { events }
    }

    pub fn for_order(order: &Order) -> Self {
        Self::for_status(order.status, &order.milestone_times)
    }

    /// Wrap events from elsewhere; call [`Timeline::validate`] before trusting them.
    pub fn from_events(events: Vec<TrackingEvent>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[TrackingEvent] {
        &self.events
    }

    /// The current milestone.
    pub fn current(&self) -> Option<&TrackingEvent> {
        self.events.iter().find(|e| e.current)
    }

    /// Share of milestones completed, 0-100.
    pub fn progress_percent(&self) -> u32 {
        if self.events.is_empty() {
            return 0;
        }
        let done = self.events.iter().filter(|e| e.completed).count();
        ((done * 100) / self.events.len()) as u32
    }

    /// Check the timeline shape: six milestones, completed ones form a
    /// prefix, and exactly one event is current, the last completed one.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.events.len() != MILESTONES.len() {
            return Err(CommerceError::InvalidTimeline(format!(
                "expected {} milestones, found {}",
                MILESTONES.len(),
                self.events.len()
            )));
        }
        let current_events: Vec<usize> = self
            .events
            .iter()
            .enumerate()
            .filter(|(_, e)| e.current)
            .map(|(i, _)| i)
            .collect();
        let &[current] = current_events.as_slice() else {
            return Err(CommerceError::InvalidTimeline(format!(
                "expected exactly one current milestone, found {}",
                current_events.len()
            )));
        };
        let completed = self.events.iter().take_while(|e| e.completed).count();
        if self.events[completed..].iter().any(|e| e.completed) {
            return Err(CommerceError::InvalidTimeline(
                "completed milestones must come first".to_string(),
            ));
        }
        if completed == 0 || current != completed - 1 {
            return Err(CommerceError::InvalidTimeline(
                "current milestone must be the last completed one".to_string(),
            ));
        }
        Ok(())
    }
}
