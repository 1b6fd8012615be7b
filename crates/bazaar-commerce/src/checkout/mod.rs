//! Checkout module.
//!
//! Contains the checkout wizard, saved addresses and payment methods,
//! orders, and order tracking.

pub(crate) mod address;
mod flow;
pub(crate) mod order;
pub(crate) mod payment;
mod tracking;

pub use address::SavedAddress;
pub use flow::{Advance, CheckoutAction, CheckoutState, CheckoutStep, StepState};
pub use order::{Order, OrderItem, OrderStatus};
pub use payment::{PaymentKind, PaymentMethod, PaymentSummary};
pub use tracking::{Timeline, TrackingEvent, MILESTONES};
