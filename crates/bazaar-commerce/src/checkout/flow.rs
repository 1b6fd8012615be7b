//! Checkout wizard state machine.
//!
//! Shipping -> Payment -> Review -> (submit) -> processing -> confirmed.
//! Continue is gated on the current step's selection; going back is always
//! allowed. Once submitted, everything except the confirmation is ignored.

use crate::error::CommerceError;
use crate::ids::{AddressId, OrderId, PaymentMethodId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Steps in the checkout wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    /// Choose a delivery address.
    #[default]
    Shipping,
    /// Choose a payment method.
    Payment,
    /// Review and place the order.
    Review,
}

impl CheckoutStep {
    pub const ALL: [CheckoutStep; 3] = [
        CheckoutStep::Shipping,
        CheckoutStep::Payment,
        CheckoutStep::Review,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "shipping",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Review => "review",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "Shipping",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Review => "Review",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Shipping => 1,
            CheckoutStep::Payment => 2,
            CheckoutStep::Review => 3,
        }
    }

    pub fn next(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Shipping => Some(CheckoutStep::Payment),
            CheckoutStep::Payment => Some(CheckoutStep::Review),
            CheckoutStep::Review => None,
        }
    }

    pub fn previous(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Shipping => None,
            CheckoutStep::Payment => Some(CheckoutStep::Shipping),
            CheckoutStep::Review => Some(CheckoutStep::Payment),
        }
    }
}

/// How a step renders in the step indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Complete,
    Current,
    Upcoming,
}

/// Result of pressing Continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next step.
    To(CheckoutStep),
    /// Review was confirmed; the order is now being placed.
    Submitted,
}

/// User and system actions on the checkout wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutAction {
    SelectAddress(AddressId),
    SelectPayment(PaymentMethodId),
    /// Validate the current step and move on (or submit from Review).
    Continue,
    Back,
    /// Jump via the step indicator; only earlier steps are reachable.
    GoTo(CheckoutStep),
    DismissAlert,
    /// The simulated submission finished with this order id.
    Confirm(OrderId),
}

/// State of the checkout wizard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutState {
    step: CheckoutStep,
    selected_address_id: Option<AddressId>,
    selected_payment_id: Option<PaymentMethodId>,
    processing: bool,
    alert: Option<String>,
    confirmed_order: Option<OrderId>,
}

impl CheckoutState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn selected_address_id(&self) -> Option<&AddressId> {
        self.selected_address_id.as_ref()
    }

    pub fn selected_payment_id(&self) -> Option<&PaymentMethodId> {
        self.selected_payment_id.as_ref()
    }

    /// The order is being placed.
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// Blocking validation message shown inline.
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn confirmed_order(&self) -> Option<&OrderId> {
        self.confirmed_order.as_ref()
    }

    /// Submitted or confirmed; the wizard no longer accepts edits.
    pub fn is_locked(&self) -> bool {
        self.processing || self.confirmed_order.is_some()
    }

    pub fn step_state(&self, step: CheckoutStep) -> StepState {
        match step.cmp(&self.step) {
            std::cmp::Ordering::Less => StepState::Complete,
            std::cmp::Ordering::Equal => StepState::Current,
            std::cmp::Ordering::Greater => StepState::Upcoming,
        }
    }

    /// Choose an address. Clears any alert.
    pub fn select_address(&mut self, id: AddressId) -> Result<(), CommerceError> {
        self.ensure_unlocked("select_address")?;
        debug!(address = %id, "checkout address selected");
        self.selected_address_id = Some(id);
        self.alert = None;
        Ok(())
    }

    /// Choose a payment method. Clears any alert.
    pub fn select_payment(&mut self, id: PaymentMethodId) -> Result<(), CommerceError> {
        self.ensure_unlocked("select_payment")?;
        debug!(payment = %id, "checkout payment selected");
        self.selected_payment_id = Some(id);
        self.alert = None;
        Ok(())
    }

    /// Check the current step has what it needs.
    pub fn validate_step(&self) -> Result<(), CommerceError> {
        match self.step {
            CheckoutStep::Shipping if self.selected_address_id.is_none() => Err(
                CommerceError::CheckoutIncomplete("a shipping address".to_string()),
            ),
            CheckoutStep::Payment if self.selected_payment_id.is_none() => Err(
                CommerceError::CheckoutIncomplete("a payment method".to_string()),
            ),
            _ => Ok(()),
        }
    }

    /// Continue: move to the next step, or submit from Review.
    ///
    /// A missing selection keeps the step and sets the alert.
    pub fn advance(&mut self) -> Result<Advance, CommerceError> {
        self.ensure_unlocked("continue")?;
        if let Err(e) = self.validate_step() {
            warn!(step = self.step.as_str(), error = %e, "checkout step blocked");
            self.alert = Some(e.to_string());
            return Err(e);
        }
        self.alert = None;
        match self.step.next() {
            Some(next) => {
                debug!(from = self.step.as_str(), to = next.as_str(), "checkout advanced");
                self.step = next;
                Ok(Advance::To(next))
            }
            None => {
                info!("checkout submitted");
                self.processing = true;
                Ok(Advance::Submitted)
            }
        }
    }

    /// Go back one step.
    pub fn go_back(&mut self) -> Result<CheckoutStep, CommerceError> {
        self.ensure_unlocked("back")?;
        let prev = self
            .step
            .previous()
            .ok_or_else(|| self.transition_error("none"))?;
        self.step = prev;
        self.alert = None;
        Ok(prev)
    }

    /// Jump to the current or an earlier step.
    pub fn go_to(&mut self, step: CheckoutStep) -> Result<(), CommerceError> {
        self.ensure_unlocked(step.as_str())?;
        if step > self.step {
            return Err(self.transition_error(step.as_str()));
        }
        self.step = step;
        self.alert = None;
        Ok(())
    }

    /// Finish the simulated submission.
    pub fn confirm(&mut self, order_id: OrderId) -> Result<(), CommerceError> {
        if !self.processing {
            return Err(self.transition_error("confirmed"));
        }
        info!(order_id = %order_id, "order confirmed");
        self.processing = false;
        self.confirmed_order = Some(order_id);
        Ok(())
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Pure reducer: the state after `action`. Blocked steps come back with
    /// the alert set; actions that are not allowed right now are ignored.
    pub fn reduce(&self, action: CheckoutAction) -> CheckoutState {
        let mut next = self.clone();
        let result = match action {
            CheckoutAction::SelectAddress(id) => next.select_address(id),
            CheckoutAction::SelectPayment(id) => next.select_payment(id),
            CheckoutAction::Continue => next.advance().map(|_| ()),
            CheckoutAction::Back => next.go_back().map(|_| ()),
            CheckoutAction::GoTo(step) => next.go_to(step),
            CheckoutAction::DismissAlert => {
                next.dismiss_alert();
                Ok(())
            }
            CheckoutAction::Confirm(id) => next.confirm(id),
        };
        match result {
            Ok(()) => next,
            // The alert was recorded on `next`.
            Err(CommerceError::CheckoutIncomplete(_)) => next,
            Err(e) => {
                debug!(error = %e, "checkout action ignored");
                self.clone()
            }
        }
    }

    fn ensure_unlocked(&self, to: &str) -> Result<(), CommerceError> {
        if self.is_locked() {
            return Err(self.transition_error(to));
        }
        Ok(())
    }

    fn transition_error(&self, to: &str) -> CommerceError {
        let from = if self.confirmed_order.is_some() {
            "confirmed"
        } else if self.processing {
            "processing"
        } else {
            self.step.as_str()
        };
        CommerceError::InvalidCheckoutTransition {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}
