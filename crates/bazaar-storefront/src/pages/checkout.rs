use std::time::Duration;

use bazaar_commerce::prelude::*;
use chrono::Utc;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::components::{EmptyState, OrderItemsList, SummaryRows};
use crate::routes::Page;
use crate::state::{use_shop, Shop};

/// Three-step checkout: shipping address, payment method, review.
#[component]
pub fn CheckoutPage() -> impl IntoView {
    let shop = use_shop();
    let navigate = use_navigate();
    let cart = shop.cart;
    let checkout = RwSignal::new(CheckoutState::new());

    // Simulated submission. The timer is cleared if the page goes away
    // first, so no order is placed for a checkout nobody is looking at.
    let pending = StoredValue::new(None::<TimeoutHandle>);
    let delay = Duration::from_millis(shop.config.checkout.submit_delay_ms);
    on_cleanup(move || {
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
    });

    let submit = {
        let shop = shop.clone();
        move || {
            let state = checkout.get_untracked();
            let (Some(address_id), Some(payment_id)) = (
                state.selected_address_id().cloned(),
                state.selected_payment_id().cloned(),
            ) else {
                return;
            };
            tracing::info!(delay_ms = delay.as_millis() as u64, "submitting order");

            let shop = shop.clone();
            let navigate = navigate.clone();
            let finish = move || {
                pending.set_value(None);
                match shop.place_order(OrderId::synthetic(), &address_id, &payment_id, Utc::now()) {
                    Ok(order) => {
                        checkout.update(|c| *c = c.reduce(CheckoutAction::Confirm(order.id.clone())));
                        navigate(&Page::OrderConfirmation(order.id).href(), Default::default());
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "order submission failed");
                        checkout.set(CheckoutState::new());
                    }
                }
            };
            match set_timeout_with_handle(finish, delay) {
                Ok(handle) => pending.set_value(Some(handle)),
                Err(_) => {
                    tracing::error!("could not schedule order submission");
                    checkout.set(CheckoutState::new());
                }
            }
        }
    };

    let dispatch = move |action: CheckoutAction| {
        let before = checkout.get_untracked();
        let after = before.reduce(action);
        let submitted = !before.is_processing() && after.is_processing();
        checkout.set(after);
        if submitted {
            submit();
        }
    };

    let nothing_to_buy = move || {
        cart.with(CartState::is_empty)
            && checkout.with(|c| c.confirmed_order().is_none() && !c.is_processing())
    };

    let steps = {
        let dispatch = dispatch.clone();
        move || {
            let state = checkout.get();
            CheckoutStep::ALL
                .into_iter()
                .map(|step| {
                    let status = state.step_state(step);
                    let clickable = status == StepState::Complete && !state.is_locked();
                    let dispatch = dispatch.clone();
                    view! {
                        <li
                            class:complete=status == StepState::Complete
                            class:current=status == StepState::Current
                            class:clickable=clickable
                            on:click=move |_| {
                                if clickable {
                                    dispatch(CheckoutAction::GoTo(step));
                                }
                            }
                        >
                            <span class="step-number">
                                {if status == StepState::Complete { "✓".to_string() } else { step.number().to_string() }}
                            </span>
                            {step.display_name()}
                        </li>
                    }
                })
                .collect::<Vec<_>>()
        }
    };

    let alert = {
        let dispatch = dispatch.clone();
        move || {
            checkout.with(|c| c.alert().map(str::to_string)).map(|message| {
                let dispatch = dispatch.clone();
                view! {
                    <div class="alert" role="alert">
                        <span>{message}</span>
                        <button class="link" on:click=move |_| dispatch(CheckoutAction::DismissAlert)>"×"</button>
                    </div>
                }
            })
        }
    };

    let body = {
        let shop = shop.clone();
        let dispatch = dispatch.clone();
        move || {
            let state = checkout.get();
            match state.step() {
                CheckoutStep::Shipping => address_step(shop.store.addresses(), &state, dispatch.clone()),
                CheckoutStep::Payment => payment_step(shop.store.payment_methods(), &state, dispatch.clone()),
                CheckoutStep::Review => review_step(&shop, &state),
            }
        }
    };

    let buttons = move || {
        let state = checkout.get();
        let back = dispatch.clone();
        let next = dispatch.clone();
        let label = if state.is_processing() {
            "Processing..."
        } else {
            match state.step() {
                CheckoutStep::Shipping => "Continue to Payment",
                CheckoutStep::Payment => "Review Order",
                CheckoutStep::Review => "Place Order",
            }
        };
        view! {
            <div style="display: flex; justify-content: space-between; margin-top: 1.5rem;">
                <button
                    disabled=state.step() == CheckoutStep::Shipping || state.is_locked()
                    on:click=move |_| back(CheckoutAction::Back)
                >
                    "Back"
                </button>
                <button class="btn" disabled=state.is_locked() on:click=move |_| next(CheckoutAction::Continue)>
                    {label}
                </button>
            </div>
        }
    };

    view! {
        <Title text=Page::Checkout.title()/>
        <h2>"Checkout"</h2>
        <Show
            when=move || !nothing_to_buy()
            fallback=|| view! {
                <EmptyState
                    title="Your cart is empty"
                    message="Add something to your cart before checking out."
                    href=Page::Marketplace.href()
                    cta="Browse the Marketplace"
                />
            }
        >
            <ol class="checkout-steps">{steps.clone()}</ol>
            {alert.clone()}
            <div style="display: grid; grid-template-columns: 2fr 1fr; gap: 2rem;">
                <section>
                    {body.clone()}
                    {buttons.clone()}
                </section>
                <aside>
                    <h3>"Order Summary"</h3>
                    {move || view! { <SummaryRows summary=cart.with(|c| c.summary().clone())/> }}
                </aside>
            </div>
        </Show>
    }
}

fn address_step(
    addresses: &[SavedAddress],
    state: &CheckoutState,
    dispatch: impl Fn(CheckoutAction) + Clone + 'static,
) -> AnyView {
    let locked = state.is_locked();
    let options = addresses
        .iter()
        .map(|address| {
            let id = address.id.clone();
            let selected = state.selected_address_id() == Some(&id);
            let dispatch = dispatch.clone();
            view! {
                <label class="choice" class:selected=selected>
                    <input
                        type="radio"
                        name="address"
                        prop:checked=selected
                        disabled=locked
                        on:change=move |_| dispatch(CheckoutAction::SelectAddress(id.clone()))
                    />
                    <div>
                        <strong>{address.label.clone()}</strong>
                        {address.is_default.then(|| view! { <span class="tag">"Default"</span> })}
                        <p>{address.name.clone()}</p>
                        <p style="white-space: pre-line; color: #666;">{address.multi_line()}</p>
                        <p style="color: #666;">{address.phone.clone()}</p>
                    </div>
                </label>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <h3>"Shipping Address"</h3>
        <div class="choices">{options}</div>
    }
    .into_any()
}

fn payment_step(
    methods: &[PaymentMethod],
    state: &CheckoutState,
    dispatch: impl Fn(CheckoutAction) + Clone + 'static,
) -> AnyView {
    let locked = state.is_locked();
    let options = methods
        .iter()
        .map(|method| {
            let id = method.id.clone();
            let selected = state.selected_payment_id() == Some(&id);
            let dispatch = dispatch.clone();
            view! {
                <label class="choice" class:selected=selected>
                    <input
                        type="radio"
                        name="payment"
                        prop:checked=selected
                        disabled=locked
                        on:change=move |_| dispatch(CheckoutAction::SelectPayment(id.clone()))
                    />
                    <div>
                        <strong>{method.kind.display_name()}</strong>
                        {method.is_default.then(|| view! { <span class="tag">"Default"</span> })}
                        <p>{method.label.clone()}</p>
                        <p style="color: #666;">{method.detail.clone()}</p>
                    </div>
                </label>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <h3>"Payment Method"</h3>
        <div class="choices">{options}</div>
    }
    .into_any()
}

fn review_step(shop: &Shop, state: &CheckoutState) -> AnyView {
    let address = state
        .selected_address_id()
        .and_then(|id| shop.store.address(id).ok())
        .map(SavedAddress::one_line)
        .unwrap_or_default();
    let payment = state
        .selected_payment_id()
        .and_then(|id| shop.store.payment_method(id).ok())
        .map(|m| format!("{} · {} {}", m.kind.display_name(), m.label, m.detail))
        .unwrap_or_default();
    let (items, delivery) = shop.cart.with(|cart| {
        let items: Vec<OrderItem> = cart.items().iter().map(OrderItem::from).collect();
        let delivery = cart
            .items()
            .first()
            .map(|i| i.estimated_delivery.clone())
            .unwrap_or_default();
        (items, delivery)
    });

    view! {
        <h3>"Review Your Order"</h3>
        <div class="review-block">
            <h4>"Ship to"</h4>
            <p>{address}</p>
        </div>
        <div class="review-block">
            <h4>"Pay with"</h4>
            <p>{payment}</p>
        </div>
        <div class="review-block">
            <h4>"Items"</h4>
            <OrderItemsList items=items/>
            <p style="color: #666;">"Estimated delivery: " {delivery}</p>
        </div>
    }
    .into_any()
}
