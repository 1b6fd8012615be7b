//! End-to-end flow over the bundled fixtures: browse, fill the cart, check
//! out, and track the new order.

use bazaar_commerce::prelude::*;
use bazaar_commerce::task::submit_order;
use chrono::Utc;

fn store() -> FixtureStore {
    FixtureStore::bundled().expect("bundled fixtures")
}

fn add(cart: CartState, store: &FixtureStore, product_id: &str, quantity: u32) -> CartState {
    let product = store.product(&ProductId::new(product_id)).unwrap();
    let artisan = store.artisan(&product.artisan_id).unwrap();
    let item = LineItem::from_product(
        product,
        artisan.name.clone(),
        quantity,
        product.default_selection(),
    )
    .unwrap();
    cart.reduce(CartAction::Add(item))
}

#[test]
fn test_cart_totals_from_catalog() {
    let store = store();
    let config = StoreConfig::default();

    let cart = add(CartState::new(&config), &store, "p-ikat-saree", 2);
    let summary = cart.summary();
    assert_eq!(summary.subtotal, Money::inr(4998));
    assert_eq!(summary.shipping, Money::inr(0));
    assert_eq!(summary.taxes, Money::inr(900));
    assert_eq!(summary.total, Money::inr(5898));

    let cart = cart.reduce(CartAction::ApplyPromo(" SAVE10 ".to_string()));
    assert_eq!(cart.summary().discount, Money::inr(500));
    assert_eq!(cart.summary().total, Money::inr(5398));

    // One non-free item adds a single flat fee.
    let cart = add(cart, &store, "p-blue-tiles", 3);
    assert_eq!(cart.summary().shipping, Money::inr(99));
    let cart = add(cart, &store, "p-ikat-dupatta", 1);
    assert_eq!(cart.summary().shipping, Money::inr(99));

    let s = cart.summary();
    assert_eq!(
        s.total.amount,
        s.subtotal.amount + s.shipping.amount + s.taxes.amount - s.discount.amount
    );
}

#[test]
fn test_invalid_promo_leaves_summary() {
    let store = store();
    let cart = add(CartState::new(&StoreConfig::default()), &store, "p-bidri-box", 1);
    let before = cart.summary().clone();
    let cart = cart.reduce(CartAction::ApplyPromo("FREESTUFF".to_string()));
    assert_eq!(cart.summary(), &before);
    assert_eq!(cart.promo_error(), Some("Invalid promo code"));
}

#[test]
fn test_checkout_wizard_to_tracking() {
    let store = store();
    let config = StoreConfig::default();
    let cart = add(CartState::new(&config), &store, "p-kundan-earrings", 1);

    let address = SavedAddress::preferred(store.addresses()).unwrap().clone();
    let payment = store
        .payment_method(&PaymentMethodId::new("pm-upi"))
        .unwrap()
        .clone();

    let checkout = CheckoutState::new().reduce(CheckoutAction::Continue);
    assert_eq!(checkout.step(), CheckoutStep::Shipping);
    assert!(checkout.alert().is_some());

    let checkout = checkout
        .reduce(CheckoutAction::SelectAddress(address.id.clone()))
        .reduce(CheckoutAction::Continue)
        .reduce(CheckoutAction::SelectPayment(payment.id.clone()))
        .reduce(CheckoutAction::Continue)
        .reduce(CheckoutAction::Continue);
    assert!(checkout.is_processing());

    let order_id = OrderId::synthetic();
    let checkout = checkout.reduce(CheckoutAction::Confirm(order_id.clone()));
    assert_eq!(checkout.confirmed_order(), Some(&order_id));

    let order = Order::from_checkout(
        order_id,
        store.customer().id.clone(),
        store.customer().name.clone(),
        &cart,
        &address,
        &payment,
        Utc::now(),
    )
    .unwrap();
    assert_eq!(order.total(), cart.summary().total);

    let timeline = order.timeline();
    assert!(timeline.validate().is_ok());
    assert_eq!(timeline.current().unwrap().title, "Payment Confirmed");
}

#[tokio::test]
async fn test_simulated_submission() {
    let config = StoreConfig::from_toml_str("[checkout]\nsubmit_delay_ms = 5\n").unwrap();
    let checkout = CheckoutState::new()
        .reduce(CheckoutAction::SelectAddress(AddressId::new("addr-home")))
        .reduce(CheckoutAction::Continue)
        .reduce(CheckoutAction::SelectPayment(PaymentMethodId::new("pm-card")))
        .reduce(CheckoutAction::Continue)
        .reduce(CheckoutAction::Continue);

    let order_id = submit_order(&config.checkout).join().await.unwrap();
    let checkout = checkout.reduce(CheckoutAction::Confirm(order_id));
    assert!(!checkout.is_processing());
    assert!(checkout
        .confirmed_order()
        .unwrap()
        .as_str()
        .starts_with("ORD-"));
}
