//! Session state shared through context.

use std::collections::BTreeMap;
use std::sync::Arc;

use bazaar_commerce::prelude::*;
use chrono::{DateTime, Utc};
use leptos::prelude::*;

const STORE_TOML: &str = include_str!("../store.toml");

/// Parse the embedded `store.toml`, falling back to defaults.
pub fn load_config() -> StoreConfig {
    parse_config(STORE_TOML)
}

fn parse_config(content: &str) -> StoreConfig {
    StoreConfig::from_toml_str(content).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid store configuration, using defaults");
        StoreConfig::default()
    })
}

/// Mock data, configuration and the mutable session (cart, placed orders).
#[derive(Clone)]
pub struct Shop {
    pub store: Arc<FixtureStore>,
    pub config: Arc<StoreConfig>,
    pub cart: RwSignal<CartState>,
    /// Orders placed during this session, newest last.
    pub placed_orders: RwSignal<Vec<Order>>,
}

impl Shop {
    pub fn new(store: FixtureStore, config: StoreConfig) -> Self {
        let cart = RwSignal::new(CartState::new(&config));
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
            cart,
            placed_orders: RwSignal::new(Vec::new()),
        }
    }

    /// Run a cart action through the reducer.
    pub fn dispatch(&self, action: CartAction) {
        self.cart.update(|cart| *cart = cart.reduce(action));
    }

    /// Add a product with the chosen options to the cart.
    pub fn add_to_cart(
        &self,
        product: &Product,
        quantity: u32,
        options: BTreeMap<String, String>,
    ) -> Result<(), CommerceError> {
        product.validate_selection(&options)?;
        let artisan = self.store.artisan(&product.artisan_id)?;
        let item = LineItem::from_product(product, artisan.name.clone(), quantity, options)?;
        self.dispatch(CartAction::Add(item));
        Ok(())
    }

    /// Look up an order placed this session, then the bundled history.
    pub fn find_order(&self, id: &OrderId) -> Option<Order> {
        self.placed_orders
            .with(|placed| find_order(placed, self.store.as_ref(), id))
    }

    /// Freeze the cart into an order, record it for this session and empty
    /// the cart.
    pub fn place_order(
        &self,
        order_id: OrderId,
        address_id: &AddressId,
        payment_id: &PaymentMethodId,
        placed_at: DateTime<Utc>,
    ) -> Result<Order, CommerceError> {
        let address = self.store.address(address_id)?;
        let payment = self.store.payment_method(payment_id)?;
        let customer = self.store.customer();
        let order = self.cart.with_untracked(|cart| {
            Order::from_checkout(
                order_id,
                customer.id.clone(),
                customer.name.clone(),
                cart,
                address,
                payment,
                placed_at,
            )
        })?;

        tracing::info!(order_id = %order.id, total = %order.total(), status = order.status.as_str(), "order placed");
        self.placed_orders.update(|orders| orders.push(order.clone()));
        self.dispatch(CartAction::Clear);
        Ok(order)
    }

    /// Bundled orders followed by this session's.
    pub fn all_orders(&self) -> Vec<Order> {
        let mut orders = self.store.orders().to_vec();
        self.placed_orders.with(|placed| orders.extend(placed.iter().cloned()));
        orders
    }

    pub fn currency(&self) -> Currency {
        self.config.pricing.currency
    }
}

pub(crate) fn find_order(
    placed: &[Order],
    store: &impl OrderRepository,
    id: &OrderId,
) -> Option<Order> {
    placed
        .iter()
        .find(|o| &o.id == id)
        .or_else(|| store.order(id).ok())
        .cloned()
}

/// The [`Shop`] provided by the app root.
pub fn use_shop() -> Shop {
    expect_context::<Shop>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = load_config();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_bad_config_falls_back() {
        let config = parse_config("[pricing]\ntax_rate_bps = 99999\n");
        assert_eq!(config.pricing.tax_rate_bps, 1800);
    }

    #[test]
    fn test_find_order_prefers_session() {
        let store = FixtureStore::bundled().unwrap();
        let mut placed = store.order(&OrderId::new("ORD-1002")).unwrap().clone();
        placed.id = OrderId::new("ORD-5555");

        let found = find_order(&[placed], &store, &OrderId::new("ORD-5555")).unwrap();
        assert_eq!(found.summary.total, Money::inr(3767));

        let bundled = find_order(&[], &store, &OrderId::new("ORD-1001")).unwrap();
        assert_eq!(bundled.status, OrderStatus::Delivered);

        assert!(find_order(&[], &store, &OrderId::new("ORD-0000")).is_none());
    }

    #[test]
    fn test_place_order_records_and_clears_cart() {
        let owner = Owner::new();
        owner.with(|| {
            let shop = Shop::new(FixtureStore::bundled().unwrap(), StoreConfig::default());
            let product = shop
                .store
                .product(&ProductId::new("p-blue-tiles"))
                .unwrap()
                .clone();
            shop.add_to_cart(&product, 2, product.default_selection())
                .unwrap();
            let expected = shop.cart.with_untracked(|c| c.summary().total);

            let order = shop
                .place_order(
                    OrderId::new("ORD-7777"),
                    &AddressId::new("addr-home"),
                    &PaymentMethodId::new("pm-cod"),
                    Utc::now(),
                )
                .unwrap();

            assert_eq!(order.total(), expected);
            assert_eq!(order.status, OrderStatus::Pending);
            assert!(shop.cart.with_untracked(CartState::is_empty));
            assert_eq!(shop.find_order(&OrderId::new("ORD-7777")), Some(order));
            assert_eq!(shop.all_orders().len(), shop.store.orders().len() + 1);
        });
    }

    #[test]
    fn test_add_to_cart_rejects_unknown_option() {
        let owner = Owner::new();
        owner.with(|| {
            let shop = Shop::new(FixtureStore::bundled().unwrap(), StoreConfig::default());
            let product = shop
                .store
                .product(&ProductId::new("p-ikat-saree"))
                .unwrap()
                .clone();
            let mut options = BTreeMap::new();
            options.insert("Color".to_string(), "Neon".to_string());
            assert!(matches!(
                shop.add_to_cart(&product, 1, options),
                Err(CommerceError::InvalidSelection(_))
            ));
            assert!(shop.cart.with_untracked(CartState::is_empty));
        });
    }
}
