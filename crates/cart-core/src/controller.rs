//! Cart Controller
//!
//! Owns the single cart for the page and keeps three copies in step: the
//! in-memory list, the persisted snapshot and the rendered view. Every
//! mutation runs mutate -> save -> badge -> display -> (notification).

use log::{debug, error, info};

use crate::config::CartConfig;
use crate::domain::{AddOutcome, Cart, DecreaseOutcome, NewCartItem};
use crate::repository::{CartRepository, CartStorage};
use crate::view::{CartLine, CartSummary, CartView, Notifier};

/// Action requested by a rendered row control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    Increase(String),
    Decrease(String),
    Remove(String),
}

impl CartAction {
    /// `data-cart-action` values written on rendered controls
    pub const INCREASE: &'static str = "increase";
    pub const DECREASE: &'static str = "decrease";
    pub const REMOVE: &'static str = "remove";

    /// Parse a control's `data-cart-action` value paired with its `data-id`
    pub fn from_control(action: &str, id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        match action {
            Self::INCREASE => Some(Self::Increase(id)),
            Self::DECREASE => Some(Self::Decrease(id)),
            Self::REMOVE => Some(Self::Remove(id)),
            _ => None,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Increase(id) | Self::Decrease(id) | Self::Remove(id) => id,
        }
    }
}

/// What a checkout click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Nothing to buy; the shopper was notified
    Empty,
    /// The confirmation stub was shown
    Confirmed,
}

pub struct CartController<S, V, N> {
    cart: Cart,
    repository: CartRepository<S>,
    view: V,
    notifier: N,
    config: CartConfig,
}

impl<S, V, N> CartController<S, V, N>
where
    S: CartStorage,
    V: CartView,
    N: Notifier,
{
    /// Restore the persisted cart. Does not render.
    pub fn load(repository: CartRepository<S>, view: V, notifier: N, config: CartConfig) -> Self {
        let cart = repository.load();
        info!(
            "cart loaded from `{}`: {} entries, {} units",
            repository.key(),
            cart.len(),
            cart.item_count()
        );
        Self {
            cart,
            repository,
            view,
            notifier,
            config,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn repository(&self) -> &CartRepository<S> {
        &self.repository
    }

    /// Add one unit. An existing entry keeps its stored details.
    pub fn add_to_cart(&mut self, new_item: NewCartItem) {
        let name = new_item.name.clone();
        match self.cart.add(new_item) {
            AddOutcome::Inserted => debug!("added `{}`", name),
            AddOutcome::Incremented { quantity } => debug!("`{}` now x{}", name, quantity),
        }
        self.commit();
        self.notifier.notify(&self.config.messages.added_message(&name));
    }

    pub fn increase_quantity(&mut self, id: &str) {
        match self.cart.increase(id) {
            Some(quantity) => debug!("increased `{}` to {}", id, quantity),
            None => debug!("increase ignored, `{}` not in cart", id),
        }
        self.commit();
    }

    /// Take one unit away; a quantity-1 entry is removed instead
    pub fn decrease_quantity(&mut self, id: &str) {
        match self.cart.decrease(id) {
            Some(DecreaseOutcome::Decremented { quantity }) => {
                debug!("decreased `{}` to {}", id, quantity)
            }
            Some(DecreaseOutcome::Removed(_)) => debug!("decreased `{}` out of the cart", id),
            None => debug!("decrease ignored, `{}` not in cart", id),
        }
        self.commit();
    }

    /// Delete an entry and announce it. Unknown ids are silent.
    pub fn remove_item(&mut self, id: &str) {
        let removed = self.cart.remove(id);
        self.commit();

        match removed {
            Some(item) => {
                debug!("removed `{}`", id);
                self.notifier
                    .notify(&self.config.messages.removed_message(&item.name));
            }
            None => debug!("remove ignored, `{}` not in cart", id),
        }
    }

    /// Route a row control click
    pub fn dispatch(&mut self, action: CartAction) {
        match action {
            CartAction::Increase(id) => self.increase_quantity(&id),
            CartAction::Decrease(id) => self.decrease_quantity(&id),
            CartAction::Remove(id) => self.remove_item(&id),
        }
    }

    /// Checkout stub; never modifies the cart
    pub fn checkout(&mut self) -> CheckoutOutcome {
        if self.cart.is_empty() {
            self.notifier.notify(&self.config.messages.checkout_empty);
            return CheckoutOutcome::Empty;
        }
        info!(
            "checkout requested for {} units",
            self.cart.item_count()
        );
        self.view.confirm_checkout(&self.config.messages.checkout_confirm);
        CheckoutOutcome::Confirmed
    }

    /// Refresh badges and the cart page
    pub fn render(&self) {
        self.update_cart_count();
        self.update_cart_display();
    }

    pub fn update_cart_count(&self) {
        self.view.set_badge(self.cart.item_count());
    }

    /// Full rebuild of the cart page, skipped when the page has no cart
    pub fn update_cart_display(&self) {
        if !self.view.has_items_container() {
            return;
        }
        if self.cart.is_empty() {
            self.view.show_empty_state();
            return;
        }

        let symbol = &self.config.currency_symbol;
        let lines = CartLine::from_cart(&self.cart, symbol);
        let summary = CartSummary::from_cart(&self.cart);
        self.view.render_items(
            &lines,
            &summary.subtotal_label(symbol),
            &summary.total_label(symbol),
        );
    }

    /// Write through, then re-render
    fn commit(&self) {
        if let Err(e) = self.repository.save(&self.cart) {
            error!("saving cart to `{}` failed: {}", self.repository.key(), e);
        }
        self.render();
    }
}
