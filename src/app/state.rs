use fltk::dialog;

use crate::app::domain::cart::Cart;
use crate::app::domain::menu::MenuCatalog;
use crate::app::domain::order::OrderSummary;
use crate::app::domain::validation::{
    SubmissionError, check_submission, validate_address, validate_submission,
};
use crate::app::messages::Message;
use crate::app::services::whatsapp::{build_deep_link, compose_order_message};
use crate::ui::main_window::MainWidgets;

/// Main application coordinator. Owns the catalog (immutable), the cart (the
/// only mutable core state) and the widgets, and handles every message coming
/// off the FLTK channel. All mutation happens here, between `app.wait()`
/// iterations, so there is exactly one writer.
pub struct AppState {
    catalog: MenuCatalog,
    cart: Cart,
    active_category: String,
    widgets: MainWidgets,
}

impl AppState {
    pub fn new(catalog: MenuCatalog, widgets: MainWidgets) -> Self {
        let active_category = catalog
            .categories
            .first()
            .map(|c| c.name.clone())
            .unwrap_or_default();
        let mut state = Self {
            catalog,
            cart: Cart::new(),
            active_category,
            widgets,
        };
        state
            .widgets
            .menu_panel
            .rebuild_tabs(&state.catalog, &state.active_category);
        state.refresh();
        state
    }

    pub fn handle(&mut self, message: Message) {
        match message {
            Message::SelectCategory(name) => {
                if name != self.active_category && self.catalog.category(&name).is_some() {
                    self.active_category = name;
                    self.widgets
                        .menu_panel
                        .rebuild_tabs(&self.catalog, &self.active_category);
                    self.widgets.menu_panel.rebuild_items(
                        &self.catalog,
                        &self.cart,
                        &self.active_category,
                    );
                }
            }
            Message::IncrementItem(id) => {
                // Stale ids (no catalog match) are ignored
                if self.catalog.item(&id).is_some() {
                    self.cart.increment(&id);
                    self.refresh();
                }
            }
            Message::DecrementItem(id) => {
                self.cart.decrement(&id);
                self.refresh();
            }
            Message::RemoveItem(id) => {
                if self.cart.quantity(&id) > 0 {
                    self.cart.remove(&id);
                    self.refresh();
                    self.widgets.cart_panel.set_status("Item removed from order");
                }
            }
            Message::ClearOrder => self.clear_order(),
            Message::AddressEdited => self.refresh_checkout(),
            Message::SubmitOrder => self.submit_order(),
        }
    }

    /// Recompute the summary and re-render everything that depends on the
    /// cart. Called after every cart mutation.
    fn refresh(&mut self) {
        let summary = OrderSummary::compute(&self.cart, &self.catalog);
        self.widgets.cart_panel.rebuild(&summary);
        self.widgets
            .menu_panel
            .rebuild_items(&self.catalog, &self.cart, &self.active_category);
        self.refresh_checkout();
    }

    fn refresh_checkout(&mut self) {
        let address = self.widgets.cart_panel.address();
        // Only hint once the user has typed something
        let show_hint = !address.trim().is_empty() && !validate_address(&address);
        self.widgets.cart_panel.set_address_hint_visible(show_hint);
        self.widgets
            .cart_panel
            .set_submit_enabled(validate_submission(&self.cart, &address));
    }

    fn clear_order(&mut self) {
        if self.cart.is_empty() {
            return;
        }
        let choice = dialog::choice2_default(
            "Remove all items from your order?",
            "Cancel",
            "Remove all",
            "",
        );
        if choice == Some(1) {
            self.cart.clear();
            self.refresh();
            self.widgets
                .cart_panel
                .set_status("All items removed from order");
        }
    }

    fn submit_order(&mut self) {
        let address = self.widgets.cart_panel.address();
        match check_submission(&self.cart, &address) {
            Err(SubmissionError::EmptyOrder) => {
                dialog::alert_default("Please add at least one item to your order");
            }
            Err(SubmissionError::InvalidAddress) => {
                dialog::alert_default("Please enter a valid delivery address");
            }
            Ok(()) => {
                let summary = OrderSummary::compute(&self.cart, &self.catalog);
                let text = compose_order_message(&self.catalog, &summary, &address);
                let url = build_deep_link(&self.catalog.whatsapp_number, &text);
                // Fire-and-forget handoff to the external application
                match open::that(&url) {
                    Ok(()) => self
                        .widgets
                        .cart_panel
                        .set_status("Opening WhatsApp with your order details"),
                    Err(e) => {
                        eprintln!("Failed to open WhatsApp link: {}", e);
                        dialog::alert_default("Could not open WhatsApp. Please try again.");
                    }
                }
            }
        }
    }
}
