use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Color, FrameType},
    frame::Frame,
    group::{Flex, FlexType, Pack, PackType, Scroll, ScrollType},
    prelude::*,
};

use crate::app::domain::cart::Cart;
use crate::app::domain::menu::{MenuCatalog, MenuItem};
use crate::app::messages::Message;

pub const TABS_HEIGHT: i32 = 36;

const ROW_HEIGHT: i32 = 72;
const TAB_WIDTH: i32 = 130;

/// Left side of the window: category tabs above a scrolling list of item
/// rows with quantity controls. Rebuilt wholesale whenever the active
/// category or the cart changes.
pub struct MenuPanel {
    tabs: Pack,
    items: Pack,
    scroll: Scroll,
    sender: Sender<Message>,
}

impl MenuPanel {
    pub fn new(x: i32, y: i32, w: i32, h: i32, sender: Sender<Message>) -> Self {
        let mut tabs = Pack::new(x, y, w, TABS_HEIGHT, None);
        tabs.set_type(PackType::Horizontal);
        tabs.set_spacing(8);
        tabs.end();

        let list_y = y + TABS_HEIGHT + 8;
        let list_h = h - TABS_HEIGHT - 8;
        let mut scroll = Scroll::new(x, list_y, w, list_h, None);
        scroll.set_type(ScrollType::Vertical);
        scroll.set_scrollbar_size(12);
        scroll.set_frame(FrameType::FlatBox);
        scroll.set_color(Color::from_rgb(250, 249, 246));

        let mut items = Pack::new(x, list_y, w - 16, list_h, None);
        items.set_spacing(8);
        items.end();

        scroll.end();

        Self {
            tabs,
            items,
            scroll,
            sender,
        }
    }

    /// Recreate the category tab buttons, highlighting the active one.
    pub fn rebuild_tabs(&mut self, catalog: &MenuCatalog, active: &str) {
        self.tabs.clear();
        self.tabs.begin();
        for category in &catalog.categories {
            let mut tab = Button::default()
                .with_size(TAB_WIDTH, TABS_HEIGHT)
                .with_label(&category.name);
            tab.set_frame(FrameType::RFlatBox);
            if category.name == active {
                tab.set_color(Color::from_rgb(37, 211, 102)); // WhatsApp green
                tab.set_label_color(Color::White);
            } else {
                tab.set_color(Color::from_rgb(230, 230, 230));
                tab.set_label_color(Color::Black);
            }
            let sender = self.sender.clone();
            let name = category.name.clone();
            tab.set_callback(move |_| sender.send(Message::SelectCategory(name.clone())));
        }
        self.tabs.end();
        self.tabs.redraw();
    }

    /// Recreate the item rows for the active category with current cart
    /// quantities.
    pub fn rebuild_items(&mut self, catalog: &MenuCatalog, cart: &Cart, active: &str) {
        self.items.clear();
        self.items.begin();
        match catalog.category(active) {
            Some(category) if !category.items.is_empty() => {
                for item in &category.items {
                    self.add_item_row(item, cart.quantity(&item.id));
                }
            }
            _ => {
                let mut empty = Frame::default()
                    .with_size(0, 60)
                    .with_label("No items available in this category.");
                empty.set_label_color(Color::from_rgb(120, 120, 120));
            }
        }
        self.items.end();
        self.scroll.redraw();
    }

    fn add_item_row(&self, item: &MenuItem, quantity: u32) {
        let mut row = Flex::default().with_size(0, ROW_HEIGHT);
        row.set_type(FlexType::Row);
        row.set_frame(FrameType::BorderBox);
        row.set_color(Color::White);
        row.set_margin(8);
        row.set_pad(4);

        let mut info = Frame::default();
        info.set_label(&format!(
            "{}  \u{20b9}{}\n{}",
            item.title, item.price, item.description
        ));
        info.set_align(Align::Inside | Align::Left | Align::Wrap);

        let mut minus = Button::default().with_label("-");
        row.fixed(&minus, 32);
        let qty = Frame::default().with_label(&quantity.to_string());
        row.fixed(&qty, 36);
        let mut plus = Button::default().with_label("+");
        row.fixed(&plus, 32);

        row.end();

        let sender = self.sender.clone();
        let id = item.id.clone();
        minus.set_callback(move |_| sender.send(Message::DecrementItem(id.clone())));

        let sender = self.sender.clone();
        let id = item.id.clone();
        plus.set_callback(move |_| sender.send(Message::IncrementItem(id.clone())));
    }
}
