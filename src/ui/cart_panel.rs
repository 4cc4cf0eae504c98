use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, CallbackTrigger, Color, Font, FrameType},
    frame::Frame,
    group::{Flex, FlexType, Pack},
    input::MultilineInput,
    prelude::*,
};

use crate::app::domain::order::{OrderLine, OrderSummary};
use crate::app::messages::Message;

const LINE_HEIGHT: i32 = 44;

/// Right side of the window: the running order, totals, delivery address and
/// the submit button.
pub struct CartPanel {
    lines: Pack,
    item_count: Frame,
    grand_total: Frame,
    clear_btn: Button,
    address: MultilineInput,
    address_hint: Frame,
    submit: Button,
    status: Frame,
    sender: Sender<Message>,
}

impl CartPanel {
    pub fn new(x: i32, y: i32, w: i32, h: i32, sender: Sender<Message>) -> Self {
        let mut col = Flex::new(x, y, w, h, None);
        col.set_type(FlexType::Column);
        col.set_frame(FrameType::BorderBox);
        col.set_color(Color::White);
        col.set_margin(10);
        col.set_pad(8);

        let mut heading = Frame::default().with_label("Your Order");
        heading.set_label_font(Font::HelveticaBold);
        heading.set_label_size(16);
        col.fixed(&heading, 24);

        let mut lines = Pack::default();
        lines.set_spacing(4);
        lines.end();

        let mut item_count = Frame::default().with_label("0 items");
        item_count.set_align(Align::Inside | Align::Left);
        item_count.set_label_color(Color::from_rgb(120, 120, 120));
        col.fixed(&item_count, 20);

        let mut grand_total = Frame::default().with_label("Total: \u{20b9}0");
        grand_total.set_align(Align::Inside | Align::Right);
        grand_total.set_label_font(Font::HelveticaBold);
        grand_total.set_label_size(16);
        col.fixed(&grand_total, 26);

        let mut clear_btn = Button::default().with_label("Clear all items");
        clear_btn.set_frame(FrameType::RFlatBox);
        clear_btn.set_color(Color::from_rgb(240, 240, 240));
        clear_btn.hide();
        col.fixed(&clear_btn, 28);

        let mut addr_label = Frame::default().with_label("Delivery Address");
        addr_label.set_align(Align::Inside | Align::Left);
        col.fixed(&addr_label, 20);

        let mut address = MultilineInput::default();
        address.set_trigger(CallbackTrigger::Changed);
        col.fixed(&address, 64);

        let mut address_hint = Frame::default()
            .with_label("Please enter a complete address (at least 10 characters)");
        address_hint.set_align(Align::Inside | Align::Left | Align::Wrap);
        address_hint.set_label_size(11);
        address_hint.set_label_color(Color::from_rgb(200, 60, 60));
        address_hint.hide();
        col.fixed(&address_hint, 28);

        let mut submit = Button::default().with_label("Order on WhatsApp");
        submit.set_frame(FrameType::RFlatBox);
        submit.set_color(Color::from_rgb(37, 211, 102));
        submit.set_label_color(Color::White);
        submit.set_label_font(Font::HelveticaBold);
        submit.deactivate();
        col.fixed(&submit, 40);

        let mut status = Frame::default();
        status.set_label_size(11);
        status.set_label_color(Color::from_rgb(120, 120, 120));
        col.fixed(&status, 20);

        col.end();

        let s = sender.clone();
        clear_btn.set_callback(move |_| s.send(Message::ClearOrder));
        let s = sender.clone();
        address.set_callback(move |_| s.send(Message::AddressEdited));
        let s = sender.clone();
        submit.set_callback(move |_| s.send(Message::SubmitOrder));

        Self {
            lines,
            item_count,
            grand_total,
            clear_btn,
            address,
            address_hint,
            submit,
            status,
            sender,
        }
    }

    /// Recreate the order line rows and refresh the totals.
    pub fn rebuild(&mut self, summary: &OrderSummary) {
        self.lines.clear();
        self.lines.begin();
        if summary.is_empty() {
            let mut empty = Frame::default()
                .with_size(0, 40)
                .with_label("No items in your order yet");
            empty.set_label_color(Color::from_rgb(120, 120, 120));
        } else {
            for line in &summary.lines {
                self.add_line_row(line);
            }
        }
        self.lines.end();

        let noun = if summary.item_count == 1 { "item" } else { "items" };
        self.item_count
            .set_label(&format!("{} {}", summary.item_count, noun));
        self.grand_total
            .set_label(&format!("Total: \u{20b9}{}", summary.grand_total));
        if summary.is_empty() {
            self.clear_btn.hide();
        } else {
            self.clear_btn.show();
        }
        self.lines.redraw();
        self.item_count.redraw();
        self.grand_total.redraw();
    }

    fn add_line_row(&self, line: &OrderLine) {
        let mut row = Flex::default().with_size(0, LINE_HEIGHT);
        row.set_type(FlexType::Row);
        row.set_pad(4);

        let mut info = Frame::default();
        info.set_label(&format!(
            "{}\nQty: {} (\u{20b9}{} each)",
            line.title, line.quantity, line.unit_price
        ));
        info.set_align(Align::Inside | Align::Left);
        info.set_label_size(12);

        let mut total = Frame::default().with_label(&format!("\u{20b9}{}", line.line_total));
        total.set_align(Align::Inside | Align::Right);
        row.fixed(&total, 64);

        let mut remove = Button::default().with_label("x");
        remove.set_label_color(Color::from_rgb(200, 60, 60));
        row.fixed(&remove, 26);

        row.end();

        let sender = self.sender.clone();
        let id = line.id.clone();
        remove.set_callback(move |_| sender.send(Message::RemoveItem(id.clone())));
    }

    /// Current contents of the address input, untrimmed.
    pub fn address(&self) -> String {
        self.address.value()
    }

    pub fn set_address_hint_visible(&mut self, visible: bool) {
        if visible {
            self.address_hint.show();
        } else {
            self.address_hint.hide();
        }
    }

    pub fn set_submit_enabled(&mut self, enabled: bool) {
        if enabled {
            self.submit.activate();
        } else {
            self.submit.deactivate();
        }
    }

    /// Transient feedback line under the submit button.
    pub fn set_status(&mut self, text: &str) {
        self.status.set_label(text);
        self.status.redraw();
    }
}
