use fltk::{
    app::Sender,
    enums::{Color, Font},
    frame::Frame,
    prelude::*,
    window::Window,
};

use crate::app::messages::Message;
use super::cart_panel::CartPanel;
use super::menu_panel::MenuPanel;

pub const WINDOW_W: i32 = 960;
pub const WINDOW_H: i32 = 640;

const HEADER_H: i32 = 48;
const CART_W: i32 = 340;
const MARGIN: i32 = 10;

pub struct MainWidgets {
    pub wind: Window,
    pub menu_panel: MenuPanel,
    pub cart_panel: CartPanel,
}

pub fn build_main_window(cafe_name: &str, sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, WINDOW_W, WINDOW_H, None);
    wind.set_label(&format!("{} - OrderPad", cafe_name));
    wind.set_xclass("OrderPad");
    wind.set_color(Color::from_rgb(245, 243, 238));

    let mut header = Frame::new(0, 0, WINDOW_W, HEADER_H, None);
    header.set_label(cafe_name);
    header.set_label_font(Font::HelveticaBold);
    header.set_label_size(22);

    let body_y = HEADER_H + MARGIN;
    let body_h = WINDOW_H - HEADER_H - 2 * MARGIN;
    let menu_w = WINDOW_W - CART_W - 3 * MARGIN;

    let menu_panel = MenuPanel::new(MARGIN, body_y, menu_w, body_h, sender.clone());
    let cart_panel = CartPanel::new(
        2 * MARGIN + menu_w,
        body_y,
        CART_W,
        body_h,
        sender.clone(),
    );

    wind.end();

    MainWidgets {
        wind,
        menu_panel,
        cart_panel,
    }
}
