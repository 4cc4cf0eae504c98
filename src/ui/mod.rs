pub mod cart_panel;
pub mod main_window;
pub mod menu_panel;
