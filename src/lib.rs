//! OrderPad - a minimalist cafe ordering pad.
//!
//! The `app` module holds the pure ordering core and the application
//! coordinator; `ui` holds the FLTK widgets that render it. The domain layer
//! never touches FLTK, so everything with an invariant is testable without a
//! display.

pub mod app;
pub mod ui;
