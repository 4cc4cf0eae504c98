//! Domain layer - the pure ordering core.
//!
//! Everything here is plain data and pure functions over it:
//! - Menu catalog (items, categories, stable item ids)
//! - Cart (the only mutable core state)
//! - Order summary (derived lines and totals)
//! - Validation (address and submission eligibility)
//!
//! No FLTK types are allowed in this module.

pub mod cart;
pub mod menu;
pub mod order;
pub mod validation;

pub use cart::Cart;
pub use menu::{Category, ItemId, MenuCatalog, MenuItem};
pub use order::{OrderLine, OrderSummary};
pub use validation::{SubmissionError, check_submission, validate_address, validate_submission};
