//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Pure ordering core (menu catalog, cart, order summary, validation)
//! - `services/` - WhatsApp message composition and deep link
//! - `error.rs` - Application error type
//! - `messages.rs` - Messages sent through the FLTK channel
//! - `state.rs` - Main application coordinator

pub mod domain;
pub mod error;
pub mod messages;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use domain::{Cart, Category, ItemId, MenuCatalog, MenuItem, OrderLine, OrderSummary};
pub use error::{AppError, Result};
pub use messages::Message;
