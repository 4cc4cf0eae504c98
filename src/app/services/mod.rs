//! Services layer - operations that sit between the pure domain and the
//! outside world.

pub mod whatsapp;
