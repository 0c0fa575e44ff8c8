//! Chat platform adapters

pub mod telegram;
pub mod console;
