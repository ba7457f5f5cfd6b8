//! Redstone VGA Text Console.
//!
//! Driver de console em modo texto para o buffer VGA (80x25, `0xB8000`),
//! usado pelo kernel no early-boot e na tela de panic.
//!
//! ```text
//! drivers::vga::TextGrid  ──►  drivers::vga::TextBuffer  ──►  MMIO / RAM
//!        │
//!        └── logs ──► core::logging (k* macros) ──► drivers::serial
//! ```

#![cfg_attr(not(test), no_std)]

pub mod core; // Logging
pub mod drivers; // Serial, VGA
pub mod klib; // Framework de self-test

pub use crate::drivers::vga::{
    Color, ColorCode, GridError, HexStyle, ScreenChar, TextBuffer, TextGrid,
};
