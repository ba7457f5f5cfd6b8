//! # Driver Layer
//!
//! Drivers de saída de texto do kernel.
//!
//! | Driver   | Arquivo      | Papel |
//! |----------|--------------|-------|
//! | Serial   | `serial.rs`  | Destino dos logs (COM1) |
//! | VGA      | `vga/`       | Console 80x25 em modo texto |

pub mod serial; // UART 16550 - Logs
pub mod vga; // Buffer de texto 0xB8000
