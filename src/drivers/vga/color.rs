//! # Paleta VGA
//!
//! Paleta fixa de 16 cores do modo texto e o byte de atributo que combina
//! frente e fundo.
//!
//! ```text
//!  bit  7   6   5   4   3   2   1   0
//!     ├───────────────┼───────────────┤
//!     │    fundo      │    frente     │
//! ```

/// Cores da paleta de hardware (4 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGrey = 7,
    DarkGrey = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    LightMagenta = 13,
    /// Também chamado de "light brown" em algumas tabelas.
    Yellow = 14,
    White = 15,
}

impl Color {
    /// Converte um nibble na cor correspondente (bits altos ignorados).
    pub const fn from_nibble(nibble: u8) -> Self {
        match nibble & 0x0F {
            0 => Self::Black,
            1 => Self::Blue,
            2 => Self::Green,
            3 => Self::Cyan,
            4 => Self::Red,
            5 => Self::Magenta,
            6 => Self::Brown,
            7 => Self::LightGrey,
            8 => Self::DarkGrey,
            9 => Self::LightBlue,
            10 => Self::LightGreen,
            11 => Self::LightCyan,
            12 => Self::LightRed,
            13 => Self::LightMagenta,
            14 => Self::Yellow,
            _ => Self::White,
        }
    }
}

/// Byte de atributo: frente no nibble baixo, fundo no nibble alto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct ColorCode(u8);

impl ColorCode {
    /// Combina frente e fundo em um atributo (`fg | bg << 4`).
    pub const fn new(foreground: Color, background: Color) -> Self {
        Self((foreground as u8) | ((background as u8) << 4))
    }

    /// Atributo a partir do byte cru (como lido do hardware).
    pub const fn from_u8(raw: u8) -> Self {
        Self(raw)
    }

    pub const fn as_u8(self) -> u8 {
        self.0
    }

    pub const fn foreground(self) -> Color {
        Color::from_nibble(self.0)
    }

    pub const fn background(self) -> Color {
        Color::from_nibble(self.0 >> 4)
    }
}

impl Default for ColorCode {
    fn default() -> Self {
        super::config::DEFAULT_COLOR
    }
}

impl From<u8> for ColorCode {
    fn from(raw: u8) -> Self {
        Self::from_u8(raw)
    }
}

// =============================================================================
// TESTS
// =============================================================================
