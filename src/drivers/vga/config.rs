//! Constantes de configuração do driver VGA em modo texto

use super::color::{Color, ColorCode};

/// Largura da grade de texto (colunas)
pub const VGA_WIDTH: usize = 80;

/// Altura da grade de texto (linhas)
pub const VGA_HEIGHT: usize = 25;

/// Endereço físico do buffer de texto VGA (modo 03h)
pub const VGA_BUFFER_ADDR: usize = 0xB8000;

/// Colunas por parada de tabulação
pub const TAB_WIDTH: usize = 4;

/// Cor padrão após o boot: cinza claro sobre preto (0x07)
pub const DEFAULT_COLOR: ColorCode = ColorCode::new(Color::LightGrey, Color::Black);

/// Capacidade do buffer de dígitos decimais (u32::MAX tem 10 dígitos)
pub const DEC_BUFFER_LEN: usize = 11;

/// Dígitos hexadecimais emitidos para um valor de 32 bits
pub const HEX_DIGITS: usize = 8;
