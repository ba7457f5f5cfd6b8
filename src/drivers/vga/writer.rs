//! # Text Grid
//!
//! Console em modo texto sobre um [`TextBuffer`]: escrita sequencial com
//! cursor, caracteres de controle, scroll, formatação numérica e desenho
//! de caixas.
//!
//! ## Política de erros
//!
//! Nenhuma operação falha. Coordenadas fora da grade, bytes de controle
//! não suportados e caixas degeneradas são ignorados em silêncio.
//!
//! ## Controle
//!
//! | Byte        | Efeito                                              |
//! |-------------|-----------------------------------------------------|
//! | 32..=126    | escreve no cursor e avança (quebra + scroll)        |
//! | `\n`        | coluna 0, próxima linha, scroll                     |
//! | `\r`        | coluna 0                                            |
//! | `\t`        | espaços até o próximo múltiplo de [`TAB_WIDTH`]     |
//! | `\b`        | volta uma célula e apaga (atravessa linhas)         |
//! | outros      | descartados                                         |

use core::ffi::CStr;
use core::fmt;

use super::buffer::{ScreenChar, TextBuffer};
use super::color::ColorCode;
use super::config::{DEC_BUFFER_LEN, DEFAULT_COLOR, HEX_DIGITS, TAB_WIDTH};
use super::cursor::{Cursor, HardwareCursor};

const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// Forma de saída de [`TextGrid::print_hex_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HexStyle {
    /// `0x` + 8 dígitos maiúsculos. Forma canônica de `print_hex`.
    #[default]
    Prefixed,
    /// Apenas os 8 dígitos maiúsculos.
    Bare,
}

/// Console de texto: grade + cursor + cor padrão.
pub struct TextGrid<'a> {
    buffer: TextBuffer<'a>,
    cursor: Cursor,
    default_color: ColorCode,
    hw_cursor: HardwareCursor,
}

impl<'a> TextGrid<'a> {
    /// Cria o console sobre um buffer.
    ///
    /// Cursor em (0, 0), cor padrão cinza claro sobre preto. O conteúdo
    /// atual do buffer é preservado; use [`clear_screen`](Self::clear_screen)
    /// para limpar.
    pub fn new(buffer: TextBuffer<'a>) -> Self {
        Self {
            buffer,
            cursor: Cursor::default(),
            default_color: DEFAULT_COLOR,
            hw_cursor: HardwareCursor::new(),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.buffer.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.buffer.height()
    }

    // =========================================================================
    // ACESSORES
    // =========================================================================

    /// Move o cursor. Fora dos limites não altera nada.
    pub fn set_cursor(&mut self, x: usize, y: usize) {
        if x < self.width() && y < self.height() {
            self.cursor = Cursor::new(x, y);
            self.sync_cursor();
        } else {
            crate::ktrace!("(VGA) set_cursor fora da grade, x=", x);
        }
    }

    pub fn get_cursor(&self) -> (usize, usize) {
        (self.cursor.x, self.cursor.y)
    }

    pub fn set_default_color(&mut self, color: ColorCode) {
        self.default_color = color;
    }

    pub fn get_default_color(&self) -> ColorCode {
        self.default_color
    }

    /// Lê a célula em (x, y).
    pub fn cell_at(&self, x: usize, y: usize) -> Option<ScreenChar> {
        self.buffer.read(x, y)
    }

    /// Posição linear registrada pelo hook do cursor de hardware.
    pub fn hardware_cursor_position(&self) -> u16 {
        self.hw_cursor.position()
    }

    // =========================================================================
    // CÉLULAS E LINHAS
    // =========================================================================

    /// Limpa a grade com a cor padrão e volta o cursor para (0, 0).
    pub fn clear_screen(&mut self) {
        self.buffer.fill(ScreenChar::blank(self.default_color));
        self.cursor = Cursor::default();
        self.sync_cursor();
    }

    /// Escreve uma célula em coordenadas explícitas, sem mexer no cursor.
    pub fn put_char_at(&mut self, c: u8, color: ColorCode, x: usize, y: usize) {
        self.buffer.write(x, y, ScreenChar::new(c, color));
    }

    /// Apaga uma linha com a cor padrão.
    pub fn clear_line(&mut self, row: usize) {
        self.buffer.fill_row(row, ScreenChar::blank(self.default_color));
    }

    // =========================================================================
    // ESCRITA SEQUENCIAL
    // =========================================================================

    /// Escreve um byte no cursor, interpretando caracteres de controle.
    pub fn put_char(&mut self, c: u8, color: ColorCode) {
        match c {
            b'\n' => {
                self.cursor.x = 0;
                self.cursor.y += 1;
                self.scroll();
                self.sync_cursor();
            }
            b'\r' => {
                self.cursor.x = 0;
                self.sync_cursor();
            }
            b'\t' => {
                let spaces = TAB_WIDTH - (self.cursor.x % TAB_WIDTH);
                for _ in 0..spaces {
                    self.put_char(b' ', color);
                }
            }
            0x08 => self.backspace(color),
            32..=126 => {
                let Cursor { x, y } = self.cursor;
                self.buffer.write(x, y, ScreenChar::new(c, color));
                self.cursor.x += 1;

                if self.cursor.x >= self.width() {
                    self.cursor.x = 0;
                    self.cursor.y += 1;
                    self.scroll();
                }
                self.sync_cursor();
            }
            _ => {}
        }
    }

    /// Backspace destrutivo: recua uma célula e a apaga com `color`.
    fn backspace(&mut self, color: ColorCode) {
        if self.cursor.x > 0 {
            self.cursor.x -= 1;
        } else if self.cursor.y > 0 {
            self.cursor.y -= 1;
            self.cursor.x = self.width() - 1;
        } else {
            return;
        }

        let Cursor { x, y } = self.cursor;
        self.buffer.write(x, y, ScreenChar::blank(color));
        self.sync_cursor();
    }

    /// Resolve o cursor abaixo da última linha.
    ///
    /// Descarta a linha 0, sobe as demais e apaga a última com a cor
    /// padrão. A coluna não é alterada.
    pub fn scroll(&mut self) {
        let height = self.height();
        if self.cursor.y < height {
            return;
        }

        for row in 1..height {
            self.buffer.copy_row(row, row - 1);
        }
        self.buffer
            .fill_row(height - 1, ScreenChar::blank(self.default_color));
        self.cursor.y = height - 1;

        crate::ktrace!("(VGA) Scroll");
    }

    /// Escreve cada byte de `text` via [`put_char`](Self::put_char).
    pub fn print(&mut self, text: &str, color: ColorCode) {
        self.print_bytes(text.as_bytes(), color);
    }

    /// Como [`print`](Self::print), para bytes crus.
    pub fn print_bytes(&mut self, text: &[u8], color: ColorCode) {
        for &byte in text {
            self.put_char(byte, color);
        }
    }

    /// Escreve uma string C terminada em NUL. Ponteiro nulo é ignorado.
    ///
    /// # Safety
    ///
    /// Se não for nulo, `text` precisa apontar para uma string terminada
    /// em NUL válida para leitura.
    pub unsafe fn print_cstr(&mut self, text: *const u8, color: ColorCode) {
        if text.is_null() {
            return;
        }
        let text = CStr::from_ptr(text.cast());
        self.print_bytes(text.to_bytes(), color);
    }

    pub fn print_line(&mut self, text: &str, color: ColorCode) {
        self.print(text, color);
        self.put_char(b'\n', color);
    }

    // =========================================================================
    // NÚMEROS
    // =========================================================================

    /// Decimal com sinal.
    pub fn print_int(&mut self, n: i32, color: ColorCode) {
        if n < 0 {
            self.put_char(b'-', color);
        }
        self.print_uint(n.unsigned_abs(), color);
    }

    /// Decimal sem sinal.
    pub fn print_uint(&mut self, mut n: u32, color: ColorCode) {
        if n == 0 {
            self.put_char(b'0', color);
            return;
        }

        // Dígitos saem do menos significativo para o mais significativo
        let mut digits = [0u8; DEC_BUFFER_LEN];
        let mut len = 0;
        while n > 0 {
            digits[len] = b'0' + (n % 10) as u8;
            n /= 10;
            len += 1;
        }

        for &digit in digits[..len].iter().rev() {
            self.put_char(digit, color);
        }
    }

    /// Hexadecimal na forma canônica: `0x` + 8 dígitos maiúsculos.
    pub fn print_hex(&mut self, n: u32, color: ColorCode) {
        self.print_hex_with(n, HexStyle::Prefixed, color);
    }

    /// Hexadecimal de largura fixa (8 dígitos) na forma escolhida.
    pub fn print_hex_with(&mut self, n: u32, style: HexStyle, color: ColorCode) {
        if style == HexStyle::Prefixed {
            self.print("0x", color);
        }

        for i in (0..HEX_DIGITS).rev() {
            let nibble = (n >> (i * 4)) & 0xF;
            self.put_char(HEX_CHARS[nibble as usize], color);
        }
    }

    // =========================================================================
    // DESENHO
    // =========================================================================

    /// Preenche um retângulo, recortado aos limites da grade.
    pub fn fill_rect(
        &mut self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        fill_char: u8,
        color: ColorCode,
    ) {
        let row_end = y.saturating_add(height).min(self.height());
        let col_end = x.saturating_add(width).min(self.width());

        for row in y..row_end {
            for col in x..col_end {
                self.put_char_at(fill_char, color, col, row);
            }
        }
    }

    /// Borda simples: `+` nos cantos, `-` em cima/embaixo, `|` nos lados.
    ///
    /// Interior intocado. Caixas menores que 2x2 são ignoradas.
    pub fn draw_box(&mut self, x: usize, y: usize, width: usize, height: usize, color: ColorCode) {
        const CORNER: u8 = b'+';
        const HORIZONTAL: u8 = b'-';
        const VERTICAL: u8 = b'|';

        if width < 2 || height < 2 {
            return;
        }

        let right = x.saturating_add(width - 1);
        let bottom = y.saturating_add(height - 1);

        self.put_char_at(CORNER, color, x, y);
        self.put_char_at(CORNER, color, right, y);
        self.put_char_at(CORNER, color, x, bottom);
        self.put_char_at(CORNER, color, right, bottom);

        for i in 1..width - 1 {
            let col = x.saturating_add(i);
            if col >= self.width() {
                break;
            }
            self.put_char_at(HORIZONTAL, color, col, y);
            self.put_char_at(HORIZONTAL, color, col, bottom);
        }

        for i in 1..height - 1 {
            let row = y.saturating_add(i);
            if row >= self.height() {
                break;
            }
            self.put_char_at(VERTICAL, color, x, row);
            self.put_char_at(VERTICAL, color, right, row);
        }
    }

    // =========================================================================
    // CONVENIÊNCIA (cor padrão)
    // =========================================================================

    pub fn print_default(&mut self, text: &str) {
        self.print(text, self.default_color);
    }

    pub fn print_line_default(&mut self, text: &str) {
        self.print_line(text, self.default_color);
    }

    pub fn put_char_default(&mut self, c: u8) {
        self.put_char(c, self.default_color);
    }

    /// Escreve `format` literalmente.
    ///
    /// Limitação conhecida: especificadores NÃO são interpretados e `args`
    /// é ignorado. Para saída formatada use `core::fmt::Write` (`write!`).
    pub fn printf<A>(&mut self, color: ColorCode, format: &str, args: A) {
        let _ = args;
        self.print(format, color);
    }

    #[inline]
    fn sync_cursor(&mut self) {
        let width = self.width();
        self.hw_cursor.sync(self.cursor, width);
    }
}

/// Saída formatada (`write!`) com a cor padrão.
impl fmt::Write for TextGrid<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.print_default(s);
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
