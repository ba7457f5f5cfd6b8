//! # Text Buffer
//!
//! Wrapper com verificação de limites sobre a memória de células do modo
//! texto. Toda aritmética de ponteiro do driver fica aqui dentro; o resto do
//! código só enxerga coordenadas (coluna, linha).
//!
//! ## Layout
//!
//! ```text
//! base ──► [c(0,0)][c(1,0)] ... [c(W-1,0)][c(0,1)] ... [c(W-1,H-1)]
//!
//! célula (u16):  bits 0-7  = caractere
//!                bits 8-15 = atributo de cor
//! ```
//!
//! Todo acesso é volátil: a memória é compartilhada com o controlador de
//! vídeo e nenhuma escrita pode ser eliminada ou reordenada pelo compilador.

use core::marker::PhantomData;
use core::ptr::NonNull;

use volatile::VolatilePtr;

use super::color::ColorCode;

// ============================================================================
// ERRORS
// ============================================================================

/// Erros na construção de um buffer de texto.
///
/// Só existem na criação: depois de construída, a grade nunca falha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Endereço base nulo.
    NullAddress,
    /// Largura ou altura zero (ou produto que não cabe em usize).
    ZeroSized,
    /// Slice com número de células diferente de largura × altura.
    SizeMismatch { expected: usize, actual: usize },
}

impl GridError {
    /// Retorna descrição legível do erro
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NullAddress => "Endereço base do buffer nulo",
            Self::ZeroSized => "Geometria da grade inválida",
            Self::SizeMismatch { .. } => "Tamanho do buffer não bate com a geometria",
        }
    }
}

// ============================================================================
// SCREEN CHAR
// ============================================================================

/// Uma célula da grade: caractere + atributo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenChar {
    pub ascii: u8,
    pub color: ColorCode,
}

impl ScreenChar {
    pub const fn new(ascii: u8, color: ColorCode) -> Self {
        Self { ascii, color }
    }

    /// Célula em branco (espaço) com a cor dada.
    pub const fn blank(color: ColorCode) -> Self {
        Self::new(b' ', color)
    }

    /// Codifica no formato de hardware.
    pub const fn to_raw(self) -> u16 {
        ((self.color.as_u8() as u16) << 8) | self.ascii as u16
    }

    /// Decodifica a palavra de hardware.
    pub const fn from_raw(raw: u16) -> Self {
        Self {
            ascii: (raw & 0xFF) as u8,
            color: ColorCode::from_u8((raw >> 8) as u8),
        }
    }
}

// ============================================================================
// TEXT BUFFER
// ============================================================================

/// Grade de células sobre memória externa (MMIO ou slice em RAM).
pub struct TextBuffer<'a> {
    base: NonNull<u16>,
    width: usize,
    height: usize,
    _cells: PhantomData<&'a mut [u16]>,
}

// SAFETY: o buffer é acessado por um único escritor; o acesso compartilhado
// passa pelo Mutex do console global.
unsafe impl Send for TextBuffer<'_> {}

impl<'a> TextBuffer<'a> {
    /// Cria uma grade sobre um slice em memória comum.
    ///
    /// O slice precisa ter exatamente `width * height` células.
    pub fn from_slice(
        cells: &'a mut [u16],
        width: usize,
        height: usize,
    ) -> Result<Self, GridError> {
        let expected = cell_count(width, height)?;
        if cells.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                actual: cells.len(),
            });
        }

        let base = NonNull::new(cells.as_mut_ptr()).ok_or(GridError::NullAddress)?;

        Ok(Self {
            base,
            width,
            height,
            _cells: PhantomData,
        })
    }

    /// Cria uma grade sobre um endereço cru (ex: `0xB8000`).
    ///
    /// # Safety
    ///
    /// `addr` precisa apontar para `width * height` células de 16 bits
    /// mapeadas, alinhadas e válidas durante todo o lifetime `'a`, sem
    /// outro escritor concorrente.
    pub unsafe fn from_raw(addr: usize, width: usize, height: usize) -> Result<Self, GridError> {
        cell_count(width, height)?;
        let base = NonNull::new(addr as *mut u16).ok_or(GridError::NullAddress)?;

        Ok(Self {
            base,
            width,
            height,
            _cells: PhantomData,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Ponteiro volátil para a célula, ou `None` fora dos limites.
    #[inline]
    fn cell(&self, x: usize, y: usize) -> Option<VolatilePtr<'_, u16>> {
        if x >= self.width || y >= self.height {
            return None;
        }
        // SAFETY: (x, y) validado acima; o índice cai dentro das
        // width * height células garantidas pelo construtor.
        unsafe {
            let ptr = self.base.as_ptr().add(y * self.width + x);
            Some(VolatilePtr::new(NonNull::new_unchecked(ptr)))
        }
    }

    /// Lê uma célula.
    pub fn read(&self, x: usize, y: usize) -> Option<ScreenChar> {
        self.cell(x, y).map(|cell| ScreenChar::from_raw(cell.read()))
    }

    /// Escreve uma célula. Retorna `false` (sem efeito) fora dos limites.
    pub fn write(&mut self, x: usize, y: usize, value: ScreenChar) -> bool {
        match self.cell(x, y) {
            Some(cell) => {
                cell.write(value.to_raw());
                true
            }
            None => false,
        }
    }

    /// Preenche uma linha inteira. Linha fora dos limites é ignorada.
    pub fn fill_row(&mut self, row: usize, value: ScreenChar) {
        if row >= self.height {
            return;
        }
        for x in 0..self.width {
            self.write(x, row, value);
        }
    }

    /// Copia a linha `src` sobre a linha `dst`.
    pub fn copy_row(&mut self, src: usize, dst: usize) {
        if src >= self.height || dst >= self.height {
            return;
        }
        for x in 0..self.width {
            if let Some(value) = self.read(x, src) {
                self.write(x, dst, value);
            }
        }
    }

    /// Preenche a grade inteira.
    pub fn fill(&mut self, value: ScreenChar) {
        for y in 0..self.height {
            self.fill_row(y, value);
        }
    }
}

/// Valida a geometria e retorna o número de células.
fn cell_count(width: usize, height: usize) -> Result<usize, GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::ZeroSized);
    }
    width.checked_mul(height).ok_or(GridError::ZeroSized)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::vga::color::Color;

    #[test]
    fn test_cell_encoding() {
        let cell = ScreenChar::new(b'A', ColorCode::new(Color::White, Color::Blue));
        assert_eq!(cell.to_raw(), 0x1F41);
        assert_eq!(ScreenChar::from_raw(0x1F41), cell);
    }

    #[test]
    fn test_from_slice_rejects_wrong_length() {
        let mut cells = [0u16; 10];
        let err = TextBuffer::from_slice(&mut cells, 4, 3).err();
        assert_eq!(
            err,
            Some(GridError::SizeMismatch {
                expected: 12,
                actual: 10
            })
        );
    }

    #[test]
    fn test_zero_geometry_rejected() {
        let mut cells = [0u16; 0];
        assert_eq!(
            TextBuffer::from_slice(&mut cells, 0, 5).err(),
            Some(GridError::ZeroSized)
        );
        let raw = unsafe { TextBuffer::from_raw(0xB8000, 80, 0) };
        assert_eq!(raw.err(), Some(GridError::ZeroSized));
    }

    #[test]
    fn test_null_address_rejected() {
        let raw = unsafe { TextBuffer::from_raw(0, 80, 25) };
        assert_eq!(raw.err(), Some(GridError::NullAddress));
    }

    #[test]
    fn test_row_major_layout() {
        let mut cells = [0u16; 12];
        {
            let mut buffer = TextBuffer::from_slice(&mut cells, 4, 3).unwrap();
            assert!(buffer.write(1, 2, ScreenChar::from_raw(0x0758)));
        }
        assert_eq!(cells[2 * 4 + 1], 0x0758);
    }

    #[test]
    fn test_out_of_bounds_access_is_ignored() {
        let mut cells = [0u16; 12];
        let mut buffer = TextBuffer::from_slice(&mut cells, 4, 3).unwrap();
        assert!(!buffer.write(4, 0, ScreenChar::from_raw(0xFFFF)));
        assert!(!buffer.write(0, 3, ScreenChar::from_raw(0xFFFF)));
        assert_eq!(buffer.read(4, 0), None);
        buffer.fill_row(3, ScreenChar::from_raw(0xFFFF));
        buffer.copy_row(5, 0);
        drop(buffer);
        assert!(cells.iter().all(|&c| c == 0));
    }

    #[test]
    fn test_copy_and_fill_rows() {
        let mut cells = [0u16; 12];
        let mut buffer = TextBuffer::from_slice(&mut cells, 4, 3).unwrap();
        let x = ScreenChar::new(b'x', ColorCode::default());
        buffer.fill_row(1, x);
        buffer.copy_row(1, 0);
        assert_eq!(buffer.read(3, 0), Some(x));
        assert_eq!(buffer.read(3, 2), Some(ScreenChar::from_raw(0)));

        buffer.fill(ScreenChar::blank(ColorCode::default()));
        assert_eq!(buffer.read(0, 0), Some(ScreenChar::from_raw(0x0720)));
    }
}
