//! # VGA Text Mode Driver
//!
//! Console de texto 80x25 sobre o buffer de caracteres do modo 03h.
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        CONSOLE (Mutex, opcional)        │
//! ├─────────────────────────────────────────┤
//! │  TextGrid: cursor, cor padrão, scroll   │
//! ├─────────────────────────────────────────┤
//! │  TextBuffer: células u16 voláteis       │
//! └─────────────────────────────────────────┘
//!                    ↓
//!           0xB8000 (MMIO) ou RAM
//! ```
//!
//! O [`TextGrid`] não guarda estado global: cada instância carrega seu
//! próprio cursor e cor padrão. O console global abaixo é só a instância
//! que o kernel instala sobre o hardware real.

pub mod buffer;
pub mod color;
pub mod config;
pub mod cursor;
pub mod writer;

#[cfg(any(test, feature = "self_test"))]
pub mod test;

use spin::Mutex;

pub use buffer::{GridError, ScreenChar, TextBuffer};
pub use color::{Color, ColorCode};
pub use cursor::Cursor;
pub use writer::{HexStyle, TextGrid};

/// Console global (um display por enquanto).
pub static CONSOLE: Mutex<Option<TextGrid<'static>>> = Mutex::new(None);

/// Inicializa o console sobre o buffer de hardware em `0xB8000`.
///
/// Limpa a tela com a cor padrão.
///
/// # Safety
///
/// O buffer de texto VGA precisa estar mapeado (identity map ou HHDM já
/// aplicado ao endereço) e nenhum outro código pode escrever nele.
pub unsafe fn init() -> Result<(), GridError> {
    crate::kinfo!("(VGA) Inicializando console de texto...");

    let buffer = TextBuffer::from_raw(config::VGA_BUFFER_ADDR, config::VGA_WIDTH, config::VGA_HEIGHT)
        .map_err(|err| {
            crate::kerror!(err.as_str());
            err
        })?;

    let mut grid = TextGrid::new(buffer);
    grid.clear_screen();
    install(grid);

    crate::kinfo!("(VGA) Console pronto, buffer=", config::VGA_BUFFER_ADDR);
    Ok(())
}

/// Instala uma grade qualquer como console global.
pub fn install(grid: TextGrid<'static>) {
    crate::ktrace!("(VGA) Console instalado, largura=", grid.width());
    *CONSOLE.lock() = Some(grid);
}

/// Executa `f` com o console travado. `None` se não inicializado.
pub fn with_console<R>(f: impl FnOnce(&mut TextGrid<'static>) -> R) -> Option<R> {
    CONSOLE.lock().as_mut().map(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_console_install_and_use() {
        let cells: &'static mut [u16] =
            Box::leak(vec![0u16; config::VGA_WIDTH * config::VGA_HEIGHT].into_boxed_slice());
        let buffer = TextBuffer::from_slice(cells, config::VGA_WIDTH, config::VGA_HEIGHT).unwrap();
        let mut grid = TextGrid::new(buffer);
        grid.clear_screen();
        install(grid);

        let cursor = with_console(|console| {
            console.print_line_default("kernel ok");
            console.get_cursor()
        });
        assert_eq!(cursor, Some((0, 1)));

        let first = with_console(|console| console.cell_at(0, 0));
        assert_eq!(first, Some(Some(ScreenChar::new(b'k', config::DEFAULT_COLOR))));
    }
}
