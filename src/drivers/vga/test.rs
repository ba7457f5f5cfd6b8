//! Self-tests do driver VGA
//!
//! Rodam sobre um buffer em RAM (shadow grid), nunca sobre `0xB8000`: a
//! tela real não é tocada durante os testes.

use super::buffer::TextBuffer;
use super::color::{Color, ColorCode};
use super::config::{VGA_HEIGHT, VGA_WIDTH};
use super::writer::TextGrid;
use crate::klib::test_framework::{run_test_suite, SuiteReport, TestCase, TestResult};

const CELLS: usize = VGA_WIDTH * VGA_HEIGHT;

/// Casos de teste do driver VGA
const VGA_TESTS: &[TestCase] = &[
    TestCase::new("vga_cell_round_trip", test_cell_round_trip),
    TestCase::new("vga_scroll_discards_top", test_scroll_discards_top),
    TestCase::new("vga_tab_stops", test_tab_stops),
    TestCase::new("vga_backspace_wrap", test_backspace_wrap),
    TestCase::new("vga_decimal", test_decimal),
    TestCase::new("vga_hex", test_hex),
    TestCase::new("vga_box_corners", test_box_corners),
    TestCase::new("vga_cursor_bounds", test_cursor_bounds),
];

/// Executa todos os testes do driver VGA
pub fn run_vga_tests() -> SuiteReport {
    run_test_suite("VGA", VGA_TESTS)
}

/// Roda `f` sobre uma grade 80x25 limpa em RAM.
fn with_shadow_grid(f: impl FnOnce(&mut TextGrid<'_>) -> TestResult) -> TestResult {
    let mut cells = [0u16; CELLS];
    match TextBuffer::from_slice(&mut cells, VGA_WIDTH, VGA_HEIGHT) {
        Ok(buffer) => {
            let mut grid = TextGrid::new(buffer);
            grid.clear_screen();
            f(&mut grid)
        }
        Err(err) => {
            crate::kerror!(err.as_str());
            TestResult::Failed
        }
    }
}

/// Compara a linha `row` (a partir da coluna 0) com `expected`.
fn row_starts_with(grid: &TextGrid<'_>, row: usize, expected: &[u8]) -> bool {
    expected
        .iter()
        .enumerate()
        .all(|(x, &c)| grid.cell_at(x, row).map(|cell| cell.ascii) == Some(c))
}

fn expect(ok: bool, what: &str) -> TestResult {
    if ok {
        TestResult::Passed
    } else {
        crate::kerror!(what);
        TestResult::Failed
    }
}

fn test_cell_round_trip() -> TestResult {
    with_shadow_grid(|grid| {
        let color = ColorCode::new(Color::White, Color::Red);
        for c in 32u8..=126 {
            grid.put_char_at(c, color, 40, 12);
            match grid.cell_at(40, 12) {
                Some(cell) if cell.ascii == c && cell.color == color => {}
                _ => {
                    crate::kerror!("(VGA) Célula divergente, char=", c);
                    return TestResult::Failed;
                }
            }
        }
        TestResult::Passed
    })
}

fn test_scroll_discards_top() -> TestResult {
    with_shadow_grid(|grid| {
        let color = grid.get_default_color();
        grid.print("primeira", color);
        for _ in 0..CELLS {
            grid.put_char(b'.', color);
        }
        grid.put_char(b'!', color);

        let top_gone = !row_starts_with(grid, 0, b"primeira");
        let (x, y) = grid.get_cursor();
        expect(
            top_gone && y == VGA_HEIGHT - 1 && x == 9,
            "(VGA) Scroll não descartou a linha do topo",
        )
    })
}

fn test_tab_stops() -> TestResult {
    with_shadow_grid(|grid| {
        let color = grid.get_default_color();
        grid.put_char(b'\t', color);
        let first = grid.get_cursor();
        grid.set_cursor(6, 0);
        grid.put_char(b'\t', color);
        let second = grid.get_cursor();
        expect(first == (4, 0) && second == (8, 0), "(VGA) Tab fora da parada")
    })
}

fn test_backspace_wrap() -> TestResult {
    with_shadow_grid(|grid| {
        let color = grid.get_default_color();
        grid.put_char(0x08, color);
        let at_origin = grid.get_cursor() == (0, 0);

        grid.put_char_at(b'#', color, VGA_WIDTH - 1, 0);
        grid.set_cursor(0, 1);
        grid.put_char(0x08, color);
        let wrapped = grid.get_cursor() == (VGA_WIDTH - 1, 0)
            && grid.cell_at(VGA_WIDTH - 1, 0).map(|c| c.ascii) == Some(b' ');

        expect(at_origin && wrapped, "(VGA) Backspace entre linhas")
    })
}

fn test_decimal() -> TestResult {
    with_shadow_grid(|grid| {
        let color = grid.get_default_color();
        grid.print_int(-123, color);
        grid.put_char(b'\n', color);
        grid.print_uint(u32::MAX, color);
        grid.put_char(b'\n', color);
        grid.print_int(0, color);

        expect(
            row_starts_with(grid, 0, b"-123 ")
                && row_starts_with(grid, 1, b"4294967295 ")
                && row_starts_with(grid, 2, b"0 "),
            "(VGA) Decimal incorreto",
        )
    })
}

fn test_hex() -> TestResult {
    with_shadow_grid(|grid| {
        grid.print_hex(255, grid.get_default_color());
        expect(row_starts_with(grid, 0, b"0x000000FF "), "(VGA) Hex incorreto")
    })
}

fn test_box_corners() -> TestResult {
    with_shadow_grid(|grid| {
        grid.draw_box(0, 0, 2, 2, grid.get_default_color());
        expect(
            row_starts_with(grid, 0, b"++ ") && row_starts_with(grid, 1, b"++ "),
            "(VGA) Caixa 2x2 sem os quatro cantos",
        )
    })
}

fn test_cursor_bounds() -> TestResult {
    with_shadow_grid(|grid| {
        grid.set_cursor(2, 2);
        grid.set_cursor(VGA_WIDTH, 2);
        grid.set_cursor(2, VGA_HEIGHT);
        expect(grid.get_cursor() == (2, 2), "(VGA) set_cursor aceitou posição inválida")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_test_suite_passes() {
        for case in VGA_TESTS {
            assert_eq!((case.func)(), TestResult::Passed, "{}", case.name);
        }
        assert!(run_vga_tests().all_passed());
    }
}
