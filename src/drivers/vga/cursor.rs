//! Cursor lógico e hook do cursor de hardware.
//!
//! O cursor piscante do CRTC (portas 0x3D4/0x3D5, registradores 0x0E/0x0F)
//! NÃO é programado por este driver. O hook existe como ponto de integração
//! e hoje só registra a posição linear que seria enviada ao hardware.

/// Posição de escrita sequencial (coluna, linha).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub x: usize,
    pub y: usize,
}

impl Cursor {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Offset linear na grade (`y * width + x`).
    #[inline]
    pub const fn linear(self, width: usize) -> usize {
        self.y * width + self.x
    }
}

/// Hook do cursor de hardware (inerte).
#[derive(Debug, Clone, Copy, Default)]
pub struct HardwareCursor {
    position: u16,
}

impl HardwareCursor {
    pub const fn new() -> Self {
        Self { position: 0 }
    }

    /// Chamado a cada mudança do cursor lógico.
    ///
    /// Sem I/O de porta: a sequência outb(0x3D4, 0x0F) / outb(0x3D5, low) /
    /// outb(0x3D4, 0x0E) / outb(0x3D5, high) fica para o driver de CRTC.
    #[inline]
    pub fn sync(&mut self, cursor: Cursor, width: usize) {
        self.position = cursor.linear(width) as u16;
    }

    /// Última posição linear que o hook teria programado.
    #[inline]
    pub fn position(&self) -> u16 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_offset() {
        assert_eq!(Cursor::new(0, 0).linear(80), 0);
        assert_eq!(Cursor::new(5, 2).linear(80), 165);
        assert_eq!(Cursor::new(79, 24).linear(80), 1999);
    }

    #[test]
    fn test_hook_records_position() {
        let mut hw = HardwareCursor::new();
        hw.sync(Cursor::new(3, 1), 80);
        assert_eq!(hw.position(), 83);
    }
}
