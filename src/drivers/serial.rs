// =============================================================================
// SERIAL SINK - ZERO OVERHEAD
// =============================================================================
//
// Porta Serial (COM1) usada como destino dos macros de log.
//
// ARQUITETURA:
// - SEM Mutex/Spinlock - Escrita direta via I/O ports
// - SEM core::fmt - Evita geração de código SSE/AVX
// - SEM alocação - Apenas strings e valores imediatos
//
// ALVOS:
// - x86_64 bare-metal (target_os = "none"): escreve na COM1 (0x3F8)
// - Alvos hospedados (testes no host): o sink descarta tudo, já que
//   `in`/`out` em user mode gera #GP
//
// FUNÇÕES DISPONÍVEIS:
// - emit(byte)       : Envia um byte
// - emit_str(s)      : Envia string
// - emit_hex(v)      : Envia u64 em hexadecimal
// - emit_nl()        : Envia newline (\r\n)
//
// NOTA:
// Este sink NÃO garante exclusão mútua entre CPUs. Em ambiente SMP,
// os logs podem se intercalar. Isso é aceitável para debugging.
//
// =============================================================================

#[cfg(all(target_arch = "x86_64", target_os = "none"))]
mod port {
    /// Porta de dados da COM1
    pub const COM1_DATA: u16 = 0x3F8;

    /// Porta de status da COM1 (Line Status Register)
    pub const COM1_STATUS: u16 = 0x3FD;

    #[inline(always)]
    pub unsafe fn outb(port: u16, value: u8) {
        core::arch::asm!(
            "out dx, al",
            in("dx") port,
            in("al") value,
            options(nostack, nomem, preserves_flags)
        );
    }

    #[inline(always)]
    pub unsafe fn inb(port: u16) -> u8 {
        let value: u8;
        core::arch::asm!(
            "in al, dx",
            out("al") value,
            in("dx") port,
            options(nostack, nomem, preserves_flags)
        );
        value
    }
}

// =============================================================================
// INICIALIZAÇÃO
// =============================================================================

/// Inicializa a porta serial COM1 (UART 16550).
///
/// Configura: 38400 baud, 8N1, FIFO habilitado.
#[cfg(all(target_arch = "x86_64", target_os = "none"))]
pub fn init() {
    use port::{outb, COM1_DATA};

    unsafe {
        // Disable interrupts
        outb(COM1_DATA + 1, 0x00);
        // Enable DLAB (set baud rate divisor)
        outb(COM1_DATA + 3, 0x80);
        // Divisor 3 = 38400 baud
        outb(COM1_DATA, 0x03);
        outb(COM1_DATA + 1, 0x00);
        // 8 bits, no parity, one stop bit
        outb(COM1_DATA + 3, 0x03);
        // Enable FIFO, clear them, with 14-byte threshold
        outb(COM1_DATA + 2, 0xC7);
        // IRQs enabled, RTS/DSR set
        outb(COM1_DATA + 4, 0x0B);
    }
}

/// Inicializa a porta serial (no-op em alvos hospedados).
#[cfg(not(all(target_arch = "x86_64", target_os = "none")))]
pub fn init() {}

// =============================================================================
// ESCRITA - CORE
// =============================================================================

/// Envia um único byte para a porta serial.
///
/// Espera o buffer de transmissão estar livre (busy wait no bit 5 do LSR).
#[cfg(all(target_arch = "x86_64", target_os = "none"))]
#[inline(always)]
pub fn emit(byte: u8) {
    use port::{inb, outb, COM1_DATA, COM1_STATUS};

    unsafe {
        while inb(COM1_STATUS) & 0x20 == 0 {}
        outb(COM1_DATA, byte);
    }
}

/// Envia um único byte (descartado em alvos hospedados).
#[cfg(not(all(target_arch = "x86_64", target_os = "none")))]
#[inline(always)]
pub fn emit(byte: u8) {
    let _ = byte;
}

/// Envia uma string para a porta serial.
#[inline(never)]
pub fn emit_str(s: &str) {
    for &byte in s.as_bytes() {
        emit(byte);
    }
}

/// Envia uma nova linha (CRLF) para a porta serial.
#[inline(never)]
pub fn emit_nl() {
    emit(b'\r');
    emit(b'\n');
}

// =============================================================================
// ESCRITA - FORMATAÇÃO NUMÉRICA
// =============================================================================

/// Envia um valor u64 em formato hexadecimal.
///
/// Formato de saída: 0x0123456789ABCDEF (sempre 18 caracteres)
#[inline(never)]
pub fn emit_hex(value: u64) {
    emit(b'0');
    emit(b'x');

    let mut shift = 60i32;
    while shift >= 0 {
        let nibble = ((value >> shift) & 0xF) as u8;
        emit(if nibble < 10 {
            b'0' + nibble
        } else {
            b'A' + (nibble - 10)
        });
        shift -= 4;
    }
}
