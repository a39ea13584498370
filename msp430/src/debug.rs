//! Development-time instrumentation.

use core::arch::asm;

/// Emits the opcode the TI debug tools recognise as a software breakpoint (0x4343). The sweep
/// brackets itself with these so a capture session can be armed and stopped from the debugger;
/// they carry no meaning at runtime.
#[inline(always)]
pub fn breakpoint() {
    unsafe { asm!(".word 0x4343", options(nomem, nostack)) };
}
