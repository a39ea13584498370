//! The busy-wait delay primitive: blocks the single flow of control for a caller-specified number
//! of CPU cycles. This has to be a runtime-sized wait (the sweep changes it by 4 cycles per
//! transfer), so the compiler intrinsic for constant delays is no use here.

use core::arch::asm;
use core::sync::atomic::{compiler_fence, Ordering};
use usci40::self_test::CycleDelay;

/// Cycles consumed by one iteration of the countdown loop: `dec` (1) plus a taken `jnz` (2).
const CYCLES_PER_LOOP: u16 = 3;

/// [CycleDelay] implementation backed by [delay_cycles].
pub struct DelayLoop;

impl CycleDelay for DelayLoop {
    fn delay_cycles(&mut self, cycles: u32) {
        // The countdown register is 16 bits wide; longer waits rerun the loop.
        let mut remaining = cycles;
        while remaining > u16::MAX as u32 {
            delay_cycles(u16::MAX);
            remaining -= u16::MAX as u32;
        }
        delay_cycles(remaining as u16);
    }
}

/// Blocks for at least `cycles` CPU cycles.
#[inline(never)]
pub fn delay_cycles(cycles: u16) {
    // Round the iteration count up so the wait is never shorter than asked for.
    let loops = cycles / CYCLES_PER_LOOP + 1;

    // The fences keep the compiler from hoisting surrounding register traffic across the wait;
    // the wait only means something if the following transmit-buffer load stays after it.
    compiler_fence(Ordering::SeqCst);
    unsafe {
        asm!(
            "1:",
            "dec {0}", // 1 cycle
            "jnz 1b",  // 2 cycles while the loop continues
            inout(reg) loops => _,
            options(nomem, nostack),
        );
    }
    compiler_fence(Ordering::SeqCst);
}
