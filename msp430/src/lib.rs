//! MSP430G2553-specific half of the USCI40 erratum demonstration: clock and peripheral setup, the
//! register-level transfer plumbing behind [usci40::self_test::TransferIo], and the cycle-counted
//! busy-wait delay primitive.

#![no_std]
// We use this feature for the cycle-counted delay loop and the breakpoint opcode.
#![feature(asm_experimental_arch)]

pub mod clocks;
pub mod debug;
pub mod delay;
pub mod io;
