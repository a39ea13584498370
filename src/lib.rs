//! Reproduces and characterizes the MSP430G2553 USCI40 erratum: when the USCI transmit buffer is
//! reloaded too close to the peripheral's internal shift-clock edge, the SPI output stream comes
//! out offset by one bit.
//!
//! This crate is the hardware-independent half of the demonstration. It drives a byte-by-byte SPI
//! loopback transfer with a variable, precisely placed delay before one specific buffer load, and
//! sweeps that delay across the erratum's failure boundary so a logic analyser on the SPI lines
//! can pinpoint the threshold. All register traffic goes through the small traits in [self_test],
//! so the exact sequencing can be verified on the host against a simulated register set. The
//! MSP430G2553-specific register implementations live in the `usci40_msp430` crate.

#![cfg_attr(not(test), no_std)]

pub mod debug_util;
pub mod sweep;
pub mod test_pattern;
