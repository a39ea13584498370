//! Demonstrates the MSP430G2553 USCI40 erratum by sweeping a software delay across its failure
//! boundary: SPI loopback transfers run back to back, each delaying the fourth transmit-buffer
//! load a little longer than the last, until the captured output stream visibly slips by one bit.
//!
//! Wiring: jumper P1.5 to P2.0, then connect the logic analyser to P1.4 (chip select), P1.6
//! (data), P2.3 (bit clock) and P1.3 (delay marker).
//!
//! DCO = 16MHz, MCLK = SMCLK = DCO.

#![no_std]
#![no_main]

use msp430_rt::entry;
use panic_msp430 as _;
use usci40::sweep::{run_sweep, SweepConfig};
use usci40::test_pattern::TEST_PATTERN;
use usci40_msp430::delay::DelayLoop;
use usci40_msp430::io::{SelfTestBoard, SpiMode, BIT_PERIOD_CYCLES};
use usci40_msp430::{clocks, debug};

/// WDTCTL value stopping the watchdog (WDTPW | WDTHOLD).
const WDTCTL_STOP: u16 = 0x5A80;

#[entry]
fn main() -> ! {
    let periph = msp430g2553::Peripherals::take().unwrap();

    // Stop the watchdog before anything else; a sweep takes far longer than its timeout.
    periph
        .WATCHDOG_TIMER
        .wdtctl
        .write(|w| unsafe { w.bits(WDTCTL_STOP) });

    clocks::configure_dco_16mhz(&periph.SYSTEM_CLOCK, &periph.CALIBRATION_DATA);

    let mut board = SelfTestBoard::new(
        SpiMode::Mode0,
        periph.PORT_1_2,
        periph.PORT_3,
        periph.TIMER1_A3,
        periph.USCI_B0_SPI_MODE,
        periph.SPECIAL_FUNCTION,
    );
    let mut delay = DelayLoop;

    let config = SweepConfig {
        // Sweep the injected delay from 6 to 12 SPI bit times in 4-cycle steps; the erratum's
        // threshold sits inside that window.
        min_delay_cycles: 6 * BIT_PERIOD_CYCLES,
        max_delay_cycles: 12 * BIT_PERIOD_CYCLES,
        step_cycles: 4,
        // Idle between transfers so the protocol analyser can keep up.
        pacing_cycles: 320_000,
    };

    debug::breakpoint();
    run_sweep(&mut board, &mut delay, &TEST_PATTERN, &config);
    debug::breakpoint();

    loop {
        msp430::asm::nop();
    }
}

// The compiler will emit calls to the abort() compiler intrinsic if debug assertions are
// enabled (default for dev profile). MSP430 does not actually have meaningful abort() support
// so for now, we create our own in each application where debug assertions are present.
#[no_mangle]
extern "C" fn abort() -> ! {
    panic!();
}
