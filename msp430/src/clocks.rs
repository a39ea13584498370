//! One-time system clock setup. The whole demonstration is paced from a single source: the DCO
//! runs at its factory-calibrated 16MHz and feeds MCLK (the CPU, and therefore the delay
//! primitive's cycle counting) and SMCLK (the bit-clock timer) undivided, so "cycles" mean the
//! same thing everywhere.

use msp430g2553::{CALIBRATION_DATA, SYSTEM_CLOCK};

/// BCSCTL1: keep the XT2 oscillator off.
const XT2OFF: u8 = 0x80;
/// BCSCTL2 value for MCLK = SMCLK = DCO, both undivided (DIVS_0 | DIVM_0 | SELM_0).
const BCSCTL2_DCO_UNDIVIDED: u8 = 0x00;
/// BCSCTL3: clock LFXT1 from the internal VLO (LFXT1S_2), since no crystal is fitted.
const LFXT1S_VLO: u8 = 0x20;

/// Runs the DCO at 16MHz from the factory calibration constants and selects it for both MCLK and
/// SMCLK.
///
/// Invoked exactly once at start-up, before any transfer. There is no failure path: the
/// calibration constants are burned into info memory at production, and a device with corrupted
/// calibration misclocks at the hardware level, which no software check here could repair.
pub fn configure_dco_16mhz(clock: &SYSTEM_CLOCK, calibration: &CALIBRATION_DATA) {
    let range = calibration.calbc1_16mhz.read().bits();
    let trim = calibration.caldco_16mhz.read().bits();

    // Lowest DCO setting first, then the calibrated range and trim, per the family manual's
    // recommended sequence for large frequency steps.
    clock.dcoctl.write(|w| unsafe { w.bits(0) });
    clock.bcsctl1.write(|w| unsafe { w.bits(range | XT2OFF) });
    clock.dcoctl.write(|w| unsafe { w.bits(trim) });

    clock
        .bcsctl2
        .write(|w| unsafe { w.bits(BCSCTL2_DCO_UNDIVIDED) });
    clock.bcsctl3.write(|w| unsafe { w.bits(LFXT1S_VLO) });
}
