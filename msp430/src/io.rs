//! Register-level plumbing for the self-test transfer on the MSP430G2553: GPIO direction setup,
//! the Timer1_A bit-clock generator, the USCI_B0 loopback configuration, and the
//! [TransferIo] implementation the transfer engine drives.
//!
//! The USCI is deliberately configured as an SPI *slave*: its bit clock is generated externally
//! by Timer1_A's compare output on P2.0 and fed back into UCB0CLK (P1.5) through a jumper. That
//! gives the delay primitive a clock domain to race against that software cannot accidentally
//! stall, and P2.3 re-emits the same clock for the analyser.

use msp430g2553::{PORT_1_2, PORT_3, SPECIAL_FUNCTION, TIMER1_A3, USCI_B0_SPI_MODE};
use usci40::self_test::TransferIo;

/// P1.3, the timing-marker line bracketing the injected delay.
const MARKER_PIN: u8 = 1 << 3;
/// P1.4, the active-low chip-select line.
const SELECT_PIN: u8 = 1 << 4;
/// P1.5 (UCB0CLK), P1.6 (UCB0SOMI) and P1.7 (UCB0SIMO).
const SPI_PINS: u8 = 1 << 5 | 1 << 6 | 1 << 7;
/// P2.0 (jumpered to UCB0CLK) and P2.3 (the analyser's reference clock), both carrying the
/// Timer1_A compare output.
const CLOCK_OUT_PINS: u8 = 1 << 0 | 1 << 3;

// USCI control bits (UCB0CTL0/UCB0CTL1/UCB0STAT).
const UCSWRST: u8 = 0x01;
const UCSYNC: u8 = 0x01;
const UCMSB: u8 = 0x20;
const UCCKPL: u8 = 0x40;
const UCCKPH: u8 = 0x80;
const UCLISTEN: u8 = 0x80;

// IFG2 status flags for USCI_B0.
const UCB0TXIFG: u8 = 0x08;
const UCB0RXIFG: u8 = 0x04;

// Timer1_A control values (TA1CTL/TA1CCTL0).
const TASSEL_SMCLK: u16 = 0x0200;
const ID_DIV8: u16 = 0x00C0;
const MC_UP: u16 = 0x0010;
const TACLR: u16 = 0x0004;
const TAIFG: u16 = 0x0001;
/// Compare output mode 4: toggle on each compare, producing the clock train.
const OUTMOD_TOGGLE: u16 = 0x0080;
/// Compare output mode 5: reset, holding the output low while no transfer runs.
const OUTMOD_RESET: u16 = 0x00A0;

/// Timer ticks between compare-output toggles while the clock train runs. The timer counts
/// SMCLK/8 and toggles every 8 ticks, so one full bit-clock period is 16 ticks: bit clock =
/// SMCLK / 128.
const BIT_CLOCK_HALF_PERIOD_TICKS: u16 = 8;

/// CPU clock cycles per SPI bit time, for sizing delays in bit times. MCLK and SMCLK run at the
/// same rate, so this is simply the bit-clock divider.
pub const BIT_PERIOD_CYCLES: u32 = 128;

/// The four standard clock phase/polarity variants, as the corresponding UCB0CTL0 bit values.
/// UCCKPH set means data is captured on the first clock edge; UCCKPL set means the clock idles
/// high.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiMode {
    /// Clock idles low, capture on the first edge.
    Mode0,
    /// Clock idles low, capture on the second edge.
    Mode1,
    /// Clock idles high, capture on the first edge.
    Mode2,
    /// Clock idles high, capture on the second edge.
    Mode3,
}

impl SpiMode {
    fn ctl0_bits(self) -> u8 {
        match self {
            SpiMode::Mode0 => UCCKPH,
            SpiMode::Mode1 => 0,
            SpiMode::Mode2 => UCCKPL | UCCKPH,
            SpiMode::Mode3 => UCCKPL,
        }
    }
}

/// Owns every peripheral the transfer engine touches. Constructing it performs all of the
/// one-time pin, timer and USCI configuration; afterwards the engine alone sequences the
/// registers through the [TransferIo] implementation below.
pub struct SelfTestBoard {
    port: PORT_1_2,
    timer: TIMER1_A3,
    usci: USCI_B0_SPI_MODE,
    sfr: SPECIAL_FUNCTION,
}

impl SelfTestBoard {
    /// One-time board setup with the chosen clock phase/polarity variant.
    ///
    /// Leaves the USCI configured but held in reset with chip select deasserted, the state every
    /// transfer starts from and returns to. Taking the peripherals by value means nothing else
    /// can reach these registers while the sweep runs.
    pub fn new(
        mode: SpiMode,
        port: PORT_1_2,
        port3: PORT_3,
        timer: TIMER1_A3,
        usci: USCI_B0_SPI_MODE,
        sfr: SPECIAL_FUNCTION,
    ) -> SelfTestBoard {
        // Drive every pin low as a plain output, so the analyser sees clean idle levels on all
        // unused lines.
        port.p1out.write(|w| unsafe { w.bits(0x00) });
        port.p1dir.write(|w| unsafe { w.bits(0xFF) });
        port.p2sel.write(|w| unsafe { w.bits(0x00) });
        port.p2out.write(|w| unsafe { w.bits(0x00) });
        port.p2dir.write(|w| unsafe { w.bits(0xFF) });
        port3.p3out.write(|w| unsafe { w.bits(0x00) });
        port3.p3dir.write(|w| unsafe { w.bits(0xFF) });

        // Timer1_A free-running from SMCLK/8 in up mode, compare output parked low. With TA1CCR0
        // still zero no clock train is generated until a transfer starts one.
        timer
            .ta1ctl
            .write(|w| unsafe { w.bits(TASSEL_SMCLK | ID_DIV8 | MC_UP | TACLR) });
        timer.ta1ccr0.write(|w| unsafe { w.bits(0) });
        timer.ta1cctl0.write(|w| unsafe { w.bits(OUTMOD_RESET) });
        // Route the TA1.0 compare output to the clock pins.
        port.p2sel
            .modify(|r, w| unsafe { w.bits(r.bits() | CLOCK_OUT_PINS) });

        // Deselect before the USCI is touched.
        port.p1out
            .modify(|r, w| unsafe { w.bits(r.bits() | SELECT_PIN) });

        // 3-pin SPI slave (UCMODE_0, no UCMST), MSB first, internal loopback, held in reset. The
        // bit clock arrives on UCB0CLK via the external jumper from P2.0.
        usci.ucb0ctl1
            .modify(|r, w| unsafe { w.bits(r.bits() | UCSWRST) });
        usci.ucb0ctl0
            .write(|w| unsafe { w.bits(UCSYNC | UCMSB | mode.ctl0_bits()) });
        usci.ucb0stat.write(|w| unsafe { w.bits(UCLISTEN) });

        SelfTestBoard {
            port,
            timer,
            usci,
            sfr,
        }
    }
}

impl TransferIo for SelfTestBoard {
    fn route_spi_pins(&mut self, enabled: bool) {
        if enabled {
            self.port
                .p1sel
                .modify(|r, w| unsafe { w.bits(r.bits() | SPI_PINS) });
            self.port
                .p1sel2
                .modify(|r, w| unsafe { w.bits(r.bits() | SPI_PINS) });
        } else {
            self.port
                .p1sel2
                .modify(|r, w| unsafe { w.bits(r.bits() & !SPI_PINS) });
            self.port
                .p1sel
                .modify(|r, w| unsafe { w.bits(r.bits() & !SPI_PINS) });
        }
    }

    fn set_select(&mut self, asserted: bool) {
        // Active low.
        if asserted {
            self.port
                .p1out
                .modify(|r, w| unsafe { w.bits(r.bits() & !SELECT_PIN) });
        } else {
            self.port
                .p1out
                .modify(|r, w| unsafe { w.bits(r.bits() | SELECT_PIN) });
        }
    }

    fn set_marker(&mut self, asserted: bool) {
        if asserted {
            self.port
                .p1out
                .modify(|r, w| unsafe { w.bits(r.bits() | MARKER_PIN) });
        } else {
            self.port
                .p1out
                .modify(|r, w| unsafe { w.bits(r.bits() & !MARKER_PIN) });
        }
    }

    fn hold_in_reset(&mut self, held: bool) {
        if held {
            self.usci
                .ucb0ctl1
                .modify(|r, w| unsafe { w.bits(r.bits() | UCSWRST) });
        } else {
            self.usci
                .ucb0ctl1
                .modify(|r, w| unsafe { w.bits(r.bits() & !UCSWRST) });
        }
    }

    fn tx_empty(&mut self) -> bool {
        self.sfr.ifg2.read().bits() & UCB0TXIFG != 0
    }

    fn load_tx(&mut self, byte: u8) {
        self.usci.ucb0txbuf.write(|w| unsafe { w.bits(byte) });
    }

    fn rx_full(&mut self) -> bool {
        self.sfr.ifg2.read().bits() & UCB0RXIFG != 0
    }

    fn read_rx(&mut self) -> u8 {
        self.usci.ucb0rxbuf.read().bits()
    }

    fn restart_bit_clock(&mut self) {
        self.timer
            .ta1ctl
            .modify(|r, w| unsafe { w.bits(r.bits() | TACLR) });
        self.timer
            .ta1cctl0
            .write(|w| unsafe { w.bits(OUTMOD_TOGGLE) });
        self.timer
            .ta1ccr0
            .write(|w| unsafe { w.bits(BIT_CLOCK_HALF_PERIOD_TICKS - 1) });
    }

    fn idle_bit_clock(&mut self) {
        self.timer
            .ta1cctl0
            .write(|w| unsafe { w.bits(OUTMOD_RESET) });
        self.timer
            .ta1ctl
            .modify(|r, w| unsafe { w.bits(r.bits() & !TAIFG) });
    }

    fn bit_clock_wrapped(&mut self) -> bool {
        self.timer.ta1ctl.read().bits() & TAIFG != 0
    }

    fn clear_bit_clock_period(&mut self) {
        self.timer.ta1ccr0.write(|w| unsafe { w.bits(0) });
    }
}
