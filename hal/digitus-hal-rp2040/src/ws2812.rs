//! PIO-based WS2812 transmitter
//!
//! One state machine shifts 24-bit GRB words out of its TX FIFO onto the
//! strip data pin. The CPU feeds the FIFO word by word; there is no DMA
//! and no interrupt involved, so a frame is written with interrupts
//! enabled and the button handlers keep running.

use digitus_hal::PixelSink;
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pio::{
    Common, Config, Direction as PioDirection, FifoJoin, Instance, PioPin, ShiftConfig,
    ShiftDirection, StateMachine,
};
use embassy_rp::Peri;

use crate::pio::{clock_divider, BITS_PER_WORD};

/// WS2812 strip on one PIO state machine
pub struct PioWs2812<'d, PIO: Instance, const SM: usize> {
    sm: StateMachine<'d, PIO, SM>,
    leds: usize,
}

impl<'d, PIO: Instance, const SM: usize> PioWs2812<'d, PIO, SM> {
    /// Load the transmitter program and start the state machine
    ///
    /// # Arguments
    /// * `common` - PIO common resources (for loading program)
    /// * `sm` - State machine to use
    /// * `data_pin` - Strip data line (must be PIO-capable)
    /// * `leds` - Number of LEDs on the strip
    pub fn new<DATA: PioPin>(
        common: &mut Common<'d, PIO>,
        mut sm: StateMachine<'d, PIO, SM>,
        data_pin: Peri<'d, DATA>,
        leds: usize,
    ) -> Self {
        // Delays here are T3-1, T1-1, T2-1 and T2-1 from crate::pio
        let prg = pio::pio_asm!(
            ".side_set 1",
            ".wrap_target",
            "bitloop:",
            "    out x, 1        side 0 [2]", // Low tail of the previous bit
            "    jmp !x do_zero  side 1 [1]", // Rising edge, common high time
            "    jmp bitloop     side 1 [4]", // "1": stay high
            "do_zero:",
            "    nop             side 0 [4]", // "0": drop early
            ".wrap"
        );

        let installed = common.load_program(&prg.program);

        let out_pin = common.make_pio_pin(data_pin);

        let mut cfg = Config::default();
        cfg.use_program(&installed, &[&out_pin]);
        cfg.set_out_pins(&[&out_pin]);
        cfg.clock_divider = clock_divider(clk_sys_freq());
        cfg.fifo_join = FifoJoin::TxOnly;
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: BITS_PER_WORD as u8,
            direction: ShiftDirection::Left,
        };

        sm.set_config(&cfg);
        sm.set_pin_dirs(PioDirection::Out, &[&out_pin]);
        sm.set_enable(true);

        Self { sm, leds }
    }
}

impl<'d, PIO: Instance, const SM: usize> PixelSink for PioWs2812<'d, PIO, SM> {
    fn frame_len(&self) -> usize {
        self.leds
    }

    fn put_blocking(&mut self, word: u32) {
        // The shifter takes the top 24 bits
        let aligned = word << 8;
        while !self.sm.tx().try_push(aligned) {}
    }

    fn flush(&mut self) {
        while !self.sm.tx().empty() {}
    }
}
