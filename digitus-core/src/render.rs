//! Matrix renderer
//!
//! Turns a digit into a full frame and pushes it to the strip. The frame
//! is always built and encoded in memory before the first word goes out,
//! so a render either starts with the complete picture or not at all.

use digitus_hal::PixelSink;
use embedded_hal::delay::DelayNs;

use crate::color::{encode_frame, DeviceColor, PercentColor};
use crate::digit::Digit;
use crate::glyph::{mask_for, MATRIX_CELLS};

/// Default idle time after a frame before the next may start (µs)
///
/// Covers the last word still leaving the shifter (24 bits at 800 kHz,
/// 30 µs) plus the WS2812 reset time of 50 µs.
pub const DEFAULT_LATCH_US: u32 = 80;

/// Color of lit glyph cells
pub const GLYPH_COLOR: PercentColor = PercentColor::red(100);

/// Renderer construction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError {
    /// The sink was registered for a different number of LEDs
    FrameLength { expected: usize, actual: usize },
}

/// Percentage-color frame for a digit
pub fn glyph_frame(digit: Digit) -> [PercentColor; MATRIX_CELLS] {
    let mask = mask_for(digit);
    let mut frame = [PercentColor::OFF; MATRIX_CELLS];
    for (cell, color) in frame.iter_mut().enumerate() {
        if mask.is_lit(cell) {
            *color = GLYPH_COLOR;
        }
    }
    frame
}

/// Drives the LED matrix through a [`PixelSink`]
pub struct MatrixRenderer<S, D> {
    sink: S,
    delay: D,
    latch_us: u32,
    frames_sent: u32,
}

impl<S: PixelSink, D: DelayNs> MatrixRenderer<S, D> {
    /// Create a renderer
    ///
    /// Fails if the sink's frame length does not match the matrix.
    pub fn new(sink: S, delay: D, latch_us: u32) -> Result<Self, RenderError> {
        let actual = sink.frame_len();
        if actual != MATRIX_CELLS {
            return Err(RenderError::FrameLength {
                expected: MATRIX_CELLS,
                actual,
            });
        }

        Ok(Self {
            sink,
            delay,
            latch_us,
            frames_sent: 0,
        })
    }

    /// Render an unchecked value
    ///
    /// Anything outside `0..=9` is ignored and nothing is transmitted.
    pub fn render(&mut self, value: i32) {
        if let Ok(digit) = Digit::try_from(value) {
            self.render_digit(digit);
        }
    }

    /// Render a digit in the glyph color
    pub fn render_digit(&mut self, digit: Digit) {
        let frame = encode_frame(&glyph_frame(digit));
        self.transmit(&frame);
    }

    /// Turn every LED off
    pub fn clear(&mut self) {
        self.transmit(&[DeviceColor::OFF; MATRIX_CELLS]);
    }

    /// Frames transmitted since creation
    pub fn frames_sent(&self) -> u32 {
        self.frames_sent
    }

    /// Access the underlying sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the renderer and return its parts
    pub fn release(self) -> (S, D) {
        (self.sink, self.delay)
    }

    fn transmit(&mut self, frame: &[DeviceColor; MATRIX_CELLS]) {
        // Strip order is the wiring order; never reorder.
        for color in frame {
            self.sink.put_blocking(color.word());
        }
        self.sink.flush();
        self.delay.delay_us(self.latch_us);
        self.frames_sent = self.frames_sent.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    struct RecordingSink {
        len: usize,
        words: Vec<u32, 64>,
        flushes: u8,
    }

    impl RecordingSink {
        fn new(len: usize) -> Self {
            Self {
                len,
                words: Vec::new(),
                flushes: 0,
            }
        }
    }

    impl PixelSink for RecordingSink {
        fn frame_len(&self) -> usize {
            self.len
        }

        fn put_blocking(&mut self, word: u32) {
            self.words.push(word).unwrap();
        }

        fn flush(&mut self) {
            self.flushes += 1;
        }
    }

    #[derive(Default)]
    struct TallyDelay {
        total_ns: u64,
    }

    impl DelayNs for TallyDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += u64::from(ns);
        }
    }

    fn renderer() -> MatrixRenderer<RecordingSink, TallyDelay> {
        MatrixRenderer::new(
            RecordingSink::new(MATRIX_CELLS),
            TallyDelay::default(),
            DEFAULT_LATCH_US,
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_wrong_frame_length() {
        let result = MatrixRenderer::new(RecordingSink::new(24), TallyDelay::default(), 80);
        assert_eq!(
            result.err(),
            Some(RenderError::FrameLength {
                expected: 25,
                actual: 24
            })
        );
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut r = renderer();
        r.render(-1);
        r.render(10);
        r.render(i32::MIN);
        assert!(r.sink().words.is_empty());
        assert_eq!(r.sink().flushes, 0);
        assert_eq!(r.frames_sent(), 0);
    }

    #[test]
    fn test_render_pushes_full_frame() {
        let mut r = renderer();
        r.render(1);
        let words = &r.sink().words;
        assert_eq!(words.len(), MATRIX_CELLS);

        let mask = mask_for(Digit::new(1).unwrap());
        for (cell, &word) in words.iter().enumerate() {
            let expected = if mask.is_lit(cell) { 0x0000_FF00 } else { 0 };
            assert_eq!(word, expected, "cell {}", cell);
        }
        assert_eq!(r.sink().flushes, 1);
    }

    #[test]
    fn test_latch_after_frame() {
        let mut r = renderer();
        r.render(2);
        let (_, delay) = r.release();
        assert_eq!(delay.total_ns, u64::from(DEFAULT_LATCH_US) * 1_000);
    }

    #[test]
    fn test_clear_sends_zeros() {
        let mut r = renderer();
        r.clear();
        assert_eq!(r.sink().words.len(), MATRIX_CELLS);
        assert!(r.sink().words.iter().all(|&w| w == 0));
        assert_eq!(r.frames_sent(), 1);
    }

    #[test]
    fn test_glyph_frame_is_red_only() {
        let frame = glyph_frame(Digit::new(8).unwrap());
        assert!(frame.iter().all(|c| c.g == 0 && c.b == 0));
        assert_eq!(frame.iter().filter(|c| c.r == 100).count(), 13);
    }
}
