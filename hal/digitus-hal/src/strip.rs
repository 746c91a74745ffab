//! Addressable LED strip transport
//!
//! WS2812-class LEDs take a single-wire serial stream: one packed color
//! word per LED, in wiring order, followed by an idle period that latches
//! the frame. The transport only moves words; color packing and the latch
//! delay belong to the caller.

/// Serial word sink for an addressable LED strip
///
/// A word holds one LED's color in the low 24 bits, in the device's
/// native channel order.
pub trait PixelSink {
    /// Number of words that make up one full frame
    ///
    /// This is fixed when the sink is created and must equal the number
    /// of LEDs on the strip.
    fn frame_len(&self) -> usize;

    /// Transmit one word, blocking until the transport accepts it
    fn put_blocking(&mut self, word: u32);

    /// Block until every accepted word has been shifted out
    ///
    /// Transports without a queue can rely on the default.
    fn flush(&mut self) {}
}

impl<T: PixelSink + ?Sized> PixelSink for &mut T {
    fn frame_len(&self) -> usize {
        (**self).frame_len()
    }

    fn put_blocking(&mut self, word: u32) {
        (**self).put_blocking(word);
    }

    fn flush(&mut self) {
        (**self).flush();
    }
}
