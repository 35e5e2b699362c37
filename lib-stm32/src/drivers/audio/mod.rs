#[cfg(feature = "stm32")]
pub mod speaker;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineLevel {
    High,
    Low,
}

/// Drives a single signal line and provides blocking waits.
///
/// Implementations busy-wait; the waits are the tone generator, not a
/// side effect of it.
pub trait WaveformDriver {
    fn set_line(&mut self, level: LineLevel);
    fn wait_micros(&mut self, us: u32);
    fn wait_millis(&mut self, ms: u32);
}

impl<T: WaveformDriver + ?Sized> WaveformDriver for &mut T {
    fn set_line(&mut self, level: LineLevel) {
        (**self).set_line(level)
    }

    fn wait_micros(&mut self, us: u32) {
        (**self).wait_micros(us)
    }

    fn wait_millis(&mut self, ms: u32) {
        (**self).wait_millis(ms)
    }
}
