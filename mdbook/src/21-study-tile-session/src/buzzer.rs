//! Square-wave tones on a bare GPIO pin.

use embedded_hal::{delay::DelayNs, digital::OutputPin};

pub struct Buzzer<P> {
    pin: P,
}

impl<P: OutputPin> Buzzer<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Toggles the pin at `frequency_hz` for `duration_ms`, blocking.
    pub fn play<D: DelayNs>(&mut self, delay: &mut D, frequency_hz: u32, duration_ms: u32) {
        if frequency_hz == 0 {
            delay.delay_ms(duration_ms);
            return;
        }
        let period_us = 1_000_000 / frequency_hz;
        let cycles = (duration_ms * 1000) / period_us;

        for _ in 0..cycles {
            // Speaker pins are infallible on the nRF52.
            let _ = self.pin.set_high();
            delay.delay_us(period_us / 2);
            let _ = self.pin.set_low();
            delay.delay_us(period_us / 2);
        }
    }

    pub fn release(self) -> P {
        self.pin
    }
}
