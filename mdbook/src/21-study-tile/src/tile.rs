//! The micro:bit side of the session: LED grid, speaker, microphone and the
//! millisecond clock.

use core::sync::atomic::Ordering;

use embedded_hal::delay::DelayNs;
use microbit::{
    display::nonblocking::BitImage,
    hal::{
        gpio::{p0::P0_05, Floating, Input, Output, Pin, PushPull},
        saadc::Saadc,
        Timer,
    },
    pac::TIMER2,
};
use study_tile_session::{
    buzzer::Buzzer,
    config::{GRID_SIZE, MIC_SAMPLE_COUNT, MIC_SAMPLE_SPACING_US},
    icons::Pattern,
    noise::sound_level,
    Clock, Icon, Microphone, Note, Screen, Speaker,
};

use crate::{DISPLAY, MILLIS};

pub struct Tile {
    delay: Timer<TIMER2>,
    buzzer: Buzzer<Pin<Output<PushPull>>>,
    saadc: Saadc,
    mic_in: P0_05<Input<Floating>>,
    // What the display is showing. Pushed whole on every change.
    frame: Pattern,
}

impl Tile {
    pub fn new(
        delay: Timer<TIMER2>,
        speaker: Pin<Output<PushPull>>,
        saadc: Saadc,
        mic_in: P0_05<Input<Floating>>,
    ) -> Self {
        Self {
            delay,
            buzzer: Buzzer::new(speaker),
            saadc,
            mic_in,
            frame: [[0; GRID_SIZE]; GRID_SIZE],
        }
    }

    fn refresh(&self) {
        let image = BitImage::new(&self.frame);
        DISPLAY.with_lock(|display| display.show(&image));
    }
}

impl Clock for Tile {
    fn now_ms(&self) -> u32 {
        MILLIS.load(Ordering::Relaxed)
    }
}

impl Microphone for Tile {
    /// Peak-to-peak amplitude over a short burst of samples, scaled to 0-255.
    /// Failed conversions are skipped; a burst with none reads as silence.
    fn ambient_noise(&mut self) -> u8 {
        let mut min_val: i16 = i16::MAX;
        let mut max_val: i16 = i16::MIN;

        for _ in 0..MIC_SAMPLE_COUNT {
            if let Ok(sample) = self.saadc.read_channel(&mut self.mic_in) {
                min_val = min_val.min(sample);
                max_val = max_val.max(sample);
            }
            self.delay.delay_us(MIC_SAMPLE_SPACING_US);
        }

        sound_level(max_val.saturating_sub(min_val))
    }
}

impl Screen for Tile {
    fn clear(&mut self) {
        self.frame = [[0; GRID_SIZE]; GRID_SIZE];
        self.refresh();
    }

    fn light(&mut self, x: usize, y: usize) {
        self.frame[y][x] = 1;
        self.refresh();
    }

    fn unlight(&mut self, x: usize, y: usize) {
        self.frame[y][x] = 0;
        self.refresh();
    }

    fn show_icon(&mut self, icon: Icon) {
        self.frame = icon.pattern();
        self.refresh();
    }
}

impl Speaker for Tile {
    fn play_tone(&mut self, note: Note, duration_ms: u32) {
        self.buzzer.play(&mut self.delay, note.hz(), duration_ms);
    }
}

impl DelayNs for Tile {
    fn delay_ns(&mut self, ns: u32) {
        self.delay.delay_ns(ns);
    }

    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
