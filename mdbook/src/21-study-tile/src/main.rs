//! Study tile firmware for the micro:bit v2.
//!
//! Press A to power on. For 5 s after that, each extra A tap adds a study
//! block (up to 10). Each block counts down on the LED grid, one LED per tick;
//! B pauses and resumes, A powers off. If the room gets loud the countdown
//! holds behind an X until it quiets down. Blocks are separated by breaks and
//! the tile switches itself off after the last one.
//!
//! Interrupts only latch facts (button edges, the millisecond count, display
//! refresh). All session logic runs from the main loop.

#![no_main]
#![no_std]

mod tile;

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use cortex_m::asm;
use cortex_m_rt::entry;
use critical_section_lock_mut::LockMut;
use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};

use microbit::{
    display::nonblocking::Display,
    hal::{
        gpio, gpiote,
        pac::{self, interrupt, TIMER0, TIMER1},
        saadc::{Gain, Oversample, Reference, Resistor, Resolution, Saadc, SaadcConfig, Time},
        timer::Periodic,
        Timer,
    },
};

use study_tile_session::{
    config::{DEBOUNCE_MS, NAG_INTERVAL_MS, POLL_MS, TICK_MS},
    time::{Debouncer, Every},
    Clock, Session,
};

use tile::Tile;

// Peripherals shared with interrupt handlers
static GPIOTE_PERIPHERAL: LockMut<gpiote::Gpiote> = LockMut::new();
static DISPLAY: LockMut<Display<TIMER1>> = LockMut::new();
static MILLIS_TIMER: LockMut<Timer<TIMER0, Periodic>> = LockMut::new();

// Facts latched by interrupts for the main loop
static MILLIS: AtomicU32 = AtomicU32::new(0);
static BUTTON_A: AtomicBool = AtomicBool::new(false);
static BUTTON_B: AtomicBool = AtomicBool::new(false);

const MILLIS_TIMER_INTERVAL: u32 = 1_000; // 1 ms at 1 MHz

// GPIOTE interrupt for Button A or B presses
#[interrupt]
fn GPIOTE() {
    GPIOTE_PERIPHERAL.with_lock(|gpiote| {
        if gpiote.channel0().is_event_triggered() {
            BUTTON_A.store(true, Ordering::Release);
            gpiote.channel0().reset_events();
        }
        if gpiote.channel1().is_event_triggered() {
            BUTTON_B.store(true, Ordering::Release);
            gpiote.channel1().reset_events();
        }
    });
}

// TIMER0 interrupt for the millisecond clock
#[interrupt]
fn TIMER0() {
    MILLIS_TIMER.with_lock(|timer| timer.reset_event());
    MILLIS.fetch_add(1, Ordering::Relaxed);
}

// TIMER1 interrupt for LED rendering
#[interrupt]
fn TIMER1() {
    DISPLAY.with_lock(|display| display.handle_display_event());
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    let board = microbit::Board::take().unwrap();

    // Millisecond clock
    let mut millis_timer = Timer::periodic(board.TIMER0);
    millis_timer.enable_interrupt();
    millis_timer.start(MILLIS_TIMER_INTERVAL);
    MILLIS_TIMER.init(millis_timer);

    // Non-blocking display with TIMER1
    DISPLAY.init(Display::new(board.TIMER1, board.display_pins));

    // Buttons, high-to-low = press
    let button_a = board.buttons.button_a.into_floating_input();
    let button_b = board.buttons.button_b.into_floating_input();
    let gpiote = gpiote::Gpiote::new(board.GPIOTE);

    let channel0 = gpiote.channel0();
    channel0
        .input_pin(&button_a.degrade())
        .hi_to_lo()
        .enable_interrupt();
    channel0.reset_events();

    let channel1 = gpiote.channel1();
    channel1
        .input_pin(&button_b.degrade())
        .hi_to_lo()
        .enable_interrupt();
    channel1.reset_events();

    GPIOTE_PERIPHERAL.init(gpiote);

    // Microphone on P0.05 (AIN3), powered through mic_run
    let saadc = Saadc::new(
        board.ADC,
        SaadcConfig {
            resolution: Resolution::_12BIT,
            oversample: Oversample::BYPASS,
            reference: Reference::VDD1_4,
            gain: Gain::GAIN1_2,
            resistor: Resistor::BYPASS,
            time: Time::_10US,
        },
    );
    let _mic_run = board
        .microphone_pins
        .mic_run
        .into_push_pull_output(gpio::Level::High);
    let mic_in = board.microphone_pins.mic_in.into_floating_input();

    let speaker = board
        .speaker_pin
        .into_push_pull_output(gpio::Level::Low)
        .degrade();

    let mut tile = Tile::new(Timer::new(board.TIMER2), speaker, saadc, mic_in);

    // SAFETY: every handler's LockMut is initialised above.
    unsafe {
        pac::NVIC::unmask(pac::Interrupt::TIMER0);
        pac::NVIC::unmask(pac::Interrupt::TIMER1);
        pac::NVIC::unmask(pac::Interrupt::GPIOTE);
    }
    pac::NVIC::unpend(pac::Interrupt::GPIOTE);

    let mut session = Session::new();
    let now = tile.now_ms();
    let mut tick = Every::new(TICK_MS, now);
    let mut nag = Every::new(NAG_INTERVAL_MS, now);
    let mut poll = Every::new(POLL_MS, now);
    let mut debounce_a = Debouncer::new(DEBOUNCE_MS);
    let mut debounce_b = Debouncer::new(DEBOUNCE_MS);

    rprintln!("Study tile ready, press A to start");

    loop {
        let now = tile.now_ms();
        if BUTTON_A.swap(false, Ordering::AcqRel) && debounce_a.accept(now) {
            session.primary_button(&mut tile);
        }
        if BUTTON_B.swap(false, Ordering::AcqRel) && debounce_b.accept(now) {
            session.secondary_button(&mut tile);
        }

        let now = tile.now_ms();
        if tick.due(now) {
            session.tick(&mut tile);
        }
        if nag.due(now) {
            session.nag_tick(&mut tile);
        }
        if poll.due(now) {
            session.poll(&mut tile);
        }

        // Wait for Interrupt
        asm::wfi();
    }
}
