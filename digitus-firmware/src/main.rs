//! Digitus - LED Matrix Digit Counter Firmware
//!
//! Main firmware binary for RP2040 boards with two push buttons, an RGB
//! status LED and a 5x5 WS2812 matrix.
//!
//! # Execution model
//!
//! - Thread mode runs the control loop: blink the status LED, then
//!   service pending presses and redraw the digit. It never awaits.
//! - A high-priority interrupt executor runs one edge task per button.
//!   Those tasks only timestamp edges and set the debouncer latches, so
//!   they preempt the control loop without sharing anything else.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use embassy_executor::InterruptExecutor;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{AnyPin, Input, Pull};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::Pio;
use embassy_rp::Peri;
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use digitus_core::config::{load_board_config, STRIP_DATA_PIN};
use digitus_core::control::{ControlLoop, StatusIndicator};
use digitus_core::render::MatrixRenderer;
use digitus_core::{Button, InputDebouncer, MATRIX_CELLS};
use digitus_hal_rp2040::pins::{self, PinBank};
use digitus_hal_rp2040::{PioWs2812, StatusPin};

use crate::log::DefmtPressLog;

mod log;
mod tasks;

/// Embedded board configuration (compiled into firmware)
/// Edit board.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../board.toml");

// Config validation and the pin bank must agree on the matrix pin
const _: () = core::assert!(STRIP_DATA_PIN == pins::STRIP_DATA_PIN);

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

// Shared between the button tasks and the control loop
static DEBOUNCER: StaticCell<InputDebouncer> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

/// Main entry point
#[entry]
fn main() -> ! {
    info!("Digitus firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = match load_board_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => defmt::panic!("Invalid board.toml: {}", e),
    };
    info!("Board config loaded: {}", config);

    let (mut bank, rest) = PinBank::from_peripherals(p);

    // LED matrix on PIO0 SM0
    let Pio {
        mut common, sm0, ..
    } = Pio::new(rest.pio0, Irqs);
    let strip = PioWs2812::new(&mut common, sm0, rest.strip_pin, MATRIX_CELLS);
    let mut renderer = match MatrixRenderer::new(strip, Delay, config.matrix.latch_us) {
        Ok(renderer) => renderer,
        Err(e) => defmt::panic!("LED matrix: {}", e),
    };
    renderer.clear();
    info!("LED matrix ready on GPIO{}", STRIP_DATA_PIN);

    // Status LED
    let led = config.status_led;
    let indicator = StatusIndicator::new(
        StatusPin::new(claim(&mut bank, led.red_pin)),
        StatusPin::new(claim(&mut bank, led.green_pin)),
        StatusPin::new(claim(&mut bank, led.blue_pin)),
        Delay,
        led.blink_half_period_ms,
    );
    info!(
        "Status LED: red=GPIO{} green=GPIO{} blue=GPIO{}",
        led.red_pin, led.green_pin, led.blue_pin
    );

    // Buttons, active low
    let button_a = Input::new(claim(&mut bank, config.buttons.a_pin), Pull::Up);
    let button_b = Input::new(claim(&mut bank, config.buttons.b_pin), Pull::Up);
    info!(
        "Buttons: A=GPIO{} B=GPIO{} debounce={}ms",
        config.buttons.a_pin, config.buttons.b_pin, config.buttons.debounce_ms
    );

    let debouncer: &'static InputDebouncer =
        DEBOUNCER.init(InputDebouncer::new(config.buttons.debounce_ms));

    // Edge tasks preempt the control loop
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    spawner
        .spawn(tasks::button_task(Button::A, button_a, debouncer))
        .unwrap();
    spawner
        .spawn(tasks::button_task(Button::B, button_b, debouncer))
        .unwrap();
    info!("Button tasks started");

    info!("Entering control loop");
    ControlLoop::new(debouncer, renderer, indicator, DefmtPressLog).run()
}

/// Claim a configured pin or halt
fn claim(bank: &mut PinBank, pin: u8) -> Peri<'static, AnyPin> {
    match bank.take(pin) {
        Ok(pin) => pin,
        Err(e) => defmt::panic!("GPIO{}: {}", pin, e),
    }
}
