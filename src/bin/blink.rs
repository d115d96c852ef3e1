//! Blink the LED from a periodic timer interrupt.
//!
//! TIM2 fires every 500 ms and the handler toggles the LED on every second interrupt, giving a
//! one second toggle period.

#![no_main]
#![no_std]

use defmt_rtt as _; // global logger
use panic_probe as _; // panic handler

#[rtic::app(device = stm32l0xx_hal::pac)]
mod app {
    use embedded_time::duration::Milliseconds;
    use stm32l0xx_hal::prelude::*;
    use stm32l0xx_hal::rcc;
    use stopwatch::{Led, TickTimer};
    use stopwatch_core::{Config, TickCalibration};

    /// Interrupts per LED toggle
    const TOGGLE_EVERY: u8 = 2;

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        timer: TickTimer,
        led: Led,
        countdown: u8,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local) {
        defmt::info!("init");

        let dp = cx.device;
        let mut rcc = dp.RCC.freeze(rcc::Config::hsi16());
        let gpioa = dp.GPIOA.split(&mut rcc);

        let config = Config {
            tick_interval: Milliseconds(500),
            ..Config::DEFAULT
        };
        let calibration: TickCalibration = defmt::unwrap!(config.tick_calibration());

        (
            Shared {},
            Local {
                timer: TickTimer::configure(dp.TIM2, &calibration),
                led: Led::new(gpioa.pa5),
                countdown: TOGGLE_EVERY,
            },
        )
    }

    #[task(binds = TIM2, local = [timer, led, countdown])]
    fn tick(cx: tick::Context) {
        if !cx.local.timer.isr_update() {
            return;
        }

        *cx.local.countdown -= 1;
        if *cx.local.countdown == 0 {
            cx.local.led.toggle();
            *cx.local.countdown = TOGGLE_EVERY;
        }
    }
}
