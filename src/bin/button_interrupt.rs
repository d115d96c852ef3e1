//! Toggle the LED from the button's edge interrupt.
//!
//! The interrupt only records the raw edge; the LED is toggled once the debouncer has accepted
//! the press.

#![no_main]
#![no_std]

use defmt_rtt as _; // global logger
use panic_probe as _; // panic handler

#[rtic::app(
    device = stm32l0xx_hal::pac,
    dispatchers = [I2C1]
)]
mod app {
    use rtic_monotonics::systick::*;
    use stm32l0xx_hal::prelude::*;
    use stm32l0xx_hal::{exti::Exti, rcc, syscfg::SYSCFG};
    use stopwatch::{now, Button, Led, UserButton};
    use stopwatch_core::{Config, Debouncer, Edge};

    const CONFIG: Config = Config::DEFAULT;

    #[shared]
    struct Shared {
        button: UserButton,
        debouncer: Debouncer,
        led: Led,
    }

    #[local]
    struct Local {}

    #[init]
    fn init(cx: init::Context) -> (Shared, Local) {
        defmt::info!("init");

        let dp = cx.device;
        let mut rcc = dp.RCC.freeze(rcc::Config::hsi16());

        let systick_token = rtic_monotonics::create_systick_token!();
        Systick::start(cx.core.SYST, CONFIG.sysclk.0, systick_token);

        let gpioa = dp.GPIOA.split(&mut rcc);
        let gpioc = dp.GPIOC.split(&mut rcc);

        let mut exti = Exti::new(dp.EXTI);
        let mut syscfg = SYSCFG::new(dp.SYSCFG, &mut rcc);

        let button = gpioc.pc13.into_pull_up_input();
        button.enable_interrupt(&mut exti, &mut syscfg);

        (
            Shared {
                button,
                debouncer: Debouncer::new(CONFIG.debounce_window, UserButton::ACTIVE),
                led: Led::new(gpioa.pa5),
            },
            Local {},
        )
    }

    #[task(binds = EXTI4_15, priority = 2, shared = [button, debouncer, led])]
    fn button_edge(cx: button_edge::Context) {
        let at = now();

        (cx.shared.button, cx.shared.debouncer, cx.shared.led).lock(|button, debouncer, led| {
            button.unpend();
            if let Some(Edge::Pressed) = debouncer.update(button.level(), at) {
                led.toggle();
            }
        });

        settle::spawn().ok();
    }

    #[task(priority = 2, shared = [button, debouncer, led])]
    async fn settle(mut cx: settle::Context) {
        while let Some(remaining) = cx.shared.debouncer.lock(|debouncer| debouncer.remaining(now())) {
            Systick::delay(remaining.0.millis()).await;

            let at = now();
            (&mut cx.shared.button, &mut cx.shared.debouncer, &mut cx.shared.led).lock(
                |button, debouncer, led| {
                    if let Some(Edge::Pressed) = debouncer.update(button.level(), at) {
                        led.toggle();
                        defmt::debug!("pressed, LED {}", led.is_on());
                    }
                },
            );
        }
    }
}
