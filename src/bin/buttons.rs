//! Poll the button and toggle the LED each time it is released.
//!
//! No interrupts and no debouncing: waiting for the release swallows the bounce of the press.

#![no_main]
#![no_std]

use defmt_rtt as _; // global logger
use panic_probe as _; // panic handler

#[rtic::app(device = stm32l0xx_hal::pac)]
mod app {
    use stm32l0xx_hal::prelude::*;
    use stm32l0xx_hal::rcc;
    use stopwatch::{Button, Led, UserButton};

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        button: UserButton,
        led: Led,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local) {
        defmt::info!("init");

        let dp = cx.device;
        let mut rcc = dp.RCC.freeze(rcc::Config::hsi16());

        let gpioa = dp.GPIOA.split(&mut rcc);
        let gpioc = dp.GPIOC.split(&mut rcc);

        (
            Shared {},
            Local {
                button: gpioc.pc13.into_pull_up_input(),
                led: Led::new(gpioa.pa5),
            },
        )
    }

    #[idle(local = [button, led])]
    fn idle(cx: idle::Context) -> ! {
        let button = cx.local.button;
        let led = cx.local.led;

        loop {
            if button.is_held() {
                while button.is_held() {}
                led.toggle();
            }
        }
    }
}
