//! Write "Hello World" over USART2 once at startup.

#![no_main]
#![no_std]

use defmt_rtt as _; // global logger
use panic_probe as _; // panic handler

#[rtic::app(device = stm32l0xx_hal::pac)]
mod app {
    use stm32l0xx_hal::prelude::*;
    use stm32l0xx_hal::rcc;
    use stopwatch::Uart;
    use stopwatch_core::{Config, SerialChannel};

    const GREETING: &[u8] = b"Hello World\n\r";

    #[shared]
    struct Shared {}

    #[local]
    struct Local {}

    #[init]
    fn init(cx: init::Context) -> (Shared, Local) {
        defmt::info!("init");

        let dp = cx.device;
        let mut rcc = dp.RCC.freeze(rcc::Config::hsi16());
        let gpioa = dp.GPIOA.split(&mut rcc);

        let mut uart = defmt::unwrap!(Uart::configure(
            dp.USART2,
            gpioa.pa2,
            gpioa.pa3,
            Config::DEFAULT.baudrate,
            &mut rcc
        )
        .ok());

        uart.write_all(GREETING);
        defmt::info!("sent {} bytes", GREETING.len());

        (Shared {}, Local {})
    }
}
