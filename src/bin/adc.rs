//! Sample two analog inputs in turn from a timer interrupt.
//!
//! Every 100 ms TIM2 fires and the handler converts the next channel of the rotation (PA0, then
//! PA1), keeping the latest reading of each. Once both channels have a reading they are logged in
//! millivolts.

#![no_main]
#![no_std]

use defmt_rtt as _; // global logger
use panic_probe as _; // panic handler

#[rtic::app(device = stm32l0xx_hal::pac)]
mod app {
    use embedded_time::duration::Milliseconds;
    use nb::block;
    use stm32l0xx_hal::adc::{Adc, Ready};
    use stm32l0xx_hal::gpio::{gpioa::PA0, gpioa::PA1, Analog};
    use stm32l0xx_hal::prelude::*;
    use stm32l0xx_hal::rcc;
    use stopwatch::TickTimer;
    use stopwatch_core::sampler::{to_millivolts, RoundRobin};
    use stopwatch_core::Config;

    /// Analog supply, assumed from the board's 3V3 regulator
    const VDDA_MV: u16 = 3300;
    /// Default ADC resolution
    const RESOLUTION_BITS: u8 = 12;

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        timer: TickTimer,
        adc: Adc<Ready>,
        a0: PA0<Analog>,
        a1: PA1<Analog>,
        samples: RoundRobin<2>,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local) {
        defmt::info!("init");

        let dp = cx.device;
        let mut rcc = dp.RCC.freeze(rcc::Config::hsi16());
        let gpioa = dp.GPIOA.split(&mut rcc);

        let config = Config {
            tick_interval: Milliseconds(100),
            ..Config::DEFAULT
        };
        let calibration = defmt::unwrap!(config.tick_calibration());

        (
            Shared {},
            Local {
                timer: TickTimer::configure(dp.TIM2, &calibration),
                adc: dp.ADC.constrain(&mut rcc),
                a0: gpioa.pa0,
                a1: gpioa.pa1,
                samples: RoundRobin::new(),
            },
        )
    }

    #[task(binds = TIM2, local = [timer, adc, a0, a1, samples])]
    fn sample(cx: sample::Context) {
        if !cx.local.timer.isr_update() {
            return;
        }

        let adc = cx.local.adc;
        let samples = cx.local.samples;

        let raw: u16 = match samples.channel() {
            0 => block!(adc.read(cx.local.a0)),
            _ => block!(adc.read(cx.local.a1)),
        }
        .unwrap_or(0);

        if samples.record(raw) == 1 && samples.is_complete() {
            let mv = |channel| {
                samples
                    .latest(channel)
                    .map(|raw| to_millivolts(raw, VDDA_MV, RESOLUTION_BITS))
                    .unwrap_or(0)
            };
            defmt::info!("A0 {} mV, A1 {} mV", mv(0), mv(1));
        }
    }
}
