//! Stopwatch: keep track of elapsed time and write it over the UART each time the button is
//! pressed.
//!
//! | task          | priority | does                                              |
//! |---------------|----------|---------------------------------------------------|
//! | `tick`        | 3        | advance the time keeper by one second             |
//! | `button_edge` | 2        | feed the raw button level to the debouncer        |
//! | `settle`      | 2        | wait out the debounce window, queue report requests |
//! | `idle`        | 0        | format and transmit queued reports                |
//!
//! A press snapshots the time keeper as it is accepted; the snapshot travels in the queued
//! request.
//!
//! The blocking transmission happens in idle so it never holds up a tick.

#![no_main]
#![no_std]

use defmt_rtt as _; // global logger
use panic_probe as _; // panic handler

#[rtic::app(
    device = stm32l0xx_hal::pac,
    dispatchers = [I2C1]
)]
mod app {
    use embedded_time::duration::Milliseconds;
    use heapless::spsc::{Consumer, Producer, Queue};
    use rtic::Mutex;
    use rtic_monotonics::systick::*;
    use stm32l0xx_hal::prelude::*;
    use stm32l0xx_hal::{exti::Exti, rcc, syscfg::SYSCFG};
    use stopwatch::{now, Button, TickTimer, Uart, UserButton};
    use stopwatch_core::{Config, Debouncer, Edge, ReportRequest, Reporter, TimeKeeper};

    const CONFIG: Config = Config::DEFAULT;

    #[shared]
    struct Shared {
        clock: TimeKeeper,
        button: UserButton,
        debouncer: Debouncer,
        requests: Producer<'static, ReportRequest, 4>,
    }

    #[local]
    struct Local {
        timer: TickTimer,
        pending: Consumer<'static, ReportRequest, 4>,
        reporter: Reporter<Uart>,
    }

    #[init(local = [queue: Queue<ReportRequest, 4> = Queue::new()])]
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

        let uart = defmt::unwrap!(
            Uart::configure(dp.USART2, gpioa.pa2, gpioa.pa3, CONFIG.baudrate, &mut rcc).ok()
        );
        let reporter = Reporter::new(uart).with_terminator(CONFIG.line_terminator);

        let calibration = defmt::unwrap!(CONFIG.tick_calibration());
        defmt::info!(
            "tick every {} us (PSC {}, ARR {})",
            calibration.interval().0,
            calibration.prescaler(),
            calibration.auto_reload()
        );
        let timer = TickTimer::configure(dp.TIM2, &calibration);

        let (requests, pending) = cx.local.queue.split();

        (
            Shared {
                clock: TimeKeeper::new(),
                button,
                debouncer: Debouncer::new(CONFIG.debounce_window, UserButton::ACTIVE),
                requests,
            },
            Local {
                timer,
                pending,
                reporter,
            },
        )
    }

    #[idle(local = [pending, reporter])]
    fn idle(cx: idle::Context) -> ! {
        defmt::info!("idle");

        loop {
            // Spin rather than WFI: a request queued between the dequeue and the WFI would sit
            // there until the next tick woke the core.
            let Some(request) = cx.local.pending.dequeue() else {
                continue;
            };

            defmt::debug!("report {} for press at {} ms", request.time, request.pressed_at.0);

            cx.local.reporter.emit(&request.time);
        }
    }

    #[task(binds = TIM2, priority = 3, shared = [clock], local = [timer])]
    fn tick(mut cx: tick::Context) {
        if cx.local.timer.isr_update() {
            cx.shared.clock.lock(|clock| clock.advance());
        }
    }

    #[task(binds = EXTI4_15, priority = 2, shared = [clock, button, debouncer, requests])]
    fn button_edge(cx: button_edge::Context) {
        let at = now();

        let edge = (cx.shared.button, cx.shared.debouncer).lock(|button, debouncer| {
            button.unpend();
            debouncer.update(button.level(), at)
        });
        request_report(edge, at, cx.shared.clock, cx.shared.requests);

        // Fails while a settle task is already waiting; it will see the new deadline
        settle::spawn().ok();
    }

    #[task(priority = 2, shared = [clock, button, debouncer, requests])]
    async fn settle(mut cx: settle::Context) {
        while let Some(remaining) = cx.shared.debouncer.lock(|debouncer| debouncer.remaining(now())) {
            Systick::delay(remaining.0.millis()).await;

            let at = now();
            let edge = (&mut cx.shared.button, &mut cx.shared.debouncer)
                .lock(|button, debouncer| debouncer.update(button.level(), at));
            request_report(edge, at, &mut cx.shared.clock, &mut cx.shared.requests);
        }
    }

    fn request_report(
        edge: Option<Edge>,
        at: Milliseconds<u32>,
        mut clock: impl Mutex<T = TimeKeeper>,
        mut requests: impl Mutex<T = Producer<'static, ReportRequest, 4>>,
    ) {
        match edge {
            Some(Edge::Pressed) => {
                let request = ReportRequest {
                    time: clock.lock(|clock| clock.snapshot()),
                    pressed_at: at,
                };
                if requests.lock(|requests| requests.enqueue(request)).is_err() {
                    defmt::warn!("report queue full, press at {} ms dropped", at.0);
                }
            }
            Some(Edge::Released) => defmt::trace!("released at {} ms", at.0),
            None => {}
        }
    }
}
