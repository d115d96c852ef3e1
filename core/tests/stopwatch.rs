//! End to end: ticks and button edges in, report bytes out.
//!
//! Mirrors the firmware's wiring: the tick advances the time keeper, the button edges go through
//! the debouncer, an accepted press snapshots the time into a queued report request and a
//! separate loop drains the queue and writes the reports.

use embedded_time::duration::Milliseconds;
use heapless::spsc::Queue;
use stopwatch_core::{
    Config, Debouncer, Edge, Level, ReportRequest, Reporter, SerialChannel, Time, TimeKeeper,
};

#[derive(Default)]
struct Capture(Vec<u8>);

impl SerialChannel for Capture {
    fn write_byte(&mut self, byte: u8) {
        self.0.push(byte);
    }
}

struct Bench {
    clock: TimeKeeper,
    button: Debouncer,
    requests: Queue<ReportRequest, 4>,
    reporter: Reporter<Capture>,
    now: u32,
}

impl Bench {
    fn new() -> Self {
        Self {
            clock: TimeKeeper::new(),
            button: Debouncer::new(Config::DEFAULT.debounce_window, Level::Low),
            requests: Queue::new(),
            reporter: Reporter::new(Capture::default()),
            now: 0,
        }
    }

    fn ticks(&mut self, n: u32) {
        for _ in 0..n {
            self.clock.advance();
        }
    }

    /// Raw edge at `now + after` ms, followed by the deadline poll if one is pending
    fn edge(&mut self, level: Level, after: u32) {
        self.now += after;
        self.feed(level);
    }

    fn settle(&mut self) {
        if let Some(deadline) = self.button.deadline() {
            self.now = deadline.0;
            let level = if self.button.is_pressed() {
                Level::High
            } else {
                Level::Low
            };
            self.feed(level);
        }
    }

    fn feed(&mut self, level: Level) {
        if let Some(Edge::Pressed) = self.button.update(level, Milliseconds(self.now)) {
            let request = ReportRequest {
                time: self.clock.snapshot(),
                pressed_at: Milliseconds(self.now),
            };
            self.requests.enqueue(request).unwrap();
        }
    }

    fn press(&mut self) {
        self.edge(Level::Low, 1);
        self.settle();
        self.edge(Level::High, 100);
        self.settle();
    }

    fn drain(&mut self) -> String {
        while let Some(request) = self.requests.dequeue() {
            self.reporter.emit(&request.time);
        }
        let out = String::from_utf8(self.reporter.channel().0.clone()).unwrap();
        self.reporter = Reporter::new(Capture::default());
        out
    }
}

#[test]
fn hour_minute_second() {
    let mut bench = Bench::new();
    bench.ticks(3661);
    bench.press();
    assert_eq!(bench.drain(), "0_1:1:1");
}

#[test]
fn carry_into_minutes_between_reports() {
    let mut bench = Bench::new();
    bench.ticks(59);
    bench.press();
    assert_eq!(bench.drain(), "0_0:0:59");

    bench.ticks(1);
    bench.press();
    assert_eq!(bench.drain(), "0_0:1:0");
}

#[test]
fn bouncy_press_reports_once() {
    let mut bench = Bench::new();
    bench.ticks(5);

    bench.edge(Level::Low, 1);
    bench.edge(Level::High, 2);
    bench.edge(Level::Low, 3);
    bench.edge(Level::High, 1);
    bench.edge(Level::Low, 4);
    bench.settle();

    assert_eq!(bench.drain(), "0_0:0:5");
}

#[test]
fn separate_presses_report_separately() {
    let mut bench = Bench::new();
    bench.press();
    bench.ticks(1);
    bench.press();
    assert_eq!(bench.drain(), "0_0:0:00_0:0:1");
}

#[test]
fn queued_press_keeps_its_own_time() {
    let mut bench = Bench::new();
    bench.ticks(9);
    bench.press();

    // Ticks land while the first request is still waiting to be transmitted
    bench.ticks(2);
    bench.press();
    bench.ticks(1);

    assert_eq!(bench.drain(), "0_0:0:90_0:0:11");
}

#[test]
fn terminator_is_appended() {
    let mut reporter = Reporter::new(Capture::default()).with_terminator(Config::DEFAULT.line_terminator);
    let mut clock = TimeKeeper::new();
    clock.advance();
    reporter.emit(&clock.snapshot());
    assert_eq!(reporter.into_inner().0, b"0_0:0:1\r\n");
}

#[test]
fn full_queue_drops_requests() {
    // A heapless spsc queue of 4 holds 3 requests
    let mut bench = Bench::new();
    for _ in 0..3 {
        bench.press();
    }
    assert!(bench
        .requests
        .enqueue(ReportRequest {
            time: Time::ZERO,
            pressed_at: Milliseconds(0)
        })
        .is_err());
    assert_eq!(bench.drain(), "0_0:0:00_0:0:00_0:0:0");
}
