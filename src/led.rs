use stm32l0xx_hal::gpio::{gpioa::PA5, Analog, Output, PushPull};
use stm32l0xx_hal::prelude::*;

/// Green user LED on PA5, lit while the pin is high
pub struct Led {
    pin: PA5<Output<PushPull>>,
    on: bool,
}

impl Led {
    pub fn new(pin: PA5<Analog>) -> Self {
        let mut led = Self {
            pin: pin.into_push_pull_output(),
            on: false,
        };
        led.update();
        led
    }

    fn update(&mut self) {
        // Setting a GPIO output can't fail
        if self.on {
            self.pin.set_high().ok();
        } else {
            self.pin.set_low().ok();
        }
    }

    pub fn toggle(&mut self) {
        self.on = !self.on;
        self.update();
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
