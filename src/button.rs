use stm32l0xx_hal::exti::{Exti, ExtiLine, GpioLine, TriggerEdge};
use stm32l0xx_hal::gpio::{gpioc::PC13, Input, PullUp};
use stm32l0xx_hal::prelude::*;
use stm32l0xx_hal::syscfg::SYSCFG;
use stopwatch_core::Level;

/// Blue user button, pulled up. Pressing it pulls the line low.
pub type UserButton = PC13<Input<PullUp>>;

pub trait Button {
    /// Level of the line while the button is held down
    const ACTIVE: Level;

    fn gpio_line(&self) -> GpioLine;

    /// Enable interrupt for button
    ///
    /// Both edges are listened for so the debouncer sees the release as well as the press. The
    /// user button is on interrupt `EXTI4_15`.
    fn enable_interrupt(&self, exti: &mut Exti, syscfg: &mut SYSCFG);

    /// Clear the pending interrupt flag
    fn unpend(&self) {
        Exti::unpend(self.gpio_line());
    }

    /// Raw, undebounced level of the line
    fn level(&self) -> Level;

    /// Whether the raw line is at the pressed level
    fn is_held(&self) -> bool {
        self.level() == Self::ACTIVE
    }
}

macro_rules! buttons {
    ( $( $Btn:ident => $active:expr ),* ) => {
        $(
            impl Button for $Btn {
                const ACTIVE: Level = $active;

                fn gpio_line(&self) -> GpioLine {
                    defmt::unwrap!(GpioLine::from_raw_line(self.pin_number()))
                }

                fn enable_interrupt(&self, exti: &mut Exti, syscfg: &mut SYSCFG) {
                    exti.listen_gpio(syscfg, self.port(), self.gpio_line(), TriggerEdge::Both);
                }

                fn level(&self) -> Level {
                    Level::from_high(self.is_high().unwrap_or(false))
                }
            }
        )*
    }
}

buttons! {UserButton => Level::Low}
