use nb::block;
use stm32l0xx_hal::gpio::gpioa::{PA2, PA3};
use stm32l0xx_hal::gpio::Analog;
use stm32l0xx_hal::pac::USART2;
use stm32l0xx_hal::prelude::*;
use stm32l0xx_hal::rcc::Rcc;
use stm32l0xx_hal::serial::{self, Tx};
use stopwatch_core::SerialChannel;

/// USART2 transmitter, 8N1
///
/// Only the transmit half is kept; nothing is ever read back.
pub struct Uart(Tx<USART2>);

impl Uart {
    pub fn configure(
        usart: USART2,
        tx: PA2<Analog>,
        rx: PA3<Analog>,
        baudrate: u32,
        rcc: &mut Rcc,
    ) -> Result<Self, serial::InvalidConfig> {
        let config = serial::Config::default().baudrate(baudrate.Bd());
        let (tx, _rx) = usart.usart(tx, rx, config, rcc)?.split();

        Ok(Self(tx))
    }
}

impl SerialChannel for Uart {
    /// Busy waits on TXE, then loads the data register.
    ///
    /// A transmit error drops the byte; there is no way to report it.
    fn write_byte(&mut self, byte: u8) {
        block!(self.0.write(byte)).ok();
    }
}
