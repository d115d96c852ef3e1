/// A blocking, byte oriented output.
///
/// [`write_byte()`](SerialChannel::write_byte) waits until the transmitter can take the byte.
/// Bytes go out in the order they were written. There is no acknowledgement and no error: if the
/// transmitter never becomes ready the call never returns.
pub trait SerialChannel {
    fn write_byte(&mut self, byte: u8);

    /// Write every byte of `bytes` in order
    fn write_all(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write_byte(byte);
        }
    }
}

impl<S: SerialChannel + ?Sized> SerialChannel for &mut S {
    fn write_byte(&mut self, byte: u8) {
        (**self).write_byte(byte);
    }
}

#[cfg(test)]
impl SerialChannel for Vec<u8> {
    fn write_byte(&mut self, byte: u8) {
        self.push(byte);
    }
}
