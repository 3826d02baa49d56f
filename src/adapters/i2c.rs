use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c;

use crate::adapters::*;
use crate::{Pages, DEFAULT_POLL_ATTEMPTS, DEFAULT_POLL_INTERVAL_MS, PAGE_SIZE};

#[derive(Debug)]
pub struct I2cAdapter<I2C, D> {
    i2c: I2C,
    delay: D,
}

impl<I2C, D, E> I2cAdapter<I2C, D>
where
    I2C: i2c::Write<Error = E> + i2c::WriteRead<Error = E> + i2c::Read<Error = E>,
    D: DelayMs<u8>,
{
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self { i2c, delay }
    }

    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    fn wait_ready(&mut self, select: DeviceSelect) -> Result<(), E> {
        let mut res = self.poll(select);
        for _ in 1..DEFAULT_POLL_ATTEMPTS {
            if res.is_ok() {
                break;
            }
            self.delay.delay_ms(DEFAULT_POLL_INTERVAL_MS);
            res = self.poll(select);
        }
        res
    }
}

impl<I2C, D, E> RomAdapter for I2cAdapter<I2C, D>
where
    I2C: i2c::Write<Error = E> + i2c::WriteRead<Error = E> + i2c::Read<Error = E>,
    D: DelayMs<u8>,
{
    type Error = E;

    fn read(&mut self, select: DeviceSelect, addr: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.write_read(select.address(), &[addr], buf)
    }

    fn write(&mut self, select: DeviceSelect, addr: u8, data: &[u8]) -> Result<(), Self::Error> {
        // Longer frames are cut at page boundaries, waiting out the write
        // cycle in between.
        let mut frame = [0; PAGE_SIZE + 1];
        for (idx, chunk) in Pages::new(addr as usize, data.len()).enumerate() {
            if idx > 0 {
                self.wait_ready(select)?;
            }
            frame[0] = chunk.addr as u8;
            frame[1..=chunk.len]
                .copy_from_slice(&data[chunk.offset..(chunk.offset + chunk.len)]);
            self.i2c.write(select.address(), &frame[..=chunk.len])?;
        }
        Ok(())
    }

    fn poll(&mut self, select: DeviceSelect) -> Result<(), Self::Error> {
        let mut scratch = [0];
        self.i2c.read(select.address(), &mut scratch)
    }

    fn delay_ms(&mut self, ms: u8) {
        self.delay.delay_ms(ms);
    }
}
