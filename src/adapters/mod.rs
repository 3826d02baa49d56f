use crate::DeviceSelect;

pub mod i2c;
pub mod ram;

pub use i2c::I2cAdapter;
pub use ram::MemoryAdapter;

/// One addressed transaction on the bus. The driver guarantees that `write`
/// never crosses a page boundary and that `read`/`write` ranges fit the chip.
pub trait RomAdapter {
    type Error;

    /// Sets the chip's address pointer and reads `buf.len()` bytes.
    fn read(&mut self, select: DeviceSelect, addr: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Page write starting at `addr`. The chip starts its internal write
    /// cycle once the transaction ends. `Rom2402` only passes data that
    /// stays within one page; what an adapter does with longer data is up
    /// to the adapter.
    fn write(&mut self, select: DeviceSelect, addr: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Succeeds once the chip acknowledges its select byte.
    fn poll(&mut self, select: DeviceSelect) -> Result<(), Self::Error>;

    fn delay_ms(&mut self, ms: u8);
}
