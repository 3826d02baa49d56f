use crate::{Rom2402, RomAdapter};

/// Value a read yields when the chip does not drive the bus.
pub const SILENT_READ_FALLBACK: u8 = 0xff;

/// Driver front end without an error channel. Failed reads yield
/// [`SILENT_READ_FALLBACK`], failed writes are dropped.
pub struct Silent<A: RomAdapter> {
    rom: Rom2402<A>,
}

impl<A: RomAdapter> Silent<A> {
    pub fn new(rom: Rom2402<A>) -> Self {
        Self { rom }
    }

    pub fn release(self) -> Rom2402<A> {
        self.rom
    }

    pub fn read(&mut self, dev: u8, addr: u8) -> u8 {
        self.rom.read(dev, addr).unwrap_or_else(|_| {
            warn!("silent read dev={} addr={:#04x} failed", dev, addr);
            SILENT_READ_FALLBACK
        })
    }

    /// On failure `buf[..n]` is filled with [`SILENT_READ_FALLBACK`].
    pub fn readstr(&mut self, dev: u8, addr: u8, buf: &mut [u8], n: u8) {
        if self.rom.readstr(dev, addr, buf, n).is_err() {
            warn!("silent readstr dev={} addr={:#04x} n={} failed", dev, addr, n);
            let len = usize::min(n as usize, buf.len());
            buf[..len].fill(SILENT_READ_FALLBACK);
        }
    }

    pub fn write(&mut self, dev: u8, addr: u8, val: u8) {
        if self.rom.write(dev, addr, val).is_err() {
            warn!("silent write dev={} addr={:#04x} failed", dev, addr);
        }
    }

    pub fn writestr(&mut self, dev: u8, addr: u8, data: &[u8], n: u8) {
        if self.rom.writestr(dev, addr, data, n).is_err() {
            warn!("silent writestr dev={} addr={:#04x} n={} failed", dev, addr, n);
        }
    }
}
