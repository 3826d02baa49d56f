use spin::Mutex;

use crate::{Config, Error, Rom2402, RomAdapter};

/// Bus handle that can be shared between execution contexts. Every
/// operation holds the bus for its full duration, so a multi-page write is
/// never interleaved with another caller's transactions.
pub struct SharedRom<A: RomAdapter> {
    rom: Mutex<Rom2402<A>>,
}

impl<A, E> SharedRom<A>
where
    A: RomAdapter<Error = E>,
{
    pub fn new(adapter: A) -> Self {
        Self::open(adapter, Config::default())
    }

    pub fn open(adapter: A, config: Config) -> Self {
        Self {
            rom: Mutex::new(Rom2402::open(adapter, config)),
        }
    }

    pub fn close(self) -> A {
        self.rom.into_inner().close()
    }

    pub fn device(&self, dev: u8) -> DeviceHandle<'_, A> {
        DeviceHandle { bus: self, dev }
    }

    /// Runs `tx` with exclusive access to the bus. `tx` must only use the
    /// `Rom2402` it is handed; calling back into `self` spins forever.
    pub fn transaction<RES, TX: FnOnce(&mut Rom2402<A>) -> RES>(&self, tx: TX) -> RES {
        tx(&mut self.rom.lock())
    }

    pub fn read(&self, dev: u8, addr: u8) -> Result<u8, Error<E>> {
        self.transaction(|rom| rom.read(dev, addr))
    }

    pub fn readstr(&self, dev: u8, addr: u8, buf: &mut [u8], n: u8) -> Result<(), Error<E>> {
        self.transaction(|rom| rom.readstr(dev, addr, buf, n))
    }

    pub fn write(&self, dev: u8, addr: u8, val: u8) -> Result<(), Error<E>> {
        self.transaction(|rom| rom.write(dev, addr, val))
    }

    pub fn writestr(&self, dev: u8, addr: u8, data: &[u8], n: u8) -> Result<(), Error<E>> {
        self.transaction(|rom| rom.writestr(dev, addr, data, n))
    }

    pub fn probe(&self, dev: u8) -> Result<(), Error<E>> {
        self.transaction(|rom| rom.probe(dev))
    }
}

/// [`SharedRom`] bound to one chip.
pub struct DeviceHandle<'a, A: RomAdapter> {
    bus: &'a SharedRom<A>,
    dev: u8,
}

impl<'a, A, E> DeviceHandle<'a, A>
where
    A: RomAdapter<Error = E>,
{
    pub fn dev(&self) -> u8 {
        self.dev
    }

    pub fn read(&self, addr: u8) -> Result<u8, Error<E>> {
        self.bus.read(self.dev, addr)
    }

    pub fn readstr(&self, addr: u8, buf: &mut [u8], n: u8) -> Result<(), Error<E>> {
        self.bus.readstr(self.dev, addr, buf, n)
    }

    pub fn write(&self, addr: u8, val: u8) -> Result<(), Error<E>> {
        self.bus.write(self.dev, addr, val)
    }

    pub fn writestr(&self, addr: u8, data: &[u8], n: u8) -> Result<(), Error<E>> {
        self.bus.writestr(self.dev, addr, data, n)
    }

    pub fn probe(&self) -> Result<(), Error<E>> {
        self.bus.probe(self.dev)
    }
}
