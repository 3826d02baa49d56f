use crate::{Config, DeviceSelect, Error, Pages, RomAdapter};

pub struct Rom2402<A: RomAdapter> {
    adapter: A,
    config: Config,
}

impl<A, E> Rom2402<A>
where
    A: RomAdapter<Error = E>,
{
    pub fn new(adapter: A) -> Self {
        Self::open(adapter, Config::default())
    }

    pub fn open(adapter: A, config: Config) -> Self {
        Self { adapter, config }
    }

    pub fn close(self) -> A {
        self.adapter
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    pub fn read(&mut self, dev: u8, addr: u8) -> Result<u8, Error<E>> {
        let select = Self::select(dev)?;
        self.check_range(addr, 1)?;

        let mut buf = [0];
        trace!("read dev={} addr={:#04x}", dev, addr);
        self.adapter
            .read(select, addr, &mut buf)
            .map_err(Error::AdapterError)?;
        Ok(buf[0])
    }

    /// Sequential reads cross page boundaries on the chip, so unlike
    /// [`Rom2402::writestr`] this issues a single transaction.
    pub fn readstr(&mut self, dev: u8, addr: u8, buf: &mut [u8], n: u8) -> Result<(), Error<E>> {
        let select = Self::select(dev)?;
        if n == 0 {
            return Ok(());
        }
        if n as usize > buf.len() {
            return Err(Error::BufferTooSmall);
        }
        self.check_range(addr, n as usize)?;

        trace!("readstr dev={} addr={:#04x} n={}", dev, addr, n);
        self.adapter
            .read(select, addr, &mut buf[..n as usize])
            .map_err(Error::AdapterError)
    }

    pub fn write(&mut self, dev: u8, addr: u8, val: u8) -> Result<(), Error<E>> {
        let select = Self::select(dev)?;
        self.check_range(addr, 1)?;

        trace!("write dev={} addr={:#04x} val={:#04x}", dev, addr, val);
        self.adapter
            .write(select, addr, &[val])
            .map_err(Error::AdapterError)?;
        self.wait_cycle(select)
    }

    pub fn writestr(&mut self, dev: u8, addr: u8, data: &[u8], n: u8) -> Result<(), Error<E>> {
        let select = Self::select(dev)?;
        if n == 0 {
            return Ok(());
        }
        if n as usize > data.len() {
            return Err(Error::BufferTooSmall);
        }
        self.check_range(addr, n as usize)?;

        let data = &data[..n as usize];
        for chunk in Pages::new(addr as usize, data.len()) {
            debug!(
                "writestr dev={} page chunk addr={:#04x} len={}",
                dev, chunk.addr, chunk.len
            );
            self.adapter
                .write(
                    select,
                    chunk.addr as u8,
                    &data[chunk.offset..(chunk.offset + chunk.len)],
                )
                .map_err(Error::AdapterError)?;
            self.wait_cycle(select)?;
        }
        Ok(())
    }

    /// Checks that a chip answers to `dev`.
    pub fn probe(&mut self, dev: u8) -> Result<(), Error<E>> {
        let select = Self::select(dev)?;
        self.adapter
            .poll(select)
            .map_err(|_| Error::NotResponding)
    }

    /// Acknowledge polling: the chip ignores its select byte until the
    /// internal write cycle is over.
    pub fn wait_ready(&mut self, dev: u8) -> Result<(), Error<E>> {
        let select = Self::select(dev)?;
        self.wait_cycle(select)
    }

    fn wait_cycle(&mut self, select: DeviceSelect) -> Result<(), Error<E>> {
        let attempts = self.config.poll_attempts();
        for attempt in 0..attempts {
            if self.adapter.poll(select).is_ok() {
                if attempt > 0 {
                    debug!("chip {} ready after {} polls", select.chip_index(), attempt);
                }
                return Ok(());
            }
            if attempt + 1 < attempts {
                self.adapter.delay_ms(self.config.poll_interval_ms());
            }
        }
        warn!("chip {} write cycle timed out", select.chip_index());
        Err(Error::Timeout)
    }

    fn select(dev: u8) -> Result<DeviceSelect, Error<E>> {
        DeviceSelect::for_chip(dev).ok_or(Error::InvalidDevice)
    }

    pub(crate) fn check_range(&self, addr: u8, len: usize) -> Result<(), Error<E>> {
        if addr as usize + len > self.config.capacity() {
            return Err(Error::InvalidAddress);
        }
        Ok(())
    }
}
