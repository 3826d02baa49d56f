use crate::adapters::*;
use crate::{MAX_DEVICES, PAGE_SIZE};

const CHIPS: usize = MAX_DEVICES as usize;

/// Simulated bus with up to eight chips of `SIZE` bytes each.
///
/// Writes behave like the real part: bytes past the end of a page wrap to
/// the start of that page, and a chip ignores its select byte for
/// `write_cycle` polls after every write.
pub struct MemoryAdapter<const SIZE: usize> {
    pub memory: [[u8; SIZE]; CHIPS],
    present: u8,
    write_cycle: usize,
    busy: [usize; CHIPS],
}

impl<const SIZE: usize> Default for MemoryAdapter<SIZE> {
    fn default() -> Self {
        Self::new([[0xff; SIZE]; CHIPS])
    }
}

impl<const SIZE: usize> MemoryAdapter<SIZE> {
    pub fn new(memory: [[u8; SIZE]; CHIPS]) -> Self {
        Self {
            memory,
            present: 0xff,
            write_cycle: 0,
            busy: [0; CHIPS],
        }
    }

    /// Bit `n` of `mask` marks chip `n` as populated.
    pub fn with_present(mut self, mask: u8) -> Self {
        self.present = mask;
        self
    }

    pub fn with_write_cycle(mut self, polls: usize) -> Self {
        self.write_cycle = polls;
        self
    }

    pub fn chip(&self, chip: u8) -> &[u8; SIZE] {
        &self.memory[chip as usize]
    }

    pub fn release(self) -> [[u8; SIZE]; CHIPS] {
        self.memory
    }

    fn responds(&self, chip: usize) -> bool {
        self.present & (1 << chip) != 0 && self.busy[chip] == 0
    }
}

impl<const SIZE: usize> RomAdapter for MemoryAdapter<SIZE> {
    type Error = ();

    fn read(&mut self, select: DeviceSelect, addr: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        let chip = select.chip_index() as usize;
        if !self.responds(chip) {
            return Err(());
        }

        // Sequential reads roll over at the end of the array.
        let memory = &self.memory[chip];
        for (idx, byte) in buf.iter_mut().enumerate() {
            *byte = memory[(addr as usize + idx) % SIZE];
        }
        Ok(())
    }

    fn write(&mut self, select: DeviceSelect, addr: u8, data: &[u8]) -> Result<(), Self::Error> {
        let chip = select.chip_index() as usize;
        if !self.responds(chip) || addr as usize >= SIZE {
            return Err(());
        }

        let page_start = addr as usize / PAGE_SIZE * PAGE_SIZE;
        let memory = &mut self.memory[chip];
        for (idx, byte) in data.iter().enumerate() {
            let page_offset = (addr as usize + idx) % PAGE_SIZE;
            memory[(page_start + page_offset) % SIZE] = *byte;
        }
        self.busy[chip] = self.write_cycle;
        Ok(())
    }

    fn poll(&mut self, select: DeviceSelect) -> Result<(), Self::Error> {
        let chip = select.chip_index() as usize;
        if self.present & (1 << chip) == 0 {
            return Err(());
        }
        if self.busy[chip] > 0 {
            self.busy[chip] -= 1;
            return Err(());
        }
        Ok(())
    }

    fn delay_ms(&mut self, _ms: u8) {}
}
