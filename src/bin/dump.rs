extern crate rom2402;

use rom2402::*;
use std::io::*;

const SIZE: usize = 256;

type MemoryRom = Rom2402<MemoryAdapter<SIZE>>;

fn main() {
    let mut rom = MemoryRom::new(MemoryAdapter::default());
    rom.writestr(0, 0x05, b"lorem ipsum dolor sit amet", 26).unwrap();
    for addr in 0..16 {
        rom.write(0, 0xf0 + addr, addr).unwrap();
    }

    let memory = rom.close().release();
    stdout().write_all(&memory[0]).ok();
}
