extern crate rom2402;

use rom2402::*;

struct TraceMemoryAdapter {
    inner: MemoryAdapter<256>,
}

impl RomAdapter for TraceMemoryAdapter {
    type Error = ();

    fn read(&mut self, select: DeviceSelect, addr: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.inner.read(select, addr, buf)?;
        println!(
            "R: {:#04x} {:3} [0x{:02x}..0x{:03x}] {:02x?}",
            select.control_byte(true),
            buf.len(),
            addr,
            addr as usize + buf.len(),
            if buf.len() > 16 { &buf[..16] } else { buf }
        );
        Ok(())
    }

    fn write(&mut self, select: DeviceSelect, addr: u8, data: &[u8]) -> Result<(), Self::Error> {
        println!(
            "W: {:#04x} {:3} [0x{:02x}..0x{:03x}] {:02x?}",
            select.control_byte(false),
            data.len(),
            addr,
            addr as usize + data.len(),
            data
        );
        self.inner.write(select, addr, data)
    }

    fn poll(&mut self, select: DeviceSelect) -> Result<(), Self::Error> {
        let res = self.inner.poll(select);
        println!(
            "P: {:#04x} {}",
            select.control_byte(true),
            if res.is_ok() { "ack" } else { "nack" }
        );
        res
    }

    fn delay_ms(&mut self, ms: u8) {
        println!("D: {}ms", ms);
    }
}

fn main() {
    let adapter = TraceMemoryAdapter {
        inner: MemoryAdapter::default().with_write_cycle(2),
    };
    let mut rom = Rom2402::new(adapter);

    rom.writestr(1, 0x05, b"lorem-ipsum", 11).unwrap();

    let mut buf = [0; 11];
    rom.readstr(1, 0x05, &mut buf, 11).unwrap();
    println!("{}", String::from_utf8_lossy(&buf));
}
