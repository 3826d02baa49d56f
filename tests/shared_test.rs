use std::thread;

use rom2402::*;

const ROUNDS: usize = 200;
const LEN: u8 = 24;

type Bus = SharedRom<MemoryAdapter<256>>;

#[test]
fn test_shared_round_trip() {
    let bus = Bus::new(MemoryAdapter::default());
    let dev = bus.device(3);

    dev.write(0x20, 0x7e).unwrap();
    assert_eq!(dev.read(0x20).unwrap(), 0x7e);
    assert_eq!(bus.read(3, 0x20).unwrap(), 0x7e);
    assert_eq!(dev.dev(), 3);
    dev.probe().unwrap();
}

#[test]
fn test_device_handle_strings() {
    let bus = Bus::new(MemoryAdapter::default());
    let dev = bus.device(6);

    dev.writestr(0x0c, b"consectetur", 11).unwrap();

    let mut scratch = [0; 11];
    dev.readstr(0x0c, &mut scratch, 11).unwrap();
    assert_eq!(&scratch, b"consectetur");

    let mut other = [0; 11];
    bus.readstr(5, 0x0c, &mut other, 11).unwrap();
    assert_eq!(other, [0xff; 11]);
}

#[test]
fn test_concurrent_writers_never_interleave() {
    let bus = Bus::new(MemoryAdapter::default());
    bus.writestr(0, 0x03, &[0; LEN as usize], LEN).unwrap();

    thread::scope(|scope| {
        for pattern in [0xaa, 0x55] {
            let bus = &bus;
            scope.spawn(move || {
                let data = [pattern; LEN as usize];
                let mut scratch = [0; LEN as usize];
                for _ in 0..ROUNDS {
                    bus.writestr(0, 0x03, &data, LEN).unwrap();
                    bus.readstr(0, 0x03, &mut scratch, LEN).unwrap();
                    let first = scratch[0];
                    assert!(scratch.iter().all(|b| *b == first), "{:02x?}", scratch);
                }
            });
        }
    });

    let memory = bus.close().release();
    let first = memory[0][0x03];
    assert!(first == 0xaa || first == 0x55);
    assert!(memory[0][0x03..0x1b].iter().all(|b| *b == first));
}

#[test]
fn test_concurrent_devices_isolated() {
    let bus = Bus::new(MemoryAdapter::default());

    thread::scope(|scope| {
        for dev in 0..4u8 {
            let handle = bus.device(dev);
            scope.spawn(move || {
                for addr in 0..=255u8 {
                    handle.write(addr, addr ^ dev).unwrap();
                }
            });
        }
    });

    for dev in 0..4u8 {
        let mut scratch = [0; 255];
        bus.readstr(dev, 0, &mut scratch, 255).unwrap();
        for (addr, byte) in scratch.iter().enumerate() {
            assert_eq!(*byte, addr as u8 ^ dev);
        }
    }
    assert_eq!(bus.read(4, 0x10).unwrap(), 0xff);
}

#[test]
fn test_transaction() {
    let bus = Bus::new(MemoryAdapter::default());

    let prev = bus.transaction(|rom| {
        let prev = rom.read(1, 0)?;
        rom.write(1, 0, prev.wrapping_add(1))?;
        Ok::<_, Error<()>>(prev)
    });

    assert_eq!(prev, Ok(0xff));
    assert_eq!(bus.read(1, 0).unwrap(), 0x00);
}
