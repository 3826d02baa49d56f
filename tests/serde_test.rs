#[cfg(feature = "serde")]
mod objects {
    use rom2402::*;

    type Rom = Rom2402<MemoryAdapter<256>>;

    #[derive(serde::Serialize, serde::Deserialize, Debug, Eq, PartialEq)]
    enum SensorMode {
        LowPower,
        Normal,
    }

    #[derive(serde::Serialize, serde::Deserialize, Debug, Eq, PartialEq)]
    struct SensorConfig {
        offset: u32,
        prescaler: u8,
        mode: SensorMode,
    }

    #[test]
    fn test_store_load_object() {
        let mut rom = Rom::new(MemoryAdapter::default());
        let cfg = SensorConfig {
            offset: 100500,
            prescaler: 255,
            mode: SensorMode::LowPower,
        };

        let len = rom.store_object::<_, 32>(0, 0x06, &cfg).unwrap();
        assert!(len > 0 && len <= 32);

        let loaded: SensorConfig = rom.load_object::<_, 32>(0, 0x06).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn test_load_near_end() {
        let mut rom = Rom::new(MemoryAdapter::default());
        let cfg = SensorConfig {
            offset: 1,
            prescaler: 2,
            mode: SensorMode::Normal,
        };

        rom.store_object::<_, 16>(5, 0xf8, &cfg).unwrap();
        let loaded: SensorConfig = rom.load_object::<_, 64>(5, 0xf8).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn test_object_too_large() {
        let mut rom = Rom::new(MemoryAdapter::default());
        let res = rom.store_object::<_, 2>(0, 0, &[1u32, 2, 3, 4]);
        assert_eq!(res, Err(Error::SerializationError));
    }

    #[test]
    fn test_load_garbage() {
        let mut rom = Rom::new(MemoryAdapter::default());
        let res = rom.load_object::<SensorConfig, 16>(0, 0);
        assert_eq!(res, Err(Error::SerializationError));
    }

    #[test]
    fn test_load_past_capacity() {
        let cfg = Config::new().with_capacity(128);
        let mut rom = Rom2402::open(MemoryAdapter::<128>::default(), cfg);

        let res = rom.load_object::<u32, 8>(0, 0xf0);
        assert_eq!(res, Err(Error::InvalidAddress));
        assert_eq!(rom.read(0, 0xf0), Err(Error::InvalidAddress));

        let res = rom.load_object::<u32, 8>(0, 0x80);
        assert_eq!(res, Err(Error::InvalidAddress));
    }

    #[test]
    fn test_encoding_longer_than_count() {
        let mut rom = Rom::new(MemoryAdapter::default());
        let blob = [0x11u8; 300];

        let res = rom.store_object::<_, 512>(0, 0, &&blob[..]);
        assert_eq!(res, Err(Error::BufferTooSmall));
        assert_eq!(rom.read(0, 0).unwrap(), 0xff);
    }
}
