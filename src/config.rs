use crate::CAPACITY;

/// Write cycle of a 24C02 is specified at 5ms worst case.
pub const DEFAULT_POLL_ATTEMPTS: u8 = 10;
pub const DEFAULT_POLL_INTERVAL_MS: u8 = 1;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Config {
    capacity: usize,
    poll_attempts: u8,
    poll_interval_ms: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub const fn new() -> Self {
        Self {
            capacity: CAPACITY,
            poll_attempts: DEFAULT_POLL_ATTEMPTS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }

    /// Smaller parts of the family (24C01) expose 128 bytes. Values above
    /// [`CAPACITY`] are clamped.
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = if capacity > CAPACITY {
            CAPACITY
        } else {
            capacity
        };
        self
    }

    /// At least one poll is always made after a write.
    pub const fn with_poll_attempts(mut self, attempts: u8) -> Self {
        self.poll_attempts = if attempts == 0 { 1 } else { attempts };
        self
    }

    pub const fn with_poll_interval_ms(mut self, interval_ms: u8) -> Self {
        self.poll_interval_ms = interval_ms;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn poll_attempts(&self) -> u8 {
        self.poll_attempts
    }

    pub fn poll_interval_ms(&self) -> u8 {
        self.poll_interval_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_is_clamped() {
        let cfg = Config::new().with_capacity(4096);
        assert_eq!(cfg.capacity(), CAPACITY);

        let cfg = Config::new().with_capacity(128);
        assert_eq!(cfg.capacity(), 128);
    }

    #[test]
    fn test_poll_attempts_never_zero() {
        assert_eq!(Config::new().with_poll_attempts(0).poll_attempts(), 1);
        assert_eq!(Config::new().with_poll_attempts(4).poll_attempts(), 4);
    }
}
