use crate::PAGE_SIZE;

/// Page-aligned piece of a larger transfer. `offset` is relative to the start
/// of the caller's buffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub addr: usize,
    pub offset: usize,
    pub len: usize,
}

/// Splits `addr..addr + len` so that no chunk crosses a page boundary.
#[derive(Debug, Clone)]
pub struct Pages {
    addr: usize,
    offset: usize,
    remaining: usize,
}

impl Pages {
    pub fn new(addr: usize, len: usize) -> Self {
        Self {
            addr,
            offset: 0,
            remaining: len,
        }
    }
}

impl Iterator for Pages {
    type Item = Chunk;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let page_offset = self.addr % PAGE_SIZE;
        let len = usize::min(PAGE_SIZE - page_offset, self.remaining);
        let chunk = Chunk {
            addr: self.addr,
            offset: self.offset,
            len,
        };

        self.addr += len;
        self.offset += len;
        self.remaining -= len;
        Some(chunk)
    }
}
