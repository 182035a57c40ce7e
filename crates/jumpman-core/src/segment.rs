// crates/jumpman-core/src/segment.rs

/// A named, addressed byte range from the document being edited. Byte index
/// `i` corresponds to machine address `start_addr + i`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub name: String,
    pub start_addr: u16,
    pub data: Vec<u8>,
}

impl Segment {
    pub fn new(name: impl Into<String>, start_addr: u16, data: Vec<u8>) -> Self {
        Segment {
            name: name.into(),
            start_addr,
            data,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True when `addr` lies in `[start_addr, start_addr + len)`.
    pub fn contains_addr(&self, addr: u16) -> bool {
        addr >= self.start_addr && ((addr - self.start_addr) as usize) < self.data.len()
    }
}

/// Resolve a machine address against an ordered segment list: linear scan,
/// first match wins. Returns (segment index, byte offset inside it).
pub fn resolve_addr(segments: &[Segment], addr: u16) -> Option<(usize, usize)> {
    segments
        .iter()
        .position(|s| s.contains_addr(addr))
        .map(|i| (i, (addr - segments[i].start_addr) as usize))
}
