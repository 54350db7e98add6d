use log::debug;

use crate::{FLAT_SIZE, PALETTE_SIZE};

/// Working memory for one build pass: a bitmap buffer reused for every flat
/// and a histogram over the palette. Both are freed when this drops, which
/// covers early returns on a failed read.
pub struct ScratchBuffers {
    pub source: Box<[u8; FLAT_SIZE]>,
    pub histogram: Box<[u16; PALETTE_SIZE]>,
}

impl ScratchBuffers {
    pub const SIZE: usize = FLAT_SIZE + PALETTE_SIZE * size_of::<u16>();

    pub fn acquire() -> Self {
        debug!("Acquired {} bytes of flat scratch", Self::SIZE);
        Self {
            source: Box::new([0; FLAT_SIZE]),
            histogram: Box::new([0; PALETTE_SIZE]),
        }
    }
}

impl Drop for ScratchBuffers {
    fn drop(&mut self) {
        debug!("Released flat scratch");
    }
}
