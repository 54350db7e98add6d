//! Build small WAD files in memory. Used by tests and benches so they don't
//! need a shipped IWAD.

pub struct WadBuilder {
    wad_type: [u8; 4],
    lumps: Vec<(String, Vec<u8>)>,
}

impl WadBuilder {
    pub fn iwad() -> Self {
        Self {
            wad_type: *b"IWAD",
            lumps: Vec::new(),
        }
    }

    pub fn pwad() -> Self {
        Self {
            wad_type: *b"PWAD",
            lumps: Vec::new(),
        }
    }

    /// Names longer than 8 bytes are cut
    pub fn lump(mut self, name: &str, data: Vec<u8>) -> Self {
        self.lumps.push((name.to_owned(), data));
        self
    }

    /// A zero sized lump such as `F_START`
    pub fn marker(self, name: &str) -> Self {
        self.lump(name, Vec::new())
    }

    /// Layout is header, lump data in order, then the directory
    pub fn build(self) -> Vec<u8> {
        let data_len: usize = self.lumps.iter().map(|(_, d)| d.len()).sum();
        let dir_offset = 12 + data_len;
        let mut out = Vec::with_capacity(dir_offset + self.lumps.len() * 16);

        out.extend_from_slice(&self.wad_type);
        out.extend_from_slice(&(self.lumps.len() as u32).to_le_bytes());
        out.extend_from_slice(&(dir_offset as u32).to_le_bytes());

        let mut offsets = Vec::with_capacity(self.lumps.len());
        for (_, data) in &self.lumps {
            offsets.push(out.len());
            out.extend_from_slice(data);
        }

        for ((name, data), offset) in self.lumps.iter().zip(offsets) {
            out.extend_from_slice(&(offset as u32).to_le_bytes());
            out.extend_from_slice(&(data.len() as u32).to_le_bytes());
            let mut n = [0u8; 8];
            for (dst, src) in n.iter_mut().zip(name.bytes()) {
                *dst = src;
            }
            out.extend_from_slice(&n);
        }
        out
    }
}
