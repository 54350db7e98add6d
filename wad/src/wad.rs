use crate::error::WadError;
use log::{debug, info, warn};
use std::fs::File;
use std::io::prelude::*;
use std::path::{Path, PathBuf};
use std::fmt;

const HEADER_SIZE: usize = 12;
const DIR_ENTRY_SIZE: usize = 16;

pub(crate) fn read_4_bytes(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

/// Header which tells us the WAD type and where the data is
///
/// The header structure in the WAD is as follows:
///
/// | Field Size | Data Type    | Content                                              |
/// |------------|--------------|------------------------------------------------------|
/// | 0x00-0x03  | 4 ASCII char | *Must* be an ASCII string (either "IWAD" or "PWAD")  |
/// | 0x04-0x07  | unsigned int | The number entries in the directory                  |
/// | 0x08-0x0b  | unsigned int | Offset in bytes to the directory in the WAD file     |
struct WadHeader {
    /// Will be either `IWAD` for game, or `PWAD` for patch
    wad_type: [u8; 4],
    /// The count of "lumps" of data
    dir_count: usize,
    /// Offset in bytes that the directory starts at
    dir_offset: usize,
}

impl WadHeader {
    fn read(data: &[u8]) -> Result<Self, WadError> {
        if data.len() < HEADER_SIZE {
            return Err(WadError::Truncated {
                wanted: HEADER_SIZE,
                len: data.len(),
            });
        }
        let mut wad_type = [0u8; 4];
        wad_type.copy_from_slice(&data[..4]);
        if &wad_type != b"IWAD" && &wad_type != b"PWAD" {
            return Err(WadError::BadMagic(wad_type));
        }
        Ok(WadHeader {
            wad_type,
            dir_count: read_4_bytes(data, 4) as usize,
            dir_offset: read_4_bytes(data, 8) as usize,
        })
    }
}

impl fmt::Debug for WadHeader {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "\nWadHeader {{\n  wad_type: {},\n  dir_count: {},\n  dir_offset: {},\n}}",
            String::from_utf8_lossy(&self.wad_type),
            self.dir_count,
            self.dir_offset
        )
    }
}

/// Contains the details for a lump of data: which loaded file it lives in,
/// where it starts, the size of it, and the name
///
/// The directory structure in the WAD is as follows:
///
/// | Field Size | Data Type    | Content                                                    |
/// |------------|--------------|------------------------------------------------------------|
/// | 0x00-0x03  | unsigned int | Offset value to the start of the lump data in the WAD file |
/// | 0x04-0x07  | unsigned int | The size of the lump in bytes                              |
/// | 0x08-0x0f  | 8 ASCII char | ASCII holding the name of the lump                         |
#[derive(Clone)]
pub struct LumpInfo {
    pub name: String,
    /// Index in to `WadData::file_data`
    pub file_handle: usize,
    pub offset: usize,
    pub size: usize,
}

impl fmt::Debug for LumpInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "\nLumpInfo {{\n  name: {},\n  file: {},\n  size: {},\n  offset: {},\n}}",
            &self.name, self.file_handle, self.size, self.offset
        )
    }
}

/// "Where's All (the) Data": contains each loaded WAD in memory, plus one
/// directory spanning all of them. Lumps from files added later shadow lumps
/// of the same name from earlier files.
pub struct WadData {
    wad_names: Vec<PathBuf>,
    /// Each WAD as an array of bytes read in to memory
    file_data: Vec<Vec<u8>>,
    /// Tells us where each lump of data is
    lumps: Vec<LumpInfo>,
}

impl fmt::Debug for WadData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "\nWadData {{\n  wad_names: {:?},\n  lumps: {},\n}}",
            self.wad_names,
            self.lumps.len()
        )
    }
}

impl WadData {
    /// Load the IWAD at `file_path`
    pub fn new(file_path: &Path) -> Result<WadData, WadError> {
        let mut wad = WadData {
            wad_names: Vec::new(),
            file_data: Vec::new(),
            lumps: Vec::new(),
        };
        wad.add_file(file_path)?;
        Ok(wad)
    }

    /// Build from bytes already in memory, `name` is used for logging only
    pub fn from_bytes<A: Into<PathBuf>>(name: A, data: Vec<u8>) -> Result<WadData, WadError> {
        let mut wad = WadData {
            wad_names: Vec::new(),
            file_data: Vec::new(),
            lumps: Vec::new(),
        };
        wad.add_bytes(name, data)?;
        Ok(wad)
    }

    /// Append a PWAD (or any WAD) to the lump directory
    pub fn add_file(&mut self, file_path: &Path) -> Result<(), WadError> {
        let mut file = File::open(file_path)?;
        let file_len = file.metadata()?.len() as usize;
        let mut data = Vec::with_capacity(file_len);
        let wad_len = file.read_to_end(&mut data)?;
        if wad_len != file_len {
            return Err(WadError::Truncated {
                wanted: file_len,
                len: wad_len,
            });
        }
        self.add_bytes(file_path, data)
    }

    pub fn add_bytes<A: Into<PathBuf>>(&mut self, name: A, data: Vec<u8>) -> Result<(), WadError> {
        let name = name.into();
        let header = WadHeader::read(&data)?;
        debug!("{:?}: {:?}", name, header);

        let dir_end = header.dir_offset + header.dir_count * DIR_ENTRY_SIZE;
        if dir_end > data.len() {
            return Err(WadError::Truncated {
                wanted: dir_end,
                len: data.len(),
            });
        }

        let file_handle = self.file_data.len();
        let lumps = (0..header.dir_count)
            .map(|i| {
                Self::read_dir_entry(&data, header.dir_offset + i * DIR_ENTRY_SIZE, file_handle)
            })
            .collect::<Result<Vec<LumpInfo>, WadError>>()?;
        self.lumps.extend(lumps);

        info!(
            "Added {:?}, {} lumps, {} total",
            name,
            header.dir_count,
            self.lumps.len()
        );
        self.wad_names.push(name);
        self.file_data.push(data);
        Ok(())
    }

    fn read_dir_entry(data: &[u8], offset: usize, file_handle: usize) -> Result<LumpInfo, WadError> {
        let lump_offset = read_4_bytes(data, offset) as usize;
        let size = read_4_bytes(data, offset + 4) as usize;
        let n = &data[offset + 8..offset + 16];
        let name = String::from_utf8_lossy(n)
            .trim_end_matches('\u{0}') // better to address this early to avoid many casts later
            .to_ascii_uppercase();

        if lump_offset + size > data.len() {
            return Err(WadError::LumpOutOfBounds {
                name,
                offset: lump_offset,
                size,
            });
        }

        Ok(LumpInfo {
            name,
            file_handle,
            offset: lump_offset,
            size,
        })
    }

    pub fn wad_names(&self) -> &[PathBuf] {
        &self.wad_names
    }

    /// Find the lump number for `name`. The directory is searched from the end
    /// so lumps in later files win.
    pub fn lump_num_for_name(&self, name: &str) -> Option<usize> {
        let name = name.to_ascii_uppercase();
        self.lumps.iter().rposition(|l| l.name == name)
    }

    pub fn lump_info(&self, num: usize) -> Option<&LumpInfo> {
        self.lumps.get(num)
    }

    /// The raw bytes of lump `num`
    pub fn lump_data(&self, num: usize) -> Option<&[u8]> {
        let info = self.lumps.get(num)?;
        Some(&self.file_data[info.file_handle][info.offset..info.offset + info.size])
    }

    pub fn get_lump(&self, name: &str) -> Option<&[u8]> {
        self.lump_num_for_name(name).and_then(|n| self.lump_data(n))
    }

    /// Copy lump `num` in to `dest`, which must be filled completely. Extra
    /// bytes in the lump are dropped with a warning.
    pub fn read_lump_into(&self, num: usize, dest: &mut [u8]) -> Result<(), WadError> {
        let info = self
            .lumps
            .get(num)
            .ok_or_else(|| WadError::LumpNotFound(format!("#{}", num)))?;
        if info.size < dest.len() {
            return Err(WadError::ShortLump {
                name: info.name.clone(),
                size: info.size,
                wanted: dest.len(),
            });
        }
        if info.size > dest.len() {
            warn!(
                "Lump {} is {} bytes, only reading {}",
                info.name,
                info.size,
                dest.len()
            );
        }
        let file = &self.file_data[info.file_handle];
        dest.copy_from_slice(&file[info.offset..info.offset + dest.len()]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::WadError;
    use crate::synth::WadBuilder;
    use crate::wad::WadData;

    fn test_wad() -> WadData {
        let data = WadBuilder::iwad()
            .lump("PLAYPAL", vec![0; 768])
            .marker("F_START")
            .lump("FLOOR0_1", vec![1; 4096])
            .lump("NUKAGE1", vec![2; 4096])
            .marker("F_END")
            .build();
        WadData::from_bytes("test.wad", data).unwrap()
    }

    #[test]
    fn read_header_and_dirs() {
        let wad = test_wad();
        assert_eq!(wad.lump_info(0).unwrap().name, "PLAYPAL");
        assert!(wad.lump_info(5).is_none());
        assert_eq!(wad.lump_info(2).unwrap().size, 4096);
        assert_eq!(wad.lump_info(4).unwrap().size, 0);
    }

    #[test]
    fn find_lumps() {
        let wad = test_wad();
        assert_eq!(wad.lump_num_for_name("F_START"), Some(1));
        assert_eq!(wad.lump_num_for_name("nukage1"), Some(3));
        assert_eq!(wad.lump_num_for_name("F_SKY1"), None);
        assert_eq!(wad.get_lump("F_END").map(|l| l.len()), Some(0));
    }

    #[test]
    fn pwad_overrides() {
        let mut wad = test_wad();
        let pwad = WadBuilder::pwad().lump("NUKAGE1", vec![9; 4096]).build();
        wad.add_bytes("test.pwad", pwad).unwrap();

        let num = wad.lump_num_for_name("NUKAGE1").unwrap();
        assert_eq!(num, 5);
        assert_eq!(wad.lump_data(num).unwrap()[0], 9);
        assert_eq!(wad.wad_names().len(), 2);
    }

    #[test]
    fn read_lump_sizes() {
        let data = WadBuilder::iwad()
            .lump("SHORT", vec![1; 100])
            .lump("LONG", vec![3; 4160])
            .build();
        let wad = WadData::from_bytes("test.wad", data).unwrap();
        let mut buf = [0u8; 4096];

        let err = wad.read_lump_into(0, &mut buf).unwrap_err();
        assert!(matches!(err, WadError::ShortLump { size: 100, .. }));

        wad.read_lump_into(1, &mut buf).unwrap();
        assert!(buf.iter().all(|b| *b == 3));

        assert!(matches!(
            wad.read_lump_into(7, &mut buf),
            Err(WadError::LumpNotFound(_))
        ));
    }

    #[test]
    fn bad_files() {
        assert!(matches!(
            WadData::from_bytes("x", b"IWAD".to_vec()),
            Err(WadError::Truncated { .. })
        ));
        assert!(matches!(
            WadData::from_bytes("x", b"WAD2\0\0\0\0\0\0\0\0".to_vec()),
            Err(WadError::BadMagic(_))
        ));

        let mut data = WadBuilder::iwad().lump("A", vec![1; 16]).build();
        // Grow the lump size past the end of file
        let dir = data.len() - 16;
        data[dir + 4] = 0xff;
        assert!(matches!(
            WadData::from_bytes("x", data),
            Err(WadError::LumpOutOfBounds { .. })
        ));
    }
}
