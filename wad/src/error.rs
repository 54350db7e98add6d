use std::{error::Error, fmt, io};

#[derive(Debug)]
pub enum WadError {
    Io(io::Error),
    /// The first four bytes were not `IWAD` or `PWAD`
    BadMagic([u8; 4]),
    /// The file ended before the header or directory did
    Truncated { wanted: usize, len: usize },
    /// A directory entry points past the end of the file
    LumpOutOfBounds {
        name: String,
        offset: usize,
        size: usize,
    },
    LumpNotFound(String),
    /// The lump holds fewer bytes than the caller asked to stream
    ShortLump {
        name: String,
        size: usize,
        wanted: usize,
    },
}

impl Error for WadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            WadError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for WadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WadError::Io(e) => write!(f, "could not read WAD: {}", e),
            WadError::BadMagic(m) => write!(f, "not a WAD file, header is {:?}", m),
            WadError::Truncated { wanted, len } => {
                write!(f, "WAD truncated: needed {} bytes, file is {}", wanted, len)
            }
            WadError::LumpOutOfBounds { name, offset, size } => write!(
                f,
                "lump {} at offset {} with size {} runs past end of file",
                name, offset, size
            ),
            WadError::LumpNotFound(name) => write!(f, "lump not found: {}", name),
            WadError::ShortLump { name, size, wanted } => write!(
                f,
                "lump {} is {} bytes, expected at least {}",
                name, size, wanted
            ),
        }
    }
}

impl From<io::Error> for WadError {
    fn from(e: io::Error) -> Self {
        WadError::Io(e)
    }
}
