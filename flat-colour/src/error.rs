use std::{error::Error, fmt};

use wad::WadError;

/// Everything here is fatal to a level load. A missing marker, a bad range or
/// an unreadable flat all mean the WAD set is corrupt or mismatched.
#[derive(Debug)]
pub enum FlatError {
    Wad(WadError),
    MissingLump(String),
    /// `F_END` was found at or before `F_START`
    BadFlatRange { start: usize, end: usize },
    /// The animated flat group doesn't fit inside the flat range
    AnimationOutOfRange {
        name: String,
        index: isize,
        num_flats: usize,
    },
    BadAnimation(String),
    /// Fewer colourmaps than light levels need
    BadColourmap(usize),
}

impl Error for FlatError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FlatError::Wad(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for FlatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlatError::Wad(e) => write!(f, "{}", e),
            FlatError::MissingLump(name) => write!(f, "{} is missing from the WAD", name),
            FlatError::BadFlatRange { start, end } => {
                write!(f, "bad flat range: F_START at {}, F_END at {}", start, end)
            }
            FlatError::AnimationOutOfRange {
                name,
                index,
                num_flats,
            } => write!(
                f,
                "animated flat {} at index {} does not fit in {} flats",
                name, index, num_flats
            ),
            FlatError::BadAnimation(m) => write!(f, "bad flat animation: {}", m),
            FlatError::BadColourmap(n) => write!(f, "COLORMAP has only {} maps", n),
        }
    }
}

impl From<WadError> for FlatError {
    fn from(e: WadError) -> Self {
        FlatError::Wad(e)
    }
}
