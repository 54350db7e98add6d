use log::{info, warn};
use wad::WadData;

use crate::{FlatError, PALETTE_SIZE};

pub const LIGHTLEVELS: usize = 16;
pub const LIGHTSEGSHIFT: usize = 4;
pub const NUMCOLORMAPS: usize = 32;

pub type Colourmap = [u8; PALETTE_SIZE];

/// Maps a light level to a palette remapping table
pub trait LightTable {
    /// Always 256 entries long
    fn colourmap(&self, light_level: usize) -> &[u8];
}

/// The `COLORMAP` lump: 32 maps from bright to dark, then the invulnerability
/// map and an all-black one.
#[derive(Debug, Clone)]
pub struct Colourmaps {
    maps: Vec<Colourmap>,
    /// A non-zero value is the colourmap forced for every light level
    use_fixed_colourmap: usize,
}

impl Colourmaps {
    pub fn init(wad: &WadData) -> Result<Self, FlatError> {
        let maps: Vec<Colourmap> = wad.colourmap_iter().collect();
        let maps = Self::from_maps(maps)?;
        info!("Initialised {} colourmaps", maps.maps.len());
        Ok(maps)
    }

    pub fn from_maps(maps: Vec<Colourmap>) -> Result<Self, FlatError> {
        if maps.len() < NUMCOLORMAPS {
            return Err(FlatError::BadColourmap(maps.len()));
        }
        Ok(Self {
            maps,
            use_fixed_colourmap: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// Force `colourmap` for all light levels, 0 turns this off
    pub fn set_fixed_colourmap(&mut self, mut colourmap: usize) {
        if colourmap >= self.maps.len() {
            warn!(
                "Fixed colourmap {} out of range, using {}",
                colourmap,
                self.maps.len() - 1
            );
            colourmap = self.maps.len() - 1;
        }
        self.use_fixed_colourmap = colourmap;
    }

    /// Index of the colourmap used for a sector light level of 0-255
    pub fn map_for_light(&self, light_level: usize) -> usize {
        if self.use_fixed_colourmap != 0 {
            return self.use_fixed_colourmap;
        }
        let lightnum = (light_level >> LIGHTSEGSHIFT).min(LIGHTLEVELS - 1);
        let startmap = ((LIGHTLEVELS - 1 - lightnum) * 2) * NUMCOLORMAPS / LIGHTLEVELS;
        startmap.min(NUMCOLORMAPS - 1)
    }
}

impl LightTable for Colourmaps {
    #[inline]
    fn colourmap(&self, light_level: usize) -> &[u8] {
        &self.maps[self.map_for_light(light_level)]
    }
}
