//! Level load and tic loop stand-in: resolve the flats, build their colours
//! and drive the animation.

use flat_colour::log::{debug, info};
use flat_colour::{Colourmaps, FlatCatalog, FlatColours, FlatError, LightTable};
use wad::lumps::WadPalette;
use wad::WadData;

use crate::config::UserConfig;

pub struct LoadedFlats {
    pub catalog: FlatCatalog,
    pub colours: FlatColours,
    pub colourmaps: Colourmaps,
    pub palette: WadPalette,
}

pub fn load_flats(wad: &WadData, config: &UserConfig) -> Result<LoadedFlats, FlatError> {
    let catalog = FlatCatalog::resolve(wad)?;
    info!(
        "Flats {}..={}, {} total",
        catalog.first_flat(),
        catalog.last_flat(),
        catalog.num_flats()
    );
    let colours = FlatColours::build(wad, &catalog, Some(&config.animation))?;

    let mut colourmaps = Colourmaps::init(wad)?;
    colourmaps.set_fixed_colourmap(config.fixed_colourmap);

    let palette = wad.playpal_iter().next().unwrap_or_default();

    Ok(LoadedFlats {
        catalog,
        colours,
        colourmaps,
        palette,
    })
}

/// Advance the animation once per tic for `tics` tics, starting with the
/// level clock at `start`. Returns the colour the animated group ended on.
pub fn run_tics(colours: &mut FlatColours, start: u32, tics: u32) -> Option<usize> {
    let base = colours.animated_base()?;
    let mut last = colours.translation()[base];
    for level_time in start..start.saturating_add(tics) {
        colours.update_animated_flat(level_time);
        let now = colours.translation()[base];
        if now != last {
            debug!("Tic {}: animated flat colour {}", level_time, now);
            last = now;
        }
    }
    Some(last)
}

/// One line per flat: local index, name, dominant colour, lit colour and the
/// lit colour's RGB
pub fn dump_lines(wad: &WadData, loaded: &LoadedFlats, light_level: usize) -> Vec<String> {
    let LoadedFlats {
        catalog,
        colours,
        colourmaps,
        palette,
    } = loaded;
    let map = colourmaps.colourmap(light_level);
    catalog
        .flat_names(wad)
        .enumerate()
        .map(|(i, name)| {
            let dominant = colours.translation()[i];
            let lit = colours.colour_for(i, light_level, colourmaps);
            debug_assert_eq!(lit, map[dominant]);
            let rgb = palette.0[lit as usize];
            format!(
                "{:4} {:8} {:3} {:3} #{:02x}{:02x}{:02x}",
                i, name, dominant, lit, rgb.r, rgb.g, rgb.b
            )
        })
        .collect()
}
