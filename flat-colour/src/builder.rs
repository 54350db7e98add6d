use log::{debug, info};

use crate::{
    AnimatedFlat, FlatCatalog, FlatColours, FlatError, FlatSource, ScratchBuffers, FLAT_SIZE,
    PALETTE_SIZE,
};

/// The most frequent value in `pixels`. On a tie the lowest palette index
/// wins, the scan is ascending and only a strictly larger count replaces the
/// current best.
pub fn dominant_colour(pixels: &[u8; FLAT_SIZE], histogram: &mut [u16; PALETTE_SIZE]) -> usize {
    histogram.fill(0);
    for p in pixels {
        histogram[*p as usize] += 1;
    }

    let mut max_amount = 0;
    let mut max_index = 0;
    for (i, amount) in histogram.iter().enumerate() {
        if *amount > max_amount {
            max_amount = *amount;
            max_index = i;
        }
    }
    max_index
}

impl FlatColours {
    /// Reduce every flat in `catalog` to its dominant colour. With an
    /// `animation` the group it names is located and checked to lie inside
    /// the range.
    ///
    /// Empty lumps inside the range are nested markers (`F1_START` and
    /// friends). They keep their slot, with colour 0.
    pub fn build<S: FlatSource + ?Sized>(
        source: &S,
        catalog: &FlatCatalog,
        animation: Option<&AnimatedFlat>,
    ) -> Result<Self, FlatError> {
        let num_flats = catalog.num_flats();
        // One spare slot past the end
        let mut translation = vec![0usize; num_flats + 1];

        let animation = match animation {
            Some(anim) => {
                anim.validate()?;
                let base = catalog.flat_num_for_name(source, &anim.name)?;
                let fits = usize::try_from(base)
                    .ok()
                    .and_then(|b| b.checked_add(anim.frames - 1))
                    .is_some_and(|last| last <= num_flats);
                if !fits {
                    return Err(FlatError::AnimationOutOfRange {
                        name: anim.name.clone(),
                        index: base,
                        num_flats,
                    });
                }
                debug!("Animated flat {} at index {}", anim.name, base);
                Some((anim.clone(), base as usize))
            }
            None => None,
        };

        let mut scratch = ScratchBuffers::acquire();
        let ScratchBuffers { source: bitmap, histogram } = &mut scratch;
        for (i, entry) in translation.iter_mut().take(num_flats).enumerate() {
            let num = catalog.first_flat() + i;
            if source.lump_size(num) == Some(0) {
                debug!(
                    "Flat {} ({}) is a marker, skipping",
                    i,
                    source.lump_name(num).unwrap_or("-")
                );
                continue;
            }
            source.read_flat(num, bitmap)?;
            *entry = dominant_colour(bitmap, histogram);
            debug!(
                "Flat {} ({}) dominant colour {}",
                i,
                source.lump_name(num).unwrap_or("-"),
                entry
            );
        }
        drop(scratch);

        info!("Initialised colours for {} flats", num_flats);
        Ok(Self::new(translation, animation))
    }
}
