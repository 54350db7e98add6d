use crate::{AnimatedFlat, LightTable};

/// One palette index per flat, used to draw floors and ceilings as solid
/// colour spans.
///
/// The table is filled by local flat index (lump number minus the first
/// flat) but `colour_for` indexes it with whatever the caller passes,
/// callers must offset their picture numbers the same way.
#[derive(Debug, Clone)]
pub struct FlatColours {
    /// `num_flats + 1` entries, the last is a spare that nothing reads
    translation: Vec<usize>,
    /// The animation and the index of its first flat
    animation: Option<(AnimatedFlat, usize)>,
}

impl FlatColours {
    pub(crate) fn new(translation: Vec<usize>, animation: Option<(AnimatedFlat, usize)>) -> Self {
        Self {
            translation,
            animation,
        }
    }

    /// Lit display colour of flat `pic`.
    ///
    /// # Panics
    /// If `pic` is outside the translation table.
    #[inline(always)]
    pub fn colour_for<L: LightTable + ?Sized>(&self, pic: usize, light_level: usize, lights: &L) -> u8 {
        let colourmap = lights.colourmap(light_level);
        colourmap[self.translation[pic]]
    }

    /// Run once per tic. Every flat of the animated group gets the same
    /// colour for the current frame.
    pub fn update_animated_flat(&mut self, level_time: u32) {
        if let Some((anim, base)) = &self.animation {
            let pic = anim.pic_for(level_time);
            for entry in &mut self.translation[*base..*base + anim.frames] {
                *entry = pic;
            }
        }
    }

    pub fn translation(&self) -> &[usize] {
        &self.translation
    }

    pub fn num_flats(&self) -> usize {
        self.translation.len() - 1
    }

    pub fn animated_base(&self) -> Option<usize> {
        self.animation.as_ref().map(|(_, base)| *base)
    }
}
