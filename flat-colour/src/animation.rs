use serde::{Deserialize, Serialize};

use crate::{FlatError, PALETTE_SIZE};

/// A group of consecutive flats that share one flickering colour. The colour
/// steps through `frames` palette entries, `step` apart, advancing once every
/// `1 << speed_shift` tics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatedFlat {
    /// First flat of the group
    pub name: String,
    pub base_colour: usize,
    pub step: usize,
    /// Also the number of flats written, starting at `name`
    pub frames: usize,
    pub speed_shift: u32,
}

impl Default for AnimatedFlat {
    /// Green slime
    fn default() -> Self {
        Self {
            name: "NUKAGE1".to_owned(),
            base_colour: 122,
            step: 2,
            frames: 3,
            speed_shift: 3,
        }
    }
}

impl AnimatedFlat {
    #[inline]
    pub fn pic_for(&self, level_time: u32) -> usize {
        self.base_colour + ((level_time >> self.speed_shift) as usize % self.frames) * self.step
    }

    pub(crate) fn validate(&self) -> Result<(), FlatError> {
        if self.frames == 0 {
            return Err(FlatError::BadAnimation(format!("{} has no frames", self.name)));
        }
        if self.speed_shift >= u32::BITS {
            return Err(FlatError::BadAnimation(format!(
                "{} speed shift {} is too large",
                self.name, self.speed_shift
            )));
        }
        let last = (self.frames - 1)
            .checked_mul(self.step)
            .and_then(|span| span.checked_add(self.base_colour));
        match last {
            Some(last) if last < PALETTE_SIZE => Ok(()),
            Some(last) => Err(FlatError::BadAnimation(format!(
                "{} cycles to colour {}, outside the palette",
                self.name, last
            ))),
            None => Err(FlatError::BadAnimation(format!(
                "{} cycles past the end of the palette",
                self.name
            ))),
        }
    }
}
