use wad::WadData;

use crate::{FlatError, FLAT_SIZE};

pub const FLATS_START: &str = "F_START";
pub const FLATS_END: &str = "F_END";

/// What the flat colour pass needs from an asset catalog
pub trait FlatSource {
    /// Fails if the lump doesn't exist
    fn lump_num_for_name(&self, name: &str) -> Result<usize, FlatError>;

    fn lump_name(&self, num: usize) -> Option<&str>;

    /// Size in bytes of lump `num`, zero for markers
    fn lump_size(&self, num: usize) -> Option<usize>;

    /// Copy the 64x64 bitmap of lump `num` in to `dest`
    fn read_flat(&self, num: usize, dest: &mut [u8; FLAT_SIZE]) -> Result<(), FlatError>;
}

impl FlatSource for WadData {
    fn lump_num_for_name(&self, name: &str) -> Result<usize, FlatError> {
        WadData::lump_num_for_name(self, name).ok_or_else(|| FlatError::MissingLump(name.to_owned()))
    }

    fn lump_name(&self, num: usize) -> Option<&str> {
        self.lump_info(num).map(|l| l.name.as_str())
    }

    fn lump_size(&self, num: usize) -> Option<usize> {
        self.lump_info(num).map(|l| l.size)
    }

    fn read_flat(&self, num: usize, dest: &mut [u8; FLAT_SIZE]) -> Result<(), FlatError> {
        self.read_lump_into(num, dest)?;
        Ok(())
    }
}

/// The contiguous run of flat lumps between the `F_START` and `F_END`
/// markers. A flat's local index is its lump number minus `first_flat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatCatalog {
    first_flat: usize,
    num_flats: usize,
}

impl FlatCatalog {
    pub fn resolve<S: FlatSource + ?Sized>(source: &S) -> Result<Self, FlatError> {
        let start = source.lump_num_for_name(FLATS_START)?;
        let end = source.lump_num_for_name(FLATS_END)?;
        if end <= start {
            return Err(FlatError::BadFlatRange { start, end });
        }

        let first_flat = start + 1;
        let last_flat = end - 1;
        Ok(Self {
            first_flat,
            num_flats: last_flat + 1 - first_flat,
        })
    }

    pub fn first_flat(&self) -> usize {
        self.first_flat
    }

    /// The lump number of the last flat. Equal to `first_flat - 1` when there
    /// are no flats.
    pub fn last_flat(&self) -> isize {
        self.first_flat as isize + self.num_flats as isize - 1
    }

    pub fn num_flats(&self) -> usize {
        self.num_flats
    }

    /// Local index of the flat called `name`. The result is not checked
    /// against the range, a lump outside the markers gives an index outside
    /// `0..num_flats` (possibly negative).
    pub fn flat_num_for_name<S: FlatSource + ?Sized>(
        &self,
        source: &S,
        name: &str,
    ) -> Result<isize, FlatError> {
        let num = source.lump_num_for_name(name)?;
        Ok(num as isize - self.first_flat as isize)
    }

    pub fn flat_names<'a, S: FlatSource + ?Sized>(
        &self,
        source: &'a S,
    ) -> impl Iterator<Item = &'a str> + 'a {
        let first = self.first_flat;
        (first..first + self.num_flats).map(move |n| source.lump_name(n).unwrap_or("-"))
    }
}

#[cfg(test)]
mod tests {
    use wad::synth::WadBuilder;
    use wad::WadData;

    use super::FlatCatalog;
    use crate::FlatError;

    fn wad_with_flats(names: &[&str]) -> WadData {
        let mut b = WadBuilder::iwad()
            .lump("PLAYPAL", vec![0; 768])
            .lump("COLORMAP", vec![0; 34 * 256])
            .marker("F_START");
        for n in names {
            b = b.lump(n, vec![0; 4096]);
        }
        let b = b.marker("F_END").lump("ENDOOM", vec![0; 4000]);
        WadData::from_bytes("test.wad", b.build()).unwrap()
    }

    #[test]
    fn resolve_range() {
        let wad = wad_with_flats(&["FLOOR0_1", "FLOOR0_3", "NUKAGE1", "NUKAGE2"]);
        let cat = FlatCatalog::resolve(&wad).unwrap();
        assert_eq!(cat.first_flat(), 3);
        assert_eq!(cat.last_flat(), 6);
        assert_eq!(cat.num_flats(), 4);
        assert_eq!(cat.num_flats() as isize, cat.last_flat() - cat.first_flat() as isize + 1);

        let names: Vec<&str> = cat.flat_names(&wad).collect();
        assert_eq!(names, vec!["FLOOR0_1", "FLOOR0_3", "NUKAGE1", "NUKAGE2"]);
    }

    #[test]
    fn names_to_index() {
        let wad = wad_with_flats(&["FLOOR0_1", "NUKAGE1"]);
        let cat = FlatCatalog::resolve(&wad).unwrap();
        assert_eq!(cat.flat_num_for_name(&wad, "NUKAGE1").unwrap(), 1);
        assert_eq!(cat.flat_num_for_name(&wad, "FLOOR0_1").unwrap(), 0);
        // Not range checked
        assert_eq!(cat.flat_num_for_name(&wad, "PLAYPAL").unwrap(), -3);
        assert_eq!(cat.flat_num_for_name(&wad, "ENDOOM").unwrap(), 3);

        assert!(matches!(
            cat.flat_num_for_name(&wad, "SLIME01"),
            Err(FlatError::MissingLump(n)) if n == "SLIME01"
        ));
    }

    #[test]
    fn empty_range() {
        let wad = wad_with_flats(&[]);
        let cat = FlatCatalog::resolve(&wad).unwrap();
        assert_eq!(cat.num_flats(), 0);
        assert_eq!(cat.last_flat(), cat.first_flat() as isize - 1);
        assert_eq!(cat.flat_names(&wad).count(), 0);
    }

    #[test]
    fn missing_or_swapped_markers() {
        let wad = WadData::from_bytes(
            "test.wad",
            WadBuilder::iwad().marker("F_START").build(),
        )
        .unwrap();
        assert!(matches!(
            FlatCatalog::resolve(&wad),
            Err(FlatError::MissingLump(n)) if n == "F_END"
        ));

        let wad = WadData::from_bytes(
            "test.wad",
            WadBuilder::iwad().marker("F_END").marker("F_START").build(),
        )
        .unwrap();
        assert!(matches!(
            FlatCatalog::resolve(&wad),
            Err(FlatError::BadFlatRange { start: 1, end: 0 })
        ));
    }
}
