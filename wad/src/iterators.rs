use crate::lumps::*;
use crate::WadData;
use std::marker::PhantomData;

pub struct LumpIter<T, F: Fn(usize) -> T> {
    item_size: usize,
    item_count: usize,
    current: usize,
    transformer: F,
    _phantom: PhantomData<T>,
}

impl<T, F> Iterator for LumpIter<T, F>
where
    F: Fn(usize) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current < self.item_count {
            let offset = self.current * self.item_size;
            let item = (self.transformer)(offset);
            self.current += 1;
            return Some(item);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.item_count - self.current;
        (left, Some(left))
    }
}

impl WadData {
    /// Fixed size records of the lump `name`. Empty if the lump is missing.
    fn record_iter<T>(
        &self,
        name: &str,
        item_size: usize,
        transformer: fn(&[u8]) -> T,
    ) -> LumpIter<T, impl Fn(usize) -> T + '_>
    where
        T: 'static,
    {
        let data = self.get_lump(name).unwrap_or(&[]);
        LumpIter {
            item_size,
            item_count: data.len() / item_size,
            current: 0,
            transformer: move |offset| transformer(&data[offset..offset + item_size]),
            _phantom: Default::default(),
        }
    }

    pub fn playpal_iter(&self) -> impl Iterator<Item = WadPalette> + '_ {
        self.record_iter("PLAYPAL", WadPalette::SIZE, WadPalette::from_bytes)
    }

    /// Each item is one 256 byte map from palette index to lit palette index
    pub fn colourmap_iter(&self) -> impl Iterator<Item = [u8; 256]> + '_ {
        self.record_iter("COLORMAP", 256, |bytes| {
            let mut map = [0u8; 256];
            map.copy_from_slice(bytes);
            map
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::lumps::WadColour;
    use crate::synth::WadBuilder;
    use crate::wad::WadData;

    #[test]
    fn palettes_and_colourmaps() {
        let mut playpal = vec![0u8; 768 * 2];
        playpal[3..6].copy_from_slice(&[10, 20, 30]);
        playpal[768] = 255;
        let colormap: Vec<u8> = (0..34 * 256).map(|i| (i % 256) as u8).collect();
        let wad = WadData::from_bytes(
            "test.wad",
            WadBuilder::iwad()
                .lump("PLAYPAL", playpal)
                .lump("COLORMAP", colormap)
                .build(),
        )
        .unwrap();

        let pals: Vec<_> = wad.playpal_iter().collect();
        assert_eq!(pals.len(), 2);
        assert_eq!(pals[0].0[1], WadColour::new(10, 20, 30));
        assert_eq!(pals[1].0[0], WadColour::new(255, 0, 0));

        let mut maps = wad.colourmap_iter();
        assert_eq!(maps.size_hint(), (34, Some(34)));
        let first = maps.next().unwrap();
        assert_eq!(first[200], 200);

        let empty = WadData::from_bytes("empty.wad", WadBuilder::iwad().build()).unwrap();
        assert_eq!(empty.colourmap_iter().count(), 0);
        assert_eq!(empty.playpal_iter().count(), 0);
    }
}
