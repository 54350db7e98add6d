use criterion::*;
use std::hint::black_box;
use flat_colour::{AnimatedFlat, Colourmap, Colourmaps, FlatCatalog, FlatColours, FLAT_SIZE};
use wad::synth::WadBuilder;
use wad::WadData;

fn test_wad() -> WadData {
    let mut b = WadBuilder::iwad().marker("F_START");
    for i in 0..100 {
        let data: Vec<u8> = (0..FLAT_SIZE).map(|p| ((p * 7 + i) % 256) as u8).collect();
        let name = if i == 50 { "NUKAGE1".to_owned() } else { format!("FLAT{}", i) };
        b = b.lump(&name, data);
    }
    WadData::from_bytes("bench.wad", b.marker("F_END").build()).unwrap()
}

fn bench_build(c: &mut Criterion) {
    let wad = test_wad();
    let cat = FlatCatalog::resolve(&wad).unwrap();
    let anim = AnimatedFlat::default();
    c.bench_function("Build colours for 100 flats", |b| {
        b.iter(|| FlatColours::build(black_box(&wad), &cat, Some(&anim)).unwrap())
    });
}

fn bench_lookup(c: &mut Criterion) {
    let wad = test_wad();
    let cat = FlatCatalog::resolve(&wad).unwrap();
    let colours = FlatColours::build(&wad, &cat, None).unwrap();
    let maps: Vec<Colourmap> = (0..34).map(|n| [n as u8; 256]).collect();
    let maps = Colourmaps::from_maps(maps).unwrap();

    c.bench_function("Colour lookup per span", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for pic in 0..colours.num_flats() {
                acc += colours.colour_for(black_box(pic), black_box(160), &maps) as u32;
            }
            acc
        })
    });
}

criterion_group!(benches, bench_build, bench_lookup);
criterion_main!(benches);
