use criterion::{Criterion, black_box, criterion_group, criterion_main};
use roster_theme::{
    HexColor, Palette, PaletteStore, Rgb, StyleVariables, ThemeConfig, apply_theme, contrast_of,
    hsl_to_rgb, rgb_to_hsl,
};

fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("roster_theme/conversion");

    group.bench_function("HexColor::parse", |b| {
        b.iter(|| black_box(HexColor::parse(black_box("#FF5733"))));
    });

    group.bench_function("rgb_to_hsl", |b| {
        b.iter(|| black_box(rgb_to_hsl(black_box(Rgb::new(255, 87, 51)))));
    });

    group.bench_function("hsl_round_trip", |b| {
        b.iter(|| black_box(hsl_to_rgb(rgb_to_hsl(black_box(Rgb::new(46, 134, 171))))));
    });

    group.finish();
}

fn bench_theme(c: &mut Criterion) {
    let mut group = c.benchmark_group("roster_theme/theme");

    group.bench_function("contrast_of", |b| {
        b.iter(|| black_box(contrast_of(black_box("#28204a"))));
    });

    group.bench_function("apply_theme/one_color", |b| {
        let store = PaletteStore::default();
        let config = ThemeConfig::from_raw(Some("#ff5733"), None);
        b.iter(|| black_box(apply_theme(&store, black_box(&config))));
    });

    group.bench_function("apply_theme/from_query", |b| {
        let store = PaletteStore::default();
        b.iter(|| {
            let config = ThemeConfig::from_query(black_box("?bgColor1=%23020738&bgColor2=4e395c"));
            black_box(apply_theme(&store, &config))
        });
    });

    group.bench_function("StyleVariables::to_css", |b| {
        let palette = Palette::default();
        b.iter(|| black_box(StyleVariables::from_palette(&palette).to_css(":root")));
    });

    group.finish();
}

criterion_group!(benches, bench_conversion, bench_theme);
criterion_main!(benches);
