use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};
use skin_tone_scan::{
    clustering::RngSource, extract_pixels_from_region, kmeans_clustering, PixelBuffer, ToneAnalyzer,
};

fn synthetic_face(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        let shade = ((x * 7 + y * 3) % 40) as u8;
        Rgba([180 + shade / 2, 140 + shade / 3, 110 + shade / 4, 255])
    })
}

fn benchmark_color_analysis(c: &mut Criterion) {
    let image = synthetic_face(1280, 960);
    let buffer = PixelBuffer::from(&image);
    let samples = extract_pixels_from_region(&buffer, 400.0, 300.0, 480.0, 360.0);

    c.bench_function("extract_pixels_480x360", |b| {
        b.iter(|| extract_pixels_from_region(black_box(&buffer), 400.0, 300.0, 480.0, 360.0))
    });

    c.bench_function("kmeans_k5_20_iterations", |b| {
        b.iter(|| kmeans_clustering(black_box(&samples), 5, 20, &mut RngSource::seeded(1)))
    });

    let analyzer = ToneAnalyzer::new().with_seed(1);
    c.bench_function("analyze_center_1280x960", |b| {
        b.iter(|| analyzer.analyze_center(black_box(&buffer)))
    });
}

criterion_group!(benches, benchmark_color_analysis);
criterion_main!(benches);
