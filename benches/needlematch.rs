use criterion::{criterion_group, criterion_main, Criterion};
use needlematch::{find_needle, ImageView, MatchConfig, Matcher};
use std::hint::black_box;

const CHANNELS: usize = 3;

fn make_image(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height * CHANNELS);
    for y in 0..height {
        for x in 0..width {
            let base = (x * 13) ^ (y * 7) ^ (x * y);
            data.push((base & 0xFF) as u8);
            data.push(((base >> 1) & 0xFF) as u8);
            data.push((base.wrapping_mul(31) & 0xFF) as u8);
        }
    }
    data
}

fn extract_patch(
    image: &[u8],
    img_width: usize,
    x0: usize,
    y0: usize,
    width: usize,
    height: usize,
) -> Vec<u8> {
    let mut out = Vec::with_capacity(width * height * CHANNELS);
    for y in 0..height {
        let start = ((y0 + y) * img_width + x0) * CHANNELS;
        out.extend_from_slice(&image[start..start + width * CHANNELS]);
    }
    out
}

fn bench_matcher(c: &mut Criterion) {
    let img_width = 512;
    let img_height = 512;
    let image = make_image(img_width, img_height);
    let haystack = ImageView::from_slice(&image, img_width, img_height, CHANNELS).unwrap();

    let ndl_width = 64;
    let ndl_height = 64;
    let exact = extract_patch(&image, img_width, 120, 100, ndl_width, ndl_height);
    let exact_needle = ImageView::from_slice(&exact, ndl_width, ndl_height, CHANNELS).unwrap();

    // Shortcut path: the pruning scan dominates, refinement never runs.
    c.bench_function("find_512x512_needle_64_exact", |b| {
        b.iter(|| black_box(find_needle(haystack, exact_needle).unwrap()));
    });

    let mut near = exact.clone();
    near[0] ^= 0x08;
    let near_needle = ImageView::from_slice(&near, ndl_width, ndl_height, CHANNELS).unwrap();

    c.bench_function("find_512x512_needle_64_brute_force", |b| {
        b.iter(|| black_box(find_needle(haystack, near_needle).unwrap()));
    });

    let small_list = Matcher::with_config(MatchConfig {
        candidate_capacity: 8,
        ..MatchConfig::default()
    });
    c.bench_function("find_512x512_needle_64_topk8", |b| {
        b.iter(|| black_box(small_list.find(haystack, near_needle).unwrap()));
    });
}

criterion_group!(benches, bench_matcher);
criterion_main!(benches);
