use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use chroma_image::Image;
use chroma_imgproc::color::{gray_from_rgb_u8, hsv_from_rgb_u8};

fn bench_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("Color");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        // input image
        let image_data = vec![128u8; width * height * 3];
        let image_size = [*width, *height].into();

        let image = Image::<u8, 3>::new(image_size, image_data).unwrap();

        group.bench_with_input(
            BenchmarkId::new("gray_from_rgb_u8", &parameter_string),
            &image,
            |b, i| {
                let mut gray = Image::<u8, 1>::from_size_val(i.size(), 0).unwrap();
                b.iter(|| black_box(gray_from_rgb_u8(i, &mut gray)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("hsv_from_rgb_u8", &parameter_string),
            &image,
            |b, i| {
                let mut hsv = Image::<u8, 3>::from_size_val(i.size(), 0).unwrap();
                b.iter(|| black_box(hsv_from_rgb_u8(i, &mut hsv)))
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_color);
criterion_main!(benches);
