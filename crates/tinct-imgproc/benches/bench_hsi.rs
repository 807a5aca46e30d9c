use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use std::hint::black_box;
use tinct_image::Image;
use tinct_imgproc::color::{HsiConfig, HsiConverter};
use tinct_imgproc::parallel::ExecutionStrategy;

fn bench_hsi(c: &mut Criterion) {
    let mut group = c.benchmark_group("Hsi");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        // input image
        let image_size = [*width, *height].into();
        let data = (0..width * height * 3)
            .map(|k| ((k * 7919) % 256) as f32 / 255.0)
            .collect();
        let image = Image::<f32, 3>::new(image_size, data).unwrap();

        for (name, strategy) in [
            ("serial", ExecutionStrategy::Serial),
            ("parallel_rows", ExecutionStrategy::ParallelRows),
        ] {
            let converter = HsiConverter::new(HsiConfig::default().with_strategy(strategy));
            let hsi = converter.to_hsi(&image).unwrap();

            group.bench_with_input(
                BenchmarkId::new(format!("to_hsi_{name}"), &parameter_string),
                &image,
                |b, i| b.iter(|| converter.to_hsi(black_box(i))),
            );

            group.bench_with_input(
                BenchmarkId::new(format!("to_rgb_{name}"), &parameter_string),
                &hsi,
                |b, i| b.iter(|| converter.to_rgb(black_box(i))),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_hsi);
criterion_main!(benches);
