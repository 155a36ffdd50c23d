use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use detection_eval::evaluator::evaluate_detections;
use detection_eval::matching::match_detections;
use detection_eval::metrics::ap::calculate_ap;
use detection_eval::metrics::iou::calculate_iou;
use detection_eval::types::{Annotation, BoundingBox, Detection};

fn bench_iou_calculation(c: &mut Criterion) {
    let a = BoundingBox::new(10.0, 10.0, 60.0, 60.0);
    let b = BoundingBox::new(30.0, 30.0, 80.0, 80.0);

    c.bench_function("iou_single", |bencher| {
        bencher.iter(|| calculate_iou(black_box(&a), black_box(&b)));
    });
}

fn bench_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_detections");

    for size in [10, 50, 100, 500].iter() {
        let detections: Vec<Detection> = (0..*size)
            .map(|i| {
                let offset = (i as f64) * 2.0;
                Detection::new(
                    BoundingBox::new(offset, offset, offset + 50.0, offset + 50.0),
                    0.99 - (i as f64) * 0.001,
                    0,
                )
            })
            .collect();
        let annotations: Vec<Annotation> = (0..*size)
            .map(|i| {
                let offset = (i as f64) * 2.0 + 1.0;
                Annotation::new(
                    BoundingBox::new(offset, offset, offset + 50.0, offset + 50.0),
                    0,
                )
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |bencher, _| {
            bencher.iter(|| {
                match_detections(black_box(&detections), black_box(&annotations), 0.5)
            });
        });
    }
    group.finish();
}

fn bench_ap_curve(c: &mut Criterion) {
    let n = 1000;
    let recalls: Vec<f64> = (1..=n).map(|i| i as f64 / n as f64).collect();
    let precisions: Vec<f64> = (1..=n).map(|i| 1.0 - (i as f64 / n as f64) * 0.5).collect();

    c.bench_function("calculate_ap_1000_points", |bencher| {
        bencher.iter(|| calculate_ap(black_box(&recalls), black_box(&precisions)));
    });
}

fn bench_full_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_detections");

    for num_images in [10, 100, 500].iter() {
        let mut predictions = Vec::with_capacity(*num_images);
        let mut ground_truths = Vec::with_capacity(*num_images);

        for img in 0..*num_images {
            let label = img % 8;
            let offset = (img % 50) as f64 * 5.0;
            predictions.push(vec![
                Detection::new(
                    BoundingBox::new(offset, offset, offset + 40.0, offset + 40.0),
                    0.9,
                    label,
                ),
                Detection::new(
                    BoundingBox::new(offset + 100.0, offset, offset + 140.0, offset + 40.0),
                    0.6,
                    (label + 1) % 8,
                ),
            ]);
            ground_truths.push(vec![Annotation::new(
                BoundingBox::new(offset + 2.0, offset + 2.0, offset + 42.0, offset + 42.0),
                label,
            )]);
        }

        group.bench_with_input(
            BenchmarkId::from_parameter(num_images),
            num_images,
            |bencher, _| {
                bencher.iter(|| {
                    evaluate_detections(
                        black_box(&predictions),
                        black_box(&ground_truths),
                        None,
                        8,
                        None,
                    )
                    .unwrap()
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_iou_calculation,
    bench_matching,
    bench_ap_curve,
    bench_full_evaluation
);
criterion_main!(benches);
