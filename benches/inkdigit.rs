use inkdigit::{Ink, Point, Recognizer, RecognizerConfig, Stroke, TemplateLibrary};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn loop_ink(samples: usize) -> Ink {
    let stroke: Stroke = (0..=samples)
        .map(|i| {
            let t = i as f32 / samples as f32 * std::f32::consts::TAU;
            // Start at the top and run counter-clockwise like a drawn zero.
            Point::new(50.0 - 30.0 * t.sin(), 50.0 - 40.0 * t.cos())
        })
        .collect();
    Ink::from(vec![stroke])
}

fn figure_eight(samples: usize) -> Ink {
    let stroke: Stroke = (0..=samples)
        .map(|i| {
            let t = i as f32 / samples as f32 * std::f32::consts::TAU;
            Point::new(50.0 + 25.0 * (2.0 * t).sin(), 50.0 - 40.0 * t.cos())
        })
        .collect();
    Ink::from(vec![stroke])
}

fn bench_recognizer(c: &mut Criterion) {
    let recognizer = Recognizer::new();
    let zero = loop_ink(80);
    let eight = figure_eight(120);

    c.bench_function("recognize_loop_80", |b| {
        b.iter(|| black_box(recognizer.recognize(black_box(&zero))));
    });

    c.bench_function("recognize_eight_120", |b| {
        b.iter(|| black_box(recognizer.recognize(black_box(&eight))));
    });

    c.bench_function("explain_eight_120", |b| {
        b.iter(|| black_box(recognizer.explain(black_box(&eight))));
    });

    #[cfg(feature = "rayon")]
    {
        let parallel = Recognizer::with_config(RecognizerConfig {
            parallel: true,
            ..RecognizerConfig::default()
        })
        .unwrap();
        c.bench_function("recognize_eight_120_parallel", |b| {
            b.iter(|| black_box(parallel.recognize(black_box(&eight))));
        });
    }
}

fn bench_library(c: &mut Criterion) {
    c.bench_function("compile_builtin_library_64", |b| {
        b.iter(|| black_box(TemplateLibrary::builtin(black_box(64)).unwrap()));
    });

    let cfg = RecognizerConfig {
        resample_points: 32,
        ..RecognizerConfig::default()
    };
    let coarse = Recognizer::with_config(cfg).unwrap();
    let eight = figure_eight(120);
    c.bench_function("recognize_eight_120_coarse", |b| {
        b.iter(|| black_box(coarse.recognize(black_box(&eight))));
    });
}

criterion_group!(benches, bench_recognizer, bench_library);
criterion_main!(benches);
