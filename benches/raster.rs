use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use inkline::math::Vec2;
use inkline::render::rasterize_triangle;

fn small_triangle() -> [Vec2; 3] {
    [
        Vec2::new(100.0, 100.0),
        Vec2::new(120.0, 100.0),
        Vec2::new(110.0, 120.0),
    ]
}

fn medium_triangle() -> [Vec2; 3] {
    [
        Vec2::new(100.0, 100.0),
        Vec2::new(300.0, 100.0),
        Vec2::new(200.0, 300.0),
    ]
}

fn large_triangle() -> [Vec2; 3] {
    [
        Vec2::new(50.0, 50.0),
        Vec2::new(750.0, 100.0),
        Vec2::new(400.0, 550.0),
    ]
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    for (name, triangle) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("scanline", name), &triangle, |b, tri| {
            b.iter(|| rasterize_triangle(black_box(tri[0]), black_box(tri[1]), black_box(tri[2])));
        });
    }

    group.finish();
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_triangles");

    // A grid of small triangles, roughly a dense mesh's screen footprint.
    let triangles: Vec<[Vec2; 3]> = (0..20)
        .flat_map(|row| {
            (0..20).map(move |col| {
                let x = col as f32 * 40.0;
                let y = row as f32 * 30.0;
                [
                    Vec2::new(x, y),
                    Vec2::new(x + 35.0, y),
                    Vec2::new(x + 17.5, y + 25.0),
                ]
            })
        })
        .collect();

    group.bench_function("scanline_400_triangles", |b| {
        b.iter(|| {
            for tri in &triangles {
                rasterize_triangle(black_box(tri[0]), black_box(tri[1]), black_box(tri[2]));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_single_triangle, benchmark_many_triangles);
criterion_main!(benches);
