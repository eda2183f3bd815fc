use criterion::{BatchSize, Criterion, criterion_group};
use polytrace::{FillRule, Polygon, Surface, Vector};
use rand::Rng;

type Sample = [[f64; 2]; 100];

fn random_polygon() -> Polygon<f64> {
    let mut rng = rand::rng();

    rng.random::<Sample>()
        .map(|[x, y]| [x * 200., y * 200.])
        .to_vec()
        .into()
}

/// Counts the painted pixels, discarding everything else.
#[derive(Default)]
struct Counter(usize);

impl Surface for Counter {
    type Color = ();

    fn set_pixel(&mut self, _: i64, _: i64, _: &Self::Color) {
        self.0 += 1;
    }

    fn draw_line(&mut self, _: Vector<i64>, _: Vector<i64>, _: &Self::Color) {}
}

pub fn large_polygons(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("large polygons");

    group.bench_function("even-odd fill", |b| {
        b.iter_batched(
            random_polygon,
            |polygon| {
                polygon.fill(&mut Counter::default(), FillRule::EvenOdd, &());
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("nonzero fill", |b| {
        b.iter_batched(
            random_polygon,
            |polygon| {
                polygon.fill(&mut Counter::default(), FillRule::NonZero, &());
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("retrace", |b| {
        b.iter_batched(
            random_polygon,
            |polygon| {
                let _ = polygon.retrace();
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, large_polygons);
