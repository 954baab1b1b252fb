use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use field::modulus::{FieldOperations, NONE, ONCE};
use field::{FieldElement, FieldShape};
use sampling::source::Source;

const SHAPES: [(&str, usize, u64); 4] = [
    ("p128", 128, 0x19),
    ("p192", 192, 0x1f),
    ("p256", 256, 0x5d),
    ("p512", 511, 569),
];

fn operands(shape: &FieldShape) -> (FieldElement, FieldElement) {
    let mut source: Source = Source::new([0u8; 32]);
    let mut a: FieldElement = FieldElement::zero();
    let mut b: FieldElement = FieldElement::zero();
    shape.fill_uniform_nonzero(&mut source, &mut a);
    shape.fill_uniform_nonzero(&mut source, &mut b);
    (a, b)
}

fn sa_mul_sb_into_sb(c: &mut Criterion) {
    fn runner(shape: FieldShape) -> Box<dyn FnMut()> {
        let (a, mut b) = operands(&shape);
        Box::new(move || {
            shape.sa_mul_sb_into_sb::<NONE>(&a, &mut b);
        })
    }

    let mut b: criterion::BenchmarkGroup<'_, criterion::measurement::WallTime> =
        c.benchmark_group("sa_mul_sb_into_sb");
    for (name, bits, word) in SHAPES {
        let Ok(shape) = FieldShape::new(bits, word) else {
            continue;
        };
        let mut run = runner(shape);
        b.bench_with_input(BenchmarkId::new(name, bits), &(), |b, _| b.iter(&mut run));
    }
}

fn sa_sqr_into_sa(c: &mut Criterion) {
    fn runner(shape: FieldShape) -> Box<dyn FnMut()> {
        let (mut a, _) = operands(&shape);
        Box::new(move || {
            shape.sa_sqr_into_sa::<NONE>(&mut a);
        })
    }

    let mut b: criterion::BenchmarkGroup<'_, criterion::measurement::WallTime> =
        c.benchmark_group("sa_sqr_into_sa");
    for (name, bits, word) in SHAPES {
        let Ok(shape) = FieldShape::new(bits, word) else {
            continue;
        };
        let mut run = runner(shape);
        b.bench_with_input(BenchmarkId::new(name, bits), &(), |b, _| b.iter(&mut run));
    }
}

fn sa_inv_into_sb(c: &mut Criterion) {
    fn runner(shape: FieldShape) -> Box<dyn FnMut()> {
        let (a, mut b) = operands(&shape);
        Box::new(move || {
            shape.sa_inv_into_sb::<ONCE>(&a, &mut b);
        })
    }

    let mut b: criterion::BenchmarkGroup<'_, criterion::measurement::WallTime> =
        c.benchmark_group("sa_inv_into_sb");
    for (name, bits, word) in SHAPES {
        let Ok(shape) = FieldShape::new(bits, word) else {
            continue;
        };
        let mut run = runner(shape);
        b.bench_with_input(BenchmarkId::new(name, bits), &(), |b, _| b.iter(&mut run));
    }
}

criterion_group!(benches, sa_mul_sb_into_sb, sa_sqr_into_sa, sa_inv_into_sb);
criterion_main!(benches);
