use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use field::{FieldElement, FieldShape};
use sampling::source::Source;
use sharing::Share;
use sharing::params::{PARAMETER_SETS, ParameterSet};
use sharing::polynomial::{join, split};

fn polynomial(shape: &FieldShape, parts: usize) -> (Vec<FieldElement>, Vec<Share>) {
    let mut source: Source = Source::new([0u8; 32]);
    let mut coeffs: Vec<FieldElement> = vec![FieldElement::zero(); parts];
    coeffs
        .iter_mut()
        .for_each(|c| shape.fill_uniform(&mut source, c));
    let shares: Vec<Share> = (1..=parts as u64)
        .map(|x| {
            let x: FieldElement = FieldElement::from_word(x);
            let mut y: FieldElement = FieldElement::zero();
            let _ = split(shape, parts, &coeffs, &x, &mut y);
            Share { x, y }
        })
        .collect();
    (coeffs, shares)
}

fn bench_split(c: &mut Criterion) {
    fn runner(set: ParameterSet, parts: usize) -> Box<dyn FnMut()> {
        let Ok(shape) = set.shape() else {
            return Box::new(|| {});
        };
        let (coeffs, _) = polynomial(&shape, parts);
        let x: FieldElement = FieldElement::from_word(0x1234_5678);
        let mut y: FieldElement = FieldElement::zero();
        Box::new(move || {
            let _ = split(&shape, parts, &coeffs, &x, &mut y);
        })
    }

    let mut b: criterion::BenchmarkGroup<'_, criterion::measurement::WallTime> =
        c.benchmark_group("split");
    for set in PARAMETER_SETS {
        for parts in [2usize, 3, 8, 16] {
            let mut run = runner(set, parts);
            let id = BenchmarkId::new(format!("p{}", set.bits), parts);
            b.bench_with_input(id, &(), |b, _| b.iter(&mut run));
        }
    }
}

fn bench_join(c: &mut Criterion) {
    fn runner(set: ParameterSet, parts: usize) -> Box<dyn FnMut()> {
        let Ok(shape) = set.shape() else {
            return Box::new(|| {});
        };
        let (_, shares) = polynomial(&shape, parts);
        let mut secret: FieldElement = FieldElement::zero();
        Box::new(move || {
            let _ = join(&shape, parts, &shares, &mut secret);
        })
    }

    let mut b: criterion::BenchmarkGroup<'_, criterion::measurement::WallTime> =
        c.benchmark_group("join");
    for set in PARAMETER_SETS {
        for parts in [2usize, 3, 8, 16] {
            let mut run = runner(set, parts);
            let id = BenchmarkId::new(format!("p{}", set.bits), parts);
            b.bench_with_input(id, &(), |b, _| b.iter(&mut run));
        }
    }
}

criterion_group!(benches, bench_split, bench_join);
criterion_main!(benches);
