use criterion::{Criterion, criterion_group, criterion_main};
use foilmesh::io::write_ascii_stl;
use foilmesh::{FoilBatch, emit, generate};
use std::hint::black_box;

fn bench_generate(c: &mut Criterion) {
    let params = FoilBatch::preset().airfoils[0];
    c.bench_function("generate_150", |b| b.iter(|| generate(black_box(&params))));
}

fn bench_emit(c: &mut Criterion) {
    let batch = FoilBatch::preset();
    c.bench_function("emit_preset", |b| {
        b.iter(|| emit(black_box(&batch.airfoils), batch.span))
    });
}

fn bench_write(c: &mut Criterion) {
    let doc = FoilBatch::preset().emit();
    c.bench_function("write_ascii_preset", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(1 << 20);
            write_ascii_stl(&mut out, black_box(&doc)).unwrap();
            out
        })
    });
}

criterion_group!(benches, bench_generate, bench_emit, bench_write);
criterion_main!(benches);
