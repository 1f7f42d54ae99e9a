use criterion::{Criterion, criterion_group, criterion_main};

use cowarray::CowArray;

fn bench_clone_vs_detach(c: &mut Criterion) {
    let base: CowArray<u64> = (0..65536).collect();

    c.bench_function("clone_shared_64k", |b| b.iter(|| base.clone()));

    c.bench_function("detach_after_clone_64k", |b| {
        b.iter(|| {
            let mut copy = base.clone();
            copy.as_mut_slice()[0] = 1;
            copy
        })
    });

    c.bench_function("unique_in_place_write_64k", |b| {
        let mut owned: CowArray<u64> = (0..65536).collect();
        b.iter(|| {
            owned.as_mut_slice()[0] += 1;
            owned[0]
        })
    });
}

criterion_group!(benches, bench_clone_vs_detach);
criterion_main!(benches);
