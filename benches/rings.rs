#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};
use wrapbuf::{DuplexRing, ReadOnlyRing, WriteOnlyRing};

fn duplex_benchmark(c: &mut Criterion) {
    c.bench_function("duplex_write_read_wrapping", |b| {
        let mut memory = [0u8; 0x1000];
        let mut ring = DuplexRing::new(&mut memory).unwrap();
        let data = [1; 0x300];
        let mut dest = [0; 0x300];

        // Misalign the cursors so most transfers straddle the end of the memory.
        ring.write(&[0; 0x80]);

        b.iter(|| {
            for _ in 0..0x10 {
                ring.write(black_box(&data));
                ring.read(black_box(&mut dest));
            }
        })
    });

    c.bench_function("duplex_zero_copy", |b| {
        let mut memory = [0u8; 0x1000];
        let mut ring = DuplexRing::new(&mut memory).unwrap();

        b.iter(|| {
            for _ in 0..0x10 {
                let span = ring.write_slice();
                let len = span.len().min(0x300);
                span[..len].iter_mut().for_each(|byte| *byte = 1);
                ring.commit(len);

                let len = black_box(ring.read_slice()).len();
                ring.discard(len);
            }
        })
    });
}

fn read_only_benchmark(c: &mut Criterion) {
    c.bench_function("read_only_read", |b| {
        let memory = [7u8; 0x1000];
        let mut ring = ReadOnlyRing::new(&memory).unwrap();
        let mut dest = [0; 0x300];

        b.iter(|| {
            for _ in 0..0x10 {
                ring.read(black_box(&mut dest));
            }
        })
    });
}

fn write_only_benchmark(c: &mut Criterion) {
    c.bench_function("write_only_oversized_write", |b| {
        let mut memory = [0u8; 0x100];
        let mut ring = WriteOnlyRing::new(&mut memory).unwrap();
        let data = [1; 0x1000];

        b.iter(|| ring.write(black_box(&data)))
    });
}

criterion_group!(benches, duplex_benchmark, read_only_benchmark, write_only_benchmark);
criterion_main!(benches);
