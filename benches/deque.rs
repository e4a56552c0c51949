use std::collections::VecDeque;

use blockseq::Deque;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn criterion_benchmarks(c: &mut Criterion) {
    c.bench_function("bench_new", |b| {
        b.iter(|| {
            let deq: Deque<i32> = Deque::new();
            black_box(deq);
        })
    });

    c.bench_function("bench_grow_front_2500", |b| {
        b.iter(|| {
            let mut deq = Deque::new();
            for i in 0..2500 {
                deq.push_front(i);
            }
            black_box(deq);
        })
    });

    c.bench_function("bench_grow_front_2500_vecdeque", |b| {
        b.iter(|| {
            let mut deq = VecDeque::new();
            for i in 0..2500 {
                deq.push_front(i);
            }
            black_box(deq);
        })
    });

    c.bench_function("bench_grow_back_2500", |b| {
        b.iter(|| {
            let mut deq = Deque::new();
            for i in 0..2500 {
                deq.push_back(i);
            }
            black_box(deq);
        })
    });

    // pops never release blocks, so a steady queue stops allocating
    let mut deq: Deque<u64> = (0..1000).collect();
    c.bench_function("bench_queue_churn_1000", |b| {
        b.iter(|| {
            for i in 0..1000 {
                deq.push_back(i);
                black_box(deq.pop_front());
            }
        })
    });

    let deq: Deque<_> = (0..2500).collect();
    c.bench_function("bench_iter_2500", |b| {
        b.iter(|| {
            let mut sum = 0;
            for &i in &deq {
                sum += i;
            }
            black_box(sum);
        })
    });

    let mut deq: Deque<_> = (0..2500).collect();
    c.bench_function("bench_mut_iter_2500", |b| {
        b.iter(|| {
            let mut sum = 0;
            for i in &mut deq {
                sum += *i;
            }
            black_box(sum);
        })
    });

    let deq: Deque<_> = (0..2500).collect();
    c.bench_function("bench_index_2500", |b| {
        b.iter(|| {
            let mut sum = 0;
            for i in 0..deq.len() {
                sum += deq[i];
            }
            black_box(sum);
        })
    });

    let deq: Deque<_> = (0..2500).collect();
    c.bench_function("bench_try_fold", |b| {
        b.iter(|| black_box(deq.iter().try_fold(0, |a, b| Some(a + b))))
    });

    const N: usize = 1000;
    let mut array: [usize; N] = [0; N];
    for i in 0..N {
        array[i] = i;
    }
    c.bench_function("bench_from_array_1000", |b| {
        b.iter(|| {
            let deq: Deque<_> = array.into();
            black_box(deq);
        })
    });

    let mut deq: Deque<u8> = Deque::new();
    let input: &[u8] = &[128; 512];
    c.bench_function("bench_extend_bytes", |b| {
        b.iter(|| {
            deq.clear();
            deq.extend(black_box(input));
        })
    });

    let mut deq: Deque<u8> = Deque::new();
    let input = vec![128; 2500];
    c.bench_function("bench_write_bytes_2500", |b| {
        b.iter(|| {
            use std::io::Write;

            deq.clear();
            deq.write_all(black_box(&input)).unwrap();
        })
    });

    let deq: Deque<u32> = (0..2500).collect();
    c.bench_function("bench_clone_2500", |b| b.iter(|| black_box(deq.clone())));
}

criterion_group!(benches, criterion_benchmarks);
criterion_main!(benches);
