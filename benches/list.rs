use std::collections::LinkedList;

use blockseq::List;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn criterion_benchmarks(c: &mut Criterion) {
    c.bench_function("bench_list_new", |b| {
        b.iter(|| {
            let list: List<i32> = List::new();
            black_box(list);
        })
    });

    c.bench_function("bench_list_push_both_1000", |b| {
        b.iter(|| {
            let mut list = List::new();
            for i in 0..500 {
                list.push_back(i);
                list.push_front(i);
            }
            black_box(list);
        })
    });

    c.bench_function("bench_linked_list_push_both_1000", |b| {
        b.iter(|| {
            let mut list = LinkedList::new();
            for i in 0..500 {
                list.push_back(i);
                list.push_front(i);
            }
            black_box(list);
        })
    });

    let list: List<_> = (0..1000).collect();
    c.bench_function("bench_list_iter_1000", |b| {
        b.iter(|| {
            let mut sum = 0;
            for &i in &list {
                sum += i;
            }
            black_box(sum);
        })
    });

    let mut list: List<u64> = (0..1000).collect();
    c.bench_function("bench_list_churn_1000", |b| {
        b.iter(|| {
            for i in 0..1000 {
                list.push_back(i);
                black_box(list.pop_front());
            }
        })
    });

    let list: List<u32> = (0..1000).collect();
    c.bench_function("bench_list_clone_1000", |b| b.iter(|| black_box(list.clone())));
}

criterion_group!(benches, criterion_benchmarks);
criterion_main!(benches);
