use std::collections::{BTreeMap, HashMap};

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

use treetable::{CharMap, Content};

/// Generates keys for the map
///
/// The keys are drawn randomly from the printable ASCII range so the trees
/// under test are reasonably bushy rather than degenerate. Duplicates are
/// possible and exercise the replace path of `insert`.
fn make_keys(count: usize) -> Vec<char> {
    let mut rng = StdRng::seed_from_u64(2_210);
    (0..count)
        .filter_map(|_| std::char::from_u32(rng.gen_range(0x21..0x7f)))
        .collect()
}

pub fn bench_inserts(c: &mut Criterion) {
    const INSERTS: &[usize] = &[50, 100, 500, 1000];

    let mut group = c.benchmark_group("insert");
    for inserts in INSERTS {
        group.bench_with_input(BenchmarkId::new("CharMap", inserts), inserts, |b, &inserts| {
            let keys = make_keys(inserts);
            b.iter(|| {
                let mut map = CharMap::new();
                for (i, &key) in keys.iter().enumerate() {
                    black_box(map.insert(key, Content::Integer(i as i32)));
                }
                map
            })
        });
        group.bench_with_input(BenchmarkId::new("BTreeMap", inserts), inserts, |b, &inserts| {
            let keys = make_keys(inserts);
            b.iter(|| {
                let mut map = BTreeMap::new();
                for (i, &key) in keys.iter().enumerate() {
                    black_box(map.insert(key, Content::Integer(i as i32)));
                }
                map
            })
        });
        group.bench_with_input(BenchmarkId::new("HashMap", inserts), inserts, |b, &inserts| {
            let keys = make_keys(inserts);
            b.iter(|| {
                let mut map = HashMap::new();
                for (i, &key) in keys.iter().enumerate() {
                    black_box(map.insert(key, Content::Integer(i as i32)));
                }
                map
            })
        });
    }
    group.finish();
}

pub fn bench_gets(c: &mut Criterion) {
    const GETS: &[usize] = &[50, 100, 500, 1000];

    let mut group = c.benchmark_group("get");
    for gets in GETS {
        group.bench_with_input(BenchmarkId::new("CharMap", gets), gets, |b, &gets| {
            let keys = make_keys(gets);
            let mut map = CharMap::new();
            for (i, &key) in keys.iter().enumerate() {
                map.insert(key, Content::Integer(i as i32));
            }
            b.iter(|| {
                // Get keys in the opposite order to how they were inserted
                for &key in keys.iter().rev() {
                    black_box(map.get(key));
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("BTreeMap", gets), gets, |b, &gets| {
            let keys = make_keys(gets);
            let mut map = BTreeMap::new();
            for (i, &key) in keys.iter().enumerate() {
                map.insert(key, Content::Integer(i as i32));
            }
            b.iter(|| {
                for key in keys.iter().rev() {
                    black_box(map.get(key));
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("HashMap", gets), gets, |b, &gets| {
            let keys = make_keys(gets);
            let mut map = HashMap::new();
            for (i, &key) in keys.iter().enumerate() {
                map.insert(key, Content::Integer(i as i32));
            }
            b.iter(|| {
                for key in keys.iter().rev() {
                    black_box(map.get(key));
                }
            })
        });
    }
    group.finish();
}

pub fn bench_traversals(c: &mut Criterion) {
    const SIZES: &[usize] = &[50, 500];

    let mut group = c.benchmark_group("inorder traversal");
    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("CharMap", size), size, |b, &size| {
            let keys = make_keys(size);
            let mut map = CharMap::new();
            for (i, &key) in keys.iter().enumerate() {
                map.insert(key, Content::Integer(i as i32));
            }
            b.iter(|| {
                let mut items: Vec<(char, Content)> = Vec::with_capacity(map.len());
                map.inorder(&mut items);
                items
            })
        });
        group.bench_with_input(BenchmarkId::new("BTreeMap", size), size, |b, &size| {
            let keys = make_keys(size);
            let mut map = BTreeMap::new();
            for (i, &key) in keys.iter().enumerate() {
                map.insert(key, Content::Integer(i as i32));
            }
            b.iter(|| {
                let items: Vec<(char, Content)> = map
                    .iter()
                    .map(|(&key, content)| (key, content.clone()))
                    .collect();
                items
            })
        });
    }
    group.finish();
}

criterion_group!(benches,
    bench_inserts,
    bench_gets,
    bench_traversals,
);

criterion_main!(benches);
