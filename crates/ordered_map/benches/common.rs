use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::apply_small_runtime_config;
use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, BenchmarkId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ordered_map::{Natural, OrderedMap, Rev, SortedVecMap, StdBTreeMap, TreeMap};

const SIZES: [usize; 4] = [1_000, 4_000, 16_000, 64_000];
const SCAN_SIZES: [usize; 3] = [100, 1_000, 10_000];
const OPS_PER_ITER: usize = 200;
const GET_HIT_RATE_PERCENT: u64 = 80;

#[derive(Clone)]
enum ReadOp {
    Get { key: u64 },
    Successor { key: u64 },
}

#[derive(Clone)]
enum UpdateOp {
    Insert { key: u64, value: u64 },
    TryInsert { key: u64, value: u64 },
    Remove { key: u64 },
}

fn build<M>(keys: &[u64], seed: u64) -> M
where
    M: OrderedMap<Key = u64, Value = u64>,
    M::Cmp: Default,
{
    let mut init_rng = StdRng::seed_from_u64(seed);
    let mut map = M::new();
    for &k in keys {
        let v: u64 = init_rng.random();
        black_box(map.insert(k, v));
    }
    map
}

pub fn bench_read<M, T>(group: &mut BenchmarkGroup<'_, T>, label: &str)
where
    T: Measurement<Value = Duration>,
    M: OrderedMap<Key = u64, Value = u64>,
    M::Cmp: Default,
{
    for &size in &SIZES {
        apply_small_runtime_config(group);
        let base_seed = seed_base(1, size as u64);
        let keys = generate_initial_keys(size, base_seed);
        let map = build::<M>(&keys, base_seed ^ 0x11_22_33_44);

        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter_custom(|iters| {
                let mut total = Duration::ZERO;
                for iter in 0..iters {
                    let mut rng = StdRng::seed_from_u64(seed_for_iter(base_seed, iter));
                    let ops = generate_read_ops(&keys, &mut rng);
                    let start = Instant::now();
                    run_read_ops(&map, &ops);
                    total += start.elapsed();
                }
                total
            })
        });
    }
}

pub fn bench_update<M, T>(group: &mut BenchmarkGroup<'_, T>, label: &str)
where
    T: Measurement<Value = Duration>,
    M: OrderedMap<Key = u64, Value = u64>,
    M::Cmp: Default,
{
    for &size in &SIZES {
        apply_small_runtime_config(group);
        let base_seed = seed_base(2, size as u64);
        let keys = generate_initial_keys(size, base_seed);
        let mut map = build::<M>(&keys, base_seed ^ 0x55_66_77_88);

        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter_custom(|iters| {
                let mut total = Duration::ZERO;
                for iter in 0..iters {
                    let mut rng = StdRng::seed_from_u64(seed_for_iter(base_seed, iter));
                    let ops = generate_update_ops(size, base_seed, iter, &mut rng);
                    let start = Instant::now();
                    run_update_ops(&mut map, &ops);
                    black_box(map.len());
                    total += start.elapsed();
                }
                total
            })
        });
    }
}

/// Full-map passes: double every value in place, then look a value up by scan.
pub fn bench_scan<M, T>(group: &mut BenchmarkGroup<'_, T>, label: &str)
where
    T: Measurement<Value = Duration>,
    M: OrderedMap<Key = u64, Value = u64>,
    M::Cmp: Default,
{
    for &size in &SCAN_SIZES {
        apply_small_runtime_config(group);
        let base_seed = seed_base(3, size as u64);
        let keys = generate_initial_keys(size, base_seed);
        let mut map = build::<M>(&keys, base_seed ^ 0x99_AA_BB_CC);

        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter(|| {
                for v in map.values_mut() {
                    *v = v.wrapping_mul(2);
                }
                black_box(map.find_value(&black_box(0)).map(|(k, _)| *k));
            })
        });
    }
}

fn generate_initial_keys(size: usize, base_seed: u64) -> Vec<u64> {
    (0..size)
        .map(|i| mix_seed(base_seed ^ (i as u64)))
        .collect()
}

fn generate_read_ops(keys: &[u64], rng: &mut StdRng) -> Vec<ReadOp> {
    let mut ops = Vec::with_capacity(OPS_PER_ITER);
    for _ in 0..OPS_PER_ITER {
        let is_get = rng.random::<u64>() & 1 == 0;
        if is_get {
            let hit = rng.random_range(0..100) < GET_HIT_RATE_PERCENT;
            let key = if hit {
                keys[rng.random_range(0..keys.len())]
            } else {
                rng.random()
            };
            ops.push(ReadOp::Get { key });
        } else {
            ops.push(ReadOp::Successor { key: rng.random() });
        }
    }
    ops
}

fn generate_update_ops(size: usize, base_seed: u64, iter: u64, rng: &mut StdRng) -> Vec<UpdateOp> {
    let inserts = OPS_PER_ITER / 2;
    let mut inserted = Vec::with_capacity(inserts);
    let mut ops = Vec::with_capacity(OPS_PER_ITER);
    for i in 0..OPS_PER_ITER {
        if i % 2 == 0 {
            let id = (size as u64)
                .wrapping_add(iter.wrapping_mul(inserts as u64))
                .wrapping_add((i / 2) as u64);
            let key = mix_seed(base_seed ^ id);
            let value: u64 = rng.random();
            inserted.push(key);
            if rng.random::<bool>() {
                ops.push(UpdateOp::Insert { key, value });
            } else {
                ops.push(UpdateOp::TryInsert { key, value });
            }
        } else {
            let idx = rng.random_range(0..inserted.len());
            let key = inserted.swap_remove(idx);
            ops.push(UpdateOp::Remove { key });
        }
    }
    debug_assert!(inserted.is_empty());
    ops
}

fn run_read_ops<M>(map: &M, ops: &[ReadOp])
where
    M: OrderedMap<Key = u64, Value = u64>,
{
    for op in ops {
        match *op {
            ReadOp::Get { key } => {
                black_box(map.get(&key).copied());
            }
            ReadOp::Successor { key } => {
                black_box(map.iter_after(&key).next().map(|(k, v)| (*k, *v)));
            }
        }
    }
}

fn run_update_ops<M>(map: &mut M, ops: &[UpdateOp])
where
    M: OrderedMap<Key = u64, Value = u64>,
{
    for op in ops {
        match *op {
            UpdateOp::Insert { key, value } => {
                black_box(map.insert(key, value));
            }
            UpdateOp::TryInsert { key, value } => {
                black_box(map.try_insert(key, value).1);
            }
            UpdateOp::Remove { key } => {
                black_box(map.remove(&key));
            }
        }
    }
}

fn seed_base(workload_id: u64, size: u64) -> u64 {
    mix_seed(0x0DDB_A11A_2026_0000_u64 ^ (workload_id << 48) ^ size)
}

fn seed_for_iter(base: u64, iter: u64) -> u64 {
    mix_seed(base ^ iter.wrapping_mul(SEED_MIX))
}

const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

type Desc = Rev<Natural<u64>>;

pub fn bench_all_read<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    bench_read::<StdBTreeMap<u64, u64>, _>(group, "std_btree");
    bench_read::<TreeMap<u64, u64>, _>(group, "tree");
    bench_read::<TreeMap<u64, u64, Desc>, _>(group, "tree_desc");
    bench_read::<SortedVecMap<u64, u64>, _>(group, "sorted_vec");
}

pub fn bench_all_update<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    bench_update::<StdBTreeMap<u64, u64>, _>(group, "std_btree");
    bench_update::<TreeMap<u64, u64>, _>(group, "tree");
    bench_update::<TreeMap<u64, u64, Desc>, _>(group, "tree_desc");
    bench_update::<SortedVecMap<u64, u64>, _>(group, "sorted_vec");
}

pub fn bench_all_scan<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    bench_scan::<StdBTreeMap<u64, u64>, _>(group, "std_btree");
    bench_scan::<TreeMap<u64, u64>, _>(group, "tree");
    bench_scan::<SortedVecMap<u64, u64>, _>(group, "sorted_vec");
}
