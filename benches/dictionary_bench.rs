use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use polycoll::{new_dictionary, new_sorted_dictionary, Dictionary, HashDictionary};
use std::ops::ControlFlow;
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn asc(a: &String, b: &String) -> bool {
    a < b
}

fn bench_set_fresh_100k(c: &mut Criterion) {
    c.bench_function("hashed::set_fresh_100k", |b| {
        b.iter_batched(
            HashDictionary::<String, u64>::new,
            |mut d| {
                for (i, x) in lcg(1).take(100_000).enumerate() {
                    d.set(key(x), i as u64);
                }
                black_box(d)
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function("sorted::set_fresh_100k", |b| {
        b.iter_batched(
            || new_sorted_dictionary::<String, u64, _>(asc),
            |mut d| {
                for (i, x) in lcg(1).take(100_000).enumerate() {
                    d.set(key(x), i as u64);
                }
                black_box(d)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit_10k(c: &mut Criterion) {
    let keys: Vec<String> = lcg(7).take(100_000).map(key).collect();
    // Precompute 10k random query keys using LCG
    let n = keys.len();
    let mut s = 0x9e3779b97f4a7c15u64;
    let queries: Vec<String> = (0..10_000)
        .map(|_| {
            s = s.wrapping_mul(2862933555777941757).wrapping_add(3037000493);
            keys[(s as usize) % n].clone()
        })
        .collect();

    c.bench_function("hashed::get_hit_10k_on_100k", |b| {
        let mut d = new_dictionary();
        for (i, k) in keys.iter().enumerate() {
            d.set(k.clone(), i as u64);
        }
        b.iter(|| {
            for k in &queries {
                black_box(d.get(k));
            }
        })
    });

    c.bench_function("sorted::get_hit_10k_on_100k", |b| {
        let mut d = new_sorted_dictionary(asc);
        for (i, k) in keys.iter().enumerate() {
            d.set(k.clone(), i as u64);
        }
        b.iter(|| {
            for k in &queries {
                black_box(d.get(k));
            }
        })
    });
}

fn bench_delete_random_10k(c: &mut Criterion) {
    c.bench_function("sorted::delete_random_10k_of_110k", |b| {
        b.iter_batched(
            || {
                let mut d = new_sorted_dictionary(asc);
                let keys: Vec<String> = lcg(5).take(110_000).map(key).collect();
                for (i, k) in keys.iter().enumerate() {
                    d.set(k.clone(), i as u64);
                }
                let mut s = 0x9e3779b97f4a7c15u64;
                let to_delete: Vec<String> = (0..10_000)
                    .map(|_| {
                        s = s.wrapping_mul(2862933555777941757).wrapping_add(3037000493);
                        keys[(s as usize) % keys.len()].clone()
                    })
                    .collect();
                (d, to_delete)
            },
            |(mut d, to_delete)| {
                for k in &to_delete {
                    let _ = d.delete(k);
                }
                black_box(d)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_for_each_and_keys(c: &mut Criterion) {
    let mut d = new_sorted_dictionary(|a: &u64, b: &u64| a < b);
    for (i, x) in lcg(999).take(100_000).enumerate() {
        d.set(x, i as u64);
    }

    c.bench_function("sorted::for_each_all_100k", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            let _ = d.for_each(|p| {
                sum = sum.wrapping_add(*p.into_second());
                ControlFlow::<()>::Continue(())
            });
            black_box(sum)
        })
    });

    c.bench_function("sorted::keys_to_vec_100k", |b| {
        b.iter(|| black_box(polycoll::to_vec(&d.keys())))
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(12)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1))
}

criterion_group! {
    name = benches_set;
    config = bench_config();
    targets = bench_set_fresh_100k
}
criterion_group! {
    name = benches_ops;
    config = bench_config();
    targets = bench_get_hit_10k,
              bench_delete_random_10k,
              bench_for_each_and_keys
}
criterion_main!(benches_set, benches_ops);
