use check_pause::{filter, Check, MatchSpec};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample_checks() -> Vec<Check> {
    let envs = ["prod", "staging", "dev", "canary"];
    let services = ["api", "web", "checkout", "Search", "AUTH", "billing"];
    (0..2000u64)
        .map(|i| {
            let env = envs[(i as usize) % envs.len()];
            let svc = services[(i as usize) % services.len()];
            Check::new(i + 1, format!("{}-{}-{}", svc, env, i))
        })
        .collect()
}

fn filter_benchmark(c: &mut Criterion) {
    let checks = sample_checks();
    let insensitive = MatchSpec::new(["api", "checkout", "auth"], false);
    let sensitive = MatchSpec::new(["api", "checkout", "auth"], true);

    c.bench_function("filter_case_insensitive", |b| {
        b.iter(|| black_box(filter(black_box(&checks), black_box(&insensitive))))
    });

    c.bench_function("filter_case_sensitive", |b| {
        b.iter(|| black_box(filter(black_box(&checks), black_box(&sensitive))))
    });
}

criterion_group!(benches, filter_benchmark);
criterion_main!(benches);
