use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tiger_complete::{complete, compute_block_path, CompletionOptions, Registry};

/// Build a scripted effects file with `count` definitions, each with a few nested blocks.
fn sample_document(count: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for i in 0..count {
        lines.push(format!("effect_{i} = {{"));
        lines.push("\tevery_vassal = {".to_owned());
        lines.push("\t\tlimit = { is_adult = yes }".to_owned());
        lines.push("\t\tadd_opinion = {".to_owned());
        lines.push("\t\t\ttarget = root".to_owned());
        lines.push("\t\t\tmodifier = friendly_opinion # \"quoted { brace\"".to_owned());
        lines.push("\t\t}".to_owned());
        lines.push("\t}".to_owned());
        lines.push("}".to_owned());
    }
    lines.push("last_effect = {".to_owned());
    lines.push("\tcapital_province = {".to_owned());
    lines.push("\t\tadd_".to_owned());
    lines
}

fn bench_rescan(c: &mut Criterion) {
    let registry = Registry::builtin();
    let options = CompletionOptions::default();

    let mut group = c.benchmark_group("rescan");
    for count in [10, 100, 1000] {
        let lines = sample_document(count);
        let line = lines.len() - 1;
        group.bench_with_input(BenchmarkId::new("block_path", count), &lines, |b, lines| {
            b.iter(|| compute_block_path(lines, line, 6));
        });
        group.bench_with_input(BenchmarkId::new("complete", count), &lines, |b, lines| {
            b.iter(|| complete(registry, lines, line, 6, "scripted_effect", &options));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rescan);
criterion_main!(benches);
