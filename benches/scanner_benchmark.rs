use bambot::scanner::SnippetLimits;
use bambot::{truncate_lines_count, truncate_lines_width, RuleSet, Scanner};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// Noisy CI output with no failure signature in it
fn noise(lines: usize) -> String {
    let mut log = String::with_capacity(lines * 64);
    for i in 0..lines {
        match i % 4 {
            0 => log.push_str(&format!("[INFO] Downloading artifact {i} from central\n")),
            1 => log.push_str(&format!("  Compiling module_{i} v0.{i}.0\n")),
            2 => log.push_str(&format!("ok      acme/pkg{i}     0.{i:03}s\n")),
            _ => log.push_str(&format!("step {i}: {}\n", "x".repeat(40))),
        }
    }
    log
}

fn benchmark_rule_set_compilation(c: &mut Criterion) {
    c.bench_function("rule_set_builtin", |b| {
        b.iter(|| black_box(RuleSet::builtin().unwrap()));
    });
}

fn benchmark_scan_no_match(c: &mut Criterion) {
    let scanner = Scanner::new(RuleSet::builtin().unwrap());
    let mut group = c.benchmark_group("scan_no_match");

    for lines in [1_000, 10_000, 100_000].iter() {
        let log = noise(*lines);
        group.bench_with_input(BenchmarkId::from_parameter(lines), &log, |b, log| {
            b.iter(|| black_box(scanner.scan(log)));
        });
    }

    group.finish();
}

fn benchmark_scan_signature_at_end(c: &mut Criterion) {
    let scanner = Scanner::new(RuleSet::builtin().unwrap());
    let mut group = c.benchmark_group("scan_signature_at_end");

    for lines in [1_000, 10_000, 100_000].iter() {
        let mut log = noise(*lines);
        log.push_str("Traceback (most recent call last):\n  File \"main.py\", line 1\nValueError: boom\n");
        group.bench_with_input(BenchmarkId::from_parameter(lines), &log, |b, log| {
            b.iter(|| black_box(scanner.scan(log)));
        });
    }

    group.finish();
}

fn benchmark_scan_many_generic_errors(c: &mut Criterion) {
    let scanner = Scanner::new(RuleSet::builtin().unwrap());
    let mut log = noise(10_000);
    for i in 0..1_000 {
        log.push_str(&format!("error: retry {i} failed\n"));
    }

    c.bench_function("scan_many_generic_errors", |b| {
        b.iter(|| black_box(scanner.scan(&log)));
    });
}

fn benchmark_snippet_bounding(c: &mut Criterion) {
    let snippet = noise(500);
    let limits = SnippetLimits::default();

    c.bench_function("truncate_lines_count", |b| {
        b.iter(|| black_box(truncate_lines_count(&snippet, limits.max_lines)));
    });
    c.bench_function("truncate_lines_width", |b| {
        b.iter(|| black_box(truncate_lines_width(&snippet, 20)));
    });
    c.bench_function("snippet_limits_apply", |b| {
        b.iter(|| black_box(limits.apply(&snippet)));
    });
}

criterion_group!(
    benches,
    benchmark_rule_set_compilation,
    benchmark_scan_no_match,
    benchmark_scan_signature_at_end,
    benchmark_scan_many_generic_errors,
    benchmark_snippet_bounding,
);
criterion_main!(benches);
