// benches/display.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use mention_check::{
    check::{ResultLog, ResultRecord},
    core::text,
    csv,
};

fn sample_log(n: usize) -> ResultLog {
    let mut log = ResultLog::new();
    for i in 0..n {
        log.insert(ResultRecord::new(
            format!("Recommend the best CRM software #{i}\nfor enterprise"),
            r#"Sales"force""#,
            if i % 2 == 0 { "Yes" } else { "No" },
            format!("{}", i % 10),
            "x".repeat(500),
        ));
    }
    log
}

fn bench_display(c: &mut Criterion) {
    let lines = "a line of model output\n".repeat(40);
    let wide = "é".repeat(2_000);

    c.bench_function("truncate_lines", |b| {
        b.iter(|| text::truncate(black_box(&lines)).len())
    });

    c.bench_function("truncate_chars", |b| {
        b.iter(|| text::truncate(black_box(&wide)).len())
    });

    let log = sample_log(1_000);
    c.bench_function("export_csv_1k", |b| {
        b.iter(|| csv::export_csv(black_box(&log)).map(|v| v.len()))
    });
}

criterion_group!(benches, bench_display);
criterion_main!(benches);
