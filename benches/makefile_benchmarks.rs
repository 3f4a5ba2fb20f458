//! End-to-end pipeline benchmarks: the full `portfmt` reformat path
//! (parse, mandatory passes, print) and the `portclippy` lint path,
//! at small/medium/large scale.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use portfmt::builder::parse_str;
use portfmt::edit::{self, run_mandatory_passes};
use portfmt::format;
use portfmt::settings::ParserSettings;
use std::time::Duration;

fn generate_port(targets: usize) -> String {
    let mut out = String::new();
    out.push_str("PORTNAME=\tgenerated\n");
    out.push_str("PORTVERSION=\t1.0\n");
    out.push_str("CATEGORIES=\tdevel\n");
    out.push_str("MAINTAINER=\tports@FreeBSD.org\n");
    out.push_str("COMMENT=\tGenerated port\n\n");
    out.push_str("USES=\tgmake pkgconfig\n\n");
    for i in 0..targets {
        out.push_str(&format!(
            "post-install-{i}-on:\n\t${{ECHO_CMD}} step{i}\n\t${{ECHO_CMD}} step{i}\n\n"
        ));
    }
    out.push_str(".include <bsd.port.mk>\n");
    out
}

fn reformat(text: &str, settings: &ParserSettings) -> String {
    let mut ast = parse_str(text).unwrap();
    run_mandatory_passes(&mut ast).unwrap();
    format::print(&ast, settings)
}

fn bench_reformat_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("reformat_pipeline");
    group.measurement_time(Duration::from_secs(10));
    let settings = ParserSettings::default();

    for (name, targets) in [("small", 5), ("medium", 50), ("large", 200)] {
        let text = generate_port(targets);
        group.bench_with_input(BenchmarkId::new("reformat", name), &text, |b, text| {
            b.iter(|| reformat(text, &settings));
        });
    }
    group.finish();
}

fn bench_lint_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("lint_pipeline");
    group.measurement_time(Duration::from_secs(10));

    for (name, targets) in [("small", 5), ("medium", 50), ("large", 200)] {
        let text = generate_port(targets);
        group.bench_with_input(BenchmarkId::new("lint", name), &text, |b, text| {
            b.iter(|| {
                let ast = parse_str(text).unwrap();
                let mut findings = edit::lint_bsd_port(&ast);
                findings.extend(edit::lint_clones(&ast));
                findings.extend(edit::lint_commented_portrevision(&ast));
                findings.extend(edit::lint_order(&ast));
                findings
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_reformat_pipeline, bench_lint_pipeline);
criterion_main!(benches);
