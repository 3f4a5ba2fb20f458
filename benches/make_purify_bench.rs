//! Mandatory sanitizing-pass throughput: comment normalization, CMake
//! argument sanitizing, token dedup, adjacent-variable collapsing and
//! blank-line squashing, run in the fixed order `portfmt`/`portedit`
//! apply before printing.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use portfmt::builder::parse_str;
use portfmt::edit::run_mandatory_passes;
use std::time::Duration;

const MESSY_PORT: &str = r#"PORTNAME=	example
PORTVERSION=	1.2.3
CATEGORIES=	devel
MAINTAINER=	ports@FreeBSD.org
COMMENT=	An unsanitized example port
#comment without a leading space


USES=		cmake gmake gmake
USES+=		pkgconfig
USES+=		pkgconfig

CMAKE_ARGS=	-D BUILD_DOCS=ON
CMAKE_ARGS+=	-D  BUILD_TESTS=OFF



post-install:
	${STRIP_CMD} ${STAGEDIR}${PREFIX}/bin/example

.include <bsd.port.mk>
"#;

fn generate_messy_port(duplicate_runs: usize) -> String {
    let mut out = String::new();
    out.push_str("PORTNAME=\tgenerated\n");
    out.push_str("PORTVERSION=\t1.0\n");
    out.push_str("CATEGORIES=\tdevel\n\n");
    out.push_str("USES=\tcmake\n");
    for _ in 0..duplicate_runs {
        out.push_str("USES+=\tcmake\n");
        out.push_str("USES+=\tgmake\n");
    }
    out.push_str("\n\n.include <bsd.port.mk>\n");
    out
}

fn bench_mandatory_passes(c: &mut Criterion) {
    let mut group = c.benchmark_group("mandatory_passes");
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("messy_port", |b| {
        b.iter(|| {
            let mut ast = parse_str(MESSY_PORT).unwrap();
            run_mandatory_passes(&mut ast).unwrap();
        });
    });

    for runs in [10, 50, 100] {
        let text = generate_messy_port(runs);
        group.bench_with_input(
            BenchmarkId::new("generated", format!("{runs}_append_runs")),
            &text,
            |b, text| {
                b.iter(|| {
                    let mut ast = parse_str(text).unwrap();
                    run_mandatory_passes(&mut ast).unwrap();
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_mandatory_passes);
criterion_main!(benches);
