//! Tokenizer + AST builder throughput across representative port
//! `Makefile` sizes.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use portfmt::builder::parse_str;
use std::time::Duration;

const SIMPLE_PORT: &str = r#"PORTNAME=	example
PORTVERSION=	1.0
CATEGORIES=	devel
MAINTAINER=	ports@FreeBSD.org
COMMENT=	Example port

USES=		gmake
GNU_CONFIGURE=	yes

.include <bsd.port.mk>
"#;

const MEDIUM_PORT: &str = r#"PORTNAME=	example
PORTVERSION=	2.4.1
CATEGORIES=	devel
MASTER_SITES=	SF
MAINTAINER=	ports@FreeBSD.org
COMMENT=	A medium-sized example port

LICENSE=	BSD2CLAUSE

USES=		gmake pkgconfig gnome
USE_GNOME=	gtk30 glib20
GNU_CONFIGURE=	yes
CONFIGURE_ARGS=	--disable-static --enable-shared

OPTIONS_DEFINE=	DOCS NLS
DOCS_CONFIGURE_ENABLE=	gtk-doc
NLS_USES=	gettext

.include "${.CURDIR}/Makefile.inc"

post-install:
	${STRIP_CMD} ${STAGEDIR}${PREFIX}/bin/example

.if ${PORT_OPTIONS:MDOCS}
post-install-DOCS-on:
	${MKDIR} ${STAGEDIR}${DOCSDIR}
.endif

.include <bsd.port.mk>
"#;

const COMPLEX_PORT: &str = r#"PORTNAME=	example
PORTVERSION=	3.9.0
PORTREVISION=	2
CATEGORIES=	www devel
MASTER_SITES=	SF/${PORTNAME}/${PORTNAME}/${PORTVERSION}
DISTNAME=	${PORTNAME}-${PORTVERSION}

MAINTAINER=	ports@FreeBSD.org
COMMENT=	A complex example port exercising many directives

LICENSE=	APACHE20 MIT
LICENSE_COMB=	dual

LIB_DEPENDS=	libssl.so:security/openssl \
		libcurl.so:ftp/curl
BUILD_DEPENDS=	bash:shells/bash

USES=		cmake pkgconfig gnome python shebangfix
USE_GNOME=	glib20 gtk30 cairo
USE_PYTHON=	flavors
SHEBANG_FILES=	scripts/run.py

OPTIONS_DEFINE=		DOCS EXAMPLES NLS
OPTIONS_DEFAULT=	NLS
DOCS_DESC=		Build and install documentation
NLS_USES=		gettext

.for pyflavor in py39 py310 py311
USES+=	${pyflavor}
.endfor

.if ${PORT_OPTIONS:MDOCS}
CMAKE_ARGS+=	-D BUILD_DOCS=ON
.else
CMAKE_ARGS+=	-DBUILD_DOCS=OFF
.endif

do-install:
	${INSTALL_PROGRAM} ${WRKSRC}/example ${STAGEDIR}${PREFIX}/bin
	${INSTALL_DATA} ${WRKSRC}/example.conf ${STAGEDIR}${PREFIX}/etc

post-install-EXAMPLES-on:
	${MKDIR} ${STAGEDIR}${EXAMPLESDIR}
	${INSTALL_DATA} ${WRKSRC}/examples/* ${STAGEDIR}${EXAMPLESDIR}

.include <bsd.port.mk>
"#;

fn generate_port(targets: usize) -> String {
    let mut out = String::new();
    out.push_str("PORTNAME=\tgenerated\n");
    out.push_str("PORTVERSION=\t1.0\n");
    out.push_str("CATEGORIES=\tdevel\n");
    out.push_str("MAINTAINER=\tports@FreeBSD.org\n");
    out.push_str("COMMENT=\tGenerated port\n\n");
    out.push_str("USES=\tgmake\n\n");
    for i in 0..targets {
        out.push_str(&format!("post-install-{i}-on:\n\t${{ECHO_CMD}} step{i}\n\n"));
    }
    out.push_str(".include <bsd.port.mk>\n");
    out
}

fn bench_parse_by_profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("makefile_parsing");
    group.measurement_time(Duration::from_secs(10));

    for (name, text) in [
        ("simple", SIMPLE_PORT),
        ("medium", MEDIUM_PORT),
        ("complex", COMPLEX_PORT),
    ] {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse", name), &text, |b, text| {
            b.iter(|| parse_str(text));
        });
    }
    group.finish();
}

fn bench_parse_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("makefile_parsing_by_size");
    group.measurement_time(Duration::from_secs(10));

    for targets in [10, 50, 100, 200] {
        let text = generate_port(targets);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("parse", format!("{targets}_targets")),
            &text,
            |b, text| b.iter(|| parse_str(text)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_parse_by_profile, bench_parse_by_size);
criterion_main!(benches);
