use criterion::{Criterion, criterion_group, criterion_main};
use regress::config::RegressConfig;
use regress::cycle;
use std::hint::black_box;

const MOCK_CONFIG: &str = r#"
source_dir = "lib"
build_dir = "out"
build_types = ["Debug", "Release", "RelWithDebInfo"]
configure_args = ["-GNinja", "-Wno-dev"]

[tools]
cmake = "/opt/cmake/bin/cmake"
ctest = "/opt/cmake/bin/ctest"
"#;

fn bench_config_parse(c: &mut Criterion) {
    c.bench_function("parse_regress_toml", |b| {
        b.iter(|| {
            let _: RegressConfig = toml::from_str(black_box(MOCK_CONFIG)).unwrap();
        })
    });
}

fn bench_tool_resolution(c: &mut Criterion) {
    let config: RegressConfig = toml::from_str(MOCK_CONFIG).unwrap();
    c.bench_function("resolve_tools", |b| {
        b.iter(|| {
            let _ = black_box(&config).tools.cmake();
            let _ = black_box(&config).tools.ctest();
        })
    });
}

fn bench_step_args(c: &mut Criterion) {
    let config: RegressConfig = toml::from_str(MOCK_CONFIG).unwrap();

    c.bench_function("configure_args", |b| {
        b.iter(|| cycle::configure_args(black_box(&config), black_box(Some("Debug"))))
    });

    c.bench_function("test_args", |b| {
        b.iter(|| cycle::test_args(black_box(16), black_box(true)))
    });
}

criterion_group!(benches, bench_config_parse, bench_tool_resolution, bench_step_args);
criterion_main!(benches);
