//! Benchmarks for TypeRegistry lookups.
//!
//! Measures direct resolution (user mapping, builtin fallback, nullable
//! unwrap, miss) and extension enumeration against a populated registry.
//!
//! ## Profiling with Puffin
//!
//! ```bash
//! cargo bench --features profile-with-puffin
//! ```

use criterion::{Criterion, criterion_group, criterion_main};
use graph_types::prelude::*;
use std::hint::black_box;

#[cfg(feature = "profile-with-puffin")]
fn setup_profiler() {
    puffin::set_scopes_on(true);
}

#[cfg(not(feature = "profile-with-puffin"))]
fn setup_profiler() {}

#[cfg(feature = "profile-with-puffin")]
fn end_profiling_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}

#[cfg(not(feature = "profile-with-puffin"))]
fn end_profiling_frame() {}

struct Article;
impl Host for Article {}

struct ArticleGraphType;
impl SchemaType for ArticleGraphType {}

struct Seo;
impl Host for Seo {}

struct Audit;
impl Host for Audit {}

const NAMED_TYPES: usize = 500;

/// Registry with one typed mapping, a few hundred name-keyed mappings and a
/// couple of extensions.
fn populated_registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry
        .add_type::<Article, ArticleGraphType>()
        .expect("fresh registry");

    for i in 0..NAMED_TYPES {
        let name: &'static str = Box::leak(format!("bench::Type{i}").into_boxed_str());
        registry
            .add(HostType::named(name), Descriptor::builtin(name))
            .expect("unique names");
    }

    registry.extend_type::<Article, Seo>();
    registry.extend_type::<Article, Audit>();
    registry
}

fn bench_lookups(c: &mut Criterion) {
    setup_profiler();
    let registry = populated_registry();
    let mut group = c.benchmark_group("get");

    group.bench_function("user_mapping", |b| {
        b.iter(|| {
            let result = registry.get(black_box(Article::host_type()));
            end_profiling_frame();
            result
        })
    });

    group.bench_function("builtin", |b| {
        b.iter(|| registry.get(black_box(i64::host_type())))
    });

    group.bench_function("nullable_builtin", |b| {
        b.iter(|| registry.get(black_box(<Option<i64>>::host_type())))
    });

    group.bench_function("miss", |b| {
        b.iter(|| registry.get(black_box(Seo::host_type())))
    });

    group.finish();
}

fn bench_extensions(c: &mut Criterion) {
    let registry = populated_registry();

    c.bench_function("get_extending", |b| {
        b.iter(|| registry.get_extending(black_box(Article::host_type())).len())
    });
}

criterion_group!(benches, bench_lookups, bench_extensions);
criterion_main!(benches);
