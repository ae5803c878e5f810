//! Benchmarks for sidebar tree building.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sitenav_sidebar::{Document, OrderingPolicy, SidebarBuilder};

/// Create a document collection with the given depth and breadth.
fn create_documents(depth: usize, breadth: usize) -> Vec<Document> {
    fn create_level(prefix: &str, current_depth: usize, max_depth: usize, breadth: usize, out: &mut Vec<Document>) {
        for i in 0..breadth {
            let slug = if prefix.is_empty() {
                format!("section-{i}")
            } else {
                format!("{prefix}/section-{i}")
            };
            out.push(Document::new(slug.clone()));
            if current_depth < max_depth {
                create_level(&slug, current_depth + 1, max_depth, breadth, out);
            }
        }
    }

    let mut documents = Vec::new();
    create_level("", 1, depth, breadth, &mut documents);
    documents
}

fn bench_build_sidebar(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_sidebar");

    for (depth, breadth) in [(2, 5), (3, 5), (4, 4)] {
        let documents = create_documents(depth, breadth);
        let builder = SidebarBuilder::new("/docs", OrderingPolicy::new());

        group.bench_with_input(
            BenchmarkId::new("no_policy", documents.len()),
            &documents,
            |b, docs| b.iter(|| builder.build(docs)),
        );
    }

    group.finish();
}

fn bench_build_sidebar_with_policy(c: &mut Criterion) {
    let documents = create_documents(3, 5);
    // Reverse the top level so every segment hits the rule path.
    let policy = OrderingPolicy::from_rules([(
        "",
        (0..5).rev().map(|i| format!("section-{i}")).collect::<Vec<_>>(),
    )]);
    let builder = SidebarBuilder::new("/docs", policy);

    let mut group = c.benchmark_group("build_sidebar_policy");
    group.bench_function("top_level_rule", |b| b.iter(|| builder.build(&documents)));
    group.finish();
}

criterion_group!(benches, bench_build_sidebar, bench_build_sidebar_with_policy);
criterion_main!(benches);
