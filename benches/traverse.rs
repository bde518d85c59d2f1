use std::time::Duration;

use criterion::measurement::WallTime;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkGroup, BenchmarkId, Criterion};
use json_dom::{Document, DomNode, JsonValue, Node};
use serde_json::{json, Value};

fn make_repos(count: usize) -> Value {
    let repos: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "id": i,
                "name": format!("repo-{i}"),
                "full name": format!("org/repo-{i}"),
                "private": i % 10 == 0,
                "language": if i % 5 == 0 { Value::Null } else { json!("Rust") },
                "topics": [format!("topic-{}", i % 10), format!("topic-{}", (i + 3) % 10)],
                "owner": {"login": format!("user-{}", i % 100), "site_admin": i % 97 == 0},
            })
        })
        .collect();
    json!({ "repos": repos })
}

fn make_tree(depth: usize, breadth: usize) -> Value {
    if depth == 0 {
        return json!(depth);
    }
    let mut map = serde_json::Map::new();
    for i in 0..breadth {
        map.insert(format!("node{i}"), make_tree(depth - 1, breadth));
    }
    Value::Object(map)
}

fn count_nodes<'d, V: JsonValue>(node: Node<'d, V>) -> usize {
    let mut total = 1;
    if let Some(attributes) = node.attributes() {
        total += attributes.len();
    }
    for child in node.child_nodes().iter() {
        total += count_nodes(child);
    }
    total
}

fn bench_value(group: &mut BenchmarkGroup<'_, WallTime>, name: &str, value: &Value) {
    group.bench_function(BenchmarkId::new("first_walk", name), |b| {
        b.iter(|| {
            let doc = Document::new("root", black_box(value));
            black_box(count_nodes(Node::Element(doc.document_element())));
        });
    });

    let doc = Document::new("root", value);
    count_nodes(Node::Element(doc.document_element()));
    group.bench_function(BenchmarkId::new("cached_walk", name), |b| {
        b.iter(|| black_box(count_nodes(Node::Element(doc.document_element()))));
    });

    group.bench_function(BenchmarkId::new("wildcard_search", name), |b| {
        b.iter(|| black_box(doc.get_elements_by_tag_name(Some("*")).len()));
    });
}

fn criterion_config() -> Criterion {
    if std::env::var("JSON_DOM_BENCH_MINIMAL").is_ok() {
        Criterion::default()
            .warm_up_time(Duration::from_secs(0))
            .measurement_time(Duration::from_millis(10))
            .sample_size(10)
            .nresamples(1)
    } else {
        Criterion::default()
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let repos = make_repos(500);
    let tree = make_tree(5, 4);

    let mut traverse = c.benchmark_group("traverse");
    bench_value(&mut traverse, "repos", &repos);
    bench_value(&mut traverse, "deep_tree", &tree);
    traverse.finish();
}

criterion_group! {
    name = benches;
    config = criterion_config();
    targets = criterion_benchmark
}
criterion_main!(benches);
