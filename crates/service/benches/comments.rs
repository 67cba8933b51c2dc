use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use models::CommentDraft;
use service::comments::rules;
use service::comments::service::{is_unique, CommentService};
use service::storage::mock::MemoryStore;

fn draft(i: usize) -> CommentDraft {
    CommentDraft {
        name: Some(format!("User {i}")),
        email: Some(format!("user{i}@example.com")),
        body: Some("Benchmark comment body".into()),
        post_id: Some(1),
    }
}

fn bench_validation(c: &mut Criterion) {
    let candidate = draft(0);
    c.bench_function("comments_rule_table", |b| {
        b.iter(|| {
            assert!(rules::first_violation(&candidate).is_none());
        });
    });
}

fn bench_duplicate_scan(c: &mut Criterion) {
    let store = Arc::new(MemoryStore::default());
    let svc = CommentService::new(store.clone());

    // pre-fill the collection outside of the benchmark using a tokio runtime
    let rt = tokio::runtime::Runtime::new().unwrap();
    for i in 0..1_000 {
        let _ = rt.block_on(svc.create(draft(i)));
    }
    let existing = store.snapshot();
    let candidate = draft(1_000);

    c.bench_function("comments_duplicate_scan_1k", |b| {
        b.iter(|| {
            assert!(is_unique(&candidate, &existing));
        });
    });
}

fn bench_create(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("comments_create_in_memory", |b| {
        let svc = CommentService::new(Arc::new(MemoryStore::default()));
        let mut i = 0usize;
        b.iter(|| {
            i += 1;
            let _ = rt.block_on(svc.create(draft(i))).unwrap();
        });
    });
}

criterion_group!(benches, bench_validation, bench_duplicate_scan, bench_create);
criterion_main!(benches);
