use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_row_grouping::grouping::{group_by, unique_by};
use rust_row_grouping::types::{DataSet, DataType, Field, Schema, Value};

fn sales_dataset(rows: usize, distinct_regions: usize) -> DataSet {
    let schema = Schema::new(vec![
        Field::new("region", DataType::Int64),
        Field::new("amount", DataType::Float64),
    ]);
    let records = (0..rows)
        .map(|i| {
            vec![
                Value::Int64((i % distinct_regions) as i64),
                Value::Float64(i as f64 * 0.5),
            ]
        })
        .collect();
    DataSet::from_rows(schema, records)
}

fn bench_group_by(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_by");
    for &(rows, keys) in &[(1_000usize, 10usize), (10_000, 100), (10_000, 5_000)] {
        let ds = sales_dataset(rows, keys);
        group.bench_function(format!("rows={rows}/keys={keys}"), |b| {
            b.iter(|| group_by(black_box(&ds), &["region"], false).unwrap())
        });
    }
    group.finish();
}

fn bench_unique_by(c: &mut Criterion) {
    let mut group = c.benchmark_group("unique_by");
    for &(rows, keys) in &[(1_000usize, 10usize), (10_000, 100)] {
        let ds = sales_dataset(rows, keys);
        group.bench_function(format!("rows={rows}/keys={keys}"), |b| {
            b.iter(|| unique_by(black_box(&ds), &["region"]).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_group_by, bench_unique_by);
criterion_main!(benches);
