use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use widgets::{Grid, List, ListData, ListKind, ListMap, PopulateOptions, Table, Value};

const SMALL_ROWS: usize = 16;
const LARGE_ROWS: usize = 5_000;
const COLS: usize = 8;

fn make_grid(rows: usize, cols: usize, salt: i64) -> Grid {
    (0..rows)
        .map(|row| {
            (0..cols)
                .map(|col| Value::from((row * cols + col) as i64 + salt))
                .collect()
        })
        .collect()
}

fn make_tree(depth: usize, fanout: usize) -> ListData {
    if depth == 0 {
        return ListData::Empty;
    }
    let mut map = ListMap::new();
    for i in 0..fanout {
        map = map.entry(format!("item-{depth}-{i}"), make_tree(depth - 1, fanout));
    }
    map.into()
}

fn bench_table_build_small(c: &mut Criterion) {
    let data = make_grid(SMALL_ROWS, COLS, 0);
    c.bench_function("bench_table_build_small", |b| {
        b.iter(|| {
            let table = Table::from_data(black_box(data.clone()));
            black_box(table.row_count());
        });
    });
}

fn bench_table_repopulate_large(c: &mut Criterion) {
    let table = Table::from_data(make_grid(LARGE_ROWS, COLS, 0));
    let next = make_grid(LARGE_ROWS, COLS, 1);
    c.bench_function("bench_table_repopulate_large", |b| {
        b.iter_batched(
            || (table.clone(), next.clone()),
            |(mut table, data)| {
                let result = table.populate(Some(data), PopulateOptions::default());
                black_box(result.map(|table| table.row_count()).ok());
            },
            BatchSize::LargeInput,
        );
    });
}

fn bench_table_map_large(c: &mut Criterion) {
    let table = Table::from_data(make_grid(LARGE_ROWS, COLS, 0));
    c.bench_function("bench_table_map_large", |b| {
        b.iter_batched(
            || table.clone(),
            |mut table| {
                let result = table.map_table(
                    |value| {
                        value
                            .as_scalar()
                            .and_then(|s| s.as_i64())
                            .map(|n| Value::from(n + 1))
                            .ok_or("not an integer")
                    },
                    true,
                );
                black_box(result.is_ok());
            },
            BatchSize::LargeInput,
        );
    });
}

fn bench_list_nested(c: &mut Criterion) {
    let data = make_tree(4, 6);
    c.bench_function("bench_list_nested", |b| {
        b.iter(|| {
            let list = List::build(Some(ListKind::Ordered), black_box(data.clone()));
            black_box(list.map(|list| list.items().len()).ok());
        });
    });
}

criterion_group!(
    benches,
    bench_table_build_small,
    bench_table_repopulate_large,
    bench_table_map_large,
    bench_list_nested
);
criterion_main!(benches);
