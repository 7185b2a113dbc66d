use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use rosekeep_inventory::{AgingEngine, Item};

const NAMES: [&str; 5] = [
    "Sulfuras, Hand of Ragnaros",
    "Aged Brie",
    "Backstage passes to a TAFKAL80ETC concert",
    "Conjured Mana Cake",
    "+5 Dexterity Vest",
];

/// Mixed stock cycling through every category.
fn stock(size: usize) -> Vec<Item> {
    (0..size)
        .map(|i| {
            let sell_in = (i % 25) as i32 - 5;
            let quality = (i % 51) as i32;
            Item::new(NAMES[i % NAMES.len()], sell_in, quality)
        })
        .collect()
}

fn bench_advance_one_day(c: &mut Criterion) {
    let engine = AgingEngine::standard();
    let mut group = c.benchmark_group("advance_one_day");

    for size in [10usize, 1_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || stock(size),
                |mut items| {
                    engine.advance_one_day(black_box(&mut items)).ok();
                    items
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_rule_matching(c: &mut Criterion) {
    let engine = AgingEngine::standard();
    let items = stock(NAMES.len());

    c.bench_function("rule_table_match", |b| {
        b.iter(|| {
            for item in &items {
                black_box(engine.table().match_item(black_box(item)));
            }
        })
    });
}

criterion_group!(benches, bench_advance_one_day, bench_rule_matching);
criterion_main!(benches);
