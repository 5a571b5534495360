//! # Address Table Benchmarks
//!
//! Conditions:
//! - Full network (all 254 unicast addresses claimed)
//! - Free-address search wrapping around the whole range
//! - Arbitration churn on a single contested address

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use j1939_network::{Address, AddressTable, Name};

/// Table with `count` names holding addresses `0..count`.
fn populated_table(count: u8) -> AddressTable {
    let table = AddressTable::with_interface("vcan0");
    for value in 0..count {
        table.insert(Name::new(1000 + u64::from(value)), Address::new(value));
    }
    table
}

pub fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("address_table/insert");
    group.measurement_time(Duration::from_secs(5));

    group.throughput(Throughput::Elements(254));
    group.bench_function("fill_network", |b| {
        b.iter(|| black_box(populated_table(254).address_count()))
    });

    // Alternating claims for one address, each one an eviction
    group.throughput(Throughput::Elements(2));
    group.bench_function("contested_address", |b| {
        let table = AddressTable::new();
        let mut low = u64::MAX / 2;
        b.iter(|| {
            low -= 2;
            table.insert(Name::new(low + 1), Address::new(0x80));
            black_box(table.insert(Name::new(low), Address::new(0x80)))
        })
    });

    group.finish();
}

pub fn bench_find_address(c: &mut Criterion) {
    let mut group = c.benchmark_group("address_table/find_address");
    group.measurement_time(Duration::from_secs(5));

    for claimed in [0u8, 64, 128, 253] {
        let table = populated_table(claimed);
        group.bench_with_input(
            BenchmarkId::new("from_preferred_128", claimed),
            &table,
            |b, table| {
                b.iter(|| black_box(table.find_address(Name::new(1), Address::new(128), false)))
            },
        );
    }

    // Worst case: nothing qualifies, both passes scan everything
    let full = populated_table(254);
    group.bench_function("full_network_no_match", |b| {
        b.iter(|| black_box(full.find_address(Name::new(u64::MAX), Address::new(0), true)))
    });

    group.finish();
}

pub fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("address_table/queries");
    let table = populated_table(254);

    group.bench_function("get_name", |b| {
        b.iter(|| black_box(table.get_name(Address::new(0x80))))
    });
    group.bench_function("get_address", |b| {
        b.iter(|| black_box(table.get_address(Name::new(1000 + 0x80))))
    });
    group.bench_function("snapshot", |b| b.iter(|| black_box(table.snapshot().len())));

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_insert(c);
    bench_find_address(c);
    bench_queries(c);
}
