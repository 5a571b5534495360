//! # Network Manager Benchmarks
//!
//! Frame processing cost for broadcast and unicast routing with a realistic
//! number of managed controllers.

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

use j1939_network::{
    Address, AddressClaimer, AddressTable, Frame, Name, NetworkManager, RecordingClaimer,
    PGN_ADDRESS_CLAIM,
};

/// Manager with `count` controllers, each holding address `0x80 + i`.
fn managed_network(count: u8) -> (NetworkManager, Vec<Arc<RecordingClaimer>>) {
    let table = Arc::new(AddressTable::with_interface("vcan0"));
    let mut manager = NetworkManager::new(table);
    let ecus: Vec<_> = (0..count)
        .map(|i| RecordingClaimer::new(Name::new(u64::from(i) + 1)))
        .collect();
    for ecu in &ecus {
        manager.insert_controller(ecu);
    }
    for (i, ecu) in ecus.iter().enumerate() {
        manager.process(&Frame::claim(
            ecu.name(),
            Address::new(0x80 + i as u8),
            Address::GLOBAL,
        ));
    }
    (manager, ecus)
}

pub fn bench_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("network_manager/routing");
    group.measurement_time(Duration::from_secs(5));

    for count in [1u8, 4, 16] {
        let (manager, _ecus) = managed_network(count);
        let request = Frame::request(Address::IDLE, Address::GLOBAL, PGN_ADDRESS_CLAIM);

        group.throughput(Throughput::Elements(u64::from(count)));
        group.bench_with_input(
            BenchmarkId::new("global_request", count),
            &request,
            |b, frame| b.iter(|| black_box(manager.process(frame))),
        );
    }

    let (manager, _ecus) = managed_network(16);
    let unicast = Frame::request(Address::new(0x10), Address::new(0x85), PGN_ADDRESS_CLAIM);
    group.throughput(Throughput::Elements(1));
    group.bench_function("unicast_request", |b| {
        b.iter(|| black_box(manager.process(&unicast)))
    });

    group.finish();
}

pub fn bench_claim_traffic(c: &mut Criterion) {
    let mut group = c.benchmark_group("network_manager/claims");
    group.measurement_time(Duration::from_secs(5));

    // Random foreign claims across the unicast range
    let mut rng = rand::thread_rng();
    let frames: Vec<Frame> = (0..1000)
        .map(|_| {
            let name = Name::new(rng.gen_range(0x1000..0x2000));
            let address = Address::new(rng.gen_range(0..=253));
            Frame::claim(name, address, Address::GLOBAL)
        })
        .collect();

    group.throughput(Throughput::Elements(frames.len() as u64));
    group.bench_function("random_claims_1000", |b| {
        b.iter(|| {
            let (manager, _ecus) = managed_network(4);
            for frame in &frames {
                manager.process(frame);
            }
            black_box(manager.table().address_count())
        })
    });

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_routing(c);
    bench_claim_traffic(c);
}
