//! # Concurrent Bus Readers
//!
//! Several reader threads feeding one manager and one table.

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Barrier};
    use std::thread;

    use rand::seq::SliceRandom;

    use j1939_network::{
        Address, AddressTable, Frame, Name, NetworkManager, RecordingClaimer, RecordingObserver,
        PGN_ADDRESS_CLAIM,
    };

    use crate::init_tracing;

    const READERS: usize = 8;

    #[test]
    fn test_contending_claims_resolve_to_smallest_name() {
        init_tracing();

        for _round in 0..20 {
            let table = Arc::new(AddressTable::new());
            let manager = Arc::new(NetworkManager::new(Arc::clone(&table)));
            let barrier = Arc::new(Barrier::new(READERS));

            let handles: Vec<_> = (0..READERS)
                .map(|reader| {
                    let manager = Arc::clone(&manager);
                    let barrier = Arc::clone(&barrier);
                    thread::spawn(move || {
                        barrier.wait();
                        let name = Name::new(0x100 + reader as u64);
                        manager.process(&Frame::claim(name, Address::new(0x40), Address::GLOBAL));
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }

            assert_eq!(table.get_name(Address::new(0x40)), Some(Name::new(0x100)));
            assert_eq!(table.name_count(), READERS);
            assert_eq!(table.address_count(), 1);
            assert_eq!(table.stats().idle_count, READERS - 1);
        }
    }

    #[test]
    fn test_shuffled_traffic_from_many_readers() {
        init_tracing();
        let observer = RecordingObserver::new();
        let table = Arc::new(AddressTable::new());
        let mut manager = NetworkManager::with_observer(Arc::clone(&table), observer.clone());

        let ecus: Vec<_> = (0..4u64).map(|i| RecordingClaimer::new(Name::new(i))).collect();
        for ecu in &ecus {
            manager.insert_controller(ecu);
        }
        let manager = Arc::new(manager);

        // Every name claims its own address, plus global requests
        let mut frames: Vec<Frame> = (0..64u8)
            .map(|i| Frame::claim(Name::new(u64::from(i)), Address::new(i), Address::GLOBAL))
            .collect();
        let request = Frame::request(Address::IDLE, Address::GLOBAL, PGN_ADDRESS_CLAIM);
        frames.extend(std::iter::repeat(request).take(16));
        frames.shuffle(&mut rand::thread_rng());
        let frames = Arc::new(frames);

        let handles: Vec<_> = (0..READERS)
            .map(|reader| {
                let manager = Arc::clone(&manager);
                let frames = Arc::clone(&frames);
                thread::spawn(move || {
                    for frame in frames.iter().skip(reader).step_by(READERS) {
                        manager.process(frame);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(table.address_count(), 64);
        assert_eq!(observer.seen().len(), 64);
        for ecu in &ecus {
            assert_eq!(ecu.claims().len(), 64);
            assert_eq!(ecu.request_count(), 16);
        }

        let stats = manager.stats();
        assert_eq!(stats.claims, 64);
        assert_eq!(stats.requests, 16);
        assert_eq!(stats.deliveries, 4 * 80);
    }
}
