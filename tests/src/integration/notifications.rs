//! # New Controller Notifications
//!
//! Observers wired to the manager: closures and the tokio channel adapter.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use j1939_network::{
        Address, AddressTable, ChannelObserver, Frame, Name, NetworkManager, NewController,
    };

    use crate::init_tracing;

    #[tokio::test]
    async fn test_channel_observer_streams_new_controllers() {
        init_tracing();
        let (observer, mut rx) = ChannelObserver::channel();
        let table = Arc::new(AddressTable::with_interface("vcan0"));
        let manager = NetworkManager::with_observer(Arc::clone(&table), Arc::new(observer));

        let reader = tokio::task::spawn_blocking(move || {
            for value in 1..=3u64 {
                let name = Name::new(value);
                let address = Address::new(0x10 + value as u8);
                // Repeated claims are not new
                manager.process(&Frame::claim(name, address, Address::GLOBAL));
                manager.process(&Frame::claim(name, address, Address::GLOBAL));
            }
        });
        reader.await.unwrap();

        let mut seen = Vec::new();
        while let Some(controller) = rx.recv().await {
            seen.push(controller);
        }

        assert_eq!(
            seen,
            (1..=3u8)
                .map(|value| NewController {
                    name: Name::new(u64::from(value)),
                    address: Address::new(0x10 + value),
                })
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_closure_observer_sees_idle_announcements() {
        init_tracing();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let manager = NetworkManager::with_observer(
            Arc::new(AddressTable::new()),
            Arc::new(move |name: Name, address: Address| sink.lock().push((name, address))),
        );

        manager.process(&Frame::claim(Name::new(7), Address::IDLE, Address::GLOBAL));
        manager.process(&Frame::claim(Name::new(7), Address::new(0x22), Address::GLOBAL));

        assert_eq!(*seen.lock(), vec![(Name::new(7), Address::IDLE)]);
    }
}
