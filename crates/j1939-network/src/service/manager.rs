use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Weak};

use tracing::debug;

use crate::domain::{AddressTable, Name};
use crate::ports::{AddressClaimer, NewControllerObserver};

use super::stats::{Counters, ManagerStats};

/// Network manager turning claim/request frames into state machine events.
///
/// The manager records every observed claim in the shared [`AddressTable`]
/// and delivers the resulting event either to the one managed controller
/// that holds the frame's destination address, or to all of them for global
/// destinations.
///
/// # Ownership
///
/// Controller handles are held as [`Weak`] references: the manager never
/// keeps a state machine alive. A controller dropped by its owner is skipped
/// on delivery. The address table is shared through `Arc`.
///
/// # Thread Safety
///
/// [`process`](Self::process) takes `&self` and may run on several bus reader
/// threads at once; the table does its own locking and the counters are
/// atomic. Registering controllers or observers takes `&mut self` and is
/// expected to happen during setup.
///
/// # Example
///
/// ```rust,ignore
/// let table = Arc::new(AddressTable::with_interface("vcan0"));
/// let mut manager = NetworkManager::new(Arc::clone(&table));
/// manager.insert_controller(&claimer);
///
/// for frame in bus.frames() {
///     manager.process(&frame);
/// }
/// ```
pub struct NetworkManager {
    /// Shared name <-> address table
    pub(crate) table: Arc<AddressTable>,
    /// Managed controllers keyed by the name they claim for
    pub(crate) controllers: HashMap<Name, Weak<dyn AddressClaimer>>,
    /// Notified once per newly observed controller name
    pub(crate) observer: Option<Arc<dyn NewControllerObserver>>,
    pub(crate) counters: Counters,
}

impl NetworkManager {
    /// Create a manager without a new-controller observer.
    pub fn new(table: Arc<AddressTable>) -> Self {
        Self {
            table,
            controllers: HashMap::new(),
            observer: None,
            counters: Counters::default(),
        }
    }

    /// Create a manager notifying `observer` about new controllers.
    pub fn with_observer(
        table: Arc<AddressTable>,
        observer: Arc<dyn NewControllerObserver>,
    ) -> Self {
        let mut manager = Self::new(table);
        manager.observer = Some(observer);
        manager
    }

    /// Replace the new-controller observer.
    pub fn set_observer(&mut self, observer: Arc<dyn NewControllerObserver>) {
        self.observer = Some(observer);
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Manage `handle`, keyed by the name it reports.
    ///
    /// Replaces any handle previously registered for that name. Only a weak
    /// reference is kept.
    pub fn insert_controller<C>(&mut self, handle: &Arc<C>)
    where
        C: AddressClaimer + 'static,
    {
        let name = handle.name();
        let handle: Arc<dyn AddressClaimer> = Arc::clone(handle) as Arc<dyn AddressClaimer>;

        if self
            .controllers
            .insert(name, Arc::downgrade(&handle))
            .is_some()
        {
            debug!("[network] replaced controller handle for {}", name);
        } else {
            debug!("[network] managing controller {}", name);
        }
    }

    /// Stop managing the controller for `name`.
    ///
    /// # Returns
    ///
    /// `true` if a handle was registered.
    pub fn remove_controller(&mut self, name: Name) -> bool {
        self.controllers.remove(&name).is_some()
    }

    /// Number of managed controllers
    pub fn size(&self) -> usize {
        self.controllers.len()
    }

    /// True if a handle is registered for `name`.
    pub fn manages(&self, name: Name) -> bool {
        self.controllers.contains_key(&name)
    }

    /// The shared address table
    pub fn table(&self) -> &Arc<AddressTable> {
        &self.table
    }

    /// Frame processing counters since creation.
    pub fn stats(&self) -> ManagerStats {
        self.counters.snapshot(self.controllers.len())
    }
}

impl fmt::Debug for NetworkManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkManager")
            .field("interface", &self.table.interface_name())
            .field("controllers", &self.controllers.len())
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
