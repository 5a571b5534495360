//! New-controller notifications over a tokio channel.

use tokio::sync::mpsc;
use tracing::debug;

use crate::domain::NewController;
use crate::ports::NewControllerObserver;

/// Forwards every [`NewController`] event into an unbounded mpsc channel.
///
/// Frame processing is synchronous, so the sender never awaits. Events sent
/// after the receiver is dropped are discarded.
///
/// # Example
///
/// ```rust,ignore
/// let (observer, mut rx) = ChannelObserver::channel();
/// let manager = NetworkManager::with_observer(table, Arc::new(observer));
///
/// tokio::spawn(async move {
///     while let Some(controller) = rx.recv().await {
///         tracing::info!("new controller {}", controller.name);
///     }
/// });
/// ```
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: mpsc::UnboundedSender<NewController>,
}

impl ChannelObserver {
    /// Create an observer together with the receiving end.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<NewController>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Wrap an existing sender.
    pub fn from_sender(tx: mpsc::UnboundedSender<NewController>) -> Self {
        Self { tx }
    }

    /// True once the receiving end is gone.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl NewControllerObserver for ChannelObserver {
    fn on_new_controller(&self, controller: &NewController) {
        if self.tx.send(*controller).is_err() {
            debug!(
                "[network] new controller channel closed, dropping {}",
                controller.name
            );
        }
    }
}
