use tokio::sync::{mpsc, oneshot, watch};

use crate::mvi::Reducer;

use super::error::StoreError;

/// Mailbox size used when a caller asks for zero.
const MIN_MAILBOX: usize = 1;

enum StoreCommand<S, I> {
    Dispatch {
        intent: I,
        respond_to: oneshot::Sender<S>,
    },
    Close {
        respond_to: oneshot::Sender<()>,
    },
}

/// Cloneable handle to a running store.
///
/// All clones talk to the same runtime task. Reads are served from the last
/// published snapshot and never wait on the mailbox.
pub struct Store<R: Reducer> {
    sender: mpsc::Sender<StoreCommand<R::State, R::Intent>>,
    state: watch::Receiver<R::State>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            state: self.state.clone(),
        }
    }
}

impl<R: Reducer> Store<R> {
    /// Spawn the runtime task on the current tokio runtime.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime.
    pub fn spawn(initial: R::State, mailbox_capacity: usize) -> Self {
        let (sender, receiver) = mpsc::channel(mailbox_capacity.max(MIN_MAILBOX));
        let (publisher, state) = watch::channel(initial.clone());

        let runtime = StoreRuntime::<R> {
            receiver,
            publisher,
            state: initial,
        };
        tokio::spawn(runtime.run());

        Self { sender, state }
    }

    /// Apply an intent and return the state produced by that reduction.
    ///
    /// # Errors
    /// Returns [`StoreError::Closed`] if the runtime has stopped, including
    /// when it stops while the intent is still queued.
    pub async fn dispatch(&self, intent: R::Intent) -> Result<R::State, StoreError> {
        let (respond_to, receiver) = oneshot::channel();
        self.sender
            .send(StoreCommand::Dispatch { intent, respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;

        receiver.await.map_err(|_| StoreError::Closed)
    }

    /// Get a clone of the latest published state.
    pub fn state(&self) -> R::State {
        self.state.borrow().clone()
    }

    /// Read the latest published state without cloning it.
    pub fn read<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&R::State) -> T,
    {
        f(&self.state.borrow())
    }

    /// Subscribe to state changes.
    ///
    /// The receiver keeps the last state after the store closes.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.state.clone()
    }

    /// Stop the runtime. Intents still queued are dropped and their callers
    /// get [`StoreError::Closed`]. Closing twice is a no-op.
    pub async fn close(&self) {
        let (respond_to, receiver) = oneshot::channel();
        if self
            .sender
            .send(StoreCommand::Close { respond_to })
            .await
            .is_err()
        {
            return;
        }
        let _ = receiver.await;
    }

    /// Whether the runtime has stopped.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

struct StoreRuntime<R: Reducer> {
    receiver: mpsc::Receiver<StoreCommand<R::State, R::Intent>>,
    publisher: watch::Sender<R::State>,
    state: R::State,
}

impl<R: Reducer> StoreRuntime<R> {
    async fn run(mut self) {
        while let Some(command) = self.receiver.recv().await {
            match command {
                StoreCommand::Dispatch { intent, respond_to } => {
                    tracing::trace!(?intent, "Store: applying intent");
                    let previous = std::mem::take(&mut self.state);
                    self.state = R::reduce(previous, intent);
                    self.publisher.send_if_modified(|published| {
                        if *published == self.state {
                            return false;
                        }
                        *published = self.state.clone();
                        true
                    });
                    if respond_to.send(self.state.clone()).is_err() {
                        tracing::trace!("Store: dispatch response dropped (receiver gone)");
                    }
                }
                StoreCommand::Close { respond_to } => {
                    tracing::debug!("Store: closing");
                    self.receiver.close();
                    let _ = respond_to.send(());
                    break;
                }
            }
        }
    }
}
