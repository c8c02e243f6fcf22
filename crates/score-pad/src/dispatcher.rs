//! Dispatcher for middleware action dispatch
//!
//! When middleware needs to dispatch actions that should re-enter the
//! middleware chain, it uses the Dispatcher. The store drains dispatched
//! actions after every dispatch cycle, so middleware can trigger reducers
//! and other middleware without holding a reference to the store.

use std::sync::mpsc::Sender;

use crate::actions::Action;

/// Dispatcher for sending actions back through the middleware chain.
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Dispatch an action to be processed through the full chain.
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
