use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod keyboard;
pub mod logging;

/// Middleware trait - intercepts actions before they reach the reducer.
pub trait Middleware {
    /// Handle an action.
    ///
    /// - `action`: the action to process
    /// - `state`: current application state (read-only snapshot)
    /// - `dispatcher`: use to dispatch actions that should re-enter the chain
    ///
    /// Returns `true` to continue the chain, `false` to consume the action.
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
