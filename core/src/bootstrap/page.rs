use std::cell::Cell;
use std::rc::Rc;

use super::ReadySignal;
use crate::traits::InitHook;

pub const READY_MESSAGE: &str = "DOM fully loaded";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapState {
    Unregistered,
    Registered,
    Fired,
}

/// Page start-up routine: logs readiness, then runs the optional hook.
#[derive(Default)]
pub struct PageBootstrap {
    hook: Option<Box<dyn InitHook>>,
}

impl PageBootstrap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hook(mut self, hook: impl InitHook + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    pub fn has_hook(&self) -> bool {
        self.hook.is_some()
    }

    pub fn state(&self) -> BootstrapState {
        BootstrapState::Unregistered
    }

    pub fn register(self, signal: &mut ReadySignal) -> BootstrapHandle {
        let state = Rc::new(Cell::new(BootstrapState::Registered));
        let handle = BootstrapHandle {
            state: Rc::clone(&state),
        };

        let mut hook = self.hook;
        signal.add_listener(move || {
            state.set(BootstrapState::Fired);
            tracing::info!(target: "page", "{}", READY_MESSAGE);

            if let Some(hook) = hook.as_mut() {
                hook.initialize()?;
            }

            Ok(())
        });

        handle
    }
}

#[derive(Debug, Clone)]
pub struct BootstrapHandle {
    state: Rc<Cell<BootstrapState>>,
}

impl BootstrapHandle {
    pub fn state(&self) -> BootstrapState {
        self.state.get()
    }
}
