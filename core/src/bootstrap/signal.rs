use anyhow::Result;

type Listener = Box<dyn FnOnce() -> Result<()>>;

/// One-time "content fully parsed" event of a single-threaded host.
///
/// Listeners run at most once, in registration order, on the first `fire`.
/// A listener added after the signal fired never runs.
#[derive(Default)]
pub struct ReadySignal {
    listeners: Vec<Listener>,
    fired: bool,
}

impl ReadySignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener<F>(&mut self, listener: F)
    where
        F: FnOnce() -> Result<()> + 'static,
    {
        if self.fired {
            return;
        }
        self.listeners.push(Box::new(listener));
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Dispatches the event. The first listener error stops dispatch and is
    /// returned to the caller; remaining listeners are dropped.
    pub fn fire(&mut self) -> Result<()> {
        if self.fired {
            return Ok(());
        }
        self.fired = true;

        for listener in std::mem::take(&mut self.listeners) {
            listener()?;
        }

        Ok(())
    }
}
