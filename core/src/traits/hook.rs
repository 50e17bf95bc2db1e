/// Callback run once the page content is ready.
pub trait InitHook {
    fn initialize(&mut self) -> anyhow::Result<()>;
}

impl<F> InitHook for F
where
    F: FnMut() -> anyhow::Result<()>,
{
    fn initialize(&mut self) -> anyhow::Result<()> {
        self()
    }
}
