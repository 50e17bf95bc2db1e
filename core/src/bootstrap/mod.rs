pub mod page;
pub mod signal;

pub use page::{BootstrapHandle, BootstrapState, PageBootstrap, READY_MESSAGE};
pub use signal::ReadySignal;
