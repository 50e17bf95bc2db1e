pub mod bootstrap;
pub mod config;
pub mod settings;
pub mod traits;

pub use bootstrap::{BootstrapHandle, BootstrapState, PageBootstrap, ReadySignal};
pub use config::*;
pub use settings::*;
pub use traits::*;
