pub mod amount;
pub mod error;
pub mod event;
pub mod logging;
pub mod money;
