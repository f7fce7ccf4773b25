//! Host event delivery

pub mod bus;

pub use bus::LocalEventBus;
