//! Background Tasks Module
//!
//! Periodic tasks that run against a shared cache until stopped.
//!
//! # Tasks
//! - Auto GC: sweeps expired entries at a fixed interval
//! - Auto refresh: reloads one key at a fixed interval

mod gc;
mod handle;
mod refresh;

pub use handle::StopHandle;

pub(crate) use handle::spawn_periodic;
