//! Hardware-independent resolver (rotary encoder / counter) abstraction.
//!
//! This crate provides [`Resolver`], a thin facade over a counting
//! peripheral (a timer in encoder mode, an encoder IC, a GPIO quadrature
//! decoder) that exposes start/stop, counter read/write and counting
//! direction without knowing which driver sits underneath.
//!
//! # Architecture
//!
//! The crate is split into three layers:
//!
//! - **[`ResolverBackend`]**: the trait a hardware driver implements. Every
//!   method is mandatory and maps onto one low-level operation.
//! - **[`Callbacks`]**: a ready-made backend built from plain `fn` pointers,
//!   for integrators that prefer a callback table over a trait impl.
//! - **[`Resolver`]**: the handle application code holds. It tracks whether
//!   a backend is installed and whether the counter is running, and forwards
//!   each call to the backend.
//!
//! # Quick start
//!
//! ```
//! use resolver_driver::{Callbacks, Direction, ModeCallbacks, Resolver, ResolverConfig};
//!
//! fn ok() -> Result<(), ()> { Ok(()) }
//! fn set(_: u32) -> Result<(), ()> { Ok(()) }
//! fn get() -> Result<u32, ()> { Ok(42) }
//! fn mode(_: u8) -> Result<(), ()> { Ok(()) }
//!
//! const TIM2_ENCODER: Callbacks<()> = Callbacks {
//!     start: ok,
//!     stop: ok,
//!     set_counter: set,
//!     get_counter: get,
//!     mode: ModeCallbacks::Selector(mode),
//! };
//!
//! let mut resolver = Resolver::new();
//! resolver
//!     .configure(ResolverConfig { max_reload: 0xFFFF, backend: TIM2_ENCODER })
//!     .unwrap();
//!
//! resolver.start().unwrap();
//! resolver.set_mode(Direction::Down).unwrap();
//! assert_eq!(resolver.get_value(), Ok(42));
//! ```
//!
//! # Features
//!
//! - **`defmt`**: Enable [`defmt::Format`] implementations on public types
//!   and state-change logging for embedded targets.

#![cfg_attr(not(test), no_std)]

pub use backend::{Direction, ResolverBackend};
pub use callbacks::{Callbacks, ModeCallbacks};
pub use error::{InvalidDirection, ResolverError};
pub use resolver::{Resolver, ResolverConfig};

mod backend;
mod callbacks;
mod error;
mod resolver;
