//! In-memory GPIO pin handle registry
//!
//! This crate hands out opaque pin handles bound to a port/bit pair and
//! tracks their direction and commanded level in memory:
//!
//! - Pin records and opaque handles
//! - Allocation strategies (heap or fixed static pool)
//! - The pin registry and its per-pin operations
//! - A mutex-guarded registry for use from several execution contexts
//! - An embedded-hal view so generic drivers can bind to a tracked pin
//!
//! No register is ever touched. Pushing the tracked level to real hardware
//! is the job of a chip driver sitting behind [`pinhandle_hal::DigitalPin`].
//!
//! # Allocation strategy
//!
//! The strategy behind [`Registry`] is picked at build time:
//!
//! | Feature       | Allocator                                  |
//! |---------------|--------------------------------------------|
//! | `alloc`       | [`HeapAllocator`], one record per create    |
//! | `static-pool` | [`StaticPool`] of `PINHANDLE_MAX_INSTANCES` |
//!
//! With `static-pool` enabled the heap strategy is compiled out entirely, so
//! `liballoc` is never linked even if `alloc` stays on through default
//! features. The pool size is read from the
//! `PINHANDLE_MAX_INSTANCES` environment variable at build time (default 16).
//!
//! # Example
//!
//! ```
//! use pinhandle_core::{PinRegistry, StaticPool};
//!
//! let mut pins = PinRegistry::<StaticPool<4>>::new();
//! let led = pins.create(2, 13).unwrap();
//!
//! pins.set_state(&led, true); // input: ignored
//! assert!(!pins.state(&led));
//!
//! pins.set_direction(&led, true);
//! pins.set_state(&led, true);
//! assert!(pins.state(&led));
//! ```

#![no_std]
#![deny(unsafe_code)]

#[cfg(all(feature = "alloc", not(feature = "static-pool")))]
extern crate alloc;

#[cfg(not(any(feature = "alloc", feature = "static-pool")))]
compile_error!("pinhandle-core needs either the `alloc` or the `static-pool` feature");

pub mod allocator;
pub mod config;
pub mod digital;
pub mod error;
pub mod handle;
pub mod registry;
pub mod shared;

#[cfg(all(feature = "alloc", not(feature = "static-pool")))]
pub use allocator::HeapAllocator;
pub use allocator::{DefaultAllocator, PinAllocator, StaticPool};
pub use config::MAX_PIN_INSTANCES;
pub use digital::Pin;
pub use error::AllocError;
pub use handle::{PinHandle, PinRecord};
pub use registry::{PinRegistry, Registry};
pub use shared::SharedRegistry;
