//! Pinhandle Hardware Abstraction Layer
//!
//! This crate defines the digital pin interface that application code
//! programs against. Implementations decide where the pin state lives:
//! `pinhandle-core` tracks it in memory, a chip driver would back it with
//! port registers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (firmware logic)           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pinhandle-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ pinhandle-    │       │  register     │
//! │    core       │       │  driver (ext) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::DigitalPin`] - Direction and logic level of one pin

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

pub use gpio::DigitalPin;
