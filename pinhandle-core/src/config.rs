//! Build-time configuration
//!
//! Values generated by `build.rs` from the environment.

include!(concat!(env!("OUT_DIR"), "/config.rs"));
