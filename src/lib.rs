//! Show a GitHub-style contribution calendar on NeoPixel-style (WS2812) LED strips and panels.
//!
//! The crate turns a [`Calendar`](crate::calendar::Calendar) of per-day contribution counts into a
//! brightness-scaled pixel frame, and runs the polling loop that decides when to fetch again,
//! when to redraw, and how to debounce the brightness buttons.
//!
//! Data flows one way: a [`ContributionSource`](crate::refresh::ContributionSource) produces a
//! calendar, [`render`](crate::render::render) turns it into a frame for a
//! [`Topology`](crate::topology::Topology), and a [`FrameSink`](crate::refresh::FrameSink) pushes
//! the frame to the LEDs. [`RefreshScheduler`](crate::refresh::RefreshScheduler) owns all of it.
//!
//! # Glossary
//!
//! - **Bucket:** one of the discrete color levels a day's count is classified into.
//! - **Legend:** the list of colors, one per bucket.
//! - **Topology:** how the physical pixels are arranged. Either one strip folded into rows
//!   ([`LinearRows`](crate::topology::LinearRows)) or a true 2D panel
//!   ([`Matrix`](crate::topology::Matrix)).
//! - **Status pixel:** a single reserved pixel lit while a fetch is in progress.
#![cfg_attr(not(feature = "host"), no_std)]
#![cfg_attr(not(feature = "host"), no_main)]
#![allow(async_fn_in_trait, reason = "single-threaded embedded")]

// Compile-time checks: exactly one board must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "pico1", feature = "pico2")), not(feature = "host")))]
compile_error!("Must enable exactly one board feature: 'pico1' or 'pico2'");

#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

// Compile-time check: the device build runs on the ARM cores (unless testing with host feature)
#[cfg(all(not(feature = "arm"), not(feature = "host")))]
compile_error!("Must enable the 'arm' architecture feature");

// Must come first so the logging macros are visible in every module below.
#[macro_use]
mod fmt;

// These modules require embassy_rp and are excluded when testing on host
#[cfg(all(not(feature = "host"), any(feature = "pico1", feature = "pico2")))]
pub mod board;
pub mod bucket;
pub mod button;
pub mod calendar;
pub mod config;
mod error;
pub mod frame;
pub mod palette;
pub mod power;
pub mod refresh;
pub mod render;
mod text;
#[cfg(feature = "host")]
pub mod to_png;
pub mod topology;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, ErrorClass, Result};
