//! Native drawing API seam.
//!
//! This module is responsible for:
//! - the [`Backend`] trait every drawing call goes through
//! - the libshapes/OpenVG FFI backend (`openvg` feature)
//! - a recording backend for tests and headless runs

mod backend;
#[cfg(feature = "openvg")]
pub mod openvg;
mod recording;

pub use backend::{upload_fits, Backend, ImageFormat, ImageHandle, ImageQuality};
#[cfg(feature = "openvg")]
pub use openvg::OpenVg;
pub use recording::{DrawCall, Recorder};
