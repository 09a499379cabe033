//! GPU device + surface ownership.
//!
//! A [`Gpu`] owns the wgpu instance, adapter, device, queue and a `'static`
//! surface bound to a shared window handle, so a scene can own it outright.

mod gpu;

pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
