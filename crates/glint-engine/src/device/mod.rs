//! GPU device management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue without a window
//! - handing out texture backends bound to that device

mod gpu;
mod init;

pub use gpu::Gpu;
pub use init::GpuInit;
