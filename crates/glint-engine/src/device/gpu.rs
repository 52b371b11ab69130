use std::rc::Rc;

use anyhow::{Context, Result};

use crate::texture::{WgpuTextures, WgpuTexturesInit};

use super::GpuInit;

/// Owns the wgpu adapter, device and queue.
///
/// No surface is involved: images only need a device to allocate textures.
/// Windowed applications that already own a device can skip this type and
/// build [`WgpuTextures`] directly.
pub struct Gpu {
    /// Selected adapter.
    adapter: wgpu::Adapter,

    /// Logical device.
    device: wgpu::Device,

    /// Command queue.
    queue: wgpu::Queue,
}

impl Gpu {
    /// Creates a headless GPU context.
    ///
    /// Adapter/device acquisition is asynchronous under wgpu.
    pub async fn headless(init: GpuInit) -> Result<Self> {
        let GpuInit {
            backends,
            power_preference,
            force_fallback_adapter,
            required_features,
            required_limits,
        } = init;

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends,
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference,
                compatible_surface: None,
                force_fallback_adapter,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("glint-engine device"),
                required_features,
                required_limits,
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        log::info!("using GPU adapter: {}", adapter.get_info().name);

        Ok(Self { adapter, device, queue })
    }

    /// Blocking variant of [`headless`](Self::headless) for tools and tests.
    pub fn headless_blocking(init: GpuInit) -> Result<Self> {
        pollster::block_on(Self::headless(init))
    }

    pub fn adapter_info(&self) -> wgpu::AdapterInfo {
        self.adapter.get_info()
    }

    /// Returns a reference to the logical device.
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    /// Returns a reference to the command queue.
    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Creates a texture backend sharing this device, ready to hand to images.
    pub fn textures(&self, init: WgpuTexturesInit) -> Rc<WgpuTextures> {
        Rc::new(WgpuTextures::new(self.device.clone(), self.queue.clone(), init))
    }
}
