use anyhow::{bail, Result};

use crate::device::{Gpu, SurfaceErrorAction};
use crate::paint::Color;

use super::{DrawList, RectRenderer, RenderCtx, RenderTarget};

/// Owns the GPU context and turns a [`DrawList`] into a presented frame.
pub struct Painter {
    gpu: Gpu,
    rects: RectRenderer,
    list: DrawList,
}

impl Painter {
    pub fn new(gpu: Gpu) -> Self {
        Self {
            gpu,
            rects: RectRenderer::new(),
            list: DrawList::new(),
        }
    }

    /// The list recorded into for the next [`present`](Self::present).
    pub fn list(&mut self) -> &mut DrawList {
        &mut self.list
    }

    /// Clears to `clear`, renders the recorded list and presents.
    ///
    /// The list is emptied whether or not a frame was presented. Transient
    /// surface errors skip the frame; an unrecoverable one is returned.
    pub fn present(&mut self, clear: Color) -> Result<()> {
        let result = self.present_list(clear);
        self.list.clear();
        result
    }

    fn present_list(&mut self, clear: Color) -> Result<()> {
        let viewport = self.gpu.viewport();
        if !self.gpu.sync_size() || !viewport.is_drawable() {
            return Ok(());
        }

        let mut frame = match self.gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => match self.gpu.handle_surface_error(err) {
                SurfaceErrorAction::Fatal => bail!("surface lost: out of memory"),
                SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
                    return Ok(());
                }
            },
        };

        // Clear pass; dropped before the rect pass borrows the encoder.
        {
            let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("volley clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: clear.r as f64,
                            g: clear.g as f64,
                            b: clear.b as f64,
                            a: clear.a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        {
            let ctx = RenderCtx {
                device: self.gpu.device(),
                queue: self.gpu.queue(),
                surface_format: self.gpu.surface_format(),
                viewport,
            };
            let mut target = RenderTarget {
                encoder: &mut frame.encoder,
                color_view: &frame.view,
            };
            self.rects.render(&ctx, &mut target, &self.list);
        }

        self.gpu.submit(frame);
        Ok(())
    }
}
