// File: crates/weak-scale/src/window.rs
// Summary: Interactive display: blits the rasterized figure into a winit window via softbuffer.

use std::num::NonZeroU32;

use anyhow::{anyhow, Context, Result};
use stackplot_core::{Figure, RenderOptions};
use tracing::{error, info};
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

/// Open a window showing `figure`; returns only on error, the event loop exits the process.
pub fn show(figure: Figure, opts: RenderOptions, title: &str) -> Result<()> {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(winit::dpi::PhysicalSize::new(opts.width as u32, opts.height as u32))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow!("softbuffer context: {e:?}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow!("softbuffer surface: {e:?}"))?;
    info!("window open; close it or press Escape to quit");

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        // surface draws through the context; keep it alive for the loop
        let _ = &context;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::KeyboardInput {
                    input: KeyboardInput {
                        state: ElementState::Pressed,
                        virtual_keycode: Some(VirtualKeyCode::Escape),
                        ..
                    },
                    ..
                } => *cf = ControlFlow::Exit,
                WindowEvent::Resized(_) => window.request_redraw(),
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = redraw(&window, &mut surface, &figure, &opts) {
                    error!("redraw failed: {e:#}");
                    *cf = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}

/// Render at the current window size and present it.
fn redraw(window: &Window, surface: &mut softbuffer::Surface, figure: &Figure, base: &RenderOptions) -> Result<()> {
    let size = window.inner_size();
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(());
    };
    let mut opts = base.clone();
    opts.width = w.get() as i32;
    opts.height = h.get() as i32;

    let (rgba, _, _, _) = figure.render_to_rgba8(&opts)?;
    surface.resize(w, h).map_err(|e| anyhow!("resize: {e:?}"))?;
    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("frame: {e:?}"))?;
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        // softbuffer wants 0RGB
        *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
    }
    frame.present().map_err(|e| anyhow!("present: {e:?}"))?;
    Ok(())
}
