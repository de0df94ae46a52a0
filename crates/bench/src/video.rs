use pibench_config::VideoConfig;
use pibench_core::{Error, Result};
use std::time::{Duration, Instant};
use tracing::info;

/// A stream of captured frames.
pub trait FrameSource {
    /// Capture one frame; `false` when no frame could be read.
    fn read_frame(&mut self) -> bool;
}

/// A camera that may or may not be present.
pub trait Camera {
    type Frames: FrameSource;

    /// Acquire the device exclusively; `None` when it can't be opened.
    fn open(&self) -> Option<Self::Frames>;
}

/// Counts frames captured during a fixed wall-clock window.
#[derive(Debug, Clone)]
pub struct VideoJob<C> {
    camera:   C,
    duration: Duration,
}

impl<C: Camera> VideoJob<C> {
    pub fn new(camera: C, duration: Duration) -> Self {
        Self { camera, duration }
    }

    /// Frames per second over the nominal duration.
    ///
    /// A failed read ends capture early, so the duration is a ceiling; the
    /// rate is still computed against the full nominal window.
    pub fn run(&self) -> Result<f64> {
        let Some(mut frames) = self.camera.open() else {
            return Err(Error::NoCamera);
        };

        let started = Instant::now();
        let mut count: u64 = 0;
        while started.elapsed() < self.duration {
            if !frames.read_frame() {
                break;
            }
            count += 1;
        }

        // release the device before reporting
        drop(frames);

        let secs = self.duration.as_secs_f64();
        info!(frames = count, secs, "Video capture finished");
        Ok(if secs > 0.0 { count as f64 / secs } else { 0.0 })
    }
}

impl VideoJob<DefaultCamera> {
    pub fn from_config(cfg: &VideoConfig) -> Self {
        Self::new(
            DefaultCamera::new(cfg.device),
            Duration::from_secs(cfg.duration_secs),
        )
    }
}

/// The system camera at `/dev/video<index>`.
#[derive(Debug, Clone, Copy)]
pub struct DefaultCamera {
    index: usize,
}

impl DefaultCamera {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

#[cfg(target_os = "linux")]
pub use v4l_capture::V4lFrames;

#[cfg(target_os = "linux")]
mod v4l_capture {
    use super::{Camera, DefaultCamera, FrameSource};
    use tracing::debug;
    use v4l::buffer::Type;
    use v4l::io::mmap::Stream as MmapStream;
    use v4l::io::traits::CaptureStream;
    use v4l::Device;

    const BUFFERS: u32 = 4;

    /// Memory-mapped V4L2 capture stream.
    pub struct V4lFrames {
        // field order = drop order: stop streaming, then close the device
        stream:  MmapStream<'static>,
        _device: Device,
    }

    impl Camera for DefaultCamera {
        type Frames = V4lFrames;

        fn open(&self) -> Option<V4lFrames> {
            let mut device = match Device::new(self.index) {
                Ok(d) => d,
                Err(e) => {
                    debug!("Cannot open /dev/video{}: {e}", self.index);
                    return None;
                }
            };

            let stream = match MmapStream::with_buffers(&mut device, Type::VideoCapture, BUFFERS) {
                Ok(s) => s,
                Err(e) => {
                    debug!("/dev/video{} is not a capture device: {e}", self.index);
                    return None;
                }
            };

            Some(V4lFrames {
                stream,
                _device: device,
            })
        }
    }

    impl FrameSource for V4lFrames {
        fn read_frame(&mut self) -> bool {
            match self.stream.next() {
                Ok((buf, _meta)) => !buf.is_empty(),
                Err(e) => {
                    debug!("Frame read failed: {e}");
                    false
                }
            }
        }
    }
}

#[cfg(not(target_os = "linux"))]
pub struct NoFrames;

#[cfg(not(target_os = "linux"))]
impl FrameSource for NoFrames {
    fn read_frame(&mut self) -> bool {
        false
    }
}

#[cfg(not(target_os = "linux"))]
impl Camera for DefaultCamera {
    type Frames = NoFrames;

    fn open(&self) -> Option<NoFrames> {
        None
    }
}
