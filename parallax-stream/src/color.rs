//! Double-buffered ingestion and conversion of the color stream.
//!
//! The producer half ([`ColorSink`]) copies each incoming NV21 frame into a
//! staging buffer under a short-lived lock and marks a swap as pending. The
//! consumer half ([`ColorConverter`]) exchanges the staging buffer with its
//! active buffer under the same lock, then converts outside it. A frame that
//! arrives mid-conversion lands in what is now the other buffer, so the
//! converter always reads a complete, producer-untouched frame.

use std::mem;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use image::RgbImage;
use parallax_data::{FrameGeometry, PixelFormat, convert_frame};
use tracing::{debug, info, warn};

use crate::error::StreamError;

#[derive(Default)]
struct ColorShared {
    /// Set exactly once by the first accepted frame; never changes afterwards.
    geometry: Option<FrameGeometry>,
    staging: Vec<u8>,
    pending: bool,
}

#[derive(Default)]
struct ColorCounters {
    received: AtomicU64,
    dropped: AtomicU64,
}

/// Create a connected producer/consumer pair for one color stream.
pub fn color_stream() -> (ColorSink, ColorConverter) {
    let shared = Arc::new(Mutex::new(ColorShared::default()));
    let sink = ColorSink {
        shared: shared.clone(),
        counters: Arc::new(ColorCounters::default()),
    };
    let converter = ColorConverter {
        shared,
        geometry: None,
        active: Vec::new(),
        rgb: None,
    };
    (sink, converter)
}

/// Producer handle for the color stream.
///
/// Clone-able and `Send`; intended to be driven from the sensor SDK's frame
/// callback. Pushing never blocks longer than one buffer copy.
#[derive(Clone)]
pub struct ColorSink {
    shared: Arc<Mutex<ColorShared>>,
    counters: Arc<ColorCounters>,
}

impl ColorSink {
    /// Stage one raw color frame for the consumer.
    ///
    /// The first accepted frame locks the stream geometry and allocates the
    /// staging buffer; every later frame must match it. Rejected frames are
    /// logged and dropped with no state change.
    pub fn push_frame(
        &self,
        data: &[u8],
        format: PixelFormat,
        width: u32,
        height: u32,
    ) -> Result<(), StreamError> {
        match self.try_push(data, format, width, height) {
            Ok(()) => {
                self.counters.received.fetch_add(1, Ordering::Relaxed);
                Ok(())
            }
            Err(err) => {
                self.counters.dropped.fetch_add(1, Ordering::Relaxed);
                warn!("dropping color frame: {}", err);
                Err(err)
            }
        }
    }

    fn try_push(
        &self,
        data: &[u8],
        format: PixelFormat,
        width: u32,
        height: u32,
    ) -> Result<(), StreamError> {
        if format != PixelFormat::YCrCb420Sp {
            return Err(StreamError::UnsupportedFormat(format));
        }
        let geometry = FrameGeometry::new(width, height)
            .ok_or(StreamError::InvalidDimensions { width, height })?;
        let expected = geometry.frame_len();
        if data.len() < expected {
            return Err(StreamError::ShortPayload {
                got: data.len(),
                expected,
            });
        }

        let mut shared = self.shared.lock().unwrap();
        match shared.geometry {
            None => {
                // Buffers can only be sized once the first frame reports the
                // stream dimensions.
                shared.staging = vec![0; expected];
                shared.geometry = Some(geometry);
                info!("color stream locked at {}x{}", width, height);
            }
            Some(locked) if locked != geometry => {
                return Err(StreamError::geometry_mismatch(locked, geometry));
            }
            Some(_) => {}
        }
        shared.staging.copy_from_slice(&data[..expected]);
        shared.pending = true;
        Ok(())
    }

    /// Frames accepted since startup.
    pub fn frames_received(&self) -> u64 {
        self.counters.received.load(Ordering::Relaxed)
    }

    /// Frames rejected and dropped since startup.
    pub fn frames_dropped(&self) -> u64 {
        self.counters.dropped.load(Ordering::Relaxed)
    }
}

/// Consumer half of the color stream, owned by the render thread.
///
/// Holds the active buffer and the RGB output exclusively, so conversion
/// runs without any lock held.
pub struct ColorConverter {
    shared: Arc<Mutex<ColorShared>>,
    geometry: Option<FrameGeometry>,
    active: Vec<u8>,
    rgb: Option<RgbImage>,
}

impl ColorConverter {
    /// Locked stream dimensions, once the first frame has been observed.
    pub fn geometry(&self) -> Option<FrameGeometry> {
        self.geometry
    }

    /// Swap in the most recently staged frame and convert it to RGB.
    ///
    /// Returns `None` until the first color frame arrives. With no new frame
    /// pending, the previous frame is converted again (stale re-display).
    /// The returned view is overwritten in place by the next call.
    pub fn produce_rgb(&mut self) -> Option<&RgbImage> {
        {
            let mut shared = self.shared.lock().unwrap();
            let geometry = shared.geometry?;
            if self.geometry.is_none() {
                self.geometry = Some(geometry);
                self.active = vec![0; geometry.frame_len()];
                self.rgb = Some(RgbImage::new(geometry.width, geometry.height));
                debug!(
                    "allocated conversion buffers for {}x{}",
                    geometry.width, geometry.height
                );
            }
            if shared.pending {
                // Ownership exchange, not a copy: the producer now writes
                // into what was the active buffer.
                mem::swap(&mut shared.staging, &mut self.active);
                shared.pending = false;
            }
        }

        let geometry = self.geometry?;
        let rgb = self.rgb.as_mut()?;
        convert_frame(geometry, &self.active, rgb);
        Some(&*rgb)
    }
}
