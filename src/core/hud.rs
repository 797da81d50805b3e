//! Pure bookkeeping behind the on-page HUD: the scroll progress bar and
//! the frame-rate counter. Kept platform-free so host tests can drive them
//! with synthetic clocks.

/// How far the page has been scrolled, as a percentage in `[0, 100]`.
///
/// `doc_scroll_height` is the full scrollable height of the document; a
/// document no taller than the viewport reports 0.
pub fn scroll_progress_percent(scroll_top: f64, doc_scroll_height: f64, viewport_h: f64) -> f64 {
    let scrollable = doc_scroll_height - viewport_h;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Frame-rate counter over one-second wall-clock windows.
///
/// Feed it the current monotonic time (in seconds) once per frame; the
/// reported rate is the number of frames counted in the last full window.
#[derive(Clone, Copy, Debug)]
pub struct FpsCounter {
    window_start: f64,
    frames: u32,
    fps: u32,
}

impl FpsCounter {
    pub fn new(now_sec: f64) -> Self {
        Self {
            window_start: now_sec,
            frames: 0,
            fps: 0,
        }
    }

    /// Count one frame and return the current rate estimate.
    pub fn on_frame(&mut self, now_sec: f64) -> u32 {
        self.frames += 1;
        if now_sec - self.window_start >= 1.0 {
            self.fps = self.frames;
            self.frames = 0;
            self.window_start = now_sec;
        }
        self.fps
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}
