//! Frame driver: pointer in, one update, one render
//!
//! Hosts own the schedule (an animation-frame callback, a headless loop) and
//! call [`run_frame`] once per display refresh. Nothing here sleeps or keeps
//! time; frames are never skipped or caught up.

use crate::{Events, Session, Snapshot};

/// Source of the latest pointer height, in surface-local coordinates
pub trait PointerSource {
    /// Raw pointer y since the last poll, or `None` if it has not moved
    fn poll_pointer_y(&mut self) -> Option<f32>;
}

/// Consumer of a finished frame
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot) -> Result<(), String>;
}

impl<F> Renderer for F
where
    F: FnMut(&Snapshot) -> Result<(), String>,
{
    fn render(&mut self, snapshot: &Snapshot) -> Result<(), String> {
        self(snapshot)
    }
}

/// Pointer source for hosts without a pointer (AI-only demos, benchmarks)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPointer;

impl PointerSource for NoPointer {
    fn poll_pointer_y(&mut self) -> Option<f32> {
        None
    }
}

/// Pointer source that holds whatever was last written to it
#[derive(Debug, Clone, Copy, Default)]
pub struct LatestPointer {
    pending: Option<f32>,
}

impl LatestPointer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer move; later moves overwrite earlier ones
    pub fn push(&mut self, raw_y: f32) {
        self.pending = Some(raw_y);
    }
}

impl PointerSource for LatestPointer {
    fn poll_pointer_y(&mut self) -> Option<f32> {
        self.pending.take()
    }
}

/// Drive one frame: ingest pointer, update, render.
///
/// Returns the events the update produced. Render failures are passed back
/// untouched; the world has already advanced by then.
pub fn run_frame<P, R>(
    session: &mut Session,
    pointer: &mut P,
    renderer: &mut R,
) -> Result<Events, String>
where
    P: PointerSource + ?Sized,
    R: Renderer + ?Sized,
{
    if let Some(raw_y) = pointer.poll_pointer_y() {
        session.set_pointer_y(raw_y);
    }

    session.update();
    renderer.render(&session.snapshot())?;

    Ok(session.events)
}

/// Drive `frames` frames back to back, stopping at the first render error
pub fn run_frames<P, R>(
    session: &mut Session,
    pointer: &mut P,
    renderer: &mut R,
    frames: u64,
) -> Result<(), String>
where
    P: PointerSource + ?Sized,
    R: Renderer + ?Sized,
{
    for _ in 0..frames {
        run_frame(session, &mut *pointer, &mut *renderer)?;
    }
    Ok(())
}
