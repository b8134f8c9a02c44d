use crate::animation::ease::Ease;
use crate::foundation::core::WavePoint;
use crate::wave::params::{Position, Shape};
use crate::wave::path::{PathFrame, build_path};

/// Length of one morph window.
pub const MORPH_DURATION_MS: f64 = 520.0;

/// Blend two silhouettes at eased fraction `t`.
///
/// The result has `max(from.len(), to.len())` points; indices past the end of the shorter
/// sequence reuse its last point, so smooth and peaks silhouettes can blend into each other.
pub fn interpolate_points(from: &[WavePoint], to: &[WavePoint], t: f64) -> Vec<WavePoint> {
    if from.is_empty() || to.is_empty() {
        return to.to_vec();
    }

    let n = from.len().max(to.len());
    (0..n)
        .map(|i| {
            let a = from[i.min(from.len() - 1)];
            let b = to[i.min(to.len() - 1)];
            a.lerp(b, t)
        })
        .collect()
}

/// One in-flight interpolation. Owned exclusively by its [`MorphEngine`].
#[derive(Clone, Debug)]
pub struct MorphSession<C> {
    id: u64,
    from: Vec<WavePoint>,
    to: Vec<WavePoint>,
    start_ms: Option<f64>,
    duration_ms: f64,
    target_position: Position,
    target_shape: Shape,
    commit: C,
}

impl<C> MorphSession<C> {
    /// Monotonic session id within the owning engine.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Points the session interpolates from (what was on screen when it started).
    pub fn from_points(&self) -> &[WavePoint] {
        &self.from
    }

    /// Exact points the session lands on.
    pub fn to_points(&self) -> &[WavePoint] {
        &self.to
    }

    /// Timestamp of the first frame, once ticked.
    pub fn start_ms(&self) -> Option<f64> {
        self.start_ms
    }

    /// Window length.
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Anchor edge frames are rendered against.
    pub fn target_position(&self) -> Position {
        self.target_position
    }

    /// Style frames are rendered with.
    pub fn target_shape(&self) -> Shape {
        self.target_shape
    }

    /// Payload handed back on completion.
    pub fn commit(&self) -> &C {
        &self.commit
    }

    fn progress(&mut self, now_ms: f64) -> f64 {
        let start = *self.start_ms.get_or_insert(now_ms);
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - start) / self.duration_ms).clamp(0.0, 1.0)
    }
}

/// Outcome of one [`MorphEngine::tick`].
#[derive(Clone, Debug, PartialEq)]
pub enum MorphTick<C> {
    /// No session in flight; nothing was rendered.
    Idle,
    /// An intermediate frame was rendered.
    Frame {
        /// Linear elapsed fraction in `[0, 1)`.
        progress: f64,
    },
    /// The session landed exactly on its target and was retired.
    Completed {
        /// Payload supplied to [`MorphEngine::start`].
        commit: C,
    },
}

/// Two-state (idle / morphing) driver owning the displayed silhouette and its path.
///
/// The host calls [`tick`](Self::tick) once per frame with a monotonic timestamp. The session's
/// start time is taken from its first tick. Starting a new morph replaces the in-flight session
/// and uses whatever was last rendered as its source, so at most one interpolation runs at a time.
#[derive(Debug)]
pub struct MorphEngine<C = ()> {
    width: f64,
    height: f64,
    displayed: Vec<WavePoint>,
    position: Position,
    shape: Shape,
    path: String,
    session: Option<MorphSession<C>>,
    duration_ms: f64,
    ease: Ease,
    next_id: u64,
}

impl<C> MorphEngine<C> {
    /// Idle engine showing `points` on a `width` x `height` canvas.
    pub fn new(
        width: f64,
        height: f64,
        points: Vec<WavePoint>,
        position: Position,
        shape: Shape,
    ) -> Self {
        let path = build_path(&points, PathFrame::new(width, height, position), shape);
        Self {
            width,
            height,
            displayed: points,
            position,
            shape,
            path,
            session: None,
            duration_ms: MORPH_DURATION_MS,
            ease: Ease::InOutQuad,
            next_id: 0,
        }
    }

    /// Override the window length and easing curve for subsequent sessions.
    pub fn with_timing(mut self, duration_ms: f64, ease: Ease) -> Self {
        self.duration_ms = duration_ms;
        self.ease = ease;
        self
    }

    /// Begin morphing from the displayed points to `to`, superseding any session in flight.
    ///
    /// Returns the new session id.
    pub fn start(&mut self, to: Vec<WavePoint>, position: Position, shape: Shape, commit: C) -> u64 {
        if let Some(old) = self.session.take() {
            tracing::debug!(superseded = old.id, "morph session cancelled");
        }

        let id = self.next_id;
        self.next_id += 1;
        tracing::debug!(
            id,
            from = self.displayed.len(),
            to = to.len(),
            ?position,
            ?shape,
            "morph session started"
        );

        self.session = Some(MorphSession {
            id,
            from: self.displayed.clone(),
            to,
            start_ms: None,
            duration_ms: self.duration_ms,
            target_position: position,
            target_shape: shape,
            commit,
        });
        id
    }

    /// Drop the in-flight session, leaving the last rendered frame on screen.
    ///
    /// Returns the dropped payload, if a session was running.
    pub fn cancel(&mut self) -> Option<C> {
        let session = self.session.take()?;
        tracing::debug!(id = session.id, "morph session cancelled");
        Some(session.commit)
    }

    /// Advance the session to `now_ms` and re-render the displayed path.
    pub fn tick(&mut self, now_ms: f64) -> MorphTick<C> {
        let Some(session) = self.session.as_mut() else {
            return MorphTick::Idle;
        };

        let r = session.progress(now_ms);
        if r >= 1.0 {
            let Some(done) = self.session.take() else {
                return MorphTick::Idle;
            };
            tracing::debug!(id = done.id, "morph session completed");
            self.displayed = done.to;
            self.position = done.target_position;
            self.shape = done.target_shape;
            self.render();
            return MorphTick::Completed {
                commit: done.commit,
            };
        }

        let eased = self.ease.apply(r);
        self.displayed = interpolate_points(&session.from, &session.to, eased);
        self.position = session.target_position;
        self.shape = session.target_shape;
        self.render();
        MorphTick::Frame { progress: r }
    }

    /// `true` while a session is in flight.
    pub fn is_morphing(&self) -> bool {
        self.session.is_some()
    }

    /// The in-flight session, if any.
    pub fn session(&self) -> Option<&MorphSession<C>> {
        self.session.as_ref()
    }

    /// Points of the most recently rendered frame.
    pub fn displayed_points(&self) -> &[WavePoint] {
        &self.displayed
    }

    /// SVG path data of the most recently rendered frame.
    pub fn current_path(&self) -> &str {
        &self.path
    }

    /// Anchor edge of the most recently rendered frame.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Style of the most recently rendered frame.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    fn render(&mut self) {
        let frame = PathFrame::new(self.width, self.height, self.position);
        self.path = build_path(&self.displayed, frame, self.shape);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/morph.rs"]
mod tests;
