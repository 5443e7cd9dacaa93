//! Ink capture and segmentation for one drawing surface.
//!
//! A [`Surface`] turns pointer samples into strokes, tells taps from drawings,
//! and classifies the accumulated ink once the user has been idle for the
//! debounce period. Several strokes drawn within that period form one digit.
//!
//! Phases: `Idle -> Pressed -> (tap | Drawing) -> Committed -> Idle`. A press
//! while `Committed` cancels the pending timer and keeps the ink, so multi-
//! stroke digits are classified once. Surfaces share nothing mutable; each
//! owns its samples for the duration of a contact.

mod config;
mod debounce;

pub use config::GestureConfig;
pub use debounce::Debounce;

use crate::digit::Digit;
use crate::geometry::{distance, Point};
use crate::ink::{Ink, Stroke};
use crate::recognize::Recognizer;
use crate::trace::trace_event;
use crate::util::InkDigitResult;
use std::time::Instant;

/// Kind of device producing pointer samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Mouse,
    Touch,
    /// High-precision stylus; starts drawing without a movement threshold.
    Pen,
}

/// Pointer that initiated a contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pointer {
    pub kind: PointerKind,
    /// False for secondary buttons, which are ignored.
    pub primary: bool,
}

impl Pointer {
    /// Primary mouse button.
    pub const fn mouse() -> Self {
        Self {
            kind: PointerKind::Mouse,
            primary: true,
        }
    }

    /// Finger contact.
    pub const fn touch() -> Self {
        Self {
            kind: PointerKind::Touch,
            primary: true,
        }
    }

    /// Stylus contact.
    pub const fn pen() -> Self {
        Self {
            kind: PointerKind::Pen,
            primary: true,
        }
    }
}

/// Capture phase of a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No contact and no pending ink.
    Idle,
    /// Contact held but not yet moved past the threshold.
    Pressed,
    /// Contact held and samples are being recorded.
    Drawing,
    /// Contact released; ink waits for the quiet period.
    Committed,
}

/// Receives gesture notifications from a surface.
///
/// All methods default to no-ops.
pub trait GestureSink {
    /// A press was released without moving: a selection, not ink.
    fn on_tap(&mut self) {}

    /// A sample was added to the stroke being drawn.
    fn on_stroke_appended(&mut self, _point: Point) {}

    /// The quiet period elapsed and `ink` was classified. The ink is cleared
    /// right after this call regardless of the result.
    fn on_gesture_settled(&mut self, _digit: Option<Digit>, _ink: &Ink) {}
}

impl GestureSink for () {}

/// Recorded gesture notification.
#[derive(Clone, Debug, PartialEq)]
pub enum GestureEvent {
    Tap,
    StrokeAppended(Point),
    Settled { digit: Option<Digit>, ink: Ink },
}

impl GestureSink for Vec<GestureEvent> {
    fn on_tap(&mut self) {
        self.push(GestureEvent::Tap);
    }

    fn on_stroke_appended(&mut self, point: Point) {
        self.push(GestureEvent::StrokeAppended(point));
    }

    fn on_gesture_settled(&mut self, digit: Option<Digit>, ink: &Ink) {
        self.push(GestureEvent::Settled {
            digit,
            ink: ink.clone(),
        });
    }
}

/// Per-surface gesture state machine.
#[derive(Clone, Debug)]
pub struct Surface {
    cfg: GestureConfig,
    recognizer: Recognizer,
    phase: Phase,
    start: Point,
    pressed_at: Option<Instant>,
    current: Stroke,
    ink: Ink,
    debounce: Debounce,
}

impl Surface {
    /// Surface with default gesture settings.
    pub fn new(recognizer: Recognizer) -> Self {
        let cfg = GestureConfig::default();
        let debounce = Debounce::new(cfg.debounce);
        Self {
            cfg,
            recognizer,
            phase: Phase::Idle,
            start: Point::default(),
            pressed_at: None,
            current: Stroke::new(),
            ink: Ink::new(),
            debounce,
        }
    }

    /// Surface with custom gesture settings.
    pub fn with_config(cfg: GestureConfig, recognizer: Recognizer) -> InkDigitResult<Self> {
        cfg.validate()?;
        let mut surface = Self::new(recognizer);
        surface.debounce = Debounce::new(cfg.debounce);
        surface.cfg = cfg;
        Ok(surface)
    }

    /// Current capture phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Strokes committed and waiting for classification.
    pub fn pending_ink(&self) -> &Ink {
        &self.ink
    }

    /// When the current contact began, if one is held.
    pub fn pressed_at(&self) -> Option<Instant> {
        self.pressed_at
    }

    /// When the pending ink will be classified, if a quiet period is running.
    pub fn deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    /// Begins a contact at `position`.
    ///
    /// Non-primary buttons and presses during a held contact are ignored. Any
    /// pending classification is postponed until this contact ends.
    pub fn press(&mut self, pointer: Pointer, position: Point, now: Instant) {
        if !pointer.primary || matches!(self.phase, Phase::Pressed | Phase::Drawing) {
            return;
        }
        self.debounce.cancel();
        self.start = position;
        self.pressed_at = Some(now);
        self.current = Stroke::from(vec![position]);
        self.phase = if pointer.kind == PointerKind::Pen {
            Phase::Drawing
        } else {
            Phase::Pressed
        };
    }

    /// Feeds a movement sample for the held contact.
    pub fn move_to<S: GestureSink + ?Sized>(&mut self, position: Point, sink: &mut S) {
        if self.phase == Phase::Pressed
            && distance(self.start, position) > self.cfg.movement_threshold_px
        {
            self.phase = Phase::Drawing;
        }
        if self.phase == Phase::Drawing {
            self.current.push(position);
            sink.on_stroke_appended(position);
        }
    }

    /// Ends the held contact.
    pub fn release<S: GestureSink + ?Sized>(&mut self, now: Instant, sink: &mut S) {
        match self.phase {
            Phase::Pressed => {
                self.current = Stroke::new();
                sink.on_tap();
            }
            Phase::Drawing => {
                let stroke = std::mem::take(&mut self.current);
                if stroke.len() >= self.cfg.min_stroke_points {
                    self.ink.push(stroke);
                } else {
                    trace_event!("stroke_discarded", points = stroke.len());
                }
            }
            Phase::Idle | Phase::Committed => return,
        }
        self.pressed_at = None;
        // A tap or a dropped stroke must not strand ink committed earlier.
        if self.ink.is_empty() {
            self.phase = Phase::Idle;
        } else {
            self.debounce.arm(now);
            self.phase = Phase::Committed;
        }
    }

    /// The pointer left the surface; handled as a release.
    pub fn leave<S: GestureSink + ?Sized>(&mut self, now: Instant, sink: &mut S) {
        self.release(now, sink);
    }

    /// Abandons the held contact and any pending ink without classifying.
    pub fn cancel(&mut self) {
        self.debounce.cancel();
        self.current = Stroke::new();
        self.ink.clear();
        self.pressed_at = None;
        self.phase = Phase::Idle;
    }

    /// Classifies the pending ink once the quiet period has elapsed.
    ///
    /// Returns true if the gesture settled during this call.
    pub fn poll<S: GestureSink + ?Sized>(&mut self, now: Instant, sink: &mut S) -> bool {
        if self.phase != Phase::Committed || !self.debounce.fire(now) {
            return false;
        }
        let digit = self.recognizer.recognize(&self.ink);
        trace_event!(
            "gesture_settled",
            strokes = self.ink.strokes().len(),
            digit = digit.map_or(-1, |d| i32::from(d.value())),
        );
        sink.on_gesture_settled(digit, &self.ink);
        self.ink.clear();
        self.phase = Phase::Idle;
        true
    }
}
