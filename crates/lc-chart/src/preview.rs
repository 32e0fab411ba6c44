//! Live preview synchronization between the form and the chart surface.
//!
//! The form hands over whole [`FormSnapshot`]s, never individual field
//! edits, so a recompute always sees one consistent view of every field.
//! Everything here is synchronous and single-threaded: by the time
//! [`PreviewSync::observe`] returns, listeners have seen the new points and
//! the most recent call fully determines displayed state.

use crate::metadata::ChartMetadata;
use lc_core::PlotPoint;
use lc_curve::{CurveSource, generate_curve};

/// An atomic read of the whole form: curve source plus metadata.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormSnapshot {
    pub source: CurveSource,
    pub meta: ChartMetadata,
}

/// Cancellation handle returned by [`PreviewSync::subscribe`].
///
/// Held by the owning UI surface and passed back to
/// [`PreviewSync::unsubscribe`] on teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription {
    id: u64,
}

type Listener = Box<dyn FnMut(&[PlotPoint], &ChartMetadata)>;

/// Recomputes the preview point sequence when the observed form changes and
/// pushes the result to registered listeners.
pub struct PreviewSync {
    last: Option<FormSnapshot>,
    points: Vec<PlotPoint>,
    listeners: Vec<(u64, Listener)>,
    next_listener_id: u64,
}

impl Default for PreviewSync {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewSync {
    pub fn new() -> Self {
        Self {
            last: None,
            points: Vec::new(),
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    /// Register a listener; it fires once per accepted snapshot.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&[PlotPoint], &ChartMetadata) + 'static,
    ) -> Subscription {
        let id = self.next_listener_id;
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        Subscription { id }
    }

    /// Release a listener registration. Releasing twice is a no-op.
    pub fn unsubscribe(&mut self, subscription: &Subscription) {
        self.listeners.retain(|(id, _)| *id != subscription.id);
    }

    /// Observe the current form state.
    ///
    /// If the snapshot differs from the last accepted one, the point
    /// sequence is recomputed synchronously and every listener is notified
    /// exactly once. An unchanged snapshot does nothing, so rapid repeated
    /// observation (an immediate-mode UI calling once per frame) does not
    /// re-render. Returns whether a push happened.
    pub fn observe(&mut self, snapshot: FormSnapshot) -> bool {
        if self.last.as_ref() == Some(&snapshot) {
            return false;
        }
        self.points = generate_curve(&snapshot.source);
        self.last = Some(snapshot);
        self.notify();
        true
    }

    /// Regenerate from the last accepted snapshot without a field change.
    ///
    /// This backs the shuffle button: random-mode jitter is drawn fresh even
    /// though no form value moved. Does nothing before the first snapshot.
    pub fn refresh(&mut self) -> bool {
        let Some(snapshot) = self.last.as_ref() else {
            return false;
        };
        self.points = generate_curve(&snapshot.source);
        self.notify();
        true
    }

    /// The current preview point sequence.
    pub fn points(&self) -> &[PlotPoint] {
        &self.points
    }

    /// Metadata of the last accepted snapshot, if any.
    pub fn meta(&self) -> Option<&ChartMetadata> {
        self.last.as_ref().map(|s| &s.meta)
    }

    fn notify(&mut self) {
        let meta = match self.last.as_ref() {
            Some(snapshot) => &snapshot.meta,
            None => return,
        };
        for (_, listener) in &mut self.listeners {
            listener(&self.points, meta);
        }
    }
}
