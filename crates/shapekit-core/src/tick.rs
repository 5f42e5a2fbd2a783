//! Per-frame callback scheduling
//!
//! The animation loop of a viewer drives three pieces:
//! - [`Tick`]: an ordered registry of callbacks, grouped by name
//! - [`FramePacer`]: turns animation-frame timestamps into frame times and
//!   enforces an optional frame-rate cap
//! - [`FrameLoop`]: the two combined, advanced once per animation frame
//!
//! Nothing here renders; callers hook their renderer in as a callback.

use uuid::Uuid;

/// Group used by [`Tick::add`]
pub const DEFAULT_GROUP: &str = "default";

/// Callback invoked with `(delta_seconds, elapsed_seconds)`
pub type TickCallback = Box<dyn FnMut(f64, f64) + Send>;

/// Handle for removing a registered callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickId(Uuid);

impl TickId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for TickId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tick({})", &self.0.to_string()[..8])
    }
}

struct TickGroup {
    name: String,
    callbacks: Vec<(TickId, TickCallback)>,
}

/// Ordered registry of per-frame callbacks
///
/// Groups run in the order they were first used; callbacks within a group
/// run in insertion order.
#[derive(Default)]
pub struct Tick {
    groups: Vec<TickGroup>,
}

impl Tick {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback in the default group
    pub fn add<F>(&mut self, callback: F) -> TickId
    where
        F: FnMut(f64, f64) + Send + 'static,
    {
        self.add_to(DEFAULT_GROUP, callback)
    }

    /// Register a callback in a named group
    pub fn add_to<F>(&mut self, group: &str, callback: F) -> TickId
    where
        F: FnMut(f64, f64) + Send + 'static,
    {
        let id = TickId::new();
        let index = match self.groups.iter().position(|g| g.name == group) {
            Some(index) => index,
            None => {
                self.groups.push(TickGroup {
                    name: group.to_string(),
                    callbacks: Vec::new(),
                });
                self.groups.len() - 1
            }
        };
        self.groups[index].callbacks.push((id, Box::new(callback)));
        tracing::debug!("{} added to group '{}'", id, group);
        id
    }

    /// Remove a callback; returns false when the id is unknown
    pub fn remove(&mut self, id: TickId) -> bool {
        for group in &mut self.groups {
            if let Some(pos) = group.callbacks.iter().position(|(cb_id, _)| *cb_id == id) {
                let (_, callback) = group.callbacks.remove(pos);
                drop(callback);
                tracing::debug!("{} removed", id);
                return true;
            }
        }
        false
    }

    /// Drop every callback in a group, returning how many were removed
    pub fn clear_group(&mut self, group: &str) -> usize {
        match self.groups.iter().position(|g| g.name == group) {
            Some(index) => self.groups.remove(index).callbacks.len(),
            None => 0,
        }
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.callbacks.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invoke every callback once
    pub fn run(&mut self, delta: f64, elapsed: f64) {
        for group in &mut self.groups {
            for (_, callback) in &mut group.callbacks {
                callback(delta, elapsed);
            }
        }
    }
}

impl std::fmt::Debug for Tick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for group in &self.groups {
            map.entry(&group.name, &group.callbacks.len());
        }
        map.finish()
    }
}

/// Timing of a frame that was not skipped, in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Time since the previous animation frame
    pub delta: f64,
    /// Time since the loop started
    pub elapsed: f64,
}

/// Converts animation-frame timestamps into [`FrameTime`]s
///
/// With a frame-rate cap, deltas accumulate until `1 / limit_fps` seconds
/// have passed; frames before that are skipped.
#[derive(Debug, Clone, Default)]
pub struct FramePacer {
    limit_fps: Option<f64>,
    previous: f64,
    accumulated: f64,
}

impl FramePacer {
    pub fn new(limit_fps: Option<f64>) -> Self {
        Self {
            limit_fps: limit_fps.filter(|fps| fps.is_finite() && *fps > 0.0),
            previous: 0.0,
            accumulated: 0.0,
        }
    }

    pub fn limit_fps(&self) -> Option<f64> {
        self.limit_fps
    }

    /// Feed the timestamp (milliseconds since start) of an animation frame
    ///
    /// Returns `None` when the frame is skipped by the cap. The reported
    /// delta is the gap since the previous animation frame, skipped or not.
    pub fn advance(&mut self, timestamp_ms: f64) -> Option<FrameTime> {
        let elapsed = timestamp_ms / 1000.0;
        let delta = elapsed - self.previous;
        self.previous = elapsed;

        if let Some(fps) = self.limit_fps {
            self.accumulated += delta;
            if self.accumulated < 1.0 / fps {
                return None;
            }
            self.accumulated = 0.0;
        }

        Some(FrameTime { delta, elapsed })
    }
}

/// A [`FramePacer`] driving a [`Tick`] registry
#[derive(Debug, Default)]
pub struct FrameLoop {
    pub pacer: FramePacer,
    pub tick: Tick,
}

impl FrameLoop {
    pub fn new(limit_fps: Option<f64>) -> Self {
        Self {
            pacer: FramePacer::new(limit_fps),
            tick: Tick::new(),
        }
    }

    /// Advance one animation frame, running callbacks unless it is skipped
    pub fn advance(&mut self, timestamp_ms: f64) -> Option<FrameTime> {
        let frame = self.pacer.advance(timestamp_ms)?;
        self.tick.run(frame.delta, frame.elapsed);
        Some(frame)
    }
}
