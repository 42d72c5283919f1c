use crate::api::types::BodyId;

/// Input events the controller understands.
/// Pointer positions are normalized device coordinates (x right, y up, [-1, 1]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A touch/click began.
    PointerDown { x: f32, y: f32 },
    /// A touch/cursor moved.
    PointerMove { x: f32, y: f32 },
    /// A touch/click ended.
    PointerUp { x: f32, y: f32 },
    /// Scroll wheel; positive moves the camera away.
    Wheel { delta: f32 },
    /// Host-side picking: a drag began on `body`.
    DragStart { body: BodyId },
    /// Host-side picking: `body` is proposed at (x, y, z).
    Drag { body: BodyId, x: f32, y: f32, z: f32 },
    /// Host-side picking: the drag on `body` ended.
    DragEnd { body: BodyId },
}

/// Events pushed by the host between frames, handled in arrival order
/// at the start of the next tick.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Take every pending event, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Drop pending events without handling them.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
