//! Drag tracking for the template.
//!
//! Two phases: `Idle` and `Dragging`. A gesture fixes the offset between the
//! pointer and the template centre when it starts, so moving never snaps the
//! template onto the cursor. Move/end listeners exist only while a drag is in
//! progress: the host hands back a guard on gesture start and the tracker
//! drops it on gesture end.

use crate::geometry::Rect;
use glam::Vec2;

/// What the tracker needs from the page hosting it.
pub trait DragHost {
    /// Owned handle on the move/end listeners; dropping it releases them.
    type Listeners;

    /// Current bounding box of the container, or `None` if it is not mounted.
    fn container_rect(&self) -> Option<Rect>;

    /// Bring any cached geometry (base positions) up to date before a drag.
    fn refresh_geometry(&self);

    fn acquire_listeners(&self) -> Self::Listeners;
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        offset: Vec2,
    },
}

pub struct DragTracker<L> {
    position: Vec2,
    rect: Rect,
    phase: DragPhase,
    listeners: Option<L>,
}

impl<L> DragTracker<L> {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            rect: Rect::default(),
            phase: DragPhase::Idle,
            listeners: None,
        }
    }

    /// Template centre relative to the container.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    #[inline]
    pub fn has_listeners(&self) -> bool {
        self.listeners.is_some()
    }

    /// Re-read the container's bounding box; an unmounted container leaves
    /// the previous box in place. Does not touch the drag offset.
    pub fn update_rect<H>(&mut self, host: &H)
    where
        H: DragHost<Listeners = L>,
    {
        if let Some(rect) = host.container_rect() {
            self.rect = rect;
        }
    }

    /// Start a gesture at viewport point `client`. Restarts an in-flight
    /// gesture if one is active.
    pub fn pointer_down<H>(&mut self, host: &H, client: Vec2)
    where
        H: DragHost<Listeners = L>,
    {
        self.update_rect(host);
        host.refresh_geometry();

        let pointer = self.rect.to_local(client);
        let offset = pointer - self.position;
        self.phase = DragPhase::Dragging { offset };

        // Release the previous gesture's listeners before taking new ones.
        self.listeners = None;
        self.listeners = Some(host.acquire_listeners());

        log::debug!(
            "[drag] begin at ({:.1},{:.1}) offset ({:.1},{:.1})",
            pointer.x,
            pointer.y,
            offset.x,
            offset.y
        );
    }

    /// Follow the pointer. Returns `true` when the position changed.
    pub fn pointer_move(&mut self, client: Vec2) -> bool {
        let DragPhase::Dragging { offset } = self.phase else {
            return false;
        };
        let next = self.rect.to_local(client) - offset;
        let changed = next != self.position;
        self.position = next;
        changed
    }

    pub fn pointer_end(&mut self) {
        if self.is_dragging() {
            log::debug!(
                "[drag] end at ({:.1},{:.1})",
                self.position.x,
                self.position.y
            );
        }
        self.phase = DragPhase::Idle;
        self.listeners = None;
    }
}
