use std::collections::BTreeSet;

use tracing::debug;

use crate::geometry::{Point, Size};
use crate::viewport::ViewportState;
use crate::world::{ObjectId, StarSystem};

/// Find the object whose centre lies closest to a widget-local point, within
/// `radius` screen pixels.
pub fn pick_object(
    system: &StarSystem,
    viewport: &ViewportState,
    local: Point,
    size: Size,
    radius: f64,
) -> Option<ObjectId> {
    let radius_sq = radius * radius;
    system
        .placeables()
        .map(|p| (p.id, viewport.world_to_local(p.pos, size).distance_sq(local)))
        .filter(|(_, d)| *d < radius_sq)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}

/// Objects currently selected in one editor view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    selected: BTreeSet<ObjectId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.selected.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.selected.iter().copied()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn add(&mut self, id: ObjectId) {
        self.selected.insert(id);
    }

    pub fn toggle(&mut self, id: ObjectId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Apply a classified click. `hit` is the picked object, if any.
    ///
    /// Plain clicks replace the selection (or clear it on empty space);
    /// additive clicks toggle the hit object and ignore empty space.
    pub fn handle_click(&mut self, hit: Option<ObjectId>, additive: bool) {
        match (hit, additive) {
            (Some(id), true) => self.toggle(id),
            (Some(id), false) => {
                self.selected.clear();
                self.selected.insert(id);
            }
            (None, false) => self.selected.clear(),
            (None, true) => {}
        }
        debug!(count = self.selected.len(), "Selection updated");
    }

    /// Text for the editor's "selected" field; empty when nothing is selected.
    pub fn summary(&self, system: &StarSystem) -> String {
        if self.selected.is_empty() {
            return String::new();
        }
        let names: Vec<String> = self
            .selected
            .iter()
            .filter_map(|id| system.label(*id))
            .collect();
        format!("Selected: {}", names.join(", "))
    }
}
