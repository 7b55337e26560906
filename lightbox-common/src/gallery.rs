use crate::{NavAction, PhotoId};

/// Ordered list of the photos in a gallery.
///
/// Navigation stops at either end rather than wrapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryIndex {
    ids: Vec<PhotoId>,
}

impl GalleryIndex {
    pub fn new(ids: Vec<PhotoId>) -> Self {
        Self { ids }
    }

    pub fn ids(&self) -> &[PhotoId] {
        &self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn position(&self, id: &PhotoId) -> Option<usize> {
        self.ids.iter().position(|i| i == id)
    }

    pub fn next(&self, id: &PhotoId) -> Option<&PhotoId> {
        let pos = self.position(id)?;
        self.ids.get(pos + 1)
    }

    pub fn prev(&self, id: &PhotoId) -> Option<&PhotoId> {
        let pos = self.position(id)?;
        pos.checked_sub(1).and_then(|p| self.ids.get(p))
    }

    /// Photo reached from `id` by a prev/next action. `Close` leaves the
    /// gallery and has no target.
    pub fn step(&self, id: &PhotoId, action: NavAction) -> Option<&PhotoId> {
        match action {
            NavAction::Next => self.next(id),
            NavAction::Prev => self.prev(id),
            NavAction::Close => None,
        }
    }
}
