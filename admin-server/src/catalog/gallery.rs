//! Product Image Role Assignment
//!
//! Tracks which single gallery entry (if any) is the "display" image and
//! which single entry (if any) is the "hover" image. The two roles can
//! never point at the same entry; a conflicting assignment is rejected
//! before any state changes and surfaced to the caller.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GalleryError {
    #[error("The same image cannot be used for both display and hover roles")]
    RoleConflict,

    #[error("Image index {0} is out of range")]
    OutOfRange(usize),
}

/// Ordered gallery of uploaded image URLs plus the two optional role
/// pointers. Index-based while editing; resolved to URLs at save time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<String>,
    display: Option<usize>,
    hover: Option<usize>,
}

impl Gallery {
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images,
            display: None,
            hover: None,
        }
    }

    /// Rebuild editing state from persisted fields, resolving the stored
    /// role URLs back to indices. A role URL that is no longer part of
    /// the gallery is dropped rather than kept dangling.
    pub fn from_persisted(
        images: Vec<String>,
        display_image: Option<&str>,
        hover_image: Option<&str>,
    ) -> Self {
        let display = display_image.and_then(|url| images.iter().position(|i| i == url));
        let hover = hover_image.and_then(|url| images.iter().position(|i| i == url));
        // Persisted rows should already satisfy the exclusivity invariant;
        // if one doesn't, hover loses.
        let hover = if hover.is_some() && hover == display {
            None
        } else {
            hover
        };
        Self {
            images,
            display,
            hover,
        }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn display_index(&self) -> Option<usize> {
        self.display
    }

    pub fn hover_index(&self) -> Option<usize> {
        self.hover
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Append one successfully uploaded batch, in upload order. A failed
    /// batch appends nothing; the caller surfaces the error instead.
    pub fn append_urls(&mut self, urls: impl IntoIterator<Item = String>) {
        self.images.extend(urls);
    }

    /// Remove a URL from the gallery. If the removed entry held a role,
    /// that role becomes unassigned (never reassigned automatically).
    /// Removing a URL that is not present is a no-op.
    pub fn remove_url(&mut self, url: &str) {
        let Some(index) = self.images.iter().position(|i| i == url) else {
            return;
        };
        self.images.remove(index);
        self.display = shift_after_removal(self.display, index);
        self.hover = shift_after_removal(self.hover, index);
    }

    pub fn set_display(&mut self, index: usize) -> Result<(), GalleryError> {
        if index >= self.images.len() {
            return Err(GalleryError::OutOfRange(index));
        }
        if self.hover == Some(index) {
            return Err(GalleryError::RoleConflict);
        }
        self.display = Some(index);
        Ok(())
    }

    pub fn set_hover(&mut self, index: usize) -> Result<(), GalleryError> {
        if index >= self.images.len() {
            return Err(GalleryError::OutOfRange(index));
        }
        if self.display == Some(index) {
            return Err(GalleryError::RoleConflict);
        }
        self.hover = Some(index);
        Ok(())
    }

    pub fn clear_display(&mut self) {
        self.display = None;
    }

    pub fn clear_hover(&mut self) {
        self.hover = None;
    }

    /// Compute the persisted `display_image` / `hover_image` values.
    ///
    /// With `auto_fallback`, an unassigned display defaults to the first
    /// gallery entry and an unassigned hover to the first entry distinct
    /// from the resolved display. A gallery of zero or one entries
    /// resolves hover to `None`. When both values are non-null they are
    /// guaranteed distinct.
    pub fn resolve_roles(&self, auto_fallback: bool) -> (Option<String>, Option<String>) {
        let display = self
            .display
            .and_then(|i| self.images.get(i).cloned())
            .or_else(|| {
                if auto_fallback {
                    self.images.first().cloned()
                } else {
                    None
                }
            });

        let hover = self
            .hover
            .and_then(|i| self.images.get(i).cloned())
            .or_else(|| {
                if auto_fallback {
                    self.images
                        .iter()
                        .find(|url| Some(url.as_str()) != display.as_deref())
                        .cloned()
                } else {
                    None
                }
            });

        // Exclusivity holds even for inconsistent explicit state
        let hover = if hover.is_some() && hover == display {
            None
        } else {
            hover
        };

        (display, hover)
    }
}

fn shift_after_removal(role: Option<usize>, removed: usize) -> Option<usize> {
    match role {
        Some(i) if i == removed => None,
        Some(i) if i > removed => Some(i - 1),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery(urls: &[&str]) -> Gallery {
        Gallery::new(urls.iter().map(|u| u.to_string()).collect())
    }

    #[test]
    fn roles_are_mutually_exclusive() {
        let mut g = gallery(&["a.png", "b.png", "c.png"]);
        g.set_display(0).unwrap();
        assert_eq!(g.set_hover(0), Err(GalleryError::RoleConflict));
        // Rejected assignment leaves prior state untouched
        assert_eq!(g.display_index(), Some(0));
        assert_eq!(g.hover_index(), None);

        g.set_hover(1).unwrap();
        assert_eq!(g.set_display(1), Err(GalleryError::RoleConflict));
        assert_eq!(g.display_index(), Some(0));
        assert_eq!(g.hover_index(), Some(1));
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut g = gallery(&["a.png"]);
        assert_eq!(g.set_display(3), Err(GalleryError::OutOfRange(3)));
        assert_eq!(g.display_index(), None);
    }

    #[test]
    fn auto_fallback_uses_first_and_second_entries() {
        let g = gallery(&["a.png", "b.png", "c.png"]);
        let (display, hover) = g.resolve_roles(true);
        assert_eq!(display.as_deref(), Some("a.png"));
        assert_eq!(hover.as_deref(), Some("b.png"));
    }

    #[test]
    fn removal_shifts_fallback_forward() {
        let mut g = gallery(&["a.png", "b.png", "c.png"]);
        g.remove_url("a.png");
        assert_eq!(g.images(), &["b.png".to_string(), "c.png".to_string()]);
        let (display, hover) = g.resolve_roles(true);
        assert_eq!(display.as_deref(), Some("b.png"));
        assert_eq!(hover.as_deref(), Some("c.png"));
    }

    #[test]
    fn removing_a_role_holder_unassigns_the_role() {
        let mut g = gallery(&["a.png", "b.png", "c.png"]);
        g.set_display(0).unwrap();
        g.set_hover(2).unwrap();

        g.remove_url("a.png");
        assert_eq!(g.display_index(), None);
        // Hover pointed past the removed entry and shifts down with it
        assert_eq!(g.hover_index(), Some(1));
        assert_eq!(g.resolve_roles(false).1.as_deref(), Some("c.png"));
    }

    #[test]
    fn removing_an_absent_url_is_a_noop() {
        let mut g = gallery(&["a.png", "b.png"]);
        g.remove_url("missing.png");
        assert_eq!(g.len(), 2);
    }

    #[test]
    fn small_galleries_resolve_hover_to_none() {
        let (display, hover) = gallery(&["a.png"]).resolve_roles(true);
        assert_eq!(display.as_deref(), Some("a.png"));
        assert_eq!(hover, None);

        let (display, hover) = gallery(&[]).resolve_roles(true);
        assert_eq!(display, None);
        assert_eq!(hover, None);
    }

    #[test]
    fn no_fallback_without_opt_in() {
        let g = gallery(&["a.png", "b.png"]);
        assert_eq!(g.resolve_roles(false), (None, None));
    }

    #[test]
    fn explicit_roles_win_over_fallback() {
        let mut g = gallery(&["a.png", "b.png", "c.png"]);
        g.set_display(2).unwrap();
        g.set_hover(0).unwrap();
        let (display, hover) = g.resolve_roles(true);
        assert_eq!(display.as_deref(), Some("c.png"));
        assert_eq!(hover.as_deref(), Some("a.png"));
    }

    #[test]
    fn persisted_roles_round_trip_to_indices() {
        let g = Gallery::from_persisted(
            vec!["a.png".into(), "b.png".into()],
            Some("b.png"),
            Some("a.png"),
        );
        assert_eq!(g.display_index(), Some(1));
        assert_eq!(g.hover_index(), Some(0));

        // Dangling role URL is dropped
        let g = Gallery::from_persisted(vec!["a.png".into()], Some("gone.png"), None);
        assert_eq!(g.display_index(), None);
    }
}
