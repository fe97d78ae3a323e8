use super::preview::{PreviewFactory, PreviewHandle};
use super::selection::screen_selection;
use crate::shared::http::LocalFile;
use contracts::domain::common::MediaRef;
use contracts::shared::limits::FileLimits;
use contracts::shared::validation::ValidationError;
use std::rc::Rc;

struct ExistingMedia {
    media: MediaRef,
    keep: bool,
}

struct PendingMedia<P: PreviewFactory> {
    file: P::File,
    preview: Option<PreviewHandle<P>>,
}

/// One tile in the picker, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSlot {
    pub index: usize,
    pub url: Option<String>,
    pub label: String,
    pub is_new: bool,
}

/// Media of one draft: saved references plus files picked in this session.
///
/// Slots list retained existing media first, then pending files. Removing a
/// slot below the retained count excludes that reference on save; any other
/// slot drops the pending file and releases its preview.
pub struct MediaSet<P: PreviewFactory> {
    factory: Rc<P>,
    limits: FileLimits,
    replace_on_select: bool,
    existing: Vec<ExistingMedia>,
    pending: Vec<PendingMedia<P>>,
    notice: Option<ValidationError>,
}

impl<P: PreviewFactory> MediaSet<P> {
    pub fn new(factory: Rc<P>, limits: FileLimits) -> Self {
        Self {
            factory,
            limits,
            replace_on_select: false,
            existing: Vec::new(),
            pending: Vec::new(),
            notice: None,
        }
    }

    /// Single-file picker: a new selection replaces whatever is there
    pub fn single(factory: Rc<P>, limits: FileLimits) -> Self {
        Self {
            replace_on_select: true,
            ..Self::new(factory, limits)
        }
    }

    pub fn with_existing(mut self, media: impl IntoIterator<Item = MediaRef>) -> Self {
        self.existing = media
            .into_iter()
            .filter(|m| !m.is_empty())
            .map(|media| ExistingMedia { media, keep: true })
            .collect();
        self
    }

    /// Screens `files` against the limits and previews the accepted ones
    pub fn select(&mut self, files: Vec<P::File>) {
        if self.replace_on_select {
            let screened = screen_selection(files, 0, &self.limits);
            self.notice = screened.notice;
            if let Some(file) = screened.accepted.into_iter().next() {
                for existing in &mut self.existing {
                    existing.keep = false;
                }
                self.pending.clear();
                self.push_pending(file);
            }
            return;
        }

        let occupied = self.retained_count() + self.pending.len();
        let screened = screen_selection(files, occupied, &self.limits);
        self.notice = screened.notice;
        for file in screened.accepted {
            self.push_pending(file);
        }
    }

    fn push_pending(&mut self, file: P::File) {
        let preview = PreviewHandle::acquire(&self.factory, &file);
        self.pending.push(PendingMedia { file, preview });
    }

    pub fn remove(&mut self, index: usize) {
        let retained = self.retained_count();
        if index < retained {
            if let Some(existing) = self.existing.iter_mut().filter(|e| e.keep).nth(index) {
                existing.keep = false;
            }
        } else if index - retained < self.pending.len() {
            self.pending.remove(index - retained);
        }
    }

    pub fn slots(&self) -> Vec<MediaSlot> {
        let existing = self.retained().into_iter().map(|m| MediaSlot {
            index: 0,
            url: Some(m.url.clone()),
            label: m.url.rsplit('/').next().unwrap_or_default().to_string(),
            is_new: false,
        });
        let pending = self.pending.iter().map(|p| MediaSlot {
            index: 0,
            url: p.preview.as_ref().map(|h| h.url().to_string()),
            label: p.file.file_name(),
            is_new: true,
        });
        existing
            .chain(pending)
            .enumerate()
            .map(|(index, slot)| MediaSlot { index, ..slot })
            .collect()
    }

    pub fn retained(&self) -> Vec<&MediaRef> {
        self.existing
            .iter()
            .filter(|e| e.keep)
            .map(|e| &e.media)
            .collect()
    }

    pub fn retained_count(&self) -> usize {
        self.existing.iter().filter(|e| e.keep).count()
    }

    /// Whether any saved reference was removed in this session
    pub fn dropped_existing(&self) -> bool {
        self.existing.iter().any(|e| !e.keep)
    }

    pub fn pending_files(&self) -> Vec<P::File> {
        self.pending.iter().map(|p| p.file.clone()).collect()
    }

    pub fn preview_count(&self) -> usize {
        self.pending.iter().filter(|p| p.preview.is_some()).count()
    }

    pub fn len(&self) -> usize {
        self.retained_count() + self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn notice(&self) -> Option<&ValidationError> {
        self.notice.as_ref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}
