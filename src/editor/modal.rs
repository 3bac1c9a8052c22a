//! Edit-Modal Controller
//!
//! Tracks which item is being renamed and the text typed so far.

use tracing::debug;

use crate::models::ItemId;

/// A confirmed rename, ready to apply to the item store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleEdit {
    pub id: ItemId,
    pub title: String,
}

/// Modal state. The dialog is visible exactly while `Open`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditModal {
    #[default]
    Closed,
    Open {
        target: ItemId,
        draft: String,
    },
}

impl EditModal {
    pub fn is_open(&self) -> bool {
        matches!(self, EditModal::Open { .. })
    }

    pub fn target(&self) -> Option<&ItemId> {
        match self {
            EditModal::Open { target, .. } => Some(target),
            EditModal::Closed => None,
        }
    }

    /// Draft text, empty while closed
    pub fn draft(&self) -> &str {
        match self {
            EditModal::Open { draft, .. } => draft,
            EditModal::Closed => "",
        }
    }

    /// Open for `target`, seeding the draft with its current title.
    /// Replaces any session already open.
    pub fn open(&mut self, target: ItemId, current_title: impl Into<String>) {
        debug!(%target, "edit modal: open");
        *self = EditModal::Open {
            target,
            draft: current_title.into(),
        };
    }

    pub fn update_draft(&mut self, text: impl Into<String>) {
        if let EditModal::Open { draft, .. } = self {
            *draft = text.into();
        }
    }

    /// Close and hand back the rename to apply. The draft is not validated.
    pub fn confirm(&mut self) -> Option<TitleEdit> {
        match std::mem::take(self) {
            EditModal::Open { target, draft } => {
                debug!(%target, "edit modal: confirm");
                Some(TitleEdit { id: target, title: draft })
            }
            EditModal::Closed => None,
        }
    }

    /// Close, discarding the draft
    pub fn cancel(&mut self) {
        if self.is_open() {
            debug!("edit modal: cancel");
        }
        *self = EditModal::Closed;
    }
}
