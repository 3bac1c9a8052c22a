//! Add-form draft buffer.

/// Text typed into the "add item" field, not yet submitted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewItemDraft {
    text: String,
}

impl NewItemDraft {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Take the current text, leaving the buffer empty
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}
