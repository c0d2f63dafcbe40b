//! Filename-Display: mirrors the chosen file's name into the upload widget.
//!
//! The host reads the names off the file input's selection and calls
//! `on_change`; an empty selection leaves the label as it was.

use tracing::debug;

/// A text node the display writes into.
pub trait Label {
    fn set_text(&self, text: &str);
}

/// Keeps an upload widget's label in step with its file input.
#[derive(Debug, Clone)]
pub struct FilenameDisplay<L> {
    label: L,
}

impl<L: Label> FilenameDisplay<L> {
    pub fn new(label: L) -> Self {
        Self { label }
    }

    /// Handle a change of selection. Returns the name written, if any.
    pub fn on_change<I, S>(&self, names: I) -> Option<S>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let first = names.into_iter().next()?;
        debug!(file = first.as_ref(), "file selected");
        self.label.set_text(first.as_ref());
        Some(first)
    }
}
