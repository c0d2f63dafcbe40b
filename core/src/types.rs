//! Values handed back to the host after a round-trip.

/// The markup returned by the endpoint, shown in place of the whole page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseDocument {
    /// Status of the final response, after redirects.
    pub status: u16,
    /// Raw response text. Not validated as HTML.
    pub markup: String,
}
