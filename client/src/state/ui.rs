//! Root UI state: selected page, theme, and the AI key gate.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns in plain structs so the transition
//! rules can be tested without a browser. `App` wraps each in an `RwSignal`
//! and provides it as context.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Top-level view. Navigation replaces this value; there is no history.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Landing,
    Login,
    Signup,
}

/// In-page anchors reachable from the navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Features,
    CreativeLab,
    Pricing,
    Generator,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Features, Section::CreativeLab, Section::Pricing, Section::Generator];

    /// DOM id of the section element.
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Features => "features",
            Self::CreativeLab => "creative-lab",
            Self::Pricing => "pricing",
            Self::Generator => "demo",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Features => "Features",
            Self::CreativeLab => "Creative Studio",
            Self::Pricing => "Pricing",
            Self::Generator => "Generator",
        }
    }
}

/// UI state for the page selector, dark mode, and transient notices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub page: Page,
    pub dark_mode: bool,
    /// One-line banner shown under the navbar (e.g. AI not configured).
    pub notice: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self { page: Page::Landing, dark_mode: true, notice: None }
    }
}

impl UiState {
    /// Replace the current page. Returns `true` when the page changed.
    pub fn navigate(&mut self, page: Page) -> bool {
        let changed = self.page != page;
        self.page = page;
        changed
    }
}

// =============================================================================
// KEY GATE
// =============================================================================

/// Whether the generative-AI backend has a usable key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyStatus {
    /// Not resolved yet.
    #[default]
    Unknown,
    Ready,
    Missing,
}

impl From<bool> for KeyStatus {
    fn from(has_key: bool) -> Self {
        if has_key { Self::Ready } else { Self::Missing }
    }
}

/// What the root renders inside `<main>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootView {
    Loading,
    Activation,
    Content,
}

/// Key status plus whether a managed host is present.
///
/// Only a managed host blocks the page; without one the status just decides
/// whether the demo widgets may call the API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyGate {
    pub host_present: bool,
    pub status: KeyStatus,
}

impl KeyGate {
    #[must_use]
    pub fn view(self) -> RootView {
        if !self.host_present {
            return RootView::Content;
        }
        match self.status {
            KeyStatus::Unknown => RootView::Loading,
            KeyStatus::Missing => RootView::Activation,
            KeyStatus::Ready => RootView::Content,
        }
    }

    /// Widgets may submit unless the key is known to be missing.
    #[must_use]
    pub fn widgets_activated(self) -> bool {
        self.status != KeyStatus::Missing
    }
}
