//! Per-tab page state reported by the content host.

use url::Url;

use crate::url_util;

/// Where a page is in its load lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// Nothing has been navigated yet (new-tab page).
    #[default]
    Blank,
    /// A navigation is in flight.
    Loading,
    /// The page finished loading.
    Ready,
    /// The load failed.
    Failed,
}

/// The web content shown by one navigator, as far as the chrome knows it.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Current (possibly still loading) URL.
    pub url: Url,
    /// Title reported by the content host.
    pub title: Option<String>,
    /// Load lifecycle phase.
    pub phase: LoadPhase,
    /// Load progress in `0.0..=1.0`.
    pub progress: f32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            url: url_util::new_tab_url(),
            title: None,
            phase: LoadPhase::Blank,
            progress: 0.0,
        }
    }
}

impl Page {
    /// Begin navigating to a URL.
    pub fn begin(&mut self, url: Url) {
        self.url = url;
        self.title = None;
        self.phase = LoadPhase::Loading;
        self.progress = 0.0;
    }

    /// Record a progress report from the host.
    pub fn progress_to(&mut self, progress: f32) {
        if self.phase == LoadPhase::Loading {
            self.progress = progress.clamp(0.0, 1.0);
        }
    }

    /// The load completed with a resolved title.
    pub fn finish(&mut self, title: String) {
        self.title = Some(title);
        self.phase = LoadPhase::Ready;
        self.progress = 1.0;
    }

    /// The load failed.
    pub fn fail(&mut self) {
        self.phase = LoadPhase::Failed;
        self.progress = 0.0;
    }

    /// Whether this is the blank new-tab page.
    pub fn is_new_tab(&self) -> bool {
        url_util::is_new_tab(&self.url)
    }

    /// Title for the tab strip: resolved title, else the prettified URL.
    pub fn display_title(&self) -> String {
        if self.is_new_tab() {
            return "New Tab".to_owned();
        }
        match &self.title {
            Some(title) if !title.is_empty() => title.clone(),
            _ => url_util::prettify(&self.url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_lifecycle() {
        let mut page = Page::default();
        assert_eq!(page.phase, LoadPhase::Blank);
        assert_eq!(page.display_title(), "New Tab");

        page.begin(Url::parse("https://example.com/").unwrap());
        assert_eq!(page.phase, LoadPhase::Loading);
        assert_eq!(page.display_title(), "example.com");

        page.progress_to(0.4);
        assert_eq!(page.progress, 0.4);

        page.finish("Example".to_owned());
        assert_eq!(page.phase, LoadPhase::Ready);
        assert_eq!(page.display_title(), "Example");
    }

    #[test]
    fn progress_reports_after_completion_are_ignored() {
        let mut page = Page::default();
        page.begin(Url::parse("https://example.com/").unwrap());
        page.finish("Example".to_owned());
        page.progress_to(0.2);
        assert_eq!(page.progress, 1.0);
    }
}
