//! Per-tab navigator: the concrete card type managed by the tab deck.
//!
//! A navigator owns its location-bar input and the page state the content
//! host reports back. Lifecycle transitions come from the deck; everything
//! else arrives as [`NavigatorAction`]s routed through the deck's `Modify`.

use lantern_core::{Card, Effects, delegate};
use url::Url;

use crate::error::ShellError;
use crate::service::navigation::{self, PageInfo};
use crate::state::input::{Input, InputAction};
use crate::state::page::Page;
use crate::url_util;

/// Options for opening a navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigatorFlags {
    /// URL the tab starts on.
    pub url: Url,
    /// Open behind the current tab instead of taking its place.
    pub in_background: bool,
}

impl NavigatorFlags {
    /// Flags for a fresh new-tab page.
    pub fn new_tab() -> Self {
        Self {
            url: url_util::new_tab_url(),
            in_background: false,
        }
    }

    /// Flags for opening a specific URL.
    pub fn for_url(url: Url) -> Self {
        Self {
            url,
            in_background: false,
        }
    }
}

/// Actions a navigator handles.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigatorAction {
    /// Location-bar input actions.
    Input(InputAction),
    /// Navigate this tab to a URL.
    Navigate(Url),
    /// Progress report from the content host.
    LoadProgressed(f32),
    /// The content host finished a load.
    Loaded(PageInfo),
    /// The content host gave up on a load.
    LoadFailed(ShellError),
    /// The exit transition finished; the owner should drop this card.
    Closed,
}

/// State of one tab.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    /// Location-bar input owned by this tab.
    pub input: Input,
    /// Page state reported by the content host.
    pub page: Page,
    /// Whether this tab is the foreground tab.
    pub is_active: bool,
    /// Whether this tab is highlighted in the tab strip.
    pub is_selected: bool,
    /// Whether this tab is running its exit transition.
    pub is_closing: bool,
}

impl Navigator {
    fn load(&mut self, url: Url) -> Effects<NavigatorAction> {
        self.page.begin(url.clone());
        self.input.update(InputAction::Blur);
        Effects::perform(async move {
            match navigation::load(url).await {
                Ok(info) => NavigatorAction::Loaded(info),
                Err(err) => NavigatorAction::LoadFailed(err),
            }
        })
    }
}

impl Card for Navigator {
    type Action = NavigatorAction;
    type Flags = NavigatorFlags;

    fn init(flags: NavigatorFlags) -> (Self, Effects<NavigatorAction>) {
        let starts_blank = url_util::is_new_tab(&flags.url);
        let mut navigator = Self {
            input: if starts_blank && !flags.in_background {
                Input::editing()
            } else {
                Input::default()
            },
            page: Page::default(),
            is_active: false,
            is_selected: false,
            is_closing: false,
        };

        let fx = if starts_blank {
            Effects::none()
        } else {
            navigator.load(flags.url)
        };
        (navigator, fx)
    }

    fn update(&mut self, action: NavigatorAction) -> Effects<NavigatorAction> {
        match action {
            NavigatorAction::Input(action) => delegate(
                self,
                |navigator| &mut navigator.input,
                Input::update,
                NavigatorAction::Input,
                action,
            ),
            NavigatorAction::Navigate(url) => self.load(url),
            NavigatorAction::LoadProgressed(progress) => {
                self.page.progress_to(progress);
                Effects::none()
            }
            NavigatorAction::Loaded(info) => {
                self.page.url = info.url;
                self.page.finish(info.title);
                Effects::none()
            }
            NavigatorAction::LoadFailed(err) => {
                tracing::warn!(%err, "page load failed");
                self.page.fail();
                Effects::none()
            }
            // Consumed by the owning deck's parent, not here.
            NavigatorAction::Closed => Effects::none(),
        }
    }

    fn select(&mut self) -> Effects<NavigatorAction> {
        self.is_selected = true;
        Effects::none()
    }

    fn deselect(&mut self) -> Effects<NavigatorAction> {
        self.is_selected = false;
        Effects::none()
    }

    fn activate(&mut self) -> Effects<NavigatorAction> {
        self.is_active = true;
        if self.page.is_new_tab() {
            self.input.update(InputAction::Focus)
                .map(NavigatorAction::Input)
        } else {
            Effects::none()
        }
    }

    fn deactivate(&mut self) -> Effects<NavigatorAction> {
        self.is_active = false;
        self.input.update(InputAction::Blur)
            .map(NavigatorAction::Input)
    }

    fn close(&mut self) -> Effects<NavigatorAction> {
        self.is_closing = true;
        Effects::receive(NavigatorAction::Closed)
    }
}
