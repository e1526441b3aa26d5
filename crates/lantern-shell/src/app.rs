//! Main application module.
//!
//! The chrome follows the Elm pattern: State → Message → Update → View. All
//! state changes happen in [`App::update`]; views are pure functions over
//! [`AppState`]. Component effects come back as [`lantern_core::Effects`]
//! batches and are converted to iced tasks at this boundary.

use iced::keyboard;
use iced::keyboard::key::Named;
use iced::{Element, Subscription, Task, Theme};
use lantern_core::{DeckAction, NO_SELECTION, index_of_offset};
use url::Url;

use crate::assist::AssistAction;
use crate::message::Message;
use crate::runtime;
use crate::service;
use crate::state::{AppState, InputAction, NavigatorAction, NavigatorFlags};
use crate::url_util;
use crate::view;

/// Main application struct.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create the application with its first tab already opening.
    pub fn new() -> (Self, Task<Message>) {
        let mut app = Self {
            state: AppState::new(),
        };
        let startup = app.update(Message::NewTab);
        (app, startup)
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Component actions
            // =================================================================
            Message::Navigators(action) => self.update_navigators(action),

            Message::Assistant(action) => self.update_assistant(action),

            // =================================================================
            // Chrome commands
            // =================================================================
            Message::NewTab => {
                let opened = self.state.navigators.open(NavigatorFlags::new_tab());
                let opened = runtime::task(opened, Message::Navigators);

                // Open leaves the fresh card in the background; the chrome
                // wants new tabs in the foreground.
                match self.state.navigators.index().first().cloned() {
                    Some(id) => Task::batch([opened, self.update(Message::ActivateTab(id))]),
                    None => opened,
                }
            }

            Message::CloseTab(id) => {
                let fx = self.state.navigators.close(&id);
                runtime::task(fx, Message::Navigators)
            }

            Message::ActivateTab(id) => {
                let activated = self.state.navigators.activate(&id);
                // Switching tabs resets the assistant.
                let dismissed = self
                    .state
                    .assistant
                    .update(&self.state.history, AssistAction::Reset);
                Task::batch([
                    runtime::task(activated, Message::Navigators),
                    runtime::task(dismissed, Message::Assistant),
                ])
            }

            Message::SelectTab(id) => {
                let fx = self.state.navigators.select(&id);
                runtime::task(fx, Message::Navigators)
            }

            Message::CycleTab(offset) => {
                let index = self.state.navigators.index();
                let current = self
                    .state
                    .navigators
                    .active_id()
                    .and_then(|id| index.iter().position(|entry| entry == id))
                    .map_or(NO_SELECTION, |position| position as isize);
                let next = index_of_offset(current, offset, index.len(), true);
                let next_id = usize::try_from(next)
                    .ok()
                    .and_then(|position| index.get(position))
                    .cloned();
                match next_id {
                    Some(id) => self.update(Message::ActivateTab(id)),
                    None => Task::none(),
                }
            }

            Message::ToggleSidebar => {
                self.state.is_sidebar_open = !self.state.is_sidebar_open;
                Task::none()
            }

            // =================================================================
            // Location bar
            // =================================================================
            Message::LocationChanged(text) => {
                let Some(id) = self.state.active_id() else {
                    return Task::none();
                };
                let edited = self
                    .state
                    .navigators
                    .modify(&id, NavigatorAction::Input(InputAction::Edit(text.clone())));

                let mut assistant_fx = self
                    .state
                    .assistant
                    .update(&self.state.history, AssistAction::Open);
                assistant_fx.append(
                    self.state
                        .assistant
                        .update(&self.state.history, AssistAction::Query(text)),
                );

                Task::batch([
                    runtime::task(edited, Message::Navigators),
                    runtime::task(assistant_fx, Message::Assistant),
                ])
            }

            Message::LocationSubmitted => self.submit_location(),

            // =================================================================
            // Global events
            // =================================================================
            Message::KeyPressed(key, modifiers) => self.handle_key_press(key, modifiers),

            Message::Noop => Task::none(),
        }
    }

    /// Dispatch a deck action, consuming the card actions that are addressed
    /// to the chrome rather than to the card itself.
    fn update_navigators(
        &mut self,
        action: DeckAction<NavigatorAction, NavigatorFlags>,
    ) -> Task<Message> {
        match &action {
            // A card finished its exit transition: take it out of the deck.
            DeckAction::Modify(id, NavigatorAction::Closed) => {
                let id = id.clone();
                let fx = self.state.navigators.remove(&id);
                return runtime::task(fx, Message::Navigators);
            }
            // A page settled: record the visit before the card stores it.
            DeckAction::Modify(_, NavigatorAction::Loaded(info)) => {
                self.state.history.record(&info.url, &info.title);
            }
            _ => {}
        }

        let fx = self.state.navigators.update(action);
        runtime::task(fx, Message::Navigators)
    }

    /// Dispatch an assistant action, consuming the outbound ones.
    fn update_assistant(&mut self, action: AssistAction) -> Task<Message> {
        match action {
            AssistAction::Suggest(completion) => {
                let Some(id) = self.state.active_id() else {
                    return Task::none();
                };
                let fx = self.state.navigators.modify(
                    &id,
                    NavigatorAction::Input(InputAction::Hint(Some(completion.text))),
                );
                runtime::task(fx, Message::Navigators)
            }
            AssistAction::Load(url) => self.navigate_active(url),
            action => {
                let fx = self.state.assistant.update(&self.state.history, action);
                runtime::task(fx, Message::Assistant)
            }
        }
    }

    /// Navigate the foreground tab and dismiss the assistant.
    fn navigate_active(&mut self, url: Url) -> Task<Message> {
        let Some(id) = self.state.active_id() else {
            return Task::none();
        };
        let navigated = self
            .state
            .navigators
            .modify(&id, NavigatorAction::Navigate(url));
        let dismissed = self
            .state
            .assistant
            .update(&self.state.history, AssistAction::Close);
        Task::batch([
            runtime::task(navigated, Message::Navigators),
            runtime::task(dismissed, Message::Assistant),
        ])
    }

    /// Resolve the location bar on Enter: text that reads as a URL loads
    /// directly, then a highlighted suggestion wins, then the text is
    /// searched.
    fn submit_location(&mut self) -> Task<Message> {
        let Some(navigator) = self.state.active_navigator() else {
            return Task::none();
        };
        let text = navigator.input.value.trim().to_owned();

        if let Some(url) = url_util::read(&text) {
            return self.navigate_active(url);
        }
        if let Some(url) = self.state.assistant.selected_url() {
            return self.navigate_active(url);
        }
        if text.is_empty() {
            return Task::none();
        }
        self.navigate_active(service::search::search_url(&text))
    }

    /// Handle keyboard shortcuts.
    #[allow(clippy::needless_pass_by_value)]
    fn handle_key_press(
        &mut self,
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        match key.as_ref() {
            // Cmd/Ctrl+T: new tab
            keyboard::Key::Character("t") if modifiers.command() => Task::done(Message::NewTab),

            // Cmd/Ctrl+W: close the foreground tab
            keyboard::Key::Character("w") if modifiers.command() => {
                match self.state.active_id() {
                    Some(id) => Task::done(Message::CloseTab(id)),
                    None => Task::none(),
                }
            }

            // Cmd/Ctrl+B: toggle the tab strip
            keyboard::Key::Character("b") if modifiers.command() => {
                Task::done(Message::ToggleSidebar)
            }

            // Cmd/Ctrl+L: bring the assistant up full-height
            keyboard::Key::Character("l") if modifiers.command() => {
                Task::done(Message::Assistant(AssistAction::Expand))
            }

            // Ctrl+Tab / Ctrl+Shift+Tab: cycle tabs
            keyboard::Key::Named(Named::Tab) if modifiers.control() => {
                let offset = if modifiers.shift() { -1 } else { 1 };
                Task::done(Message::CycleTab(offset))
            }

            // Arrows walk the suggestion list while the assistant is open
            keyboard::Key::Named(Named::ArrowDown) if self.state.assistant.is_open => {
                Task::done(Message::Assistant(AssistAction::SuggestNext))
            }

            keyboard::Key::Named(Named::ArrowUp) if self.state.assistant.is_open => {
                Task::done(Message::Assistant(AssistAction::SuggestPrevious))
            }

            // Escape drops the highlight first, then dismisses the assistant
            keyboard::Key::Named(Named::Escape) if self.state.assistant.is_open => {
                if self.state.assistant.selected == NO_SELECTION {
                    Task::done(Message::Assistant(AssistAction::Close))
                } else {
                    Task::done(Message::Assistant(AssistAction::Unselect))
                }
            }

            _ => Task::none(),
        }
    }

    /// Render the chrome.
    pub fn view(&self) -> Element<'_, Message> {
        view::view(&self.state)
    }

    /// Window title: the foreground page plus the product name.
    pub fn title(&self) -> String {
        match self.state.active_navigator() {
            Some(navigator) => format!("{} - Lantern", navigator.page.display_title()),
            None => "Lantern".to_owned(),
        }
    }

    /// Theme for the whole window.
    pub fn theme(&self) -> Theme {
        Theme::TokyoNight
    }

    /// Subscribe to runtime events.
    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Message::KeyPressed(key, modifiers)
            }
            _ => Message::Noop,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let (app, _) = App::new();
        app
    }

    #[test]
    fn startup_opens_and_activates_one_tab() {
        let app = app();
        assert_eq!(app.state.navigators.len(), 1);
        assert_eq!(
            app.state.navigators.active_id().map(String::as_str),
            Some("0")
        );
        assert!(app.state.active_navigator().unwrap().page.is_new_tab());
    }

    #[test]
    fn a_second_tab_takes_the_foreground() {
        let mut app = app();
        app.update(Message::NewTab);

        assert_eq!(app.state.navigators.len(), 2);
        assert_eq!(
            app.state.navigators.active_id().map(String::as_str),
            Some("1")
        );
    }

    #[test]
    fn cycling_wraps_around_the_strip() {
        let mut app = app();
        app.update(Message::NewTab);
        app.update(Message::NewTab);
        // strip order: ["2", "1", "0"], active "2" at position 0

        app.update(Message::CycleTab(1));
        assert_eq!(
            app.state.navigators.active_id().map(String::as_str),
            Some("1")
        );

        app.update(Message::CycleTab(-1));
        app.update(Message::CycleTab(-1));
        assert_eq!(
            app.state.navigators.active_id().map(String::as_str),
            Some("0")
        );
    }

    #[test]
    fn typing_opens_the_assistant() {
        let mut app = app();
        app.update(Message::LocationChanged("rust".to_owned()));

        assert!(app.state.assistant.is_open);
        assert_eq!(app.state.assistant.query, "rust");
        assert_eq!(app.state.active_navigator().unwrap().input.value, "rust");
    }

    #[test]
    fn closed_cards_are_removed_via_their_exit_action() {
        let mut app = app();
        app.update(Message::NewTab);
        assert_eq!(app.state.navigators.len(), 2);

        app.update(Message::CloseTab("1".to_owned()));
        // The card is still present, running its exit transition; the
        // Closed action then drives the removal.
        assert!(app.state.navigators.contains("1"));

        app.update(Message::Navigators(DeckAction::Modify(
            "1".to_owned(),
            NavigatorAction::Closed,
        )));
        assert!(!app.state.navigators.contains("1"));
        assert_eq!(
            app.state.navigators.active_id().map(String::as_str),
            Some("0")
        );
    }

    #[test]
    fn submitting_a_typed_url_navigates_the_foreground_tab() {
        let mut app = app();
        app.update(Message::LocationChanged("example.com".to_owned()));
        app.update(Message::LocationSubmitted);

        let page = &app.state.active_navigator().unwrap().page;
        assert_eq!(page.url.as_str(), "https://example.com/");
        assert!(!app.state.assistant.is_open);
    }

    #[test]
    fn submitting_plain_text_searches_it() {
        let mut app = app();
        app.update(Message::LocationChanged("rust borrow checker".to_owned()));
        app.update(Message::LocationSubmitted);

        let page = &app.state.active_navigator().unwrap().page;
        assert_eq!(page.url.host_str(), Some("duckduckgo.com"));
        assert_eq!(page.url.query(), Some("q=rust+borrow+checker"));
    }

    #[test]
    fn finished_loads_are_recorded_in_history() {
        let mut app = app();
        let url = Url::parse("https://example.com/").unwrap();

        app.update(Message::Navigators(DeckAction::Modify(
            "0".to_owned(),
            NavigatorAction::Loaded(service::navigation::PageInfo {
                url: url.clone(),
                title: "Example".to_owned(),
            }),
        )));

        assert_eq!(app.state.history.len(), 1);
        let visit = app.state.history.iter().next().unwrap();
        assert_eq!(visit.url, url);
        assert_eq!(visit.visits, 1);
    }
}
