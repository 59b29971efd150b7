use std::path::PathBuf;

use serde_json::Value;

use crate::choice::Choice;
use crate::config::Config;
use crate::events::Action;
use crate::log;
use crate::picker::ChoiceSelector;
use crate::tui::components::SelectorLayout;
use crate::tui::interaction::InteractionRegistry;

/// Host application state around a single selector.
pub struct App {
    pub selector: ChoiceSelector<Value>,
    /// Border title of the selector
    pub title: String,
    /// Last selection notice shown under the selector
    pub status: Option<String>,
    /// Click regions bound from the last render
    pub interactions: InteractionRegistry,
    pub should_quit: bool,
    /// Set when the user quit with Enter
    pub confirmed: bool,
    config_override: Option<PathBuf>,
}

impl App {
    pub fn new(config: Config, config_override: Option<PathBuf>) -> Self {
        Self {
            title: config.title().to_string(),
            selector: ChoiceSelector::new(config.choices),
            status: None,
            interactions: InteractionRegistry::new(),
            should_quit: false,
            confirmed: false,
            config_override,
        }
    }

    /// Rebind the selector's arrow cells after a render.
    pub fn bind(&mut self, layout: &SelectorLayout) {
        self.interactions.clear();
        layout.bind(&mut self.interactions);
    }

    /// Apply a user action to the app state.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Confirm => {
                self.confirmed = true;
                self.should_quit = true;
            }
            Action::SelectPrevious => {
                self.selector.previous();
            }
            Action::SelectNext => {
                self.selector.next();
            }
            Action::ReloadChoices => self.reload(),
            Action::None => {}
        }
    }

    /// Re-read the config and reset the selector to its default choice.
    pub fn reload(&mut self) {
        let config = Config::load(self.config_override.as_deref());
        log::log_event(&format!("reload: {} choices", config.choices.len()));
        self.title = config.title().to_string();
        self.selector.set_choices(config.choices);
    }

    /// Record a selection notification from the selector listener.
    pub fn record_selection(&mut self, choice: &Choice<Value>) {
        log::log_selection(self.selector.selection_index(), choice);
        self.status = Some(format!("{} = {}", choice.label, choice.value));
    }

    /// Value to report on exit; only set after a confirm.
    pub fn result(&self) -> Option<&Value> {
        if self.confirmed {
            self.selector.value()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn app() -> App {
        App::new(Config::default(), None)
    }

    #[test]
    fn test_new_uses_config() {
        let app = app();
        assert_eq!(app.title, "Select");
        assert_eq!(app.selector.label(), "Medium");
        assert!(app.status.is_none());
    }

    #[test]
    fn test_navigation_actions() {
        let mut app = app();
        app.apply(Action::SelectNext);
        assert_eq!(app.selector.value(), Some(&Value::from(4)));
        app.apply(Action::SelectNext);
        assert_eq!(app.selector.value(), Some(&Value::from(2)));
        app.apply(Action::SelectPrevious);
        assert_eq!(app.selector.value(), Some(&Value::from(4)));
        app.apply(Action::None);
        assert_eq!(app.selector.value(), Some(&Value::from(4)));
    }

    #[test]
    fn test_listener_sends_selection() {
        let mut app = app();
        let (tx, mut rx) = mpsc::unbounded_channel();
        app.selector.on_select(move |choice: &Choice<Value>| {
            let _ = tx.send(choice.clone());
        });

        app.apply(Action::SelectPrevious);
        let choice = rx.try_recv().unwrap();
        assert_eq!(choice.label, "Easy");
        assert!(rx.try_recv().is_err());

        app.record_selection(&choice);
        assert_eq!(app.status.as_deref(), Some("Easy = 2"));
    }

    #[test]
    fn test_quit_has_no_result() {
        let mut app = app();
        app.apply(Action::Quit);
        assert!(app.should_quit);
        assert!(app.result().is_none());
    }

    #[test]
    fn test_confirm_reports_value() {
        let mut app = app();
        app.apply(Action::SelectNext);
        app.apply(Action::Confirm);
        assert!(app.should_quit);
        assert_eq!(app.result(), Some(&Value::from(4)));
    }

    #[test]
    fn test_reload_from_override() {
        let path = std::env::temp_dir().join(format!(
            "choice-selector-reload-{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"
                title = "Speed"

                [[choices]]
                value = "slow"
                label = "Slow"

                [[choices]]
                value = "fast"
                label = "Fast"
                default = true
            "#,
        )
        .unwrap();

        let mut app = App::new(Config::default(), Some(path.clone()));
        app.apply(Action::ReloadChoices);
        let _ = std::fs::remove_file(&path);

        assert_eq!(app.title, "Speed");
        assert_eq!(app.selector.label(), "Fast");
        assert_eq!(app.selector.selection_index(), 1);
    }
}
