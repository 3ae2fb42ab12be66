//! Root view state, constructed only after the startup gate has resolved.

use crate::config::RuntimeConfig;
use crate::environment::Environment;

/// Title shown above the two greetings.
pub const TITLE: &str = "Build Once Deploy Multiple Times";

#[derive(Debug)]
pub struct App {
    hello_from_config: String,
    hello_from_environment: &'static str,
    should_quit: bool,
}

impl App {
    /// Reads the known key out of the loaded config once; the displayed
    /// values never change afterwards.
    pub fn new(config: &RuntimeConfig, environment: Environment) -> Self {
        Self {
            hello_from_config: config.hello_world.clone(),
            hello_from_environment: environment.hello_world,
            should_quit: false,
        }
    }

    pub fn hello_from_config(&self) -> &str {
        &self.hello_from_config
    }

    pub fn hello_from_environment(&self) -> &'static str {
        self.hello_from_environment
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::App;
    use crate::config::RuntimeConfig;
    use crate::environment::ENVIRONMENT;

    #[test]
    fn reads_the_known_key_once() {
        let config: RuntimeConfig = serde_json::from_str(r#"{"helloWorld": "hi"}"#).unwrap();
        let app = App::new(&config, ENVIRONMENT);

        assert_eq!(app.hello_from_config(), "hi");
        assert_eq!(app.hello_from_environment(), ENVIRONMENT.hello_world);
        assert!(!app.should_quit());
    }

    #[test]
    fn quit_is_requested_not_immediate() {
        let config: RuntimeConfig = serde_json::from_str(r#"{"helloWorld": "hi"}"#).unwrap();
        let mut app = App::new(&config, ENVIRONMENT);

        app.request_quit();
        assert!(app.should_quit());
    }
}
