//! Startup sequencing: an ordered list of named async initialization steps
//! awaited once, in order, before the UI is constructed.
//!
//! This is a one-shot barrier, not a recurring primitive. The shell
//! registers a single step (the config gate), but the list keeps startup
//! wiring in one place if more init work appears.

use std::future::Future;
use std::pin::Pin;

type StepFuture<'a> = Pin<Box<dyn Future<Output = anyhow::Result<()>> + 'a>>;

#[derive(Debug, thiserror::Error)]
#[error("startup step {step:?} failed")]
pub struct StartupError {
    pub step: &'static str,
    #[source]
    pub source: anyhow::Error,
}

/// Ordered initialization steps. Consumed by [`Sequencer::run`].
#[derive(Default)]
pub struct Sequencer<'a> {
    steps: Vec<(&'static str, StepFuture<'a>)>,
}

impl<'a> Sequencer<'a> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn step<F>(mut self, name: &'static str, fut: F) -> Self
    where
        F: Future<Output = anyhow::Result<()>> + 'a,
    {
        self.steps.push((name, Box::pin(fut)));
        self
    }

    /// Await every step in order, stopping at the first failure.
    pub async fn run(self) -> Result<(), StartupError> {
        for (step, fut) in self.steps {
            tracing::info!(step, "startup step running");
            fut.await.map_err(|source| StartupError { step, source })?;
            tracing::info!(step, "startup step complete");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Sequencer;
    use std::cell::RefCell;

    #[tokio::test]
    async fn runs_steps_in_order() {
        let log = RefCell::new(Vec::new());

        Sequencer::new()
            .step("one", async {
                log.borrow_mut().push("one");
                Ok(())
            })
            .step("two", async {
                log.borrow_mut().push("two");
                Ok(())
            })
            .run()
            .await
            .unwrap();

        assert_eq!(*log.borrow(), ["one", "two"]);
    }

    #[tokio::test]
    async fn stops_at_the_first_failure() {
        let log = RefCell::new(Vec::new());

        let err = Sequencer::new()
            .step("one", async {
                log.borrow_mut().push("one");
                Err(anyhow::anyhow!("boom"))
            })
            .step("two", async {
                log.borrow_mut().push("two");
                Ok(())
            })
            .run()
            .await
            .unwrap_err();

        assert_eq!(err.step, "one");
        assert_eq!(*log.borrow(), ["one"]);
    }

    #[tokio::test]
    async fn empty_sequencer_resolves() {
        Sequencer::new().run().await.unwrap();
    }
}
