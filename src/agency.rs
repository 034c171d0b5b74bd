use std::sync::Arc;

use tracing::info;

use crate::agents::{Agent, ChatAgent};
use crate::error::Result;
use crate::llm::client::GigaChatClient;

/// Fixed, ordered composition of agents applied to one input
pub struct TranslationAgency {
    agents: Vec<Box<dyn Agent>>,
}

impl TranslationAgency {
    pub fn new(agents: Vec<Box<dyn Agent>>) -> Self {
        Self { agents }
    }

    /// The standard translator -> editor -> proofreader chain, all three
    /// roles sharing one client
    pub fn with_default_agents(client: GigaChatClient) -> Self {
        let client = Arc::new(client);
        Self::new(vec![
            Box::new(ChatAgent::translator(Arc::clone(&client))),
            Box::new(ChatAgent::editor(Arc::clone(&client))),
            Box::new(ChatAgent::proofreader(client)),
        ])
    }

    /// Run the text through every agent in order, feeding each agent's
    /// output to the next. The first failure aborts the run and propagates
    /// unchanged; later agents never run.
    pub async fn translate(&self, text: &str) -> Result<String> {
        let mut result = text.to_string();
        for agent in &self.agents {
            info!(
                "{}: processing {} characters",
                agent.name(),
                result.chars().count()
            );
            result = agent.process(&result).await?;
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::error::Error;

    fn suffix(suffix: &'static str) -> impl Fn(&str) -> Result<String> + Send + Sync {
        move |text: &str| Ok(format!("{text}{suffix}"))
    }

    struct Failing;

    #[async_trait]
    impl Agent for Failing {
        async fn process(&self, _text: &str) -> Result<String> {
            Err(Error::Upstream("stage failed".to_string()))
        }
    }

    struct Recording {
        called: Arc<AtomicBool>,
    }

    #[async_trait]
    impl Agent for Recording {
        async fn process(&self, text: &str) -> Result<String> {
            self.called.store(true, Ordering::SeqCst);
            Ok(text.to_string())
        }
    }

    #[tokio::test]
    async fn test_agents_run_in_order() {
        let agency = TranslationAgency::new(vec![Box::new(suffix("A")), Box::new(suffix("B"))]);
        assert_eq!(agency.translate("start").await.unwrap(), "startAB");
    }

    #[tokio::test]
    async fn test_empty_agency_returns_input() {
        let agency = TranslationAgency::new(Vec::new());
        assert_eq!(agency.translate("start").await.unwrap(), "start");
    }

    #[tokio::test]
    async fn test_failure_stops_the_pipeline() {
        let called = Arc::new(AtomicBool::new(false));
        let agency = TranslationAgency::new(vec![
            Box::new(Failing),
            Box::new(Recording {
                called: Arc::clone(&called),
            }),
        ]);

        let err = agency.translate("start").await.unwrap_err();

        assert!(matches!(err, Error::Upstream(_)));
        assert!(err.to_string().contains("stage failed"));
        assert!(!called.load(Ordering::SeqCst));
    }
}
