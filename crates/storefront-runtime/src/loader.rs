use std::time::Duration;

use tracing::{debug, warn};

use storefront_engine::Catalog;
use storefront_providers::{CatalogSource, LoadError, normalize_catalog};

use crate::config::CatalogConfig;
use crate::session::Session;

/// How patient the loader is with a catalog source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadPolicy {
    /// `None` waits forever
    pub timeout: Option<Duration>,
    pub max_attempts: u32,
}

impl Default for LoadPolicy {
    fn default() -> Self {
        Self {
            timeout: None,
            max_attempts: 1,
        }
    }
}

impl From<&CatalogConfig> for LoadPolicy {
    fn from(config: &CatalogConfig) -> Self {
        Self {
            timeout: config.timeout(),
            max_attempts: config.max_attempts.max(1),
        }
    }
}

/// Fetches, normalizes and validates a catalog from a single source.
#[derive(Clone)]
pub struct CatalogLoader<S: CatalogSource> {
    source: S,
    policy: LoadPolicy,
}

impl<S: CatalogSource> CatalogLoader<S> {
    pub fn new(source: S, policy: LoadPolicy) -> Self {
        Self { source, policy }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }

    /// Fetch a complete catalog. Only transport failures, 5xx answers and
    /// timeouts are retried; bad content fails immediately.
    pub async fn fetch(&self) -> Result<Catalog, LoadError> {
        let attempts = self.policy.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match self.fetch_once().await {
                Ok(catalog) => return Ok(catalog),
                Err(err) if attempt < attempts && is_retryable(&err) => {
                    warn!(
                        source = %self.source.describe(),
                        attempt,
                        error = %err,
                        "catalog fetch failed, retrying"
                    );
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Drive a whole load cycle on `session`: loading state, fetch, then the
    /// ready or failed state.
    pub async fn load(&self, session: &mut Session) -> Result<usize, LoadError> {
        session.begin_load(&self.source.describe());
        let result = self.fetch().await;
        session.complete_load(result)
    }

    async fn fetch_once(&self) -> Result<Catalog, LoadError> {
        let body = match self.policy.timeout {
            Some(limit) => tokio::time::timeout(limit, self.source.fetch())
                .await
                .map_err(|_| LoadError::Timeout(limit))??,
            None => self.source.fetch().await?,
        };
        debug!(bytes = body.len(), "catalog body received");

        let products = normalize_catalog(&body)?;
        Catalog::new(products).map_err(|err| LoadError::Malformed(err.to_string()))
    }
}

fn is_retryable(err: &LoadError) -> bool {
    match err {
        LoadError::Http(_) | LoadError::Timeout(_) => true,
        LoadError::Status(code) => *code >= 500,
        LoadError::Io(_) | LoadError::Json(_) | LoadError::Malformed(_) | LoadError::Location(_) => {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};

    use storefront_engine::Phase;
    use storefront_types::{Screen, SessionEvent};

    const BODY: &str = r#"[
        {"id": 1, "title": "Shirt", "price": 19.99, "description": "Cotton", "image": "https://img/1.png", "category": "clothing"},
        {"id": 2, "title": "Mug", "price": 9.5, "description": "Ceramic", "image": "https://img/2.png", "category": "home"}
    ]"#;

    /// Replays scripted responses, one per fetch
    struct ScriptedSource {
        responses: Mutex<VecDeque<Result<String, LoadError>>>,
        calls: AtomicU32,
    }

    impl ScriptedSource {
        fn new(responses: Vec<Result<String, LoadError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                calls: AtomicU32::new(0),
            }
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl CatalogSource for ScriptedSource {
        fn describe(&self) -> String {
            "scripted".to_string()
        }

        async fn fetch(&self) -> Result<String, LoadError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(LoadError::Status(500)))
        }
    }

    /// Never answers
    struct StalledSource;

    impl CatalogSource for StalledSource {
        fn describe(&self) -> String {
            "stalled".to_string()
        }

        async fn fetch(&self) -> Result<String, LoadError> {
            std::future::pending().await
        }
    }

    fn policy(max_attempts: u32) -> LoadPolicy {
        LoadPolicy {
            timeout: None,
            max_attempts,
        }
    }

    #[tokio::test]
    async fn test_load_success_enters_home() {
        let loader = CatalogLoader::new(ScriptedSource::new(vec![Ok(BODY.to_string())]), policy(1));
        let mut session = Session::new();

        let count = loader.load(&mut session).await.unwrap();

        assert_eq!(count, 2);
        assert_eq!(session.active_screen(), Some(Screen::Home));
        assert_eq!(session.catalog().view().len(), 2);
        assert_eq!(session.drain_events()[0], SessionEvent::LoadStarted);
    }

    #[tokio::test]
    async fn test_single_attempt_by_default() {
        let loader = CatalogLoader::new(
            ScriptedSource::new(vec![Err(LoadError::Status(503)), Ok(BODY.to_string())]),
            LoadPolicy::default(),
        );
        let mut session = Session::new();

        assert!(loader.load(&mut session).await.is_err());
        assert_eq!(loader.source().calls(), 1);
        assert!(matches!(session.phase(), Phase::Failed { .. }));
    }

    #[tokio::test]
    async fn test_server_errors_are_retried() {
        let loader = CatalogLoader::new(
            ScriptedSource::new(vec![Err(LoadError::Status(502)), Ok(BODY.to_string())]),
            policy(3),
        );

        let catalog = loader.fetch().await.unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(loader.source().calls(), 2);
    }

    #[tokio::test]
    async fn test_client_errors_and_bad_content_are_not_retried() {
        let not_found = CatalogLoader::new(
            ScriptedSource::new(vec![Err(LoadError::Status(404)), Ok(BODY.to_string())]),
            policy(3),
        );
        assert!(matches!(
            not_found.fetch().await,
            Err(LoadError::Status(404))
        ));
        assert_eq!(not_found.source().calls(), 1);

        let garbage = CatalogLoader::new(
            ScriptedSource::new(vec![Ok("{not json".to_string()), Ok(BODY.to_string())]),
            policy(3),
        );
        assert!(matches!(garbage.fetch().await, Err(LoadError::Json(_))));
        assert_eq!(garbage.source().calls(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_ids_fail_whole_load() {
        let body = r#"[
            {"id": 1, "title": "A", "price": 1, "description": "", "image": "", "category": "x"},
            {"id": 1, "title": "B", "price": 2, "description": "", "image": "", "category": "x"}
        ]"#;
        let loader = CatalogLoader::new(ScriptedSource::new(vec![Ok(body.to_string())]), policy(1));
        let mut session = Session::new();

        let err = loader.load(&mut session).await.unwrap_err();

        assert!(matches!(&err, LoadError::Malformed(msg) if msg.contains("id 1 appears more than once")));
        assert!(session.catalog().catalog().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_fails_load() {
        let loader = CatalogLoader::new(
            StalledSource,
            LoadPolicy {
                timeout: Some(Duration::from_secs(5)),
                max_attempts: 2,
            },
        );
        let mut session = Session::new();

        let err = loader.load(&mut session).await.unwrap_err();

        assert!(matches!(err, LoadError::Timeout(limit) if limit == Duration::from_secs(5)));
        let Phase::Failed { message } = session.phase() else {
            panic!("expected failed phase");
        };
        assert!(message.contains("internet connection"));
    }

    #[test]
    fn test_policy_from_config() {
        let config = CatalogConfig {
            timeout_secs: Some(10),
            max_attempts: 3,
            ..CatalogConfig::default()
        };
        assert_eq!(
            LoadPolicy::from(&config),
            LoadPolicy {
                timeout: Some(Duration::from_secs(10)),
                max_attempts: 3,
            }
        );
    }
}
