//! Assignment orchestration: resolve the project, then attach the content.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::error::AssignError;
use crate::domain::models::AssignerConfig;
use crate::domain::ports::ProjectsApi;

/// Orchestrates one assignment run against a [`ProjectsApi`].
///
/// The run is strictly sequential: organization lookup, user-scope fallback,
/// attach. Any error during the organization lookup (not only not-found)
/// triggers the user-scope fallback; errors after that point are fatal.
pub struct Assigner {
    api: Arc<dyn ProjectsApi>,
    config: AssignerConfig,
}

impl Assigner {
    /// Create an assigner over the given API implementation.
    pub fn new(api: Arc<dyn ProjectsApi>, config: AssignerConfig) -> Self {
        Self { api, config }
    }

    /// Resolve the project and attach the configured content to it.
    ///
    /// Returns the created project-item id.
    pub async fn run(&self) -> Result<String, AssignError> {
        let owner = &self.config.owner;
        let number = self.config.project_number;

        let project_id = match self.api.resolve_organization_project(owner, number).await {
            Ok(id) => {
                debug!(project_id = %id, "Found organization project, skipping user project lookup");
                id
            }
            Err(err) => {
                debug!(error = %err, "Couldn't find organization project, looking for user project");
                self.api.resolve_user_project(owner, number).await?
            }
        };

        let item_id = self.api.attach(&project_id, &self.config.issue_id).await?;
        info!(project_id = %project_id, item_id = %item_id, "Content attached to project");

        Ok(item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Credentials, ProjectScope};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted ProjectsApi that records how often each call is made.
    struct ScriptedApi {
        org_result: Result<String, ()>,
        user_result: Result<String, ()>,
        attach_result: Result<String, ()>,
        org_calls: AtomicUsize,
        user_calls: AtomicUsize,
        attach_calls: AtomicUsize,
    }

    impl ScriptedApi {
        fn new(
            org_result: Result<String, ()>,
            user_result: Result<String, ()>,
            attach_result: Result<String, ()>,
        ) -> Self {
            Self {
                org_result,
                user_result,
                attach_result,
                org_calls: AtomicUsize::new(0),
                user_calls: AtomicUsize::new(0),
                attach_calls: AtomicUsize::new(0),
            }
        }

        fn not_found(scope: ProjectScope) -> AssignError {
            AssignError::ProjectNotFound {
                scope,
                owner: "acme".to_string(),
                number: 3,
            }
        }
    }

    #[async_trait]
    impl ProjectsApi for ScriptedApi {
        async fn resolve_organization_project(
            &self,
            _owner: &str,
            _number: u32,
        ) -> Result<String, AssignError> {
            self.org_calls.fetch_add(1, Ordering::SeqCst);
            self.org_result
                .clone()
                .map_err(|()| Self::not_found(ProjectScope::Organization))
        }

        async fn resolve_user_project(
            &self,
            _owner: &str,
            _number: u32,
        ) -> Result<String, AssignError> {
            self.user_calls.fetch_add(1, Ordering::SeqCst);
            self.user_result
                .clone()
                .map_err(|()| Self::not_found(ProjectScope::User))
        }

        async fn attach(&self, project_id: &str, content_id: &str) -> Result<String, AssignError> {
            self.attach_calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(project_id, "PN_1");
            assert_eq!(content_id, "I_9");
            self.attach_result
                .clone()
                .map_err(|()| Self::not_found(ProjectScope::User))
        }
    }

    fn config() -> AssignerConfig {
        AssignerConfig {
            owner: "acme".to_string(),
            project_number: 3,
            issue_id: "I_9".to_string(),
            credentials: Credentials::Token("t".to_string()),
        }
    }

    #[tokio::test]
    async fn test_org_hit_skips_user_lookup() {
        let api = Arc::new(ScriptedApi::new(
            Ok("PN_1".to_string()),
            Ok("unused".to_string()),
            Ok("PNI_5".to_string()),
        ));
        let assigner = Assigner::new(api.clone(), config());

        let item_id = assigner.run().await.unwrap();

        assert_eq!(item_id, "PNI_5");
        assert_eq!(api.org_calls.load(Ordering::SeqCst), 1);
        assert_eq!(api.user_calls.load(Ordering::SeqCst), 0);
        assert_eq!(api.attach_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_org_failure_falls_back_to_user_exactly_once() {
        let api = Arc::new(ScriptedApi::new(
            Err(()),
            Ok("PN_1".to_string()),
            Ok("PNI_5".to_string()),
        ));
        let assigner = Assigner::new(api.clone(), config());

        let item_id = assigner.run().await.unwrap();

        assert_eq!(item_id, "PNI_5");
        assert_eq!(api.org_calls.load(Ordering::SeqCst), 1);
        assert_eq!(api.user_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_both_lookups_failing_aborts_before_attach() {
        let api = Arc::new(ScriptedApi::new(Err(()), Err(()), Ok("PNI_5".to_string())));
        let assigner = Assigner::new(api.clone(), config());

        let err = assigner.run().await.unwrap_err();

        assert!(matches!(
            err,
            AssignError::ProjectNotFound {
                scope: ProjectScope::User,
                ..
            }
        ));
        assert_eq!(api.attach_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_attach_failure_is_fatal() {
        let api = Arc::new(ScriptedApi::new(
            Ok("PN_1".to_string()),
            Ok("unused".to_string()),
            Err(()),
        ));
        let assigner = Assigner::new(api, config());

        assert!(assigner.run().await.is_err());
    }
}
