// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::config::ManagedAccount;
use crate::error::{CredentialsError, Result};
use crate::executor::JobExecutor;
use crate::registry::{
    GlobalKindRegistry, GlobalResourcePropertyRegistry, KindRegistry, NamerRegistry,
    ResourcePropertyRegistry,
};
use crate::security::KubernetesCredentials;
use crate::types::KubernetesKind;
use std::sync::Arc;
use tracing::{info, instrument};

/// Builds [`KubernetesCredentials`] for accounts, sharing one executor and
/// the global registries between all of them.
#[derive(Clone)]
pub struct KubernetesCredentialsFactory {
    job_executor: Arc<dyn JobExecutor>,
    namer_registry: NamerRegistry,
    kind_registry: Arc<GlobalKindRegistry>,
    property_registry: Arc<GlobalResourcePropertyRegistry>,
}

impl KubernetesCredentialsFactory {
    pub fn new(
        job_executor: Arc<dyn JobExecutor>,
        namer_registry: NamerRegistry,
        kind_registry: Arc<GlobalKindRegistry>,
        property_registry: Arc<GlobalResourcePropertyRegistry>,
    ) -> Self {
        Self {
            job_executor,
            namer_registry,
            kind_registry,
            property_registry,
        }
    }

    /// Factory with the builtin kinds, resource properties and namers
    pub fn with_defaults(job_executor: Arc<dyn JobExecutor>) -> Self {
        Self::new(
            job_executor,
            NamerRegistry::default(),
            Arc::new(GlobalKindRegistry::builtin()),
            Arc::new(GlobalResourcePropertyRegistry::builtin()),
        )
    }

    #[instrument(skip(self, account), fields(account = %account.name))]
    pub fn build(&self, account: ManagedAccount) -> Result<KubernetesCredentials> {
        validate(&account)?;

        let namer = self
            .namer_registry
            .get(account.naming_strategy())
            .ok_or_else(|| CredentialsError::UnknownNamingStrategy {
                account: account.name.clone(),
                strategy: account.naming_strategy().to_string(),
            })?;
        let kind_registry = KindRegistry::for_account(self.kind_registry.clone(), &account);
        let resource_properties =
            ResourcePropertyRegistry::for_account(self.property_registry.clone(), &account);

        info!(
            "Built credentials for account {} (naming strategy {})",
            account.name,
            namer.name()
        );

        Ok(KubernetesCredentials::new(
            account,
            self.job_executor.clone(),
            kind_registry,
            resource_properties,
            namer,
        ))
    }
}

fn validate(account: &ManagedAccount) -> Result<()> {
    if account.name.trim().is_empty() {
        return Err(CredentialsError::InvalidAccount(
            "account name must not be empty".to_string(),
        ));
    }

    if let Some(cr) = account
        .custom_resources
        .iter()
        .find(|cr| cr.kubernetes_kind.trim().is_empty())
    {
        return Err(CredentialsError::InvalidAccount(format!(
            "account {} declares a custom resource without a kind: {:?}",
            account.name, cr
        )));
    }

    let omitted: Vec<KubernetesKind> = account
        .omit_kinds
        .iter()
        .map(|k| KubernetesKind::from_string(k))
        .collect();
    if let Some(kind) = account
        .kinds
        .iter()
        .map(|k| KubernetesKind::from_string(k))
        .find(|k| omitted.contains(k))
    {
        return Err(CredentialsError::ConflictingKinds {
            account: account.name.clone(),
            kind: kind.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CustomResource;
    use crate::test_utils::StubJobExecutor;

    fn make_factory() -> KubernetesCredentialsFactory {
        KubernetesCredentialsFactory::with_defaults(Arc::new(StubJobExecutor::new()))
    }

    #[test]
    fn test_build_default_account() {
        let credentials = make_factory().build(ManagedAccount::new("my-account")).unwrap();

        assert_eq!(credentials.account_name(), "my-account");
        assert_eq!(credentials.namer().name(), "kubernetesAnnotations");
    }

    #[test]
    fn test_rejects_empty_name() {
        let err = make_factory().build(ManagedAccount::new("  ")).unwrap_err();
        assert!(matches!(err, CredentialsError::InvalidAccount(_)));
    }

    #[test]
    fn test_rejects_unknown_naming_strategy() {
        let account = ManagedAccount {
            naming_strategy: Some("tags".to_string()),
            ..ManagedAccount::new("my-account")
        };

        match make_factory().build(account).unwrap_err() {
            CredentialsError::UnknownNamingStrategy { account, strategy } => {
                assert_eq!(account, "my-account");
                assert_eq!(strategy, "tags");
            }
            other => panic!("Expected UnknownNamingStrategy, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_kind_in_both_lists() {
        let account = ManagedAccount {
            kinds: vec!["deployment".to_string()],
            omit_kinds: vec!["Deployment.apps".to_string()],
            ..ManagedAccount::new("my-account")
        };

        let err = make_factory().build(account).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Account my-account lists kind Deployment.apps in both kinds and omitKinds"
        );
    }

    #[test]
    fn test_rejects_custom_resource_without_kind() {
        let account = ManagedAccount {
            custom_resources: vec![CustomResource {
                kubernetes_kind: String::new(),
                namespaced: true,
                versioned: false,
            }],
            ..ManagedAccount::new("my-account")
        };

        assert!(matches!(
            make_factory().build(account),
            Err(CredentialsError::InvalidAccount(_))
        ));
    }

    #[test]
    fn test_accounts_share_executor_but_not_kind_filters() {
        let factory = make_factory();
        let restricted = factory
            .build(ManagedAccount {
                omit_kinds: vec!["secret".to_string()],
                ..ManagedAccount::new("restricted")
            })
            .unwrap();
        let open = factory.build(ManagedAccount::new("open")).unwrap();

        assert!(!restricted.is_valid_kind(&KubernetesKind::SECRET));
        assert!(open.is_valid_kind(&KubernetesKind::SECRET));
    }
}
