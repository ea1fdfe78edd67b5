use crate::{Action, AuthToken, Credential, TokenGenerator};
use dbauth_core::{Context, Error, ProvideCredential, Result};
use log::debug;
use std::sync::Arc;

/// Signer pulls a credential from its provider and generates a token with it.
///
/// The credential is fetched again on every call and never kept, so rotated
/// credentials are picked up right away. Cloning a signer is cheap.
#[derive(Clone, Debug)]
pub struct Signer {
    ctx: Context,
    provider: Arc<dyn ProvideCredential<Credential = Credential>>,
    generator: TokenGenerator,
}

impl Signer {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        provider: impl ProvideCredential<Credential = Credential>,
        generator: TokenGenerator,
    ) -> Self {
        Self {
            ctx,
            provider: Arc::new(provider),
            generator,
        }
    }

    /// Replace the credential provider.
    pub fn with_credential_provider(
        mut self,
        provider: impl ProvideCredential<Credential = Credential>,
    ) -> Self {
        self.provider = Arc::new(provider);
        self
    }

    /// Generate a token for `action`.
    pub async fn generate_token(&self, action: &Action) -> Result<AuthToken> {
        let cred = self
            .provider
            .provide_credential(&self.ctx)
            .await?
            .ok_or_else(|| Error::credential_invalid("no credential provided"))?;
        debug!("generating token for action {action}");

        self.generator.generate_token(&self.ctx, action, &cred)
    }

    /// Generate a token for `DbConnect`.
    pub async fn db_connect_auth_token(&self) -> Result<AuthToken> {
        self.generate_token(&Action::DbConnect).await
    }

    /// Generate a token for `DbConnectAdmin`.
    pub async fn db_connect_admin_auth_token(&self) -> Result<AuthToken> {
        self.generate_token(&Action::DbConnectAdmin).await
    }

    /// Generate a token for `DbConnectSuperuser`.
    pub async fn db_connect_superuser_auth_token(&self) -> Result<AuthToken> {
        self.generate_token(&Action::DbConnectSuperuser).await
    }
}
