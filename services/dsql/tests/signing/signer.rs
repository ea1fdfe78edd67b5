use super::*;
use anyhow::Result;
use dbauth_core::{ErrorKind, StaticEnv};
use dbauth_dsql::{Config, ProvideCredentialChain, Signer, StaticCredentialProvider};
use pretty_assertions::assert_eq;
use std::collections::HashMap;

fn env_context() -> Context {
    init_signing_test().with_env(StaticEnv {
        envs: HashMap::from_iter([
            ("CLUSTER_ENDPOINT".to_string(), HOST.to_string()),
            ("AWS_REGION".to_string(), REGION.to_string()),
        ]),
    })
}

#[tokio::test]
async fn test_signer_from_env_config() -> Result<()> {
    let ctx = env_context();
    let cfg = Config::default().from_env(&ctx);
    assert_eq!(cfg.hostname.as_deref(), Some(HOST));
    assert_eq!(cfg.region.as_deref(), Some(REGION));

    let signer = Signer::new(
        ctx.clone(),
        StaticCredentialProvider::new(ACCESS_KEY_ID, SECRET_ACCESS_KEY),
        TokenGenerator::from_config(&cfg)?,
    );

    assert_eq!(
        signer.db_connect_admin_auth_token().await?,
        generator().db_connect_admin_auth_token(&ctx, &credential())?
    );
    Ok(())
}

#[tokio::test]
async fn test_signer_with_provider_chain() -> Result<()> {
    let ctx = init_signing_test();

    let chain = ProvideCredentialChain::new()
        .push(ProvideCredentialChain::new())
        .push(StaticCredentialProvider::from(credential()));
    let signer = Signer::new(ctx.clone(), chain, generator());

    assert_eq!(
        signer.db_connect_auth_token().await?,
        generator().db_connect_auth_token(&ctx, &credential())?
    );

    let signer = signer.with_credential_provider(ProvideCredentialChain::new());
    let err = signer.db_connect_auth_token().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    Ok(())
}
