use anyhow::Result;
use dbauth_core::time::format_rfc3339;
use dbauth_core::{Context, OsEnv};
use dbauth_dsql::{Config, Credential, Signer, StaticCredentialProvider, TokenGenerator};
use log::info;
use std::env;

/// Print an admin token for the cluster at `CLUSTER_ENDPOINT` in `REGION`.
///
/// Credentials are read from `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and
/// the optional `AWS_SESSION_TOKEN`.
#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    let ctx = Context::new().with_env(OsEnv);
    let cfg = Config::default().from_env(&ctx);

    let mut cred = Credential::new(
        &env::var("AWS_ACCESS_KEY_ID")?,
        &env::var("AWS_SECRET_ACCESS_KEY")?,
    );
    if let Ok(token) = env::var("AWS_SESSION_TOKEN") {
        cred = cred.with_session_token(&token);
    }

    let signer = Signer::new(
        ctx,
        StaticCredentialProvider::from(cred),
        TokenGenerator::from_config(&cfg)?,
    );
    let token = signer.db_connect_admin_auth_token().await?;
    info!("token valid until {}", format_rfc3339(token.expires_at()));

    println!("{token}");
    Ok(())
}
