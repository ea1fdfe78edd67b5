use crate::canonical::{CanonicalRequest, SigningRequest};
use crate::constants::*;
use crate::signing_key::SigningContext;
use crate::{Action, Config, Credential};
use dbauth_core::hash::{hex_hmac_sha256, hex_sha256};
use dbauth_core::time::DateTime;
use dbauth_core::utils::Redact;
use dbauth_core::{Context, Error, Result, SigningCredential};
use log::debug;
use std::fmt::{self, Debug, Display, Write};
use std::time::Duration;

/// A presigned authentication token.
///
/// Pass it as the password of a database connection. The token carries its
/// own action scope and validity window; the service checks both.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken {
    token: String,
    signed_at: DateTime,
    expires_in: Duration,
}

impl AuthToken {
    /// The token string.
    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// Consume into the token string.
    pub fn into_string(self) -> String {
        self.token
    }

    /// Time the token was signed at.
    pub fn signed_at(&self) -> DateTime {
        self.signed_at
    }

    /// Validity window signed into the token.
    pub fn expires_in(&self) -> Duration {
        self.expires_in
    }

    /// Time after which the service rejects this token.
    pub fn expires_at(&self) -> DateTime {
        // expires_in is at most seven days, always in range.
        self.signed_at + chrono::TimeDelta::seconds(self.expires_in.as_secs() as i64)
    }

    /// Check whether the token is already expired at `now`.
    ///
    /// This is only a hint for reusing tokens; the service has the final say.
    pub fn is_expired_at(&self, now: DateTime) -> bool {
        now >= self.expires_at()
    }
}

impl Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthToken")
            .field("token", &Redact::from(&self.token))
            .field("signed_at", &self.signed_at)
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

impl Display for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}

impl AsRef<str> for AuthToken {
    fn as_ref(&self) -> &str {
        &self.token
    }
}

impl From<AuthToken> for String {
    fn from(token: AuthToken) -> Self {
        token.token
    }
}

/// TokenGenerator implements SigV4 query presigning for database auth tokens.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
///
/// The generator holds no mutable state. It can be shared across threads and
/// every call is a pure function of its input and the context clock.
#[derive(Debug, Clone)]
pub struct TokenGenerator {
    host: String,
    region: String,
    service: String,
    expires_in: Duration,
}

impl TokenGenerator {
    /// Create a new generator for the cluster at `host` in `region`.
    ///
    /// Input is validated on every generation, not here.
    pub fn new(host: &str, region: &str) -> Self {
        Self {
            host: host.to_string(),
            region: region.to_string(),
            service: DSQL_SERVICE.to_string(),
            expires_in: DEFAULT_EXPIRES_IN,
        }
    }

    /// Create a new generator from config.
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let host = cfg
            .hostname
            .as_deref()
            .ok_or_else(|| Error::config_invalid("hostname is required"))?;
        let region = cfg
            .region
            .as_deref()
            .ok_or_else(|| Error::config_invalid("region is required"))?;

        Ok(Self::new(host, region)
            .with_service(&cfg.service)
            .with_expires_in(cfg.expires_in))
    }

    /// Set the service name signed into the credential scope.
    pub fn with_service(mut self, service: &str) -> Self {
        self.service = service.to_string();
        self
    }

    /// Set the token validity. Must be within 1..=604800 seconds.
    pub fn with_expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = expires_in;
        self
    }

    /// Generate a token for `action`.
    ///
    /// Returns `<host>/?Action=<action>&...&X-Amz-Signature=<signature>`.
    pub fn generate_token(
        &self,
        ctx: &Context,
        action: &Action,
        cred: &Credential,
    ) -> Result<AuthToken> {
        let req = SigningRequest::new(&self.host, action, self.expires_in)?;
        // Captured once, used for every date in this signature.
        let now = ctx.now()?;
        let sctx = SigningContext::new(&self.service, &self.region, now)?;
        cred.check(now)?;

        let creq = CanonicalRequest::build(&req, cred, &sctx);
        let encoded_req = hex_sha256(creq.canonical_string()?.as_bytes());

        let scope = sctx.scope();
        debug!("calculated scope: {scope}");

        // StringToSign:
        //
        // AWS4-HMAC-SHA256
        // 20220313T072004Z
        // 20220313/<region>/<service>/aws4_request
        // <hashed_canonical_request>
        let string_to_sign = {
            let mut f = String::new();
            writeln!(f, "{AWS4_HMAC_SHA256}")?;
            writeln!(f, "{}", sctx.timestamp())?;
            writeln!(f, "{scope}")?;
            write!(f, "{encoded_req}")?;
            f
        };
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key = sctx.signing_key(&cred.secret_access_key);
        let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

        Ok(AuthToken {
            token: format!(
                "{}/?{}&{X_AMZ_SIGNATURE}={signature}",
                creq.host(),
                creq.query_string()
            ),
            signed_at: now,
            expires_in: Duration::from_secs(req.expires_in()),
        })
    }

    /// Generate a token for `DbConnect`.
    pub fn db_connect_auth_token(&self, ctx: &Context, cred: &Credential) -> Result<AuthToken> {
        self.generate_token(ctx, &Action::DbConnect, cred)
    }

    /// Generate a token for `DbConnectAdmin`.
    pub fn db_connect_admin_auth_token(
        &self,
        ctx: &Context,
        cred: &Credential,
    ) -> Result<AuthToken> {
        self.generate_token(ctx, &Action::DbConnectAdmin, cred)
    }

    /// Generate a token for `DbConnectSuperuser`.
    pub fn db_connect_superuser_auth_token(
        &self,
        ctx: &Context,
        cred: &Credential,
    ) -> Result<AuthToken> {
        self.generate_token(ctx, &Action::DbConnectSuperuser, cred)
    }
}
