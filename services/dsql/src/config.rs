use crate::constants::*;
use dbauth_core::Context;
use log::debug;
use std::time::Duration;

/// Config for token generation.
///
/// Credentials are not part of the config. They are supplied by the caller
/// through a credential provider.
#[derive(Clone, Debug)]
pub struct Config {
    /// `hostname` will be loaded from:
    ///
    /// - this field if it's `is_some`
    /// - env value: [`CLUSTER_ENDPOINT`]
    pub hostname: Option<String>,
    /// `region` will be loaded from:
    ///
    /// - this field if it's `is_some`
    /// - env value: [`REGION`]
    /// - env value: [`AWS_REGION`]
    /// - env value: [`AWS_DEFAULT_REGION`]
    pub region: Option<String>,
    /// Service name signed into the credential scope.
    ///
    /// Default to `dsql`.
    pub service: String,
    /// Validity window of generated tokens.
    ///
    /// Default to 900 seconds.
    pub expires_in: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hostname: None,
            region: None,
            service: DSQL_SERVICE.to_string(),
            expires_in: DEFAULT_EXPIRES_IN,
        }
    }
}

impl Config {
    /// Load config from env.
    ///
    /// Values already set on the config are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if self.hostname.is_none() {
            if let Some(v) = ctx.env_var(CLUSTER_ENDPOINT).filter(|v| !v.is_empty()) {
                debug!("load hostname from env {CLUSTER_ENDPOINT}");
                self.hostname = Some(v);
            }
        }

        if self.region.is_none() {
            self.region = [REGION, AWS_REGION, AWS_DEFAULT_REGION]
                .into_iter()
                .find_map(|key| {
                    ctx.env_var(key).filter(|v| !v.is_empty()).inspect(|_| {
                        debug!("load region from env {key}");
                    })
                });
        }

        self
    }
}
