//! Presigned authentication tokens for Aurora DSQL clusters.
//!
//! A token is a SigV4 query-presigned `GET https://<host>/?Action=<action>`
//! request with the scheme dropped. It is handed to the database as the
//! password of a connection and is checked by the service on connect.
//!
//! ## Example
//!
//! ```no_run
//! use dbauth_core::{Context, OsEnv, Result};
//! use dbauth_dsql::{Config, Signer, StaticCredentialProvider, TokenGenerator};
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new().with_env(OsEnv);
//! let cfg = Config::default().from_env(&ctx);
//!
//! let signer = Signer::new(
//!     ctx,
//!     StaticCredentialProvider::new("access_key_id", "secret_access_key"),
//!     TokenGenerator::from_config(&cfg)?,
//! );
//! let token = signer.db_connect_admin_auth_token().await?;
//! println!("connect with password {}", token.as_str());
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod action;
pub use action::{Action, CustomAction};

mod canonical;

mod config;
pub use config::Config;

mod constants;
pub use constants::{DEFAULT_EXPIRES_IN, DSQL_SERVICE, MAX_EXPIRES_IN_SECS, MIN_EXPIRES_IN_SECS};

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::{ProvideCredentialChain, StaticCredentialProvider};

mod signer;
pub use signer::Signer;

mod signing_key;
pub use signing_key::generate_signing_key;

mod token;
pub use token::{AuthToken, TokenGenerator};
