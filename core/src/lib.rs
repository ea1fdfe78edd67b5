//! Core components for generating presigned database authentication tokens.
//!
//! This crate provides the foundational types and traits for the dbauth ecosystem.
//! It holds everything that is not specific to a single database service.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **Context**: A container that holds implementations for environment access and the clock
//! - **Traits**: Abstract interfaces for credential supply (`ProvideCredential`) and validation (`SigningCredential`)
//! - **Error**: A single error type whose [`ErrorKind`] tells callers whether the input, the credential or the clock was at fault
//!
//! ## Example
//!
//! ```no_run
//! use dbauth_core::time::DateTime;
//! use dbauth_core::{Context, Error, ProvideCredential, SigningCredential, Result};
//! use async_trait::async_trait;
//!
//! // Define your credential type
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//!     secret: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn check(&self, _now: DateTime) -> Result<()> {
//!         if self.key.is_empty() || self.secret.is_empty() {
//!             return Err(Error::credential_invalid("key or secret is missing"));
//!         }
//!         Ok(())
//!     }
//! }
//!
//! // Implement credential supplier
//! #[derive(Debug)]
//! struct MyProvider;
//!
//! #[async_trait]
//! impl ProvideCredential for MyProvider {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential {
//!             key: "my-access-key".to_string(),
//!             secret: "my-secret-key".to_string(),
//!         }))
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new();
//! let cred = MyProvider.provide_credential(&ctx).await?;
//!
//! // Signing time always comes from the context clock.
//! let now = ctx.now()?;
//! if let Some(cred) = cred {
//!     cred.check(now)?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Traits
//!
//! - [`Env`]: For environment variable access
//! - [`Clock`]: For the current UTC time
//! - [`ProvideCredential`]: For supplying credentials at signing time
//! - [`SigningCredential`]: For validating credentials
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time formatting utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Clock, Context, Env, FixedClock, NoopEnv, OsEnv, StaticEnv, SystemClock};

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{ProvideCredential, SigningCredential};
