use crate::time::DateTime;
use crate::{Context, Result};
use std::fmt::Debug;

/// SigningCredential is the trait used by generators to check the credential
/// before signing with it.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check the credential is complete and still usable at `now`.
    ///
    /// `now` is the signing time taken from the context clock, never the
    /// wall clock.
    fn check(&self, now: DateTime) -> Result<()>;
}

/// ProvideCredential is the trait used to fetch a credential at signing time.
///
/// The implementation is supplied by the caller. It may block on a remote
/// credential source; the generator never caches what it returns and calls it
/// again on every signing.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this provider.
    type Credential: Send + Sync + Unpin + 'static;

    /// Provide a credential.
    ///
    /// Returns `Ok(None)` when this provider has nothing to offer, which lets
    /// a chain move on to the next provider.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}
