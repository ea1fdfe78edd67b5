mod chain;
pub use chain::ProvideCredentialChain;

mod static_provider;
pub use static_provider::StaticCredentialProvider;
