mod properties;
mod reference_signer;
mod signer;

use chrono::{TimeZone, Utc};
use dbauth_core::time::DateTime;
use dbauth_core::{Context, FixedClock};
use dbauth_dsql::{Credential, TokenGenerator};

pub const HOST: &str = "db.example.aws.dev";
pub const REGION: &str = "us-east-1";
pub const ACCESS_KEY_ID: &str = "AKIDEXAMPLE";
pub const SECRET_ACCESS_KEY: &str = "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY";

/// The time all signing tests are frozen at.
pub fn signing_time() -> DateTime {
    Utc.with_ymd_and_hms(2024, 11, 5, 8, 30, 0)
        .single()
        .expect("signing time must be valid")
}

/// Initialize test environment with a frozen clock.
pub fn init_signing_test() -> Context {
    let _ = env_logger::builder().is_test(true).try_init();

    Context::new().with_clock(FixedClock(signing_time()))
}

pub fn generator() -> TokenGenerator {
    TokenGenerator::new(HOST, REGION)
}

pub fn credential() -> Credential {
    Credential::new(ACCESS_KEY_ID, SECRET_ACCESS_KEY)
}

/// Split a token into its host and decoded query pairs.
pub fn parse_token(token: &str) -> (String, Vec<(String, String)>) {
    let (host, query) = token.split_once("/?").expect("token must contain /?");
    let pairs = form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();

    (host.to_string(), pairs)
}

/// Raw parameter names of a token, in the order they appear.
pub fn param_names(token: &str) -> Vec<String> {
    let (_, query) = token.split_once("/?").expect("token must contain /?");
    query
        .split('&')
        .map(|kv| kv.split_once('=').map_or(kv, |(k, _)| k).to_string())
        .collect()
}
