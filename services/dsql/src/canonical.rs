use crate::constants::*;
use crate::signing_key::SigningContext;
use crate::{Action, Credential};
use dbauth_core::{Error, Result};
use http::uri::Authority;
use percent_encoding::utf8_percent_encode;
use std::fmt::Write;
use std::time::Duration;

/// A validated token request: `GET https://<host>/?Action=<action>`.
#[derive(Debug, Clone)]
pub(crate) struct SigningRequest {
    host: String,
    action: Action,
    expires_in: u64,
}

impl SigningRequest {
    /// Validate the caller input.
    ///
    /// - `host` is trimmed, an optional `http://` or `https://` prefix is
    ///   dropped, and the rest must be a plain URI authority (`host[:port]`).
    /// - `expires_in` must be within 1..=604800 seconds. Sub-second parts are
    ///   ignored.
    pub fn new(host: &str, action: &Action, expires_in: Duration) -> Result<Self> {
        Ok(Self {
            host: normalize_host(host)?,
            action: action.clone(),
            expires_in: validate_expires_in(expires_in)?,
        })
    }

    pub fn expires_in(&self) -> u64 {
        self.expires_in
    }
}

fn strip_scheme(host: &str) -> &str {
    for scheme in ["https://", "http://"] {
        let matched = host
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme));
        if matched {
            return &host[scheme.len()..];
        }
    }

    host
}

fn normalize_host(host: &str) -> Result<String> {
    let host = strip_scheme(host.trim());
    if host.is_empty() {
        return Err(Error::request_invalid("host must not be empty"));
    }

    let authority: Authority = host
        .parse()
        .map_err(|e| Error::request_invalid(format!("host {host:?} is invalid")).with_source(e))?;
    if authority.as_str().contains('@') {
        return Err(Error::request_invalid(
            "host must not contain user information",
        ));
    }

    Ok(host.to_string())
}

fn validate_expires_in(expires_in: Duration) -> Result<u64> {
    let secs = expires_in.as_secs();
    if !(MIN_EXPIRES_IN_SECS..=MAX_EXPIRES_IN_SECS).contains(&secs) {
        return Err(Error::request_invalid(format!(
            "expires_in must be between {MIN_EXPIRES_IN_SECS} and {MAX_EXPIRES_IN_SECS} seconds, got {secs}"
        )));
    }

    Ok(secs)
}

/// Canonical form of a [`SigningRequest`].
///
/// `query` is stored already encoded and sorted. Both the canonical request
/// and the final token are rendered from it, so they always agree on order
/// and encoding.
#[derive(Debug)]
pub(crate) struct CanonicalRequest {
    host: String,
    query: Vec<(String, String)>,
}

impl CanonicalRequest {
    pub fn build(req: &SigningRequest, cred: &Credential, sctx: &SigningContext) -> Self {
        let mut query = vec![
            (ACTION, req.action.as_str().to_string()),
            (X_AMZ_ALGORITHM, AWS4_HMAC_SHA256.to_string()),
            (
                X_AMZ_CREDENTIAL,
                format!("{}/{}", cred.access_key_id, sctx.scope()),
            ),
            (X_AMZ_DATE, sctx.timestamp()),
            (X_AMZ_EXPIRES, req.expires_in.to_string()),
            (X_AMZ_SIGNED_HEADERS, SIGNED_HEADERS.to_string()),
        ];
        if let Some(token) = cred.session_token() {
            query.push((X_AMZ_SECURITY_TOKEN, token.to_string()));
        }

        let mut query: Vec<(String, String)> = query
            .into_iter()
            .map(|(k, v)| {
                (
                    utf8_percent_encode(k, &AWS_QUERY_ENCODE_SET).to_string(),
                    utf8_percent_encode(&v, &AWS_QUERY_ENCODE_SET).to_string(),
                )
            })
            .collect();
        // Sort by encoded param name, byte-wise.
        query.sort();

        Self {
            host: req.host.clone(),
            query,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// `Action=...&X-Amz-Algorithm=...`, sorted and encoded.
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// The string that gets hashed into the string to sign.
    ///
    /// ```text
    /// GET
    /// /
    /// Action=DbConnectAdmin&X-Amz-Algorithm=AWS4-HMAC-SHA256&...
    /// host:<host>
    ///
    /// host
    /// e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855
    /// ```
    pub fn canonical_string(&self) -> Result<String> {
        // 512 is specially chosen to avoid reallocation with a session token.
        let mut f = String::with_capacity(512);

        writeln!(f, "GET")?;
        writeln!(f, "/")?;
        writeln!(f, "{}", self.query_string())?;
        writeln!(f, "{SIGNED_HEADERS}:{}", self.host)?;
        writeln!(f)?;
        writeln!(f, "{SIGNED_HEADERS}")?;
        write!(f, "{EMPTY_STRING_SHA256}")?;

        Ok(f)
    }
}
