// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::constants::AWS4_REQUEST;
use dbauth_core::hash::hmac_sha256;
use dbauth_core::time::{format_date, format_iso8601, DateTime};
use dbauth_core::{Error, Result};

/// Service, region and time of one signing.
///
/// The time is captured once and every date derived from it (credential
/// scope, `X-Amz-Date`, signing key) comes from this value.
#[derive(Debug, Clone)]
pub(crate) struct SigningContext {
    service: String,
    region: String,
    time: DateTime,
}

impl SigningContext {
    pub fn new(service: &str, region: &str, time: DateTime) -> Result<Self> {
        validate_scope_part("service", service)?;
        validate_scope_part("region", region)?;

        Ok(Self {
            service: service.to_string(),
            region: region.to_string(),
            time,
        })
    }

    /// `X-Amz-Date` value: `20220313T072004Z`
    pub fn timestamp(&self) -> String {
        format_iso8601(self.time)
    }

    /// Scope: `20220313/<region>/<service>/aws4_request`
    pub fn scope(&self) -> String {
        format!(
            "{}/{}/{}/{AWS4_REQUEST}",
            format_date(self.time),
            self.region,
            self.service
        )
    }

    /// Derive the signing key for this scope.
    pub fn signing_key(&self, secret: &str) -> [u8; 32] {
        generate_signing_key(secret, self.time, &self.region, &self.service)
    }
}

/// Region and service end up between `/` in the scope, so only plain names
/// like `us-east-1` are accepted.
fn validate_scope_part(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::request_invalid(format!("{name} must not be empty")));
    }
    if !value
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    {
        return Err(Error::request_invalid(format!(
            "{name} {value:?} contains invalid characters"
        )));
    }

    Ok(())
}

/// Derive the SigV4 signing key.
///
/// `HMAC(HMAC(HMAC(HMAC("AWS4" + secret, date), region), service), "aws4_request")`
///
/// The key is bound to the UTC date of `time`; it is derived again on every
/// call instead of being cached, so a date rollover never signs with a stale key.
pub fn generate_signing_key(secret: &str, time: DateTime, region: &str, service: &str) -> [u8; 32] {
    // Sign secret
    let secret = format!("AWS4{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), format_date(time).as_bytes());
    // Sign region
    let sign_region = hmac_sha256(&sign_date, region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(&sign_region, service.as_bytes());
    // Sign request
    hmac_sha256(&sign_service, AWS4_REQUEST.as_bytes())
}
