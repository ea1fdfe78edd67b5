use super::*;
use anyhow::Result;
use aws_credential_types::Credentials;
use aws_sigv4::http_request::{SignableBody, SignableRequest, SignatureLocation, SigningSettings};
use aws_sigv4::sign::v4;
use dbauth_dsql::{Action, DSQL_SERVICE};
use pretty_assertions::assert_eq;
use std::time::{Duration, SystemTime};
use test_case::test_case;

/// Presign `GET https://<host>/?Action=<action>` with aws-sigv4 and return the
/// query pairs of the signed url.
fn presign_with_aws_sigv4(
    action: &Action,
    session_token: Option<&str>,
    expires_in: Duration,
) -> Vec<(String, String)> {
    let mut ss = SigningSettings::default();
    ss.signature_location = SignatureLocation::QueryParams;
    ss.expires_in = Some(expires_in);
    let id = Credentials::new(
        ACCESS_KEY_ID,
        SECRET_ACCESS_KEY,
        session_token.map(|v| v.to_string()),
        None,
        "hardcoded-credentials",
    )
    .into();
    let sp = v4::SigningParams::builder()
        .identity(&id)
        .region(REGION)
        .name(DSQL_SERVICE)
        .time(SystemTime::from(signing_time()))
        .settings(ss)
        .build()
        .expect("signing params must be valid");

    let mut req = http::Request::new("");
    *req.method_mut() = http::Method::GET;
    *req.uri_mut() = format!("https://{HOST}/?Action={action}")
        .parse()
        .expect("url must be valid");

    let output = aws_sigv4::http_request::sign(
        SignableRequest::new(
            req.method().as_str(),
            req.uri().to_string(),
            std::iter::empty(),
            SignableBody::Bytes(&[]),
        )
        .expect("signable request must be valid"),
        &sp.into(),
    )
    .expect("signing must succeed");
    let (aws_sig, _) = output.into_parts();
    aws_sig.apply_to_request_http1x(&mut req);

    let query = req.uri().query().expect("presigned url must have query");
    let mut pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();
    pairs.sort();
    pairs
}

#[test_case(Action::DbConnect, None, 900; "connect")]
#[test_case(Action::DbConnectAdmin, None, 900; "admin")]
#[test_case(Action::DbConnectSuperuser, None, 3600; "superuser one hour")]
#[test_case(Action::DbConnectAdmin, Some("session/token+value="), 900; "admin with session token")]
#[test_case(Action::DbConnect, Some("FwoGZXIvYXdzEBYaDO7bz"), 604_800; "connect seven days")]
fn test_token_matches_aws_sigv4(
    action: Action,
    session_token: Option<&str>,
    expires_in: u64,
) -> Result<()> {
    let ctx = init_signing_test();
    let expires_in = Duration::from_secs(expires_in);

    let mut cred = credential();
    if let Some(token) = session_token {
        cred = cred.with_session_token(token);
    }
    let token = generator()
        .with_expires_in(expires_in)
        .generate_token(&ctx, &action, &cred)?;

    let (host, mut actual) = parse_token(token.as_str());
    actual.sort();
    let expected = presign_with_aws_sigv4(&action, session_token, expires_in);

    assert_eq!(host, HOST);
    assert_eq!(actual, expected);
    Ok(())
}
