#![allow(dead_code)]

use chrono::DateTime;
use ghostfolio_rs::GhostfolioClient;
use httpmock::{Method::POST, Mock, MockServer};
use serde_json::{Value, json};
use std::{fs, path::Path};
use url::Url;

pub const TOKEN: &str = "security-token";
pub const JWT: &str = "jwt-session";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("{name}.json"));
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn fixture_json(name: &str) -> Value {
    serde_json::from_str(&fixture(name)).unwrap()
}

/// Anonymous login exchanging `token` for `jwt`.
pub fn mock_auth<'a>(server: &'a MockServer, token: &str, jwt: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/auth/anonymous")
            .json_body(json!({ "accessToken": token }));
        then.status(201)
            .header("content-type", "application/json")
            .body(json!({ "authToken": jwt }).to_string());
    })
}

pub fn client_for(server: &MockServer, token: &str) -> GhostfolioClient {
    GhostfolioClient::builder(token)
        .host(Url::parse(&server.base_url()).unwrap())
        .build()
        .unwrap()
}

/// A client that already holds [`JWT`] and never hits the login endpoint.
pub fn preauthed_client(server: &MockServer) -> GhostfolioClient {
    GhostfolioClient::builder(TOKEN)
        .host(Url::parse(&server.base_url()).unwrap())
        .preauth(JWT)
        .build()
        .unwrap()
}

pub fn bearer(jwt: &str) -> String {
    format!("Bearer {jwt}")
}

/// Asserts every non-null value of `expected` survives in `actual`.
///
/// Numbers compare by value and RFC 3339 timestamps by instant, so `5000` matches
/// `5000.0` and `...00.000Z` matches `...00Z`.
pub fn assert_preserved(expected: &Value, actual: &Value, path: &str) {
    match (expected, actual) {
        (Value::Null, _) => {}
        (Value::Object(exp), Value::Object(act)) => {
            for (key, value) in exp.iter().filter(|(_, v)| !v.is_null()) {
                let next = format!("{path}.{key}");
                let got = act
                    .get(key)
                    .unwrap_or_else(|| panic!("{next} was dropped"));
                assert_preserved(value, got, &next);
            }
        }
        (Value::Array(exp), Value::Array(act)) => {
            assert_eq!(exp.len(), act.len(), "{path}: length");
            for (i, (e, a)) in exp.iter().zip(act).enumerate() {
                assert_preserved(e, a, &format!("{path}[{i}]"));
            }
        }
        (Value::Number(e), Value::Number(a)) => assert_eq!(e.as_f64(), a.as_f64(), "{path}"),
        (Value::String(e), Value::String(a)) if e != a => {
            match (DateTime::parse_from_rfc3339(e), DateTime::parse_from_rfc3339(a)) {
                (Ok(e), Ok(a)) => assert_eq!(e, a, "{path}"),
                _ => panic!("{path}: expected {e:?}, got {a:?}"),
            }
        }
        (e, a) => assert_eq!(e, a, "{path}"),
    }
}
