//! Verify request framing and response parsing against JSON test vectors
//! stored in `test-vectors/`.
//!
//! Request vectors compare the complete wire text, since header order and
//! spacing are part of the contract. Response vectors list either the
//! expected parse result or the expected error kind.

use httpclient_core::request::{build_get, build_post};
use httpclient_core::response::parse_response;
use httpclient_core::{ClientError, HttpResponse};

fn error_kind(err: &ClientError) -> &'static str {
    match err {
        ClientError::MalformedUrl(_) => "MalformedUrl",
        ClientError::Connection { .. } => "ConnectionError",
        ClientError::Transmission(_) => "TransmissionError",
        ClientError::MalformedResponse(_) => "MalformedResponse",
        ClientError::Decode(_) => "DecodeError",
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[test]
fn request_test_vectors() {
    let raw = include_str!("../../test-vectors/requests.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let host = case["host"].as_str().unwrap();
        let path = case["path"].as_str().unwrap();

        let fields: Option<Vec<(&str, &str)>> = case["fields"].as_array().map(|pairs| {
            pairs
                .iter()
                .map(|p| {
                    let arr = p.as_array().unwrap();
                    (arr[0].as_str().unwrap(), arr[1].as_str().unwrap())
                })
                .collect()
        });

        let req = match case["method"].as_str().unwrap() {
            "GET" => build_get(host, path),
            "POST" => build_post(host, path, fields.as_deref()),
            other => panic!("unknown method: {other}"),
        };

        assert_eq!(req.to_wire(), case["expected_wire"].as_str().unwrap(), "{name}: wire");
        assert_eq!(
            req.to_bytes(),
            case["expected_wire"].as_str().unwrap().as_bytes(),
            "{name}: bytes"
        );
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[test]
fn response_test_vectors() {
    let raw = include_str!("../../test-vectors/responses.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input = case["raw"].as_str().unwrap();
        let result = parse_response(input);

        if let Some(kind) = case["expected_error"].as_str() {
            let err = result.expect_err(name);
            assert_eq!(error_kind(&err), kind, "{name}: error kind");
            continue;
        }

        let expected = &case["expected"];
        let expected = HttpResponse {
            status_code: expected["status_code"].as_u64().unwrap() as u16,
            headers: expected["headers"].as_str().unwrap().to_string(),
            body: expected["body"].as_str().unwrap().to_string(),
        };
        assert_eq!(result.unwrap(), expected, "{name}: parsed result");
    }
}
