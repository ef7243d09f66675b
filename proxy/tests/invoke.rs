use proxy::client::{Client, NoAuth};
use proxy::invoke::{ContentMode, InvokeBody};

fn client() -> Client {
    let add = format!("http://{}", mockito::server_address().to_string());
    Client::new(Box::new(NoAuth), add.as_str()).unwrap()
}

#[tokio::test]
async fn test_invoke_text() {
    let _mok = mockito::mock("POST", "/function/echo")
        .match_header("content-type", "text/plain")
        .match_body("hello")
        .with_status(200)
        .with_body("hello")
        .create();

    let res = client()
        .invoke_function("echo", "", b"hello".to_vec(), ContentMode::Text)
        .await
        .unwrap();
    assert_eq!(res.status, 200);
    assert_eq!(res.body, InvokeBody::Text("hello".to_string()));
}

#[tokio::test]
async fn test_invoke_json_in_namespace() {
    let _mok = mockito::mock("POST", "/function/echo-json.dev")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_body(r#"{"a":1}"#)
        .create();

    let res = client()
        .invoke_function("echo-json", "dev", b"{}".to_vec(), ContentMode::Json)
        .await
        .unwrap();
    assert_eq!(res.body, InvokeBody::Json(serde_json::json!({"a": 1})));
}

#[tokio::test]
async fn test_invoke_json_falls_back_to_text() {
    let _mok = mockito::mock("POST", "/function/not-json")
        .with_status(200)
        .with_body("plain words")
        .create();

    let res = client()
        .invoke_function("not-json", "", Vec::new(), ContentMode::Json)
        .await
        .unwrap();
    assert_eq!(res.body, InvokeBody::Text("plain words".to_string()));
}

#[tokio::test]
async fn test_invoke_binary_keeps_raw_bytes() {
    let payload: Vec<u8> = vec![0x89, b'P', b'N', b'G', 0xff, 0x00, 0xfe];
    let _mok = mockito::mock("POST", "/function/png")
        .match_header("content-type", "binary/octet-stream")
        .with_status(200)
        .with_body(payload.clone())
        .create();

    let res = client()
        .invoke_function("png", "", b"draw".to_vec(), ContentMode::Binary)
        .await
        .unwrap();
    match res.body {
        InvokeBody::Binary(bytes) => assert_eq!(bytes.as_ref(), payload.as_slice()),
        other => panic!("expected binary body, got {:?}", other),
    }
}

#[tokio::test]
async fn test_invoke_failure_carries_status_and_body() {
    let _mok = mockito::mock("POST", "/function/broken")
        .with_status(500)
        .with_body("exit status 1")
        .create();

    let res = client()
        .invoke_function("broken", "", Vec::new(), ContentMode::Text)
        .await;
    match res {
        Err(utility::Error::Status { code, body }) => {
            assert_eq!(code, 500);
            assert_eq!(body, "exit status 1");
        }
        other => panic!("unexpected result {:?}", other),
    }
}
