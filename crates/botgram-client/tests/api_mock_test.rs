//! Dispatch-layer tests against a mocked Bot API server: envelope decoding,
//! error mapping, and content-type selection. No live network.

use botgram_client::payloads::{EditInlineMessageCaption, GetUpdates, SendDocument, SendMessage};
use botgram_client::types::{InputFile, MessageKind};
use botgram_client::{BotApiClient, BotApiError};

const TEST_TOKEN: &str = "123456:TEST";

fn client_for(server: &mockito::ServerGuard) -> BotApiClient {
    BotApiClient::with_api_url(TEST_TOKEN, server.url())
}

#[tokio::test]
async fn success_envelope_decodes_to_typed_result() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", format!("/bot{TEST_TOKEN}/getMe").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "ok": true,
                "result": {"id": 123456789, "is_bot": true, "first_name": "TestBot", "username": "testbot"}
            }"#,
        )
        .create_async()
        .await;

    let me = client_for(&server).get_me().await.unwrap();

    mock.assert_async().await;
    assert_eq!(me.id, 123_456_789);
    assert_eq!(me.username.as_deref(), Some("testbot"));
    assert!(me.is_bot);
}

#[tokio::test]
async fn send_message_posts_json_and_returns_message() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", format!("/bot{TEST_TOKEN}/sendMessage").as_str())
        .match_header("content-type", "application/json")
        .match_body(mockito::Matcher::Json(
            serde_json::json!({"chat_id": 42, "text": "Hello world!"}),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "ok": true,
                "result": {
                    "message_id": 7,
                    "from": {"id": 1, "is_bot": true, "first_name": "TestBot"},
                    "date": 1500000000,
                    "chat": {"id": 42, "type": "private", "first_name": "U"},
                    "text": "Hello world!"
                }
            }"#,
        )
        .create_async()
        .await;

    let message = client_for(&server)
        .request(&SendMessage::new(42_i64, "Hello world!"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(message.text.as_deref(), Some("Hello world!"));
    assert_eq!(message.kind(), MessageKind::Text);
    assert_eq!(message.chat.id, 42);
}

#[tokio::test]
async fn error_envelope_maps_to_api_error_with_parameters() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", format!("/bot{TEST_TOKEN}/sendMessage").as_str())
        .with_status(429)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "ok": false,
                "error_code": 429,
                "description": "Too Many Requests: retry after 14",
                "parameters": {"retry_after": 14}
            }"#,
        )
        .create_async()
        .await;

    let error = client_for(&server)
        .send_message(42_i64, "spam")
        .await
        .unwrap_err();

    match error {
        BotApiError::Api(api) => {
            assert!(api.is_too_many_requests());
            assert_eq!(api.retry_after(), Some(14));
            assert_eq!(api.description, "Too Many Requests: retry after 14");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn group_migration_surfaces_the_new_chat_id() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", format!("/bot{TEST_TOKEN}/sendMessage").as_str())
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "ok": false,
                "error_code": 400,
                "description": "Bad Request: group chat was upgraded to a supergroup chat",
                "parameters": {"migrate_to_chat_id": -1001234567890}
            }"#,
        )
        .create_async()
        .await;

    let error = client_for(&server)
        .send_message(-99_i64, "hi")
        .await
        .unwrap_err();

    match error {
        BotApiError::Api(api) => {
            assert_eq!(api.migrate_to_chat_id(), Some(-1_001_234_567_890));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn garbage_body_maps_to_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", format!("/bot{TEST_TOKEN}/getUpdates").as_str())
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html>gateway timeout</html>")
        .create_async()
        .await;

    let error = client_for(&server)
        .get_updates(&GetUpdates::new())
        .await
        .unwrap_err();

    assert!(matches!(error, BotApiError::Decode(_)));
}

#[tokio::test]
async fn byte_uploads_switch_to_multipart() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", format!("/bot{TEST_TOKEN}/sendDocument").as_str())
        .match_header(
            "content-type",
            mockito::Matcher::Regex("^multipart/form-data.*".to_string()),
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "ok": true,
                "result": {
                    "message_id": 8,
                    "date": 1500000000,
                    "chat": {"id": 42, "type": "private", "first_name": "U"},
                    "document": {"file_id": "DOC1", "file_name": "a.txt"}
                }
            }"#,
        )
        .create_async()
        .await;

    let message = client_for(&server)
        .send_document(42_i64, InputFile::bytes("a.txt", b"hello".to_vec()))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(message.kind(), MessageKind::Document);
}

#[tokio::test]
async fn file_id_sends_stay_plain_json() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", format!("/bot{TEST_TOKEN}/sendDocument").as_str())
        .match_header("content-type", "application/json")
        .match_body(mockito::Matcher::Json(
            serde_json::json!({"chat_id": 42, "document": "DOC1"}),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "ok": true,
                "result": {
                    "message_id": 9,
                    "date": 1500000000,
                    "chat": {"id": 42, "type": "private", "first_name": "U"},
                    "document": {"file_id": "DOC1"}
                }
            }"#,
        )
        .create_async()
        .await;

    client_for(&server)
        .request(&SendDocument::new(42_i64, InputFile::file_id("DOC1")))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn edit_message_caption_posts_addressed_fields() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", format!("/bot{TEST_TOKEN}/editMessageCaption").as_str())
        .match_body(mockito::Matcher::Json(
            serde_json::json!({"chat_id": 42, "message_id": 7, "caption": "updated"}),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "ok": true,
                "result": {
                    "message_id": 7,
                    "date": 1500000000,
                    "chat": {"id": 42, "type": "private", "first_name": "U"},
                    "caption": "updated",
                    "document": {"file_id": "DOC1"}
                }
            }"#,
        )
        .create_async()
        .await;

    let message = client_for(&server)
        .edit_message_caption(42_i64, 7, "updated")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(message.caption.as_deref(), Some("updated"));
}

#[tokio::test]
async fn inline_caption_edit_decodes_a_bare_true() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", format!("/bot{TEST_TOKEN}/editMessageCaption").as_str())
        .match_body(mockito::Matcher::Json(
            serde_json::json!({"inline_message_id": "AgAAA", "caption": "updated"}),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok": true, "result": true}"#)
        .create_async()
        .await;

    let edited = client_for(&server)
        .request(&EditInlineMessageCaption {
            inline_message_id: "AgAAA".into(),
            caption: Some("updated".into()),
            reply_markup: None,
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(edited);
}

#[tokio::test]
async fn set_chat_title_goes_through_the_convenience_method() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", format!("/bot{TEST_TOKEN}/setChatTitle").as_str())
        .match_body(mockito::Matcher::Json(
            serde_json::json!({"chat_id": "@group", "title": "New title"}),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok": true, "result": true}"#)
        .create_async()
        .await;

    assert!(client_for(&server)
        .set_chat_title("@group", "New title")
        .await
        .unwrap());
    mock.assert_async().await;
}

#[tokio::test]
async fn download_file_returns_raw_bytes() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock(
            "GET",
            format!("/file/bot{TEST_TOKEN}/documents/file_1.txt").as_str(),
        )
        .with_status(200)
        .with_body("file contents")
        .create_async()
        .await;

    let bytes = client_for(&server)
        .download_file("documents/file_1.txt")
        .await
        .unwrap();

    assert_eq!(bytes, b"file contents");
}

#[tokio::test]
async fn download_of_missing_file_maps_to_api_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", format!("/file/bot{TEST_TOKEN}/documents/gone.txt").as_str())
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok": false, "error_code": 404, "description": "Not Found"}"#)
        .create_async()
        .await;

    let error = client_for(&server)
        .download_file("documents/gone.txt")
        .await
        .unwrap_err();

    match error {
        BotApiError::Api(api) => assert!(api.is_not_found()),
        other => panic!("expected Api error, got {other:?}"),
    }
}
