//! HTTP dispatch: takes a typed payload, POSTs it to the method endpoint,
//! and decodes the response envelope.

use botgram_types::{ApiResponse, InputFile};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ApiError, BotApiError, Result};

/// Public Bot API server.
pub const API_URL: &str = "https://api.telegram.org";

/// A request payload for one Bot API method: the wire method name and the
/// type of its `result` on success. File-carrying payloads also expose
/// their [`InputFile`]s so dispatch can switch to multipart when bytes are
/// attached.
pub trait Payload: Serialize {
    const METHOD: &'static str;
    type Output: DeserializeOwned;

    fn files(&self) -> Vec<&InputFile> {
        Vec::new()
    }
}

/// One Bot API connection: a reqwest client, the bot token, and the API
/// base URL. Cheap to clone; one outstanding HTTP call per invocation.
#[derive(Clone)]
pub struct BotApiClient {
    http: reqwest::Client,
    token: String,
    api_url: String,
}

impl std::fmt::Debug for BotApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The token is a credential; keep it out of debug output.
        f.debug_struct("BotApiClient")
            .field("api_url", &self.api_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl BotApiClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_api_url(token, API_URL)
    }

    /// Points the client at a non-default API server (local Bot API server,
    /// or a mock in tests).
    pub fn with_api_url(token: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            token: token.into(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Builds from [`ClientConfig::from_env`]: `BOT_TOKEN` required,
    /// `TELEGRAM_API_URL` optional.
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_config(ClientConfig::from_env()?))
    }

    pub fn from_config(config: ClientConfig) -> Self {
        match config.api_url {
            Some(url) => Self::with_api_url(config.bot_token, url),
            None => Self::new(config.bot_token),
        }
    }

    /// Dispatches one typed request. JSON body unless the payload carries
    /// raw file bytes, in which case the request is `multipart/form-data`.
    ///
    /// The URL embeds the token, so it is never logged; only the method
    /// name and outcome are.
    pub async fn request<P: Payload>(&self, payload: &P) -> Result<P::Output> {
        let url = format!("{}/bot{}/{}", self.api_url, self.token, P::METHOD);
        debug!(method = P::METHOD, "dispatching Bot API request");

        let needs_upload = payload.files().iter().any(|file| file.needs_upload());
        let request = if needs_upload {
            self.http.post(&url).multipart(multipart_form(payload)?)
        } else {
            self.http.post(&url).json(payload)
        };

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        let envelope: ApiResponse<P::Output> = serde_json::from_str(&body)?;

        if envelope.ok {
            debug!(method = P::METHOD, "Bot API request ok");
            envelope.result.ok_or(BotApiError::EmptyResponse)
        } else {
            let error = ApiError {
                error_code: envelope.error_code.unwrap_or_else(|| status.as_u16() as i32),
                description: envelope.description.unwrap_or_default(),
                parameters: envelope.parameters,
            };
            warn!(
                method = P::METHOD,
                code = error.error_code,
                description = %error.description,
                "Bot API request failed"
            );
            Err(BotApiError::Api(error))
        }
    }

    /// Downloads a file by the `file_path` returned from `getFile`. The
    /// path stays valid for at least an hour; files up to 20 MB.
    pub async fn download_file(&self, file_path: &str) -> Result<Vec<u8>> {
        let url = format!("{}/file/bot{}/{}", self.api_url, self.token, file_path);
        debug!(file_path, "downloading file");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // The file endpoint reports failures with the same envelope.
            let error = match serde_json::from_str::<ApiResponse<Value>>(&body) {
                Ok(envelope) if !envelope.ok => ApiError {
                    error_code: envelope.error_code.unwrap_or_else(|| status.as_u16() as i32),
                    description: envelope.description.unwrap_or_default(),
                    parameters: envelope.parameters,
                },
                _ => ApiError {
                    error_code: status.as_u16() as i32,
                    description: format!("file download failed with status {status}"),
                    parameters: None,
                },
            };
            warn!(file_path, code = error.error_code, "file download failed");
            return Err(BotApiError::Api(error));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

/// Flattens the payload into form fields: scalars as text, nested
/// structures JSON-encoded, byte files as parts named by their
/// `attach://<name>` reference.
fn multipart_form<P: Payload>(payload: &P) -> Result<Form> {
    let value = serde_json::to_value(payload)?;
    let fields = match value {
        Value::Object(fields) => fields,
        other => {
            return Err(BotApiError::Config(format!(
                "multipart payload must serialize to an object, got {other}"
            )))
        }
    };

    let mut form = Form::new();
    for (name, value) in fields {
        let text = match value {
            Value::Null => continue,
            Value::String(text) => text,
            other => other.to_string(),
        };
        form = form.text(name, text);
    }
    for file in payload.files() {
        if let Some((name, data)) = file.as_part() {
            let part = Part::bytes(data.to_vec()).file_name(name.to_string());
            form = form.part(name.to_string(), part);
        }
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use botgram_types::ChatId;

    #[derive(Serialize)]
    struct FakeUpload {
        chat_id: ChatId,
        document: InputFile,
        #[serde(skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    }

    impl Payload for FakeUpload {
        const METHOD: &'static str = "sendDocument";
        type Output = bool;

        fn files(&self) -> Vec<&InputFile> {
            vec![&self.document]
        }
    }

    #[test]
    fn api_url_trailing_slash_is_normalized() {
        let client = BotApiClient::with_api_url("t", "http://localhost:8081/");
        assert_eq!(client.api_url, "http://localhost:8081");
    }

    #[test]
    fn multipart_form_builds_for_byte_uploads() {
        let payload = FakeUpload {
            chat_id: ChatId::Id(5),
            document: InputFile::bytes("a.txt", b"hello".to_vec()),
            caption: None,
        };
        assert!(payload.files().iter().any(|f| f.needs_upload()));
        // Form construction must not error; part inspection is not exposed
        // by reqwest, the wire shape is covered by the mock tests.
        multipart_form(&payload).unwrap();
    }

    #[test]
    fn file_id_payloads_do_not_trigger_multipart() {
        let payload = FakeUpload {
            chat_id: ChatId::Id(5),
            document: InputFile::file_id("CAADBAAD"),
            caption: Some("hi".to_string()),
        };
        assert!(!payload.files().iter().any(|f| f.needs_upload()));
    }
}
