//! File metadata and profile photo methods. Downloading the bytes
//! themselves goes through [`BotApiClient::download_file`].

use botgram_types::{File, UserProfilePhotos};
use serde::Serialize;

use crate::client::{BotApiClient, Payload};
use crate::error::{BotApiError, Result};

/// `getFile`: basic info about a file and a `file_path` to download it.
#[derive(Debug, Clone, Serialize)]
pub struct GetFile {
    pub file_id: String,
}

impl GetFile {
    pub fn new(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
        }
    }
}

impl Payload for GetFile {
    const METHOD: &'static str = "getFile";
    type Output = File;
}

/// `getUserProfilePhotos`.
#[derive(Debug, Clone, Serialize)]
pub struct GetUserProfilePhotos {
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// 1-100, defaults to 100 server-side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl GetUserProfilePhotos {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            offset: None,
            limit: None,
        }
    }
}

impl Payload for GetUserProfilePhotos {
    const METHOD: &'static str = "getUserProfilePhotos";
    type Output = UserProfilePhotos;
}

impl BotApiClient {
    pub async fn get_file(&self, file_id: impl Into<String>) -> Result<File> {
        self.request(&GetFile::new(file_id)).await
    }

    pub async fn get_user_profile_photos(&self, user_id: i64) -> Result<UserProfilePhotos> {
        self.request(&GetUserProfilePhotos::new(user_id)).await
    }

    /// `getFile` followed by the download, in one call.
    pub async fn get_file_and_download(&self, file_id: impl Into<String>) -> Result<Vec<u8>> {
        let file = self.get_file(file_id).await?;
        let file_path = file.file_path.ok_or(BotApiError::EmptyResponse)?;
        self.download_file(&file_path).await
    }
}
