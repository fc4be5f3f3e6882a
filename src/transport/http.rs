use async_trait::async_trait;
use reqwest::{
    Body, Client,
    multipart::{Form, Part},
};
use tokio_util::io::ReaderStream;
use url::Url;

use super::{UPLOAD_FIELD, VideoTransport};
use crate::{
    error::{ClientError, Result},
    models::{ListVideosResponse, MutationResponse, SelectedFile},
};

/// Talks to the video service over HTTP. Bodies are decoded as JSON whatever
/// the status code, since the service reports failures in the payload.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(api_url: &str) -> Result<Self> {
        let base_url = Url::parse(api_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(api_url.to_string()));
        }

        let client = Client::builder()
            .user_agent(concat!("vidshelf/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl VideoTransport for HttpTransport {
    async fn list_videos(&self) -> Result<ListVideosResponse> {
        let url = self.endpoint(&["videos"])?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        tracing::debug!("List responded with {}", response.status());

        Ok(response.json().await?)
    }

    async fn upload_video(&self, file: &SelectedFile) -> Result<MutationResponse> {
        let url = self.endpoint(&["upload"])?;
        tracing::debug!("POST {} ({}, {} bytes)", url, file.name, file.size);

        let handle = tokio::fs::File::open(&file.path).await?;
        let body = Body::wrap_stream(ReaderStream::new(handle));
        let part = Part::stream_with_length(body, file.size).file_name(file.name.clone());
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self.client.post(url).multipart(form).send().await?;
        tracing::debug!("Upload responded with {}", response.status());

        Ok(response.json().await?)
    }

    async fn delete_video(&self, name: &str) -> Result<MutationResponse> {
        // `.` and `..` would be collapsed away and address the collection itself.
        if matches!(name, "" | "." | "..") {
            return Err(ClientError::InvalidName(name.to_string()));
        }

        let url = self.endpoint(&["videos", name])?;
        tracing::debug!("DELETE {}", url);

        let response = self.client.delete(url).send().await?;
        tracing::debug!("Delete responded with {}", response.status());

        Ok(response.json().await?)
    }
}
