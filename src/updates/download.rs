//! Handing confirmed updates to a downloader.

use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::task::JoinHandle;

use crate::error::{RelwatchError, Result};

use super::version::VERSION;

/// Receives the download link of a release the user chose to install.
///
/// `start_download` must return promptly; the download itself runs elsewhere.
pub trait DownloadHandoff {
    /// Begin downloading `url`.
    fn start_download(&self, url: &str);
}

/// Downloads release assets into a directory on background tasks.
///
/// Must be used from within a tokio runtime.
pub struct HttpDownloader {
    client: reqwest::Client,
    dir: PathBuf,
    show_progress: bool,
    tasks: Mutex<Vec<JoinHandle<Result<PathBuf>>>>,
}

impl HttpDownloader {
    /// Create a downloader writing into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(format!("relwatch/{}", VERSION))
            .connect_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| RelwatchError::Other(anyhow::anyhow!("HTTP client setup failed: {}", e)))?;

        Ok(Self {
            client,
            dir: dir.into(),
            show_progress: false,
            tasks: Mutex::new(Vec::new()),
        })
    }

    /// Show a byte progress bar per download.
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of downloads started and not yet awaited.
    pub fn pending(&self) -> usize {
        self.tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Wait for every started download, in start order.
    pub async fn wait(&self) -> Vec<Result<PathBuf>> {
        let handles = {
            let mut tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
            std::mem::take(&mut *tasks)
        };

        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            let result = match handle.await {
                Ok(result) => result,
                Err(e) => Err(RelwatchError::Other(anyhow::anyhow!(
                    "download task failed: {}",
                    e
                ))),
            };
            results.push(result);
        }
        results
    }
}

impl DownloadHandoff for HttpDownloader {
    fn start_download(&self, url: &str) {
        tracing::info!("Starting download of {}", url);

        let client = self.client.clone();
        let dir = self.dir.clone();
        let url = url.to_string();
        let show_progress = self.show_progress;

        let handle =
            tokio::spawn(async move { download_to_dir(&client, &url, &dir, show_progress).await });

        self.tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(handle);
    }
}

/// Stream `url` into `dir`, returning the written file's path.
///
/// The body is written to `<name>.part` and renamed once complete; a failed
/// download leaves nothing behind.
pub async fn download_to_dir(
    client: &reqwest::Client,
    url: &str,
    dir: &Path,
    show_progress: bool,
) -> Result<PathBuf> {
    let failed = |message: String| RelwatchError::DownloadFailed {
        url: url.to_string(),
        message,
    };

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| failed(e.to_string()))?;

    if !response.status().is_success() {
        return Err(failed(format!("HTTP {}", response.status())));
    }

    tokio::fs::create_dir_all(dir).await?;
    let name = file_name_from_url(url);
    let path = dir.join(&name);
    let part_path = dir.join(format!("{}.part", name));

    if let Err(e) = stream_to_file(response, &part_path, &path, &name, show_progress).await {
        if let Err(cleanup) = tokio::fs::remove_file(&part_path).await {
            tracing::debug!("Could not remove {}: {}", part_path.display(), cleanup);
        }
        return Err(match e {
            RelwatchError::DownloadFailed { .. } => e,
            other => failed(other.to_string()),
        });
    }

    tracing::info!("Downloaded {} to {}", url, path.display());
    Ok(path)
}

async fn stream_to_file(
    mut response: reqwest::Response,
    part_path: &Path,
    path: &Path,
    name: &str,
    show_progress: bool,
) -> Result<()> {
    let mut file = tokio::fs::File::create(part_path).await?;

    let bar = progress_bar(response.content_length(), show_progress);
    bar.set_message(name.to_string());

    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| RelwatchError::Other(e.into()))?
    {
        file.write_all(&chunk).await?;
        bar.inc(chunk.len() as u64);
    }
    file.flush().await?;
    drop(file);
    bar.finish_and_clear();

    tokio::fs::rename(part_path, path).await?;
    Ok(())
}

/// Last non-empty path segment of `url`, ignoring query and fragment.
pub fn file_name_from_url(url: &str) -> String {
    let without_suffix = url.split(['?', '#']).next().unwrap_or(url);
    let path = without_suffix
        .split_once("://")
        .map(|(_, rest)| rest.split_once('/').map(|(_, p)| p).unwrap_or(""))
        .unwrap_or(without_suffix);

    path.rsplit('/')
        .find(|segment| !segment.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| "download".to_string())
}

fn progress_bar(total: Option<u64>, show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }

    match total {
        Some(len) => {
            let bar = ProgressBar::new(len);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{msg} {bar:30.magenta} {bytes}/{total_bytes}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            bar
        }
        None => {
            let bar = ProgressBar::new_spinner();
            bar.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.magenta} {msg} {bytes}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            bar
        }
    }
}

/// Handoff that only records the links it was given.
#[derive(Debug, Default)]
pub struct RecordingHandoff {
    urls: Mutex<Vec<String>>,
}

impl RecordingHandoff {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Links received so far, in order.
    pub fn urls(&self) -> Vec<String> {
        self.urls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl DownloadHandoff for RecordingHandoff {
    fn start_download(&self, url: &str) {
        self.urls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url.to_string());
    }
}
