use bytes::Bytes;
use std::{
    io,
    path::{Path, PathBuf},
};
use tokio::{fs, io::AsyncWriteExt};
use uuid::Uuid;

/// Subdirectory of the public directory that holds plant photos.
pub const IMAGES_DIR: &str = "images";

/// Photo assigned to plants created without an upload.
pub const DEFAULT_PHOTO_PATH: &str = "images/default.jpg";

/// A file received in a multipart form.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub content: Bytes,
}

impl Upload {
    /// Browsers send an empty part when no file was picked.
    pub fn is_empty(&self) -> bool {
        self.file_name.trim().is_empty() || self.content.is_empty()
    }

    /// The extension of the client file name including the leading dot, or an empty string.
    fn extension(&self) -> String {
        // clients may send a full windows path as the file name
        let name = self.file_name.rsplit(['/', '\\']).next().unwrap_or_default();

        Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
            .map(|ext| format!(".{ext}"))
            .unwrap_or_default()
    }
}

/// Writes uploaded photos below the public directory.
#[derive(Debug, Clone)]
pub struct PhotoStore {
    public_dir: PathBuf,
}

impl PhotoStore {
    pub fn new(public_dir: impl Into<PathBuf>) -> Self {
        Self {
            public_dir: public_dir.into(),
        }
    }

    pub fn public_dir(&self) -> &Path {
        &self.public_dir
    }

    /// Stores the upload under a freshly generated name and returns its path relative to the
    /// public directory, with forward slashes.
    pub async fn save(&self, upload: &Upload) -> io::Result<String> {
        let dir = self.public_dir.join(IMAGES_DIR);
        fs::create_dir_all(&dir).await?;

        let file_name = format!("{}{}", Uuid::new_v4(), upload.extension());

        let mut file = fs::File::create(dir.join(&file_name)).await?;
        file.write_all(&upload.content).await?;
        file.flush().await?;

        debug!("stored photo {file_name} ({} bytes)", upload.content.len());

        Ok(format!("{IMAGES_DIR}/{file_name}"))
    }
}
