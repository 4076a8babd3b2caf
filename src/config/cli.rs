use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::Path;

/// 將輸出檔案寫到本機目錄
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn ensure_dir(&self) -> Result<()> {
        // 目錄已存在時不視為錯誤
        tokio::fs::create_dir_all(&self.base_path).await?;
        Ok(())
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }

    fn location(&self) -> &str {
        &self.base_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_ensure_dir_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("words_data");
        let storage = LocalStorage::new(out.to_str().unwrap().to_string());

        storage.ensure_dir().await.unwrap();
        storage.ensure_dir().await.unwrap();
        assert!(out.is_dir());
    }

    #[tokio::test]
    async fn test_write_file_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        storage.write_file("summary.json", b"first").await.unwrap();
        storage.write_file("summary.json", b"second").await.unwrap();

        let content = std::fs::read_to_string(temp_dir.path().join("summary.json")).unwrap();
        assert_eq!(content, "second");
    }
}
