use crate::domain::model::WordId;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn ensure_dir(&self) -> impl std::future::Future<Output = Result<()>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn location(&self) -> &str;
}

/// 取得單一詞條頁面的原始 HTML
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, id: WordId) -> Result<String>;
}
