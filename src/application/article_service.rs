use log::info;

use crate::domain::article::{Article, UpdateStock};
use crate::domain::errors::DomainError;
use crate::domain::ports::ArticleRepository;

pub struct ArticleService<R> {
    repo: R,
}

impl<R: ArticleRepository> ArticleService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_article(&self, article: Article) -> Result<(), DomainError> {
        if article.article_id.is_empty() {
            return Err(DomainError::ArticleIdRequired);
        }
        self.repo.create(&article)?;
        info!("created article {}", article.article_id);
        Ok(())
    }

    pub fn update_article(&self, article_id: &str, article: Article) -> Result<(), DomainError> {
        self.repo.update(article_id, &article)?;
        info!("updated article {}", article_id);
        Ok(())
    }

    pub fn get_article(&self, article_id: &str) -> Result<Article, DomainError> {
        self.repo.get(article_id)
    }

    pub fn list_articles(&self) -> Result<Vec<Article>, DomainError> {
        self.repo.list()
    }

    pub fn delete_article(&self, article_id: &str) -> Result<(), DomainError> {
        self.repo.delete(article_id)?;
        info!("deleted article {}", article_id);
        Ok(())
    }

    pub fn update_article_stock(
        &self,
        article_id: &str,
        req: UpdateStock,
    ) -> Result<(), DomainError> {
        self.repo.update_stock(article_id, req.new_stock)
    }
}
