use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::article::Article;
use crate::domain::errors::DomainError;
use crate::domain::ports::ArticleRepository;
use crate::schema::articles;

use super::models::ArticleRow;

#[derive(Clone)]
pub struct DieselArticleRepository {
    pool: DbPool,
}

impl DieselArticleRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ArticleRepository for DieselArticleRepository {
    fn create(&self, article: &Article) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;
        diesel::insert_into(articles::table)
            .values(&ArticleRow::from(article))
            .execute(&mut conn)?;
        Ok(())
    }

    fn update(&self, article_id: &str, article: &Article) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;
        let affected = diesel::update(articles::table.find(article_id))
            .set((
                articles::article_name.eq(&article.article_name),
                articles::price.eq(&article.price),
                articles::stock.eq(article.stock),
            ))
            .execute(&mut conn)?;
        if affected == 0 {
            return Err(DomainError::NoRowsAffected("updating article"));
        }
        Ok(())
    }

    fn get(&self, article_id: &str) -> Result<Article, DomainError> {
        let mut conn = self.pool.get()?;
        let row = articles::table
            .find(article_id)
            .select(ArticleRow::as_select())
            .first(&mut conn)?;
        Ok(row.into())
    }

    fn list(&self) -> Result<Vec<Article>, DomainError> {
        let mut conn = self.pool.get()?;
        let rows = articles::table
            .select(ArticleRow::as_select())
            .order(articles::article_id.asc())
            .load(&mut conn)?;
        Ok(rows.into_iter().map(Article::from).collect())
    }

    fn delete(&self, article_id: &str) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;
        let affected = diesel::delete(articles::table.find(article_id)).execute(&mut conn)?;
        if affected == 0 {
            return Err(DomainError::NoRowsAffected("deleting article"));
        }
        Ok(())
    }

    fn update_stock(&self, article_id: &str, stock: i64) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;
        let affected = diesel::update(articles::table.find(article_id))
            .set(articles::stock.eq(stock))
            .execute(&mut conn)?;
        if affected == 0 {
            return Err(DomainError::NoRowsAffected("updating stock"));
        }
        Ok(())
    }
}
