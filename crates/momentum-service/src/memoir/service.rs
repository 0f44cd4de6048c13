//! Memoir CRUD.

use std::sync::Arc;

use momentum_core::error::{AppError, ErrorCode};
use momentum_core::result::AppResult;
use momentum_core::types::cursor::{Cursor, CursorPage};
use momentum_database::repositories::memoir::MemoirRepository;
use momentum_entity::memoir::{CreateMemoir, Memoir, UpdateMemoir};

use crate::context::RequestContext;

/// Manages daily reflection entries.
#[derive(Debug, Clone)]
pub struct MemoirService {
    /// Memoir repository.
    memoir_repo: Arc<MemoirRepository>,
}

impl MemoirService {
    /// Creates a new memoir service.
    pub fn new(memoir_repo: Arc<MemoirRepository>) -> Self {
        Self { memoir_repo }
    }

    /// Creates a memoir.
    pub async fn create(&self, ctx: &RequestContext, memoir: CreateMemoir) -> AppResult<Memoir> {
        self.memoir_repo.create(ctx.user_id, &memoir).await
    }

    /// Fetches one memoir.
    pub async fn get(&self, ctx: &RequestContext, id: i64) -> AppResult<Memoir> {
        self.memoir_repo
            .find_by_id(id, ctx.user_id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::ResourceNotFound))
    }

    /// Lists the user's memoirs newest-first.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        cursor: Option<&str>,
        size: usize,
    ) -> AppResult<CursorPage<Memoir>> {
        let cursor = cursor.and_then(Cursor::decode);
        let rows = self
            .memoir_repo
            .find_by_user(ctx.user_id, cursor.as_ref(), size)
            .await?;
        CursorPage::of(rows, size, |m| {
            Cursor::new(m.id, m.created_at.naive_utc())
        })
    }

    /// Replaces all editable fields of a memoir.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        update: UpdateMemoir,
    ) -> AppResult<Memoir> {
        self.memoir_repo
            .update(id, ctx.user_id, &update)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::ResourceNotFound))
    }

    /// Deletes a memoir.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        if self.memoir_repo.delete(id, ctx.user_id).await? {
            Ok(())
        } else {
            Err(AppError::new(ErrorCode::ResourceNotFound))
        }
    }
}
