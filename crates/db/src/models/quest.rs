//! Daily quest progress model.

use chrono::NaiveDate;
use gacha_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A `user_quest_progress` row joined with its quest definition.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QuestProgress {
    pub quest_id: DbId,
    pub title: String,
    pub quest_type: String,
    pub target: i32,
    pub current_progress: i32,
    pub quest_date: NaiveDate,
}
