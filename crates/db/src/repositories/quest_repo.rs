//! Repository for `daily_quests` and `user_quest_progress`.

use chrono::NaiveDate;
use gacha_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::quest::QuestProgress;

/// Provides quest progress upserts and per-day progress reads.
pub struct QuestRepo;

impl QuestRepo {
    /// Advance every active quest of `quest_type` by one for `user_id` on
    /// `quest_date`.
    ///
    /// Uses `ON CONFLICT (user_id, quest_id, quest_date) DO UPDATE` so there
    /// is at most one progress row per user, quest and day. Returns the number
    /// of rows inserted or incremented.
    pub async fn advance(
        conn: &mut PgConnection,
        user_id: DbId,
        quest_type: &str,
        quest_date: NaiveDate,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO user_quest_progress (user_id, quest_id, current_progress, quest_date)
             SELECT $1, dq.id, 1, $3
             FROM daily_quests dq
             WHERE dq.quest_type = $2 AND dq.is_active = true
             ON CONFLICT (user_id, quest_id, quest_date)
             DO UPDATE SET current_progress = user_quest_progress.current_progress + 1",
        )
        .bind(user_id)
        .bind(quest_type)
        .bind(quest_date)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }

    /// List every active quest with the user's progress on `quest_date`
    /// (zero where no progress row exists yet).
    pub async fn list_for_day(
        pool: &PgPool,
        user_id: DbId,
        quest_date: NaiveDate,
    ) -> Result<Vec<QuestProgress>, sqlx::Error> {
        sqlx::query_as::<_, QuestProgress>(
            "SELECT dq.id AS quest_id, dq.title, dq.quest_type, dq.target,
                    COALESCE(p.current_progress, 0) AS current_progress,
                    $2::date AS quest_date
             FROM daily_quests dq
             LEFT JOIN user_quest_progress p
                    ON p.quest_id = dq.id AND p.user_id = $1 AND p.quest_date = $2
             WHERE dq.is_active = true
             ORDER BY dq.id",
        )
        .bind(user_id)
        .bind(quest_date)
        .fetch_all(pool)
        .await
    }
}
