//! Integration tests for the repository layer against a real database.

use chrono::{Duration, TimeZone, Utc};
use gacha_core::quests::QUEST_TYPE_DAILY_SPINS;
use gacha_db::models::character::CreateCharacter;
use gacha_db::models::rarity::CreateRarity;
use gacha_db::models::user::CreateUser;
use gacha_db::repositories::{CharacterRepo, CollectionRepo, QuestRepo, RarityRepo, UserRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(username: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
        is_admin: false,
    }
}

fn new_rarity(name: &str, chance: f64) -> CreateRarity {
    CreateRarity {
        name: name.to_string(),
        color: "#FFFFFF".to_string(),
        chance,
    }
}

fn new_character(name: &str, rarity_id: i64) -> CreateCharacter {
    CreateCharacter {
        name: name.to_string(),
        description: String::new(),
        image_url: String::new(),
        rarity_id,
        is_limited: false,
        limited_until: None,
        created_by: None,
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn new_user_starts_with_empty_spin_state(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("alice")).await.unwrap();

    assert_eq!(user.total_spins, 0);
    assert!(user.last_spin.is_none());
    assert!(!user.is_admin);

    let found = UserRepo::find_by_username(&pool, "alice").await.unwrap();
    assert_eq!(found.map(|u| u.id), Some(user.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_username_violates_unique_constraint(pool: PgPool) {
    UserRepo::create(&pool, &new_user("alice")).await.unwrap();
    let err = UserRepo::create(&pool, &new_user("alice")).await.unwrap_err();

    let db_err = err.as_database_error().expect("should be a database error");
    assert_eq!(db_err.constraint(), Some("uq_users_username"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn record_spin_increments_and_stamps(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("alice")).await.unwrap();
    let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();

    let mut conn = pool.acquire().await.unwrap();
    assert_eq!(UserRepo::record_spin(&mut conn, user.id, at).await.unwrap(), 1);
    assert_eq!(
        UserRepo::record_spin(&mut conn, user.id, at + Duration::hours(1))
            .await
            .unwrap(),
        2
    );

    let state = UserRepo::lock_spin_state(&mut conn, user.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(state.total_spins, 2);
    assert_eq!(state.last_spin, Some(at + Duration::hours(1)));
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn rarity_chance_outside_unit_interval_is_rejected(pool: PgPool) {
    assert!(RarityRepo::create(&pool, &new_rarity("Broken", 1.2)).await.is_err());
    assert!(RarityRepo::create(&pool, &new_rarity("Broken", -0.1)).await.is_err());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn spin_candidates_are_filtered_and_ordered(pool: PgPool) {
    let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    let common = RarityRepo::create(&pool, &new_rarity("Common", 0.6)).await.unwrap();
    let rare = RarityRepo::create(&pool, &new_rarity("Rare", 0.3)).await.unwrap();

    let rare_a = CharacterRepo::create(&pool, &new_character("Knight", rare.id))
        .await
        .unwrap();
    let common_a = CharacterRepo::create(&pool, &new_character("Slime", common.id))
        .await
        .unwrap();
    let common_b = CharacterRepo::create(&pool, &new_character("Bat", common.id))
        .await
        .unwrap();

    let retired = CharacterRepo::create(&pool, &new_character("Retired", common.id))
        .await
        .unwrap();
    CharacterRepo::set_active(&pool, retired.id, false).await.unwrap();

    let mut expired = new_character("Expired", rare.id);
    expired.is_limited = true;
    expired.limited_until = Some(now - Duration::minutes(1));
    CharacterRepo::create(&pool, &expired).await.unwrap();

    let mut event = new_character("Event", rare.id);
    event.is_limited = true;
    event.limited_until = Some(now + Duration::days(1));
    let event = CharacterRepo::create(&pool, &event).await.unwrap();

    let mut conn = pool.acquire().await.unwrap();
    let ids: Vec<i64> = CharacterRepo::list_spin_candidates(&mut conn, now)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();

    // Chance descending, then id ascending.
    assert_eq!(ids, vec![common_a.id, common_b.id, rare_a.id, event.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn catalog_flags_spin_eligibility(pool: PgPool) {
    let rarity = RarityRepo::create(&pool, &new_rarity("Common", 0.6)).await.unwrap();
    let mut expired = new_character("Expired", rarity.id);
    expired.is_limited = true;
    expired.limited_until = Some(Utc::now() - Duration::days(1));
    CharacterRepo::create(&pool, &expired).await.unwrap();
    CharacterRepo::create(&pool, &new_character("Slime", rarity.id))
        .await
        .unwrap();

    let catalog = CharacterRepo::list_catalog(&pool).await.unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog[0].name, "Slime");
    assert!(catalog[0].is_spin_eligible(Utc::now()));
    assert!(!catalog[1].is_spin_eligible(Utc::now()));
}

// ---------------------------------------------------------------------------
// Collection and quests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn collection_keeps_duplicates_newest_first(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("alice")).await.unwrap();
    let rarity = RarityRepo::create(&pool, &new_rarity("Common", 0.6)).await.unwrap();
    let slime = CharacterRepo::create(&pool, &new_character("Slime", rarity.id))
        .await
        .unwrap();
    let t = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();

    let mut conn = pool.acquire().await.unwrap();
    let first = CollectionRepo::grant(&mut conn, user.id, slime.id, t).await.unwrap();
    let second = CollectionRepo::grant(&mut conn, user.id, slime.id, t + Duration::hours(1))
        .await
        .unwrap();
    drop(conn);

    let owned = CollectionRepo::list_for_user(&pool, user.id).await.unwrap();
    let ids: Vec<i64> = owned.iter().map(|o| o.ownership_id).collect();
    assert_eq!(ids, vec![second, first]);
    assert_eq!(owned[0].rarity_name, "Common");
    assert_eq!(CollectionRepo::count_for_user(&pool, user.id).await.unwrap(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn quest_advance_upserts_per_day(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("alice")).await.unwrap();
    let day = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap().date_naive();
    let next_day = day.succ_opt().unwrap();

    let mut conn = pool.acquire().await.unwrap();
    for _ in 0..2 {
        let advanced = QuestRepo::advance(&mut conn, user.id, QUEST_TYPE_DAILY_SPINS, day)
            .await
            .unwrap();
        assert_eq!(advanced, 1);
    }
    QuestRepo::advance(&mut conn, user.id, QUEST_TYPE_DAILY_SPINS, next_day)
        .await
        .unwrap();
    // Unknown quest types touch nothing.
    let advanced = QuestRepo::advance(&mut conn, user.id, "daily_logins", day)
        .await
        .unwrap();
    assert_eq!(advanced, 0);
    drop(conn);

    let today = QuestRepo::list_for_day(&pool, user.id, day).await.unwrap();
    assert_eq!(today.len(), 1);
    assert_eq!(today[0].current_progress, 2);
    assert_eq!(today[0].quest_date, day);

    let tomorrow = QuestRepo::list_for_day(&pool, user.id, next_day).await.unwrap();
    assert_eq!(tomorrow[0].current_progress, 1);
}
