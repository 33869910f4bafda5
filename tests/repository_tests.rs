//! Repository tests against a real PostgreSQL store
//!
//! Each test gets a fresh database with the migrations applied.
//! Needs DATABASE_URL pointing at a server where the user may create databases.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use gearguard_server::{
    error::AppError,
    models::{
        equipment::EquipmentQuery,
        maintenance_request::{Completion, CreateMaintenanceRequest, MaintenanceRequest, RequestQuery, StatusChange},
        EquipmentStatus, RequestStatus, RequestType,
    },
    repository::Repository,
};

fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap()
}

async fn seed_equipment(pool: &PgPool, name: &str) -> Uuid {
    sqlx::query_scalar("INSERT INTO equipment (name, department) VALUES ($1, 'Production') RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .expect("Failed to insert equipment")
}

async fn seed_request(repo: &Repository, equipment_id: Uuid, request_type: RequestType) -> MaintenanceRequest {
    let data = CreateMaintenanceRequest {
        subject: Some("Spindle vibration".to_string()),
        equipment_id: Some(equipment_id),
        request_type: Some(request_type),
        scheduled_date: (request_type == RequestType::Preventive).then(|| NaiveDate::from_ymd_opt(2026, 3, 20).unwrap()),
        ..Default::default()
    };
    let new_request = data.validate(at(1, 8)).expect("valid payload");
    repo.requests.create(&new_request).await.expect("Failed to insert request")
}

async fn stored_status(pool: &PgPool, id: Uuid) -> String {
    sqlx::query_scalar("SELECT status FROM maintenance_requests WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .expect("Failed to read status")
}

#[sqlx::test(migrations = "./migrations")]
async fn test_scrap_marks_equipment_scrapped(pool: PgPool) {
    let repo = Repository::new(pool);
    let equipment_id = seed_equipment(&repo.pool, "CNC Mill").await;
    let request = seed_request(&repo, equipment_id, RequestType::Corrective).await;

    let updated = repo
        .requests
        .update_status(request.id, &StatusChange::new(RequestStatus::Scrap, at(2, 9)))
        .await
        .unwrap();
    assert_eq!(updated.status, RequestStatus::Scrap);

    let equipment = repo.equipment.get_by_id(equipment_id).await.unwrap();
    assert_eq!(equipment.status, EquipmentStatus::Scrapped);
    assert_eq!(equipment.updated_at, Some(at(2, 9)));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_scrap_rolls_back_when_equipment_update_fails(pool: PgPool) {
    let repo = Repository::new(pool);
    let equipment_id = seed_equipment(&repo.pool, "CNC Mill").await;
    let request = seed_request(&repo, equipment_id, RequestType::Corrective).await;

    sqlx::query(
        "CREATE FUNCTION reject_equipment_update() RETURNS trigger AS $$ \
         BEGIN RAISE EXCEPTION 'equipment is locked'; END; $$ LANGUAGE plpgsql",
    )
    .execute(&repo.pool)
    .await
    .unwrap();
    sqlx::query(
        "CREATE TRIGGER equipment_locked BEFORE UPDATE ON equipment \
         FOR EACH ROW EXECUTE FUNCTION reject_equipment_update()",
    )
    .execute(&repo.pool)
    .await
    .unwrap();

    let err = repo
        .requests
        .update_status(request.id, &StatusChange::new(RequestStatus::Scrap, at(2, 9)))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Database(_)), "unexpected error: {err:?}");

    // The request move is undone along with the equipment update
    assert_eq!(stored_status(&repo.pool, request.id).await, "new");
    let equipment = repo.equipment.get_by_id(equipment_id).await.unwrap();
    assert_eq!(equipment.status, EquipmentStatus::Active);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_non_scrap_moves_leave_equipment_active(pool: PgPool) {
    let repo = Repository::new(pool);
    let equipment_id = seed_equipment(&repo.pool, "Forklift").await;
    let request = seed_request(&repo, equipment_id, RequestType::Corrective).await;

    for status in [RequestStatus::InProgress, RequestStatus::Repaired, RequestStatus::New] {
        repo.requests
            .update_status(request.id, &StatusChange::new(status, at(2, 9)))
            .await
            .unwrap();
    }

    let equipment = repo.equipment.get_by_id(equipment_id).await.unwrap();
    assert_eq!(equipment.status, EquipmentStatus::Active);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_unknown_request_is_not_found(pool: PgPool) {
    let repo = Repository::new(pool);
    let missing = Uuid::new_v4();

    let err = repo
        .requests
        .update_status(missing, &StatusChange::new(RequestStatus::Scrap, at(2, 9)))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)), "unexpected error: {err:?}");

    let completion = Completion::parse(Some(1.0), at(2, 9)).unwrap();
    let err = repo.requests.complete(missing, &completion).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)), "unexpected error: {err:?}");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_completed_date_survives_moving_away_from_repaired(pool: PgPool) {
    let repo = Repository::new(pool);
    let equipment_id = seed_equipment(&repo.pool, "Air Compressor").await;
    let request = seed_request(&repo, equipment_id, RequestType::Corrective).await;
    assert!(request.completed_date.is_none());

    let repaired = repo
        .requests
        .update_status(request.id, &StatusChange::new(RequestStatus::Repaired, at(5, 10)))
        .await
        .unwrap();
    assert_eq!(repaired.completed_date, NaiveDate::from_ymd_opt(2026, 3, 5));

    let reopened = repo
        .requests
        .update_status(request.id, &StatusChange::new(RequestStatus::InProgress, at(7, 10)))
        .await
        .unwrap();
    assert_eq!(reopened.status, RequestStatus::InProgress);
    assert_eq!(reopened.completed_date, NaiveDate::from_ymd_opt(2026, 3, 5));
    assert_eq!(reopened.updated_at, Some(at(7, 10)));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_complete_records_hours_and_closes_request(pool: PgPool) {
    let repo = Repository::new(pool);
    let equipment_id = seed_equipment(&repo.pool, "Air Compressor").await;
    let request = seed_request(&repo, equipment_id, RequestType::Corrective).await;
    assert_eq!(repo.requests.count_open_for_equipment(equipment_id).await.unwrap(), 1);

    let completion = Completion::parse(Some(2.5), at(9, 16)).unwrap();
    let completed = repo.requests.complete(request.id, &completion).await.unwrap();
    assert_eq!(completed.status, RequestStatus::Repaired);
    assert_eq!(completed.hours_spent, Some(2.5));
    assert_eq!(completed.completed_date, NaiveDate::from_ymd_opt(2026, 3, 9));

    assert_eq!(repo.requests.count_open_for_equipment(equipment_id).await.unwrap(), 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_equipment_search_is_case_insensitive(pool: PgPool) {
    let repo = Repository::new(pool);
    seed_equipment(&repo.pool, "Cordless Drill").await;
    seed_equipment(&repo.pool, "drill press").await;
    seed_equipment(&repo.pool, "Lathe").await;

    let query = EquipmentQuery {
        q: Some("DRILL".to_string()),
        ..Default::default()
    };
    let mut names: Vec<String> = repo.equipment.list(&query).await.unwrap().into_iter().map(|e| e.name).collect();
    names.sort();
    assert_eq!(names, vec!["Cordless Drill".to_string(), "drill press".to_string()]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_equipment_search_escapes_wildcards(pool: PgPool) {
    let repo = Repository::new(pool);
    seed_equipment(&repo.pool, "Press 50%_load").await;
    seed_equipment(&repo.pool, "Press 500 load").await;

    for term in ["%", "_", "50%_"] {
        let query = EquipmentQuery {
            q: Some(term.to_string()),
            ..Default::default()
        };
        let names: Vec<String> = repo.equipment.list(&query).await.unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Press 50%_load".to_string()], "term {term}");
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_request_filters_and_calendar(pool: PgPool) {
    let repo = Repository::new(pool);
    let mill = seed_equipment(&repo.pool, "CNC Mill").await;
    let lathe = seed_equipment(&repo.pool, "Lathe").await;
    seed_request(&repo, mill, RequestType::Corrective).await;
    let planned = seed_request(&repo, mill, RequestType::Preventive).await;
    seed_request(&repo, lathe, RequestType::Corrective).await;

    let query = RequestQuery {
        equipment_id: Some(mill),
        request_type: Some(RequestType::Preventive),
    };
    let rows = repo.requests.list(&query).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, planned.id);

    let rows = repo.requests.list(&RequestQuery::default()).await.unwrap();
    assert_eq!(rows.len(), 3);

    let rows = repo.requests.calendar(&Default::default()).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].scheduled_date, NaiveDate::from_ymd_opt(2026, 3, 20));
}
