use mydumbbell::data::file::FileStorage;
use mydumbbell::data::store::{CURRENT_USER_KEY, Store, USERS_KEY};
use mydumbbell::domain::models::NewExercise;
use mydumbbell::domain::user::{CreateUser, UserRecord};
use mydumbbell::presentation::handlers::AppState;
use std::sync::Arc;
use tempfile::TempDir;

async fn open_store(dir: &TempDir) -> Store {
    let storage = FileStorage::open(dir.path()).await.unwrap();
    Store::new(Arc::new(storage))
}

#[tokio::test]
async fn test_state_survives_restart() {
    let dir = TempDir::new().unwrap();

    {
        let state = AppState::open(open_store(&dir).await).await.unwrap();
        let user = state
            .auth_service
            .register_user(CreateUser {
                name: "Ana".to_string(),
                email: "ana@x.com".to_string(),
                password: "senha123".to_string(),
                confirm_password: "senha123".to_string(),
            })
            .await
            .unwrap();
        state
            .exercise_service
            .create_exercise(
                &user,
                NewExercise {
                    name: "Supino".to_string(),
                    muscle_group: "Peito".to_string(),
                    ..NewExercise::default()
                },
            )
            .await
            .unwrap();
    }

    assert!(dir.path().join(format!("{USERS_KEY}.json")).exists());
    assert!(dir.path().join(format!("{CURRENT_USER_KEY}.json")).exists());

    let state = AppState::open(open_store(&dir).await).await.unwrap();
    let user = state.auth_service.current_user().await.unwrap().unwrap();
    assert_eq!(user.email, "ana@x.com");

    let exercises = state.exercise_service.list_exercises(&user).await.unwrap();
    assert_eq!(exercises.len(), 1);
    assert_eq!(exercises[0].name, "Supino");
}

#[tokio::test]
async fn test_malformed_file_loads_as_empty() {
    let dir = TempDir::new().unwrap();
    tokio::fs::write(dir.path().join(format!("{USERS_KEY}.json")), "{not json")
        .await
        .unwrap();

    let store = open_store(&dir).await;
    let users: Vec<UserRecord> = store.load(USERS_KEY).await.unwrap();
    assert!(users.is_empty());

    let state = AppState::open(store).await.unwrap();
    assert!(state.auth_service.current_user().await.unwrap().is_none());
}

#[tokio::test]
async fn test_round_trip_preserves_order() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir).await;

    let empty: Vec<String> = Vec::new();
    store.save("order", &empty).await.unwrap();
    let loaded: Vec<String> = store.load("order").await.unwrap();
    assert!(loaded.is_empty());

    let values = vec!["c".to_string(), "a".to_string(), "b".to_string()];
    store.save("order", &values).await.unwrap();
    let loaded: Vec<String> = store.load("order").await.unwrap();
    assert_eq!(loaded, values);

    store.remove("order").await.unwrap();
    let loaded: Vec<String> = store.load("order").await.unwrap();
    assert!(loaded.is_empty());
}
