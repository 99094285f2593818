// tests/session_tests.rs

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use skillcheck::{
    config::Config,
    error::AppError,
    models::assessment::Subject,
    session::{AssessmentSession, InMemorySessionStore, SessionStore},
};

fn payload(name: &str) -> AssessmentSession {
    AssessmentSession {
        subject: Subject::Skill {
            skill_id: format!("{}-id", name),
            skill_name: name.to_string(),
            skill_type: "technical".to_string(),
        },
        questions: vec![],
    }
}

#[tokio::test]
async fn create_get_delete_roundtrip() {
    let store = InMemorySessionStore::from_config(&Config::from_env());

    let id = store.create(payload("SQL")).await;
    let session = store.get(&id).await.expect("Get failed");
    assert_eq!(session.subject.name(), "SQL");

    store.delete(&id).await;
    // Deleting again is a no-op.
    store.delete(&id).await;

    let err = store.get(&id).await.expect_err("Deleted session must be gone");
    assert!(matches!(err, AppError::SessionNotFound(_)));
}

#[tokio::test]
async fn unknown_id_reports_not_found() {
    let store = InMemorySessionStore::default();
    let err = store.get("no-such-session").await.unwrap_err();
    assert!(matches!(err, AppError::SessionNotFound(_)));
}

#[tokio::test]
async fn concurrent_creates_yield_unique_ids() {
    let store = Arc::new(InMemorySessionStore::default());

    let mut handles = Vec::new();
    for i in 0..1000 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store.create(payload(&format!("skill-{}", i))).await
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }

    assert_eq!(ids.len(), 1000);
    assert_eq!(store.len().await, 1000);
}

#[tokio::test]
async fn take_succeeds_at_most_once() {
    let store = Arc::new(InMemorySessionStore::default());
    let id = store.create(payload("Rust")).await;

    let a = {
        let store = Arc::clone(&store);
        let id = id.clone();
        tokio::spawn(async move { store.take(&id).await })
    };
    let b = {
        let store = Arc::clone(&store);
        let id = id.clone();
        tokio::spawn(async move { store.take(&id).await })
    };

    let results = [a.await.unwrap(), b.await.unwrap()];
    let wins = results.iter().filter(|r| r.is_ok()).count();

    assert_eq!(wins, 1);
    assert!(matches!(store.get(&id).await, Err(AppError::SessionNotFound(_))));
}

#[tokio::test]
async fn expired_entries_are_invisible_and_purged() {
    let store = InMemorySessionStore::new(Duration::from_millis(30));

    let old = store.create(payload("old")).await;
    tokio::time::sleep(Duration::from_millis(60)).await;
    let fresh = store.create(payload("fresh")).await;

    // Expired before the purge: visible in len, invisible to get.
    assert_eq!(store.len().await, 2);
    assert!(matches!(store.get(&old).await, Err(AppError::SessionExpired(_))));

    let removed = store.purge_expired().await;
    assert_eq!(removed, 1);
    assert_eq!(store.len().await, 1);

    // The fresh entry survives; the old one is now fully gone.
    assert!(store.get(&fresh).await.is_ok());
    assert!(matches!(store.get(&old).await, Err(AppError::SessionNotFound(_))));
}

#[tokio::test]
async fn sweeper_reclaims_abandoned_sessions() {
    // Subscriber so the purge debug lines show up under --nocapture.
    let _ = tracing_subscriber::fmt()
        .with_env_filter("skillcheck=debug")
        .try_init();

    let store = Arc::new(InMemorySessionStore::new(Duration::from_millis(20)));
    let sweeper = Arc::clone(&store).start_sweeper(Duration::from_millis(25));

    store.create(payload("abandoned")).await;
    tokio::time::sleep(Duration::from_millis(120)).await;

    assert!(store.is_empty().await);
    sweeper.abort();
}
