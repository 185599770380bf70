//! Behaviour every `VideoStore` implementation must share.
//!
//! Each check takes a `&dyn VideoStore` so the same assertions run against
//! the in-memory store and PostgreSQL.

#![allow(dead_code)]

use std::sync::Arc;

use assert_matches::assert_matches;
use cinelog_core::filters::Filters;
use cinelog_core::video::Video;
use cinelog_db::error::StoreError;
use cinelog_db::store::{VideoQuery, VideoStore};

pub fn casablanca() -> Video {
    Video::new(
        "Casablanca",
        1942,
        102,
        vec!["drama".into(), "romance".into(), "war".into()],
    )
}

pub fn video(title: &str, year: i32, genres: &[&str]) -> Video {
    Video::new(
        title,
        year,
        90,
        genres.iter().map(|g| g.to_string()).collect(),
    )
}

pub async fn insert_assigns_identity(store: &dyn VideoStore) {
    let mut video = casablanca();
    store.insert(&mut video).await.unwrap();

    assert!(video.id > 0);
    assert_eq!(video.version, 1);
    assert!(video.created_at.timestamp() > 0);

    let json = serde_json::to_value(&video).unwrap();
    assert_eq!(json["runtime"], "102 mins");
    assert!(json.get("created_at").is_none());
    assert!(json.get("createdAt").is_none());
}

pub async fn get_returns_stored_record(store: &dyn VideoStore) {
    let mut video = casablanca();
    store.insert(&mut video).await.unwrap();

    let fetched = store.get(video.id).await.unwrap();
    assert_eq!(fetched.title, "Casablanca");
    assert_eq!(fetched.runtime.minutes(), 102);
    assert_eq!(fetched.genres, video.genres);
    assert_eq!(fetched.version, 1);
    assert_eq!(fetched.created_at, video.created_at);
}

pub async fn get_rejects_non_positive_ids(store: &dyn VideoStore) {
    assert_matches!(store.get(0).await, Err(StoreError::RecordNotFound));
    assert_matches!(store.get(-5).await, Err(StoreError::RecordNotFound));
}

pub async fn get_missing_is_not_found(store: &dyn VideoStore) {
    assert_matches!(store.get(999_999).await, Err(StoreError::RecordNotFound));
}

pub async fn update_increments_version(store: &dyn VideoStore) {
    let mut video = casablanca();
    store.insert(&mut video).await.unwrap();

    video.title = "Casablanca (Restored)".into();
    store.update(&mut video).await.unwrap();
    assert_eq!(video.version, 2);

    let fetched = store.get(video.id).await.unwrap();
    assert_eq!(fetched.title, "Casablanca (Restored)");
    assert_eq!(fetched.version, 2);
    assert_eq!(fetched.created_at, video.created_at);
}

pub async fn stale_update_conflicts(store: &dyn VideoStore) {
    let mut video = casablanca();
    store.insert(&mut video).await.unwrap();

    let mut stale = video.clone();
    video.year = 1943;
    store.update(&mut video).await.unwrap();

    stale.title = "Lost edit".into();
    assert_matches!(store.update(&mut stale).await, Err(StoreError::EditConflict));
    assert_eq!(stale.version, 1);

    let fetched = store.get(video.id).await.unwrap();
    assert_eq!(fetched.year, 1943);
    assert_eq!(fetched.title, "Casablanca");
    assert_eq!(fetched.version, 2);
}

pub async fn update_of_deleted_record_conflicts(store: &dyn VideoStore) {
    let mut video = casablanca();
    store.insert(&mut video).await.unwrap();
    store.delete(video.id).await.unwrap();

    assert_matches!(store.update(&mut video).await, Err(StoreError::EditConflict));
}

pub async fn concurrent_updates_admit_one_winner(store: Arc<dyn VideoStore>) {
    let mut original = casablanca();
    store.insert(&mut original).await.unwrap();

    let mut handles = Vec::new();
    for i in 0..8 {
        let store = Arc::clone(&store);
        let mut copy = original.clone();
        copy.title = format!("Writer {i}");
        handles.push(tokio::spawn(async move { store.update(&mut copy).await }));
    }

    let mut wins = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) => wins += 1,
            Err(StoreError::EditConflict) => conflicts += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    assert_eq!(wins, 1);
    assert_eq!(conflicts, 7);
    assert_eq!(store.get(original.id).await.unwrap().version, 2);
}

pub async fn delete_removes_record(store: &dyn VideoStore) {
    let mut video = casablanca();
    store.insert(&mut video).await.unwrap();

    store.delete(video.id).await.unwrap();
    assert_matches!(store.get(video.id).await, Err(StoreError::RecordNotFound));
    assert_matches!(store.delete(video.id).await, Err(StoreError::RecordNotFound));
}

pub async fn delete_rejects_missing_ids(store: &dyn VideoStore) {
    assert_matches!(store.delete(0).await, Err(StoreError::RecordNotFound));
    assert_matches!(store.delete(-1).await, Err(StoreError::RecordNotFound));
    assert_matches!(store.delete(424_242).await, Err(StoreError::RecordNotFound));
}

pub async fn get_all_empty_is_empty_vec(store: &dyn VideoStore) {
    let (videos, metadata) = store.get_all(&VideoQuery::default()).await.unwrap();
    assert!(videos.is_empty());
    assert_eq!(metadata.total_records, 0);
}

pub async fn get_all_defaults_to_id_order(store: &dyn VideoStore) {
    for title in ["Zelig", "Alien", "Metropolis"] {
        store.insert(&mut video(title, 1980, &["drama"])).await.unwrap();
    }

    let (videos, metadata) = store.get_all(&VideoQuery::default()).await.unwrap();
    let titles: Vec<&str> = videos.iter().map(|v| v.title.as_str()).collect();
    assert_eq!(titles, ["Zelig", "Alien", "Metropolis"]);
    assert_eq!(metadata.total_records, 3);
    assert_eq!(metadata.last_page, 1);
}

pub async fn get_all_filters_and_sorts(store: &dyn VideoStore) {
    store.insert(&mut video("The Black Stallion", 1979, &["adventure", "family"])).await.unwrap();
    store.insert(&mut video("Black Panther", 2018, &["action", "adventure"])).await.unwrap();
    store.insert(&mut video("Moana", 2016, &["animation", "adventure", "family"])).await.unwrap();

    let by_title = VideoQuery {
        title: "black".into(),
        ..VideoQuery::default()
    };
    let (videos, _) = store.get_all(&by_title).await.unwrap();
    assert_eq!(videos.len(), 2);

    let by_genre = VideoQuery {
        genres: vec!["adventure".into(), "family".into()],
        filters: Filters {
            sort: "-year".into(),
            ..Filters::default()
        },
        ..VideoQuery::default()
    };
    let (videos, metadata) = store.get_all(&by_genre).await.unwrap();
    let titles: Vec<&str> = videos.iter().map(|v| v.title.as_str()).collect();
    assert_eq!(titles, ["Moana", "The Black Stallion"]);
    assert_eq!(metadata.total_records, 2);
}

pub async fn get_all_paginates(store: &dyn VideoStore) {
    for i in 0..5 {
        store.insert(&mut video(&format!("Film {i}"), 2000 + i, &["drama"])).await.unwrap();
    }

    let second_page = VideoQuery {
        filters: Filters {
            page: 2,
            page_size: 2,
            ..Filters::default()
        },
        ..VideoQuery::default()
    };
    let (videos, metadata) = store.get_all(&second_page).await.unwrap();
    let titles: Vec<&str> = videos.iter().map(|v| v.title.as_str()).collect();
    assert_eq!(titles, ["Film 2", "Film 3"]);
    assert_eq!(metadata.current_page, 2);
    assert_eq!(metadata.last_page, 3);
    assert_eq!(metadata.total_records, 5);

    let past_end = VideoQuery {
        filters: Filters {
            page: 9,
            page_size: 2,
            ..Filters::default()
        },
        ..VideoQuery::default()
    };
    let (videos, metadata) = store.get_all(&past_end).await.unwrap();
    assert!(videos.is_empty());
    assert_eq!(metadata.total_records, 0);
}

pub async fn get_all_accepts_unbounded_page_size(store: &dyn VideoStore) {
    store.insert(&mut casablanca()).await.unwrap();

    let query = VideoQuery {
        filters: Filters {
            page: 1,
            page_size: i64::MAX,
            ..Filters::default()
        },
        ..VideoQuery::default()
    };
    let (videos, metadata) = store.get_all(&query).await.unwrap();
    assert_eq!(videos.len(), 1);
    assert_eq!(metadata.last_page, 1);
    assert_eq!(metadata.total_records, 1);
}

/// Titles share case and stay within ASCII letters so byte order and the
/// database collation agree.
pub async fn get_all_sorts_by_title(store: &dyn VideoStore) {
    for title in ["Metropolis", "Alien", "Zelig", "Casablanca"] {
        store.insert(&mut video(title, 1980, &["drama"])).await.unwrap();
    }

    let query = VideoQuery {
        filters: Filters {
            sort: "-title".into(),
            ..Filters::default()
        },
        ..VideoQuery::default()
    };
    let (videos, _) = store.get_all(&query).await.unwrap();
    let titles: Vec<&str> = videos.iter().map(|v| v.title.as_str()).collect();
    assert_eq!(titles, ["Zelig", "Metropolis", "Casablanca", "Alien"]);
}
