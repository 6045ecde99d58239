//! Repository contract checks shared by the in-memory and PostgreSQL stores.

use assert_matches::assert_matches;
use filmoteka::{Store, StoreError};

use super::{actor, film};

pub async fn blank_name_is_rejected_before_storage(store: &dyn Store) {
    assert_matches!(store.films().create(&film("")).await, Err(StoreError::Validation(_)));
    assert_matches!(store.actors().create(&actor("")).await, Err(StoreError::Validation(_)));

    let id = store.films().create(&film("Kept")).await.unwrap();
    let mut blank = film("");
    blank.id = id;
    assert_matches!(store.films().update(&blank).await, Err(StoreError::Validation(_)));
    assert_eq!(store.films().find(id).await.unwrap().name, "Kept");

    assert_eq!(store.films().find_all().await.unwrap().len(), 1);
    assert!(store.actors().find_all().await.unwrap().is_empty());
}

pub async fn find_all_on_empty_is_empty(store: &dyn Store) {
    assert!(store.films().find_all().await.unwrap().is_empty());
    assert!(store.actors().find_all().await.unwrap().is_empty());
}

pub async fn create_then_find_round_trips(store: &dyn Store) {
    let input = film("Solaris");
    let id = store.films().create(&input).await.unwrap();
    let mut expected = input.clone();
    expected.id = id;
    assert_eq!(store.films().find(id).await.unwrap(), expected);

    let input = actor("Natalya");
    let id = store.actors().create(&input).await.unwrap();
    let mut expected = input.clone();
    expected.id = id;
    assert_eq!(store.actors().find(id).await.unwrap(), expected);
}

pub async fn find_all_lists_in_id_order(store: &dyn Store) {
    let a = store.actors().create(&actor("First")).await.unwrap();
    let b = store.actors().create(&actor("Second")).await.unwrap();
    let names: Vec<_> = store
        .actors()
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|row| (row.id, row.name))
        .collect();
    assert_eq!(names, vec![(a, "First".to_string()), (b, "Second".to_string())]);
}

pub async fn missing_ids_are_not_found(store: &dyn Store) {
    assert_matches!(store.films().find(4040).await, Err(StoreError::NotFound));
    assert_matches!(store.actors().find(4040).await, Err(StoreError::NotFound));
    assert_matches!(store.films().delete(4040).await, Err(StoreError::NotFound));

    let mut ghost = actor("Ghost");
    ghost.id = 4040;
    assert_matches!(store.actors().update(&ghost).await, Err(StoreError::NotFound));
}

pub async fn second_delete_is_not_found(store: &dyn Store) {
    let id = store.films().create(&film("Once")).await.unwrap();
    store.films().delete(id).await.unwrap();
    assert_matches!(store.films().delete(id).await, Err(StoreError::NotFound));
    assert_matches!(store.films().find(id).await, Err(StoreError::NotFound));
}

pub async fn update_overwrites_every_field(store: &dyn Store) {
    let id = store.films().create(&film("Before")).await.unwrap();
    let mut changed = film("After");
    changed.id = id;
    changed.description = "new".into();
    changed.release_year = 1972;
    changed.rating = 8.25;
    store.films().update(&changed).await.unwrap();
    assert_eq!(store.films().find(id).await.unwrap(), changed);
}

pub async fn duplicate_film_name_conflicts(store: &dyn Store) {
    let first = store.films().create(&film("Stalker")).await.unwrap();
    assert_matches!(store.films().create(&film("Stalker")).await, Err(StoreError::UniqueConstraint));

    let other = store.films().create(&film("Mirror")).await.unwrap();
    let mut renamed = film("Stalker");
    renamed.id = other;
    assert_matches!(store.films().update(&renamed).await, Err(StoreError::UniqueConstraint));

    // Re-saving a film under its own name is not a conflict.
    let mut same = film("Stalker");
    same.id = first;
    store.films().update(&same).await.unwrap();

    // Actors carry no uniqueness rule.
    store.actors().create(&actor("Twin")).await.unwrap();
    store.actors().create(&actor("Twin")).await.unwrap();
}
