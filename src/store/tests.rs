use super::*;

fn doc(title: &str, embedding: Option<Vec<f32>>) -> NewDocument {
    NewDocument {
        title: title.to_string(),
        body: format!("{title} body"),
        url: Some(format!("/{title}")),
        embedding,
        metadata: serde_json::json!({ "type": "test" }),
    }
}

#[tokio::test]
async fn insert_and_count() {
    let store = DocumentStore::in_memory(3).await.expect("open store");

    let id = store
        .insert(&doc("first", Some(vec![1.0, 0.0, 0.0])))
        .await
        .expect("insert document");
    assert_eq!(id, 1);

    let id = store
        .insert(&doc("second", Some(vec![0.0, 1.0, 0.0])))
        .await
        .expect("insert document");
    assert_eq!(id, 2);

    assert_eq!(store.count().await.expect("count"), 2);

    let fetched = store.get(1).await.expect("get").expect("document exists");
    assert_eq!(fetched.title, "first");
    assert_eq!(fetched.embedding, Some(vec![1.0, 0.0, 0.0]));
    assert_eq!(fetched.metadata["type"], "test");
}

#[tokio::test]
async fn search_orders_by_descending_similarity() {
    let store = DocumentStore::in_memory(3).await.expect("open store");

    store
        .insert(&doc("orthogonal", Some(vec![0.0, 1.0, 0.0])))
        .await
        .expect("insert");
    store
        .insert(&doc("aligned", Some(vec![2.0, 0.0, 0.0])))
        .await
        .expect("insert");
    store
        .insert(&doc("opposite", Some(vec![-1.0, 0.0, 0.0])))
        .await
        .expect("insert");

    let results = store
        .search(&[1.0, 0.0, 0.0], 10)
        .await
        .expect("search");

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].document.title, "aligned");
    assert_eq!(results[1].document.title, "orthogonal");
    assert_eq!(results[2].document.title, "opposite");
    assert!((results[0].similarity - 1.0).abs() < 1e-6);
    assert!((results[1].similarity - 0.5).abs() < 1e-6);
    assert!(results[2].similarity.abs() < 1e-6);
    for pair in results.windows(2) {
        assert!(pair[0].similarity >= pair[1].similarity);
    }
}

#[tokio::test]
async fn search_respects_limit_and_small_stores() {
    let store = DocumentStore::in_memory(2).await.expect("open store");

    for i in 0..4 {
        store
            .insert(&doc(&format!("doc{i}"), Some(vec![1.0, i as f32])))
            .await
            .expect("insert");
    }

    let results = store.search(&[1.0, 0.0], 2).await.expect("search");
    assert_eq!(results.len(), 2);

    // Fewer documents than the limit: all of them come back.
    let results = store.search(&[1.0, 0.0], 100).await.expect("search");
    assert_eq!(results.len(), 4);
}

#[tokio::test]
async fn equal_similarity_ties_keep_insertion_order() {
    let store = DocumentStore::in_memory(2).await.expect("open store");

    // Parallel vectors: identical cosine similarity to any query.
    store
        .insert(&doc("earliest", Some(vec![1.0, 1.0])))
        .await
        .expect("insert");
    store
        .insert(&doc("middle", Some(vec![2.0, 2.0])))
        .await
        .expect("insert");
    store
        .insert(&doc("latest", Some(vec![3.0, 3.0])))
        .await
        .expect("insert");

    let results = store.search(&[1.0, 0.0], 3).await.expect("search");
    let titles: Vec<&str> = results.iter().map(|r| r.document.title.as_str()).collect();
    assert_eq!(titles, ["earliest", "middle", "latest"]);
}

#[tokio::test]
async fn unembedded_documents_are_invisible_to_search() {
    let store = DocumentStore::in_memory(2).await.expect("open store");

    store
        .insert(&doc("pending", None))
        .await
        .expect("insert unembedded");
    store
        .insert(&doc("indexed", Some(vec![1.0, 0.0])))
        .await
        .expect("insert");

    let results = store.search(&[1.0, 0.0], 10).await.expect("search");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].document.title, "indexed");

    // But they still count as stored documents.
    assert_eq!(store.count().await.expect("count"), 2);
}

#[tokio::test]
async fn empty_store_returns_empty_results() {
    let store = DocumentStore::in_memory(4).await.expect("open store");

    let results = store
        .search(&[1.0, 0.0, 0.0, 0.0], 5)
        .await
        .expect("search");
    assert!(results.is_empty());
}

#[tokio::test]
async fn dimension_mismatch_is_a_hard_error() {
    let store = DocumentStore::in_memory(3).await.expect("open store");

    let result = store.insert(&doc("short", Some(vec![1.0, 0.0]))).await;
    assert!(matches!(result, Err(LeadchatError::Store(_))));

    let result = store.search(&[1.0, 0.0], 5).await;
    assert!(matches!(result, Err(LeadchatError::Store(_))));
}

#[test]
fn rescaled_similarity_bounds() {
    assert!((rescaled_cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-6);
    assert!((rescaled_cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]) - 0.5).abs() < 1e-6);
    assert!(rescaled_cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]).abs() < 1e-6);
}

#[test]
fn zero_norm_vectors_have_zero_similarity() {
    assert_eq!(rescaled_cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
    assert_eq!(rescaled_cosine_similarity(&[1.0, 0.0], &[0.0, 0.0]), 0.0);
}

#[test]
fn rescaled_similarity_is_scale_invariant() {
    let a = [0.3, -0.7, 0.2];
    let b = [0.6, -1.4, 0.4];
    assert!((rescaled_cosine_similarity(&a, &b) - 1.0).abs() < 1e-6);
}
