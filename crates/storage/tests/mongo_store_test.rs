//! Startup behavior of the MongoDB backend.
#![cfg(feature = "mongodb")]

use txscope_storage::{MongoStore, StorageError, StoreConfig};

// Nothing listens on port 1; the short server-selection timeout keeps the
// failed ping from stalling the suite.
#[tokio::test]
async fn test_connect_fails_fast_when_store_unreachable() {
    let config = StoreConfig {
        uri: "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200&connectTimeoutMS=200".into(),
        ..StoreConfig::default()
    };

    let err = match MongoStore::connect(&config).await {
        Ok(_) => panic!("connect must fail without a reachable server"),
        Err(err) => err,
    };
    assert!(matches!(err, StorageError::ConnectionFailed(_)));
}
