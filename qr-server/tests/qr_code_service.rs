//! QrCodeService against an in-memory SurrealDB

mod common;

use qr_server::QrCodeError;
use shared::models::{QrCodeCreate, TableNo};

#[tokio::test]
async fn issue_list_delete_scenario() {
    let service = common::memory_state().await.qr_code_service();

    let a = service.issue(QrCodeCreate::new("R1", "5")).await.unwrap();
    assert_eq!(a.restaurant_id, "R1");
    assert_eq!(a.table_number, "5");
    assert!(a.qr_code_url.starts_with("data:image/png;base64,"));
    assert_eq!(a.created_at, a.updated_at);

    let dup = service.issue(QrCodeCreate::new("R1", "5")).await;
    assert!(matches!(dup, Err(QrCodeError::DuplicateTable)));

    let b = service.issue(QrCodeCreate::new("R1", "6")).await.unwrap();

    let listed = service.list_by_restaurant("R1").await.unwrap();
    assert_eq!(listed, vec![a.clone(), b.clone()]);

    assert_eq!(service.delete(&a.id).await.unwrap(), a.id);
    assert_eq!(service.list_by_restaurant("R1").await.unwrap(), vec![b]);

    let again = service.delete(&a.id).await;
    assert!(matches!(again, Err(QrCodeError::NotFound(_))));
}

#[tokio::test]
async fn zero_is_a_valid_table_number() {
    let service = common::memory_state().await.qr_code_service();

    let numeric = service.issue(QrCodeCreate::new("R1", 0u32)).await.unwrap();
    assert_eq!(numeric.table_number, "0");

    // "0" and 0 name the same table
    let text = service.issue(QrCodeCreate::new("R1", "0")).await;
    assert!(matches!(text, Err(QrCodeError::DuplicateTable)));
}

#[tokio::test]
async fn missing_fields_are_invalid_input() {
    let service = common::memory_state().await.qr_code_service();

    let no_table = QrCodeCreate {
        restaurant_id: Some("R1".to_string()),
        table_no: None,
    };
    assert!(matches!(
        service.issue(no_table).await,
        Err(QrCodeError::InvalidInput(_))
    ));

    let no_restaurant = QrCodeCreate {
        restaurant_id: None,
        table_no: Some(TableNo::from(3u32)),
    };
    assert!(matches!(
        service.issue(no_restaurant).await,
        Err(QrCodeError::InvalidInput(_))
    ));

    let blank_restaurant = QrCodeCreate::new("  ", "3");
    assert!(matches!(
        service.issue(blank_restaurant).await,
        Err(QrCodeError::InvalidInput(_))
    ));

    assert!(service.list_by_restaurant("R1").await.unwrap().is_empty());
}

#[tokio::test]
async fn same_table_in_other_restaurant_is_independent() {
    let service = common::memory_state().await.qr_code_service();

    service.issue(QrCodeCreate::new("R1", "1")).await.unwrap();
    let other = service.issue(QrCodeCreate::new("R2", "1")).await.unwrap();

    let r2 = service.list_by_restaurant("R2").await.unwrap();
    assert_eq!(r2, vec![other]);
    assert!(service.list_by_restaurant("R3").await.unwrap().is_empty());
}

#[tokio::test]
async fn listing_is_ordered_by_table_number() {
    let service = common::memory_state().await.qr_code_service();

    for table in ["10", "Patio", "2", "1", "Bar"] {
        service.issue(QrCodeCreate::new("R1", table)).await.unwrap();
    }

    let tables: Vec<String> = service
        .list_by_restaurant("R1")
        .await
        .unwrap()
        .into_iter()
        .map(|qr| qr.table_number)
        .collect();
    assert_eq!(tables, vec!["1", "2", "10", "Bar", "Patio"]);
}

#[tokio::test]
async fn get_and_image_by_id() {
    let service = common::memory_state().await.qr_code_service();

    let qr = service.issue(QrCodeCreate::new("R1", "A/1")).await.unwrap();
    assert_eq!(service.get(&qr.id).await.unwrap(), qr);

    let png = service.image(&qr.id).await.unwrap();
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));

    assert!(matches!(
        service.get("does-not-exist").await,
        Err(QrCodeError::NotFound(_))
    ));
    assert!(matches!(
        service.image("does-not-exist").await,
        Err(QrCodeError::NotFound(_))
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_issuance_stores_one_record() {
    let service = common::memory_state().await.qr_code_service();

    for round in 0..5 {
        let table = format!("T{}", round);
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let service = service.clone();
                let table = table.clone();
                tokio::spawn(async move { service.issue(QrCodeCreate::new("R1", table.as_str())).await })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => successes += 1,
                Err(QrCodeError::DuplicateTable) => {}
                Err(other) => panic!("losing request must see DuplicateTable, got {other:?}"),
            }
        }
        assert_eq!(successes, 1, "round {round}");
    }

    assert_eq!(service.list_by_restaurant("R1").await.unwrap().len(), 5);
}
