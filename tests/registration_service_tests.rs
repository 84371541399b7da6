use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rsvp_backend::{
    Cell, GuestEntry, GuestRegistration, GuestUpdate, InMemoryStore, RegistrationService, Row,
    ServiceError, StoreError, TabularStore,
};

fn registration() -> GuestRegistration {
    GuestRegistration {
        first_name: "jean".to_string(),
        last_name: "dupont".to_string(),
        meal: "Normal".to_string(),
        will_attend: true,
        number_of_guests: Some(2),
        guest_list: vec![GuestEntry {
            first_name: "marie".to_string(),
            last_name: "dupont".to_string(),
            meal: "Végétarien".to_string(),
            will_attend: true,
        }],
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Append { range: String, rows: Vec<Row> },
    Update { range: String, rows: Vec<Row> },
    Get { range: String },
}

/// Store double that records every call and serves a fixed snapshot.
struct RecordingStore {
    calls: Mutex<Vec<Call>>,
    snapshot: Vec<Row>,
}

impl RecordingStore {
    fn new(snapshot: Vec<Row>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            snapshot,
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TabularStore for RecordingStore {
    async fn append(&self, range: &str, rows: &[Row]) -> Result<(), StoreError> {
        self.calls.lock().unwrap().push(Call::Append {
            range: range.to_string(),
            rows: rows.to_vec(),
        });
        Ok(())
    }

    async fn update(&self, range: &str, rows: &[Row]) -> Result<(), StoreError> {
        self.calls.lock().unwrap().push(Call::Update {
            range: range.to_string(),
            rows: rows.to_vec(),
        });
        Ok(())
    }

    async fn get(&self, range: &str) -> Result<Vec<Row>, StoreError> {
        self.calls.lock().unwrap().push(Call::Get {
            range: range.to_string(),
        });
        Ok(self.snapshot.clone())
    }
}

/// Store double whose every call fails.
struct FailingStore;

#[async_trait]
impl TabularStore for FailingStore {
    async fn append(&self, _range: &str, _rows: &[Row]) -> Result<(), StoreError> {
        Err(StoreError::Api {
            status: 503,
            message: "quota exceeded".to_string(),
        })
    }

    async fn update(&self, _range: &str, _rows: &[Row]) -> Result<(), StoreError> {
        Err(StoreError::Api {
            status: 503,
            message: "quota exceeded".to_string(),
        })
    }

    async fn get(&self, _range: &str) -> Result<Vec<Row>, StoreError> {
        Err(StoreError::Api {
            status: 503,
            message: "quota exceeded".to_string(),
        })
    }
}

#[tokio::test]
async fn create_appends_primary_then_guest_rows() {
    let store = Arc::new(RecordingStore::new(Vec::new()));
    let service = RegistrationService::new(store.clone());

    service.create_registration(&registration()).await.unwrap();

    assert_eq!(
        store.calls(),
        vec![Call::Append {
            range: "A:D".to_string(),
            rows: vec![
                vec![
                    Cell::from("jean DUPONT"),
                    Cell::from("Normal"),
                    Cell::from("Oui"),
                    Cell::from(2),
                ],
                vec![
                    Cell::from("marie DUPONT"),
                    Cell::from("Végétarien"),
                    Cell::from("Oui"),
                ],
            ],
        }]
    );
}

#[tokio::test]
async fn create_with_omitted_guest_count_persists_one() {
    let store = Arc::new(InMemoryStore::new());
    let service = RegistrationService::new(store.clone());

    let mut reg = registration();
    reg.number_of_guests = None;
    reg.guest_list.clear();
    service.create_registration(&reg).await.unwrap();

    let rows = store.rows().await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][3], Cell::from(1));
}

#[tokio::test]
async fn invalid_registration_never_reaches_the_store() {
    let store = Arc::new(RecordingStore::new(Vec::new()));
    let service = RegistrationService::new(store.clone());

    let mut reg = registration();
    reg.guest_list[0].last_name = "   ".to_string();

    let err = service.create_registration(&reg).await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn update_reads_then_writes_the_same_row_band() {
    let snapshot = vec![vec![
        Cell::from("Jane DOE"),
        Cell::from("Normal"),
        Cell::from("Oui"),
        Cell::from(2),
    ]];
    let store = Arc::new(RecordingStore::new(snapshot));
    let service = RegistrationService::new(store.clone());

    let update = GuestUpdate {
        meal: Some("Sans gluten".to_string()),
        ..GuestUpdate::default()
    };
    service.update_registration(5, &update).await.unwrap();

    assert_eq!(
        store.calls(),
        vec![
            Call::Get {
                range: "A5:D5".to_string(),
            },
            Call::Update {
                range: "A5:D5".to_string(),
                rows: vec![vec![
                    Cell::from("Jane DOE"),
                    Cell::from("Sans gluten"),
                    Cell::from("Oui"),
                    Cell::from(2),
                ]],
            },
        ]
    );
}

#[tokio::test]
async fn update_against_missing_row_defaults_every_field() {
    let store = Arc::new(InMemoryStore::new());
    let service = RegistrationService::new(store.clone());

    let update = GuestUpdate {
        first_name: Some("Paul".to_string()),
        ..GuestUpdate::default()
    };
    service.update_registration(3, &update).await.unwrap();

    let rows = store.rows().await;
    assert_eq!(
        rows[2],
        vec![
            Cell::from("Paul "),
            Cell::from(""),
            Cell::from(""),
            Cell::from(1),
        ]
    );
}

#[tokio::test]
async fn update_through_memory_store_round_trips() {
    let store = Arc::new(InMemoryStore::new());
    let service = RegistrationService::new(store.clone());

    service.create_registration(&registration()).await.unwrap();

    let update = GuestUpdate {
        will_attend: Some(false),
        number_of_guests: Some(1),
        ..GuestUpdate::default()
    };
    service.update_registration(1, &update).await.unwrap();

    let rows = service.list_registrations().await.unwrap();
    assert_eq!(
        rows[0],
        vec![
            Cell::from("jean DUPONT"),
            Cell::from("Normal"),
            Cell::from("Non"),
            Cell::from(1),
        ]
    );
}

#[tokio::test]
async fn list_returns_empty_vec_when_store_has_no_data() {
    let service = RegistrationService::new(Arc::new(InMemoryStore::new()));
    assert_eq!(service.list_registrations().await.unwrap(), Vec::<Row>::new());
}

#[tokio::test]
async fn store_failures_surface_on_every_path() {
    let service = RegistrationService::new(Arc::new(FailingStore));

    let err = service.create_registration(&registration()).await.unwrap_err();
    assert!(matches!(err, ServiceError::Store(_)));

    let err = service
        .update_registration(1, &GuestUpdate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Store(_)));

    let err = service.list_registrations().await.unwrap_err();
    assert!(matches!(err, ServiceError::Store(_)));
}
