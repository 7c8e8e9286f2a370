//! PostgreSQL repository tests
//!
//! These need `DATABASE_URL` to point at a disposable database; migrations are
//! applied on first use.

use common::{
    database::{DatabaseConfig, init_pool, run_migrations},
    error::StoreError,
};
use reserva_api::{
    models::{BookingStatus, ListingPayload, NewBooking, NewUser, UserRole},
    repositories::{MIGRATOR, Storage},
};
use uuid::Uuid;

async fn storage() -> Result<Storage, Box<dyn std::error::Error>> {
    let config = DatabaseConfig::from_env()?;
    let pool = init_pool(&config).await?;
    run_migrations(&pool, &MIGRATOR).await?;
    Ok(Storage::postgres(pool))
}

fn unique_phone() -> String {
    Uuid::new_v4().simple().to_string()
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_duplicate_phone_is_a_conflict() -> Result<(), Box<dyn std::error::Error>> {
    let storage = storage().await?;
    let phone = unique_phone();
    let new_user = NewUser {
        name: "Asha".to_string(),
        phone: phone.clone(),
        password_hash: "hash".to_string(),
        role: UserRole::User,
    };

    storage.users.create(new_user.clone()).await?;
    let err = storage.users.create(new_user).await.unwrap_err();
    assert!(matches!(err, StoreError::Conflict(_)));

    let found = storage.users.find_by_phone(&phone).await?;
    assert_eq!(found.map(|u| u.name), Some("Asha".to_string()));

    Ok(())
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_listing_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let storage = storage().await?;
    let payload = ListingPayload {
        listing_type: Some("hall".to_string()),
        name: Some(format!("Hall {}", Uuid::new_v4())),
        price: Some(100.0),
        contact: Some("c".to_string()),
        map: Some("m".to_string()),
        features: Some("f".to_string()),
    };

    let listing = storage.listings.create(payload.clone()).await?;
    let all = storage.listings.get_all().await?;
    assert!(all.contains(&listing));

    assert!(!storage.listings.delete(Uuid::new_v4()).await?);
    assert!(storage.listings.delete(listing.id).await?);
    assert!(!storage.listings.get_all().await?.contains(&listing));

    Ok(())
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_booking_status_update() -> Result<(), Box<dyn std::error::Error>> {
    let storage = storage().await?;
    let id = storage
        .bookings
        .create(NewBooking {
            user_id: Some(Uuid::new_v4()),
            vendor_name: Some("Grand Hall".to_string()),
            ..Default::default()
        })
        .await?;

    let before = storage.bookings.get_all().await?;
    let created = before.iter().find(|b| b.id == id).expect("booking listed");
    assert_eq!(created.status, BookingStatus::Pending);
    assert!(created.requester.is_none());

    assert!(storage.bookings.update_status(id, BookingStatus::Accepted).await?);

    let after = storage.bookings.get_all().await?;
    let updated = after.iter().find(|b| b.id == id).expect("booking listed");
    assert_eq!(updated.status, BookingStatus::Accepted);
    assert_eq!(updated.created_at, created.created_at);

    Ok(())
}
