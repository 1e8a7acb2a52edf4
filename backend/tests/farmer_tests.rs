//! Farmer registration and lifecycle tests

use dairysight_backend::services::farmer::{FarmerService, RegisterFarmerInput, UpdateFarmerInput};
use dairysight_backend::store::Stores;
use shared::FarmerStatus;

fn registration(first: &str, last: &str) -> RegisterFarmerInput {
    RegisterFarmerInput {
        first_name: first.to_string(),
        last_name: last.to_string(),
        phone: "0712345678".to_string(),
        email: Some("farmer@example.com".to_string()),
        id_number: "12345678".to_string(),
        farm_name: "Green Valley Farm".to_string(),
        location: "Limuru".to_string(),
        county: "Kiambu".to_string(),
        farm_size: None,
        cattle_count: 4,
        daily_milk_production: None,
        bank_name: "Equity Bank".to_string(),
        account_number: "0123456789".to_string(),
        account_name: "Test Farmer".to_string(),
    }
}

#[tokio::test]
async fn registration_starts_pending_by_default() {
    let stores = Stores::new();
    let service = FarmerService::new(stores);

    let farmer = service
        .register(registration("Jane", "Njeri"))
        .await
        .unwrap();

    assert_eq!(farmer.status, FarmerStatus::Pending);
    assert!(farmer.approval_date.is_none());
    assert_eq!(farmer.total_deliveries, 0);
}

#[tokio::test]
async fn registration_auto_approves_when_enabled() {
    let stores = Stores::new();
    stores.update_settings(|s| s.auto_approval = true).await;
    let service = FarmerService::new(stores);

    let farmer = service
        .register(registration("Jane", "Njeri"))
        .await
        .unwrap();

    assert_eq!(farmer.status, FarmerStatus::Active);
    assert!(farmer.approval_date.is_some());
}

#[tokio::test]
async fn registration_rejects_invalid_phone() {
    let service = FarmerService::new(Stores::new());

    let mut input = registration("Jane", "Njeri");
    input.phone = "12345".to_string();

    let result = service.register(input).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn registration_rejects_unknown_county() {
    let service = FarmerService::new(Stores::new());

    let mut input = registration("Jane", "Njeri");
    input.county = "Nairobi".to_string();

    let result = service.register(input).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn registration_accepts_county_case_insensitively() {
    let service = FarmerService::new(Stores::new());

    let mut input = registration("Jane", "Njeri");
    input.county = "kiambu".to_string();

    assert!(service.register(input).await.is_ok());
}

#[tokio::test]
async fn registration_rejects_blank_name() {
    let service = FarmerService::new(Stores::new());

    let mut input = registration("", "Njeri");
    input.first_name = "   ".to_string();

    let result = service.register(input).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn each_registration_gets_a_distinct_id() {
    let service = FarmerService::new(Stores::new());

    let a = service.register(registration("A", "One")).await.unwrap();
    let b = service.register(registration("B", "Two")).await.unwrap();

    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn approve_moves_pending_to_active_and_stamps_date() {
    let service = FarmerService::new(Stores::new());
    let farmer = service.register(registration("Jane", "Njeri")).await.unwrap();

    let (approved, message) = service.approve(farmer.id).await.unwrap();

    assert_eq!(approved.status, FarmerStatus::Active);
    assert!(approved.approval_date.is_some());
    assert!(message.contains("approved"));
}

#[tokio::test]
async fn approving_twice_succeeds_without_change() {
    let service = FarmerService::new(Stores::new());
    let farmer = service.register(registration("Jane", "Njeri")).await.unwrap();

    let (first, _) = service.approve(farmer.id).await.unwrap();
    let (second, _) = service.approve(farmer.id).await.unwrap();

    assert_eq!(first.status, FarmerStatus::Active);
    assert_eq!(second.status, FarmerStatus::Active);
    assert_eq!(first.approval_date, second.approval_date);
}

#[tokio::test]
async fn rejected_farmer_cannot_be_approved() {
    let service = FarmerService::new(Stores::new());
    let farmer = service.register(registration("Jane", "Njeri")).await.unwrap();

    service.reject(farmer.id).await.unwrap();
    let result = service.approve(farmer.id).await;

    assert!(result.is_err());
    let still = service.get(farmer.id).await.unwrap();
    assert_eq!(still.status, FarmerStatus::Rejected);
}

#[tokio::test]
async fn active_farmer_can_be_suspended_and_reenabled() {
    let service = FarmerService::new(Stores::new());
    let farmer = service.register(registration("Jane", "Njeri")).await.unwrap();
    service.approve(farmer.id).await.unwrap();

    let suspended = service.set_inactive(farmer.id).await.unwrap();
    assert_eq!(suspended.status, FarmerStatus::Inactive);

    let reenabled = service.set_active(farmer.id).await.unwrap();
    assert_eq!(reenabled.status, FarmerStatus::Active);
}

#[tokio::test]
async fn pending_farmer_cannot_be_deactivated() {
    let service = FarmerService::new(Stores::new());
    let farmer = service.register(registration("Jane", "Njeri")).await.unwrap();

    let result = service.set_inactive(farmer.id).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn approving_unknown_farmer_is_not_found() {
    let service = FarmerService::new(Stores::new());

    let result = service.approve(uuid::Uuid::new_v4()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn list_preserves_registration_order_and_filters_by_status() {
    let service = FarmerService::new(Stores::new());
    let a = service.register(registration("A", "One")).await.unwrap();
    let b = service.register(registration("B", "Two")).await.unwrap();
    let c = service.register(registration("C", "Three")).await.unwrap();
    service.approve(b.id).await.unwrap();

    let all = service.list(None, None).await.unwrap();
    assert_eq!(
        all.iter().map(|f| f.id).collect::<Vec<_>>(),
        vec![a.id, b.id, c.id]
    );

    let pending = service.list(Some(FarmerStatus::Pending), None).await.unwrap();
    assert_eq!(
        pending.iter().map(|f| f.id).collect::<Vec<_>>(),
        vec![a.id, c.id]
    );

    let limited = service.list(None, Some(2)).await.unwrap();
    assert_eq!(limited.len(), 2);
}

#[tokio::test]
async fn update_merges_only_supplied_fields() {
    let service = FarmerService::new(Stores::new());
    let farmer = service.register(registration("Jane", "Njeri")).await.unwrap();

    let updated = service
        .update(
            farmer.id,
            UpdateFarmerInput {
                phone: Some("0722000111".to_string()),
                cattle_count: Some(9),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.phone, "0722000111");
    assert_eq!(updated.cattle_count, 9);
    assert_eq!(updated.farm_name, farmer.farm_name);
    assert_eq!(updated.status, farmer.status);
}

#[tokio::test]
async fn update_rejects_unknown_county() {
    let service = FarmerService::new(Stores::new());
    let farmer = service.register(registration("Jane", "Njeri")).await.unwrap();

    let result = service
        .update(
            farmer.id,
            UpdateFarmerInput {
                county: Some("Mombasa".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(result.is_err());
    let unchanged = service.get(farmer.id).await.unwrap();
    assert_eq!(unchanged.county, "Kiambu");
}

#[tokio::test]
async fn update_rejects_malformed_email() {
    let service = FarmerService::new(Stores::new());
    let farmer = service.register(registration("Jane", "Njeri")).await.unwrap();

    let result = service
        .update(
            farmer.id,
            UpdateFarmerInput {
                email: Some("not-an-email".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(result.is_err());
}
