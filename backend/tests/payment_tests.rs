//! Farmer payment and settlement timer tests

use std::time::Duration;

use dairysight_backend::services::farmer::{FarmerService, RegisterFarmerInput};
use dairysight_backend::services::payment::{CreatePaymentInput, PaymentService};
use dairysight_backend::store::Stores;
use rust_decimal::Decimal;
use shared::{PaymentMethod, PaymentStatus, PaymentType};
use uuid::Uuid;

async fn stores_with_farmer() -> (Stores, Uuid) {
    let stores = Stores::new();
    let farmer = FarmerService::new(stores.clone())
        .register(RegisterFarmerInput {
            first_name: "Mary".to_string(),
            last_name: "Wanjiku".to_string(),
            phone: "0722345678".to_string(),
            email: None,
            id_number: "23456789".to_string(),
            farm_name: "Wanjiku Farm".to_string(),
            location: "Githunguri".to_string(),
            county: "Kiambu".to_string(),
            farm_size: None,
            cattle_count: 5,
            daily_milk_production: None,
            bank_name: "KCB".to_string(),
            account_number: "9876543210".to_string(),
            account_name: "Mary Wanjiku".to_string(),
        })
        .await
        .unwrap();
    (stores, farmer.id)
}

fn payment_input(farmer_id: Uuid, amount: i64) -> CreatePaymentInput {
    CreatePaymentInput {
        farmer_id,
        amount: Decimal::from(amount),
        method: PaymentMethod::Bank,
        payment_type: PaymentType::MilkPayment,
        description: None,
    }
}

#[tokio::test]
async fn a_new_payment_starts_processing_with_a_name_snapshot() {
    let (stores, farmer_id) = stores_with_farmer().await;
    let service = PaymentService::new(stores, Duration::from_secs(60));

    let payment = service.create(payment_input(farmer_id, 5_000)).await.unwrap();

    assert_eq!(payment.status, PaymentStatus::Processing);
    assert_eq!(payment.farmer_name, "Mary Wanjiku");
}

#[tokio::test]
async fn a_payment_settles_after_the_delay() {
    let (stores, farmer_id) = stores_with_farmer().await;
    let service = PaymentService::new(stores.clone(), Duration::from_millis(50));

    let payment = service.create(payment_input(farmer_id, 5_000)).await.unwrap();
    assert_eq!(payment.status, PaymentStatus::Processing);

    tokio::time::sleep(Duration::from_millis(200)).await;

    let settled = stores.payments().find(payment.id).await.unwrap();
    assert_eq!(settled.status, PaymentStatus::Completed);
}

#[tokio::test]
async fn cancelling_stops_settlement_for_good() {
    let (stores, farmer_id) = stores_with_farmer().await;
    let service = PaymentService::new(stores.clone(), Duration::from_millis(50));

    let payment = service.create(payment_input(farmer_id, 5_000)).await.unwrap();
    let cancelled = service.cancel(payment.id).await.unwrap();
    assert_eq!(cancelled.status, PaymentStatus::Failed);

    // The aborted timer must never flip the payment afterwards
    tokio::time::sleep(Duration::from_millis(200)).await;
    let still = stores.payments().find(payment.id).await.unwrap();
    assert_eq!(still.status, PaymentStatus::Failed);
}

#[tokio::test]
async fn only_processing_payments_can_be_cancelled() {
    let (stores, farmer_id) = stores_with_farmer().await;
    let service = PaymentService::new(stores, Duration::from_millis(20));

    let payment = service.create(payment_input(farmer_id, 5_000)).await.unwrap();
    tokio::time::sleep(Duration::from_millis(150)).await;

    let result = service.cancel(payment.id).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn cancelling_an_unknown_payment_is_not_found() {
    let (stores, _) = stores_with_farmer().await;
    let service = PaymentService::new(stores, Duration::from_secs(60));

    let result = service.cancel(Uuid::new_v4()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn a_payment_for_an_unknown_farmer_is_rejected() {
    let (stores, _) = stores_with_farmer().await;
    let service = PaymentService::new(stores.clone(), Duration::from_secs(60));

    let result = service.create(payment_input(Uuid::new_v4(), 5_000)).await;
    assert!(result.is_err());
    assert!(stores.payments().is_empty().await);
}

#[tokio::test]
async fn non_positive_amounts_are_rejected() {
    let (stores, farmer_id) = stores_with_farmer().await;
    let service = PaymentService::new(stores, Duration::from_secs(60));

    assert!(service.create(payment_input(farmer_id, 0)).await.is_err());
    assert!(service.create(payment_input(farmer_id, -100)).await.is_err());
}

#[tokio::test]
async fn payments_list_newest_first() {
    let (stores, farmer_id) = stores_with_farmer().await;
    let service = PaymentService::new(stores, Duration::from_secs(60));

    let first = service.create(payment_input(farmer_id, 1_000)).await.unwrap();
    let second = service.create(payment_input(farmer_id, 2_000)).await.unwrap();

    let listed = service.list(None).await.unwrap();
    assert_eq!(
        listed.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![second.id, first.id]
    );
}
