//! Demo data set
//!
//! The same rows the dashboards fall back to when the backend is
//! unreachable, loaded at startup when `data.seed_demo_data` is set so a
//! fresh process is immediately usable.

use anyhow::Context;
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use shared::pricing::{self, DEFAULT_COMMISSION_RATE};
use shared::{
    Employee, EmployeeRole, EmployeeStatus, Farmer, FarmerStatus, Grade, MilkIntake, MilkOfftake,
    OfftakeMethod, OfftakeStatus, OfftakeType, Payment, PaymentMethod, PaymentStatus, PaymentType,
    UserAccount, UserRole,
};

use super::Stores;

impl Stores {
    /// Stores populated with the demo cooperative data set
    pub async fn seeded() -> anyhow::Result<Self> {
        let stores = Stores::new();
        let today = Utc::now().date_naive();
        let now = Utc::now();

        let farmers = vec![
            demo_farmer(
                "John", "Kamau", "+254712345678", "12345678", "Kamau Dairy Farm", "Kiambu",
                15, 80, "KCB Bank", "1234567890", today - Duration::days(35), 45,
            ),
            demo_farmer(
                "Mary", "Wanjiku", "+254723456789", "23456789", "Wanjiku Dairy", "Nyeri",
                10, 60, "Equity Bank", "2345678901", today - Duration::days(40), 38,
            ),
            demo_farmer(
                "Peter", "Mwangi", "+254734567890", "34567890", "Mwangi Farm", "Murang'a",
                20, 120, "Co-operative Bank", "3456789012", today - Duration::days(45), 52,
            ),
        ];

        let mary_id = farmers[1].id;
        let peter_id = farmers[2].id;

        for intake in [
            demo_intake(&farmers[0], Decimal::new(255, 1), Grade::A, now),
            demo_intake(&farmers[1], Decimal::new(182, 1), Grade::B, now - Duration::minutes(30)),
        ] {
            stores.intakes().insert_front(intake).await;
        }

        for farmer in farmers {
            stores.farmers().insert_back(farmer).await;
        }

        for (buyer, volume, minutes_ago, offtake_type, method) in [
            ("KCC", 150u32, 0i64, OfftakeType::Automatic, OfftakeMethod::Bank),
            ("Brookside", 200, 5, OfftakeType::Automatic, OfftakeMethod::Bank),
            ("New KCC", 120, 10, OfftakeType::Manual, OfftakeMethod::Mpesa),
        ] {
            let volume = Decimal::from(volume);
            let price = Decimal::from(52);
            let total = volume * price;
            stores
                .offtakes()
                .insert_back(MilkOfftake {
                    id: Uuid::new_v4(),
                    buyer: buyer.to_string(),
                    volume,
                    price_per_liter: price,
                    total_amount: total,
                    commission: pricing::commission(total, DEFAULT_COMMISSION_RATE),
                    net_amount: pricing::net_revenue(total, DEFAULT_COMMISSION_RATE),
                    status: OfftakeStatus::Completed,
                    offtake_type,
                    payment_method: method,
                    recorded_at: now - Duration::minutes(minutes_ago),
                })
                .await;
        }

        stores
            .payments()
            .insert_back(Payment {
                id: Uuid::new_v4(),
                farmer_id: mary_id,
                farmer_name: "Mary Wanjiku".to_string(),
                amount: Decimal::from(2750),
                status: PaymentStatus::Completed,
                method: PaymentMethod::Bank,
                payment_type: PaymentType::MilkPayment,
                description: Some("Payment for 55L Grade A milk".to_string()),
                date: today,
                recorded_at: now,
            })
            .await;
        stores
            .payments()
            .insert_back(Payment {
                id: Uuid::new_v4(),
                farmer_id: peter_id,
                farmer_name: "Peter Mwangi".to_string(),
                amount: Decimal::from(3200),
                status: PaymentStatus::Completed,
                method: PaymentMethod::Cash,
                payment_type: PaymentType::Bonus,
                description: Some("Quality bonus for consistent Grade A deliveries".to_string()),
                date: today - Duration::days(1),
                recorded_at: now - Duration::days(1),
            })
            .await;

        for (name, email, role, permissions) in [
            (
                "James Ochieng",
                "james@cooperative.com",
                EmployeeRole::Manager,
                vec!["manage_farmers", "approve_payments", "view_reports"],
            ),
            (
                "Alice Muthoni",
                "alice@cooperative.com",
                EmployeeRole::Operator,
                vec!["record_intake", "view_farmers"],
            ),
            (
                "David Kiprop",
                "david@cooperative.com",
                EmployeeRole::QualityController,
                vec!["quality_testing", "reject_milk"],
            ),
            (
                "Sarah Wanjiru",
                "sarah@cooperative.com",
                EmployeeRole::Accountant,
                vec!["manage_payments", "view_financials", "generate_reports"],
            ),
        ] {
            stores
                .employees()
                .insert_back(Employee {
                    id: Uuid::new_v4(),
                    name: name.to_string(),
                    email: email.to_string(),
                    phone: "+254700123456".to_string(),
                    role,
                    status: EmployeeStatus::Active,
                    permissions: permissions.into_iter().map(String::from).collect(),
                    join_date: today - Duration::days(200),
                    last_login: Some(now - Duration::hours(2)),
                })
                .await;
        }

        for (email, password, name, role) in [
            ("admin@dairy.com", "admin123", "Super Admin", UserRole::Admin),
            ("employee@dairy.com", "emp123", "James Ochieng", UserRole::Employee),
        ] {
            let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
                .context("hashing demo account password")?;
            stores
                .add_user(UserAccount {
                    email: email.to_string(),
                    password_hash,
                    name: name.to_string(),
                    role,
                })
                .await;
        }

        Ok(stores)
    }
}

#[allow(clippy::too_many_arguments)]
fn demo_farmer(
    first_name: &str,
    last_name: &str,
    phone: &str,
    id_number: &str,
    farm_name: &str,
    county: &str,
    cattle_count: u32,
    daily_production: u32,
    bank_name: &str,
    account_number: &str,
    registration_date: chrono::NaiveDate,
    total_deliveries: u64,
) -> Farmer {
    Farmer {
        id: Uuid::new_v4(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        phone: phone.to_string(),
        email: Some(format!(
            "{}.{}@email.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        )),
        id_number: id_number.to_string(),
        farm_name: farm_name.to_string(),
        location: county.to_string(),
        county: county.to_string(),
        farm_size: Some(Decimal::from(5)),
        cattle_count,
        daily_milk_production: Some(Decimal::from(daily_production)),
        bank_name: bank_name.to_string(),
        account_number: account_number.to_string(),
        account_name: format!("{} {}", first_name, last_name),
        status: FarmerStatus::Active,
        registration_date,
        approval_date: Some(registration_date + Duration::days(1)),
        total_deliveries,
        last_delivery: Some(registration_date + Duration::days(30)),
    }
}

fn demo_intake(farmer: &Farmer, quantity: Decimal, grade: Grade, at: chrono::DateTime<Utc>) -> MilkIntake {
    let price = shared::pricing::price_for_grade(grade);
    MilkIntake {
        id: Uuid::new_v4(),
        farmer_id: farmer.id,
        farmer_name: farmer.full_name(),
        quantity,
        quality: grade,
        price_per_liter: price,
        total_price: quantity * price,
        date: at.date_naive(),
        time: at.time(),
        recorded_at: at,
    }
}
