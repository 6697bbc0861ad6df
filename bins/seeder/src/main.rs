//! Database seeder for Tokenflow development and testing.
//!
//! Seeds two demo users with wallets and credits the seller with one
//! completed sale so the frontend demo has balances to play with.
//!
//! Usage: cargo run --bin seeder

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use tokenflow_core::auth::hash_password;
use tokenflow_db::WalletRepository;
use tokenflow_db::entities::{users, wallets};

/// Demo buyer ID (consistent for all seeds)
const DEMO_BUYER_ID: &str = "00000000-0000-0000-0000-000000000001";
/// Demo seller ID (consistent for all seeds)
const DEMO_SELLER_ID: &str = "00000000-0000-0000-0000-000000000002";
/// Password shared by the demo accounts.
const DEMO_PASSWORD: &str = "demo-password";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = tokenflow_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding demo buyer...");
    seed_user(&db, demo_buyer_id(), "buyer@tokenflow.dev").await;

    println!("Seeding demo seller...");
    seed_user(&db, demo_seller_id(), "seller@tokenflow.dev").await;

    println!("Seeding a completed sale for the seller...");
    seed_sale_credit(&db).await;

    println!("Seeding complete!");
}

fn demo_buyer_id() -> Uuid {
    Uuid::parse_str(DEMO_BUYER_ID).unwrap()
}

fn demo_seller_id() -> Uuid {
    Uuid::parse_str(DEMO_SELLER_ID).unwrap()
}

/// Seeds a user with a zero-balance wallet, skipping if already present.
async fn seed_user(db: &DatabaseConnection, user_id: Uuid, email: &str) {
    if users::Entity::find_by_id(user_id)
        .one(db)
        .await
        .ok()
        .flatten()
        .is_some()
    {
        println!("  User {email} already exists, skipping...");
        return;
    }

    let password_hash = hash_password(DEMO_PASSWORD).expect("Failed to hash demo password");
    let now = Utc::now().into();

    let user = users::ActiveModel {
        id: Set(user_id),
        email: Set(email.to_string()),
        password_hash: Set(password_hash),
        created_at: Set(now),
        updated_at: Set(now),
    };

    if let Err(e) = user.insert(db).await {
        eprintln!("Failed to insert user {email}: {e}");
        return;
    }

    let wallet = wallets::ActiveModel {
        user_id: Set(user_id),
        token_balance: Set(0),
        fiat_balance: Set(Decimal::ZERO),
        created_at: Set(now),
        updated_at: Set(now),
    };

    if let Err(e) = wallet.insert(db).await {
        eprintln!("Failed to insert wallet for {email}: {e}");
    } else {
        println!("  Created user {email} (password: {DEMO_PASSWORD})");
    }
}

/// Credits the demo seller with the outcome of one 100.00 sale at the
/// default 5% fee, unless the wallet already has history.
async fn seed_sale_credit(db: &DatabaseConnection) {
    let repo = WalletRepository::new(db.clone());
    let seller_id = demo_seller_id();

    match repo.ledger_count(seller_id).await {
        Ok(0) => {}
        Ok(_) => {
            println!("  Seller wallet already has ledger entries, skipping...");
            return;
        }
        Err(e) => {
            eprintln!("Failed to inspect seller ledger: {e}");
            return;
        }
    }

    match repo
        .credit_sale(seller_id, 95, Decimal::new(9500, 2))
        .await
    {
        Ok(outcome) => println!(
            "  Credited seller with {} tokens (balance {})",
            outcome.entry.amount, outcome.new_balance
        ),
        Err(e) => eprintln!("Failed to credit seller: {e}"),
    }
}
