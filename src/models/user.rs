//! User model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use crate::database::schema::{Table, TableDef};

/// A Telegram user known to the bot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub telegram_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_admin: Option<bool>,
    pub phone_number: Option<String>,
}

impl Table for User {
    const TABLE: TableDef = TableDef {
        name: "users",
        ddl: r#"
            CREATE TABLE IF NOT EXISTS users (
                id SERIAL PRIMARY KEY,
                telegram_id BIGINT NOT NULL UNIQUE,
                username VARCHAR,
                first_name VARCHAR,
                last_name VARCHAR,
                is_admin BOOLEAN DEFAULT FALSE,
                phone_number VARCHAR
            )
            "#,
    };
}
