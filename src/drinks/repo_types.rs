use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Ethanol density used for the pure-alcohol estimate, g/ml.
pub const ETHANOL_G_PER_ML: f64 = 0.8;

/// One consumption event. Rows are never updated in place.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DrinkRecord {
    pub id: i64,
    pub user_id: i64,
    pub drink_type: String,
    pub amount_ml: i64,
    pub alcohol_percentage: f64, // fraction, 0.05 == 5%
    pub recorded_at: OffsetDateTime,
    pub created_at: OffsetDateTime,
}

impl DrinkRecord {
    pub fn alcohol_g(&self) -> f64 {
        self.amount_ml as f64 * self.alcohol_percentage * ETHANOL_G_PER_ML
    }
}

/// Aggregates over one user's records for a UTC day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, FromRow)]
pub struct DailyTotals {
    pub alcohol_g: f64,
    pub total_ml: i64,
}
