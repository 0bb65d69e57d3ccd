use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Price, ProductId, Screen};

/// Acknowledgment handed back when an order is placed.
///
/// Nothing is stored anywhere; the reference only exists so the success
/// message has something to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub reference: Uuid,
    pub placed_at: DateTime<Utc>,
    pub item_count: u64,
    pub total: Price,
}

impl OrderConfirmation {
    pub fn new(item_count: u64, total: Price) -> Self {
        Self {
            reference: Uuid::new_v4(),
            placed_at: Utc::now(),
            item_count,
            total,
        }
    }

    /// First block of the reference, for compact display
    pub fn short_reference(&self) -> String {
        self.reference.simple().to_string()[..8].to_string()
    }
}

/// Observable state transitions of a storefront session, in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    LoadStarted,
    Loaded { products: usize },
    LoadFailed { message: String },
    ScreenEntered { screen: Screen },
    AddedToCart {
        product_id: ProductId,
        title: String,
        quantity: u32,
    },
    CartChanged { total_count: u64 },
    EmptyCartWarning,
    OrderPlaced { confirmation: OrderConfirmation },
}

impl SessionEvent {
    /// Events that must reach the user as a visible message
    pub fn is_user_signal(&self) -> bool {
        matches!(
            self,
            SessionEvent::LoadStarted
                | SessionEvent::LoadFailed { .. }
                | SessionEvent::AddedToCart { .. }
                | SessionEvent::EmptyCartWarning
                | SessionEvent::OrderPlaced { .. }
        )
    }
}
