use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Name of the collection customer documents are stored in.
pub const COLLECTION: &str = "customers";

/// A single line item on an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

/// An invoice embedded in a customer document.
///
/// Invoices have no identity outside their parent customer. Both dates are
/// stored as opaque strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub subtotal: f64,
    pub tax: f64,
    pub date_created: String,
    pub date_shipped: String,
    pub line_items: Vec<LineItem>,
}

/// A customer document with its embedded invoices.
///
/// `user_name` is the secondary lookup key for the invoice operations.
/// Uniqueness is not enforced for customers; lookups take the first match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub invoices: Vec<Invoice>,
}

impl Customer {
    /// Builds a new customer document with a freshly generated id and an
    /// empty invoice list.
    pub fn new(first_name: String, last_name: String, user_name: String) -> Self {
        Self {
            id: ObjectId::new(),
            first_name,
            last_name,
            user_name,
            invoices: Vec::new(),
        }
    }
}
