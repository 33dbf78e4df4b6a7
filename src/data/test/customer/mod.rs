use document::customer::{Customer, Invoice, LineItem};
use mongodb::error::Error;
use test_utils::{context::TestContext, factory};

use crate::data::customer::CustomerRepository;

mod create;
mod push_invoice;

fn sample_invoice() -> Invoice {
    Invoice {
        subtotal: 59.97,
        tax: 4.35,
        date_created: "2022-12-01".to_string(),
        date_shipped: "2022-12-05".to_string(),
        line_items: vec![
            LineItem {
                name: "Coffee".to_string(),
                price: 9.99,
                quantity: 3,
            },
            LineItem {
                name: "Grinder".to_string(),
                price: 29.99,
                quantity: 1,
            },
        ],
    }
}
