use document::customer::{Customer, Invoice, LineItem};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LineItemDto {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDto {
    pub subtotal: f64,
    pub tax: f64,
    pub date_created: String,
    pub date_shipped: String,
    pub line_items: Vec<LineItemDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub invoices: Vec<InvoiceDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerDto {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceDto {
    pub subtotal: f64,
    pub tax: f64,
    pub date_created: String,
    pub date_shipped: String,
    pub line_items: Vec<LineItemDto>,
}

impl From<LineItem> for LineItemDto {
    fn from(item: LineItem) -> Self {
        Self {
            name: item.name,
            price: item.price,
            quantity: item.quantity,
        }
    }
}

impl From<Invoice> for InvoiceDto {
    fn from(invoice: Invoice) -> Self {
        Self {
            subtotal: invoice.subtotal,
            tax: invoice.tax,
            date_created: invoice.date_created,
            date_shipped: invoice.date_shipped,
            line_items: invoice
                .line_items
                .into_iter()
                .map(LineItemDto::from)
                .collect(),
        }
    }
}

impl From<Customer> for CustomerDto {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id.to_hex(),
            first_name: customer.first_name,
            last_name: customer.last_name,
            user_name: customer.user_name,
            invoices: customer
                .invoices
                .into_iter()
                .map(InvoiceDto::from)
                .collect(),
        }
    }
}
