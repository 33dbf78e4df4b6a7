use document::customer::{Customer, Invoice, LineItem};

use crate::dto::customer::{CreateCustomerDto, CreateInvoiceDto};

/// Parameters for creating a customer.
///
/// New customers always start with an empty invoice list; invoices only
/// enter the system through the append operation.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCustomerParams {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
}

impl CreateCustomerParams {
    /// Converts the request DTO into creation parameters.
    pub fn from_dto(dto: CreateCustomerDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            user_name: dto.user_name,
        }
    }

    /// Builds the document to insert.
    pub fn into_document(self) -> Customer {
        Customer::new(self.first_name, self.last_name, self.user_name)
    }
}

/// Parameters for appending an invoice to a customer located by user name.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateInvoiceParams {
    pub user_name: String,
    pub subtotal: f64,
    pub tax: f64,
    pub date_created: String,
    pub date_shipped: String,
    pub line_items: Vec<LineItem>,
}

impl CreateInvoiceParams {
    /// Converts the path user name and request DTO into append parameters.
    pub fn from_dto(user_name: String, dto: CreateInvoiceDto) -> Self {
        Self {
            user_name,
            subtotal: dto.subtotal,
            tax: dto.tax,
            date_created: dto.date_created,
            date_shipped: dto.date_shipped,
            line_items: dto
                .line_items
                .into_iter()
                .map(|item| LineItem {
                    name: item.name,
                    price: item.price,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }

    /// Builds the embedded invoice to push onto the customer.
    pub fn into_invoice(self) -> Invoice {
        Invoice {
            subtotal: self.subtotal,
            tax: self.tax,
            date_created: self.date_created,
            date_shipped: self.date_shipped,
            line_items: self.line_items,
        }
    }
}
