use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    domain::customer::{CreateCustomerParams, CreateInvoiceParams},
    dto::{
        api::ErrorDto,
        customer::{CreateCustomerDto, CreateInvoiceDto, CustomerDto, InvoiceDto},
    },
    error::AppError,
    service::customer::CustomerService,
    state::AppState,
};

/// Tag for grouping customer endpoints in OpenAPI documentation
pub static CUSTOMER_TAG: &str = "customers";

/// Create a new customer.
///
/// Builds a customer document from the request body and inserts it with an
/// empty invoice list. The user name becomes the lookup key for the invoice
/// operations; uniqueness is not enforced for customers.
///
/// # Arguments
/// - `state` - Application state containing the store handle
/// - `payload` - Customer creation data (names and user name)
///
/// # Returns
/// - `200 OK` - The inserted customer document
/// - `400 Bad Request` - Missing or malformed request body
/// - `503 Service Unavailable` - Document store error
#[utoipa::path(
    post,
    path = "/api/customers",
    tag = CUSTOMER_TAG,
    request_body = CreateCustomerDto,
    responses(
        (status = 200, description = "The inserted customer document", body = CustomerDto),
        (status = 400, description = "Missing or malformed request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Document store unavailable", body = ErrorDto)
    ),
)]
pub async fn create_customer(
    State(state): State<AppState>,
    Json(payload): Json<CreateCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CustomerService::new(&state.db);

    let params = CreateCustomerParams::from_dto(payload);
    let customer = service.create(params).await?;

    Ok((StatusCode::OK, Json(CustomerDto::from(customer))))
}

/// Add an invoice to a customer.
///
/// Appends the invoice to the customer located by user name with a single
/// atomic push — concurrent appends both land — and returns the appended
/// invoice.
///
/// # Arguments
/// - `state` - Application state containing the store handle
/// - `user_name` - Customer user name from the request path
/// - `payload` - Invoice data (subtotal, tax, dates, line items)
///
/// # Returns
/// - `200 OK` - The appended invoice
/// - `400 Bad Request` - Missing or malformed request body
/// - `404 Not Found` - No customer with that user name
/// - `503 Service Unavailable` - Document store error
#[utoipa::path(
    post,
    path = "/api/customers/{userName}/invoices",
    tag = CUSTOMER_TAG,
    params(
        ("userName" = String, Path, description = "Customer user name")
    ),
    request_body = CreateInvoiceDto,
    responses(
        (status = 200, description = "The appended invoice", body = InvoiceDto),
        (status = 400, description = "Missing or malformed request body", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Document store unavailable", body = ErrorDto)
    ),
)]
pub async fn create_invoice_by_user_name(
    State(state): State<AppState>,
    Path(user_name): Path<String>,
    Json(payload): Json<CreateInvoiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CustomerService::new(&state.db);

    let params = CreateInvoiceParams::from_dto(user_name, payload);

    match service.add_invoice(params).await? {
        Some(invoice) => Ok((StatusCode::OK, Json(InvoiceDto::from(invoice)))),
        None => Err(AppError::NotFound("Customer not found".to_string())),
    }
}

/// List all invoices for a customer.
///
/// Returns the invoice array of the customer located by user name.
///
/// # Arguments
/// - `state` - Application state containing the store handle
/// - `user_name` - Customer user name from the request path
///
/// # Returns
/// - `200 OK` - Array of the customer's invoices
/// - `404 Not Found` - No customer with that user name
/// - `503 Service Unavailable` - Document store error
#[utoipa::path(
    get,
    path = "/api/customers/{userName}/invoices",
    tag = CUSTOMER_TAG,
    params(
        ("userName" = String, Path, description = "Customer user name")
    ),
    responses(
        (status = 200, description = "Array of the customer's invoices", body = [InvoiceDto]),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Document store unavailable", body = ErrorDto)
    ),
)]
pub async fn find_all_invoices_by_user_name(
    State(state): State<AppState>,
    Path(user_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = CustomerService::new(&state.db);

    match service.invoices(&user_name).await? {
        Some(invoices) => {
            let invoices: Vec<InvoiceDto> = invoices.into_iter().map(InvoiceDto::from).collect();

            Ok((StatusCode::OK, Json(invoices)))
        }
        None => Err(AppError::NotFound("Customer not found".to_string())),
    }
}
