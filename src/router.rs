use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{composer, customer, person, session, team},
    dto,
    state::AppState,
};

/// OpenAPI document assembled from the annotated handlers.
///
/// Served by the Swagger UI mounted at `/api-docs`, so the interactive
/// documentation always matches the routing table below.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ensemble RESTful APIs",
        description = "REST endpoints for composers, persons, teams, customers, and users",
    ),
    paths(
        composer::find_all_composers,
        composer::find_composer_by_id,
        composer::create_composer,
        composer::update_composer_by_id,
        composer::delete_composer_by_id,
        person::find_all_persons,
        person::create_person,
        team::create_team,
        team::find_all_teams,
        team::assign_player_to_team,
        team::find_all_players_by_team_id,
        team::delete_team_by_id,
        customer::create_customer,
        customer::create_invoice_by_user_name,
        customer::find_all_invoices_by_user_name,
        session::signup,
        session::login,
    ),
    components(schemas(
        dto::api::ErrorDto,
        dto::composer::ComposerDto,
        dto::composer::CreateComposerDto,
        dto::composer::UpdateComposerDto,
        dto::person::PersonDto,
        dto::person::CreatePersonDto,
        dto::person::RoleDto,
        dto::person::DependentDto,
        dto::team::TeamDto,
        dto::team::CreateTeamDto,
        dto::team::PlayerDto,
        dto::team::CreatePlayerDto,
        dto::customer::CustomerDto,
        dto::customer::CreateCustomerDto,
        dto::customer::InvoiceDto,
        dto::customer::CreateInvoiceDto,
        dto::customer::LineItemDto,
        dto::user::UserDto,
        dto::user::SignupDto,
        dto::user::LoginDto,
    )),
    tags(
        (name = "composers", description = "Composer documents"),
        (name = "persons", description = "Person documents with roles and dependents"),
        (name = "teams", description = "Team documents and their rosters"),
        (name = "customers", description = "Customer documents and their invoices"),
        (name = "session", description = "User registration and login"),
    )
)]
pub struct ApiDoc;

async fn welcome() -> &'static str {
    "Welcome to the Ensemble RESTful APIs"
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route(
            "/api/composers",
            get(composer::find_all_composers).post(composer::create_composer),
        )
        .route(
            "/api/composers/{id}",
            get(composer::find_composer_by_id)
                .put(composer::update_composer_by_id)
                .delete(composer::delete_composer_by_id),
        )
        .route(
            "/api/persons",
            get(person::find_all_persons).post(person::create_person),
        )
        .route("/api/teams", get(team::find_all_teams).post(team::create_team))
        .route("/api/teams/{id}", delete(team::delete_team_by_id))
        .route(
            "/api/teams/{id}/players",
            get(team::find_all_players_by_team_id).post(team::assign_player_to_team),
        )
        .route("/api/customers", post(customer::create_customer))
        .route(
            "/api/customers/{userName}/invoices",
            get(customer::find_all_invoices_by_user_name)
                .post(customer::create_invoice_by_user_name),
        )
        .route("/api/signup", post(session::signup))
        .route("/api/login", post(session::login))
        .with_state(state)
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
}
