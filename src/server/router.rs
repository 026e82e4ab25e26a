use axum::{
    routing::{delete, get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{admin, auth, catalog, kitchen, review, user, waiter},
    doc::ApiDoc,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(public_routes())
        .merge(waiter_routes())
        .merge(kitchen_routes())
        .merge(admin_routes())
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", ApiDoc::openapi()))
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/authentication/register", post(auth::register))
        .route("/authentication/login", post(auth::login))
        .route("/authentication/logout", post(auth::logout))
        .route("/user/get-current-user", get(auth::get_current_user))
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/plates", get(catalog::get_plates))
        .route("/plate-categories", get(catalog::get_plate_categories))
        .route("/table-areas", get(catalog::get_table_areas))
        .route("/user/create-reservation", post(user::create_reservation))
        .route("/user/get-reservation", get(user::get_reservation))
        .route("/user/get-reservations", get(user::get_reservations))
        .route("/user/edit-reservation", post(user::edit_reservation))
        .route("/user/cancel-reservation", post(user::cancel_reservation))
        .route("/review/create-review", post(review::create_review))
        .route("/review/get-reviews", get(review::get_reviews))
}

fn waiter_routes() -> Router<AppState> {
    Router::new()
        .route("/waiter/create-bill", post(waiter::create_bill))
        .route(
            "/waiter/add-plate-to-bill/{bill_id}",
            post(waiter::add_plate_to_bill),
        )
        .route("/waiter/finalize-bill/{bill_id}", post(waiter::finalize_bill))
        .route(
            "/waiter/assign-table-to-reservation/{reservation_id}",
            post(waiter::assign_table_to_reservation),
        )
        .route("/waiter/bills", get(waiter::get_bills))
        .route("/waiter/bills/{bill_id}", get(waiter::get_bill))
        .route("/waiter/reservations", get(waiter::get_reservations))
        .route("/waiter/tables", get(waiter::get_tables))
}

fn kitchen_routes() -> Router<AppState> {
    Router::new()
        .route("/kitchen/pending-plates", get(kitchen::get_pending_plates))
        .route(
            "/kitchen/mark-plate-cooked/{bill_plate_id}",
            post(kitchen::mark_plate_cooked),
        )
}

fn admin_routes() -> Router<AppState> {
    use admin::{bills, catalog, reservations, tables, users};

    Router::new()
        .route("/admin/create-user", post(users::create_user))
        .route("/admin/edit-user/{user_id}", post(users::edit_user))
        .route("/admin/delete-user/{user_id}", delete(users::delete_user))
        .route("/admin/get-users", get(users::get_users))
        .route("/admin/create-table-area", post(tables::create_table_area))
        .route("/admin/edit-table-area/{area_id}", post(tables::edit_table_area))
        .route(
            "/admin/delete-table-area/{area_id}",
            delete(tables::delete_table_area),
        )
        .route("/admin/get-table-areas", get(tables::get_table_areas))
        .route("/admin/create-table", post(tables::create_table))
        .route("/admin/edit-table/{table_id}", post(tables::edit_table))
        .route("/admin/delete-table/{table_id}", delete(tables::delete_table))
        .route("/admin/get-tables", get(tables::get_tables))
        .route(
            "/admin/create-plate-category",
            post(catalog::create_plate_category),
        )
        .route(
            "/admin/edit-plate-category/{category_id}",
            post(catalog::edit_plate_category),
        )
        .route(
            "/admin/delete-plate-category/{category_id}",
            delete(catalog::delete_plate_category),
        )
        .route("/admin/get-plate-categories", get(catalog::get_plate_categories))
        .route("/admin/create-plate", post(catalog::create_plate))
        .route("/admin/edit-plate/{plate_id}", post(catalog::edit_plate))
        .route("/admin/delete-plate/{plate_id}", delete(catalog::delete_plate))
        .route("/admin/get-plates", get(catalog::get_plates))
        .route(
            "/admin/create-reservation",
            post(reservations::create_reservation),
        )
        .route(
            "/admin/edit-reservation/{reservation_id}",
            post(reservations::edit_reservation),
        )
        .route(
            "/admin/delete-reservation/{reservation_id}",
            delete(reservations::delete_reservation),
        )
        .route("/admin/get-reservations", get(reservations::get_reservations))
        .route("/admin/create-bill", post(bills::create_bill))
        .route("/admin/get-bills", get(bills::get_bills))
        .route("/admin/edit-bill/{bill_id}", post(bills::edit_bill))
        .route("/admin/delete-bill/{bill_id}", delete(bills::delete_bill))
}
