use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};

use crate::server::controller::{admin, auth, catalog, kitchen, review, user, waiter};

/// Name of the cookie holding the session id.
const SESSION_COOKIE: &str = "id";

struct SessionCookieAddon;

impl Modify for SessionCookieAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "session",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(SESSION_COOKIE))),
        );
    }
}

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::get_current_user,
        catalog::get_plates,
        catalog::get_plate_categories,
        catalog::get_table_areas,
        user::create_reservation,
        user::get_reservation,
        user::get_reservations,
        user::edit_reservation,
        user::cancel_reservation,
        review::create_review,
        review::get_reviews,
        waiter::create_bill,
        waiter::add_plate_to_bill,
        waiter::finalize_bill,
        waiter::assign_table_to_reservation,
        waiter::get_bills,
        waiter::get_bill,
        waiter::get_reservations,
        waiter::get_tables,
        kitchen::get_pending_plates,
        kitchen::mark_plate_cooked,
        admin::users::create_user,
        admin::users::edit_user,
        admin::users::delete_user,
        admin::users::get_users,
        admin::tables::create_table_area,
        admin::tables::edit_table_area,
        admin::tables::delete_table_area,
        admin::tables::get_table_areas,
        admin::tables::create_table,
        admin::tables::edit_table,
        admin::tables::delete_table,
        admin::tables::get_tables,
        admin::catalog::create_plate_category,
        admin::catalog::edit_plate_category,
        admin::catalog::delete_plate_category,
        admin::catalog::get_plate_categories,
        admin::catalog::create_plate,
        admin::catalog::edit_plate,
        admin::catalog::delete_plate,
        admin::catalog::get_plates,
        admin::reservations::create_reservation,
        admin::reservations::edit_reservation,
        admin::reservations::delete_reservation,
        admin::reservations::get_reservations,
        admin::bills::create_bill,
        admin::bills::get_bills,
        admin::bills::edit_bill,
        admin::bills::delete_bill,
    ),
    modifiers(&SessionCookieAddon),
    tags(
        (name = auth::AUTH_TAG, description = "Registration, login and session endpoints"),
        (name = catalog::CATALOG_TAG, description = "Public menu and table areas"),
        (name = user::RESERVATION_TAG, description = "Public reservation booking and lookup"),
        (name = review::REVIEW_TAG, description = "Restaurant reviews"),
        (name = waiter::WAITER_TAG, description = "Bills, seating and floor overview for waiters"),
        (name = kitchen::KITCHEN_TAG, description = "Kitchen queue of ordered plates"),
        (name = admin::ADMIN_TAG, description = "Back-office management"),
    ),
    info(
        title = "Comanda API",
        version = "0.1.0",
        description = "Restaurant reservations, tables, menu, bills and reviews",
    )
)]
pub struct ApiDoc;
