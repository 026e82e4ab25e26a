//! Reservation lifecycle.
//!
//! States move `active → in_course → finalized` or `active → cancelled`. Clients create,
//! edit and cancel their own reservations; waiters seat them, which opens a bill on the
//! chosen table. Finalization happens when that bill is paid (see the bill service).
//!
//! Calendar checks ("today", "in the past") use restaurant-local time.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{ReservationState, TableState};
use sea_orm::{ActiveEnum, ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        reservation::ReservationRepository, table::TableRepository,
        table_area::TableAreaRepository, user::UserRepository,
    },
    error::{validation::ValidationError, AppError},
    model::{
        bill::{CreateBillParams, WaiterAssignment},
        reservation::{
            AdminSaveReservationParams, CreateReservationParams, EditReservationParams,
            Reservation, ReservationLookup, ReservationRecord,
        },
    },
    service::{bill::open_bill, code::generate_reservation_code},
    util::{
        time::{is_same_local_day, local_day_bounds},
        validate::{exceeds_chars, is_valid_email, non_blank, RESERVATION_NOTES_MAX_CHARS},
    },
};

pub struct ReservationService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a new reservation in the `active` state with no table.
    ///
    /// When the request comes from a logged-in account, the account's name, email and phone
    /// number replace whatever contact data was submitted.
    ///
    /// # Arguments
    /// - `params` - Reservation data
    /// - `now` - Current instant, used to reject dates in the past
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The created reservation with its `RES-` code
    /// - `Err(AppError::Validation)` - One or more fields rejected
    pub async fn create(
        &self,
        params: CreateReservationParams,
        now: DateTime<Utc>,
    ) -> Result<Reservation, AppError> {
        let (name, email, phone_number, client_id) = match params.client {
            Some(client) => (
                Some(client.name),
                Some(client.email),
                client.phone_number,
                Some(client.id),
            ),
            None => (params.name, params.email, params.phone_number, None),
        };

        let mut errors = ValidationError::new("Invalid reservation data");
        if name.is_none() {
            errors.add("name", "Name is required");
        }
        if let Some(email) = &email {
            if !is_valid_email(email) {
                errors.add("email", "Email is not valid");
            }
        }
        if params.date_time < now {
            errors.add("date_time", "Date and time cannot be in the past");
        }
        if params.amount_people <= 0 {
            errors.add("amount_people", "Amount of people must be greater than 0");
        }
        check_notes(&mut errors, params.notes.as_deref());
        check_area(self.db, &mut errors, params.area_id).await?;
        errors.into_result()?;

        let txn = self.db.begin().await?;

        let code = generate_reservation_code(&txn).await?;
        let reservation = ReservationRepository::new(&txn)
            .create(ReservationRecord {
                code,
                name: name.unwrap_or_default(),
                email,
                phone_number,
                date_time: params.date_time,
                amount_people: params.amount_people,
                state: ReservationState::Active,
                table_id: None,
                area_id: params.area_id,
                client_id,
                notes: params.notes,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Created reservation {} for {} people at {}",
            reservation.code,
            reservation.amount_people,
            reservation.date_time
        );

        Ok(reservation)
    }

    /// Finds the reservation a public caller refers to.
    ///
    /// A code matches exactly. An email or phone number selects the most recent `active`
    /// reservation, falling back to the most recent one in any state.
    pub async fn lookup(&self, lookup: &ReservationLookup) -> Result<Reservation, AppError> {
        find_for_lookup(self.db, lookup).await
    }

    /// Every reservation for a contact, most recent first.
    pub async fn list_by_contact(
        &self,
        lookup: &ReservationLookup,
    ) -> Result<Vec<Reservation>, AppError> {
        let reservations = ReservationRepository::new(self.db)
            .get_by_contact(lookup)
            .await?;

        Ok(reservations)
    }

    /// Applies a client edit to an `active` reservation.
    ///
    /// Contact fields and the code cannot change. Any edit drops the table assignment.
    pub async fn edit(
        &self,
        lookup: &ReservationLookup,
        params: EditReservationParams,
        now: DateTime<Utc>,
    ) -> Result<Reservation, AppError> {
        let txn = self.db.begin().await?;

        let reservation = find_for_lookup(&txn, lookup).await?;
        if reservation.state != ReservationState::Active {
            return Err(ValidationError::field(
                "reservation",
                "Only active reservations can be edited",
            )
            .into());
        }

        if params.is_empty() {
            return Ok(reservation);
        }

        let mut errors = ValidationError::new("Invalid reservation data");
        if let Some(date_time) = params.date_time {
            if date_time < now {
                errors.add("date_time", "Date and time cannot be in the past");
            }
        }
        if let Some(amount_people) = params.amount_people {
            if amount_people <= 0 {
                errors.add("amount_people", "Amount of people must be greater than 0");
            }
        }
        check_notes(&mut errors, params.notes.as_deref());
        check_area(&txn, &mut errors, params.area_id.flatten()).await?;
        errors.into_result()?;

        let updated = ReservationRepository::new(&txn)
            .apply_edit(reservation.id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        txn.commit().await?;

        Ok(updated)
    }

    /// Cancels an `active` reservation.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The cancelled reservation
    /// - `Err(AppError::Validation)` - Already cancelled, seated or finalized
    pub async fn cancel(&self, lookup: &ReservationLookup) -> Result<Reservation, AppError> {
        let txn = self.db.begin().await?;
        let reservation_repo = ReservationRepository::new(&txn);

        let reservation = find_for_lookup(&txn, lookup).await?;
        match reservation.state {
            ReservationState::Active => {}
            ReservationState::Cancelled => {
                return Err(ValidationError::field(
                    "reservation",
                    "Reservation is already cancelled",
                )
                .into())
            }
            ReservationState::InCourse | ReservationState::Finalized => {
                return Err(ValidationError::field(
                    "reservation",
                    "Only active reservations can be cancelled",
                )
                .into())
            }
        }

        if !reservation_repo.cancel_if_active(reservation.id).await? {
            return Err(ValidationError::field(
                "reservation",
                "Only active reservations can be cancelled",
            )
            .into());
        }

        let cancelled = reservation_repo
            .find_by_id(reservation.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        txn.commit().await?;

        tracing::info!("Cancelled reservation {}", cancelled.code);

        Ok(cancelled)
    }

    /// Seats an `active` reservation for today at an available table.
    ///
    /// Moves the reservation to `in_course`, marks the table occupied and opens a bill on it
    /// for the least-loaded waiter, all in one transaction.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The seated reservation
    /// - `Err(AppError::Validation)` - Reservation missing, not active or not for today;
    ///   table missing or not available
    /// - `Err(AppError::NoWaitersAvailable)` - No active waiter to own the bill
    pub async fn assign_table(
        &self,
        reservation_id: i32,
        table_code: &str,
        now: DateTime<Utc>,
    ) -> Result<Reservation, AppError> {
        let txn = self.db.begin().await?;
        let reservation_repo = ReservationRepository::new(&txn);

        let Some(reservation) = reservation_repo.find_by_id(reservation_id).await? else {
            return Err(ValidationError::field("reservation", "Reservation not found").into());
        };
        if reservation.state != ReservationState::Active {
            return Err(ValidationError::field("reservation", "Reservation is not active").into());
        }
        if !is_same_local_day(reservation.date_time, now) {
            tracing::warn!(
                "Refused to seat reservation {} scheduled for {}",
                reservation.code,
                reservation.date_time
            );
            return Err(
                ValidationError::field("reservation", "Reservation is not for today").into(),
            );
        }

        let table_code = table_code.trim();
        if table_code.is_empty() {
            return Err(ValidationError::field("table_code", "Table code is required").into());
        }
        let Some(table) = TableRepository::new(&txn).find_by_code(table_code).await? else {
            return Err(ValidationError::field("table_code", "Table not found").into());
        };
        if table.state != TableState::Available {
            return Err(ValidationError::field(
                "table_code",
                format!(
                    "Table is not available (current state: {})",
                    table.state.to_value()
                ),
            )
            .into());
        }

        if !reservation_repo
            .assign_table_if_active(reservation.id, table.id)
            .await?
        {
            return Err(ValidationError::field("reservation", "Reservation is not active").into());
        }

        let bill = open_bill(
            &txn,
            CreateBillParams {
                table_id: table.id,
                waiter: WaiterAssignment::LeastLoaded,
            },
        )
        .await?;

        let seated = reservation_repo
            .find_by_id(reservation.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        txn.commit().await?;

        tracing::info!(
            "Seated reservation {} at table {} with bill {}",
            seated.code,
            table.code,
            bill.code
        );

        Ok(seated)
    }

    /// Active reservations scheduled for the current restaurant-local day.
    pub async fn get_today(&self, now: DateTime<Utc>) -> Result<Vec<Reservation>, AppError> {
        let (start, end) = local_day_bounds(now);

        let reservations = ReservationRepository::new(self.db)
            .get_active_between(start, end)
            .await?;

        Ok(reservations)
    }

    pub async fn get_all(&self) -> Result<Vec<Reservation>, AppError> {
        let reservations = ReservationRepository::new(self.db).get_all().await?;

        Ok(reservations)
    }

    /// Creates a reservation with every field chosen by an admin.
    pub async fn admin_create(
        &self,
        params: AdminSaveReservationParams,
    ) -> Result<Reservation, AppError> {
        let txn = self.db.begin().await?;

        let record = validate_admin_record(&txn, params, String::new()).await?;
        let code = generate_reservation_code(&txn).await?;
        let reservation = ReservationRepository::new(&txn)
            .create(ReservationRecord { code, ..record })
            .await?;

        txn.commit().await?;

        Ok(reservation)
    }

    /// Overwrites every field of a reservation except its code.
    pub async fn admin_update(
        &self,
        id: i32,
        params: AdminSaveReservationParams,
    ) -> Result<Reservation, AppError> {
        let txn = self.db.begin().await?;
        let reservation_repo = ReservationRepository::new(&txn);

        let Some(existing) = reservation_repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("Reservation not found".to_string()));
        };

        let record = validate_admin_record(&txn, params, existing.code).await?;
        let updated = reservation_repo
            .replace(id, record)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        txn.commit().await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ReservationRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Reservation not found".to_string()));
        }

        Ok(())
    }
}

async fn find_for_lookup<C: ConnectionTrait>(
    db: &C,
    lookup: &ReservationLookup,
) -> Result<Reservation, AppError> {
    let reservation_repo = ReservationRepository::new(db);

    let reservation = match reservation_repo.find_latest(lookup, true).await? {
        Some(reservation) => Some(reservation),
        None => reservation_repo.find_latest(lookup, false).await?,
    };

    reservation.ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))
}

fn check_notes(errors: &mut ValidationError, notes: Option<&str>) {
    if notes.is_some_and(|n| exceeds_chars(n, RESERVATION_NOTES_MAX_CHARS)) {
        errors.add(
            "notes",
            format!("Notes must be at most {RESERVATION_NOTES_MAX_CHARS} characters"),
        );
    }
}

async fn check_area<C: ConnectionTrait>(
    db: &C,
    errors: &mut ValidationError,
    area_id: Option<i32>,
) -> Result<(), AppError> {
    if let Some(area_id) = area_id {
        if !TableAreaRepository::new(db).exists(area_id).await? {
            errors.add("area", "Table area not found");
        }
    }

    Ok(())
}

async fn validate_admin_record<C: ConnectionTrait>(
    db: &C,
    params: AdminSaveReservationParams,
    code: String,
) -> Result<ReservationRecord, AppError> {
    let name = non_blank(Some(params.name));

    let mut errors = ValidationError::new("Invalid reservation data");
    if name.is_none() {
        errors.add("name", "Name is required");
    }
    if let Some(email) = &params.email {
        if !is_valid_email(email) {
            errors.add("email", "Email is not valid");
        }
    }
    if params.amount_people <= 0 {
        errors.add("amount_people", "Amount of people must be greater than 0");
    }
    check_notes(&mut errors, params.notes.as_deref());
    check_area(db, &mut errors, params.area_id).await?;
    if let Some(table_id) = params.table_id {
        if TableRepository::new(db).find_by_id(table_id).await?.is_none() {
            errors.add("table", "Table not found");
        }
    }
    if let Some(client_id) = params.client_id {
        if UserRepository::new(db).find_by_id(client_id).await?.is_none() {
            errors.add("client", "Client not found");
        }
    }
    errors.into_result()?;

    Ok(ReservationRecord {
        code,
        name: name.unwrap_or_default(),
        email: params.email,
        phone_number: params.phone_number,
        date_time: params.date_time,
        amount_people: params.amount_people,
        state: params.state.unwrap_or(ReservationState::Active),
        table_id: params.table_id,
        area_id: params.area_id,
        client_id: params.client_id,
        notes: params.notes,
    })
}
