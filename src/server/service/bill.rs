//! Bill lifecycle: creation, line items, finalization and deletion.
//!
//! Every mutation runs in one transaction and keeps three things in step: the bill's own
//! state and totals, the occupancy of its table, and the reservations seated at that table.
//!
//! | Operation | Bill | Table | Reservations on the table |
//! |-----------|------|-------|---------------------------|
//! | create | new `current` | `occupied` | unchanged |
//! | add plate | `total += price * qty` | unchanged | unchanged |
//! | finalize | `closed` | `available` | `in_course` → `finalized` |
//! | edit: close | `closed` | `available` | `in_course` → `finalized` |
//! | edit: move table | table changed | old `available`, new `occupied` | moved to the new table |
//! | edit: reopen | `current` | `occupied` | unchanged |
//! | delete (current) | removed | `available` | `in_course` → `active`, table cleared |

use entity::sea_orm_active_enums::{BillState, TableState};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{
        bill::BillRepository, bill_plate::BillPlateRepository, plate::PlateRepository,
        reservation::ReservationRepository, table::TableRepository, user::UserRepository,
    },
    error::{is_unique_violation_on, validation::ValidationError, AppError},
    model::bill::{
        AddPlateParams, Bill, BillAccess, CreateBillParams, FinalizeBillParams, UpdateBillParams,
        WaiterAssignment,
    },
    service::{code::generate_bill_code, load_balancer::WaiterLoadBalancer},
    util::validate::{exceeds_chars, BILL_PLATE_NOTES_MAX_CHARS},
};

const TABLE_HAS_ACTIVE_BILL: &str = "Table already has an active bill";

pub struct BillService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> BillService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a bill on a table and marks the table occupied.
    ///
    /// # Returns
    /// - `Ok(Bill)` - The new `current` bill
    /// - `Err(AppError::Validation)` - Unknown table or waiter
    /// - `Err(AppError::Conflict)` - The table already has a current bill
    /// - `Err(AppError::NoWaitersAvailable)` - Automatic assignment found no active waiter
    pub async fn create(&self, params: CreateBillParams) -> Result<Bill, AppError> {
        let txn = self.db.begin().await?;

        let bill = open_bill(&txn, params).await?;

        txn.commit().await?;

        Ok(bill)
    }

    /// Adds `quantity` units of a plate to a current bill.
    ///
    /// One line item row is inserted per unit and the bill total grows by
    /// `price * quantity` in the same transaction.
    ///
    /// # Returns
    /// - `Ok(Bill)` - The bill with its updated total and line items
    /// - `Err(AppError::Validation)` - Bill missing or closed, plate missing or unavailable,
    ///   quantity below 1 or notes too long
    pub async fn add_plate(
        &self,
        access: BillAccess,
        params: AddPlateParams,
    ) -> Result<Bill, AppError> {
        let txn = self.db.begin().await?;
        let bill_repo = BillRepository::new(&txn);

        let Some(bill) = find_accessible(&txn, access, params.bill_id).await? else {
            return Err(ValidationError::field("bill", "Bill not found").into());
        };
        if bill.state != BillState::Current {
            return Err(ValidationError::field("bill", "Cannot add plates to a closed bill").into());
        }

        let Some(plate) = PlateRepository::new(&txn).find_by_id(params.plate_id).await? else {
            return Err(ValidationError::field("plate", "Plate not found").into());
        };
        if !plate.available {
            return Err(ValidationError::field("plate", "Plate is not available").into());
        }

        if params.quantity < 1 {
            return Err(ValidationError::field("quantity", "Quantity must be at least 1").into());
        }
        if exceeds_chars(&params.notes, BILL_PLATE_NOTES_MAX_CHARS) {
            return Err(ValidationError::field(
                "notes",
                format!("Notes must be at most {BILL_PLATE_NOTES_MAX_CHARS} characters"),
            )
            .into());
        }

        BillPlateRepository::new(&txn)
            .create_many(bill.id, plate.id, &params.notes, params.quantity as usize)
            .await?;

        let amount = plate.price * f64::from(params.quantity);
        if !bill_repo.add_to_total_if_current(bill.id, amount).await? {
            return Err(ValidationError::field("bill", "Cannot add plates to a closed bill").into());
        }

        let bill = reload(&bill_repo, bill.id).await?;

        txn.commit().await?;

        tracing::info!(
            "Added {} x plate {} to bill {} (total {:.2})",
            params.quantity,
            plate.id,
            bill.code,
            bill.total
        );

        Ok(bill)
    }

    /// Closes a bill after checking the payment covers total plus tip.
    ///
    /// Frees the table and finalizes every `in_course` reservation seated at it.
    ///
    /// # Returns
    /// - `Ok(Bill)` - The closed bill
    /// - `Err(AppError::Validation)` - Bill missing or closed, negative payment, tip outside
    ///   0-100, or payment below the required amount
    pub async fn finalize(
        &self,
        access: BillAccess,
        params: FinalizeBillParams,
    ) -> Result<Bill, AppError> {
        let txn = self.db.begin().await?;
        let bill_repo = BillRepository::new(&txn);

        let Some(bill) = find_accessible(&txn, access, params.bill_id).await? else {
            return Err(ValidationError::field("bill", "Bill not found").into());
        };
        if bill.state != BillState::Current {
            return Err(ValidationError::field("bill", "Bill is already closed").into());
        }

        if !params.amount_paid.is_finite() || params.amount_paid < 0.0 {
            return Err(ValidationError::field(
                "amount_paid",
                "Amount paid must be a non-negative number",
            )
            .into());
        }
        if !params.tip_percentage.is_finite()
            || !(0.0..=100.0).contains(&params.tip_percentage)
        {
            return Err(ValidationError::field(
                "tip_percentage",
                "Tip percentage must be between 0 and 100",
            )
            .into());
        }

        let required = required_cents(bill.total, params.tip_percentage);
        if paid_cents(params.amount_paid) < required {
            let required = required as f64 / 100.0;
            tracing::warn!(
                "Rejected payment of {:.2} for bill {} requiring {:.2}",
                params.amount_paid,
                bill.code,
                required
            );
            return Err(ValidationError::field(
                "amount_sufficient",
                format!("Amount paid must be at least ${required:.2} MXN"),
            )
            .into());
        }

        let tip = params.tip_percentage.floor() as i32;
        if !bill_repo
            .close_if_current(bill.id, params.amount_paid, tip)
            .await?
        {
            return Err(ValidationError::field("bill", "Bill is already closed").into());
        }

        let mut finalized = 0;
        if let Some(table_id) = bill.table_id {
            TableRepository::new(&txn)
                .set_state(table_id, TableState::Available)
                .await?;
            finalized = ReservationRepository::new(&txn)
                .finalize_in_course_for_table(table_id)
                .await?;
        }

        let bill = reload(&bill_repo, bill.id).await?;

        txn.commit().await?;

        tracing::info!(
            "Closed bill {} paid {:.2} with {}% tip, finalized {} reservation(s)",
            bill.code,
            bill.total_paid,
            bill.tip,
            finalized
        );

        Ok(bill)
    }

    /// Applies an admin edit to a bill's table, waiter or state.
    ///
    /// The bill keeps its totals and line items. Table occupancy and the reservations seated
    /// at the affected tables follow the table in the module overview.
    ///
    /// # Returns
    /// - `Ok(Bill)` - The updated bill
    /// - `Err(AppError::NotFound)` - No bill with that id
    /// - `Err(AppError::Validation)` - Unknown table, or a waiter that is unknown, inactive or
    ///   lacks the waiter role
    /// - `Err(AppError::Conflict)` - The bill would become current on a table that already
    ///   has a current bill
    pub async fn update(&self, params: UpdateBillParams) -> Result<Bill, AppError> {
        let txn = self.db.begin().await?;
        let bill_repo = BillRepository::new(&txn);
        let table_repo = TableRepository::new(&txn);

        let Some(bill) = bill_repo.find_by_id(params.id).await? else {
            return Err(AppError::NotFound("Bill not found".to_string()));
        };

        let mut errors = ValidationError::new("Invalid bill data");
        if let Some(table_id) = params.table_id {
            if table_repo.find_by_id(table_id).await?.is_none() {
                errors.add("table", "Table not found");
            }
        }
        if let Some(waiter_id) = params.waiter_id {
            match UserRepository::new(&txn).find_by_id(waiter_id).await? {
                Some(user) if user.roles.waiter && user.is_active => {}
                _ => errors.add("waiter", "Waiter not found"),
            }
        }
        errors.into_result()?;

        let old_table = bill.table_id.filter(|_| bill.state == BillState::Current);
        let state = params.state.unwrap_or(bill.state);
        let table_id = params.table_id.or(bill.table_id);
        let new_table = table_id.filter(|_| state == BillState::Current);

        if let Some(target) = new_table.filter(|id| Some(*id) != old_table) {
            if bill_repo.find_current_for_table(target).await?.is_some() {
                return Err(AppError::Conflict(TABLE_HAS_ACTIVE_BILL.to_string()));
            }
        }

        let updated = bill_repo
            .update(params)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, TABLE_HAS_ACTIVE_BILL))?
            .ok_or_else(|| AppError::NotFound("Bill not found".to_string()))?;

        let reservation_repo = ReservationRepository::new(&txn);
        match (old_table, new_table) {
            (Some(from), Some(to)) if from != to => {
                reservation_repo.move_in_course_to_table(from, to).await?;
            }
            (Some(from), None) => {
                reservation_repo.finalize_in_course_for_table(from).await?;
            }
            _ => {}
        }

        for table_id in [old_table, new_table].into_iter().flatten() {
            let occupied = bill_repo.find_current_for_table(table_id).await?.is_some();
            let table_state = if occupied {
                TableState::Occupied
            } else {
                TableState::Available
            };
            table_repo.set_state(table_id, table_state).await?;
        }

        txn.commit().await?;

        tracing::info!(
            "Edited bill {}: table {:?} -> {:?}, state {:?} -> {:?}",
            updated.code,
            bill.table_id,
            updated.table_id,
            bill.state,
            updated.state
        );

        Ok(updated)
    }

    /// Hard-deletes a bill and its line items.
    ///
    /// Deleting a `current` bill releases its table and returns the reservations seated
    /// there to `active` without a table.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let bill_repo = BillRepository::new(&txn);

        let Some(bill) = bill_repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("Bill not found".to_string()));
        };

        bill_repo.delete(bill.id).await?;

        if let (BillState::Current, Some(table_id)) = (bill.state, bill.table_id) {
            TableRepository::new(&txn)
                .set_state(table_id, TableState::Available)
                .await?;
            let released = ReservationRepository::new(&txn)
                .release_in_course_for_table(table_id)
                .await?;

            tracing::info!(
                "Deleted current bill {}, released table {} and {} reservation(s)",
                bill.code,
                table_id,
                released
            );
        }

        txn.commit().await?;

        Ok(())
    }

    /// A single bill, if the caller may see it.
    pub async fn get_one(&self, access: BillAccess, id: i32) -> Result<Option<Bill>, AppError> {
        let bill = find_accessible(self.db, access, id).await?;

        Ok(bill)
    }

    /// Bills visible to the caller, newest first.
    pub async fn get_visible(&self, access: BillAccess) -> Result<Vec<Bill>, AppError> {
        let bill_repo = BillRepository::new(self.db);

        let bills = match access {
            BillAccess::All => bill_repo.get_all().await?,
            BillAccess::OwnedBy(waiter_id) => bill_repo.get_by_waiter(waiter_id).await?,
        };

        Ok(bills)
    }
}

/// Opens a bill inside a caller-owned transaction.
///
/// Shared by bill creation and reservation seating so both follow the same checks.
pub async fn open_bill<C: ConnectionTrait>(
    db: &C,
    params: CreateBillParams,
) -> Result<Bill, AppError> {
    let table_repo = TableRepository::new(db);
    let bill_repo = BillRepository::new(db);

    let Some(table) = table_repo.find_by_id(params.table_id).await? else {
        return Err(ValidationError::field("table", "Table not found").into());
    };

    if bill_repo.find_current_for_table(table.id).await?.is_some() {
        return Err(AppError::Conflict(TABLE_HAS_ACTIVE_BILL.to_string()));
    }

    let waiter_id = match params.waiter {
        WaiterAssignment::Explicit(id) => match UserRepository::new(db).find_by_id(id).await? {
            Some(user) if user.roles.waiter && user.is_active => user.id,
            _ => return Err(ValidationError::field("waiter", "Waiter not found").into()),
        },
        WaiterAssignment::LeastLoaded => WaiterLoadBalancer::new(db)
            .pick_least_loaded_waiter()
            .await?
            .ok_or(AppError::NoWaitersAvailable)?,
    };

    let code = generate_bill_code(db).await?;
    let bill = bill_repo
        .create(code, table.id, Some(waiter_id))
        .await
        .map_err(bill_insert_error)?;

    table_repo.set_state(table.id, TableState::Occupied).await?;

    tracing::info!(
        "Opened bill {} on table {} for waiter {}",
        bill.code,
        table.code,
        waiter_id
    );

    Ok(bill)
}

/// Total plus tip, where the tip is a percentage of the total.
pub fn amount_due(total: f64, tip_percentage: f64) -> f64 {
    total + total * tip_percentage / 100.0
}

/// Whole cents actually tendered. Fractions of a cent do not count towards the payment.
fn paid_cents(amount: f64) -> i64 {
    (amount * 100.0 + CENT_EPSILON).floor() as i64
}

/// Amount due in cents, rounded up so a sub-cent remainder still costs a whole cent.
fn required_cents(total: f64, tip_percentage: f64) -> i64 {
    (amount_due(total, tip_percentage) * 100.0 - CENT_EPSILON).ceil() as i64
}

/// Absorbs float noise on exact amounts such as `109.99 * 100.0 = 10998.999999999998`.
const CENT_EPSILON: f64 = 1e-6;

/// Maps a failed bill insert to the error the caller should see.
///
/// The bill table has two unique constraints. A clash on `code` means a generated code was
/// taken between the existence check and the insert, which is a server fault. A clash on the
/// current-bill index means another bill was opened on the table first.
pub(crate) fn bill_insert_error(err: DbErr) -> AppError {
    if is_unique_violation_on(&err, "bill.code") {
        return AppError::InternalError(format!("Generated bill code collided on insert: {err}"));
    }

    AppError::conflict_on_unique(err, TABLE_HAS_ACTIVE_BILL)
}

async fn find_accessible<C: ConnectionTrait>(
    db: &C,
    access: BillAccess,
    id: i32,
) -> Result<Option<Bill>, DbErr> {
    let bill_repo = BillRepository::new(db);

    match access {
        BillAccess::All => bill_repo.find_by_id(id).await,
        BillAccess::OwnedBy(waiter_id) => bill_repo.find_by_id_for_waiter(id, waiter_id).await,
    }
}

async fn reload<C: ConnectionTrait>(
    bill_repo: &BillRepository<'_, C>,
    id: i32,
) -> Result<Bill, AppError> {
    bill_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::InternalError(format!("Bill {id} vanished during update")))
}
