mod bill_plate;
mod reservation;
mod review;
mod table;
mod user;
