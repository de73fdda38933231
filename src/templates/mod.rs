pub mod booking_email;
pub mod locale;
