pub mod locale;
pub mod projection;
pub mod share;
