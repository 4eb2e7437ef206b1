pub mod dms;
pub mod latlon;
pub mod utm;
