//! Data models for Artemis

pub mod enums;
pub mod period;
pub mod reset_state;
pub mod staff;
pub mod stats;
pub mod visit;

pub use enums::{Lang, Location, VisitorCategory};
pub use period::{KioskZone, Period};
pub use reset_state::{PeriodCounter, ResetState, TicketNumbers};
pub use visit::{CheckInRequest, Visit, VisitFilter, VisitQuery};
