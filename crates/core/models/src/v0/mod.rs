mod event_guests;
mod events;
mod penalties;
mod safety_reports;

pub use event_guests::*;
pub use events::*;
pub use penalties::*;
pub use safety_reports::*;
