#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

#[cfg(feature = "schemas")]
#[macro_use]
extern crate schemars;

#[macro_use]
extern crate gather_result;

macro_rules! auto_derived {
    ( $( $item:item )+ ) => {
        $(
            #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
            #[cfg_attr(feature = "schemas", derive(JsonSchema))]
            #[derive(Debug, Clone, Eq, PartialEq)]
            $item
        )+
    };
}

mod availability;
mod capacity;
mod models;
mod moderation;
mod penalty;

pub use availability::*;
pub use capacity::*;
pub use models::*;
pub use moderation::*;
pub use penalty::*;
