#[cfg(feature = "validator")]
use validator::Validate;

auto_derived!(
    /// Guest RSVP status
    pub enum RsvpStatus {
        /// Invited, no response yet
        Pending,
        /// Confirmed attendance
        Yes,
        /// Declined
        No,
        /// Undecided
        Maybe,
        /// Wanted to attend a full event
        Waitlisted,
    }

    /// New guest information
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataInviteGuest {
        /// Guest email address
        #[cfg_attr(feature = "validator", validate(email))]
        pub email: String,
        /// Guest display name
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 64)))]
        pub name: String,
    }

    /// RSVP response
    pub struct DataRsvpGuest {
        /// New response status
        pub status: RsvpStatus,
    }
);

impl Default for RsvpStatus {
    fn default() -> Self {
        Self::Pending
    }
}
