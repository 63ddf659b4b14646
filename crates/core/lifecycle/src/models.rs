auto_derived!(
    /// Lifecycle state of an event
    pub enum EventAvailability {
        /// Upcoming and open to guests
        Published,
        /// Date has passed
        Completed,
        /// Called off by the organizer
        Cancelled,
        /// Put away by the organizer
        Archived,
    }

    /// What hid an event from the platform
    pub enum HiddenBy {
        /// Pending reports crossed the threshold
        Automatic,
        /// An administrator hid the event directly
        Manual,
        /// The organizer was permanently banned
        BanCascade,
    }

    /// Kind of moderation penalty
    pub enum PenaltyType {
        /// Recorded for the audit trail only
        Warning,
        /// Temporary ban with a set length
        Suspension,
        /// Permanent ban
        Ban,
    }
);

impl Default for EventAvailability {
    fn default() -> Self {
        Self::Published
    }
}
