use gather_lifecycle::PenaltyType;

#[cfg(feature = "validator")]
use validator::Validate;

auto_derived!(
    /// New penalty information
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataIssuePenalty {
        /// Kind of penalty to apply
        pub penalty_type: PenaltyType,
        /// Attached reason
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 1024)))]
        pub reason: String,
        /// Suspension length in days
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub duration: Option<i64>,
    }
);
