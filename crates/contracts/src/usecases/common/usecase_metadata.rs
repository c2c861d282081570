/// Identification of a UseCase, used in log lines and the page markup
pub trait UseCaseMetadata {
    /// UseCase index, e.g. "u501"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "booking_flow"
    fn usecase_name() -> &'static str;

    /// Name shown to the visitor
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// "u501_booking_flow"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
