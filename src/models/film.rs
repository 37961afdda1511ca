use jiff::civil::Date;

/// Film catalog record.
///
/// Fields checked for presence by validation are `Option` so that a missing
/// value is rejected by the store's ruleset rather than at the transport
/// boundary. `id` is absent on create input and assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Film {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<Date>,
    /// Duration in minutes. Defaults to 0 when the payload omits it, which
    /// the validation ruleset then rejects.
    pub duration: i64,
}
