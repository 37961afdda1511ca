use jiff::civil::Date;

/// User catalog record.
///
/// `name` may be absent or blank on input; the store substitutes the login
/// before the record is stored. `id` is absent on create input and assigned
/// by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Option<i64>,
    pub email: Option<String>,
    pub login: Option<String>,
    pub name: Option<String>,
    pub birthday: Date,
}
