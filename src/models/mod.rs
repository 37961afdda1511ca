mod film;
mod user;

pub use film::Film;
pub use user::User;
