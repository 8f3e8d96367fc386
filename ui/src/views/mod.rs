mod compare;
pub use compare::Compare;

mod home;
pub use home::Home;
