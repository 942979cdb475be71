mod gates;
pub use gates::{AuthGate, EntryGate};

mod entry;
pub use entry::Entry;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod home;
pub use home::Home;

mod vote;
pub use vote::Vote;

mod hall_of_fame;
pub use hall_of_fame::HallOfFame;

mod invite;
pub use invite::Invite;

mod broadcast;
pub use broadcast::Broadcast;

mod records;
pub use records::Records;
