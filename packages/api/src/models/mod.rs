//! Wire models for the backend's REST surface.
//!
//! The backend owns every entity; these types only describe what crosses the
//! wire. Optional fields default when absent so that a backend adding or
//! dropping a column does not break decoding.

mod envelope;
mod hall_of_fame;
mod record;
mod user;
mod vote;

pub use envelope::{Ack, Envelope, STATUS_OK};
pub use hall_of_fame::{Architect, Broadcast, HallOfFameMessage};
pub use record::{
    EraseSummary, ImageUpload, LikeState, NewRecord, Record, RestoreSummary, Snapshot,
};
pub use user::{
    Credentials, EntryPassword, EntryVerdict, Invitation, LoginResponse, Registration,
    RegisterResponse, UserInfo,
};
pub use vote::{BanCandidate, Ballot, Vote, VoteChoice};
