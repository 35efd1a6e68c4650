pub mod encode;
pub mod gate;
pub mod models;
pub mod store;
pub mod submit;
pub mod transport;

pub use encode::{AreaRequest, WirePoint, encode};
pub use models::*;
pub use store::MarkerStore;
pub use submit::{SubmissionController, SubmissionState, SubmitOutcome};
pub use transport::{AreaTransport, TransportError};
