//! Deterministic doubles for exercising the newsdesk pipeline offline.

mod clock;
mod connector;
mod fixtures;
mod translate;

pub use clock::ManualClock;
pub use connector::{MockBehavior, MockConnector, MockConnectorBuilder};
pub use fixtures::{item, items};
pub use translate::{LatencyTranslator, MockTranslationBackend};
