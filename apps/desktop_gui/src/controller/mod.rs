//! Controller layer: backend events consumed by the UI and command
//! orchestration from UI actions to the backend queue.

pub mod events;
pub mod orchestration;
