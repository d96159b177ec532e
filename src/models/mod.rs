//! Simulation domain models.
//!
//! Provides the data types shared by every pipeline stage: the process
//! descriptor (input, tagged by the mitigator) and the timeline of
//! execution segments (engine output).
//!
//! # Domain Mappings
//!
//! | u-procsched | OS textbook |
//! |-------------|-------------|
//! | ProcessDescriptor | PCB entry |
//! | Segment | Gantt bar |
//! | Timeline | Gantt chart |

mod process;
mod timeline;

pub use process::ProcessDescriptor;
pub use timeline::{Segment, Timeline};
