//! Instance data model.
//!
//! An [`Instance`] describes the sequencing problem: the number of
//! positions, the option capacity rules, the car classes with their colors
//! and option requirements, the baseline production plan and the fixed
//! prefix length. Instances are built from an [`InstanceData`] parameter
//! set and never change afterwards.

mod data;
mod model;
mod types;

pub use data::InstanceData;
pub use model::Instance;
pub use types::{CarClass, CarOption, ObjectiveOrder};
