pub mod allergy;
pub mod recommend;
pub mod tags;

pub use allergy::{AllergyProfile, SafetyPartition, can_use, display_list, partition_by_safety};
pub use recommend::select_recommendation;
pub use tags::{AppliedFilterSet, apply_tag_filters};
