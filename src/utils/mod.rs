pub mod query;

pub use query::{
    NavigationTarget, SubmissionPayload, build_navigation_target, decode_query_component,
    encode_query_component,
};
