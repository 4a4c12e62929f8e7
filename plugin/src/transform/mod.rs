//! Column value normalization

pub mod time;

pub use time::{
    TransformError, json_time_to_datetime, seconds_str_to_datetime, seconds_to_datetime,
};
