pub mod tracker_view_model;

pub use tracker_view_model::{ChartSeries, SubmitButton, TrackerViewModel};
