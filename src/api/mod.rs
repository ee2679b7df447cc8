mod chart_model;
mod data_controller;
mod engine;
mod engine_config;
mod events;
mod hit_resolver;
mod interaction_controller;
mod render_frame_builder;

pub use data_controller::{DataProvider, DataRequest};
pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use events::{ChartEvent, ChartObserver};
