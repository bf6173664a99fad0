mod fan_out;
mod relay_engine;

pub use fan_out::*;
pub use relay_engine::*;
