pub mod component;
pub mod config;
pub mod record;
pub mod result;

pub use component::{AttrValue, AttributeKind, ComponentKind};
pub use config::{load_config, AppConfig, ConfigError};
pub use record::{
    BatteryRecord, CommonFields, ComponentRecord, FlightControllerRecord, GenericRecord,
    MotorRecord, ValidationError,
};
pub use result::CrawlResult;
