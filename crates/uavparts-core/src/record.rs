use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::component::ComponentKind;

/// A constructed record violated a required-field invariant.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("required field `{0}` is empty")]
    EmptyField(&'static str),
}

/// Fields shared by every component record, validated on construction.
///
/// `url` and `name` must be non-empty; `image` and `price` are best-effort
/// reads from the product page and may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommonFields {
    pub url: String,
    pub image: Option<String>,
    pub price: Option<String>,
    pub name: String,
}

impl CommonFields {
    /// Builds the common field set, rejecting empty `url` or `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyField`] naming the offending field.
    pub fn new(
        url: impl Into<String>,
        image: Option<String>,
        price: Option<String>,
        name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let url = url.into();
        let name = name.into();
        if url.trim().is_empty() {
            return Err(ValidationError::EmptyField("url"));
        }
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyField("name"));
        }
        Ok(Self {
            url,
            image,
            price,
            name,
        })
    }
}

/// Extracted specifications for a battery pack.
///
/// Attribute fields are `None` when no pattern matched the product text —
/// "unknown" is a value here, never a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatteryRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    pub capacity_mah: Option<u64>,
    pub voltage_v: Option<f64>,
    pub discharge_c: Option<u64>,
    pub cell_shape: Option<String>,
}

/// Extracted specifications for a brushless motor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotorRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    pub kv_rating: Option<u64>,
    pub voltage_v: Option<f64>,
    pub weight_g: Option<f64>,
}

/// Extracted specifications for a flight controller board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightControllerRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    pub voltage_v: Option<f64>,
    pub weight_g: Option<f64>,
}

/// Catch-all record for kinds without a dedicated attribute set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    pub component: ComponentKind,
}

/// The typed result for one crawled product page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComponentRecord {
    Battery(BatteryRecord),
    ElectricMotor(MotorRecord),
    FlightController(FlightControllerRecord),
    Generic(GenericRecord),
}

impl ComponentRecord {
    #[must_use]
    pub fn common(&self) -> &CommonFields {
        match self {
            ComponentRecord::Battery(r) => &r.common,
            ComponentRecord::ElectricMotor(r) => &r.common,
            ComponentRecord::FlightController(r) => &r.common,
            ComponentRecord::Generic(r) => &r.common,
        }
    }
}
