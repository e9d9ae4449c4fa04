use serde::{Deserialize, Serialize};

/// The category of drone part being searched for.
///
/// Closed set: each variant maps to a per-site listing request (when the
/// site carries the category) and to a record assembly routine. Sites that
/// do not offer a category simply skip it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Battery,
    Microcontroller,
    ElectricMotor,
    MotorController,
    FlightController,
    Lidar,
    MicroFlightController,
    Rangefinder,
    SatelliteCommModule,
    LeashingPlatform,
    ThermalCamera,
    UavCopterType,
    VideoTransmitter,
    Payload,
    ControlPanel,
}

impl ComponentKind {
    /// Every component kind, in declaration order.
    pub const ALL: &'static [ComponentKind] = &[
        ComponentKind::Battery,
        ComponentKind::Microcontroller,
        ComponentKind::ElectricMotor,
        ComponentKind::MotorController,
        ComponentKind::FlightController,
        ComponentKind::Lidar,
        ComponentKind::MicroFlightController,
        ComponentKind::Rangefinder,
        ComponentKind::SatelliteCommModule,
        ComponentKind::LeashingPlatform,
        ComponentKind::ThermalCamera,
        ComponentKind::UavCopterType,
        ComponentKind::VideoTransmitter,
        ComponentKind::Payload,
        ComponentKind::ControlPanel,
    ];

    /// Kebab-case name used on the command line and in logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKind::Battery => "battery",
            ComponentKind::Microcontroller => "microcontroller",
            ComponentKind::ElectricMotor => "electric-motor",
            ComponentKind::MotorController => "motor-controller",
            ComponentKind::FlightController => "flight-controller",
            ComponentKind::Lidar => "lidar",
            ComponentKind::MicroFlightController => "micro-flight-controller",
            ComponentKind::Rangefinder => "rangefinder",
            ComponentKind::SatelliteCommModule => "satellite-comm-module",
            ComponentKind::LeashingPlatform => "leashing-platform",
            ComponentKind::ThermalCamera => "thermal-camera",
            ComponentKind::UavCopterType => "uav-copter-type",
            ComponentKind::VideoTransmitter => "video-transmitter",
            ComponentKind::Payload => "payload",
            ComponentKind::ControlPanel => "control-panel",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ComponentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown component kind: {s}"))
    }
}

/// One physical quantity extractable from free-form product text.
///
/// Each kind has zero or more registered patterns per site; extraction tries
/// them in priority order and the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    /// Battery capacity in milliamp-hours.
    Capacity,
    /// Nominal voltage in volts.
    Voltage,
    /// Discharge rate as a C multiple.
    CurrentDischarge,
    /// Cell/pack configuration, e.g. `"4s"` or `"6s2p"`.
    Shape,
    /// Motor speed constant in RPM per volt.
    KvRating,
    /// Mass in grams.
    Weight,
}

/// A single coerced attribute value produced by one pattern match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Int(u64),
    Float(f64),
    Text(String),
}

impl AttrValue {
    #[must_use]
    pub fn as_int(&self) -> Option<u64> {
        match self {
            AttrValue::Int(v) => Some(*v),
            AttrValue::Float(_) | AttrValue::Text(_) => None,
        }
    }

    /// Returns the numeric value, widening `Int` to `f64`.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttrValue::Float(v) => Some(*v),
            #[allow(clippy::cast_precision_loss)]
            AttrValue::Int(v) => Some(*v as f64),
            AttrValue::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(v) => Some(v),
            AttrValue::Int(_) | AttrValue::Float(_) => None,
        }
    }
}
