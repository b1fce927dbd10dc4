//! Air quality measurement records

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::PollutantValues;
use crate::types::GpsCoordinates;

/// Header of the overall AQI column
pub const AQI_VALUE: &str = "AQI Value";
/// Header of the carbon monoxide sub-index column
pub const CO_AQI_VALUE: &str = "CO AQI Value";
/// Header of the ozone sub-index column
pub const OZONE_AQI_VALUE: &str = "Ozone AQI Value";
/// Header of the nitrogen dioxide sub-index column
pub const NO2_AQI_VALUE: &str = "NO2 AQI Value";
/// Header of the fine particulate sub-index column
pub const PM25_AQI_VALUE: &str = "PM2.5 AQI Value";
pub const LATITUDE: &str = "lat";
pub const LONGITUDE: &str = "lng";

/// One measurement row, keyed by the original CSV header strings.
///
/// Fields keep header order. Setting an existing field overwrites its value in
/// place, so a CSV with a repeated header keeps the last column's value at the
/// first column's position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AirQualityRecord {
    fields: Vec<(String, f64)>,
}

impl AirQualityRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record for a single location from pollutant sub-indices
    pub fn from_reading(aqi: f64, sub_indices: PollutantValues, location: GpsCoordinates) -> Self {
        Self::new()
            .with(AQI_VALUE, aqi)
            .with(CO_AQI_VALUE, sub_indices.co)
            .with(OZONE_AQI_VALUE, sub_indices.ozone)
            .with(NO2_AQI_VALUE, sub_indices.no2)
            .with(PM25_AQI_VALUE, sub_indices.pm25)
            .with(LATITUDE, location.latitude)
            .with(LONGITUDE, location.longitude)
    }

    /// Set a field, overwriting any existing value with the same name
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    /// Value of a field, or `0` when the record has no such column
    pub fn value_or_zero(&self, name: &str) -> f64 {
        self.get(name).unwrap_or(0.0)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, f64)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn aqi(&self) -> f64 {
        self.value_or_zero(AQI_VALUE)
    }

    pub fn co_aqi(&self) -> f64 {
        self.value_or_zero(CO_AQI_VALUE)
    }

    pub fn ozone_aqi(&self) -> f64 {
        self.value_or_zero(OZONE_AQI_VALUE)
    }

    pub fn no2_aqi(&self) -> f64 {
        self.value_or_zero(NO2_AQI_VALUE)
    }

    pub fn pm25_aqi(&self) -> f64 {
        self.value_or_zero(PM25_AQI_VALUE)
    }

    pub fn lat(&self) -> f64 {
        self.value_or_zero(LATITUDE)
    }

    pub fn lng(&self) -> f64 {
        self.value_or_zero(LONGITUDE)
    }

    pub fn coordinates(&self) -> GpsCoordinates {
        GpsCoordinates::new(self.lat(), self.lng())
    }

    pub fn sub_indices(&self) -> PollutantValues {
        PollutantValues {
            co: self.co_aqi(),
            ozone: self.ozone_aqi(),
            no2: self.no2_aqi(),
            pm25: self.pm25_aqi(),
        }
    }
}

impl Serialize for AirQualityRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = AirQualityRecord;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of column names to numbers")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut record = AirQualityRecord::new();
        while let Some((name, value)) = access.next_entry::<String, f64>()? {
            record.set(name, value);
        }
        Ok(record)
    }
}

impl<'de> Deserialize<'de> for AirQualityRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RecordVisitor)
    }
}
