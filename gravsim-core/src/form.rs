//! Typed input for creating and editing bodies
//!
//! Every field is free text as typed by the user. A blank field means "use
//! the fallback", which is a configured default when creating a body and the
//! body's current value when editing one.

use crate::error::ValidationError;

/// User-entered attributes of a body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodyForm {
    pub name: String,
    pub mass: String,
    pub radius: String,
    pub velocity_x: String,
    pub velocity_y: String,
    pub position_x: String,
    pub position_y: String,
}

impl BodyForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_mass(mut self, mass: impl Into<String>) -> Self {
        self.mass = mass.into();
        self
    }

    pub fn with_radius(mut self, radius: impl Into<String>) -> Self {
        self.radius = radius.into();
        self
    }

    pub fn with_velocity(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.velocity_x = x.into();
        self.velocity_y = y.into();
        self
    }

    pub fn with_position(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.position_x = x.into();
        self.position_y = y.into();
        self
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Name, or `None` when left blank
    pub fn name(&self) -> Option<&str> {
        let name = self.name.trim();
        (!name.is_empty()).then_some(name)
    }

    pub fn mass(&self) -> Result<Option<f64>, ValidationError> {
        parse_positive(&self.mass, "mass")
    }

    pub fn radius(&self) -> Result<Option<f64>, ValidationError> {
        parse_positive(&self.radius, "radius")
    }

    pub fn velocity_x(&self) -> Result<Option<f64>, ValidationError> {
        parse_decimal(&self.velocity_x, "velocity_x")
    }

    pub fn velocity_y(&self) -> Result<Option<f64>, ValidationError> {
        parse_decimal(&self.velocity_y, "velocity_y")
    }

    pub fn position_x(&self) -> Result<Option<f64>, ValidationError> {
        parse_decimal(&self.position_x, "position_x")
    }

    pub fn position_y(&self) -> Result<Option<f64>, ValidationError> {
        parse_decimal(&self.position_y, "position_y")
    }
}

/// Parse an optional decimal field. Accepts `,` as the decimal separator.
///
/// Blank input yields `Ok(None)`. Anything else must parse to a finite number.
pub fn parse_decimal(text: &str, field: &'static str) -> Result<Option<f64>, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let value: f64 = text
        .replace(',', ".")
        .parse()
        .map_err(|_| ValidationError::InvalidNumber { field })?;
    if !value.is_finite() {
        return Err(ValidationError::InvalidNumber { field });
    }
    Ok(Some(value))
}

/// Like [`parse_decimal`], but zero and negative values are rejected too
pub fn parse_positive(text: &str, field: &'static str) -> Result<Option<f64>, ValidationError> {
    match parse_decimal(text, field)? {
        Some(value) if value <= 0.0 => Err(ValidationError::InvalidNumber { field }),
        other => Ok(other),
    }
}
