use serde_json::{Map, Value};
use thiserror::Error;

use super::scan::{
    EnemyType, KEY_COORDINATES, KEY_ENEMIES, KEY_ENEMY_NUMBER, KEY_ENEMY_TYPE,
    KEY_X, KEY_Y
};


#[derive(Error, Debug, Clone, PartialEq)]
pub enum PointViolation {
    #[error("`coordinates` is missing")]
    MissingCoordinates,
    #[error("`enemies` is missing")]
    MissingEnemies,
    #[error("`coordinates.x` is missing")]
    MissingX,
    #[error("`coordinates.y` is missing")]
    MissingY,
    #[error("`enemies.type` is missing")]
    MissingEnemyType,
    #[error("`enemies.number` is missing")]
    MissingEnemyNumber,
    #[error("Enemy type `{0}` is not one of `soldier`, `mech`")]
    UnknownEnemyType(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequestError {
    #[error("Body is not a well-formed request: {0}")]
    MalformedBody(String),
    #[error("No protocols were requested")]
    NoProtocols,
    #[error("`protocols` is not a list")]
    ProtocolsNotAList,
    #[error("Protocol at index {index} is not a string")]
    ProtocolNotAString { index: usize },
    #[error("No scan points were provided")]
    NoScan,
    #[error("`scan` is not a list")]
    ScanNotAList,
    #[error("Scan point at index {index} is invalid: {reason}")]
    InvalidPoint { index: usize, reason: PointViolation },
}


// Mirrors the truthiness rules of loosely typed JSON producers: `null`,
// `false`, `0`, `NaN` and `""` are falsy, everything else is truthy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null      => false,
        Value::Bool(b)   => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|value| is_truthy(value))
}

fn keys_of<'a>(
    value: &'a Value,
    missing_object: PointViolation
) -> Result<&'a Map<String, Value>, PointViolation> {
    value.as_object().ok_or(missing_object)
}

/// # Errors
///
/// Will return `Err` naming the first structural problem of the point.
/// Only key presence is checked for `x`, `y` and `number`, their values may
/// be of any type including `null`.
pub fn check_point(point: &Value) -> Result<(), PointViolation> {
    let coordinates = present(point.get(KEY_COORDINATES))
        .ok_or(PointViolation::MissingCoordinates)?;
    let enemies = present(point.get(KEY_ENEMIES))
        .ok_or(PointViolation::MissingEnemies)?;

    let coordinates = keys_of(coordinates, PointViolation::MissingX)?;

    if !coordinates.contains_key(KEY_X) {
        return Err(PointViolation::MissingX);
    }
    if !coordinates.contains_key(KEY_Y) {
        return Err(PointViolation::MissingY);
    }

    let enemies = keys_of(enemies, PointViolation::MissingEnemyType)?;

    let Some(enemy_type) = enemies.get(KEY_ENEMY_TYPE) else {
        return Err(PointViolation::MissingEnemyType);
    };
    if !enemies.contains_key(KEY_ENEMY_NUMBER) {
        return Err(PointViolation::MissingEnemyNumber);
    }

    match enemy_type.as_str().and_then(EnemyType::from_name) {
        Some(_) => Ok(()),
        None    => Err(PointViolation::UnknownEnemyType(
            enemy_type.as_str().map_or_else(
                || enemy_type.to_string(),
                str::to_string
            )
        )),
    }
}

fn check_protocols(protocols: Option<&Value>) -> Result<(), RequestError> {
    let Some(protocols) = present(protocols) else {
        return Err(RequestError::NoProtocols);
    };
    let Some(protocol_list) = protocols.as_array() else {
        return Err(RequestError::ProtocolsNotAList);
    };

    if protocol_list.is_empty() {
        return Err(RequestError::NoProtocols);
    }

    match protocol_list.iter().position(|protocol| !protocol.is_string()) {
        Some(index) => Err(RequestError::ProtocolNotAString { index }),
        None        => Ok(()),
    }
}

fn check_scan(scan: Option<&Value>) -> Result<(), RequestError> {
    let Some(scan) = present(scan) else {
        return Err(RequestError::NoScan);
    };
    let Some(point_list) = scan.as_array() else {
        return Err(RequestError::ScanNotAList);
    };

    if point_list.is_empty() {
        return Err(RequestError::NoScan);
    }

    for (index, point) in point_list.iter().enumerate() {
        check_point(point)
            .map_err(|reason| RequestError::InvalidPoint { index, reason })?;
    }

    Ok(())
}

/// # Errors
///
/// Will return `Err` if protocols or scan are absent or empty, are not
/// lists, or if any scan point is structurally invalid.
pub fn validate(
    protocols: Option<&Value>,
    scan: Option<&Value>
) -> Result<(), RequestError> {
    check_protocols(protocols)?;
    check_scan(scan)
}

#[must_use]
pub fn is_invalid(protocols: Option<&Value>, scan: Option<&Value>) -> bool {
    validate(protocols, scan).is_err()
}
