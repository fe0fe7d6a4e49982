use serde::Serialize;
use serde_json::Value;

use super::mathphysics::{Point2D, Position};
use super::validation::{check_point, is_truthy, PointViolation};

pub use enemies::*;


pub mod enemies;


pub const KEY_ALLIES: &str       = "allies";
pub const KEY_COORDINATES: &str  = "coordinates";
pub const KEY_ENEMIES: &str      = "enemies";
pub const KEY_ENEMY_NUMBER: &str = "number";
pub const KEY_ENEMY_TYPE: &str   = "type";
pub const KEY_X: &str            = "x";
pub const KEY_Y: &str            = "y";


pub type Scan = Vec<ScanPoint>;


// Numeric coercion for values that passed the key-presence check.
fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        None | Some(Value::Null) => 0.0,
        Some(Value::Bool(b))     => f64::from(u8::from(*b)),
        Some(Value::Number(n))   => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s))   => {
            let trimmed = s.trim();

            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse().unwrap_or(f64::NAN)
            }
        },
        Some(_)                  => f64::NAN,
    }
}

fn coerce_count(value: Option<&Value>) -> u64 {
    value
        .and_then(Value::as_u64)
        .unwrap_or_default()
}

fn coerce_allies(value: Option<&Value>) -> Option<u32> {
    let value = value.filter(|value| is_truthy(value))?;

    let count = value
        .as_u64()
        .and_then(|count| u32::try_from(count).ok())
        .unwrap_or(1);

    Some(count)
}


#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScanPoint {
    coordinates: Point2D,
    enemies: EnemyInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    allies: Option<u32>,
}

impl ScanPoint {
    #[must_use]
    pub fn new(
        coordinates: Point2D,
        enemies: EnemyInfo,
        allies: Option<u32>
    ) -> Self {
        Self {
            coordinates,
            enemies,
            allies: allies.filter(|count| *count > 0),
        }
    }

    #[must_use]
    pub fn coordinates(&self) -> Point2D {
        self.coordinates
    }

    #[must_use]
    pub fn enemies(&self) -> &EnemyInfo {
        &self.enemies
    }

    #[must_use]
    pub fn allies(&self) -> Option<u32> {
        self.allies
    }

    #[must_use]
    pub fn has_allies(&self) -> bool {
        self.allies.is_some()
    }

    #[must_use]
    pub fn has_mech(&self) -> bool {
        self.enemies.enemy_type().is_mech()
    }
}

impl Position for ScanPoint {
    fn position(&self) -> &Point2D {
        &self.coordinates
    }
}

impl TryFrom<&Value> for ScanPoint {
    type Error = PointViolation;

    fn try_from(point: &Value) -> Result<Self, Self::Error> {
        check_point(point)?;

        let coordinates = &point[KEY_COORDINATES];
        let enemies     = &point[KEY_ENEMIES];

        let enemy_type = enemies[KEY_ENEMY_TYPE]
            .as_str()
            .and_then(EnemyType::from_name)
            .ok_or(PointViolation::MissingEnemyType)?;

        Ok(Self::new(
            Point2D::new(
                coerce_number(coordinates.get(KEY_X)),
                coerce_number(coordinates.get(KEY_Y)),
            ),
            EnemyInfo::new(
                enemy_type,
                coerce_count(enemies.get(KEY_ENEMY_NUMBER))
            ),
            coerce_allies(point.get(KEY_ALLIES)),
        ))
    }
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;


    fn point_from(value: &Value) -> ScanPoint {
        ScanPoint::try_from(value)
            .unwrap_or_else(|error| panic!("{}", error))
    }


    #[test]
    fn scan_point_is_built_from_json() {
        let point = point_from(&json!({
            "coordinates": { "x": 0, "y": 80 },
            "allies": 5,
            "enemies": { "type": "mech", "number": 1 }
        }));

        assert_eq!(point.coordinates(), Point2D::new(0.0, 80.0));
        assert_eq!(point.enemies().enemy_type(), EnemyType::Mech);
        assert_eq!(point.enemies().number(), 1);
        assert_eq!(point.allies(), Some(5));
        assert!(point.has_mech());
        assert!(point.has_allies());
    }

    #[test]
    fn zero_or_absent_allies_mean_no_allies() {
        let without_key = point_from(&json!({
            "coordinates": { "x": 1, "y": 1 },
            "enemies": { "type": "soldier", "number": 3 }
        }));
        let with_zero = point_from(&json!({
            "coordinates": { "x": 1, "y": 1 },
            "allies": 0,
            "enemies": { "type": "soldier", "number": 3 }
        }));

        assert!(!without_key.has_allies());
        assert!(!with_zero.has_allies());
        assert!(!ScanPoint::new(
            Point2D::default(),
            EnemyInfo::new(EnemyType::Soldier, 1),
            Some(0)
        ).has_allies());
    }

    #[test]
    fn truthy_non_count_allies_mean_allies_present() {
        let point = point_from(&json!({
            "coordinates": { "x": 1, "y": 1 },
            "allies": true,
            "enemies": { "type": "soldier", "number": 3 }
        }));

        assert_eq!(point.allies(), Some(1));
    }

    #[test]
    fn loose_coordinate_values_are_coerced() {
        let point = point_from(&json!({
            "coordinates": { "x": null, "y": "35" },
            "enemies": { "type": "soldier", "number": "ten" }
        }));

        assert_eq!(point.coordinates(), Point2D::new(0.0, 35.0));
        assert_eq!(point.enemies().number(), 0);

        let garbage = point_from(&json!({
            "coordinates": { "x": "far", "y": 1 },
            "enemies": { "type": "soldier", "number": 1 }
        }));

        assert!(garbage.coordinates().x.is_nan());
    }

    #[test]
    fn structurally_invalid_point_is_rejected() {
        let result = ScanPoint::try_from(&json!({
            "coordinates": { "x": 1, "y": 1 },
            "enemies": { "type": "tank", "number": 1 }
        }));

        assert!(matches!(result, Err(PointViolation::UnknownEnemyType(_))));
    }

    #[test]
    fn scan_point_serializes_without_empty_allies() {
        let point = ScanPoint::new(
            Point2D::new(0.0, 40.0),
            EnemyInfo::new(EnemyType::Soldier, 10),
            None
        );

        let json = serde_json::to_value(point)
            .unwrap_or_else(|error| panic!("{}", error));

        assert_eq!(json, json!({
            "coordinates": { "x": 0.0, "y": 40.0 },
            "enemies": { "type": "soldier", "number": 10 }
        }));
    }
}
