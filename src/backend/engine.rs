use derive_more::Display;
use log::{debug, warn};
use serde_json::Value;

use super::ENGAGEMENT_RADIUS;
use super::coordinates::common_coordinates;
use super::mathphysics::{Point2D, Position};
use super::protocol::{Protocol, ProtocolCategory};
use super::scan::ScanPoint;
use super::validation::{validate, RequestError};


pub const KEY_PROTOCOLS: &str = "protocols";
pub const KEY_SCAN: &str      = "scan";


#[derive(Clone, Copy, Debug, PartialEq, Display)]
pub enum Resolution {
    #[display("found {_0}")]
    Found(Point2D),
    #[display("not found")]
    NotFound,
}

impl Resolution {
    #[must_use]
    pub fn target(&self) -> Option<Point2D> {
        match self {
            Self::Found(target) => Some(*target),
            Self::NotFound      => None,
        }
    }

    fn from_first(coordinates: Option<&Point2D>) -> Self {
        coordinates.map_or(Self::NotFound, |target| Self::Found(*target))
    }
}


// Coordinate lists produced by the requested protocols, split by category.
#[derive(Default)]
struct CategorizedLists {
    ordering: Vec<Vec<Point2D>>,
    filtering: Vec<Vec<Point2D>>,
}

impl CategorizedLists {
    fn push(&mut self, name: &str, coordinates: Vec<Point2D>) {
        match ProtocolCategory::from_name(name) {
            Some(ProtocolCategory::Ordering)  =>
                self.ordering.push(coordinates),
            Some(ProtocolCategory::Filtering) =>
                self.filtering.push(coordinates),
            None => debug!("Protocol `{name}` has no category, result dropped"),
        }
    }

    // Only the first ordering result is ever consulted.
    fn into_ordering_and_filtering(
        self
    ) -> (Option<Vec<Point2D>>, Vec<Vec<Point2D>>) {
        if self.ordering.len() > 1 {
            warn!(
                "{} ordering protocols requested, only the first one is used",
                self.ordering.len()
            );
        }

        (self.ordering.into_iter().next(), self.filtering)
    }
}


#[must_use]
pub fn prune_out_of_range(scan: &[ScanPoint]) -> Vec<ScanPoint> {
    scan
        .iter()
        .filter(|point| point.distance_from_origin() <= ENGAGEMENT_RADIUS)
        .copied()
        .collect()
}

fn coordinates_per_protocol<S: AsRef<str>>(
    protocols: &[S],
    in_range: &[ScanPoint]
) -> CategorizedLists {
    let mut lists = CategorizedLists::default();

    for name in protocols {
        let name = name.as_ref();
        let coordinates: Vec<Point2D> = Protocol::from_name(name)
            .apply(in_range)
            .iter()
            .map(ScanPoint::coordinates)
            .collect();

        debug!("Protocol `{name}` kept {} point(s)", coordinates.len());

        lists.push(name, coordinates);
    }

    lists
}

/// Picks the single coordinate to engage next.
///
/// Points outside the engagement radius are discarded, every protocol is
/// run over the remaining points, filtering results are intersected and
/// the first ordering result, if any, decides which common point wins.
///
/// # Errors
///
/// Will return `Err` if `protocols` or `scan` is empty.
pub fn resolve_target<S: AsRef<str>>(
    protocols: &[S],
    scan: &[ScanPoint]
) -> Result<Resolution, RequestError> {
    if protocols.is_empty() {
        return Err(RequestError::NoProtocols);
    }
    if scan.is_empty() {
        return Err(RequestError::NoScan);
    }

    let in_range = prune_out_of_range(scan);

    debug!(
        "{} of {} point(s) within engagement radius",
        in_range.len(),
        scan.len()
    );

    if in_range.is_empty() {
        return Ok(Resolution::NotFound);
    }

    let (ordered, filtered) = coordinates_per_protocol(protocols, &in_range)
        .into_ordering_and_filtering();

    if filtered.is_empty() {
        let ordered = ordered.unwrap_or_default();

        return Ok(Resolution::from_first(ordered.first()));
    }

    let common = common_coordinates(&filtered);

    debug!("{} point(s) satisfy every filtering protocol", common.len());

    let resolution = match ordered {
        None          => Resolution::from_first(common.first()),
        Some(ordered) => Resolution::from_first(
            ordered
                .iter()
                .find(|coordinates| common.contains(coordinates))
        ),
    };

    Ok(resolution)
}

/// Resolves a raw request body of the form `{"protocols": [..], "scan": [..]}`.
///
/// # Errors
///
/// Will return `Err` if the body is not an object or fails validation.
pub fn resolve_request(body: &Value) -> Result<Resolution, RequestError> {
    let Some(fields) = body.as_object() else {
        return Err(RequestError::MalformedBody(
            "expected a JSON object".to_string()
        ));
    };

    let protocols = fields.get(KEY_PROTOCOLS);
    let scan      = fields.get(KEY_SCAN);

    validate(protocols, scan)?;

    let protocol_names: Vec<&str> = protocols
        .and_then(Value::as_array)
        .map(|list| list.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let scan_points = scan
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(index, point)| {
            ScanPoint::try_from(point)
                .map_err(|reason| RequestError::InvalidPoint { index, reason })
        })
        .collect::<Result<Vec<_>, _>>()?;

    resolve_target(&protocol_names, &scan_points)
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::backend::scan::{EnemyInfo, EnemyType};

    use super::*;


    fn soldier(x: f64, y: f64) -> ScanPoint {
        ScanPoint::new(
            Point2D::new(x, y),
            EnemyInfo::new(EnemyType::Soldier, 10),
            None
        )
    }

    fn mech(x: f64, y: f64) -> ScanPoint {
        ScanPoint::new(
            Point2D::new(x, y),
            EnemyInfo::new(EnemyType::Mech, 1),
            None
        )
    }

    fn with_allies(point: ScanPoint, allies: u32) -> ScanPoint {
        ScanPoint::new(point.coordinates(), *point.enemies(), Some(allies))
    }

    fn resolve(protocols: &[&str], scan: &[ScanPoint]) -> Resolution {
        resolve_target(protocols, scan)
            .unwrap_or_else(|error| panic!("{}", error))
    }

    fn soldier_and_mech_with_allies() -> Vec<ScanPoint> {
        vec![soldier(0.0, 40.0), with_allies(mech(0.0, 80.0), 5)]
    }


    #[test]
    fn avoid_mech_picks_soldier() {
        assert_eq!(
            resolve(&["avoid-mech"], &soldier_and_mech_with_allies()),
            Resolution::Found(Point2D::new(0.0, 40.0))
        );
    }

    #[test]
    fn prioritize_mech_picks_mech() {
        assert_eq!(
            resolve(&["prioritize-mech"], &soldier_and_mech_with_allies()),
            Resolution::Found(Point2D::new(0.0, 80.0))
        );
    }

    #[test]
    fn closest_enemies_picks_nearest_point() {
        let scan = [soldier(5.0, 35.0), soldier(10.0, 30.0)];

        assert_eq!(
            resolve(&["closest-enemies"], &scan),
            Resolution::Found(Point2D::new(10.0, 30.0))
        );
        assert_eq!(
            resolve(&["furthest-enemies"], &scan),
            Resolution::Found(Point2D::new(5.0, 35.0))
        );
    }

    #[test]
    fn ordering_and_filtering_are_reconciled() {
        let scan = [mech(0.0, 1.0), soldier(0.0, 10.0), mech(0.0, 99.0)];

        assert_eq!(
            resolve(&["closest-enemies", "avoid-mech"], &scan),
            Resolution::Found(Point2D::new(0.0, 10.0))
        );
        assert_eq!(
            resolve(&["avoid-mech", "furthest-enemies"], &scan),
            Resolution::Found(Point2D::new(0.0, 10.0))
        );
        assert_eq!(
            resolve(&["furthest-enemies", "prioritize-mech"], &scan),
            Resolution::Found(Point2D::new(0.0, 99.0))
        );
    }

    #[test]
    fn empty_input_is_request_error() {
        let scan = soldier_and_mech_with_allies();
        let no_protocols: [&str; 0] = [];

        assert!(matches!(
            resolve_target(&no_protocols, &scan),
            Err(RequestError::NoProtocols)
        ));
        assert!(matches!(
            resolve_target(&["avoid-mech"], &[]),
            Err(RequestError::NoScan)
        ));
    }

    #[test]
    fn points_beyond_radius_are_not_found() {
        let scan = [soldier(0.0, 101.0), mech(80.0, 80.0)];

        assert_eq!(resolve(&["closest-enemies"], &scan), Resolution::NotFound);
    }

    #[test]
    fn radius_boundary_is_inclusive() {
        let on_boundary      = soldier(60.0, 80.0);
        let just_beyond      = soldier(0.0, 100.0001);
        let also_on_boundary = soldier(0.0, -100.0);

        let in_range = prune_out_of_range(
            &[on_boundary, just_beyond, also_on_boundary]
        );

        assert_eq!(in_range, vec![on_boundary, also_on_boundary]);
    }

    #[test]
    fn two_filtering_protocols_are_intersected() {
        let scan = [
            with_allies(soldier(0.0, 5.0), 2),
            mech(0.0, 6.0),
            with_allies(mech(0.0, 7.0), 1),
        ];

        assert_eq!(
            resolve(&["assist-allies", "prioritize-mech"], &scan),
            Resolution::Found(Point2D::new(0.0, 7.0))
        );
        assert_eq!(
            resolve(&["avoid-crossfire", "avoid-mech"], &scan),
            Resolution::NotFound
        );
    }

    #[test]
    fn disjoint_ordering_and_filtering_is_not_found() {
        let scan = [soldier(0.0, 5.0), soldier(0.0, 6.0)];

        assert_eq!(
            resolve(&["closest-enemies", "prioritize-mech"], &scan),
            Resolution::NotFound
        );
    }

    #[test]
    fn only_first_ordering_protocol_is_used() {
        let scan = [soldier(0.0, 5.0), soldier(0.0, 50.0)];

        assert_eq!(
            resolve(&["furthest-enemies", "closest-enemies"], &scan),
            Resolution::Found(Point2D::new(0.0, 50.0))
        );
    }

    #[test]
    fn filtering_protocols_beyond_second_are_ignored() {
        let scan = [
            with_allies(mech(0.0, 5.0), 1),
            mech(0.0, 6.0),
        ];

        assert_eq!(
            resolve(&["prioritize-mech", "assist-allies", "avoid-mech"], &scan),
            Resolution::Found(Point2D::new(0.0, 5.0))
        );
    }

    #[test]
    fn unrecognized_protocol_result_is_dropped() {
        let scan = [mech(0.0, 5.0), soldier(0.0, 50.0)];

        assert_eq!(
            resolve(&["closest-enemies", "charge"], &scan),
            Resolution::Found(Point2D::new(0.0, 5.0))
        );
        assert_eq!(resolve(&["charge"], &scan), Resolution::NotFound);
    }

    #[test]
    fn duplicated_protocols_are_processed_independently() {
        let scan = [mech(0.0, 5.0), soldier(0.0, 50.0)];

        assert_eq!(
            resolve(&["avoid-mech", "avoid-mech"], &scan),
            Resolution::Found(Point2D::new(0.0, 50.0))
        );
    }

    #[test]
    fn resolving_is_deterministic() {
        let scan      = [mech(3.0, 4.0), soldier(4.0, 3.0), soldier(0.0, 5.0)];
        let protocols = ["furthest-enemies", "avoid-mech"];

        assert_eq!(resolve(&protocols, &scan), resolve(&protocols, &scan));
        assert_eq!(
            resolve(&protocols, &scan),
            Resolution::Found(Point2D::new(4.0, 3.0))
        );
    }

    #[test]
    fn raw_request_is_validated_and_resolved() {
        let body = json!({
            "protocols": ["closest-enemies", "avoid-mech"],
            "scan": [
                { "coordinates": { "x": 0, "y": 1 },
                  "enemies": { "type": "mech", "number": 1 } },
                { "coordinates": { "x": 0, "y": 10 },
                  "enemies": { "type": "soldier", "number": 10 } },
                { "coordinates": { "x": 0, "y": 99 },
                  "enemies": { "type": "mech", "number": 1 } }
            ]
        });

        assert_eq!(
            resolve_request(&body),
            Ok(Resolution::Found(Point2D::new(0.0, 10.0)))
        );
    }

    #[test]
    fn raw_request_must_be_an_object() {
        assert!(matches!(
            resolve_request(&json!([1, 2])),
            Err(RequestError::MalformedBody(_))
        ));
        assert!(matches!(
            resolve_request(&json!({ "scan": [] })),
            Err(RequestError::NoProtocols)
        ));
    }
}
