use derive_more::Display;
use log::warn;

use super::mathphysics::Position;
use super::scan::ScanPoint;


pub const PROTOCOL_CLOSEST_ENEMIES: &str  = "closest-enemies";
pub const PROTOCOL_FURTHEST_ENEMIES: &str = "furthest-enemies";
pub const PROTOCOL_ASSIST_ALLIES: &str    = "assist-allies";
pub const PROTOCOL_AVOID_CROSSFIRE: &str  = "avoid-crossfire";
pub const PROTOCOL_PRIORITIZE_MECH: &str  = "prioritize-mech";
pub const PROTOCOL_AVOID_MECH: &str       = "avoid-mech";

pub const ORDERING_PROTOCOLS: [&str; 2] = [
    PROTOCOL_CLOSEST_ENEMIES,
    PROTOCOL_FURTHEST_ENEMIES,
];
pub const FILTERING_PROTOCOLS: [&str; 4] = [
    PROTOCOL_ASSIST_ALLIES,
    PROTOCOL_AVOID_CROSSFIRE,
    PROTOCOL_PRIORITIZE_MECH,
    PROTOCOL_AVOID_MECH,
];


#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display)]
pub enum ProtocolCategory {
    // Reorders points, never drops them.
    #[display("ordering")]
    Ordering,
    // Drops points, keeps the relative order of the survivors.
    #[display("filtering")]
    Filtering,
}

impl ProtocolCategory {
    /// Category membership is decided by name, so an unrecognized name
    /// belongs to no category.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if ORDERING_PROTOCOLS.contains(&name) {
            Some(Self::Ordering)
        } else if FILTERING_PROTOCOLS.contains(&name) {
            Some(Self::Filtering)
        } else {
            None
        }
    }
}


#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display)]
pub enum Protocol {
    #[display("closest-enemies")]
    ClosestEnemies,
    #[display("furthest-enemies")]
    FurthestEnemies,
    #[display("assist-allies")]
    AssistAllies,
    #[display("avoid-crossfire")]
    AvoidCrossfire,
    #[display("prioritize-mech")]
    PrioritizeMech,
    #[display("avoid-mech")]
    AvoidMech,
}

impl Protocol {
    pub const ALL: [Self; 6] = [
        Self::ClosestEnemies,
        Self::FurthestEnemies,
        Self::AssistAllies,
        Self::AvoidCrossfire,
        Self::PrioritizeMech,
        Self::AvoidMech,
    ];

    /// Looks a protocol up by name. Unrecognized names resolve to
    /// `avoid-mech` instead of failing.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            PROTOCOL_CLOSEST_ENEMIES  => Self::ClosestEnemies,
            PROTOCOL_FURTHEST_ENEMIES => Self::FurthestEnemies,
            PROTOCOL_ASSIST_ALLIES    => Self::AssistAllies,
            PROTOCOL_AVOID_CROSSFIRE  => Self::AvoidCrossfire,
            PROTOCOL_PRIORITIZE_MECH  => Self::PrioritizeMech,
            PROTOCOL_AVOID_MECH       => Self::AvoidMech,
            _                         => {
                warn!("Unrecognized protocol `{name}`, using `avoid-mech`");

                Self::AvoidMech
            },
        }
    }

    #[must_use]
    pub fn category(&self) -> ProtocolCategory {
        match self {
            Self::ClosestEnemies | Self::FurthestEnemies =>
                ProtocolCategory::Ordering,
            _ => ProtocolCategory::Filtering,
        }
    }

    /// Produces a new collection, `scan` itself is left untouched.
    #[must_use]
    pub fn apply(&self, scan: &[ScanPoint]) -> Vec<ScanPoint> {
        match self {
            Self::ClosestEnemies  => sorted_by_distance(scan, false),
            Self::FurthestEnemies => sorted_by_distance(scan, true),
            Self::AssistAllies    => filtered(scan, ScanPoint::has_allies),
            Self::AvoidCrossfire  => filtered(scan, |point| !point.has_allies()),
            Self::PrioritizeMech  => filtered(scan, ScanPoint::has_mech),
            Self::AvoidMech       => filtered(scan, |point| !point.has_mech()),
        }
    }
}


// Stable, so points at equal distance keep their detection order.
fn sorted_by_distance(scan: &[ScanPoint], descending: bool) -> Vec<ScanPoint> {
    let mut sorted = scan.to_vec();

    sorted.sort_by(|a, b| {
        let ordering = a.distance_from_origin()
            .total_cmp(&b.distance_from_origin());

        if descending { ordering.reverse() } else { ordering }
    });

    sorted
}

fn filtered<F>(scan: &[ScanPoint], keep: F) -> Vec<ScanPoint>
where
    F: Fn(&ScanPoint) -> bool,
{
    scan
        .iter()
        .filter(|point| keep(*point))
        .copied()
        .collect()
}
