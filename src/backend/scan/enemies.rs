use derive_more::Display;
use serde::{Deserialize, Serialize};


pub const ENEMY_SOLDIER: &str = "soldier";
pub const ENEMY_MECH: &str    = "mech";


#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Hash, Display, Serialize, Deserialize
)]
#[serde(rename_all = "lowercase")]
pub enum EnemyType {
    #[display("soldier")]
    Soldier,
    #[display("mech")]
    Mech,
}

impl EnemyType {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            ENEMY_SOLDIER => Some(Self::Soldier),
            ENEMY_MECH    => Some(Self::Mech),
            _             => None,
        }
    }

    #[must_use]
    pub fn is_mech(&self) -> bool {
        matches!(self, Self::Mech)
    }
}


#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct EnemyInfo {
    #[serde(rename = "type")]
    enemy_type: EnemyType,
    number: u64,
}

impl EnemyInfo {
    #[must_use]
    pub fn new(enemy_type: EnemyType, number: u64) -> Self {
        Self { enemy_type, number }
    }

    #[must_use]
    pub fn enemy_type(&self) -> EnemyType {
        self.enemy_type
    }

    #[must_use]
    pub fn number(&self) -> u64 {
        self.number
    }
}
