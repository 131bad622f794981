use std::collections::BTreeMap;

use crate::input::{RawEntity, RawRoster};

#[derive(Debug, Clone, Copy)]
pub struct EntityDef {
    pub name: &'static str,
    pub attributes: &'static [(&'static str, f64)],
}

const SAMPLE_TEAM: &[EntityDef] = &[
    EntityDef {
        name: "Eddie",
        attributes: &[
            ("intelligence", 1.0),
            ("strength", 5.0),
            ("endurance", 3.0),
            ("spicyFoodTolerance", 1.0),
        ],
    },
    EntityDef {
        name: "Will",
        attributes: &[
            ("intelligence", 9.0),
            ("strength", 4.0),
            ("endurance", 1.0),
            ("spicyFoodTolerance", 6.0),
        ],
    },
    EntityDef {
        name: "Mike",
        attributes: &[
            ("intelligence", 3.0),
            ("strength", 2.0),
            ("endurance", 9.0),
            ("spicyFoodTolerance", 5.0),
        ],
    },
];

const SAMPLE_APPLICANTS: &[EntityDef] = &[
    EntityDef {
        name: "John",
        attributes: &[
            ("intelligence", 4.0),
            ("strength", 5.0),
            ("endurance", 2.0),
            ("spicyFoodTolerance", 1.0),
        ],
    },
    EntityDef {
        name: "Jane",
        attributes: &[
            ("intelligence", 7.0),
            ("strength", 4.0),
            ("endurance", 3.0),
            ("spicyFoodTolerance", 2.0),
        ],
    },
    EntityDef {
        name: "Joe",
        attributes: &[
            ("intelligence", 1.0),
            ("strength", 1.0),
            ("endurance", 1.0),
            ("spicyFoodTolerance", 10.0),
        ],
    },
];

pub fn builtin_raw_roster() -> RawRoster {
    RawRoster {
        team: SAMPLE_TEAM.iter().map(to_raw).collect(),
        applicants: SAMPLE_APPLICANTS.iter().map(to_raw).collect(),
    }
}

fn to_raw(def: &EntityDef) -> RawEntity {
    let attributes = def
        .attributes
        .iter()
        .map(|&(key, value)| (key.to_string(), value))
        .collect::<BTreeMap<_, _>>();
    RawEntity {
        name: def.name.to_string(),
        attributes,
    }
}
