use std::fmt;

use crate::library::{Vec3, approximately};

/// How two vectors sit relative to each other, judged from their dot product.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    SameDirection,
    OppositeDirection,
    Orthogonal,
    Collinear0,
    Collinear180,
}

impl Relation {
    pub fn message(self) -> &'static str {
        match self {
            Relation::SameDirection => {
                "VectorA and VectorB point in the same direction and the angle between them is less than 90 degrees."
            }
            Relation::OppositeDirection => {
                "VectorA and VectorB point in opposite directions and the angle between them is greater than 90 degrees."
            }
            Relation::Orthogonal => "VectorA and VectorB are orthogonal to each other.",
            Relation::Collinear0 => {
                "VectorA and VectorB are collinear and the angle between them is 0 degrees."
            }
            Relation::Collinear180 => {
                "VectorA and VectorB are collinear and the angle between them is 180 degrees."
            }
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Orthogonal wins on an exact zero, then the collinear checks against
/// `±|v1||v2|`, then the sign. NaN classifies as nothing.
pub fn classify(dot: f32, vec1: Vec3, vec2: Vec3, mag: fn(Vec3) -> f32) -> Option<Relation> {
    if dot == 0.0 {
        return Some(Relation::Orthogonal);
    }
    let product = mag(vec1) * mag(vec2);
    if approximately(dot, product) {
        Some(Relation::Collinear0)
    } else if approximately(dot, -product) {
        Some(Relation::Collinear180)
    } else if dot > 0.0 {
        Some(Relation::SameDirection)
    } else if dot < 0.0 {
        Some(Relation::OppositeDirection)
    } else {
        None
    }
}
