//! Scoring of a detected human pose against a model's bone positions.
//!
//! Both point sets are expected in a common normalized space, see [`normalize`].
//! The human set follows the 33-landmark body pose layout; the model set
//! follows the bone order of the rigged character.

/// Landmarks without a counterpart on the rig (face, fingers, heels).
const IGNORED_LANDMARKS: [usize; 16] = [1, 2, 3, 4, 5, 6, 7, 8, 17, 18, 19, 20, 21, 22, 27, 28];

/// Bones without a counterpart among the landmarks (fingers, twist and end bones).
const IGNORED_BONES: [usize; 44] = [
    0, 1, 2, 4, 9, 10, 11, 12, 13, 14, 15, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 32, 33, 34,
    35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 60, 62, 63,
];

/// (filtered landmark index, filtered bone index)
const CORRESPONDENCES: [(usize, usize); 20] = [
    (0, 16),
    (1, 19),
    (2, 17),
    (3, 13),
    (4, 15),
    (5, 5),
    (6, 9),
    (7, 4),
    (8, 14),
    (9, 10),
    (10, 8),
    (11, 1),
    (12, 6),
    (13, 0),
    (14, 7),
    (15, 2),
    (16, 3),
    (17, 12),
    (18, 18),
    (19, 11),
];

/// A pair counts as matched when closer than this in normalized space.
const MATCH_DISTANCE: f32 = 0.4;

/// Min-max normalizes each axis into [0, 1]. Flat axes map to 0.5.
pub fn normalize(points: &[[f32; 3]]) -> Vec<[f32; 3]> {
    if points.is_empty() {
        return Vec::new();
    }

    let mut min = [f32::INFINITY; 3];
    let mut max = [f32::NEG_INFINITY; 3];
    for point in points {
        for axis in 0..3 {
            min[axis] = min[axis].min(point[axis]);
            max[axis] = max[axis].max(point[axis]);
        }
    }

    points
        .iter()
        .map(|point| {
            let mut normalized = [0.5; 3];
            for axis in 0..3 {
                if max[axis] != min[axis] {
                    normalized[axis] = (point[axis] - min[axis]) / (max[axis] - min[axis]);
                }
            }
            normalized
        })
        .collect()
}

fn filter(points: &[[f32; 3]], ignored: &[usize]) -> Vec<[f32; 3]> {
    points
        .iter()
        .enumerate()
        .filter(|(i, _)| !ignored.contains(i))
        .map(|(_, point)| *point)
        .collect()
}

fn distance(a: &[f32; 3], b: &[f32; 3]) -> f32 {
    ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2)).sqrt()
}

/// Fraction of corresponding points that lie within [`MATCH_DISTANCE`].
///
/// The denominator is the length of the longer filtered set, so missing
/// points on either side lower the score.
pub fn similarity(human: &[[f32; 3]], model: &[[f32; 3]]) -> f32 {
    let human = filter(human, &IGNORED_LANDMARKS);
    let model = filter(model, &IGNORED_BONES);

    let total = human.len().max(model.len());
    if total == 0 {
        return 0.0;
    }

    let matched = CORRESPONDENCES
        .iter()
        .filter(|(h, m)| match (human.get(*h), model.get(*m)) {
            (Some(a), Some(b)) => distance(a, b) < MATCH_DISTANCE,
            _ => false,
        })
        .count();

    matched as f32 / total as f32
}

pub fn similarity_percentage(human: &[[f32; 3]], model: &[[f32; 3]]) -> f32 {
    similarity(human, model) * 100.0
}
