use crate::image::ImageF32;
use serde::Serialize;

/// Summary statistics of a single-channel map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapStats {
    pub min: f32,
    pub max: f32,
    pub mean: f32,
}

impl MapStats {
    /// Statistics of `map`; all zero for an empty map.
    pub fn of(map: &ImageF32) -> Self {
        match map.min_max() {
            Some((min, max)) => Self {
                min,
                max,
                mean: map.mean(),
            },
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_of_small_map() {
        let mut map = ImageF32::new(2, 2);
        map.data = vec![0.25, 0.5, 0.75, 1.0];
        let stats = MapStats::of(&map);
        assert_eq!(stats.min, 0.25);
        assert_eq!(stats.max, 1.0);
        assert!((stats.mean - 0.625).abs() < 1e-6);
    }

    #[test]
    fn empty_map_is_all_zero() {
        assert_eq!(MapStats::of(&ImageF32::new(0, 0)), MapStats::default());
    }
}
