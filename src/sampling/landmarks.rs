//! Face keypoints to sample regions
//!
//! Keypoints come from whatever face detector the caller runs; this crate
//! only turns them into rectangles. Every keypoint is optional and a missing
//! one simply contributes no region.

use serde::{Deserialize, Serialize};

use crate::constants::regions::{
    CHEEK_OFFSET, CHEEK_SIZE, FOREHEAD_OFFSET, FOREHEAD_SIZE, LIP_OFFSET, LIP_SIZE, NOSE_OFFSET,
    NOSE_SIZE,
};
use crate::sampling::{Point, Region};

/// Named face keypoints in image pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaceLandmarks {
    pub left_cheek: Option<Point>,
    pub right_cheek: Option<Point>,
    pub nose_tip: Option<Point>,
    pub forehead: Option<Point>,
    pub upper_lip_top: Option<Point>,
    pub lower_lip_bottom: Option<Point>,
}

impl FaceLandmarks {
    /// Skin regions in order: left cheek, right cheek, nose, forehead
    pub fn skin_regions(&self) -> Vec<Region> {
        [
            self.left_cheek.map(|p| Region::around(p, CHEEK_OFFSET, CHEEK_SIZE)),
            self.right_cheek.map(|p| Region::around(p, CHEEK_OFFSET, CHEEK_SIZE)),
            self.nose_tip.map(|p| Region::around(p, NOSE_OFFSET, NOSE_SIZE)),
            self.forehead.map(|p| Region::around(p, FOREHEAD_OFFSET, FOREHEAD_SIZE)),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Lip region centered between the lip keypoints; needs both of them
    pub fn lip_region(&self) -> Option<Region> {
        let upper = self.upper_lip_top?;
        let lower = self.lower_lip_bottom?;
        Some(Region::around(upper.midpoint(&lower), LIP_OFFSET, LIP_SIZE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_landmarks() {
        let landmarks = FaceLandmarks {
            left_cheek: Some(Point::new(100.0, 200.0)),
            right_cheek: Some(Point::new(300.0, 200.0)),
            nose_tip: Some(Point::new(200.0, 220.0)),
            forehead: Some(Point::new(200.0, 80.0)),
            upper_lip_top: Some(Point::new(200.0, 280.0)),
            lower_lip_bottom: Some(Point::new(200.0, 320.0)),
        };

        assert_eq!(
            landmarks.skin_regions(),
            vec![
                Region::new(80.0, 180.0, 40.0, 40.0),
                Region::new(280.0, 180.0, 40.0, 40.0),
                Region::new(185.0, 190.0, 30.0, 30.0),
                Region::new(175.0, 55.0, 50.0, 30.0),
            ]
        );
        assert_eq!(landmarks.lip_region(), Some(Region::new(180.0, 285.0, 40.0, 30.0)));
    }

    #[test]
    fn test_missing_keypoints_are_skipped() {
        let landmarks = FaceLandmarks {
            nose_tip: Some(Point::new(50.0, 50.0)),
            upper_lip_top: Some(Point::new(50.0, 70.0)),
            ..Default::default()
        };
        assert_eq!(landmarks.skin_regions(), vec![Region::new(35.0, 20.0, 30.0, 30.0)]);
        assert_eq!(landmarks.lip_region(), None);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"leftCheek":{"x":1.0,"y":2.0},"lowerLipBottom":{"x":3.0,"y":4.0}}"#;
        let landmarks: FaceLandmarks = serde_json::from_str(json).unwrap();
        assert_eq!(landmarks.left_cheek, Some(Point::new(1.0, 2.0)));
        assert_eq!(landmarks.lower_lip_bottom, Some(Point::new(3.0, 4.0)));
        assert!(landmarks.forehead.is_none());
    }
}
