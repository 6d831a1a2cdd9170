//! Classification thresholds and sampling constants
//!
//! Every numeric rule the pipeline applies lives here. The skin tone and
//! undertone thresholds are empirical and must stay exactly as written for
//! results to match previously published classifications.

/// Broadcast luma weights (ITU-R BT.601)
pub mod luma {
    pub const RED_WEIGHT: f64 = 0.299;
    pub const GREEN_WEIGHT: f64 = 0.587;
    pub const BLUE_WEIGHT: f64 = 0.114;
}

/// Pixel sampling parameters
pub mod sampling {
    /// Visit every Nth row and every Nth column of a region
    pub const STRIDE: u32 = 2;

    /// Pixels with any channel at or below this value are discarded (near black)
    pub const MIN_CHANNEL: u8 = 20;

    /// Pixels with any channel at or above this value are discarded (clipped)
    pub const MAX_CHANNEL: u8 = 250;

    /// Bytes per pixel in the RGBA buffers handed to the sampler
    pub const BYTES_PER_PIXEL: usize = 4;
}

/// K-means defaults
pub mod clustering {
    /// Cluster count used when finding the dominant skin color
    pub const DOMINANT_K: usize = 5;

    /// Assignment/update rounds per clustering run
    pub const MAX_ITERATIONS: usize = 20;
}

/// Luminance buckets for skin tone
pub mod skin_tone {
    /// Luminance strictly above this is `fair`
    pub const FAIR_ABOVE: f64 = 180.0;

    /// Luminance strictly above this (and not fair) is `wheatish`
    pub const WHEATISH_ABOVE: f64 = 130.0;
}

/// Warm/cool heuristics for undertone
pub mod undertone {
    /// Warm requires R - B strictly above this
    pub const WARM_RED_MINUS_BLUE: i16 = 15;

    /// Warm also requires G - B strictly above this
    pub const WARM_GREEN_MINUS_BLUE: i16 = 10;

    /// Cool requires B strictly above R plus this margin
    pub const COOL_BLUE_OVER_RED: i16 = 5;
}

/// Region geometry used when regions come from face keypoints or a fallback
pub mod regions {
    /// Side of the centered fallback square as a fraction of the smaller image side
    pub const CENTER_FRACTION: f64 = 0.3;

    /// Cheek sample square: offset from keypoint and size
    pub const CHEEK_OFFSET: (f64, f64) = (-20.0, -20.0);
    pub const CHEEK_SIZE: (f64, f64) = (40.0, 40.0);

    /// Nose region sits above the nose tip
    pub const NOSE_OFFSET: (f64, f64) = (-15.0, -30.0);
    pub const NOSE_SIZE: (f64, f64) = (30.0, 30.0);

    pub const FOREHEAD_OFFSET: (f64, f64) = (-25.0, -25.0);
    pub const FOREHEAD_SIZE: (f64, f64) = (50.0, 30.0);

    /// Lip region around the midpoint of the upper and lower lip keypoints
    pub const LIP_OFFSET: (f64, f64) = (-20.0, -15.0);
    pub const LIP_SIZE: (f64, f64) = (40.0, 30.0);
}

/// Lip color reported when no lip region is analyzed (coral, #FF7F50)
pub const DEFAULT_LIP_COLOR: [u8; 3] = [0xFF, 0x7F, 0x50];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_weights_sum_to_one() {
        let sum = luma::RED_WEIGHT + luma::GREEN_WEIGHT + luma::BLUE_WEIGHT;
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_threshold_ordering() {
        assert!(skin_tone::WHEATISH_ABOVE < skin_tone::FAIR_ABOVE);
        assert!(sampling::MIN_CHANNEL < sampling::MAX_CHANNEL);
        assert!(clustering::DOMINANT_K > 1);
    }
}
