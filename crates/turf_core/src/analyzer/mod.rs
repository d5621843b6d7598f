//! Turf detection from an uploaded image.
//!
//! There is no real vision model yet. Both analyzers derive every turf field from a
//! single draw in `[0, 1)` using fixed threshold bands ([`guess_from_draw`]):
//!
//! - [`PlaceholderTurfAnalyzer`] draws from the thread RNG, so repeated calls differ.
//! - [`FingerprintTurfAnalyzer`] seeds a ChaCha8 RNG from the SHA-256 of the image
//!   bytes, so the same image always yields the same guess.
//!
//! The predictor never calls an analyzer itself; callers merge the guess under
//! manual entries with [`TurfConditions::overlay`].

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::models::{
    Evenness, GrassHeight, MoistureLevel, SurfaceQuality, SurfaceType, TurfConditions,
};

/// Capability interface for anything that can guess turf conditions from image bytes.
///
/// Implementations must not fail; an unreadable image still produces a (possibly empty) guess.
pub trait TurfImageAnalyzer: Send + Sync {
    fn analyze(&self, image: &[u8]) -> TurfConditions;
}

const MIN_RATING: i32 = 5;
const MAX_RATING: i32 = 8;

/// Map a single draw onto a full turf guess.
///
/// Non-finite draws are treated as 0; everything else is clamped into `[0, 1]`.
pub fn guess_from_draw(draw: f64) -> TurfConditions {
    let draw = if draw.is_finite() { draw.clamp(0.0, 1.0) } else { 0.0 };

    let surface_type =
        if draw > 0.7 { SurfaceType::NaturalGrass } else { SurfaceType::ArtificialTurf };
    let moisture_level = if draw > 0.7 {
        MoistureLevel::Wet
    } else if draw > 0.4 {
        MoistureLevel::Normal
    } else {
        MoistureLevel::Dry
    };
    let grass_height = if draw > 0.6 { GrassHeight::Medium } else { GrassHeight::Short };
    let surface_quality = if draw > 0.8 {
        SurfaceQuality::Excellent
    } else if draw > 0.5 {
        SurfaceQuality::Good
    } else {
        SurfaceQuality::Fair
    };
    let evenness = if draw > 0.8 { Evenness::Level } else { Evenness::SlightlyUneven };
    let rating = ((5.0 + draw * 4.0).floor() as i32).clamp(MIN_RATING, MAX_RATING);

    TurfConditions {
        surface_type: Some(surface_type),
        moisture_level: Some(moisture_level),
        grass_height: Some(grass_height),
        surface_quality: Some(surface_quality),
        evenness: Some(evenness),
        ball_speed_rating: Some(rating),
        traction_rating: Some(rating),
    }
}

/// Random stand-in for a real image model. Output is not reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderTurfAnalyzer;

impl TurfImageAnalyzer for PlaceholderTurfAnalyzer {
    fn analyze(&self, image: &[u8]) -> TurfConditions {
        let draw: f64 = rand::thread_rng().gen();
        debug!("Placeholder turf analysis: {} bytes, draw={:.3}", image.len(), draw);
        guess_from_draw(draw)
    }
}

/// Deterministic stand-in: the draw is derived from the image content.
#[derive(Debug, Clone, Copy, Default)]
pub struct FingerprintTurfAnalyzer;

impl FingerprintTurfAnalyzer {
    /// First 8 bytes of the SHA-256 digest, little endian.
    pub fn seed_for(image: &[u8]) -> u64 {
        let digest = Sha256::digest(image);
        let mut seed = [0u8; 8];
        seed.copy_from_slice(&digest[..8]);
        u64::from_le_bytes(seed)
    }
}

impl TurfImageAnalyzer for FingerprintTurfAnalyzer {
    fn analyze(&self, image: &[u8]) -> TurfConditions {
        let seed = Self::seed_for(image);
        let draw: f64 = ChaCha8Rng::seed_from_u64(seed).gen();
        debug!("Fingerprint turf analysis: seed={:016x}, draw={:.3}", seed, draw);
        guess_from_draw(draw)
    }
}
