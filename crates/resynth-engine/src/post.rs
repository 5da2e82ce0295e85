//! Chorus-buffer mixdown and the final volume multiplier.

/// Merges the delayed-chorus buffer back into the dry signal:
/// `dry[i] ← dry[i]·(1 − chorus_mix) + chorus[i]`.
pub fn merge_chorus(dry: &mut [f32], chorus: &[f32], chorus_mix: f64) {
    let wet_keep = (1.0 - chorus_mix) as f32;
    for (d, c) in dry.iter_mut().zip(chorus.iter()) {
        *d = *d * wet_keep + *c;
    }
}

/// Scales every sample by `volume`, the final stage before output.
pub fn apply_volume(samples: &mut [f32], volume: f64) {
    let gain = volume as f32;
    for s in samples.iter_mut() {
        *s *= gain;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_is_identity_when_chorus_mix_is_zero() {
        let mut dry = vec![0.1_f32, 0.2, -0.3];
        let chorus = vec![0.5_f32, 0.5, 0.5];
        merge_chorus(&mut dry, &chorus, 0.0);
        assert_eq!(dry, vec![0.1, 0.2, -0.3]);
    }

    #[test]
    fn volume_scales_every_sample() {
        let mut samples = vec![0.5_f32, -0.5, 1.0];
        apply_volume(&mut samples, 2.0);
        assert_eq!(samples, vec![1.0, -1.0, 2.0]);
    }

    #[test]
    fn volume_linearity() {
        let base = vec![0.1_f32, 0.2, 0.3, -0.4];
        let mut doubled = base.clone();
        apply_volume(&mut doubled, 2.0);
        for (b, d) in base.iter().zip(doubled.iter()) {
            assert!((d - b * 2.0).abs() < 1e-6);
        }
    }
}
