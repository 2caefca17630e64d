//! # Detent Module
//!
//! Quantizes continuous slider values onto a small set of allowed positions.
//! Each control that snaps (label density, grid strength, output headroom)
//! owns a fixed ascending detent list defined here at compile time.
//!
//! ## Features
//! - Nearest-detent snapping with first-found tie breaking
//! - Index lookup for showing the preset name of a snapped value
//! - Labeled detent sets for the settings sliders

/// Label density presets, from hidden to fully labeled.
pub const LABEL_DENSITY_DETENTS: [f64; 5] = [0.0, 0.35, 0.65, 0.85, 1.0];

/// Lattice grid line strength presets.
pub const GRID_STRENGTH_DETENTS: [f64; 6] = [0.10, 0.25, 0.40, 0.65, 0.85, 1.0];

/// Output headroom presets (linear gain reduction applied before the limiter).
pub const HEADROOM_DETENTS: [f64; 5] = [0.12, 0.18, 0.24, 0.30, 0.36];

/// Finds the detent closest to `value`.
///
/// The list is scanned in order and a candidate only replaces the current
/// best when it is strictly closer, so on a tie the earlier detent wins.
///
/// # Arguments
/// * `value` - Continuous slider value
/// * `detents` - Ascending list of allowed values
///
/// # Returns
/// * The closest detent, or `value` unchanged when `detents` is empty
pub fn nearest_detent(value: f64, detents: &[f64]) -> f64 {
    match nearest_detent_index(value, detents) {
        Some(index) => detents[index],
        None => value,
    }
}

/// Finds the index of the detent closest to `value`.
///
/// Uses the same first-found tie breaking as [`nearest_detent`].
///
/// # Returns
/// * `Some(index)` - Position of the closest detent
/// * `None` - The detent list is empty
pub fn nearest_detent_index(value: f64, detents: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, &detent) in detents.iter().enumerate() {
        let distance = (detent - value).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}

/// A detent list paired with the names shown next to each position.
#[derive(Debug, Clone, Copy)]
pub struct DetentSet {
    pub values: &'static [f64],
    pub labels: &'static [&'static str],
}

/// Label density slider.
pub const LABEL_DENSITY: DetentSet = DetentSet {
    values: &LABEL_DENSITY_DETENTS,
    labels: &["Off", "Sparse", "Balanced", "Dense", "All"],
};

/// Grid strength slider.
pub const GRID_STRENGTH: DetentSet = DetentSet {
    values: &GRID_STRENGTH_DETENTS,
    labels: &["Faint", "Light", "Soft", "Medium", "Strong", "Full"],
};

/// Output headroom slider.
pub const HEADROOM: DetentSet = DetentSet {
    values: &HEADROOM_DETENTS,
    labels: &["Hot", "Loud", "Normal", "Safe", "Quiet"],
};

impl DetentSet {
    /// Snaps `value` onto this set.
    pub fn snap(&self, value: f64) -> f64 {
        nearest_detent(value, self.values)
    }

    /// Snaps `value` and returns the chosen detent with its label.
    pub fn snap_labeled(&self, value: f64) -> Option<(f64, &'static str)> {
        let index = nearest_detent_index(value, self.values)?;
        let label = self.labels.get(index).copied().unwrap_or("");
        Some((self.values[index], label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snaps_to_closest_grid_strength() {
        assert_eq!(nearest_detent(0.20, &GRID_STRENGTH_DETENTS), 0.25);
    }

    #[test]
    fn value_above_range_snaps_to_last_headroom() {
        assert_eq!(nearest_detent(0.50, &HEADROOM_DETENTS), 0.36);
    }

    #[test]
    fn empty_detents_return_input_unchanged() {
        assert_eq!(nearest_detent(0.42, &[]), 0.42);
        assert_eq!(nearest_detent_index(0.42, &[]), None);
    }

    #[test]
    fn tie_keeps_first_detent_in_sequence_order() {
        // 0.5 is exactly between both candidates.
        assert_eq!(nearest_detent(0.5, &[0.25, 0.75]), 0.25);
        assert_eq!(nearest_detent(0.5, &[0.75, 0.25]), 0.75);
    }

    #[test]
    fn every_detent_set_has_a_label_per_value() {
        for set in [LABEL_DENSITY, GRID_STRENGTH, HEADROOM] {
            assert_eq!(set.values.len(), set.labels.len());
        }
    }

    #[test]
    fn labeled_snap_reports_preset_name() {
        assert_eq!(LABEL_DENSITY.snap_labeled(0.6), Some((0.65, "Balanced")));
        assert_eq!(HEADROOM.snap(0.2), 0.18);
    }
}
