//! Resistor-ladder decoding
//!
//! Each button pulls the ladder input to a known level. A sample decodes to
//! the button whose centre lies within `hysteresis` of it, bounds included.
//! Anything in the gaps between bands, or above the last band, is
//! [`Button::None`].

use crate::button::Button;
use crate::config::Thresholds;

/// Decode one ADC sample against `thresholds`
///
/// When bands overlap (only possible with
/// [`Thresholds::new_unchecked`]) the nearest centre wins, and the lower
/// centre on an exact tie.
pub fn decode(sample: u16, thresholds: &Thresholds) -> Button {
    let hysteresis = thresholds.hysteresis();
    let mut best: Option<(Button, u16)> = None;

    for (&button, &centre) in Button::LADDER.iter().zip(thresholds.levels()) {
        let distance = sample.abs_diff(centre);
        if distance > hysteresis {
            continue;
        }
        match best {
            Some((_, nearest)) if nearest <= distance => {}
            _ => best = Some((button, distance)),
        }
    }

    best.map_or(Button::None, |(button, _)| button)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Resolution, DEFAULT_HYSTERESIS, DEFAULT_LEVELS};

    const H: u16 = DEFAULT_HYSTERESIS;

    #[test]
    fn exact_centres_decode_in_ladder_order() {
        let t = Thresholds::DEFAULT;
        let decoded = [0, 120, 280, 480, 720].map(|s| decode(s, &t));
        assert_eq!(decoded, Button::LADDER);
    }

    #[test]
    fn samples_inside_hysteresis_keep_their_button() {
        let t = Thresholds::DEFAULT;
        for (&button, &centre) in Button::LADDER.iter().zip(&DEFAULT_LEVELS) {
            assert_eq!(decode(centre + (H - 1), &t), button);
            if centre >= H - 1 {
                assert_eq!(decode(centre - (H - 1), &t), button);
            }
        }
    }

    #[test]
    fn band_edges_are_inclusive() {
        let t = Thresholds::DEFAULT;
        assert_eq!(decode(150, &t), Button::Up);
        assert_eq!(decode(90, &t), Button::Up);
        assert_eq!(decode(750, &t), Button::Select);
    }

    #[test]
    fn just_past_hysteresis_is_none() {
        let t = Thresholds::DEFAULT;
        for &centre in &DEFAULT_LEVELS {
            assert_eq!(decode(centre + H + 1, &t), Button::None);
        }
    }

    #[test]
    fn gaps_and_idle_level_are_none() {
        let t = Thresholds::DEFAULT;
        assert_eq!(decode(60, &t), Button::None);
        assert_eq!(decode(380, &t), Button::None);
        assert_eq!(decode(1023, &t), Button::None);
        assert_eq!(decode(u16::MAX, &t), Button::None);
    }

    #[test]
    fn overlapping_bands_pick_nearest_centre() {
        let t = Thresholds::new_unchecked([0, 100, 200, 300, 400], 60, Resolution::Bits10);
        assert_eq!(decode(55, &t), Button::Up);
        assert_eq!(decode(45, &t), Button::Right);
        assert_eq!(decode(140, &t), Button::Up);
    }

    #[test]
    fn exact_tie_goes_to_lower_centre() {
        let t = Thresholds::new_unchecked([0, 100, 200, 300, 400], 60, Resolution::Bits10);
        assert_eq!(decode(50, &t), Button::Right);
        assert_eq!(decode(250, &t), Button::Down);
    }

    #[test]
    fn legacy_table_decodes_factory_levels() {
        let t = Thresholds::LEGACY;
        assert_eq!(decode(145, &t), Button::Up);
        assert_eq!(decode(120, &t), Button::None);
        assert_eq!(decode(745, &t), Button::Select);
    }
}
