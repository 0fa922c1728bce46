/// Maps `value` from `input` onto `output` linearly, holding the end values
/// outside the input range.
pub fn interpolate(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    if in_end == in_start {
        return out_start;
    }
    let progress = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * progress
}

/// Scroll-linked transform applied to the hero image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroMotion {
    pub translate_y: f64,
    pub opacity: f64,
    pub scale: f64,
}

impl HeroMotion {
    pub fn at(scroll_y: f64) -> Self {
        Self {
            translate_y: interpolate(scroll_y, (0.0, 500.0), (0.0, 150.0)),
            opacity: interpolate(scroll_y, (0.0, 300.0), (1.0, 0.0)),
            scale: interpolate(scroll_y, (0.0, 300.0), (1.0, 0.9)),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "transform: translateY({:.1}px) scale({:.3}); opacity: {:.3};",
            self.translate_y, self.scale, self.opacity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn interpolate_is_linear_inside_the_range() {
        assert!(close(interpolate(250.0, (0.0, 500.0), (0.0, 150.0)), 75.0));
        assert!(close(interpolate(150.0, (0.0, 300.0), (1.0, 0.0)), 0.5));
    }

    #[test]
    fn interpolate_clamps_both_ends() {
        assert!(close(interpolate(-40.0, (0.0, 300.0), (1.0, 0.9)), 1.0));
        assert!(close(interpolate(9000.0, (0.0, 300.0), (1.0, 0.9)), 0.9));
    }

    #[test]
    fn empty_input_range_yields_start() {
        assert!(close(interpolate(10.0, (5.0, 5.0), (2.0, 3.0)), 2.0));
    }

    #[test]
    fn hero_at_top_is_untouched() {
        assert_eq!(
            HeroMotion::at(0.0),
            HeroMotion { translate_y: 0.0, opacity: 1.0, scale: 1.0 }
        );
    }

    #[test]
    fn hero_fades_before_it_stops_moving() {
        let motion = HeroMotion::at(300.0);
        assert!(close(motion.opacity, 0.0));
        assert!(close(motion.scale, 0.9));
        assert!(close(motion.translate_y, 90.0));
        assert_eq!(
            motion.style(),
            "transform: translateY(90.0px) scale(0.900); opacity: 0.000;"
        );
    }
}
