mod tests {
    use skylight_composer::color::palette::{NIGHT_BLACK, SUN_GOLD};
    use skylight_composer::disc::disc_center;
    use skylight_composer::{DAY_END, DayInstant, Rgb, SUN_DIAMETER, paint_disc};

    const STRIP_LEN: usize = 198;

    fn black_strip() -> [Rgb; STRIP_LEN] {
        [NIGHT_BLACK; STRIP_LEN]
    }

    fn midnight() -> DayInstant {
        DayInstant::from_seconds(0)
    }

    #[test]
    fn test_mid_arc_center_is_sweep_midpoint() {
        // Sweep runs from 208 down to -9; midpoint rounds to 100
        assert_eq!(disc_center(STRIP_LEN, SUN_DIAMETER, 0.5), 100);
        assert_eq!(disc_center(STRIP_LEN, SUN_DIAMETER, 0.0), 208);
        assert_eq!(disc_center(STRIP_LEN, SUN_DIAMETER, 1.0), -9);
    }

    #[test]
    fn test_solid_core_and_feather_ramp() {
        let mut leds = black_strip();
        let noon = DayInstant::from_seconds(DAY_END.seconds / 2);
        paint_disc(&mut leds, midnight(), DAY_END, noon, SUN_GOLD, SUN_DIAMETER);

        // 13-pixel solid core centered on 100
        for led in &leds[94..=106] {
            assert_eq!(*led, SUN_GOLD);
        }

        // Feather ramps down over three pixels on each side; the disc color
        // has a saturated red channel, so the ramp reads directly off red
        for (index, red) in [(93, 191), (92, 127), (91, 63), (107, 191), (108, 127), (109, 63)] {
            assert_eq!(leds[index].r, red, "feather at {index}");
        }

        // Everything outside the footprint keeps the background
        for led in leds[..91].iter().chain(leds[110..].iter()) {
            assert_eq!(*led, NIGHT_BLACK);
        }
    }

    #[test]
    fn test_disc_fully_off_strip_at_arc_start() {
        let mut leds = black_strip();
        paint_disc(&mut leds, midnight(), DAY_END, midnight(), SUN_GOLD, SUN_DIAMETER);
        assert_eq!(leds, black_strip());
    }

    #[test]
    fn test_disc_clipped_at_low_end_of_strip() {
        let mut leds = black_strip();
        let end = DayInstant::from_seconds(DAY_END.seconds - 1);
        paint_disc(&mut leds, midnight(), DAY_END, end, SUN_GOLD, SUN_DIAMETER);

        // Only the trailing feather edge remains visible at index 0
        assert_eq!(leds[0].r, 63);
        for led in &leds[1..] {
            assert_eq!(*led, NIGHT_BLACK);
        }
    }

    #[test]
    fn test_instant_outside_arc_pins_to_arc_end() {
        let mut pinned = black_strip();
        let mut exact = black_strip();
        let arc_start = DayInstant::from_hms(6, 0, 0);
        let arc_end = DayInstant::from_hms(18, 30, 0);

        paint_disc(
            &mut pinned,
            arc_start,
            arc_end,
            DayInstant::from_hms(20, 0, 0),
            SUN_GOLD,
            SUN_DIAMETER,
        );
        paint_disc(&mut exact, arc_start, arc_end, arc_end, SUN_GOLD, SUN_DIAMETER);
        assert_eq!(pinned, exact);
    }

    #[test]
    fn test_degenerate_arc_does_not_divide() {
        let mut leds = black_strip();
        let instant = DayInstant::from_hms(12, 0, 0);
        paint_disc(&mut leds, instant, instant, instant, SUN_GOLD, SUN_DIAMETER);
        // Zero-length arc pins to fraction zero: disc parked off the high end
        assert_eq!(leds, black_strip());
    }
}
