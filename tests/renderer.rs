mod tests {
    use skylight_composer::color::palette::{
        DAWN_PINK, DAY_BLUE, DUSK_PURPLE, MOON_SILVER, NIGHT_BLACK, SUN_GOLD,
    };
    use skylight_composer::{
        DayInstant, EventWindow, LEFT_PIXEL_LENGTH, LOGICAL_LENGTH, Phase, SkyRenderer,
        SkyRendererConfig,
    };

    const MAX_LEDS: usize = 256;

    fn make_renderer() -> SkyRenderer<MAX_LEDS> {
        SkyRenderer::new(&SkyRendererConfig {
            length: LOGICAL_LENGTH,
            split: LEFT_PIXEL_LENGTH,
        })
    }

    fn reference_windows() -> (EventWindow, EventWindow) {
        (EventWindow::from_hm(6, 15), EventWindow::from_hm(18, 15))
    }

    #[test]
    fn test_sunrise_peak_frame_is_exact_pink() {
        let mut renderer = make_renderer();
        let (sunrise, sunset) = reference_windows();

        let (left, right) =
            renderer.render_tick(DayInstant::from_hms(6, 15, 0), &sunrise, &sunset);

        assert_eq!(left.len(), 99);
        assert_eq!(right.len(), 99);
        // The rising sun sits near the high end of the strand; everything
        // else is the blended background, exactly pink at the peak instant
        assert_eq!(left[98], DAWN_PINK);
        assert_eq!(left[0], DAWN_PINK);
        assert_eq!(right[0], DAWN_PINK);
        assert_ne!(right[96], DAWN_PINK);

        assert_eq!(renderer.phase(), Phase::Sunrise);
    }

    #[test]
    fn test_noon_frame_is_blue_with_sun_disc() {
        let mut renderer = make_renderer();
        let (sunrise, sunset) = reference_windows();

        let (left, right) =
            renderer.render_tick(DayInstant::from_hms(12, 0, 0), &sunrise, &sunset);

        // Background away from the disc
        assert_eq!(left[98], DAY_BLUE);
        assert_eq!(right[98], DAY_BLUE);
        // Sun core straddles the seam around logical index 104
        assert_eq!(right[5], SUN_GOLD);

        assert_eq!(renderer.phase(), Phase::Daylight);
    }

    #[test]
    fn test_evening_frame_is_purple_with_moon_disc() {
        let mut renderer = make_renderer();
        let (sunrise, sunset) = reference_windows();

        let (left, right) =
            renderer.render_tick(DayInstant::from_hms(23, 0, 0), &sunrise, &sunset);

        assert_eq!(left[98], DUSK_PURPLE);
        assert_eq!(right[98], DUSK_PURPLE);
        // Moon core sits low on the strand around logical index 30
        assert_eq!(left[68], MOON_SILVER);

        assert_eq!(renderer.phase(), Phase::Twilight);
    }

    #[test]
    fn test_no_disc_before_sunrise() {
        let mut renderer = make_renderer();
        let (sunrise, sunset) = reference_windows();

        let (left, right) =
            renderer.render_tick(DayInstant::from_hms(3, 0, 0), &sunrise, &sunset);

        assert!(left.iter().chain(right.iter()).all(|led| *led == NIGHT_BLACK));
        assert_eq!(renderer.phase(), Phase::LightsOff);
    }

    #[test]
    fn test_unsynced_time_renders_dark_frame() {
        let mut renderer = make_renderer();
        let sunrise = EventWindow::default();
        let sunset = EventWindow::default();

        let (left, right) = renderer.render_tick(DayInstant::default(), &sunrise, &sunset);

        assert!(left.iter().chain(right.iter()).all(|led| *led == NIGHT_BLACK));
        assert_eq!(renderer.phase(), Phase::LightsOff);
    }

    #[test]
    fn test_frames_are_rebuilt_from_scratch() {
        let mut renderer = make_renderer();
        let (sunrise, sunset) = reference_windows();

        renderer.render_tick(DayInstant::from_hms(12, 0, 0), &sunrise, &sunset);
        let (left, right) =
            renderer.render_tick(DayInstant::from_hms(3, 0, 0), &sunrise, &sunset);

        // No daylight pixels survive into the lights-off frame
        assert!(left.iter().chain(right.iter()).all(|led| *led == NIGHT_BLACK));
    }
}
