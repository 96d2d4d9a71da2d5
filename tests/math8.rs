mod tests {
    use myrtio_side_led::math8::{scale_by_envelope, step_down, step_up, wrap_hue};

    #[test]
    fn test_scale_by_envelope() {
        assert_eq!(scale_by_envelope(200, 255), 200);
        assert_eq!(scale_by_envelope(200, 0), 0);
        assert_eq!(scale_by_envelope(255, 128), 128);
        assert_eq!(scale_by_envelope(200, 115), 90);
        assert_eq!(scale_by_envelope(0, 255), 0);
    }

    #[test]
    fn test_step_up() {
        assert_eq!(step_up(0, 8, 255), 8);
        assert_eq!(step_up(247, 8, 255), 255);
        assert_eq!(step_up(248, 8, 255), 255);
        assert_eq!(step_up(255, 8, 255), 255);
        assert_eq!(step_up(3, 1, 4), 4);
        assert_eq!(step_up(4, 1, 4), 4);
    }

    #[test]
    fn test_step_down() {
        assert_eq!(step_down(16, 8), 8);
        assert_eq!(step_down(7, 8), 0);
        assert_eq!(step_down(0, 1), 0);
    }

    #[test]
    fn test_wrap_hue() {
        assert_eq!(wrap_hue(255), 255);
        assert_eq!(wrap_hue(256), 0);
        assert_eq!(wrap_hue(300), 44);
    }
}
