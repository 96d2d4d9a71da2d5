mod common;

mod tests {
    use myrtio_side_led::config::KEYCODE_BASE;
    use myrtio_side_led::{SideLedKeycode, SideLedSettings};

    use super::common::engine;

    #[test]
    fn test_keycode_from_raw() {
        assert_eq!(
            SideLedKeycode::from_raw(KEYCODE_BASE),
            Some(SideLedKeycode::Toggle)
        );
        assert_eq!(
            SideLedKeycode::from_raw(KEYCODE_BASE + 10),
            Some(SideLedKeycode::SpeedDown)
        );
        assert_eq!(SideLedKeycode::from_raw(KEYCODE_BASE + 11), None);
        assert_eq!(SideLedKeycode::from_raw(KEYCODE_BASE - 1), None);
        assert_eq!(SideLedKeycode::from_raw(0x0004), None);
        assert_eq!(
            SideLedKeycode::from_raw(SideLedKeycode::HueUp.to_raw()),
            Some(SideLedKeycode::HueUp)
        );
    }

    #[test]
    fn test_unknown_keycode_is_not_handled() {
        let mut led = engine(SideLedSettings::default());
        assert!(!led.process_keycode(0x0004, true));
        assert!(!led.process_keycode(0x0004, false));
        assert_eq!(*led.settings(), SideLedSettings::default());
        assert_eq!(led.store().saves, 0);
    }

    #[test]
    fn test_press_is_consumed_without_change() {
        let mut led = engine(SideLedSettings::default());
        assert!(led.process_keycode(SideLedKeycode::Toggle.to_raw(), true));
        assert!(led.settings().enabled);
        assert_eq!(led.store().saves, 0);
    }

    #[test]
    fn test_release_applies_and_saves_once() {
        let mut led = engine(SideLedSettings::default());
        assert!(led.process_keycode(SideLedKeycode::Toggle.to_raw(), false));
        assert!(!led.settings().enabled);
        assert_eq!(led.store().saves, 1);
        assert_eq!(led.store().saved, Some(*led.settings()));
    }

    #[test]
    fn test_adjustments() {
        let mut led = engine(SideLedSettings {
            enabled: true,
            mode: 9,
            hue: 0,
            saturation: 250,
            brightness: 4,
            speed: 4,
        });
        let release = |led: &mut super::common::TestSideLed, key: SideLedKeycode| {
            assert!(led.process_keycode(key.to_raw(), false));
        };

        release(&mut led, SideLedKeycode::ModeNext);
        assert_eq!(led.settings().mode, 0);
        release(&mut led, SideLedKeycode::ModePrev);
        assert_eq!(led.settings().mode, 9);

        release(&mut led, SideLedKeycode::HueDown);
        assert_eq!(led.settings().hue, 248);
        release(&mut led, SideLedKeycode::HueUp);
        assert_eq!(led.settings().hue, 0);

        release(&mut led, SideLedKeycode::SaturationUp);
        assert_eq!(led.settings().saturation, 255);
        release(&mut led, SideLedKeycode::SaturationDown);
        assert_eq!(led.settings().saturation, 247);

        release(&mut led, SideLedKeycode::BrightnessDown);
        assert_eq!(led.settings().brightness, 0);
        release(&mut led, SideLedKeycode::BrightnessUp);
        assert_eq!(led.settings().brightness, 8);

        release(&mut led, SideLedKeycode::SpeedUp);
        assert_eq!(led.settings().speed, 4);
        release(&mut led, SideLedKeycode::SpeedDown);
        assert_eq!(led.settings().speed, 3);

        // Saturated adjustments still count as accepted
        assert_eq!(led.store().saves, 10);
    }
}
