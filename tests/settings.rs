mod tests {
    use myrtio_side_led::settings::SETTINGS_RECORD_SIZE;
    use myrtio_side_led::{PersistenceError, SideLedSettings};

    #[test]
    fn test_hue_wraps() {
        let mut settings = SideLedSettings {
            hue: 250,
            ..SideLedSettings::default()
        };
        settings.increase_hue();
        assert_eq!(settings.hue, 2);
        settings.decrease_hue();
        assert_eq!(settings.hue, 250);

        for start in [0u8, 7, 128, 255] {
            settings.hue = start;
            for _ in 0..40 {
                settings.increase_hue();
            }
            for _ in 0..40 {
                settings.decrease_hue();
            }
            assert_eq!(settings.hue, start);
        }
    }

    #[test]
    fn test_saturation_and_brightness_clamp() {
        let mut settings = SideLedSettings {
            saturation: 250,
            brightness: 3,
            ..SideLedSettings::default()
        };
        settings.increase_saturation();
        assert_eq!(settings.saturation, 255);
        settings.decrease_brightness();
        assert_eq!(settings.brightness, 0);

        for _ in 0..40 {
            settings.decrease_saturation();
            settings.increase_brightness();
        }
        assert_eq!(settings.saturation, 0);
        assert_eq!(settings.brightness, 255);
    }

    #[test]
    fn test_speed_clamps() {
        let mut settings = SideLedSettings {
            speed: 0,
            ..SideLedSettings::default()
        };
        settings.decrease_speed();
        assert_eq!(settings.speed, 0);
        for expected in 1..=4 {
            settings.increase_speed();
            assert_eq!(settings.speed, expected);
        }
        settings.increase_speed();
        assert_eq!(settings.speed, 4);

        settings.set_speed(200);
        assert_eq!(settings.speed, 4);
    }

    #[test]
    fn test_mode_cycles() {
        let mut settings = SideLedSettings {
            mode: 9,
            ..SideLedSettings::default()
        };
        settings.next_mode();
        assert_eq!(settings.mode, 0);
        settings.prev_mode();
        assert_eq!(settings.mode, 9);

        for _ in 0..10 {
            settings.next_mode();
        }
        assert_eq!(settings.mode, 9);
    }

    #[test]
    fn test_mode_out_of_range() {
        let mut settings = SideLedSettings {
            mode: 42,
            ..SideLedSettings::default()
        };
        settings.next_mode();
        assert_eq!(settings.mode, 0);

        settings.mode = 42;
        settings.prev_mode();
        assert_eq!(settings.mode, 9);
    }

    #[test]
    fn test_effect_couples_enabled() {
        let mut settings = SideLedSettings::default();
        settings.set_effect(9);
        assert!(settings.enabled);
        assert_eq!(settings.reported_effect(), 9);

        settings.set_effect(0);
        assert!(!settings.enabled);
        assert_eq!(settings.mode, 0);

        settings.mode = 5;
        assert_eq!(settings.reported_effect(), 0);
    }

    #[test]
    fn test_record_layout() {
        let settings = SideLedSettings {
            enabled: true,
            mode: 7,
            hue: 10,
            saturation: 20,
            brightness: 30,
            speed: 3,
        };
        let bytes = settings.to_bytes();
        assert_eq!(bytes, [1, 7, 10, 20, 30, 3]);
        assert_eq!(SideLedSettings::from_bytes(&bytes), Ok(settings));
    }

    #[test]
    fn test_invalid_record() {
        assert_eq!(
            SideLedSettings::from_bytes(&[1, 7, 10]),
            Err(PersistenceError::InvalidRecord)
        );
        assert_eq!(
            SideLedSettings::from_bytes(&[2, 7, 10, 20, 30, 3]),
            Err(PersistenceError::InvalidRecord)
        );
        assert_eq!(
            SideLedSettings::from_bytes(&[0, 7, 10, 20, 30, 5]),
            Err(PersistenceError::InvalidRecord)
        );
        assert_eq!(SETTINGS_RECORD_SIZE, 6);
    }
}
