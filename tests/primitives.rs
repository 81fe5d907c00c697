#[cfg(test)]
mod tests {
    use ox_parse_register::{primitives, register_primitives, ConversionError, Registry};
    use std::fmt::Debug;
    use std::time::Duration;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn assert_parses<T>(registry: &Registry, value: &str, expected: T)
    where
        T: Default + Debug + PartialEq + 'static,
    {
        let mut dst = T::default();
        let result = registry.set_value(&mut dst, value);
        assert!(result.is_ok(), "{:?} into {}: {:?}", value, std::any::type_name::<T>(), result);
        assert!(result.unwrap(), "{} not handled", std::any::type_name::<T>());
        assert_eq!(dst, expected);
    }

    fn assert_rejects<T>(registry: &Registry, value: &str, expected_err: &str)
    where
        T: Default + Debug + PartialEq + 'static,
    {
        let mut dst = T::default();
        let result = registry.set_value(&mut dst, value);
        match result {
            Err(err) => assert_eq!(err.to_string(), expected_err),
            Ok(handled) => panic!("{:?} into {} succeeded (handled: {})", value, std::any::type_name::<T>(), handled),
        }
        assert_eq!(dst, T::default(), "destination changed on failure");
    }

    #[test]
    fn test_signed_integers() {
        init_logging();
        let registry = primitives();
        assert_parses::<i64>(&registry, "10", 10);
        assert_parses::<i32>(&registry, "10", 10);
        assert_parses::<i16>(&registry, "10", 10);
        assert_parses::<i8>(&registry, "10", 10);
        assert_parses::<isize>(&registry, "10", 10);
        assert_parses::<i64>(&registry, "-9223372036854775808", i64::MIN);

        assert_rejects::<i64>(&registry, "x", "invalid integer \"x\": invalid digit found in string");
        assert_rejects::<i8>(&registry, "x", "invalid integer \"x\": invalid digit found in string");
        assert_rejects::<i64>(
            &registry,
            "9223372036854775808",
            "invalid integer \"9223372036854775808\": number too large to fit in target type",
        );
    }

    #[test]
    fn test_unsigned_integers() {
        init_logging();
        let registry = primitives();
        assert_parses::<u64>(&registry, "10", 10);
        assert_parses::<u32>(&registry, "10", 10);
        assert_parses::<u16>(&registry, "10", 10);
        assert_parses::<u8>(&registry, "10", 10);
        assert_parses::<usize>(&registry, "10", 10);

        assert_rejects::<u64>(&registry, "x", "invalid unsigned integer \"x\": invalid digit found in string");
        assert_rejects::<u32>(&registry, "-1", "invalid unsigned integer \"-1\": invalid digit found in string");
        assert_rejects::<u32>(&registry, "+7", "invalid unsigned integer \"+7\": sign not allowed");
        assert_rejects::<u8>(&registry, "+0", "invalid unsigned integer \"+0\": sign not allowed");
    }

    #[test]
    fn test_narrowing_is_not_range_checked_by_default() {
        init_logging();
        let registry = primitives();
        assert_parses::<i8>(&registry, "300", 44);
        assert_parses::<u8>(&registry, "257", 1);
        assert_parses::<i16>(&registry, "-32769", 32767);
    }

    #[test]
    fn test_floats() {
        init_logging();
        let registry = primitives();
        assert_parses::<f64>(&registry, "10", 10.0);
        assert_parses::<f64>(&registry, "-2.5e3", -2500.0);
        assert_parses::<f32>(&registry, "10", 10.0);
        assert_parses::<f32>(&registry, "0.5", 0.5);

        assert_rejects::<f64>(&registry, "x", "invalid float \"x\": invalid float literal");
        assert_rejects::<f64>(&registry, "1e999", "float \"1e999\" is out of range");
        assert_rejects::<f64>(&registry, "0x1p-2", "invalid float \"0x1p-2\": invalid float literal");
    }

    #[test]
    fn test_string() {
        init_logging();
        let registry = primitives();
        assert_parses::<String>(&registry, "10", "10".to_string());
        assert_parses::<String>(&registry, "", String::new());
    }

    #[test]
    fn test_booleans() {
        init_logging();
        let registry = primitives();
        assert_parses(&registry, "t", true);
        assert_parses(&registry, "true", true);
        assert_parses(&registry, "yes", true);

        for value in ["f", "false", "no", ""] {
            let mut dst = true;
            assert!(registry.set_value(&mut dst, value).unwrap());
            assert!(!dst, "{:?} should be false", value);
        }

        assert_rejects::<bool>(&registry, "maybe", "unable to convert string to boolean value");
        assert_rejects::<bool>(&registry, "TRUE", "unable to convert string to boolean value");
    }

    #[test]
    fn test_durations() {
        init_logging();
        let registry = primitives();
        assert_parses(&registry, "30s", Duration::from_secs(30));
        assert_parses(&registry, "1h30m", Duration::from_secs(5400));
        assert_parses(&registry, "250ms", Duration::from_millis(250));

        let mut span = chrono::Duration::zero();
        assert!(registry.set_value(&mut span, "-45m").unwrap());
        assert_eq!(span, chrono::Duration::minutes(-45));

        assert_rejects::<Duration>(&registry, "x", "invalid duration \"x\"");
        assert_rejects::<Duration>(&registry, "5", "invalid duration \"5\": missing unit");
        assert_rejects::<Duration>(&registry, "5w", "invalid duration \"5w\": unknown unit \"w\"");
    }

    #[test]
    fn test_timestamps() {
        init_logging();
        let registry = primitives();
        let mut dst = chrono::DateTime::<chrono::Utc>::default();
        assert!(registry.set_value(&mut dst, "2021-06-01T00:00:00Z").unwrap());
        assert_eq!(dst.timestamp(), 1_622_505_600);

        let result = registry.set_value(&mut dst, "June 1st");
        assert!(matches!(result, Err(ConversionError::InvalidTimestamp { .. })));
    }

    #[test]
    fn test_failed_dispatch_still_counts_as_handled() {
        init_logging();
        let registry = primitives();
        let mut dst = 7i32;
        let result = registry.set_value(&mut dst, "seven");
        assert!(result.is_err());
        assert!(registry.is_supported(&dst));
        assert_eq!(dst, 7);
    }

    #[test]
    fn test_register_primitives_into_existing_registry() {
        init_logging();
        let mut registry = Registry::new();
        register_primitives(&mut registry).register(|dst: &mut char, value: &str| {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => {
                    *dst = c;
                    Ok(())
                }
                _ => Err(ConversionError::custom("expected a single character")),
            }
        });

        assert_parses(&registry, "z", 'z');
        assert_parses::<u16>(&registry, "65535", u16::MAX);
        assert_rejects::<char>(&registry, "zz", "expected a single character");
    }
}
