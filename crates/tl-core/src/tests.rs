//! Unit tests for tl-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CarId, IntersectionId, StreetId};

    #[test]
    fn index_roundtrip() {
        let id = StreetId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(StreetId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(IntersectionId(0) < IntersectionId(1));
        assert!(CarId(100) > CarId(99));
    }

    #[test]
    fn oversized_index_rejected() {
        assert!(StreetId::try_from(u32::MAX as usize + 1).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(IntersectionId(7).to_string(), "IntersectionId(7)");
    }
}

#[cfg(test)]
mod rounding {
    use crate::RoundingMode;

    #[test]
    fn truncate_drops_remainder() {
        assert_eq!(RoundingMode::Truncate.divide(199, 100), 1);
        assert_eq!(RoundingMode::Truncate.divide(8, 4), 2);
    }

    #[test]
    fn nearest_rounds_half_to_even() {
        assert_eq!(RoundingMode::Nearest.divide(14, 10), 1);
        assert_eq!(RoundingMode::Nearest.divide(16, 10), 2);
        assert_eq!(RoundingMode::Nearest.divide(5, 2), 2);
        assert_eq!(RoundingMode::Nearest.divide(7, 2), 4);
    }

    #[test]
    fn exact_for_wide_operands() {
        let den = u128::from(u64::MAX);
        assert_eq!(RoundingMode::Truncate.divide(5 * den - 1, den), 4);
        assert_eq!(RoundingMode::Nearest.divide(5 * den - 1, den), 5);
    }

    #[test]
    fn default_is_truncate() {
        assert_eq!(RoundingMode::default(), RoundingMode::Truncate);
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, SolverConfig};

    #[test]
    fn default_is_valid() {
        let cfg = SolverConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.upscale_fraction, 10);
        assert_eq!(cfg.upscale_factor, 2);
    }

    #[test]
    fn equal_bounds_rejected() {
        let err = SolverConfig::with_range(1, 1).validate().unwrap_err();
        assert_eq!(err, CoreError::EmptyTimeRange { min: 1, max: 1 });
    }

    #[test]
    fn inverted_bounds_rejected() {
        assert!(SolverConfig::with_range(5, 2).validate().is_err());
    }

    #[test]
    fn upscaled_count_uses_floor_division() {
        let cfg = SolverConfig::default();
        assert_eq!(cfg.upscaled_street_count(25), 2);
        assert_eq!(cfg.upscaled_street_count(9), 0);
    }

    #[test]
    fn zero_fraction_disables_upscaling() {
        let cfg = SolverConfig { upscale_fraction: 0, ..SolverConfig::default() };
        assert_eq!(cfg.upscaled_street_count(1_000), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_partial_config_fills_defaults() {
        let cfg: SolverConfig =
            serde_json::from_str(r#"{"max_scheduled_time": 6, "rounding": "nearest"}"#).unwrap();
        assert_eq!(cfg.min_scheduled_time, 1);
        assert_eq!(cfg.max_scheduled_time, 6);
        assert_eq!(cfg.rounding, crate::RoundingMode::Nearest);
    }
}
