//! Tests for the tl-solve command line.

use std::path::Path;

use clap::Parser;

use tl_core::{RoundingMode, SolverConfig};

use crate::presets::Presets;
use crate::{Args, run};

const PARIS: &str = "\
6 4 5 2 1000
2 0 rue-de-londres 1
0 1 rue-d-amsterdam 1
3 1 rue-d-athenes 1
2 3 rue-de-rome 2
1 2 rue-de-moscou 3
4 rue-de-londres rue-d-amsterdam rue-de-moscou rue-de-rome
3 rue-d-athenes rue-de-moscou rue-de-londres
";

#[cfg(test)]
mod args {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["tl-solve", "a.txt"]).unwrap();
        assert_eq!(args.fallback_config(), SolverConfig::default());
        assert!(args.presets.is_none());
    }

    #[test]
    fn flags_override_fallback() {
        let args = Args::try_parse_from([
            "tl-solve", "e.txt", "--min", "2", "--max", "9", "--upscale-factor", "5", "--round",
        ])
        .unwrap();
        let cfg = args.fallback_config();
        assert_eq!(cfg.min_scheduled_time, 2);
        assert_eq!(cfg.max_scheduled_time, 9);
        assert_eq!(cfg.upscale_factor, 5);
        assert_eq!(cfg.rounding, RoundingMode::Nearest);
    }

    #[test]
    fn input_required() {
        assert!(Args::try_parse_from(["tl-solve"]).is_err());
    }
}

#[cfg(test)]
mod presets {
    use super::*;

    #[test]
    fn lookup_by_file_name() {
        let presets = Presets::from_json(
            r#"{"e.txt": {"min_scheduled_time": 1, "max_scheduled_time": 4, "rounding": "nearest"}}"#,
        )
        .unwrap();
        let fallback = SolverConfig::default();

        let e = presets.config_for(Path::new("input/e.txt"), &fallback);
        assert_eq!(e.max_scheduled_time, 4);
        assert_eq!(e.rounding, RoundingMode::Nearest);
        assert_eq!(e.upscale_fraction, 10);

        assert_eq!(presets.config_for(Path::new("input/b.txt"), &fallback), &fallback);
    }

    #[test]
    fn invalid_preset_rejected() {
        let err = Presets::from_json(r#"{"b.txt": {"min_scheduled_time": 1, "max_scheduled_time": 1}}"#)
            .unwrap_err();
        assert!(format!("{err:#}").contains("b.txt"));
    }

    #[test]
    fn shipped_presets_are_valid() {
        let json = include_str!("../presets.json");
        assert_eq!(Presets::from_json(json).unwrap().len(), 4);
    }
}

#[cfg(test)]
mod batch {
    use std::ffi::OsString;

    use super::*;

    fn argv(input: &Path, output_dir: &Path) -> Vec<OsString> {
        vec![
            "tl-solve".into(),
            input.as_os_str().to_owned(),
            "--output-dir".into(),
            output_dir.as_os_str().to_owned(),
        ]
    }

    #[test]
    fn solves_each_input_into_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("a.txt");
        std::fs::write(&input, PARIS).unwrap();
        let out = dir.path().join("out");

        let args = Args::try_parse_from(argv(&input, &out)).unwrap();
        let reports = run(&args).unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].stats.cars, 2);
        let written = std::fs::read_to_string(out.join("a.txt")).unwrap();
        assert!(written.starts_with("4\n0\n1\nrue-de-londres 2\n"), "{written}");
    }

    #[test]
    fn inputs_sharing_a_file_name_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let (x, y) = (dir.path().join("x"), dir.path().join("y"));
        std::fs::create_dir_all(&x).unwrap();
        std::fs::create_dir_all(&y).unwrap();
        std::fs::write(x.join("a.txt"), PARIS).unwrap();
        std::fs::write(y.join("a.txt"), PARIS).unwrap();
        let out = dir.path().join("out");

        let mut argv = argv(&x.join("a.txt"), &out);
        argv.insert(2, y.join("a.txt").into_os_string());
        let args = Args::try_parse_from(argv).unwrap();

        let err = run(&args).err().unwrap();
        assert!(format!("{err:#}").contains("a.txt"));
        assert!(!out.join("a.txt").exists());
    }

    #[test]
    fn bad_input_fails_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.txt");
        std::fs::write(&input, "6 4 5\n").unwrap();

        let args = Args::try_parse_from(argv(&input, &dir.path().join("out"))).unwrap();
        let err = run(&args).err().unwrap();
        assert!(format!("{err:#}").contains("broken.txt"));
    }
}
