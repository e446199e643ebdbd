//! Runs the checked-in fixture sets through the solve pipeline in both modes.

use std::path::PathBuf;

use luckyint_core::ParseMode;
use luckyint_harness::fixtures::{CaseMode, LoadedFixture, fixture_paths, sha256_hex};
use luckyint_harness::{ConformanceReport, TestRunner, VerificationSummary};

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_all() -> Vec<LoadedFixture> {
    let paths = fixture_paths(&fixture_dir()).expect("fixture dir readable");
    assert!(!paths.is_empty(), "no fixtures in {}", fixture_dir().display());
    paths
        .iter()
        .map(|p| LoadedFixture::load(p).expect("fixture parses"))
        .collect()
}

#[test]
fn every_fixture_passes_in_strict_mode() {
    let runner = TestRunner::new("pipeline", ParseMode::Strict);
    for fixture in load_all() {
        let results = runner.run(&fixture.set);
        assert!(!results.is_empty());
        for r in &results {
            assert!(r.passed, "{}: {:?}", r.case_name, r.diff);
        }
    }
}

#[test]
fn every_fixture_passes_in_lenient_mode() {
    let runner = TestRunner::new("pipeline", ParseMode::Lenient);
    for fixture in load_all() {
        for r in runner.run(&fixture.set) {
            assert!(r.passed, "{}: {:?}", r.case_name, r.diff);
        }
    }
}

#[test]
fn mode_specific_cases_run_once() {
    let fixtures = load_all();
    let set = &fixtures[0].set;
    let both = set.cases.iter().filter(|c| c.mode == CaseMode::Both).count();
    let strict_only = set.cases.iter().filter(|c| c.mode == CaseMode::Strict).count();
    let strict = TestRunner::new("pipeline", ParseMode::Strict).run(set);
    assert_eq!(strict.len(), both + strict_only);
    assert!(strict.iter().all(|r| r.mode == "strict"));
}

#[test]
fn digest_matches_file_contents() {
    for fixture in load_all() {
        let bytes = std::fs::read(&fixture.path).unwrap();
        assert_eq!(fixture.sha256, sha256_hex(&bytes));
        assert_eq!(fixture.sha256.len(), 64);
    }
}

#[test]
fn report_covers_all_results() {
    let fixtures = load_all();
    let mut results = Vec::new();
    for mode in [ParseMode::Strict, ParseMode::Lenient] {
        let runner = TestRunner::new("pipeline", mode);
        for f in &fixtures {
            results.extend(runner.run(&f.set));
        }
    }
    let total = results.len();
    let report = ConformanceReport {
        title: "luckyint Conformance Report".into(),
        mode: "strict+lenient".into(),
        timestamp: "fixed".into(),
        sources: Vec::new(),
        summary: VerificationSummary::from_results(results),
    };
    assert!(report.summary.all_passed());
    assert_eq!(report.summary.total, total);
    let md = report.to_markdown();
    assert_eq!(md.matches("| PASS |").count(), total);
}
