mod common;

use common::fixtures_root;
use formula_updater::{load_formula, scan_formulas, ConfigError};

#[test]
fn load_formula_from_fixture() {
    let formula = load_formula(&fixtures_root().join("widget.toml")).unwrap();

    assert_eq!(formula.name, "homebrew/core/widget");
    assert_eq!(formula.short_name(), "widget");
    assert_eq!(formula.version, "1.2.0");
    assert_eq!(formula.branch_name(), "widget-1.2.0");
    assert_eq!(formula.checksum.to_string(), "sha256:cafef00d");
    assert_eq!(formula.upstream.owner, "Homebrew");
    assert_eq!(formula.upstream.repo, "homebrew-core");
    assert_eq!(formula.fork.owner, "acme-bot");
    assert_eq!(
        formula.archive_url().unwrap(),
        "https://github.com/acme/widget/archive/v1.2.0.tar.gz"
    );
    assert!(formula.file_path().ends_with("Formula/widget.rb"));
}

#[test]
fn load_formula_rejects_invalid_fixture() {
    let result = load_formula(&fixtures_root().join("broken.toml"));

    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

#[test]
fn scan_formulas_skips_invalid_fixture() {
    let formulas = scan_formulas(&fixtures_root()).unwrap();

    assert_eq!(formulas.len(), 2);
    assert_eq!(formulas[0].name, "phpmyadmin");
    assert_eq!(formulas[1].name, "homebrew/core/widget");

    let repo = formulas[0].repo().unwrap();
    assert_eq!(repo.user, "phpmyadmin");
    assert_eq!(repo.name, "phpmyadmin");
    assert_eq!(formulas[0].extension, "rb");
    assert_eq!(formulas[0].pr_body, "Bumped by the release bot.");
}
