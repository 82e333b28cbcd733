//! Integration tests for message catalogs loaded from disk

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;

use plural_template::{Catalog, CatalogError};

fn write_catalog(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "plural-template-{}-{}.toml",
        name,
        std::process::id()
    ));
    fs::write(&path, content).expect("Should write catalog");
    path
}

#[test]
fn test_catalog_from_file() {
    let path = write_catalog(
        "shop",
        r#"
[metadata]
name = "shop"

[messages]
cart = "Your cart holds [#] [item|items|nothing]"
checkout = { template = "Ship [#] parcel[|s] to [0]", join = " & " }
"#,
    );

    let catalog = Catalog::from_file(&path).expect("Should load");
    let args: &[&str] = &[];
    assert_eq!(
        catalog.render("cart", 0, args).unwrap(),
        "Your cart holds 0 nothing"
    );
    assert_eq!(
        catalog.render("cart", 2, args).unwrap(),
        "Your cart holds 2 items"
    );
    assert_eq!(
        catalog.render_list("checkout", &["Oslo", "Bergen"]).unwrap(),
        "Ship 2 parcels to Oslo & Bergen"
    );

    fs::remove_file(&path).ok();
}

#[test]
fn test_catalog_missing_file() {
    let path = std::env::temp_dir().join("plural-template-does-not-exist.toml");
    let err = Catalog::from_file(&path).unwrap_err();
    assert!(matches!(err, CatalogError::IoError(_)));
}

#[test]
fn test_catalog_reports_broken_message() {
    let path = write_catalog(
        "broken",
        r#"
[messages]
ok = "[#] ok"
bad = "[#] dog[s]"
"#,
    );

    let err = Catalog::from_file(&path).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("'bad'"));
    assert!(message.contains("unknown directive '[s]'"));

    fs::remove_file(&path).ok();
}
