mod support;

use assert_cmd::Command;
use predicates::prelude::*;

use support::{company_csv_one_row, count_rows, write_config};

fn pitchbase() -> Command {
    Command::cargo_bin("pitchbase").expect("binary")
}

#[test]
fn schema_then_load_populates_the_store() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = dir.path().join("pitchbook.db");
    let csv_dir = dir.path().join("exports");
    std::fs::create_dir(&csv_dir).expect("csv dir");
    std::fs::write(csv_dir.join("Company.csv"), company_csv_one_row()).expect("csv");
    let config = write_config(dir.path(), &db_path, &csv_dir);

    pitchbase()
        .arg("--config")
        .arg(&config)
        .arg("schema")
        .assert()
        .success();
    assert!(db_path.exists());

    pitchbase()
        .arg("--config")
        .arg(&config)
        .arg("load")
        .assert()
        .success();

    let pool = pitchbase::db::create_pool(&db_path.to_string_lossy()).expect("pool");
    let mut conn = pool.get().expect("conn");
    assert_eq!(count_rows(&mut conn, "company"), 1);
}

#[test]
fn load_exits_nonzero_when_a_file_hard_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = dir.path().join("pitchbook.db");
    let csv_dir = dir.path().join("exports");
    std::fs::create_dir(&csv_dir).expect("csv dir");
    // No Company.csv: the constrained industry relation trips the foreign
    // key and its batch rolls back, while the investor file still lands.
    std::fs::write(
        csv_dir.join("CompanyIndustryRelation.csv"),
        "RowID,CompanyID,IndustrySector\nr1,99999-99,Software\n",
    )
    .expect("csv");
    std::fs::write(
        csv_dir.join("CompanyInvestorRelation.csv"),
        "RowID,CompanyID,InvestorName\ni1,99999-99,Fidelity Investments\n",
    )
    .expect("csv");
    let config = write_config(dir.path(), &db_path, &csv_dir);

    pitchbase()
        .arg("--config")
        .arg(&config)
        .arg("schema")
        .assert()
        .success();

    pitchbase()
        .arg("--config")
        .arg(&config)
        .arg("load")
        .assert()
        .failure();

    let pool = pitchbase::db::create_pool(&db_path.to_string_lossy()).expect("pool");
    let mut conn = pool.get().expect("conn");
    assert_eq!(count_rows(&mut conn, "company_industry_relation"), 0);
    assert_eq!(count_rows(&mut conn, "company_investor_relation"), 1);
}

#[test]
fn load_before_schema_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = dir.path().join("pitchbook.db");
    let csv_dir = dir.path().join("exports");
    std::fs::create_dir(&csv_dir).expect("csv dir");
    let config = write_config(dir.path(), &db_path, &csv_dir);

    pitchbase()
        .arg("--config")
        .arg(&config)
        .arg("load")
        .assert()
        .failure();
}

#[test]
fn missing_config_is_reported() {
    pitchbase()
        .arg("--config")
        .arg("definitely-not-here.toml")
        .arg("schema")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}
