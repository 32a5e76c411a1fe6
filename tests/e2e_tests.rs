mod support;

use diesel::prelude::*;

use pitchbase::db::schema::{company, company_industry_relation};
use pitchbase::loader::run_all;
use support::fixture;

#[test]
fn company_and_industry_load_end_to_end() {
    let fx = fixture();
    fx.write_csv(
        "Company.csv",
        "CompanyID,CompanyName,Employees,TotalRaised\n55780-93,Urban Inc.,50,713\n",
    );
    fx.write_csv(
        "CompanyIndustryRelation.csv",
        "RowID,CompanyID,IndustrySector,IsPrimary\nr1,55780-93,Software,Yes\n",
    );

    let report = run_all(&fx.pool, &fx.db_path, &fx.csv_dir).expect("run");
    assert_eq!(report.failures(), 0);
    assert_eq!(report.rows_loaded(), 2);

    let mut conn = fx.conn();

    let (employees, total_raised): (Option<i32>, Option<f64>) = company::table
        .filter(company::company_id.eq("55780-93"))
        .select((company::employees, company::total_raised))
        .first(&mut conn)
        .expect("company row");
    assert_eq!(employees, Some(50));
    assert_eq!(total_raised, Some(713.00));

    let industries: Vec<(String, Option<String>)> = company_industry_relation::table
        .filter(company_industry_relation::company_id.eq("55780-93"))
        .select((
            company_industry_relation::row_id,
            company_industry_relation::is_primary,
        ))
        .load(&mut conn)
        .expect("industry rows");
    assert_eq!(industries.len(), 1);
    assert_eq!(industries[0].0, "r1");
    assert_eq!(industries[0].1.as_deref(), Some("Yes"));
}

#[test]
fn relation_rows_resolve_to_companies_post_load() {
    let fx = fixture();
    fx.write_csv(
        "Company.csv",
        "CompanyID,CompanyName,RowID\n55780-93,Urban Inc.,c1\n11295-73,Compass,c2\n",
    );
    fx.write_csv(
        "CompanyIndustryRelation.csv",
        "RowID,CompanyID,IndustrySector\nr1,55780-93,Software\nr2,11295-73,Real Estate\n",
    );

    let report = run_all(&fx.pool, &fx.db_path, &fx.csv_dir).expect("run");
    assert_eq!(report.failures(), 0);

    let mut conn = fx.conn();
    let unresolved: i64 = company_industry_relation::table
        .left_join(
            company::table
                .on(company::company_id.nullable().eq(company_industry_relation::company_id)),
        )
        .filter(company::company_id.nullable().is_null())
        .count()
        .get_result(&mut conn)
        .expect("integrity probe");
    assert_eq!(unresolved, 0);
}

#[test]
fn deleting_a_company_cascades_to_its_relations() {
    let fx = fixture();
    fx.write_csv(
        "Company.csv",
        "CompanyID,CompanyName\n55780-93,Urban Inc.\n",
    );
    fx.write_csv(
        "CompanyIndustryRelation.csv",
        "RowID,CompanyID,IndustrySector\nr1,55780-93,Software\n",
    );
    run_all(&fx.pool, &fx.db_path, &fx.csv_dir).expect("run");

    let mut conn = fx.conn();
    diesel::delete(company::table.filter(company::company_id.eq("55780-93")))
        .execute(&mut conn)
        .expect("delete company");

    let remaining: i64 = company_industry_relation::table
        .count()
        .get_result(&mut conn)
        .expect("count relations");
    assert_eq!(remaining, 0);
}
