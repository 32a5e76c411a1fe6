//! Row models for the ten feed tables.
//!
//! One struct per table, usable both for reads and for the loader's bulk
//! inserts. Every non-key field is `Option`: the feed nulls out anything
//! absent or unparseable. `from_row` pulls fields by store column name
//! through the catalog's header bindings, so feed renames never touch this
//! file.

use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::SqliteConnection;

use super::schema::{
    company, company_employee_history_relation, company_entity_type_relation,
    company_industry_relation, company_investor_relation, company_market_analysis_relation,
    company_morningstar_code_relation, company_naics_code_relation, company_sic_code_relation,
    company_vertical_relation,
};
use crate::catalog;
use crate::loader::record::{CsvTable, RowView};

/// Root entity row.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = company)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CompanyRow {
    pub company_id: String,
    pub company_name: Option<String>,
    pub company_also_known_as: Option<String>,
    pub company_former_name: Option<String>,
    pub company_legal_name: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub company_financing_status: Option<String>,
    pub total_raised: Option<f64>,
    pub business_status: Option<String>,
    pub ownership_status: Option<String>,
    pub universe: Option<String>,
    pub website: Option<String>,
    pub employees: Option<i32>,
    pub exchange: Option<String>,
    pub ticker: Option<String>,
    pub year_founded: Option<i32>,
    pub parent_company_id: Option<String>,
    pub primary_industry_sector: Option<String>,
    pub primary_industry_group: Option<String>,
    pub primary_industry_code: Option<String>,
    pub all_industries: Option<String>,
    pub verticals: Option<String>,
    pub emerging_spaces: Option<String>,
    pub hq_location: Option<String>,
    pub hq_address_line1: Option<String>,
    pub hq_address_line2: Option<String>,
    pub hq_city: Option<String>,
    pub hq_state_province: Option<String>,
    pub hq_post_code: Option<String>,
    pub hq_country: Option<String>,
    pub hq_phone: Option<String>,
    pub hq_fax: Option<String>,
    pub hq_email: Option<String>,
    pub last_financing_size: Option<f64>,
    pub last_financing_status: Option<String>,
    pub row_id: Option<String>,
    pub last_updated: Option<NaiveDate>,
}

impl CsvTable for CompanyRow {
    fn spec() -> &'static catalog::TableSpec {
        &catalog::COMPANY
    }

    fn from_row(row: &RowView<'_>) -> Self {
        Self {
            company_id: row.key("CompanyID"),
            company_name: row.text("CompanyName"),
            company_also_known_as: row.text("CompanyAlsoKnownAs"),
            company_former_name: row.text("CompanyFormerName"),
            company_legal_name: row.text("CompanyLegalName"),
            description: row.text("Description"),
            keywords: row.text("Keywords"),
            company_financing_status: row.text("CompanyFinancingStatus"),
            total_raised: row.decimal("TotalRaised"),
            business_status: row.text("BusinessStatus"),
            ownership_status: row.text("OwnershipStatus"),
            universe: row.text("Universe"),
            website: row.text("Website"),
            employees: row.integer("Employees"),
            exchange: row.text("Exchange"),
            ticker: row.text("Ticker"),
            year_founded: row.integer("YearFounded"),
            parent_company_id: row.text("ParentCompanyID"),
            primary_industry_sector: row.text("PrimaryIndustrySector"),
            primary_industry_group: row.text("PrimaryIndustryGroup"),
            primary_industry_code: row.text("PrimaryIndustryCode"),
            all_industries: row.text("AllIndustries"),
            verticals: row.text("Verticals"),
            emerging_spaces: row.text("EmergingSpaces"),
            hq_location: row.text("HQLocation"),
            hq_address_line1: row.text("HQAddressLine1"),
            hq_address_line2: row.text("HQAddressLine2"),
            hq_city: row.text("HQCity"),
            hq_state_province: row.text("HQState_Province"),
            hq_post_code: row.text("HQPostCode"),
            hq_country: row.text("HQCountry"),
            hq_phone: row.text("HQPhone"),
            hq_fax: row.text("HQFax"),
            hq_email: row.text("HQEmail"),
            last_financing_size: row.decimal("LastFinancingSize"),
            last_financing_status: row.text("LastFinancingStatus"),
            row_id: row.text("RowID"),
            last_updated: row.date("LastUpdated"),
        }
    }

    fn insert(conn: &mut SqliteConnection, rows: &[Self]) -> diesel::QueryResult<usize> {
        diesel::insert_into(company::table).values(rows).execute(conn)
    }
}

/// Historical headcount sample for a company.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = company_employee_history_relation)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EmployeeHistoryRow {
    pub row_id: String,
    pub company_id: Option<String>,
    pub employee_count: Option<i32>,
    pub date: Option<NaiveDate>,
    pub last_updated: Option<NaiveDate>,
}

impl CsvTable for EmployeeHistoryRow {
    fn spec() -> &'static catalog::TableSpec {
        &catalog::EMPLOYEE_HISTORY
    }

    fn from_row(row: &RowView<'_>) -> Self {
        Self {
            row_id: row.key("RowID"),
            company_id: row.text("CompanyID"),
            employee_count: row.integer("EmployeeCount"),
            date: row.date("Date"),
            last_updated: row.date("LastUpdated"),
        }
    }

    fn insert(conn: &mut SqliteConnection, rows: &[Self]) -> diesel::QueryResult<usize> {
        diesel::insert_into(company_employee_history_relation::table)
            .values(rows)
            .execute(conn)
    }
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = company_entity_type_relation)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EntityTypeRow {
    pub row_id: String,
    pub company_id: Option<String>,
    pub entity_type: Option<String>,
    pub is_primary: Option<String>,
    pub last_updated: Option<NaiveDate>,
}

impl CsvTable for EntityTypeRow {
    fn spec() -> &'static catalog::TableSpec {
        &catalog::ENTITY_TYPE
    }

    fn from_row(row: &RowView<'_>) -> Self {
        Self {
            row_id: row.key("RowID"),
            company_id: row.text("CompanyID"),
            entity_type: row.text("EntityType"),
            is_primary: row.text("IsPrimary"),
            last_updated: row.date("LastUpdated"),
        }
    }

    fn insert(conn: &mut SqliteConnection, rows: &[Self]) -> diesel::QueryResult<usize> {
        diesel::insert_into(company_entity_type_relation::table)
            .values(rows)
            .execute(conn)
    }
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = company_industry_relation)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct IndustryRow {
    pub row_id: String,
    pub company_id: Option<String>,
    pub industry_sector: Option<String>,
    pub industry_group: Option<String>,
    pub industry_code: Option<String>,
    pub is_primary: Option<String>,
    pub last_updated: Option<NaiveDate>,
}

impl CsvTable for IndustryRow {
    fn spec() -> &'static catalog::TableSpec {
        &catalog::INDUSTRY
    }

    fn from_row(row: &RowView<'_>) -> Self {
        Self {
            row_id: row.key("RowID"),
            company_id: row.text("CompanyID"),
            industry_sector: row.text("IndustrySector"),
            industry_group: row.text("IndustryGroup"),
            industry_code: row.text("IndustryCode"),
            is_primary: row.text("IsPrimary"),
            last_updated: row.date("LastUpdated"),
        }
    }

    fn insert(conn: &mut SqliteConnection, rows: &[Self]) -> diesel::QueryResult<usize> {
        diesel::insert_into(company_industry_relation::table)
            .values(rows)
            .execute(conn)
    }
}

/// Investor link. `company_id` here is external and may not resolve to a
/// company row; the table carries the denormalized name for that reason.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = company_investor_relation)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct InvestorRow {
    pub row_id: String,
    pub company_id: Option<String>,
    pub company_name: Option<String>,
    pub investor_id: Option<String>,
    pub investor_name: Option<String>,
    pub investor_status: Option<String>,
    pub holding: Option<String>,
    pub investor_since: Option<NaiveDate>,
    pub investor_exit: Option<NaiveDate>,
    pub investor_website: Option<String>,
    pub last_updated: Option<NaiveDate>,
}

impl CsvTable for InvestorRow {
    fn spec() -> &'static catalog::TableSpec {
        &catalog::INVESTOR
    }

    fn from_row(row: &RowView<'_>) -> Self {
        Self {
            row_id: row.key("RowID"),
            company_id: row.text("CompanyID"),
            company_name: row.text("CompanyName"),
            investor_id: row.text("InvestorID"),
            investor_name: row.text("InvestorName"),
            investor_status: row.text("InvestorStatus"),
            holding: row.text("Holding"),
            investor_since: row.date("InvestorSince"),
            investor_exit: row.date("InvestorExit"),
            investor_website: row.text("InvestorWebsite"),
            last_updated: row.date("LastUpdated"),
        }
    }

    fn insert(conn: &mut SqliteConnection, rows: &[Self]) -> diesel::QueryResult<usize> {
        diesel::insert_into(company_investor_relation::table)
            .values(rows)
            .execute(conn)
    }
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = company_market_analysis_relation)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MarketAnalysisRow {
    pub row_id: String,
    pub company_id: Option<String>,
    pub analyst_curated_vertical: Option<String>,
    pub segment: Option<String>,
    pub subsegment: Option<String>,
    pub acv_report_last_updated: Option<String>,
    pub last_updated: Option<NaiveDate>,
}

impl CsvTable for MarketAnalysisRow {
    fn spec() -> &'static catalog::TableSpec {
        &catalog::MARKET_ANALYSIS
    }

    fn from_row(row: &RowView<'_>) -> Self {
        Self {
            row_id: row.key("RowID"),
            company_id: row.text("CompanyID"),
            analyst_curated_vertical: row.text("AnalystCuratedVertical"),
            segment: row.text("Segment"),
            subsegment: row.text("Subsegment"),
            acv_report_last_updated: row.text("ACVReportLastUpdated"),
            last_updated: row.date("LastUpdated"),
        }
    }

    fn insert(conn: &mut SqliteConnection, rows: &[Self]) -> diesel::QueryResult<usize> {
        diesel::insert_into(company_market_analysis_relation::table)
            .values(rows)
            .execute(conn)
    }
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = company_morningstar_code_relation)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MorningstarCodeRow {
    pub row_id: String,
    pub company_id: Option<String>,
    pub morningstar_code: Option<String>,
    pub morningstar_description: Option<String>,
    pub last_updated: Option<NaiveDate>,
}

impl CsvTable for MorningstarCodeRow {
    fn spec() -> &'static catalog::TableSpec {
        &catalog::MORNINGSTAR_CODE
    }

    fn from_row(row: &RowView<'_>) -> Self {
        Self {
            row_id: row.key("RowID"),
            company_id: row.text("CompanyID"),
            morningstar_code: row.text("MorningstarCode"),
            morningstar_description: row.text("MorningstarDescription"),
            last_updated: row.date("LastUpdated"),
        }
    }

    fn insert(conn: &mut SqliteConnection, rows: &[Self]) -> diesel::QueryResult<usize> {
        diesel::insert_into(company_morningstar_code_relation::table)
            .values(rows)
            .execute(conn)
    }
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = company_naics_code_relation)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct NaicsCodeRow {
    pub row_id: String,
    pub company_id: Option<String>,
    pub naics_sector_code: Option<String>,
    pub naics_sector_description: Option<String>,
    pub naics_industry_code: Option<String>,
    pub naics_industry_description: Option<String>,
    pub last_updated: Option<NaiveDate>,
}

impl CsvTable for NaicsCodeRow {
    fn spec() -> &'static catalog::TableSpec {
        &catalog::NAICS_CODE
    }

    fn from_row(row: &RowView<'_>) -> Self {
        Self {
            row_id: row.key("RowID"),
            company_id: row.text("CompanyID"),
            naics_sector_code: row.text("NaicsSectorCode"),
            naics_sector_description: row.text("NaicsSectorDescription"),
            naics_industry_code: row.text("NaicsIndustryCode"),
            naics_industry_description: row.text("NaicsIndustryDescription"),
            last_updated: row.date("LastUpdated"),
        }
    }

    fn insert(conn: &mut SqliteConnection, rows: &[Self]) -> diesel::QueryResult<usize> {
        diesel::insert_into(company_naics_code_relation::table)
            .values(rows)
            .execute(conn)
    }
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = company_sic_code_relation)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SicCodeRow {
    pub row_id: String,
    pub company_id: Option<String>,
    pub sic_code: Option<String>,
    pub sic_description: Option<String>,
    pub last_updated: Option<NaiveDate>,
}

impl CsvTable for SicCodeRow {
    fn spec() -> &'static catalog::TableSpec {
        &catalog::SIC_CODE
    }

    fn from_row(row: &RowView<'_>) -> Self {
        Self {
            row_id: row.key("RowID"),
            company_id: row.text("CompanyID"),
            sic_code: row.text("SicCode"),
            sic_description: row.text("SicDescription"),
            last_updated: row.date("LastUpdated"),
        }
    }

    fn insert(conn: &mut SqliteConnection, rows: &[Self]) -> diesel::QueryResult<usize> {
        diesel::insert_into(company_sic_code_relation::table)
            .values(rows)
            .execute(conn)
    }
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = company_vertical_relation)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct VerticalRow {
    pub row_id: String,
    pub company_id: Option<String>,
    pub vertical: Option<String>,
    pub last_updated: Option<NaiveDate>,
}

impl CsvTable for VerticalRow {
    fn spec() -> &'static catalog::TableSpec {
        &catalog::VERTICAL
    }

    fn from_row(row: &RowView<'_>) -> Self {
        Self {
            row_id: row.key("RowID"),
            company_id: row.text("CompanyID"),
            vertical: row.text("Vertical"),
            last_updated: row.date("LastUpdated"),
        }
    }

    fn insert(conn: &mut SqliteConnection, rows: &[Self]) -> diesel::QueryResult<usize> {
        diesel::insert_into(company_vertical_relation::table)
            .values(rows)
            .execute(conn)
    }
}
