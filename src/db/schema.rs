//! Diesel table definitions for the feed schema.
//!
//! Store column names keep the feed's exact identifiers (the downstream
//! query layer matches on them literally); the Rust-side names are
//! snake_case via `sql_name`. The DDL itself is generated from the catalog
//! descriptors; these definitions mirror them for typed reads and inserts.

diesel::table! {
    company (company_id) {
        #[sql_name = "CompanyID"]
        company_id -> Text,
        #[sql_name = "CompanyName"]
        company_name -> Nullable<Text>,
        #[sql_name = "CompanyAlsoKnownAs"]
        company_also_known_as -> Nullable<Text>,
        #[sql_name = "CompanyFormerName"]
        company_former_name -> Nullable<Text>,
        #[sql_name = "CompanyLegalName"]
        company_legal_name -> Nullable<Text>,
        #[sql_name = "Description"]
        description -> Nullable<Text>,
        #[sql_name = "Keywords"]
        keywords -> Nullable<Text>,
        #[sql_name = "CompanyFinancingStatus"]
        company_financing_status -> Nullable<Text>,
        #[sql_name = "TotalRaised"]
        total_raised -> Nullable<Double>,
        #[sql_name = "BusinessStatus"]
        business_status -> Nullable<Text>,
        #[sql_name = "OwnershipStatus"]
        ownership_status -> Nullable<Text>,
        #[sql_name = "Universe"]
        universe -> Nullable<Text>,
        #[sql_name = "Website"]
        website -> Nullable<Text>,
        #[sql_name = "Employees"]
        employees -> Nullable<Integer>,
        #[sql_name = "Exchange"]
        exchange -> Nullable<Text>,
        #[sql_name = "Ticker"]
        ticker -> Nullable<Text>,
        #[sql_name = "YearFounded"]
        year_founded -> Nullable<Integer>,
        #[sql_name = "ParentCompanyID"]
        parent_company_id -> Nullable<Text>,
        #[sql_name = "PrimaryIndustrySector"]
        primary_industry_sector -> Nullable<Text>,
        #[sql_name = "PrimaryIndustryGroup"]
        primary_industry_group -> Nullable<Text>,
        #[sql_name = "PrimaryIndustryCode"]
        primary_industry_code -> Nullable<Text>,
        #[sql_name = "AllIndustries"]
        all_industries -> Nullable<Text>,
        #[sql_name = "Verticals"]
        verticals -> Nullable<Text>,
        #[sql_name = "EmergingSpaces"]
        emerging_spaces -> Nullable<Text>,
        #[sql_name = "HQLocation"]
        hq_location -> Nullable<Text>,
        #[sql_name = "HQAddressLine1"]
        hq_address_line1 -> Nullable<Text>,
        #[sql_name = "HQAddressLine2"]
        hq_address_line2 -> Nullable<Text>,
        #[sql_name = "HQCity"]
        hq_city -> Nullable<Text>,
        #[sql_name = "HQState_Province"]
        hq_state_province -> Nullable<Text>,
        #[sql_name = "HQPostCode"]
        hq_post_code -> Nullable<Text>,
        #[sql_name = "HQCountry"]
        hq_country -> Nullable<Text>,
        #[sql_name = "HQPhone"]
        hq_phone -> Nullable<Text>,
        #[sql_name = "HQFax"]
        hq_fax -> Nullable<Text>,
        #[sql_name = "HQEmail"]
        hq_email -> Nullable<Text>,
        #[sql_name = "LastFinancingSize"]
        last_financing_size -> Nullable<Double>,
        #[sql_name = "LastFinancingStatus"]
        last_financing_status -> Nullable<Text>,
        #[sql_name = "RowID"]
        row_id -> Nullable<Text>,
        #[sql_name = "LastUpdated"]
        last_updated -> Nullable<Date>,
    }
}

diesel::table! {
    company_employee_history_relation (row_id) {
        #[sql_name = "RowID"]
        row_id -> Text,
        #[sql_name = "CompanyID"]
        company_id -> Nullable<Text>,
        #[sql_name = "EmployeeCount"]
        employee_count -> Nullable<Integer>,
        #[sql_name = "Date"]
        date -> Nullable<Date>,
        #[sql_name = "LastUpdated"]
        last_updated -> Nullable<Date>,
    }
}

diesel::table! {
    company_entity_type_relation (row_id) {
        #[sql_name = "RowID"]
        row_id -> Text,
        #[sql_name = "CompanyID"]
        company_id -> Nullable<Text>,
        #[sql_name = "EntityType"]
        entity_type -> Nullable<Text>,
        #[sql_name = "IsPrimary"]
        is_primary -> Nullable<Text>,
        #[sql_name = "LastUpdated"]
        last_updated -> Nullable<Date>,
    }
}

diesel::table! {
    company_industry_relation (row_id) {
        #[sql_name = "RowID"]
        row_id -> Text,
        #[sql_name = "CompanyID"]
        company_id -> Nullable<Text>,
        #[sql_name = "IndustrySector"]
        industry_sector -> Nullable<Text>,
        #[sql_name = "IndustryGroup"]
        industry_group -> Nullable<Text>,
        #[sql_name = "IndustryCode"]
        industry_code -> Nullable<Text>,
        #[sql_name = "IsPrimary"]
        is_primary -> Nullable<Text>,
        #[sql_name = "LastUpdated"]
        last_updated -> Nullable<Date>,
    }
}

diesel::table! {
    company_investor_relation (row_id) {
        #[sql_name = "RowID"]
        row_id -> Text,
        #[sql_name = "CompanyID"]
        company_id -> Nullable<Text>,
        #[sql_name = "CompanyName"]
        company_name -> Nullable<Text>,
        #[sql_name = "InvestorID"]
        investor_id -> Nullable<Text>,
        #[sql_name = "InvestorName"]
        investor_name -> Nullable<Text>,
        #[sql_name = "InvestorStatus"]
        investor_status -> Nullable<Text>,
        #[sql_name = "Holding"]
        holding -> Nullable<Text>,
        #[sql_name = "InvestorSince"]
        investor_since -> Nullable<Date>,
        #[sql_name = "InvestorExit"]
        investor_exit -> Nullable<Date>,
        #[sql_name = "InvestorWebsite"]
        investor_website -> Nullable<Text>,
        #[sql_name = "LastUpdated"]
        last_updated -> Nullable<Date>,
    }
}

diesel::table! {
    company_market_analysis_relation (row_id) {
        #[sql_name = "RowID"]
        row_id -> Text,
        #[sql_name = "CompanyID"]
        company_id -> Nullable<Text>,
        #[sql_name = "AnalystCuratedVertical"]
        analyst_curated_vertical -> Nullable<Text>,
        #[sql_name = "Segment"]
        segment -> Nullable<Text>,
        #[sql_name = "Subsegment"]
        subsegment -> Nullable<Text>,
        #[sql_name = "ACVReportLastUpdated"]
        acv_report_last_updated -> Nullable<Text>,
        #[sql_name = "LastUpdated"]
        last_updated -> Nullable<Date>,
    }
}

diesel::table! {
    company_morningstar_code_relation (row_id) {
        #[sql_name = "RowID"]
        row_id -> Text,
        #[sql_name = "CompanyID"]
        company_id -> Nullable<Text>,
        #[sql_name = "MorningstarCode"]
        morningstar_code -> Nullable<Text>,
        #[sql_name = "MorningstarDescription"]
        morningstar_description -> Nullable<Text>,
        #[sql_name = "LastUpdated"]
        last_updated -> Nullable<Date>,
    }
}

diesel::table! {
    company_naics_code_relation (row_id) {
        #[sql_name = "RowID"]
        row_id -> Text,
        #[sql_name = "CompanyID"]
        company_id -> Nullable<Text>,
        #[sql_name = "NaicsSectorCode"]
        naics_sector_code -> Nullable<Text>,
        #[sql_name = "NaicsSectorDescription"]
        naics_sector_description -> Nullable<Text>,
        #[sql_name = "NaicsIndustryCode"]
        naics_industry_code -> Nullable<Text>,
        #[sql_name = "NaicsIndustryDescription"]
        naics_industry_description -> Nullable<Text>,
        #[sql_name = "LastUpdated"]
        last_updated -> Nullable<Date>,
    }
}

diesel::table! {
    company_sic_code_relation (row_id) {
        #[sql_name = "RowID"]
        row_id -> Text,
        #[sql_name = "CompanyID"]
        company_id -> Nullable<Text>,
        #[sql_name = "SicCode"]
        sic_code -> Nullable<Text>,
        #[sql_name = "SicDescription"]
        sic_description -> Nullable<Text>,
        #[sql_name = "LastUpdated"]
        last_updated -> Nullable<Date>,
    }
}

diesel::table! {
    company_vertical_relation (row_id) {
        #[sql_name = "RowID"]
        row_id -> Text,
        #[sql_name = "CompanyID"]
        company_id -> Nullable<Text>,
        #[sql_name = "Vertical"]
        vertical -> Nullable<Text>,
        #[sql_name = "LastUpdated"]
        last_updated -> Nullable<Date>,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    company,
    company_employee_history_relation,
    company_entity_type_relation,
    company_industry_relation,
    company_investor_relation,
    company_market_analysis_relation,
    company_morningstar_code_relation,
    company_naics_code_relation,
    company_sic_code_relation,
    company_vertical_relation,
);
