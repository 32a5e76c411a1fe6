//! Static schema catalog for the PitchBook company feed.
//!
//! One [`TableSpec`] per feed file declares, in order, every column with its
//! CSV source name, store column name, semantic type, and key/index markers.
//! The DDL generator and the CSV loader both read from these descriptors, so
//! a feed rename or type change is absorbed in exactly one place.

pub mod ddl;

/// Semantic column type. Drives both the generated DDL and which coercion
/// the loader applies; free-text columns are never date- or number-parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Unbounded free text (descriptions, addresses, URL lists).
    Text,
    /// Bounded string where the feed guarantees a width.
    VarChar(u16),
    /// Whole number (employee counts, founding year).
    Integer,
    /// Money in millions, 2-place precision.
    Numeric,
    /// Calendar date, not a timestamp.
    Date,
}

/// Key or uniqueness constraint on a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    None,
    PrimaryKey,
    Unique,
}

/// One column of a feed table: the CSV source header it is read from, the
/// store column it is written to, and its type and markers.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub source: &'static str,
    pub target: &'static str,
    pub kind: ColumnKind,
    pub constraint: Constraint,
    pub indexed: bool,
    /// References company(CompanyID) with cascade on update/delete.
    pub company_fk: bool,
    /// Self-referential FK back to company(CompanyID), no cascade.
    pub parent_fk: bool,
}

impl ColumnSpec {
    pub const fn new(name: &'static str, kind: ColumnKind) -> Self {
        Self {
            source: name,
            target: name,
            kind,
            constraint: Constraint::None,
            indexed: false,
            company_fk: false,
            parent_fk: false,
        }
    }

    pub const fn primary_key(mut self) -> Self {
        self.constraint = Constraint::PrimaryKey;
        self
    }

    pub const fn unique(mut self) -> Self {
        self.constraint = Constraint::Unique;
        self
    }

    pub const fn indexed(mut self) -> Self {
        self.indexed = true;
        self
    }

    pub const fn company_fk(mut self) -> Self {
        self.company_fk = true;
        self
    }

    pub const fn parent_fk(mut self) -> Self {
        self.parent_fk = true;
        self
    }
}

/// One feed table: store table name, fixed source filename, ordered columns.
#[derive(Debug)]
pub struct TableSpec {
    pub table: &'static str,
    pub file: &'static str,
    pub columns: &'static [ColumnSpec],
}

impl TableSpec {
    /// CSV source header for a store column, if the column is declared.
    pub fn source_for(&self, target: &str) -> Option<&'static str> {
        self.columns
            .iter()
            .find(|c| c.target == target)
            .map(|c| c.source)
    }
}

/// A named composite index supporting an anticipated query pattern.
#[derive(Debug)]
pub struct IndexSpec {
    pub name: &'static str,
    pub table: &'static str,
    pub columns: &'static [&'static str],
}

use ColumnKind::{Date, Integer, Numeric, Text, VarChar};

pub static COMPANY: TableSpec = TableSpec {
    table: "company",
    file: "Company.csv",
    columns: &[
        ColumnSpec::new("CompanyID", VarChar(20)).primary_key(),
        ColumnSpec::new("CompanyName", VarChar(255)).indexed(),
        ColumnSpec::new("CompanyAlsoKnownAs", Text).indexed(),
        ColumnSpec::new("CompanyFormerName", Text),
        ColumnSpec::new("CompanyLegalName", VarChar(255)),
        ColumnSpec::new("Description", Text),
        ColumnSpec::new("Keywords", Text).indexed(),
        ColumnSpec::new("CompanyFinancingStatus", VarChar(50)),
        ColumnSpec::new("TotalRaised", Numeric).indexed(),
        ColumnSpec::new("BusinessStatus", VarChar(50)).indexed(),
        ColumnSpec::new("OwnershipStatus", VarChar(50)),
        ColumnSpec::new("Universe", VarChar(200)),
        ColumnSpec::new("Website", Text),
        ColumnSpec::new("Employees", Integer).indexed(),
        ColumnSpec::new("Exchange", VarChar(50)),
        ColumnSpec::new("Ticker", VarChar(100)).indexed(),
        ColumnSpec::new("YearFounded", Integer).indexed(),
        ColumnSpec::new("ParentCompanyID", VarChar(20)).parent_fk(),
        ColumnSpec::new("PrimaryIndustrySector", VarChar(100)).indexed(),
        ColumnSpec::new("PrimaryIndustryGroup", VarChar(100)),
        ColumnSpec::new("PrimaryIndustryCode", VarChar(100)),
        ColumnSpec::new("AllIndustries", Text),
        ColumnSpec::new("Verticals", Text),
        ColumnSpec::new("EmergingSpaces", VarChar(255)),
        ColumnSpec::new("HQLocation", VarChar(100)),
        ColumnSpec::new("HQAddressLine1", VarChar(100)),
        ColumnSpec::new("HQAddressLine2", VarChar(100)),
        ColumnSpec::new("HQCity", VarChar(100)).indexed(),
        ColumnSpec::new("HQState_Province", VarChar(100)),
        ColumnSpec::new("HQPostCode", VarChar(30)),
        ColumnSpec::new("HQCountry", VarChar(50)).indexed(),
        ColumnSpec::new("HQPhone", VarChar(50)),
        ColumnSpec::new("HQFax", VarChar(255)),
        ColumnSpec::new("HQEmail", VarChar(100)),
        ColumnSpec::new("LastFinancingSize", Numeric),
        ColumnSpec::new("LastFinancingStatus", VarChar(50)),
        ColumnSpec::new("RowID", VarChar(255)).unique(),
        ColumnSpec::new("LastUpdated", Date).indexed(),
    ],
};

pub static EMPLOYEE_HISTORY: TableSpec = TableSpec {
    table: "company_employee_history_relation",
    file: "CompanyEmployeeHistoryRelation.csv",
    columns: &[
        ColumnSpec::new("RowID", VarChar(255)).primary_key(),
        ColumnSpec::new("CompanyID", VarChar(20)).company_fk().indexed(),
        ColumnSpec::new("EmployeeCount", Integer).indexed(),
        ColumnSpec::new("Date", Date).indexed(),
        ColumnSpec::new("LastUpdated", Date),
    ],
};

pub static ENTITY_TYPE: TableSpec = TableSpec {
    table: "company_entity_type_relation",
    file: "CompanyEntityTypeRelation.csv",
    columns: &[
        ColumnSpec::new("RowID", VarChar(255)).primary_key(),
        ColumnSpec::new("CompanyID", VarChar(20)).company_fk().indexed(),
        ColumnSpec::new("EntityType", VarChar(255)).indexed(),
        ColumnSpec::new("IsPrimary", VarChar(10)),
        ColumnSpec::new("LastUpdated", Date),
    ],
};

pub static INDUSTRY: TableSpec = TableSpec {
    table: "company_industry_relation",
    file: "CompanyIndustryRelation.csv",
    columns: &[
        ColumnSpec::new("RowID", VarChar(255)).primary_key(),
        ColumnSpec::new("CompanyID", VarChar(20)).company_fk().indexed(),
        ColumnSpec::new("IndustrySector", VarChar(100)).indexed(),
        ColumnSpec::new("IndustryGroup", VarChar(100)).indexed(),
        ColumnSpec::new("IndustryCode", VarChar(100)).indexed(),
        ColumnSpec::new("IsPrimary", VarChar(10)),
        ColumnSpec::new("LastUpdated", Date),
    ],
};

/// Investor identifiers are external and may not resolve, so `CompanyID`
/// here is indexed but deliberately not constrained to `company`.
pub static INVESTOR: TableSpec = TableSpec {
    table: "company_investor_relation",
    file: "CompanyInvestorRelation.csv",
    columns: &[
        ColumnSpec::new("RowID", VarChar(255)).primary_key(),
        ColumnSpec::new("CompanyID", VarChar(20)).indexed(),
        ColumnSpec::new("CompanyName", VarChar(255)),
        ColumnSpec::new("InvestorID", VarChar(20)),
        ColumnSpec::new("InvestorName", VarChar(255)),
        ColumnSpec::new("InvestorStatus", VarChar(50)),
        ColumnSpec::new("Holding", VarChar(255)),
        ColumnSpec::new("InvestorSince", Date),
        ColumnSpec::new("InvestorExit", Date),
        ColumnSpec::new("InvestorWebsite", Text),
        ColumnSpec::new("LastUpdated", Date),
    ],
};

pub static MARKET_ANALYSIS: TableSpec = TableSpec {
    table: "company_market_analysis_relation",
    file: "CompanyMarketAnalysisRelation.csv",
    columns: &[
        ColumnSpec::new("RowID", VarChar(255)).primary_key(),
        ColumnSpec::new("CompanyID", VarChar(20)).company_fk().indexed(),
        ColumnSpec::new("AnalystCuratedVertical", Text).indexed(),
        ColumnSpec::new("Segment", Text).indexed(),
        ColumnSpec::new("Subsegment", Text).indexed(),
        // Quarter labels like "Q2 2023", not a calendar date.
        ColumnSpec::new("ACVReportLastUpdated", Text),
        ColumnSpec::new("LastUpdated", Date),
    ],
};

pub static MORNINGSTAR_CODE: TableSpec = TableSpec {
    table: "company_morningstar_code_relation",
    file: "CompanyMorningstarCodeRelation.csv",
    columns: &[
        ColumnSpec::new("RowID", VarChar(255)).primary_key(),
        ColumnSpec::new("CompanyID", VarChar(20)).company_fk().indexed(),
        ColumnSpec::new("MorningstarCode", VarChar(100)).indexed(),
        ColumnSpec::new("MorningstarDescription", VarChar(200)),
        ColumnSpec::new("LastUpdated", Date),
    ],
};

pub static NAICS_CODE: TableSpec = TableSpec {
    table: "company_naics_code_relation",
    file: "CompanyNaicsCodeRelation.csv",
    columns: &[
        ColumnSpec::new("RowID", VarChar(255)).primary_key(),
        ColumnSpec::new("CompanyID", VarChar(20)).company_fk().indexed(),
        ColumnSpec::new("NaicsSectorCode", VarChar(20)).indexed(),
        ColumnSpec::new("NaicsSectorDescription", Text),
        ColumnSpec::new("NaicsIndustryCode", VarChar(20)).indexed(),
        ColumnSpec::new("NaicsIndustryDescription", Text),
        ColumnSpec::new("LastUpdated", Date),
    ],
};

pub static SIC_CODE: TableSpec = TableSpec {
    table: "company_sic_code_relation",
    file: "CompanySicCodeRelation.csv",
    columns: &[
        ColumnSpec::new("RowID", VarChar(255)).primary_key(),
        ColumnSpec::new("CompanyID", VarChar(20)).company_fk().indexed(),
        ColumnSpec::new("SicCode", VarChar(40)).indexed(),
        ColumnSpec::new("SicDescription", VarChar(255)),
        ColumnSpec::new("LastUpdated", Date),
    ],
};

pub static VERTICAL: TableSpec = TableSpec {
    table: "company_vertical_relation",
    file: "CompanyVerticalRelation.csv",
    columns: &[
        ColumnSpec::new("RowID", VarChar(255)).primary_key(),
        ColumnSpec::new("CompanyID", VarChar(20)).company_fk().indexed(),
        ColumnSpec::new("Vertical", VarChar(255)).indexed(),
        ColumnSpec::new("LastUpdated", Date),
    ],
};

/// All tables in creation and load order: `company` first, since every
/// constrained relation references it. Drops walk this list in reverse.
pub static LOAD_ORDER: [&TableSpec; 10] = [
    &COMPANY,
    &EMPLOYEE_HISTORY,
    &ENTITY_TYPE,
    &INDUSTRY,
    &INVESTOR,
    &MARKET_ANALYSIS,
    &MORNINGSTAR_CODE,
    &NAICS_CODE,
    &SIC_CODE,
    &VERTICAL,
];

/// Composite indexes supporting the query layer's anticipated patterns.
/// Names are part of the external contract; do not rename.
pub static COMPOSITE_INDEXES: [IndexSpec; 6] = [
    IndexSpec {
        name: "idx_company_search",
        table: "company",
        columns: &["CompanyName", "CompanyAlsoKnownAs"],
    },
    IndexSpec {
        name: "idx_company_metrics",
        table: "company",
        columns: &["Employees", "TotalRaised", "YearFounded"],
    },
    IndexSpec {
        name: "idx_company_location",
        table: "company",
        columns: &["HQCountry", "HQCity"],
    },
    IndexSpec {
        name: "idx_employee_history",
        table: "company_employee_history_relation",
        columns: &["CompanyID", "Date"],
    },
    IndexSpec {
        name: "idx_industry_analysis",
        table: "company_industry_relation",
        columns: &["CompanyID", "IndustrySector"],
    },
    IndexSpec {
        name: "idx_market_analysis",
        table: "company_market_analysis_relation",
        columns: &["CompanyID", "AnalystCuratedVertical"],
    },
];
