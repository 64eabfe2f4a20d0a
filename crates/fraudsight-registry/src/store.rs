//! Registry store abstraction and the in-memory snapshot implementation

use async_trait::async_trait;
use chrono::NaiveDate;
use fraudsight_core::Result;

use crate::advisor::{AdvisorRecord, AdvisorStatus};

/// Read-only provider of advisor records
///
/// Implementations back the resolver's tiered cascade: exact name equality,
/// full-text search over name/firm/registration, substring search, and
/// exact registration-key lookup. All lookups are case-insensitive.
#[async_trait]
pub trait RegistryStore: Send + Sync {
    /// Records whose name equals `name` exactly, case-insensitive
    async fn find_exact_name(&self, name: &str, limit: usize) -> Result<Vec<AdvisorRecord>>;

    /// Full-text search over name, firm, and registration number
    async fn search_text(&self, query: &str, limit: usize) -> Result<Vec<AdvisorRecord>>;

    /// Records whose name contains `query` or is contained by it
    async fn search_substring(&self, query: &str, limit: usize) -> Result<Vec<AdvisorRecord>>;

    /// The record with this registration number, if any
    async fn find_by_registration(&self, registration_number: &str)
        -> Result<Option<AdvisorRecord>>;
}

/// In-memory registry snapshot
///
/// Iteration order is the insertion order of the backing records, which
/// fixes the tie-break order the resolver documents. Full-text search
/// matches any whitespace token of the query against name, firm, or
/// registration number.
pub struct InMemoryRegistry {
    advisors: Vec<AdvisorRecord>,
}

impl InMemoryRegistry {
    /// Build a registry over a fixed snapshot of records
    pub fn new(advisors: Vec<AdvisorRecord>) -> Self {
        Self { advisors }
    }

    /// Registry seeded with the reference fixture dataset
    pub fn seeded() -> Self {
        Self::new(seed_advisors())
    }

    /// Number of records in the snapshot
    pub fn len(&self) -> usize {
        self.advisors.len()
    }

    /// True when the snapshot holds no records
    pub fn is_empty(&self) -> bool {
        self.advisors.is_empty()
    }
}

#[async_trait]
impl RegistryStore for InMemoryRegistry {
    async fn find_exact_name(&self, name: &str, limit: usize) -> Result<Vec<AdvisorRecord>> {
        let needle = name.to_lowercase();
        Ok(self
            .advisors
            .iter()
            .filter(|a| a.name.to_lowercase() == needle)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn search_text(&self, query: &str, limit: usize) -> Result<Vec<AdvisorRecord>> {
        let tokens: Vec<String> = query
            .to_lowercase()
            .split_whitespace()
            .map(|t| t.to_string())
            .collect();
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self
            .advisors
            .iter()
            .filter(|a| {
                let name = a.name.to_lowercase();
                let firm = a.firm.to_lowercase();
                let registration = a.registration_number.to_lowercase();
                tokens.iter().any(|t| {
                    name.contains(t) || firm.contains(t) || registration.contains(t)
                })
            })
            .take(limit)
            .cloned()
            .collect())
    }

    async fn search_substring(&self, query: &str, limit: usize) -> Result<Vec<AdvisorRecord>> {
        let needle = query.to_lowercase();
        Ok(self
            .advisors
            .iter()
            .filter(|a| {
                let name = a.name.to_lowercase();
                name.contains(&needle) || needle.contains(&name)
            })
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_by_registration(
        &self,
        registration_number: &str,
    ) -> Result<Option<AdvisorRecord>> {
        let needle = registration_number.to_lowercase();
        Ok(self
            .advisors
            .iter()
            .find(|a| a.registration_number.to_lowercase() == needle)
            .cloned())
    }
}

fn advisor(
    name: &str,
    registration_number: &str,
    status: AdvisorStatus,
    firm: &str,
    email: &str,
    phone: &str,
    certifications: &[&str],
    specializations: &[&str],
    registration_date: NaiveDate,
) -> AdvisorRecord {
    AdvisorRecord {
        name: name.to_string(),
        registration_number: registration_number.to_string(),
        status,
        firm: firm.to_string(),
        email: Some(email.to_string()),
        phone: Some(phone.to_string()),
        certifications: certifications.iter().map(|c| c.to_string()).collect(),
        specializations: specializations.iter().map(|s| s.to_string()).collect(),
        registration_date,
    }
}

/// Reference fixture dataset for demos and tests
fn seed_advisors() -> Vec<AdvisorRecord> {
    vec![
        advisor(
            "Rajesh Kumar Sharma",
            "INH000001234",
            AdvisorStatus::Active,
            "SecureWealth Financial Advisors",
            "rajesh.sharma@securewealth.in",
            "+91-9876543210",
            &["CFP", "CFA", "SEBI Investment Advisor"],
            &["Equity Investments", "Mutual Funds", "Tax Planning"],
            NaiveDate::from_ymd_opt(2018, 3, 15).expect("valid date"),
        ),
        advisor(
            "Priya Singh",
            "INH000002345",
            AdvisorStatus::Active,
            "WealthMax Advisory Services",
            "priya.singh@wealthmax.in",
            "+91-9876543211",
            &["CFP", "SEBI Investment Advisor"],
            &["Portfolio Management", "Retirement Planning", "Insurance"],
            NaiveDate::from_ymd_opt(2019, 7, 22).expect("valid date"),
        ),
        advisor(
            "Amit Patel",
            "INH000003456",
            AdvisorStatus::Suspended,
            "InvestSmart Solutions",
            "amit.patel@investsmart.in",
            "+91-9876543212",
            &["SEBI Investment Advisor"],
            &["Stock Market", "Derivatives"],
            NaiveDate::from_ymd_opt(2017, 11, 8).expect("valid date"),
        ),
        advisor(
            "Deepika Gupta",
            "INH000004567",
            AdvisorStatus::Active,
            "FinanceFirst Advisory",
            "deepika.gupta@financefirst.in",
            "+91-9876543213",
            &["CFA", "CFP", "SEBI Investment Advisor", "FRM"],
            &["Alternative Investments", "Real Estate", "Commodities"],
            NaiveDate::from_ymd_opt(2020, 1, 10).expect("valid date"),
        ),
        advisor(
            "Sandeep Joshi",
            "INH000005678",
            AdvisorStatus::Active,
            "MoneyWise Consultants",
            "sandeep.joshi@moneywise.in",
            "+91-9876543214",
            &["CFP", "SEBI Investment Advisor"],
            &["Financial Planning", "Goal-based Investing", "SIP Advisory"],
            NaiveDate::from_ymd_opt(2019, 4, 18).expect("valid date"),
        ),
        advisor(
            "Kavitha Nair",
            "INH000006789",
            AdvisorStatus::Cancelled,
            "SmartInvest Advisory",
            "kavitha.nair@smartinvest.in",
            "+91-9876543215",
            &["SEBI Investment Advisor"],
            &["Mutual Funds", "ELSS"],
            NaiveDate::from_ymd_opt(2016, 9, 5).expect("valid date"),
        ),
    ]
}
