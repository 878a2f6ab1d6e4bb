//! Data generator: tops up existing companies to the employee target, then
//! adds fully staffed companies until the cap is reached.
//!
//! Identifiers are assigned here as one past the largest id already stored,
//! advancing only when a row is actually inserted. Duplicate company names
//! and employee emails are detected with a lookup before the insert and
//! skipped; any database error aborts the pass.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};

use crate::config::Limits;
use crate::entity::{company, employee};
use crate::error::SeedError;
use crate::fake::FakeData;
use crate::suffix::{SuffixLookup, resolve_suffix};

/// What a generation pass did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Existing companies that were below target and received employees.
    pub companies_topped_up: u64,
    pub companies_added: u64,
    pub employees_added: u64,
    pub skipped_company_names: u64,
    pub skipped_employee_emails: u64,
}

impl GenerationReport {
    /// True when nothing was written.
    pub fn is_noop(&self) -> bool {
        self.companies_added == 0 && self.employees_added == 0
    }
}

/// Monotonic id allocator seeded from the current maximum.
///
/// `next` is `None` once the id space is used up; that only fails when another
/// id is actually requested.
#[derive(Debug, Clone, Copy)]
struct IdSequence {
    table: &'static str,
    next: Option<i32>,
}

impl IdSequence {
    fn after(table: &'static str, max: Option<i32>) -> Self {
        Self {
            table,
            next: max.unwrap_or(0).checked_add(1),
        }
    }

    fn peek(&self) -> Result<i32, SeedError> {
        self.next.ok_or(SeedError::IdsExhausted(self.table))
    }

    fn advance(&mut self) {
        self.next = self.next.and_then(|id| id.checked_add(1));
    }
}

pub struct Generator<F: FakeData> {
    limits: Limits,
    faker: F,
    suffixes: Option<Box<dyn SuffixLookup>>,
}

impl<F: FakeData> Generator<F> {
    pub fn new(limits: Limits, faker: F) -> Self {
        Self {
            limits,
            faker,
            suffixes: None,
        }
    }

    /// Fetch company suffixes remotely, falling back to the faker on failure.
    pub fn with_suffix_lookup(mut self, lookup: Box<dyn SuffixLookup>) -> Self {
        self.suffixes = Some(lookup);
        self
    }

    /// Run both passes inside a single transaction.
    ///
    /// On error the transaction is dropped and nothing from this pass is kept.
    pub async fn run(&mut self, db: &DatabaseConnection) -> Result<GenerationReport, SeedError> {
        let txn = db.begin().await?;
        let report = self.run_in(&txn).await?;
        txn.commit().await?;
        Ok(report)
    }

    /// Run both passes on an existing connection or transaction.
    pub async fn run_in<C: ConnectionTrait>(
        &mut self,
        db: &C,
    ) -> Result<GenerationReport, SeedError> {
        let company_count = company::Entity::find().count(db).await?;
        let mut company_ids = IdSequence::after("companies", max_company_id(db).await?);
        let mut employee_ids = IdSequence::after("employees", max_employee_id(db).await?);
        let mut report = GenerationReport::default();

        self.top_up(db, &mut employee_ids, &mut report).await?;
        self.expand(
            db,
            company_count,
            &mut company_ids,
            &mut employee_ids,
            &mut report,
        )
        .await?;

        tracing::info!(
            companies_added = report.companies_added,
            companies_topped_up = report.companies_topped_up,
            employees_added = report.employees_added,
            skipped_company_names = report.skipped_company_names,
            skipped_employee_emails = report.skipped_employee_emails,
            "data generation finished"
        );
        Ok(report)
    }

    // ---------- pass 1: top-up ----------

    async fn top_up<C: ConnectionTrait>(
        &mut self,
        db: &C,
        employee_ids: &mut IdSequence,
        report: &mut GenerationReport,
    ) -> Result<(), SeedError> {
        let target = self.limits.employees_per_company;
        let company_ids: Vec<i32> = company::Entity::find()
            .select_only()
            .column(company::Column::Id)
            .order_by_asc(company::Column::Id)
            .into_tuple()
            .all(db)
            .await?;

        for company_id in company_ids {
            let employee_count = employee::Entity::find()
                .filter(employee::Column::CompanyId.eq(company_id))
                .count(db)
                .await?;
            if employee_count >= target {
                tracing::info!(
                    company_id,
                    employee_count,
                    target,
                    "company already at target, skipping"
                );
                continue;
            }

            let to_add = target - employee_count;
            tracing::info!(company_id, to_add, "adding employees to existing company");
            report.companies_topped_up += 1;
            self.hire(db, company_id, to_add, employee_ids, report)
                .await?;
        }
        Ok(())
    }

    // ---------- pass 2: expansion ----------

    async fn expand<C: ConnectionTrait>(
        &mut self,
        db: &C,
        company_count: u64,
        company_ids: &mut IdSequence,
        employee_ids: &mut IdSequence,
        report: &mut GenerationReport,
    ) -> Result<(), SeedError> {
        let cap = self.limits.max_companies;
        if company_count >= cap {
            tracing::info!(
                company_count,
                max_companies = cap,
                "maximum number of companies already reached, no new companies added"
            );
            return Ok(());
        }

        let slots = cap - company_count;
        for _ in 0..slots {
            let base = self.faker.company();
            let suffix = resolve_suffix(self.suffixes.as_deref(), &mut self.faker).await;
            let name = format!("{base} {suffix}");
            let location = self.faker.city();
            let industry = self.faker.industry();

            if let Some(existing) = company::Entity::find()
                .filter(company::Column::Name.eq(name.as_str()))
                .one(db)
                .await?
            {
                tracing::info!(
                    name = %name,
                    existing_id = existing.id,
                    "skipping company, name already exists"
                );
                report.skipped_company_names += 1;
                continue;
            }

            let company_id = company_ids.peek()?;
            company::ActiveModel {
                id: Set(company_id),
                name: Set(name),
                location: Set(Some(location)),
                industry: Set(Some(industry)),
            }
            .insert(db)
            .await?;
            company_ids.advance();
            report.companies_added += 1;

            let target = self.limits.employees_per_company;
            self.hire(db, company_id, target, employee_ids, report)
                .await?;
        }

        if report.companies_added > 0 {
            tracing::info!(count = report.companies_added, "inserted new companies");
        } else {
            tracing::info!("no new companies inserted, all generated names were duplicates");
        }
        Ok(())
    }

    // ---------- employees ----------

    /// Insert up to `count` employees for `company_id`, skipping taken emails.
    async fn hire<C: ConnectionTrait>(
        &mut self,
        db: &C,
        company_id: i32,
        count: u64,
        ids: &mut IdSequence,
        report: &mut GenerationReport,
    ) -> Result<(), SeedError> {
        for _ in 0..count {
            let name = self.faker.name();
            let email = self.faker.email();

            if email_exists(db, &email).await? {
                tracing::info!(email = %email, "skipping employee, email already exists");
                report.skipped_employee_emails += 1;
                continue;
            }

            employee::ActiveModel {
                id: Set(ids.peek()?),
                name: Set(name),
                email: Set(email),
                company_id: Set(company_id),
            }
            .insert(db)
            .await?;
            ids.advance();
            report.employees_added += 1;
        }
        Ok(())
    }
}

async fn email_exists<C: ConnectionTrait>(db: &C, email: &str) -> Result<bool, SeedError> {
    let found = employee::Entity::find()
        .filter(employee::Column::Email.eq(email))
        .one(db)
        .await?;
    Ok(found.is_some())
}

async fn max_company_id<C: ConnectionTrait>(db: &C) -> Result<Option<i32>, SeedError> {
    let max: Option<Option<i32>> = company::Entity::find()
        .select_only()
        .column_as(Expr::col(company::Column::Id).max(), "max_id")
        .into_tuple()
        .one(db)
        .await?;
    Ok(max.flatten())
}

async fn max_employee_id<C: ConnectionTrait>(db: &C) -> Result<Option<i32>, SeedError> {
    let max: Option<Option<i32>> = employee::Entity::find()
        .select_only()
        .column_as(Expr::col(employee::Column::Id).max(), "max_id")
        .into_tuple()
        .one(db)
        .await?;
    Ok(max.flatten())
}
