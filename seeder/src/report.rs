use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use std::fmt;

use crate::entity::{company, employee};
use crate::error::SeedError;

/// Employees shown per company.
pub const SAMPLE_SIZE: u64 = 3;

#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct CompanyCount {
    pub id: i32,
    pub name: String,
    pub location: Option<String>,
    pub industry: Option<String>,
    pub employee_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanySummary {
    pub company: CompanyCount,
    pub sample: Vec<employee::Model>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub companies: Vec<CompanySummary>,
    pub total_companies: u64,
    pub total_employees: u64,
    pub max_companies: u64,
}

/// Read back per-company counts, samples and totals. Read-only.
pub async fn summarize<C: ConnectionTrait>(
    db: &C,
    max_companies: u64,
) -> Result<Summary, SeedError> {
    // Left join keeps companies without employees.
    let counts: Vec<CompanyCount> = company::Entity::find()
        .select_only()
        .column(company::Column::Id)
        .column(company::Column::Name)
        .column(company::Column::Location)
        .column(company::Column::Industry)
        .column_as(
            Expr::col((employee::Entity, employee::Column::Id)).count(),
            "employee_count",
        )
        .join(JoinType::LeftJoin, company::Relation::Employee.def())
        .group_by(company::Column::Id)
        .group_by(company::Column::Name)
        .group_by(company::Column::Location)
        .group_by(company::Column::Industry)
        .order_by_asc(company::Column::Id)
        .into_model::<CompanyCount>()
        .all(db)
        .await?;

    let mut companies = Vec::with_capacity(counts.len());
    for company in counts {
        let sample = employee::Entity::find()
            .filter(employee::Column::CompanyId.eq(company.id))
            .order_by_asc(employee::Column::Id)
            .limit(SAMPLE_SIZE)
            .all(db)
            .await?;
        companies.push(CompanySummary { company, sample });
    }

    Ok(Summary {
        companies,
        total_companies: company::Entity::find().count(db).await?,
        total_employees: employee::Entity::find().count(db).await?,
        max_companies,
    })
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.companies {
            let c = &entry.company;
            writeln!(
                f,
                "Company: {}, Location: {}, Industry: {}, Employees: {}",
                c.name,
                c.location.as_deref().unwrap_or("-"),
                c.industry.as_deref().unwrap_or("-"),
                c.employee_count
            )?;
            writeln!(f, "Sample employees (first {SAMPLE_SIZE}):")?;
            for e in &entry.sample {
                writeln!(
                    f,
                    "  Employee: {}, Email: {}, Company ID: {}",
                    e.name, e.email, c.id
                )?;
            }
            writeln!(f)?;
        }
        writeln!(
            f,
            "Total Companies: {} (Max Allowed: {})",
            self.total_companies, self.max_companies
        )?;
        write!(f, "Total Employees: {}", self.total_employees)
    }
}
