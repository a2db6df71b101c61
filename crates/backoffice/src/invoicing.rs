//! Customers and their invoices.

use backoffice_criteria::chrono::{DateTime, NaiveDate, Utc};
use backoffice_criteria::rust_decimal::Decimal;
use backoffice_criteria::{
    filter_enum, BigDecimalFilter, BooleanFilter, Filter, InstantFilter, LocalDateFilter,
    LongFilter, QueryService, StringFilter,
};
use backoffice_macros::{Criteria, Queryable};
use serde::{Deserialize, Serialize};

filter_enum! {
    /// Lifecycle of an invoice.
    pub enum InvoiceStatus {
        Draft = "DRAFT",
        Sent = "SENT",
        Paid = "PAID",
        Cancelled = "CANCELLED",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Queryable)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub vat_number: Option<String>,
    pub active: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Criteria)]
#[criteria(entity = Customer)]
pub struct CustomerCriteria {
    id: Option<LongFilter>,
    name: Option<StringFilter>,
    email: Option<StringFilter>,
    phone: Option<StringFilter>,
    vat_number: Option<StringFilter>,
    active: Option<BooleanFilter>,
    created_at: Option<InstantFilter>,
    distinct: Option<bool>,
}

pub type CustomerQueryService<R> = QueryService<Customer, R>;

/// An invoice issued to a customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Queryable)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: Option<i64>,
    pub number: Option<String>,
    pub customer_id: Option<i64>,
    pub issue_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub total_amount: Option<Decimal>,
    pub status: Option<InvoiceStatus>,
    pub paid_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Criteria)]
#[criteria(entity = Invoice)]
pub struct InvoiceCriteria {
    id: Option<LongFilter>,
    number: Option<StringFilter>,
    customer_id: Option<LongFilter>,
    issue_date: Option<LocalDateFilter>,
    due_date: Option<LocalDateFilter>,
    total_amount: Option<BigDecimalFilter>,
    status: Option<Filter<InvoiceStatus>>,
    paid_at: Option<InstantFilter>,
    distinct: Option<bool>,
}

pub type InvoiceQueryService<R> = QueryService<Invoice, R>;
