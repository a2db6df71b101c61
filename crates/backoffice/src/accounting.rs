//! Ledger entities: bank accounts, the chart of ledger accounts, journals and
//! journal entries.

use backoffice_criteria::chrono::{DateTime, NaiveDate, Utc};
use backoffice_criteria::rust_decimal::Decimal;
use backoffice_criteria::{
    filter_enum, BigDecimalFilter, BooleanFilter, Filter, InstantFilter, IntegerFilter,
    LocalDateFilter, LongFilter, QueryService, StringFilter,
};
use backoffice_macros::{Criteria, Queryable};
use serde::{Deserialize, Serialize};

filter_enum! {
    /// Kind of bank account.
    pub enum BankAccountType {
        Checking = "CHECKING",
        Savings = "SAVINGS",
        Credit = "CREDIT",
    }
}

filter_enum! {
    /// Top-level class of a ledger account in the chart of accounts.
    pub enum LedgerAccountType {
        Asset = "ASSET",
        Liability = "LIABILITY",
        Equity = "EQUITY",
        Revenue = "REVENUE",
        Expense = "EXPENSE",
    }
}

filter_enum! {
    pub enum JournalType {
        Sales = "SALES",
        Purchases = "PURCHASES",
        Bank = "BANK",
        Cash = "CASH",
        General = "GENERAL",
    }
}

filter_enum! {
    /// Side of the ledger an entry is posted to.
    pub enum EntryDirection {
        Debit = "DEBIT",
        Credit = "CREDIT",
    }
}

/// A bank account held by the company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Queryable)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub iban: Option<String>,
    pub bank_name: Option<String>,
    pub account_type: Option<BankAccountType>,
    pub balance: Option<Decimal>,
    pub opened_on: Option<NaiveDate>,
    pub active: Option<bool>,
    pub ledger_account_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Criteria)]
#[criteria(entity = BankAccount)]
pub struct BankAccountCriteria {
    id: Option<LongFilter>,
    name: Option<StringFilter>,
    iban: Option<StringFilter>,
    bank_name: Option<StringFilter>,
    account_type: Option<Filter<BankAccountType>>,
    balance: Option<BigDecimalFilter>,
    opened_on: Option<LocalDateFilter>,
    active: Option<BooleanFilter>,
    ledger_account_id: Option<LongFilter>,
    distinct: Option<bool>,
}

pub type BankAccountQueryService<R> = QueryService<BankAccount, R>;

/// An account in the chart of accounts. Accounts nest through `parent_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Queryable)]
#[serde(rename_all = "camelCase")]
pub struct LedgerAccount {
    pub id: Option<i64>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub account_type: Option<LedgerAccountType>,
    pub parent_id: Option<i64>,
    pub level: Option<i32>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Criteria)]
#[criteria(entity = LedgerAccount)]
pub struct LedgerAccountCriteria {
    id: Option<LongFilter>,
    code: Option<StringFilter>,
    name: Option<StringFilter>,
    account_type: Option<Filter<LedgerAccountType>>,
    parent_id: Option<LongFilter>,
    level: Option<IntegerFilter>,
    active: Option<BooleanFilter>,
    distinct: Option<bool>,
}

pub type LedgerAccountQueryService<R> = QueryService<LedgerAccount, R>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Queryable)]
#[serde(rename_all = "camelCase")]
pub struct Journal {
    pub id: Option<i64>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub journal_type: Option<JournalType>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Criteria)]
#[criteria(entity = Journal)]
pub struct JournalCriteria {
    id: Option<LongFilter>,
    code: Option<StringFilter>,
    name: Option<StringFilter>,
    journal_type: Option<Filter<JournalType>>,
    created_at: Option<InstantFilter>,
    distinct: Option<bool>,
}

pub type JournalQueryService<R> = QueryService<Journal, R>;

/// One posting line of a journal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Queryable)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: Option<i64>,
    pub journal_id: Option<i64>,
    pub ledger_account_id: Option<i64>,
    pub entry_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub direction: Option<EntryDirection>,
    pub amount: Option<Decimal>,
    pub reference: Option<String>,
    pub posted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Criteria)]
#[criteria(entity = JournalEntry)]
pub struct JournalEntryCriteria {
    id: Option<LongFilter>,
    journal_id: Option<LongFilter>,
    ledger_account_id: Option<LongFilter>,
    entry_date: Option<LocalDateFilter>,
    description: Option<StringFilter>,
    direction: Option<Filter<EntryDirection>>,
    amount: Option<BigDecimalFilter>,
    reference: Option<StringFilter>,
    posted_at: Option<InstantFilter>,
    distinct: Option<bool>,
}

pub type JournalEntryQueryService<R> = QueryService<JournalEntry, R>;

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice_criteria::{Criteria, FieldFilter, Queryable, Value};

    #[test]
    fn wire_names_are_lower_camel_case() {
        assert_eq!(BankAccount::BANK_NAME, "bankName");
        assert_eq!(BankAccountCriteria::LEDGER_ACCOUNT_ID, "ledgerAccountId");
        assert_eq!(
            JournalEntryCriteria::FIELD_NAMES,
            &[
                "id",
                "journalId",
                "ledgerAccountId",
                "entryDate",
                "description",
                "direction",
                "amount",
                "reference",
                "postedAt"
            ]
        );
    }

    #[test]
    fn entity_reads_enum_fields_as_discriminants() {
        let entry = JournalEntry {
            direction: Some(EntryDirection::Credit),
            ..Default::default()
        };
        assert_eq!(entry.field_value(JournalEntry::DIRECTION), Value::Enum(1));
        assert_eq!(entry.field_value(JournalEntry::AMOUNT), Value::None);
    }

    #[test]
    fn lazy_accessors() {
        let mut criteria = LedgerAccountCriteria::default();
        assert!(criteria.code().is_none());
        assert!(criteria.code().is_none());

        criteria.code_or_default().contains = Some("41".to_string());
        assert_eq!(criteria.code().map(|f| f.is_empty()), Some(false));

        criteria.set_code(None);
        assert_eq!(criteria, LedgerAccountCriteria::default());
    }

    #[test]
    fn criteria_without_filters_is_default() {
        let criteria = JournalCriteria::default();
        assert!(criteria.filters().iter().all(|(_, f)| f.is_none()));
        assert_eq!(criteria.distinct(), None);
        assert_eq!(JournalCriteria::TYPE_NAME, "JournalCriteria");
    }
}
