//! Back-office entities and their criteria.
//!
//! Eight entities across three areas, each with a criteria type and a query
//! service alias:
//!
//! | Area | Entities |
//! |------|----------|
//! | [`accounting`] | [`BankAccount`], [`LedgerAccount`], [`Journal`], [`JournalEntry`] |
//! | [`invoicing`] | [`Customer`], [`Invoice`] |
//! | [`fleet`] | [`Vehicle`], [`Driver`] |
//!
//! # Example
//!
//! ```rust
//! use backoffice::{
//!     bind_criteria, Invoice, InvoiceCriteria, InvoiceQueryService, InvoiceStatus,
//!     MemoryRepository, PageRequest,
//! };
//!
//! let repo: MemoryRepository<Invoice> = [InvoiceStatus::Draft, InvoiceStatus::Paid]
//!     .into_iter()
//!     .zip(1..)
//!     .map(|(status, id)| Invoice { id: Some(id), status: Some(status), ..Default::default() })
//!     .collect();
//! let service = InvoiceQueryService::new(repo);
//!
//! let criteria: InvoiceCriteria = bind_criteria([("status.equals", "PAID")]).unwrap();
//! let page = service.find_by_criteria(Some(&criteria), &PageRequest::of(0, 20)).unwrap();
//! assert_eq!(page.content[0].id, Some(2));
//! assert_eq!(criteria.to_string(), "InvoiceCriteria{status=InvoiceStatusFilter [equals=PAID], }");
//! ```

pub mod accounting;
pub mod fleet;
pub mod invoicing;

pub use accounting::{
    BankAccount, BankAccountCriteria, BankAccountQueryService, BankAccountType, EntryDirection,
    Journal, JournalCriteria, JournalEntry, JournalEntryCriteria, JournalEntryQueryService,
    JournalQueryService, JournalType, LedgerAccount, LedgerAccountCriteria,
    LedgerAccountQueryService, LedgerAccountType,
};
pub use fleet::{
    Driver, DriverCriteria, DriverQueryService, FuelType, Vehicle, VehicleCriteria,
    VehicleQueryService, VehicleStatus,
};
pub use invoicing::{
    Customer, CustomerCriteria, CustomerQueryService, Invoice, InvoiceCriteria,
    InvoiceQueryService, InvoiceStatus,
};

// Re-export the engine so callers need a single dependency.
pub use backoffice_criteria::*;
pub use backoffice_macros::{Criteria, Queryable};
