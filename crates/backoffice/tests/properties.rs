//! Behaviour of criteria queries against fixture data.

use backoffice::{
    bind_criteria, bind_page_request, create_specification, Criteria, CriteriaError, Customer,
    CustomerCriteria, CustomerQueryService, Invoice, InvoiceCriteria, InvoiceQueryService,
    InvoiceStatus, MemoryRepository, OrderBy, PageRequest, QueryConfig, Repository,
    StringFilter, Vehicle, VehicleCriteria, VehicleQueryService, VehicleStatus,
};
use rust_decimal::Decimal;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .with_test_writer()
        .try_init();
}

fn customers() -> CustomerQueryService<MemoryRepository<Customer>> {
    let repo = MemoryRepository::from_yaml_str(include_str!("fixtures/customers.yaml"))
        .expect("customer fixture");
    CustomerQueryService::new(repo)
}

fn invoices() -> InvoiceQueryService<MemoryRepository<Invoice>> {
    let repo = MemoryRepository::from_yaml_str(include_str!("fixtures/invoices.yaml"))
        .expect("invoice fixture");
    InvoiceQueryService::new(repo)
}

fn vehicles() -> VehicleQueryService<MemoryRepository<Vehicle>> {
    init_tracing();
    let repo = MemoryRepository::from_yaml_str(include_str!("fixtures/vehicles.yaml"))
        .expect("vehicle fixture");
    VehicleQueryService::new(repo)
}

fn names(page: &[Customer]) -> Vec<&str> {
    page.iter().filter_map(|c| c.name.as_deref()).collect()
}

fn ids<E>(content: &[E], id: impl Fn(&E) -> Option<i64>) -> Vec<i64> {
    content.iter().filter_map(id).collect()
}

// ============================================================================
// Absent and empty criteria
// ============================================================================

#[test]
fn absent_and_empty_criteria_match_everything() {
    let service = invoices();
    let all = PageRequest::of(0, 100);

    let from_none = service
        .find_by_criteria::<InvoiceCriteria>(None, &all)
        .unwrap();
    let from_empty = service
        .find_by_criteria(Some(&InvoiceCriteria::default()), &all)
        .unwrap();

    assert_eq!(from_none.total_elements, 3);
    assert_eq!(from_none, from_empty);
}

#[test]
fn empty_criteria_counts_every_row_and_honours_sort() {
    let service = invoices();
    let empty = InvoiceCriteria::default();

    assert_eq!(service.count_by_criteria(Some(&empty)).unwrap(), 3);

    let request = PageRequest::of(0, 2).with_sort(OrderBy::desc(Invoice::TOTAL_AMOUNT));
    let page = service.find_by_criteria(Some(&empty), &request).unwrap();
    assert_eq!(ids(&page.content, |i| i.id), [3, 2]);
    assert_eq!(page.total_elements, 3);
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn string_contains_and_equals() {
    let service = customers();
    let page = PageRequest::of(0, 20);

    let mut contains = CustomerCriteria::default();
    contains.set_name(Some(StringFilter::new().contains("Acme")));
    let found = service.find_by_criteria(Some(&contains), &page).unwrap();
    assert_eq!(names(&found.content), ["Acme", "Acme Corp"]);

    let mut equals = CustomerCriteria::default();
    equals.set_name(Some(StringFilter::new().equals("Acme")));
    let found = service.find_by_criteria(Some(&equals), &page).unwrap();
    assert_eq!(names(&found.content), ["Acme"]);
}

#[test]
fn contains_ignores_case() {
    let service = customers();
    let criteria: CustomerCriteria = bind_criteria([("name.contains", "aCmE")]).unwrap();
    assert_eq!(service.count_by_criteria(Some(&criteria)).unwrap(), 2);
}

#[test]
fn decimal_lower_bound() {
    let service = invoices();
    let mut criteria = InvoiceCriteria::default();
    criteria.total_amount_or_default().greater_than_or_equal = Some(Decimal::new(5000, 2));

    let page = service
        .find_by_criteria(Some(&criteria), &PageRequest::of(0, 20))
        .unwrap();
    assert_eq!(ids(&page.content, |i| i.id), [2, 3]);
}

#[test]
fn status_specified_and_equals() {
    let service = invoices();
    let page = PageRequest::of(0, 20);

    let mut specified = InvoiceCriteria::default();
    specified.status_or_default().specified = Some(true);
    let found = service.find_by_criteria(Some(&specified), &page).unwrap();
    let statuses: Vec<_> = found.content.iter().map(|i| i.status).collect();
    assert_eq!(statuses, [Some(InvoiceStatus::Draft), Some(InvoiceStatus::Paid)]);

    let mut paid = InvoiceCriteria::default();
    paid.status_or_default().equals = Some(InvoiceStatus::Paid);
    let found = service.find_by_criteria(Some(&paid), &page).unwrap();
    assert_eq!(ids(&found.content, |i| i.id), [3]);

    let mut unspecified = InvoiceCriteria::default();
    unspecified.status_or_default().specified = Some(false);
    let found = service.find_by_criteria(Some(&unspecified), &page).unwrap();
    assert_eq!(ids(&found.content, |i| i.id), [2]);
}

#[test]
fn empty_in_list_matches_nothing() {
    let service = invoices();
    let mut criteria = InvoiceCriteria::default();
    criteria.status_or_default().in_values = Some(Vec::new());
    assert_eq!(service.count_by_criteria(Some(&criteria)).unwrap(), 0);
}

#[test]
fn filters_on_different_fields_are_anded() {
    let service = invoices();
    let criteria: InvoiceCriteria = bind_criteria([
        ("customerId.equals", "1"),
        ("issueDate.greaterThan", "2024-02-01"),
    ])
    .unwrap();
    let page = service
        .find_by_criteria(Some(&criteria), &PageRequest::of(0, 20))
        .unwrap();
    assert_eq!(ids(&page.content, |i| i.id), [3]);
}

#[test]
fn instant_bound_excludes_missing_timestamps() {
    let service = invoices();
    let criteria: InvoiceCriteria =
        bind_criteria([("paidAt.lessThan", "2025-01-01T00:00:00Z")]).unwrap();
    assert_eq!(service.count_by_criteria(Some(&criteria)).unwrap(), 1);
}

// ============================================================================
// Distinct
// ============================================================================

#[test]
fn distinct_removes_duplicate_rows_from_page_and_count() {
    let service = vehicles();
    let mut criteria = VehicleCriteria::default();
    criteria.make_or_default().base.equals = Some("Tesla".to_string());
    let page = PageRequest::of(0, 20);

    assert_eq!(service.count_by_criteria(Some(&criteria)).unwrap(), 2);

    criteria.set_distinct(Some(true));
    assert_eq!(service.count_by_criteria(Some(&criteria)).unwrap(), 1);
    let found = service.find_by_criteria(Some(&criteria), &page).unwrap();
    assert_eq!(found.content.len(), 1);
    assert_eq!(found.total_elements, 1);
    assert_eq!(found.content[0].driver_id, Some(7));
}

#[test]
fn distinct_alone_still_compiles_to_unrestricted_filter() {
    let mut criteria = VehicleCriteria::default();
    criteria.set_distinct(Some(true));
    let spec = create_specification(Some(&criteria));
    assert!(spec.is_distinct());
    assert!(spec.is_unrestricted());
    assert_eq!(vehicles().repository().count(&spec).unwrap(), 4);
}

// ============================================================================
// Paging
// ============================================================================

#[test]
fn paging_offsets_and_past_the_end() {
    let service = vehicles();
    let criteria = VehicleCriteria::default();
    let sorted = |page| PageRequest::of(page, 2).with_sort(OrderBy::asc(Vehicle::YEAR));

    let first = service.find_by_criteria(Some(&criteria), &sorted(0)).unwrap();
    let second = service.find_by_criteria(Some(&criteria), &sorted(1)).unwrap();
    let third = service.find_by_criteria(Some(&criteria), &sorted(2)).unwrap();
    let beyond = service.find_by_criteria(Some(&criteria), &sorted(9)).unwrap();

    assert_eq!(ids(&first.content, |v| v.id), [3, 1]);
    assert_eq!(ids(&second.content, |v| v.id), [5, 2]);
    assert_eq!(ids(&third.content, |v| v.id), [2]);
    assert!(beyond.is_empty());
    assert_eq!(beyond.total_elements, 5);
    assert_eq!(first.total_pages(), 3);
}

#[test]
fn multi_key_sort() {
    let service = vehicles();
    let request = PageRequest::of(0, 10)
        .with_sort(OrderBy::asc(Vehicle::MAKE))
        .with_sort(OrderBy::desc(Vehicle::YEAR));
    let page = service
        .find_by_criteria::<VehicleCriteria>(None, &request)
        .unwrap();
    assert_eq!(ids(&page.content, |v| v.id), [5, 1, 2, 2, 3]);
}

#[test]
fn unknown_sort_field_keeps_insertion_order_unless_validated() {
    let params = [("sort", "colour,desc"), ("size", "10")];
    let request = bind_page_request(params, &QueryConfig::default()).unwrap();

    let page = vehicles()
        .find_by_criteria::<VehicleCriteria>(None, &request)
        .unwrap();
    assert_eq!(ids(&page.content, |v| v.id), [1, 2, 3, 2, 5]);

    let err = request.validate_sort(VehicleCriteria::FIELD_NAMES).unwrap_err();
    assert!(matches!(err, CriteriaError::InvalidSort(_)));

    let known = bind_page_request([("sort", "year,desc")], &QueryConfig::default()).unwrap();
    assert!(known.validate_sort(VehicleCriteria::FIELD_NAMES).is_ok());
}

// ============================================================================
// Query-parameter binding
// ============================================================================

#[test]
fn bound_parameters_equal_programmatic_criteria() {
    let bound: CustomerCriteria = bind_criteria([("name.contains", "Acme")]).unwrap();

    let mut built = CustomerCriteria::default();
    built.set_name(Some(StringFilter::new().contains("Acme")));

    assert_eq!(bound, built);
}

#[test]
fn unparseable_literal_fails_the_bind() {
    let err = bind_criteria::<InvoiceCriteria, _, _, _>([
        ("status.equals", "PAID"),
        ("totalAmount.greaterThan", "fifty"),
    ])
    .unwrap_err();
    match err {
        CriteriaError::InvalidLiteral {
            field,
            condition,
            value,
            ..
        } => {
            assert_eq!(field, "totalAmount");
            assert_eq!(condition, "greaterThan");
            assert_eq!(value, "fifty");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn binding_errors_are_typed() {
    let unknown_field = bind_criteria::<VehicleCriteria, _, _, _>([("colour.equals", "red")]);
    assert!(matches!(
        unknown_field,
        Err(CriteriaError::UnknownField {
            criteria: "VehicleCriteria",
            ..
        })
    ));

    let unsupported = bind_criteria::<VehicleCriteria, _, _, _>([("status.contains", "USE")]);
    assert!(matches!(
        unsupported,
        Err(CriteriaError::UnsupportedCondition {
            filter: "VehicleStatusFilter",
            ..
        })
    ));

    let malformed = bind_criteria::<VehicleCriteria, _, _, _>([("status", "IN_USE")]);
    assert!(matches!(malformed, Err(CriteriaError::MalformedParameter(_))));

    let bad_distinct = bind_criteria::<VehicleCriteria, _, _, _>([("distinct", "yes")]);
    assert!(bad_distinct.is_err());
}

#[test]
fn one_query_string_feeds_criteria_and_page() {
    let params = [
        ("status.in", "AVAILABLE,IN_USE"),
        ("status.in", "MAINTENANCE"),
        ("distinct", "true"),
        ("sort", "year,desc"),
        ("size", "2"),
    ];
    let criteria: VehicleCriteria = bind_criteria(params).unwrap();
    let request = bind_page_request(params, &QueryConfig::default()).unwrap();

    assert_eq!(
        criteria.status().and_then(|f| f.in_values.clone()),
        Some(vec![
            VehicleStatus::Available,
            VehicleStatus::InUse,
            VehicleStatus::Maintenance
        ])
    );
    assert_eq!(criteria.distinct(), Some(true));

    let page = vehicles()
        .find_by_criteria(Some(&criteria), &request)
        .unwrap();
    assert_eq!(ids(&page.content, |v| v.id), [2, 1]);
    assert_eq!(page.total_elements, 3);
}

#[test]
fn copy_is_equal_and_independent() {
    let mut original: InvoiceCriteria =
        bind_criteria([("number.contains", "INV"), ("distinct", "false")]).unwrap();
    let copy = original.copy();
    assert_eq!(copy, original);

    original.number_or_default().contains = Some("CHANGED".to_string());
    assert_ne!(copy, original);
    assert_eq!(
        copy.number().and_then(|f| f.contains.as_deref()),
        Some("INV")
    );
}
