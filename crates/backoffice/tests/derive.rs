//! Tests for the generated criteria and entity surface.

use backoffice::{
    BankAccount, BankAccountCriteria, BankAccountType, BigDecimalFilter, Criteria,
    CriteriaError, Filter, FuelType, JournalEntryCriteria, LedgerAccountCriteria, LongFilter,
    Queryable, StringFilter, Value, Vehicle, VehicleCriteria, VehicleStatus,
};
use insta::assert_snapshot;
use rust_decimal::Decimal;

// ============================================================================
// Display
// ============================================================================

#[test]
fn display_single_filter() {
    let mut criteria = BankAccountCriteria::default();
    criteria.set_name(Some(StringFilter::new().contains("Acme")));
    assert_snapshot!(criteria.to_string(), @"BankAccountCriteria{name=StringFilter [contains=Acme], }");
}

#[test]
fn display_empty_criteria() {
    assert_snapshot!(VehicleCriteria::default().to_string(), @"VehicleCriteria{}");
}

#[test]
fn display_follows_declaration_order_with_distinct_last() {
    let mut criteria = BankAccountCriteria::default();
    criteria.set_distinct(Some(true));
    criteria.set_balance(Some(
        BigDecimalFilter::new()
            .greater_than(Decimal::new(0, 0))
            .less_than_or_equal(Decimal::new(100000, 2)),
    ));
    criteria.set_account_type(Some(
        Filter::new().not_in_values([BankAccountType::Credit]),
    ));
    criteria.set_id(Some(LongFilter::new().specified(true)));

    assert_snapshot!(
        criteria.to_string(),
        @"BankAccountCriteria{id=LongFilter [specified=true], accountType=BankAccountTypeFilter [notIn=[CREDIT]], balance=BigDecimalFilter [greaterThan=0, lessThanOrEqual=1000.00], distinct=true, }"
    );
}

#[test]
fn display_present_but_empty_filter() {
    let mut criteria = LedgerAccountCriteria::default();
    criteria.code_or_default();
    assert_snapshot!(criteria.to_string(), @"LedgerAccountCriteria{code=StringFilter [], }");
}

// ============================================================================
// Generated accessors and constants
// ============================================================================

#[test]
fn criteria_constants_use_wire_names() {
    assert_eq!(BankAccountCriteria::NAME, "name");
    assert_eq!(BankAccountCriteria::ACCOUNT_TYPE, "accountType");
    assert_eq!(JournalEntryCriteria::POSTED_AT, "postedAt");
    assert_eq!(BankAccountCriteria::TYPE_NAME, "BankAccountCriteria");
}

#[test]
fn read_access_never_allocates() {
    let criteria = VehicleCriteria::default();
    assert!(criteria.status().is_none());
    assert_eq!(criteria, VehicleCriteria::default());
}

#[test]
fn get_or_create_then_set() {
    let mut criteria = VehicleCriteria::default();
    criteria.mileage_or_default().less_than = Some(50_000);
    criteria.mileage_or_default().greater_than = Some(10_000);

    assert_eq!(
        criteria.mileage(),
        Some(&LongFilter::new().greater_than(10_000).less_than(50_000))
    );

    criteria.set_mileage(None);
    assert!(criteria.mileage().is_none());
}

#[test]
fn filter_table_lists_every_declared_field() {
    let criteria = BankAccountCriteria::default();
    let names: Vec<&str> = criteria.filters().into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, BankAccountCriteria::FIELD_NAMES);
    assert!(!names.contains(&"distinct"));
}

#[test]
fn trait_bind_reaches_generated_fields() {
    let mut criteria = BankAccountCriteria::default();
    criteria
        .bind("accountType", "in".parse().unwrap(), "CHECKING, SAVINGS")
        .unwrap();
    assert_eq!(
        criteria.account_type(),
        Some(&Filter::new().in_values([BankAccountType::Checking, BankAccountType::Savings]))
    );

    let err = criteria
        .bind("account_type", "equals".parse().unwrap(), "CHECKING")
        .unwrap_err();
    assert!(matches!(err, CriteriaError::UnknownField { .. }));
}

#[test]
fn entity_accessor_and_constants() {
    let account = BankAccount {
        id: Some(4),
        iban: Some("FR7630006000011234567890189".to_string()),
        account_type: Some(BankAccountType::Savings),
        ..Default::default()
    };

    assert_eq!(BankAccount::IBAN, "iban");
    assert_eq!(
        account.field_value(BankAccount::IBAN),
        Value::String("FR7630006000011234567890189")
    );
    assert_eq!(account.field_value(BankAccount::ACCOUNT_TYPE), Value::Enum(1));
    assert_eq!(account.field_value(BankAccount::OPENED_ON), Value::None);
    assert_eq!(account.identity(), account.field_value(BankAccount::ID));
    assert_eq!(Vehicle::LICENCE_PLATE, "licencePlate");
}

#[test]
fn entities_serialize_with_wire_names() {
    let vehicle = Vehicle {
        id: Some(9),
        status: Some(VehicleStatus::InUse),
        fuel_type: Some(FuelType::Electric),
        ..Default::default()
    };

    let yaml = serde_yaml::to_string(&vehicle).unwrap();
    assert!(yaml.contains("status: IN_USE"));
    assert!(yaml.contains("fuelType: ELECTRIC"));
    assert!(yaml.contains("licencePlate: null"));

    let back: Vehicle = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back, vehicle);
}
