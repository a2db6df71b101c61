//! Fleet tracking: vehicles and the drivers assigned to them.

use backoffice_criteria::chrono::NaiveDate;
use backoffice_criteria::{
    filter_enum, BooleanFilter, Filter, IntegerFilter, LocalDateFilter, LongFilter, QueryService,
    StringFilter,
};
use backoffice_macros::{Criteria, Queryable};
use serde::{Deserialize, Serialize};

filter_enum! {
    pub enum FuelType {
        Petrol = "PETROL",
        Diesel = "DIESEL",
        Hybrid = "HYBRID",
        Electric = "ELECTRIC",
    }
}

filter_enum! {
    pub enum VehicleStatus {
        Available = "AVAILABLE",
        InUse = "IN_USE",
        Maintenance = "MAINTENANCE",
        Retired = "RETIRED",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Queryable)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: Option<i64>,
    pub licence_plate: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub mileage: Option<i64>,
    pub fuel_type: Option<FuelType>,
    pub status: Option<VehicleStatus>,
    pub driver_id: Option<i64>,
    pub purchased_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Criteria)]
#[criteria(entity = Vehicle)]
pub struct VehicleCriteria {
    id: Option<LongFilter>,
    licence_plate: Option<StringFilter>,
    make: Option<StringFilter>,
    model: Option<StringFilter>,
    year: Option<IntegerFilter>,
    mileage: Option<LongFilter>,
    fuel_type: Option<Filter<FuelType>>,
    status: Option<Filter<VehicleStatus>>,
    driver_id: Option<LongFilter>,
    purchased_on: Option<LocalDateFilter>,
    distinct: Option<bool>,
}

pub type VehicleQueryService<R> = QueryService<Vehicle, R>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Queryable)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub licence_number: Option<String>,
    pub licence_expiry: Option<NaiveDate>,
    pub hired_on: Option<NaiveDate>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Criteria)]
#[criteria(entity = Driver)]
pub struct DriverCriteria {
    id: Option<LongFilter>,
    first_name: Option<StringFilter>,
    last_name: Option<StringFilter>,
    licence_number: Option<StringFilter>,
    licence_expiry: Option<LocalDateFilter>,
    hired_on: Option<LocalDateFilter>,
    active: Option<BooleanFilter>,
    distinct: Option<bool>,
}

pub type DriverQueryService<R> = QueryService<Driver, R>;
