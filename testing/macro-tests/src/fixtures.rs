use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;
use uuid::Uuid;
use xrmeta::prelude::*;

///
/// AccountState
///

#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
#[enum_type(name = "statecode")]
pub enum AccountState {
    Active,
    Inactive,
}

///
/// IndustryCode
///

#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub enum IndustryCode {
    Accounting,
    Consulting,
}

///
/// Account
///

#[derive(Debug, Entity)]
#[entity(logical_name = "account")]
pub struct Account {
    #[attribute(logical_name = "accountid")]
    pub id: Uuid,

    #[attribute(logical_name = "name")]
    pub name: String,

    #[attribute(logical_name = "primarycontactid")]
    pub primary_contact: EntityReference,

    #[attribute(logical_name = "customertypecode")]
    pub customer_type: OptionSetValue,

    #[attribute(logical_name = "revenue")]
    pub revenue: Money,

    #[attribute(logical_name = "numberofemployees")]
    pub employees: Option<i32>,

    #[attribute(logical_name = "creditscore")]
    pub credit_score: Option<f64>,

    #[attribute(logical_name = "donotemail")]
    pub do_not_email: Option<bool>,

    #[attribute(logical_name = "exchangerate")]
    pub exchange_rate: Option<Decimal>,

    #[attribute(logical_name = "createdon")]
    pub created_on: Option<DateTime<Utc>>,

    #[attribute(logical_name = "ownerid")]
    pub owner: Option<Uuid>,

    #[attribute(logical_name = "versionnumber")]
    pub version: Option<i64>,

    #[attribute(logical_name = "statecode")]
    pub state: Option<AccountState>,

    #[attribute(logical_name = "industrycode")]
    pub industry: Option<IndustryCode>,

    #[attribute(logical_name = "entityimage")]
    pub image: Vec<u8>,

    // non-optional primitives have no attribute kind
    #[attribute(logical_name = "rawcount")]
    pub raw_count: i32,

    pub scratch: HashMap<String, String>,
}

///
/// Contact
///

#[derive(Debug, Entity)]
#[entity(logical_name = "contact")]
pub struct Contact {
    #[attribute(logical_name = "parentcustomerid")]
    pub parent: EntityReference,
}

///
/// Lead
/// nullable text and platform values
///

#[derive(Debug, Entity)]
#[entity(logical_name = "lead")]
pub struct Lead {
    #[attribute(logical_name = "fullname")]
    pub full_name: Option<String>,

    #[attribute(logical_name = "parentaccountid")]
    pub parent_account: Option<EntityReference>,

    #[attribute(logical_name = "leadqualitycode")]
    pub quality: Option<OptionSetValue>,

    #[attribute(logical_name = "budgetamount")]
    pub budget: Option<Money>,
}

///
/// Task
/// holds another entity directly
///

#[derive(Debug, Entity)]
#[entity(logical_name = "Task")]
pub struct Task {
    #[attribute(logical_name = "subject")]
    pub subject: String,

    #[attribute(logical_name = "regardingobjectid")]
    pub regarding: Account,
}

///
/// Draft
/// blank logical name, never scanned
///

#[derive(Debug, Entity)]
#[entity(logical_name = "  ")]
pub struct Draft {
    #[attribute(logical_name = "title")]
    pub title: String,
}

///
/// Unnamed
///

#[derive(Debug, Entity)]
pub struct Unnamed {}
