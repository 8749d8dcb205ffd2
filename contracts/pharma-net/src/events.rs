use crate::types::{Organization, Owner, Role};
use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Vec};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MemberEnrolledEvent {
    pub member: Address,
    pub organization: Organization,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompanyRegisteredEvent {
    pub crn: String,
    pub name: String,
    pub role: Role,
    pub hierarchy_rank: Option<u32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DrugAddedEvent {
    pub drug_id: String,
    pub manufacturer: String,
    pub expiry_date: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderCreatedEvent {
    pub order_id: String,
    pub buyer: String,
    pub seller: String,
    pub quantity: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShipmentCreatedEvent {
    pub shipment_id: String,
    pub creator: String,
    pub transporter: String,
    pub assets: Vec<String>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CustodyTransferredEvent {
    pub drug_id: String,
    pub from: Owner,
    pub to: Owner,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShipmentDeliveredEvent {
    pub shipment_id: String,
    pub buyer: String,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DrugRetailedEvent {
    pub drug_id: String,
    pub retailer: String,
    pub consumer: String,
    pub timestamp: u64,
}

pub fn emit_member_enrolled(env: &Env, member: Address, organization: Organization) {
    let event = MemberEnrolledEvent {
        member,
        organization,
    };
    env.events().publish((symbol_short!("enrolled"),), event);
}

pub fn emit_member_revoked(env: &Env, member: Address) {
    env.events().publish((symbol_short!("revoked"),), member);
}

pub fn emit_company_registered(
    env: &Env,
    crn: String,
    name: String,
    role: Role,
    hierarchy_rank: Option<u32>,
) {
    let event = CompanyRegisteredEvent {
        crn,
        name,
        role,
        hierarchy_rank,
    };
    env.events().publish((symbol_short!("co_reg"),), event);
}

pub fn emit_drug_added(env: &Env, drug_id: String, manufacturer: String, expiry_date: u64) {
    let event = DrugAddedEvent {
        drug_id,
        manufacturer,
        expiry_date,
    };
    env.events().publish((symbol_short!("drug_add"),), event);
}

pub fn emit_order_created(
    env: &Env,
    order_id: String,
    buyer: String,
    seller: String,
    quantity: u32,
) {
    let event = OrderCreatedEvent {
        order_id,
        buyer,
        seller,
        quantity,
    };
    env.events().publish((symbol_short!("po_new"),), event);
}

pub fn emit_shipment_created(
    env: &Env,
    shipment_id: String,
    creator: String,
    transporter: String,
    assets: Vec<String>,
) {
    let event = ShipmentCreatedEvent {
        shipment_id,
        creator,
        transporter,
        assets,
    };
    env.events().publish((symbol_short!("ship_new"),), event);
}

pub fn emit_custody_transferred(env: &Env, drug_id: String, from: Owner, to: Owner) {
    let event = CustodyTransferredEvent {
        drug_id,
        from,
        to,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((symbol_short!("custody"),), event);
}

pub fn emit_shipment_delivered(env: &Env, shipment_id: String, buyer: String) {
    let event = ShipmentDeliveredEvent {
        shipment_id,
        buyer,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((symbol_short!("delivered"),), event);
}

pub fn emit_drug_retailed(env: &Env, drug_id: String, retailer: String, consumer: String) {
    let event = DrugRetailedEvent {
        drug_id,
        retailer,
        consumer,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((symbol_short!("retailed"),), event);
}
