use crate::error::PharmaNetError;
use crate::types::{Company, Drug, DrugSnapshot, Organization, PurchaseOrder, Shipment};
use soroban_sdk::{contracttype, Address, Env, String, Vec};

pub const ID_SEPARATOR: u8 = b'-';
pub const MAX_ID_LEN: usize = 256;

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Namespace {
    Company,
    Drug,
    Order,
    Shipment,
}

/// Composite key: a namespace plus ordered parts. Equal inputs always
/// address the same record, which is how both lookup and uniqueness work.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerKey {
    pub namespace: Namespace,
    pub parts: Vec<String>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    Member(Address),
    Record(LedgerKey),
    VersionCount(LedgerKey),
    Version(LedgerKey, u32),
}

pub fn make_key(env: &Env, namespace: Namespace, parts: &[&String]) -> LedgerKey {
    let mut key_parts = Vec::new(env);
    for part in parts.iter() {
        key_parts.push_back((*part).clone());
    }
    LedgerKey {
        namespace,
        parts: key_parts,
    }
}

pub fn company_key(env: &Env, crn: &String) -> LedgerKey {
    make_key(env, Namespace::Company, &[crn])
}

pub fn drug_key(env: &Env, name: &String, serial: &String) -> LedgerKey {
    make_key(env, Namespace::Drug, &[name, serial])
}

pub fn order_key(env: &Env, buyer_crn: &String, drug_name: &String) -> LedgerKey {
    make_key(env, Namespace::Order, &[buyer_crn, drug_name])
}

pub fn shipment_key(env: &Env, buyer_crn: &String, drug_name: &String) -> LedgerKey {
    make_key(env, Namespace::Shipment, &[buyer_crn, drug_name])
}

/// Joins parts with `-` into a human readable entity id.
pub fn derive_id(env: &Env, parts: &[&String]) -> Result<String, PharmaNetError> {
    let mut buf = [0u8; MAX_ID_LEN];
    let mut len = 0usize;

    for (i, part) in parts.iter().enumerate() {
        let part_len = part.len() as usize;
        if part_len == 0 {
            return Err(PharmaNetError::InvalidInput);
        }
        let sep = if i == 0 { 0 } else { 1 };
        if len + sep + part_len > MAX_ID_LEN {
            return Err(PharmaNetError::InvalidInput);
        }
        if sep == 1 {
            buf[len] = ID_SEPARATOR;
            len += 1;
        }
        part.copy_into_slice(&mut buf[len..len + part_len]);
        len += part_len;
    }

    if len == 0 {
        return Err(PharmaNetError::InvalidInput);
    }
    Ok(String::from_bytes(env, &buf[..len]))
}

pub fn has_record(env: &Env, key: &LedgerKey) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Record(key.clone()))
}

// Admin and membership
pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_member(env: &Env, member: &Address) -> Option<Organization> {
    env.storage()
        .instance()
        .get(&DataKey::Member(member.clone()))
}

pub fn set_member(env: &Env, member: &Address, organization: &Organization) {
    env.storage()
        .instance()
        .set(&DataKey::Member(member.clone()), organization);
}

pub fn remove_member(env: &Env, member: &Address) {
    env.storage()
        .instance()
        .remove(&DataKey::Member(member.clone()));
}

// Companies
pub fn get_company(env: &Env, crn: &String) -> Option<Company> {
    env.storage()
        .persistent()
        .get(&DataKey::Record(company_key(env, crn)))
}

pub fn set_company(env: &Env, company: &Company) {
    env.storage()
        .persistent()
        .set(&DataKey::Record(company_key(env, &company.crn)), company);
}

// Drugs
pub fn get_drug(env: &Env, name: &String, serial: &String) -> Option<Drug> {
    env.storage()
        .persistent()
        .get(&DataKey::Record(drug_key(env, name, serial)))
}

/// Writes the current drug record and appends it to the key's version log.
pub fn put_drug(env: &Env, drug: &Drug) {
    let key = drug_key(env, &drug.name, &drug.serial);
    let storage = env.storage().persistent();

    storage.set(&DataKey::Record(key.clone()), drug);

    let version = version_count(env, &key) + 1;
    let snapshot = DrugSnapshot {
        version,
        timestamp: env.ledger().timestamp(),
        ledger: env.ledger().sequence(),
        drug: drug.clone(),
    };
    storage.set(&DataKey::Version(key.clone(), version), &snapshot);
    storage.set(&DataKey::VersionCount(key), &version);
}

pub fn version_count(env: &Env, key: &LedgerKey) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::VersionCount(key.clone()))
        .unwrap_or(0u32)
}

/// Every recorded version of the drug, oldest first. Re-read from storage
/// on each call.
pub fn drug_history(env: &Env, name: &String, serial: &String) -> Vec<DrugSnapshot> {
    let key = drug_key(env, name, serial);
    let count = version_count(env, &key);
    let mut history = Vec::new(env);

    for version in 1..=count {
        if let Some(snapshot) = env
            .storage()
            .persistent()
            .get::<_, DrugSnapshot>(&DataKey::Version(key.clone(), version))
        {
            history.push_back(snapshot);
        }
    }

    history
}

// Purchase orders
pub fn get_order(env: &Env, buyer_crn: &String, drug_name: &String) -> Option<PurchaseOrder> {
    env.storage()
        .persistent()
        .get(&DataKey::Record(order_key(env, buyer_crn, drug_name)))
}

pub fn set_order(env: &Env, order: &PurchaseOrder) {
    env.storage().persistent().set(
        &DataKey::Record(order_key(env, &order.buyer, &order.drug_name)),
        order,
    );
}

// Shipments
pub fn get_shipment(env: &Env, buyer_crn: &String, drug_name: &String) -> Option<Shipment> {
    env.storage()
        .persistent()
        .get(&DataKey::Record(shipment_key(env, buyer_crn, drug_name)))
}

pub fn set_shipment(env: &Env, shipment: &Shipment) {
    env.storage().persistent().set(
        &DataKey::Record(shipment_key(env, &shipment.buyer, &shipment.drug_name)),
        shipment,
    );
}
