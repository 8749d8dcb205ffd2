use crate::access;
use crate::company;
use crate::error::PharmaNetError;
use crate::events;
use crate::storage;
use crate::types::{Drug, DrugSnapshot, Owner, Role};
use soroban_sdk::{Address, Env, String, Vec};

pub fn is_valid_date(manufacturing_date: u64, expiry_date: u64) -> bool {
    manufacturing_date < expiry_date
}

pub fn create(
    env: &Env,
    caller: &Address,
    name: String,
    serial: String,
    manufacturing_date: u64,
    expiry_date: u64,
    manufacturer_crn: String,
) -> Result<Drug, PharmaNetError> {
    access::authorize(env, caller, access::ADD_DRUG)?;

    let id = storage::derive_id(env, &[&name, &serial])?;

    if !is_valid_date(manufacturing_date, expiry_date) {
        return Err(PharmaNetError::InvalidDate);
    }

    let manufacturer = company::lookup(env, &manufacturer_crn)?;
    if manufacturer.role != Role::Manufacturer {
        return Err(PharmaNetError::InvalidParty);
    }

    if storage::has_record(env, &storage::drug_key(env, &name, &serial)) {
        return Err(PharmaNetError::DuplicateEntity);
    }

    let drug = Drug {
        id: id.clone(),
        name,
        serial,
        manufacturer: manufacturer_crn.clone(),
        manufacturing_date,
        expiry_date,
        owner: Owner::Company(manufacturer_crn.clone()),
        shipments: Vec::new(env),
    };
    storage::put_drug(env, &drug);

    events::emit_drug_added(env, id, manufacturer_crn, expiry_date);

    Ok(drug)
}

pub fn current_state(env: &Env, name: &String, serial: &String) -> Result<Drug, PharmaNetError> {
    storage::get_drug(env, name, serial).ok_or(PharmaNetError::DrugNotFound)
}

pub fn history(
    env: &Env,
    name: &String,
    serial: &String,
) -> Result<Vec<DrugSnapshot>, PharmaNetError> {
    let history = storage::drug_history(env, name, serial);
    if history.is_empty() {
        return Err(PharmaNetError::DrugNotFound);
    }
    Ok(history)
}
