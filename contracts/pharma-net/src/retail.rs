use crate::access;
use crate::company;
use crate::error::PharmaNetError;
use crate::events;
use crate::storage;
use crate::types::{Drug, Owner, Role};
use soroban_sdk::{Address, Env, String};

/// Sells a unit to an end consumer. The consumer reference is external to
/// the network and no further custody change is defined after this.
pub fn retail(
    env: &Env,
    caller: &Address,
    drug_name: String,
    serial: String,
    retailer_crn: String,
    consumer_ref: String,
) -> Result<Drug, PharmaNetError> {
    access::authorize(env, caller, access::RETAIL)?;

    if consumer_ref.len() == 0 {
        return Err(PharmaNetError::InvalidInput);
    }

    if company::lookup(env, &retailer_crn)?.role != Role::Retailer {
        return Err(PharmaNetError::InvalidParty);
    }

    let mut drug =
        storage::get_drug(env, &drug_name, &serial).ok_or(PharmaNetError::DrugNotFound)?;

    let retailer = Owner::Company(retailer_crn.clone());
    if drug.owner != retailer {
        return Err(PharmaNetError::NotOwner);
    }

    let consumer = Owner::Consumer(consumer_ref.clone());
    drug.owner = consumer.clone();
    storage::put_drug(env, &drug);

    events::emit_custody_transferred(env, drug.id.clone(), retailer, consumer);
    events::emit_drug_retailed(env, drug.id.clone(), retailer_crn, consumer_ref);

    Ok(drug)
}
