use crate::access;
use crate::error::PharmaNetError;
use crate::events;
use crate::storage;
use crate::types::{Drug, Owner, Role, Shipment, ShipmentStatus};
use soroban_sdk::{Address, Env, Map, String, Vec};

fn has_duplicates(env: &Env, assets: &Vec<String>) -> bool {
    let mut seen: Map<String, bool> = Map::new(env);
    for serial in assets.iter() {
        if seen.contains_key(serial.clone()) {
            return true;
        }
        seen.set(serial, true);
    }
    false
}

/// Loads every drug named by `serials` and checks it is held by `holder`.
/// Nothing is written, so a failure here leaves all custody untouched.
fn load_held_drugs(
    env: &Env,
    drug_name: &String,
    serials: &Vec<String>,
    holder: &Owner,
) -> Result<Vec<Drug>, PharmaNetError> {
    let mut drugs = Vec::new(env);
    for serial in serials.iter() {
        let drug =
            storage::get_drug(env, drug_name, &serial).ok_or(PharmaNetError::DrugNotFound)?;
        if drug.owner != *holder {
            return Err(PharmaNetError::NotOwner);
        }
        drugs.push_back(drug);
    }
    Ok(drugs)
}

pub fn create_shipment(
    env: &Env,
    caller: &Address,
    buyer_crn: String,
    drug_name: String,
    assets: Vec<String>,
    transporter_crn: String,
) -> Result<Shipment, PharmaNetError> {
    access::authorize(env, caller, access::CREATE_SHIPMENT)?;

    if storage::get_company(env, &buyer_crn).is_none() {
        return Err(PharmaNetError::InvalidParty);
    }
    let transporter =
        storage::get_company(env, &transporter_crn).ok_or(PharmaNetError::InvalidParty)?;
    if transporter.role != Role::Transporter {
        return Err(PharmaNetError::InvalidParty);
    }

    let order =
        storage::get_order(env, &buyer_crn, &drug_name).ok_or(PharmaNetError::OrderNotFound)?;
    if assets.len() != order.quantity {
        return Err(PharmaNetError::QuantityMismatch);
    }
    if has_duplicates(env, &assets) {
        return Err(PharmaNetError::DuplicateAsset);
    }

    if storage::has_record(env, &storage::shipment_key(env, &buyer_crn, &drug_name)) {
        return Err(PharmaNetError::DuplicateEntity);
    }
    let id = storage::derive_id(env, &[&buyer_crn, &drug_name])?;

    let seller = Owner::Company(order.seller.clone());
    let drugs = load_held_drugs(env, &drug_name, &assets, &seller)?;

    let custodian = Owner::Company(transporter_crn.clone());
    for mut drug in drugs.iter() {
        let previous = drug.owner.clone();
        drug.owner = custodian.clone();
        storage::put_drug(env, &drug);
        events::emit_custody_transferred(env, drug.id.clone(), previous, custodian.clone());
    }

    let shipment = Shipment {
        id: id.clone(),
        creator: order.seller,
        buyer: buyer_crn,
        drug_name,
        assets: assets.clone(),
        transporter: transporter_crn.clone(),
        status: ShipmentStatus::InTransit,
        created_at: env.ledger().timestamp(),
        delivered_at: None,
    };
    storage::set_shipment(env, &shipment);

    events::emit_shipment_created(
        env,
        id,
        shipment.creator.clone(),
        transporter_crn,
        assets,
    );

    Ok(shipment)
}

pub fn update_shipment(
    env: &Env,
    caller: &Address,
    buyer_crn: String,
    drug_name: String,
    transporter_crn: String,
) -> Result<Shipment, PharmaNetError> {
    access::authorize(env, caller, access::UPDATE_SHIPMENT)?;

    let mut shipment = storage::get_shipment(env, &buyer_crn, &drug_name)
        .ok_or(PharmaNetError::ShipmentNotFound)?;

    if shipment.status == ShipmentStatus::Delivered {
        return Err(PharmaNetError::ShipmentDelivered);
    }
    if shipment.transporter != transporter_crn {
        return Err(PharmaNetError::InvalidParty);
    }

    let holder = Owner::Company(shipment.transporter.clone());
    let drugs = load_held_drugs(env, &drug_name, &shipment.assets, &holder)?;

    let recipient = Owner::Company(shipment.buyer.clone());
    for mut drug in drugs.iter() {
        drug.shipments.push_back(shipment.id.clone());
        drug.owner = recipient.clone();
        storage::put_drug(env, &drug);
        events::emit_custody_transferred(env, drug.id.clone(), holder.clone(), recipient.clone());
    }

    shipment.status = ShipmentStatus::Delivered;
    shipment.delivered_at = Some(env.ledger().timestamp());
    storage::set_shipment(env, &shipment);

    events::emit_shipment_delivered(env, shipment.id.clone(), shipment.buyer.clone());

    Ok(shipment)
}

pub fn get_shipment(
    env: &Env,
    buyer_crn: &String,
    drug_name: &String,
) -> Result<Shipment, PharmaNetError> {
    storage::get_shipment(env, buyer_crn, drug_name).ok_or(PharmaNetError::ShipmentNotFound)
}
