use crate::access;
use crate::error::PharmaNetError;
use crate::events;
use crate::storage;
use crate::types::{Company, PurchaseOrder};
use soroban_sdk::{Address, Env, String};

/// A buyer may only purchase from the tier directly upstream of it.
/// Unranked companies (transporters) never qualify on either side.
pub fn is_adjacent_tier(buyer: &Company, seller: &Company) -> bool {
    match (buyer.hierarchy_rank, seller.hierarchy_rank) {
        (Some(buyer_rank), Some(seller_rank)) => buyer_rank == seller_rank + 1,
        _ => false,
    }
}

pub fn create_order(
    env: &Env,
    caller: &Address,
    buyer_crn: String,
    seller_crn: String,
    drug_name: String,
    quantity: u32,
) -> Result<PurchaseOrder, PharmaNetError> {
    access::authorize(env, caller, access::CREATE_ORDER)?;

    if quantity == 0 {
        return Err(PharmaNetError::InvalidQuantity);
    }

    let id = storage::derive_id(env, &[&buyer_crn, &drug_name])?;

    let buyer = storage::get_company(env, &buyer_crn).ok_or(PharmaNetError::InvalidParty)?;
    let seller = storage::get_company(env, &seller_crn).ok_or(PharmaNetError::InvalidParty)?;

    if !is_adjacent_tier(&buyer, &seller) {
        return Err(PharmaNetError::HierarchyViolation);
    }

    if storage::has_record(env, &storage::order_key(env, &buyer_crn, &drug_name)) {
        return Err(PharmaNetError::DuplicateEntity);
    }

    let order = PurchaseOrder {
        id: id.clone(),
        drug_name,
        quantity,
        buyer: buyer_crn.clone(),
        seller: seller_crn.clone(),
        created_at: env.ledger().timestamp(),
    };
    storage::set_order(env, &order);

    events::emit_order_created(env, id, buyer_crn, seller_crn, quantity);

    Ok(order)
}

pub fn get_order(
    env: &Env,
    buyer_crn: &String,
    drug_name: &String,
) -> Result<PurchaseOrder, PharmaNetError> {
    storage::get_order(env, buyer_crn, drug_name).ok_or(PharmaNetError::OrderNotFound)
}
