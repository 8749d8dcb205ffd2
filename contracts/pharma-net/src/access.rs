use crate::error::PharmaNetError;
use crate::events;
use crate::storage;
use crate::types::Organization;
use soroban_sdk::{Address, Env};

pub const ADD_DRUG: &[Organization] = &[Organization::Manufacturer];
pub const CREATE_ORDER: &[Organization] = &[Organization::Distributor, Organization::Retailer];
pub const CREATE_SHIPMENT: &[Organization] =
    &[Organization::Distributor, Organization::Manufacturer];
pub const UPDATE_SHIPMENT: &[Organization] = &[Organization::Transporter];
pub const RETAIL: &[Organization] = &[Organization::Retailer];

/// Resolves the caller's organization and checks it against the allow-set
/// of the operation being invoked. Pure guard, no writes.
pub fn authorize(
    env: &Env,
    caller: &Address,
    allowed: &[Organization],
) -> Result<Organization, PharmaNetError> {
    let organization =
        storage::get_member(env, caller).ok_or(PharmaNetError::UnauthorizedOrg)?;

    if allowed.contains(&organization) {
        Ok(organization)
    } else {
        Err(PharmaNetError::UnauthorizedOrg)
    }
}

fn require_admin(env: &Env, admin: &Address) -> Result<(), PharmaNetError> {
    let stored = storage::get_admin(env).ok_or(PharmaNetError::NotInitialized)?;
    if stored != *admin {
        return Err(PharmaNetError::AdminOnly);
    }
    Ok(())
}

pub fn initialize(env: &Env, admin: &Address) -> Result<(), PharmaNetError> {
    if storage::has_admin(env) {
        return Err(PharmaNetError::AlreadyInitialized);
    }
    storage::set_admin(env, admin);
    Ok(())
}

pub fn enroll_member(
    env: &Env,
    admin: &Address,
    member: &Address,
    organization: Organization,
) -> Result<(), PharmaNetError> {
    require_admin(env, admin)?;
    storage::set_member(env, member, &organization);
    events::emit_member_enrolled(env, member.clone(), organization);
    Ok(())
}

pub fn revoke_member(env: &Env, admin: &Address, member: &Address) -> Result<(), PharmaNetError> {
    require_admin(env, admin)?;
    if storage::get_member(env, member).is_none() {
        return Err(PharmaNetError::MemberNotFound);
    }
    storage::remove_member(env, member);
    events::emit_member_revoked(env, member.clone());
    Ok(())
}
