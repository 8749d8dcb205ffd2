use crate::error::PharmaNetError;
use crate::events;
use crate::storage;
use crate::types::{Company, Role};
use soroban_sdk::{Env, String};

const MAX_ROLE_LEN: usize = 16;

/// Maps a role name to its `Role`. Distributors may also be registered
/// under the lowercase "distributor" used by existing network clients.
pub fn parse_role(role: &String) -> Result<Role, PharmaNetError> {
    let len = role.len() as usize;
    if len == 0 || len > MAX_ROLE_LEN {
        return Err(PharmaNetError::InvalidRole);
    }

    let mut buf = [0u8; MAX_ROLE_LEN];
    role.copy_into_slice(&mut buf[..len]);

    match &buf[..len] {
        b"Manufacturer" => Ok(Role::Manufacturer),
        b"Distributor" | b"distributor" => Ok(Role::Distributor),
        b"Retailer" => Ok(Role::Retailer),
        b"Transporter" => Ok(Role::Transporter),
        _ => Err(PharmaNetError::InvalidRole),
    }
}

pub fn register(
    env: &Env,
    crn: String,
    name: String,
    location: String,
    role: String,
) -> Result<Company, PharmaNetError> {
    let role = parse_role(&role)?;
    let id = storage::derive_id(env, &[&crn, &name])?;

    if storage::has_record(env, &storage::company_key(env, &crn)) {
        return Err(PharmaNetError::DuplicateEntity);
    }

    let company = Company {
        id,
        crn: crn.clone(),
        name: name.clone(),
        location,
        role,
        hierarchy_rank: role.hierarchy_rank(),
        registered_at: env.ledger().timestamp(),
    };
    storage::set_company(env, &company);

    events::emit_company_registered(env, crn, name, role, company.hierarchy_rank);

    Ok(company)
}

pub fn lookup(env: &Env, crn: &String) -> Result<Company, PharmaNetError> {
    storage::get_company(env, crn).ok_or(PharmaNetError::CompanyNotFound)
}
