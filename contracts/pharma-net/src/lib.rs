#![no_std]

mod access;
mod company;
mod drug;
mod error;
mod events;
mod order;
mod retail;
mod shipment;
mod storage;
mod types;

#[cfg(test)]
mod tests;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub use error::*;
pub use events::*;
pub use storage::{LedgerKey, Namespace};
pub use types::*;

#[contract]
pub struct PharmaNet;

#[contractimpl]
impl PharmaNet {
    /// Initialize the network with the admin that enrolls members
    pub fn initialize(env: Env, admin: Address) -> Result<(), PharmaNetError> {
        admin.require_auth();
        access::initialize(&env, &admin)
    }

    /// Enroll an address into an organization, replacing any earlier enrolment
    pub fn enroll_member(
        env: Env,
        admin: Address,
        member: Address,
        organization: Organization,
    ) -> Result<(), PharmaNetError> {
        admin.require_auth();
        access::enroll_member(&env, &admin, &member, organization)
    }

    pub fn revoke_member(env: Env, admin: Address, member: Address) -> Result<(), PharmaNetError> {
        admin.require_auth();
        access::revoke_member(&env, &admin, &member)
    }

    pub fn get_member(env: Env, member: Address) -> Option<Organization> {
        storage::get_member(&env, &member)
    }

    /// Register a supply chain participant. Open to any caller.
    pub fn register_company(
        env: Env,
        crn: String,
        name: String,
        location: String,
        role: String,
    ) -> Result<Company, PharmaNetError> {
        company::register(&env, crn, name, location, role)
    }

    pub fn get_company(env: Env, crn: String) -> Result<Company, PharmaNetError> {
        company::lookup(&env, &crn)
    }

    /// Register a new drug unit, owned by its manufacturer
    pub fn add_drug(
        env: Env,
        caller: Address,
        drug_name: String,
        serial: String,
        mfg_date: u64,
        exp_date: u64,
        manufacturer_crn: String,
    ) -> Result<Drug, PharmaNetError> {
        caller.require_auth();
        drug::create(
            &env,
            &caller,
            drug_name,
            serial,
            mfg_date,
            exp_date,
            manufacturer_crn,
        )
    }

    /// Create a purchase order from a buyer to the tier directly above it
    pub fn create_po(
        env: Env,
        caller: Address,
        buyer_crn: String,
        seller_crn: String,
        drug_name: String,
        quantity: u32,
    ) -> Result<PurchaseOrder, PharmaNetError> {
        caller.require_auth();
        order::create_order(&env, &caller, buyer_crn, seller_crn, drug_name, quantity)
    }

    pub fn get_order(
        env: Env,
        buyer_crn: String,
        drug_name: String,
    ) -> Result<PurchaseOrder, PharmaNetError> {
        order::get_order(&env, &buyer_crn, &drug_name)
    }

    /// Ship the ordered units, handing custody to the transporter
    pub fn create_shipment(
        env: Env,
        caller: Address,
        buyer_crn: String,
        drug_name: String,
        assets: Vec<String>,
        transporter_crn: String,
    ) -> Result<Shipment, PharmaNetError> {
        caller.require_auth();
        shipment::create_shipment(&env, &caller, buyer_crn, drug_name, assets, transporter_crn)
    }

    /// Mark a shipment delivered, handing custody to the buyer
    pub fn update_shipment(
        env: Env,
        caller: Address,
        buyer_crn: String,
        drug_name: String,
        transporter_crn: String,
    ) -> Result<Shipment, PharmaNetError> {
        caller.require_auth();
        shipment::update_shipment(&env, &caller, buyer_crn, drug_name, transporter_crn)
    }

    pub fn get_shipment(
        env: Env,
        buyer_crn: String,
        drug_name: String,
    ) -> Result<Shipment, PharmaNetError> {
        shipment::get_shipment(&env, &buyer_crn, &drug_name)
    }

    /// Sell a unit held by the retailer to an end consumer
    pub fn retail_drug(
        env: Env,
        caller: Address,
        drug_name: String,
        serial: String,
        retailer_crn: String,
        consumer_ref: String,
    ) -> Result<Drug, PharmaNetError> {
        caller.require_auth();
        retail::retail(&env, &caller, drug_name, serial, retailer_crn, consumer_ref)
    }

    /// Every recorded version of a drug, oldest first
    pub fn view_history(
        env: Env,
        drug_name: String,
        serial: String,
    ) -> Result<Vec<DrugSnapshot>, PharmaNetError> {
        drug::history(&env, &drug_name, &serial)
    }

    pub fn view_drug_current_state(
        env: Env,
        drug_name: String,
        serial: String,
    ) -> Result<Drug, PharmaNetError> {
        drug::current_state(&env, &drug_name, &serial)
    }
}
