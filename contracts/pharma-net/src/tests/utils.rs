#![cfg(test)]

use crate::{Drug, Organization, PharmaNet, PharmaNetClient};
use soroban_sdk::{
    testutils::{Address as _, Events as _},
    Address, Env, IntoVal, String, Symbol, TryFromVal, Val, Vec,
};

pub const MANUFACTURER: &str = "MFR01";
pub const DISTRIBUTOR: &str = "DIS01";
pub const RETAILER: &str = "RET01";
pub const TRANSPORTER: &str = "TRA01";
pub const DRUG: &str = "Paracetamol";

// Jan 1 2024 / Jan 1 2026
pub const MFG_DATE: u64 = 1_704_067_200;
pub const EXP_DATE: u64 = 1_767_225_600;

pub struct TestContext {
    pub env: Env,
    pub client: PharmaNetClient<'static>,
    pub admin: Address,
    pub manufacturer: Address,
    pub distributor: Address,
    pub retailer: Address,
    pub transporter: Address,
}

impl TestContext {
    /// Initialized contract with one enrolled member per organization.
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let contract_id = env.register(PharmaNet, ());
        let client = PharmaNetClient::new(&env, &contract_id);

        let admin = Address::generate(&env);
        let manufacturer = Address::generate(&env);
        let distributor = Address::generate(&env);
        let retailer = Address::generate(&env);
        let transporter = Address::generate(&env);

        client.initialize(&admin);
        client.enroll_member(&admin, &manufacturer, &Organization::Manufacturer);
        client.enroll_member(&admin, &distributor, &Organization::Distributor);
        client.enroll_member(&admin, &retailer, &Organization::Retailer);
        client.enroll_member(&admin, &transporter, &Organization::Transporter);

        TestContext {
            env,
            client,
            admin,
            manufacturer,
            distributor,
            retailer,
            transporter,
        }
    }

    /// Same as `new`, with MFR01, DIS01, RET01 and TRA01 registered.
    pub fn with_companies() -> Self {
        let ctx = Self::new();
        ctx.register(MANUFACTURER, "Manufacturer");
        ctx.register(DISTRIBUTOR, "Distributor");
        ctx.register(RETAILER, "Retailer");
        ctx.register(TRANSPORTER, "Transporter");
        ctx
    }

    pub fn s(&self, value: &str) -> String {
        String::from_str(&self.env, value)
    }

    pub fn serials(&self, serials: &[&str]) -> Vec<String> {
        let mut out = Vec::new(&self.env);
        for serial in serials {
            out.push_back(self.s(serial));
        }
        out
    }

    /// Payloads of the recorded events whose first topic is `topic`, in
    /// publish order.
    pub fn events_named<T>(&self, topic: Symbol) -> Vec<T>
    where
        T: IntoVal<Env, Val> + TryFromVal<Env, Val>,
    {
        let mut out = Vec::new(&self.env);
        for (_, topics, data) in self.env.events().all().iter() {
            let name = topics
                .get(0)
                .and_then(|val| Symbol::try_from_val(&self.env, &val).ok());
            if name == Some(topic.clone()) {
                out.push_back(T::try_from_val(&self.env, &data).ok().unwrap());
            }
        }
        out
    }

    pub fn register(&self, crn: &str, role: &str) {
        self.client.register_company(
            &self.s(crn),
            &self.s(crn),
            &self.s("Mumbai"),
            &self.s(role),
        );
    }

    pub fn add_drug(&self, serial: &str) -> Drug {
        self.client.add_drug(
            &self.manufacturer,
            &self.s(DRUG),
            &self.s(serial),
            &MFG_DATE,
            &EXP_DATE,
            &self.s(MANUFACTURER),
        )
    }

    pub fn drug(&self, serial: &str) -> Drug {
        self.client
            .view_drug_current_state(&self.s(DRUG), &self.s(serial))
    }

    /// Drugs added, ordered by DIS01 from MFR01 and shipped through TRA01.
    pub fn ship_to_distributor(&self, serials: &[&str]) {
        for serial in serials {
            self.add_drug(serial);
        }
        self.client.create_po(
            &self.distributor,
            &self.s(DISTRIBUTOR),
            &self.s(MANUFACTURER),
            &self.s(DRUG),
            &(serials.len() as u32),
        );
        self.client.create_shipment(
            &self.manufacturer,
            &self.s(DISTRIBUTOR),
            &self.s(DRUG),
            &self.serials(serials),
            &self.s(TRANSPORTER),
        );
    }

    /// Shipped and delivered to DIS01.
    pub fn deliver_to_distributor(&self, serials: &[&str]) {
        self.ship_to_distributor(serials);
        self.client.update_shipment(
            &self.transporter,
            &self.s(DISTRIBUTOR),
            &self.s(DRUG),
            &self.s(TRANSPORTER),
        );
    }

    /// Delivered to DIS01, then ordered by RET01 and delivered to it.
    pub fn deliver_to_retailer(&self, serials: &[&str]) {
        self.deliver_to_distributor(serials);
        self.client.create_po(
            &self.retailer,
            &self.s(RETAILER),
            &self.s(DISTRIBUTOR),
            &self.s(DRUG),
            &(serials.len() as u32),
        );
        self.client.create_shipment(
            &self.distributor,
            &self.s(RETAILER),
            &self.s(DRUG),
            &self.serials(serials),
            &self.s(TRANSPORTER),
        );
        self.client.update_shipment(
            &self.transporter,
            &self.s(RETAILER),
            &self.s(DRUG),
            &self.s(TRANSPORTER),
        );
    }
}
