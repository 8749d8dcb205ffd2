use soroban_sdk::{contracttype, String, Vec};

/// Organizations a network member can be enrolled into.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Organization {
    Manufacturer,
    Distributor,
    Retailer,
    Transporter,
    Consumer,
}

/// Role a registered company plays in the supply chain.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Role {
    Manufacturer,
    Distributor,
    Retailer,
    Transporter,
}

impl Role {
    /// Tier used by purchase orders. Transporters move goods but never
    /// buy or sell, so they carry no rank.
    pub fn hierarchy_rank(&self) -> Option<u32> {
        match self {
            Role::Manufacturer => Some(1),
            Role::Distributor => Some(2),
            Role::Retailer => Some(3),
            Role::Transporter => None,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Company {
    pub id: String,
    pub crn: String,
    pub name: String,
    pub location: String,
    pub role: Role,
    pub hierarchy_rank: Option<u32>,
    pub registered_at: u64,
}

/// Current custodian of a drug unit. Registered companies are referenced
/// by CRN; once retailed the unit belongs to an external consumer id.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Owner {
    Company(String),
    Consumer(String),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Drug {
    pub id: String,
    pub name: String,
    pub serial: String,
    pub manufacturer: String,
    pub manufacturing_date: u64,
    pub expiry_date: u64,
    pub owner: Owner,
    pub shipments: Vec<String>,
}

/// One recorded version of a drug, as written by a single transaction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DrugSnapshot {
    pub version: u32,
    pub timestamp: u64,
    pub ledger: u32,
    pub drug: Drug,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PurchaseOrder {
    pub id: String,
    pub drug_name: String,
    pub quantity: u32,
    pub buyer: String,
    pub seller: String,
    pub created_at: u64,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ShipmentStatus {
    InTransit,
    Delivered,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Shipment {
    pub id: String,
    pub creator: String,
    pub buyer: String,
    pub drug_name: String,
    pub assets: Vec<String>,
    pub transporter: String,
    pub status: ShipmentStatus,
    pub created_at: u64,
    pub delivered_at: Option<u64>,
}
