use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PharmaNetError {
    // Initialization and membership
    AlreadyInitialized = 1,
    NotInitialized = 2,
    AdminOnly = 3,
    MemberNotFound = 4,
    UnauthorizedOrg = 5,

    // Registry
    InvalidRole = 10,
    DuplicateEntity = 11,
    CompanyNotFound = 12,
    DrugNotFound = 13,
    OrderNotFound = 14,
    ShipmentNotFound = 15,

    // Workflow
    InvalidParty = 20,
    HierarchyViolation = 21,
    QuantityMismatch = 22,
    NotOwner = 23,
    DuplicateAsset = 24,
    ShipmentDelivered = 25,

    // Validation
    InvalidInput = 30,
    InvalidDate = 31,
    InvalidQuantity = 32,
}
