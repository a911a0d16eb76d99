use soroban_sdk::{contracterror, contracttype, log, Address, Env, String, Symbol};

use crate::events;

/// Error categories for classifying failures.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Contract lifecycle misuse: calls before or repeated initialization.
    Lifecycle = 1,
    /// The caller lacks the role or grant the operation requires.
    Authorization = 2,
    /// A referenced patient, doctor or record does not exist.
    NotFound = 3,
    /// The operation would duplicate an existing identity or exhaust a counter.
    StateConflict = 4,
    /// Structurally invalid input, rejected before any state is touched.
    Validation = 5,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    AlreadyExists = 4,
    NotFound = 5,
    InvalidInput = 6,
    CounterOverflow = 7,
}

impl ContractError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized | ContractError::AlreadyInitialized => {
                ErrorCategory::Lifecycle
            }
            ContractError::Unauthorized => ErrorCategory::Authorization,
            ContractError::NotFound => ErrorCategory::NotFound,
            ContractError::AlreadyExists | ContractError::CounterOverflow => {
                ErrorCategory::StateConflict
            }
            ContractError::InvalidInput => ErrorCategory::Validation,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Ledger has not been initialized",
            ContractError::AlreadyInitialized => "Ledger is already initialized",
            ContractError::Unauthorized => "Caller is not authorized for this operation",
            ContractError::AlreadyExists => "Identity is already registered",
            ContractError::NotFound => "Referenced patient, doctor or record does not exist",
            ContractError::InvalidInput => "Invalid input parameters provided",
            ContractError::CounterOverflow => "Ledger counter has reached its maximum value",
        }
    }
}

/// Context attached to every reported failure.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ErrorContext {
    pub category: ErrorCategory,
    pub message: String,
    pub user: Option<Address>,
    pub operation: Symbol,
    pub timestamp: u64,
}

pub fn create_error_context(
    env: &Env,
    error: ContractError,
    user: Option<Address>,
    operation: Symbol,
) -> ErrorContext {
    ErrorContext {
        category: error.category(),
        message: String::from_str(env, error.message()),
        user,
        operation,
        timestamp: env.ledger().timestamp(),
    }
}

/// Publishes an `ERROR` event and a diagnostic log line for a failed
/// operation, then hands the error back for propagation.
///
/// Nothing is written to storage: the host discards every effect of a
/// failed invocation, so the failure stays visible only in diagnostics.
pub fn report(
    env: &Env,
    error: ContractError,
    user: Option<&Address>,
    operation: Symbol,
) -> ContractError {
    log!(env, "operation failed", operation.clone(), (error as u32));
    let context = create_error_context(env, error, user.cloned(), operation);
    events::publish_error(env, error as u32, context);
    error
}
