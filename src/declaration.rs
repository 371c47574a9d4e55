//! Module declarations
//!
//! A loadable unit exposes exactly one well-known entry point that returns a
//! [`ModuleDeclaration`]: the unit's canonical name, a constructor for its
//! implementation, and the contract surface it claims to override. The
//! scanner registers and validates units purely through this declaration, so
//! no symbol-table introspection is ever needed.

use bitflags::bitflags;

use crate::traits::{Module, ModuleError};

/// ABI version of the declaration surface.
///
/// Plugin libraries built against a different version are rejected at load
/// time rather than trusted to share a layout with the host.
pub const MODULE_ABI_VERSION: u32 = 1;

/// Constructor for a module implementation. Must succeed with no arguments;
/// the scanner calls it once as a smoke test and the resolver calls it for
/// every pipeline step, so instances are never shared.
pub type Constructor = fn() -> Result<Box<dyn Module>, ModuleError>;

/// The well-known entry point every loadable unit exposes.
pub type EntryFn = fn() -> Result<ModuleDeclaration, ModuleError>;

bitflags! {
    /// Contract methods a unit can declare it overrides.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ContractMethods: u16 {
        // Customizable surface: every end-user module overrides these.
        const CREATE_SETTINGS = 1 << 0;
        const SETTINGS        = 1 << 1;
        const RUN             = 1 << 2;

        // Reserved framework mechanics: overriding any of these means the
        // unit is customizing bookkeeping the framework owns.
        const INIT            = 1 << 3;
        const APPLY_SETTINGS  = 1 << 4;
        const FROM_SNAPSHOT   = 1 << 5;
        const SELF_TEST       = 1 << 6;
        const CLASS_IDENTITY  = 1 << 7;
    }
}

impl ContractMethods {
    /// Methods every end-user module must override.
    pub fn required() -> Self {
        Self::CREATE_SETTINGS | Self::SETTINGS | Self::RUN
    }

    /// Methods no module may override.
    pub fn reserved() -> Self {
        Self::INIT
            | Self::APPLY_SETTINGS
            | Self::FROM_SNAPSHOT
            | Self::SELF_TEST
            | Self::CLASS_IDENTITY
    }

    /// Human-readable name for a single method flag, for violation messages.
    pub fn method_name(flag: Self) -> &'static str {
        if flag == Self::CREATE_SETTINGS {
            "create_settings"
        } else if flag == Self::SETTINGS {
            "settings"
        } else if flag == Self::RUN {
            "run"
        } else if flag == Self::INIT {
            "init"
        } else if flag == Self::APPLY_SETTINGS {
            "apply_settings"
        } else if flag == Self::FROM_SNAPSHOT {
            "from_snapshot"
        } else if flag == Self::SELF_TEST {
            "self_test"
        } else if flag == Self::CLASS_IDENTITY {
            "class_identity"
        } else {
            "unknown"
        }
    }
}

/// What a loadable unit reports about itself through its entry point.
#[derive(Debug, Clone)]
pub struct ModuleDeclaration {
    /// Canonical name the unit registers under.
    pub name: String,
    /// Raw revision marker carried by the unit, if any
    /// (e.g. `$Revision: 10987 $`).
    pub revision: Option<String>,
    /// No-argument constructor for the implementation.
    pub constructor: Constructor,
    /// Contract methods the implementation overrides.
    pub overrides: ContractMethods,
    /// Opt out of override checking. For internal base units that are not
    /// end-user modules.
    pub skip_contract_check: bool,
    /// ABI version the unit was built against.
    pub abi_version: u32,
}

impl ModuleDeclaration {
    /// Declaration for a well-behaved end-user module: overrides exactly the
    /// required surface, current ABI, no revision marker.
    pub fn new(name: impl Into<String>, constructor: Constructor) -> Self {
        Self {
            name: name.into(),
            revision: None,
            constructor,
            overrides: ContractMethods::required(),
            skip_contract_check: false,
            abi_version: MODULE_ABI_VERSION,
        }
    }

    /// Attach a raw revision marker.
    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = Some(revision.into());
        self
    }

    /// Replace the declared override set.
    pub fn with_overrides(mut self, overrides: ContractMethods) -> Self {
        self.overrides = overrides;
        self
    }

    /// Mark the unit as exempt from override checking.
    pub fn skip_contract_check(mut self) -> Self {
        self.skip_contract_check = true;
        self
    }
}
