pub use mt_toolchain_spec_tables::{
    CHARGE_CODES, FieldSpec, MessageSpec, OPERATION_CODES, SpecTables, registry,
};
