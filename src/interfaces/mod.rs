// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod figure;

pub use figure::Figure;
