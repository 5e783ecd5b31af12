// Optional enrichment collaborators. Both are opt-in: when no pid or
// reference binary is supplied, no OS query or external process runs.

pub mod symbol;
pub mod thread;

pub use symbol::{Addr2Line, SymbolCache, Symbolizer};
pub use thread::ThreadNames;
