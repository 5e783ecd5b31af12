// Domain-driven module structure for irqtail.

// Core parsing
pub mod parser;

// Enrichment collaborators
pub mod enrich;

// Driver
pub mod cli;
pub mod error;
pub mod format;
pub mod runtime;
