// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Assistant brand interpolated into every role framing ("As an expert ... using VMD AI").
pub const BRAND: &str = "VMD AI";
