// Generation core: task descriptors → prompt rendering → gateway dispatch,
// plus the keyword-overlap ATS estimate.
// All LLM calls go through llm_client via the gateway; nothing here talks HTTP.

pub mod ats_score;
pub mod builder;
pub mod gateway;
pub mod handlers;
pub mod prompts;
pub mod tasks;
