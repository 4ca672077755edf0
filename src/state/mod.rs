//! Session-scoped UI state containers, passed explicitly rather than held
//! in globals.

/// Onboarding survey answers.
pub mod survey;
/// Light/dark preference.
pub mod theme;
