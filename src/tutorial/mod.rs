//! Tutorial flag tracking.
//!
//! Records whether the user has already seen the onboarding tutorial, so
//! the host application shows it only on the first run. The flag lives in
//! a persistent settings store and survives process restarts.

mod store;

pub use store::TutorialFlagStore;
