//! Persistent user-preference flags with pluggable settings backends.
//!
//! This crate records small per-user preference values in a key-value
//! settings store and exposes the one flag the host application cares
//! about: whether the user has already seen the onboarding tutorial.
//! It can be embedded in any application that needs a settings file.

pub mod storage;
pub mod tutorial;

pub use storage::{
    LocalPrefStore, MemoryPrefStore, PrefStore, StoreConfig, StoreError, StoreResult, create_store,
};
pub use tutorial::TutorialFlagStore;
