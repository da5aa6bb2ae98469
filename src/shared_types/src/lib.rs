//! Generated Shell bindings for `plug-panel-core`; see `build.rs`.
