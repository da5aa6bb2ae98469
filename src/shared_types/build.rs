use anyhow::Result;
use crux_core::typegen::TypeGen;
use plug_panel_core::{
    events::{ChannelEvent, ControlEvent, StatusEvent, UiEvent},
    types::{PowerState, Severity, SignalTone},
    App, Locale,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // domain event enums, so that every variant is traced
    gen.register_type::<ChannelEvent>()?;
    gen.register_type::<StatusEvent>()?;
    gen.register_type::<ControlEvent>()?;
    gen.register_type::<UiEvent>()?;

    gen.register_type::<Locale>()?;
    gen.register_type::<PowerState>()?;
    gen.register_type::<SignalTone>()?;
    gen.register_type::<Severity>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
