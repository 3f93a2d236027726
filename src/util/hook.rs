use color_eyre::config::HookBuilder;

use crate::ui::tui;

/// Installs panic and error report hooks that hand the terminal back before
/// anything is printed.
pub fn set_panic_hook() -> color_eyre::Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default()
        .display_location_section(true)
        .into_hooks();

    let panic_hook = panic_hook.into_panic_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = tui::Tui::restore();
        tracing::error!("{}", panic_info);
        panic_hook(panic_info);
    }));

    let eyre_hook = eyre_hook.into_eyre_hook();
    color_eyre::eyre::set_hook(Box::new(move |error| {
        let _ = tui::Tui::restore();
        eyre_hook(error)
    }))?;

    Ok(())
}
